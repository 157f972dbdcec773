use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::api::{ApiClient, OptimizerResult};
use crate::components::cocktail_card::CocktailGrid;
use crate::render::CocktailCard;

const DEFAULT_INGREDIENTS: u32 = 5;
const OPTIMIZE_FAILED: &str = "Erreur lors de l'optimisation. Veuillez réessayer.";
const INVALID_COUNT: &str = "Veuillez saisir un nombre d'ingrédients supérieur à zéro.";

/// Blocking browser alert.
fn alert(message: &str) {
	if let Some(window) = web_sys::window() {
		let _ = window.alert_with_message(message);
	}
}

/// Accepts strictly positive integers only.
fn parse_ingredient_count(raw: &str) -> Option<u32> {
	raw.trim().parse::<u32>().ok().filter(|n| *n > 0)
}

/// The N sent to the backend, read from the field as submitted.
fn requested_count(raw: &str) -> Result<u32, &'static str> {
	parse_ingredient_count(raw).ok_or(INVALID_COUNT)
}

#[component]
fn OptimizerResults(result: OptimizerResult) -> impl IntoView {
	let cards = CocktailCard::from_values(&result.cocktails);
	view! {
		<div id="results-section">
			<p>
				"Cocktails réalisables : "
				<strong id="cocktail-count">{result.cocktail_count}</strong>
			</p>
			<ul id="selected-ingredients">
				{result.ingredients.into_iter().map(|i| view! { <li>{i}</li> }).collect_view()}
			</ul>
			<CocktailGrid cards=cards />
		</div>
	}
}

/// Picks the N ingredients covering the most cocktails, computed server-side.
#[component]
pub fn Optimizer() -> impl IntoView {
	let client = expect_context::<ApiClient>();
	let (count, set_count) = signal(DEFAULT_INGREDIENTS.to_string());

	let optimize = Action::new_local(move |n: &u32| {
		let (client, n) = (client.clone(), *n);
		async move {
			match client.optimize(n).await {
				Ok(result) => Some(result),
				Err(_) => {
					alert(OPTIMIZE_FAILED);
					None
				}
			}
		}
	});
	let pending = optimize.pending();
	let result = optimize.value();

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		match requested_count(&count.get_untracked()) {
			Ok(n) => {
				optimize.dispatch(n);
			}
			Err(message) => alert(message),
		}
	};

	view! {
		<section class="optimizer">
			<h1>"Optimiseur d'ingrédients"</h1>
			<form id="optimizer-form" on:submit=on_submit>
				<label for="num-ingredients">"Nombre d'ingrédients"</label>
				<input
					id="num-ingredients"
					type="number"
					min="1"
					step="1"
					required=true
					prop:value=move || count.get()
					on:input=move |ev| set_count.set(event_target_value(&ev))
				/>
				<button type="submit" disabled=move || pending.get()>"Optimiser"</button>
			</form>

			<Show when=move || pending.get()>
				<div id="loading-section">"Optimisation en cours..."</div>
			</Show>

			{move || {
				if pending.get() {
					return None;
				}
				result.get().flatten().map(|result| view! { <OptimizerResults result=result /> })
			}}
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ingredient_count_must_be_positive() {
		assert_eq!(parse_ingredient_count(" 8 "), Some(8));
		assert_eq!(parse_ingredient_count("0"), None);
		assert_eq!(parse_ingredient_count("-3"), None);
		assert_eq!(parse_ingredient_count("trois"), None);
	}

	#[test]
	fn cleared_field_is_rejected_not_replaced() {
		assert_eq!(requested_count(""), Err(INVALID_COUNT));
		assert_eq!(requested_count("   "), Err(INVALID_COUNT));
		assert_eq!(requested_count("0"), Err(INVALID_COUNT));
		assert_eq!(requested_count("12"), Ok(12));
	}
}
