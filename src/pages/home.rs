use leptos::prelude::*;

use crate::api::{ApiClient, Ingredient};
use crate::components::cocktail_card::{CocktailCardView, CocktailGrid};
use crate::render::CocktailCard;

fn ingredient_label(ingredient: &Ingredient) -> String {
	ingredient
		.name
		.as_deref()
		.or(ingredient.id.as_deref())
		.map(str::trim)
		.filter(|s| !s.is_empty())
		.unwrap_or("Ingrédient inconnu")
		.to_string()
}

/// Cocktail catalogue with search, a random pick, and the ingredient list.
#[component]
pub fn Home() -> impl IntoView {
	let client = expect_context::<ApiClient>();
	let (search, set_search) = signal(String::new());

	let cocktails = LocalResource::new({
		let client = client.clone();
		move || {
			let client = client.clone();
			let query = search.get().trim().to_string();
			async move {
				if query.is_empty() {
					client.cocktails().await
				} else {
					client.search_cocktails(&query).await
				}
			}
		}
	});

	let ingredients = LocalResource::new({
		let client = client.clone();
		move || {
			let client = client.clone();
			async move { client.ingredients().await }
		}
	});

	let random = Action::new_local(move |_: &()| {
		let client = client.clone();
		async move { client.random_cocktail().await }
	});

	view! {
		<div class="home">
			<section class="cocktails">
				<h1>"Cocktails"</h1>
				<div class="toolbar">
					<input
						type="search"
						placeholder="Rechercher un cocktail"
						prop:value=move || search.get()
						on:change=move |ev| set_search.set(event_target_value(&ev))
					/>
					<button on:click=move |_| {
						random.dispatch(());
					}>"Cocktail au hasard"</button>
				</div>

				{move || {
					random
						.value()
						.get()
						.flatten()
						.map(|cocktail| {
							view! {
								<div class="random-pick">
									<CocktailCardView card=CocktailCard::new(&cocktail, 0) />
								</div>
							}
						})
				}}

				<Suspense fallback=|| view! { <p class="loading">"Chargement des cocktails..."</p> }>
					{move || {
						cocktails
							.get()
							.map(|list| {
								view! {
									<CocktailGrid
										cards=CocktailCard::from_list(&list)
										empty="Aucun cocktail trouvé."
									/>
								}
							})
					}}
				</Suspense>
			</section>

			<section class="ingredients">
				<h2>"Ingrédients"</h2>
				<Suspense fallback=|| view! { <p class="loading">"Chargement des ingrédients..."</p> }>
					{move || {
						ingredients
							.get()
							.map(|list| {
								if list.is_empty() {
									return view! { <p class="empty">"Aucun ingrédient."</p> }.into_any();
								}
								view! {
									<ul class="ingredient-list">
										{list
											.iter()
											.map(|i| view! { <li>{ingredient_label(i)}</li> })
											.collect_view()}
									</ul>
								}
									.into_any()
							})
					}}
				</Suspense>
			</section>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ingredient_label_prefers_name() {
		let gin = Ingredient {
			id: Some("http://dbpedia.org/resource/Gin".into()),
			name: Some("Gin".into()),
			..Ingredient::default()
		};
		assert_eq!(ingredient_label(&gin), "Gin");

		let unnamed = Ingredient {
			id: Some("http://dbpedia.org/resource/Bitters".into()),
			name: Some(" ".into()),
			..Ingredient::default()
		};
		assert_eq!(ingredient_label(&unnamed), "Ingrédient inconnu");
		assert_eq!(ingredient_label(&Ingredient::default()), "Ingrédient inconnu");
	}
}
