use leptos::prelude::*;

use crate::render::{CocktailCard, PLACEHOLDER_IMAGE};

#[component]
pub fn CocktailCardView(card: CocktailCard) -> impl IntoView {
	let CocktailCard {
		name,
		image,
		ingredients,
		description,
		..
	} = card;
	let alt = name.clone();

	view! {
		<article class="cocktail-card">
			<img
				src=image
				alt=alt
				// Swap broken images for the placeholder once.
				on:error=move |ev| {
					let img: web_sys::HtmlImageElement = event_target(&ev);
					if img.src() != PLACEHOLDER_IMAGE {
						img.set_src(PLACEHOLDER_IMAGE);
					}
				}
			/>
			<h3>{name}</h3>
			<p class="ingredients">{ingredients}</p>
			{description.map(|d| view! { <p class="description">{d}</p> })}
		</article>
	}
}

/// Grid of cards, or the `empty` message when there is nothing to show.
#[component]
pub fn CocktailGrid(
	cards: Vec<CocktailCard>,
	#[prop(optional, into)] empty: Option<String>,
) -> impl IntoView {
	if cards.is_empty() {
		return empty
			.map(|message| view! { <p class="empty">{message}</p> })
			.into_any();
	}
	view! {
		<div class="cocktail-grid">
			<For
				each=move || cards.clone()
				key=|card| card.key.clone()
				children=|card| view! { <CocktailCardView card=card /> }
			/>
		</div>
	}
	.into_any()
}
