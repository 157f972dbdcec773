use leptos::prelude::*;
use leptos_router::components::A;

/// 404 page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<section class="not-found">
			<h1>"Page introuvable"</h1>
			<A href="/">"Retour aux cocktails"</A>
		</section>
	}
}
