//! MarmiTonic browser client: cocktail catalogue, ingredient optimizer,
//! SPARQL console and graph explorer over the MarmiTonic backend.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod api;
mod components;
mod config;
mod pages;
mod render;
mod sparql;

use crate::api::ApiClient;

// Top-Level pages
use crate::pages::graphs::Graphs;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;
use crate::pages::optimizer::Optimizer;
use crate::pages::sparql::Sparql;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// Top-level router; the backend client is shared with every page through
/// context.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	let client = ApiClient::default();
	info!("Using backend at {}", client.config().base_url);
	let backend = client.config().base_url.clone();
	provide_context(client);

	view! {
		<Html attr:lang="fr" attr:dir="ltr" attr:data-theme="light" />

		<Title text="MarmiTonic" />

		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<nav class="main-nav">
				<A href="/">"Cocktails"</A>
				<A href="/optimizer">"Optimiseur"</A>
				<A href="/sparql">"SPARQL"</A>
				<A href="/graphs">"Graphes"</A>
			</nav>
			<main>
				<Routes fallback=|| view! { <NotFound /> }>
					<Route path=path!("/") view=Home />
					<Route path=path!("/optimizer") view=Optimizer />
					<Route path=path!("/sparql") view=Sparql />
					<Route path=path!("/graphs") view=Graphs />
				</Routes>
			</main>
			<footer>{format!("API : {backend}")}</footer>
		</Router>
	}
}
