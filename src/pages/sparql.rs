use leptos::prelude::*;
use serde_json::Value;

use crate::api::ApiClient;
use crate::render::SparqlTable;
use crate::sparql::{COCKTAILS_QUERY, query_cocktails, query_ingredients};

#[derive(Clone, Debug)]
enum QueryRun {
	Cocktails,
	Ingredients,
	Custom(String),
}

#[component]
fn ResultTable(table: SparqlTable) -> impl IntoView {
	if table.is_empty() {
		return view! { <p class="empty">"Aucun résultat."</p> }.into_any();
	}
	let row_count = table.rows.len();
	view! {
		<p class="result-count">{format!("{row_count} résultat(s)")}</p>
		<table class="sparql-results">
			<thead>
				<tr>{table.columns.into_iter().map(|c| view! { <th>{c}</th> }).collect_view()}</tr>
			</thead>
			<tbody>
				{table
					.rows
					.into_iter()
					.map(|row| {
						view! { <tr>{row.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}</tr> }
					})
					.collect_view()}
			</tbody>
		</table>
	}
	.into_any()
}

/// Free-form SPARQL console plus the two canned queries.
#[component]
pub fn Sparql() -> impl IntoView {
	let client = expect_context::<ApiClient>();
	let (query, set_query) = signal(COCKTAILS_QUERY.trim().to_string());

	let run = Action::new_local(move |run: &QueryRun| {
		let (client, run) = (client.clone(), run.clone());
		async move {
			let value: Value = match run {
				QueryRun::Cocktails => query_cocktails(&client).await,
				QueryRun::Ingredients => query_ingredients(&client).await,
				QueryRun::Custom(text) => client.execute_sparql(&text).await,
			};
			SparqlTable::from_value(&value)
		}
	});
	let pending = run.pending();

	view! {
		<section class="sparql">
			<h1>"Requêtes SPARQL"</h1>
			<div class="toolbar">
				<button on:click=move |_| {
					run.dispatch(QueryRun::Cocktails);
				}>"Cocktails et ingrédients"</button>
				<button on:click=move |_| {
					run.dispatch(QueryRun::Ingredients);
				}>"Ingrédients"</button>
			</div>
			<textarea
				rows="10"
				prop:value=move || query.get()
				on:input=move |ev| set_query.set(event_target_value(&ev))
			/>
			<button
				disabled=move || pending.get() || query.with(|q| q.trim().is_empty())
				on:click=move |_| {
					run.dispatch(QueryRun::Custom(query.get_untracked()));
				}
			>
				"Exécuter"
			</button>

			{move || {
				if pending.get() {
					return view! { <p class="loading">"Requête en cours..."</p> }.into_any();
				}
				run.value().get().map(|table| view! { <ResultTable table=table /> }).into_any()
			}}
		</section>
	}
}
