use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;
use serde_json::Value;

use crate::api::{ApiClient, GraphKind};
use crate::components::force_graph::{ForceGraphCanvas, GraphData};

/// Flattens a statistics-style payload into `(key, value)` lines.
fn summary_rows(payload: &Value) -> Vec<(String, String)> {
	match payload {
		Value::Object(map) => map
			.iter()
			.map(|(key, value)| {
				let text = match value {
					Value::String(s) => s.clone(),
					Value::Number(_) | Value::Bool(_) | Value::Null => value.to_string(),
					nested => serde_json::to_string(nested).unwrap_or_default(),
				};
				(key.clone(), text)
			})
			.collect(),
		_ => Vec::new(),
	}
}

/// What the graph page shows for one fetched `(kind, payload)` pair.
#[derive(Clone, Debug, PartialEq)]
enum GraphPanel {
	Unavailable(GraphKind),
	Empty,
	Drawing(GraphData),
	Summary(Value),
}

impl GraphPanel {
	fn new(kind: GraphKind, payload: Option<Value>) -> Self {
		match payload {
			None => GraphPanel::Unavailable(kind),
			Some(value) if kind.is_drawable() => {
				let data = GraphData::from_payload(&value);
				if data.is_empty() {
					GraphPanel::Empty
				} else {
					GraphPanel::Drawing(data)
				}
			}
			Some(value) => GraphPanel::Summary(value),
		}
	}
}

#[component]
fn Summary(payload: Value) -> impl IntoView {
	let rows = summary_rows(&payload);
	if rows.is_empty() {
		let pretty = serde_json::to_string_pretty(&payload).unwrap_or_default();
		return view! { <pre class="graph-json">{pretty}</pre> }.into_any();
	}
	view! {
		<dl class="graph-summary">
			{rows
				.into_iter()
				.map(|(key, value)| view! {
					<dt>{key}</dt>
					<dd>{value}</dd>
				})
				.collect_view()}
		</dl>
	}
	.into_any()
}

/// Browser for the pre-computed cocktail/ingredient graphs.
#[component]
pub fn Graphs() -> impl IntoView {
	let client = expect_context::<ApiClient>();
	let query = use_query_map();
	let kind = Memo::new(move |_| {
		query
			.with(|q| q.get("kind"))
			.and_then(|slug| GraphKind::from_slug(&slug))
			.unwrap_or(GraphKind::Basic)
	});

	// The kind travels with its payload so a stale payload is never read
	// under the newly selected kind.
	let fetched = LocalResource::new(move || {
		let (client, kind) = (client.clone(), kind.get());
		async move { (kind, client.graph(kind).await) }
	});

	view! {
		<section class="graphs">
			<h1>"Graphes"</h1>
			<nav class="graph-kinds">
				{GraphKind::ALL
					.into_iter()
					.map(|k| {
						view! {
							<A href=format!("/graphs?kind={}", k.slug())>
								<span class:active=move || kind.get() == k>{k.title()}</span>
							</A>
						}
					})
					.collect_view()}
			</nav>

			<Suspense fallback=|| view! { <p class="loading">"Chargement du graphe..."</p> }>
				{move || {
					fetched
						.get()
						.map(|(kind, payload)| match GraphPanel::new(kind, payload) {
							GraphPanel::Unavailable(kind) => {
								view! {
									<p class="empty">{format!("Impossible de charger le {}.", kind.title())}</p>
								}
									.into_any()
							}
							GraphPanel::Empty => view! { <p class="empty">"Graphe vide."</p> }.into_any(),
							GraphPanel::Drawing(data) => {
								let summary = format!("{} nœuds, {} liens", data.nodes.len(), data.links.len());
								view! {
									<p class="graph-size">{summary}</p>
									<div class="graph-frame">
										<ForceGraphCanvas data=Signal::derive(move || data.clone()) />
									</div>
								}
									.into_any()
							}
							GraphPanel::Summary(value) => view! { <Summary payload=value /> }.into_any(),
						})
				}}
			</Suspense>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn summary_rows_render_scalars_and_nested_values() {
		let rows = summary_rows(&json!({
			"density": 0.12,
			"name": "cocktails",
			"largest_component": [1, 2]
		}));
		assert!(rows.contains(&("density".into(), "0.12".into())));
		assert!(rows.contains(&("name".into(), "cocktails".into())));
		assert!(rows.contains(&("largest_component".into(), "[1,2]".into())));
		assert!(summary_rows(&json!([["a", "b"]])).is_empty());
	}

	#[test]
	fn panel_follows_the_kind_fetched_with_the_payload() {
		let basic = json!({ "nodes": [{ "id": "gin" }, { "id": "tonic" }], "edges": [["gin", "tonic"]] });
		match GraphPanel::new(GraphKind::Basic, Some(basic.clone())) {
			GraphPanel::Drawing(data) => {
				assert_eq!(data.nodes.len(), 2);
				assert_eq!(data.links.len(), 1);
			}
			other => panic!("expected a drawing, got {other:?}"),
		}
		assert_eq!(
			GraphPanel::new(GraphKind::Statistics, Some(basic)),
			GraphPanel::Summary(json!({ "nodes": [{ "id": "gin" }, { "id": "tonic" }], "edges": [["gin", "tonic"]] }))
		);
		assert_eq!(
			GraphPanel::new(GraphKind::Centrality, Some(json!({ "nodes": [] }))),
			GraphPanel::Empty
		);
		assert_eq!(
			GraphPanel::new(GraphKind::Communities, None),
			GraphPanel::Unavailable(GraphKind::Communities)
		);
	}
}
