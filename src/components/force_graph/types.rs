use serde_json::Value;

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: String,
	pub label: Option<String>,
	pub color: Option<String>,
	pub group: Option<u32>,
	/// Relative importance in `[0, 1]`, e.g. a centrality score.
	pub weight: Option<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphLink {
	pub source: String,
	pub target: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}

/// Node ids arrive as strings or integers depending on the endpoint.
fn id_text(value: &Value) -> Option<String> {
	match value {
		Value::String(s) if !s.is_empty() => Some(s.clone()),
		Value::Number(n) => Some(n.to_string()),
		// d3-style links may embed the node object itself
		Value::Object(obj) => obj.get("id").and_then(id_text),
		_ => None,
	}
}

fn first<'a>(obj: &'a serde_json::Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
	keys.iter().find_map(|k| obj.get(*k).filter(|v| !v.is_null()))
}

impl GraphData {
	/// Reads a backend graph payload. Nodes without an id and links without
	/// both endpoints are skipped.
	pub fn from_payload(payload: &Value) -> Self {
		let mut nodes: Vec<GraphNode> = payload
			.get("nodes")
			.and_then(Value::as_array)
			.into_iter()
			.flatten()
			.filter_map(|node| match node {
				Value::Object(obj) => {
					let id = obj.get("id").and_then(id_text)?;
					Some(GraphNode {
						label: first(obj, &["label", "name"])
							.and_then(Value::as_str)
							.map(str::to_string)
							.or_else(|| Some(id.clone())),
						color: obj.get("color").and_then(Value::as_str).map(str::to_string),
						group: first(obj, &["group", "community"])
							.and_then(Value::as_u64)
							.map(|g| g as u32),
						weight: first(obj, &["centrality", "size", "weight"]).and_then(Value::as_f64),
						id,
					})
				}
				other => id_text(other).map(|id| GraphNode {
					label: Some(id.clone()),
					id,
					color: None,
					group: None,
					weight: None,
				}),
			})
			.collect();

		// Scale weights so the largest node gets 1.0.
		let max_weight = nodes
			.iter()
			.filter_map(|n| n.weight)
			.fold(0.0_f64, f64::max);
		if max_weight > 0.0 {
			for node in &mut nodes {
				node.weight = node.weight.map(|w| (w / max_weight).clamp(0.0, 1.0));
			}
		}

		let links = ["edges", "links"]
			.iter()
			.find_map(|key| payload.get(*key).and_then(Value::as_array))
			.into_iter()
			.flatten()
			.filter_map(|edge| {
				let (source, target) = match edge {
					Value::Array(pair) if pair.len() >= 2 => (&pair[0], &pair[1]),
					_ => (edge.get("source")?, edge.get("target")?),
				};
				Some(GraphLink {
					source: id_text(source)?,
					target: id_text(target)?,
				})
			})
			.collect();

		Self { nodes, links }
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}
}
