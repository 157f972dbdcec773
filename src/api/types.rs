use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ingredient text as sent by the backend: usually the free-text recipe
/// line, occasionally a list.
#[derive(Clone, Debug, PartialEq)]
pub enum IngredientText {
	Text(String),
	Items(Vec<String>),
}

/// String field; anything else reads as absent.
fn text(obj: &Value, key: &str) -> Option<String> {
	obj.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Identifier field, which some endpoints send as a number.
fn ident(obj: &Value, key: &str) -> Option<String> {
	match obj.get(key)? {
		Value::String(s) => Some(s.clone()),
		Value::Number(n) => Some(n.to_string()),
		_ => None,
	}
}

/// String items of an array field, skipping anything that is not a string.
fn strings(items: &[Value]) -> Vec<String> {
	items
		.iter()
		.filter_map(Value::as_str)
		.map(str::to_string)
		.collect()
}

/// Every field is read on its own, so one malformed field never hides the
/// rest of the cocktail.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct Cocktail {
	pub id: Option<String>,
	pub name: Option<String>,
	pub description: Option<String>,
	pub image: Option<String>,
	pub ingredients: Option<IngredientText>,
	pub parsed_ingredients: Option<Vec<String>>,
}

impl Cocktail {
	pub fn from_value(value: &Value) -> Self {
		Self {
			id: ident(value, "id"),
			name: text(value, "name"),
			description: text(value, "description"),
			image: text(value, "image"),
			ingredients: match value.get("ingredients") {
				Some(Value::String(s)) => Some(IngredientText::Text(s.clone())),
				Some(Value::Array(items)) => Some(IngredientText::Items(strings(items))),
				_ => None,
			},
			parsed_ingredients: value
				.get("parsed_ingredients")
				.and_then(Value::as_array)
				.map(|items| strings(items)),
		}
	}
}

impl From<Value> for Cocktail {
	fn from(value: Value) -> Self {
		Self::from_value(&value)
	}
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct Ingredient {
	pub id: Option<String>,
	pub name: Option<String>,
}

impl From<Value> for Ingredient {
	fn from(value: Value) -> Self {
		Self {
			id: ident(&value, "id"),
			name: text(&value, "name"),
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OptimizerResult {
	pub cocktail_count: u64,
	pub ingredients: Vec<String>,
	pub cocktails: Vec<Value>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SparqlRequest<'a> {
	pub query: &'a str,
}

/// Pre-computed graph views exposed under `/graphs/`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GraphKind {
	Basic,
	ForceDirected,
	Sparql,
	Centrality,
	Communities,
	Statistics,
	Components,
}

impl GraphKind {
	pub const ALL: [GraphKind; 7] = [
		GraphKind::Basic,
		GraphKind::ForceDirected,
		GraphKind::Sparql,
		GraphKind::Centrality,
		GraphKind::Communities,
		GraphKind::Statistics,
		GraphKind::Components,
	];

	pub fn slug(self) -> &'static str {
		match self {
			GraphKind::Basic => "basic",
			GraphKind::ForceDirected => "force-directed",
			GraphKind::Sparql => "sparql",
			GraphKind::Centrality => "centrality",
			GraphKind::Communities => "communities",
			GraphKind::Statistics => "statistics",
			GraphKind::Components => "components",
		}
	}

	pub fn from_slug(slug: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|kind| kind.slug() == slug)
	}

	pub fn title(self) -> &'static str {
		match self {
			GraphKind::Basic => "basic graph",
			GraphKind::ForceDirected => "force-directed graph",
			GraphKind::Sparql => "SPARQL graph",
			GraphKind::Centrality => "centrality graph",
			GraphKind::Communities => "community graph",
			GraphKind::Statistics => "graph statistics",
			GraphKind::Components => "graph components",
		}
	}

	/// Whether the payload is a node/edge list that can be drawn.
	pub fn is_drawable(self) -> bool {
		!matches!(self, GraphKind::Statistics | GraphKind::Components)
	}

	pub fn path(self) -> String {
		format!("graphs/{}", self.slug())
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn cocktail_decodes_backend_shape() {
		let cocktail: Cocktail = serde_json::from_value(json!({
			"uri": "http://dbpedia.org/resource/Mojito",
			"id": "mojito",
			"name": "Mojito",
			"image": null,
			"ingredients": "White rum, lime, mint, sugar, soda",
			"parsed_ingredients": ["White rum", "Lime", "Mint"],
			"source_link": "ignored"
		}))
		.unwrap();
		assert_eq!(cocktail.name.as_deref(), Some("Mojito"));
		assert_eq!(
			cocktail.ingredients,
			Some(IngredientText::Text("White rum, lime, mint, sugar, soda".into()))
		);
		assert!(cocktail.image.is_none());
	}

	#[test]
	fn malformed_fields_fall_back_one_by_one() {
		let cocktail = Cocktail::from_value(&json!({
			"id": 5,
			"name": "Mojito",
			"image": false,
			"ingredients": ["Rum", 2, null, "Mint"],
			"parsed_ingredients": "Rum"
		}));
		assert_eq!(cocktail.id.as_deref(), Some("5"));
		assert_eq!(cocktail.name.as_deref(), Some("Mojito"));
		assert!(cocktail.image.is_none());
		assert_eq!(
			cocktail.ingredients,
			Some(IngredientText::Items(vec!["Rum".into(), "Mint".into()]))
		);
		assert!(cocktail.parsed_ingredients.is_none());

		assert_eq!(Cocktail::from_value(&json!({ "name": 42 })), Cocktail::default());
		assert_eq!(Cocktail::from_value(&json!("not an object")), Cocktail::default());
	}

	#[test]
	fn one_bad_entry_keeps_the_list() {
		let cocktails: Vec<Cocktail> = serde_json::from_value(json!([
			{ "name": "Mojito", "id": 5 },
			{ "name": ["not", "a", "name"] },
			"garbage"
		]))
		.unwrap();
		assert_eq!(cocktails.len(), 3);
		assert_eq!(cocktails[0].name.as_deref(), Some("Mojito"));
		assert_eq!(cocktails[0].id.as_deref(), Some("5"));
		assert_eq!(cocktails[1], Cocktail::default());

		let ingredients: Vec<Ingredient> =
			serde_json::from_value(json!([{ "id": 12, "name": "Gin" }, { "name": null }])).unwrap();
		assert_eq!(ingredients[0].id.as_deref(), Some("12"));
		assert_eq!(ingredients[0].name.as_deref(), Some("Gin"));
		assert_eq!(ingredients[1], Ingredient::default());
	}

	#[test]
	fn optimizer_result_tolerates_missing_cocktails() {
		let result: OptimizerResult =
			serde_json::from_value(json!({ "cocktail_count": 3, "ingredients": ["Gin", "Lime"] }))
				.unwrap();
		assert_eq!(result.cocktail_count, 3);
		assert_eq!(result.ingredients, vec!["Gin", "Lime"]);
		assert!(result.cocktails.is_empty());
	}

	#[test]
	fn graph_kind_paths() {
		assert_eq!(GraphKind::ForceDirected.path(), "graphs/force-directed");
		assert_eq!(GraphKind::from_slug("communities"), Some(GraphKind::Communities));
		assert_eq!(GraphKind::from_slug("pagerank"), None);
		assert!(!GraphKind::Statistics.is_drawable());
		assert!(GraphKind::Centrality.is_drawable());
	}
}
