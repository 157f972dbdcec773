use serde_json::{Map, Value};

/// Tabular view of a SPARQL JSON result.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SparqlTable {
	pub columns: Vec<String>,
	pub rows: Vec<Vec<String>>,
}

impl SparqlTable {
	/// Accepts the standard `{head, results: {bindings}}` document, optionally
	/// wrapped in the backend's `{"results": ...}` envelope, or a bare array of
	/// binding rows. Anything else yields an empty table.
	pub fn from_value(value: &Value) -> Self {
		let document = match value.get("results") {
			Some(inner) if inner.get("bindings").is_none() && inner.is_object() => inner,
			_ => value,
		};
		let bindings = match document {
			Value::Array(rows) => rows.as_slice(),
			_ => document
				.pointer("/results/bindings")
				.and_then(Value::as_array)
				.map(Vec::as_slice)
				.unwrap_or_default(),
		};

		let mut columns: Vec<String> = document
			.pointer("/head/vars")
			.and_then(Value::as_array)
			.map(|vars| {
				vars.iter()
					.filter_map(Value::as_str)
					.map(str::to_string)
					.collect()
			})
			.unwrap_or_default();
		let rows: Vec<&Map<String, Value>> = bindings.iter().filter_map(Value::as_object).collect();
		for row in &rows {
			for key in row.keys() {
				if !columns.iter().any(|c| c == key) {
					columns.push(key.clone());
				}
			}
		}

		let rows = rows
			.into_iter()
			.map(|row| {
				columns
					.iter()
					.map(|col| row.get(col).map(cell_text).unwrap_or_default())
					.collect()
			})
			.collect();
		Self { columns, rows }
	}

	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}
}

fn cell_text(cell: &Value) -> String {
	match cell {
		Value::Null => String::new(),
		Value::String(s) => s.clone(),
		Value::Object(term) => term.get("value").map(cell_text).unwrap_or_default(),
		other => other.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn reads_enveloped_result_document() {
		let table = SparqlTable::from_value(&json!({
			"results": {
				"head": { "vars": ["cocktail", "ingredient"] },
				"results": { "bindings": [
					{
						"cocktail": { "type": "uri", "value": "http://dbpedia.org/resource/Mojito" },
						"ingredient": { "type": "literal", "value": "Mint" }
					},
					{ "cocktail": { "type": "uri", "value": "http://dbpedia.org/resource/Gimlet" } }
				]}
			}
		}));
		assert_eq!(table.columns, vec!["cocktail", "ingredient"]);
		assert_eq!(
			table.rows,
			vec![
				vec!["http://dbpedia.org/resource/Mojito".to_string(), "Mint".to_string()],
				vec!["http://dbpedia.org/resource/Gimlet".to_string(), String::new()],
			]
		);
	}

	#[test]
	fn columns_come_from_bindings_without_head() {
		let table = SparqlTable::from_value(&json!({
			"results": { "bindings": [ { "ingredient": { "value": "Gin" } }, { "ingredient": { "value": null } } ] }
		}));
		assert_eq!(table.columns, vec!["ingredient"]);
		assert_eq!(table.rows, vec![vec!["Gin".to_string()], vec![String::new()]]);
	}

	#[test]
	fn failed_query_renders_empty() {
		assert!(SparqlTable::from_value(&Value::Null).is_empty());
		assert!(SparqlTable::from_value(&json!([])).is_empty());
		assert_eq!(SparqlTable::from_value(&json!("oops")), SparqlTable::default());
	}
}
