//! Canned DBpedia queries, sent verbatim through the backend.

use serde_json::Value;

use crate::api::ApiClient;

pub const COCKTAILS_QUERY: &str = r#"
PREFIX dbo: <http://dbpedia.org/ontology/>
PREFIX dbp: <http://dbpedia.org/property/>

SELECT ?cocktail ?ingredient WHERE {
    ?cocktail a dbo:Cocktail .
    ?cocktail dbp:ingredient ?ingredient .
}
"#;

pub const INGREDIENTS_QUERY: &str = r#"
PREFIX dbo: <http://dbpedia.org/ontology/>

SELECT ?ingredient WHERE {
    ?ingredient a dbo:Ingredient .
}
"#;

pub async fn query_cocktails(client: &ApiClient) -> Value {
	client.execute_sparql(COCKTAILS_QUERY).await
}

pub async fn query_ingredients(client: &ApiClient) -> Value {
	client.execute_sparql(INGREDIENTS_QUERY).await
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn queries_select_expected_variables() {
		assert!(COCKTAILS_QUERY.contains("SELECT ?cocktail ?ingredient"));
		assert!(COCKTAILS_QUERY.contains("a dbo:Cocktail"));
		assert!(INGREDIENTS_QUERY.contains("a dbo:Ingredient"));
		assert!(!INGREDIENTS_QUERY.contains("dbp:"));
	}
}
