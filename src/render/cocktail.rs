use crate::api::{Cocktail, IngredientText};

pub const UNKNOWN_COCKTAIL: &str = "Cocktail Inconnu";
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x200?text=Cocktail";
pub const MISSING_INGREDIENTS: &str = "Ingrédients non disponibles";

/// Display-ready cocktail.
#[derive(Clone, Debug, PartialEq)]
pub struct CocktailCard {
	pub key: String,
	pub name: String,
	pub image: String,
	pub ingredients: String,
	pub description: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
	value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl CocktailCard {
	pub fn new(cocktail: &Cocktail, position: usize) -> Self {
		let name = non_blank(&cocktail.name).unwrap_or(UNKNOWN_COCKTAIL).to_string();
		let image = non_blank(&cocktail.image).unwrap_or(PLACEHOLDER_IMAGE).to_string();

		// Parsed names read better than the raw recipe line when present.
		let ingredients = match (&cocktail.parsed_ingredients, &cocktail.ingredients) {
			(Some(parsed), _) if !parsed.is_empty() => parsed.join(", "),
			(_, Some(IngredientText::Items(items))) if !items.is_empty() => items.join(", "),
			(_, Some(IngredientText::Text(text))) if !text.trim().is_empty() => {
				text.trim().to_string()
			}
			_ => MISSING_INGREDIENTS.to_string(),
		};

		Self {
			key: non_blank(&cocktail.id)
				.map(str::to_string)
				.unwrap_or_else(|| format!("{}-{}", name, position)),
			name,
			image,
			ingredients,
			description: non_blank(&cocktail.description).map(str::to_string),
		}
	}

	pub fn from_list(cocktails: &[Cocktail]) -> Vec<Self> {
		cocktails
			.iter()
			.enumerate()
			.map(|(i, c)| Self::new(c, i))
			.collect()
	}

	/// Optimizer results carry cocktails as opaque JSON.
	pub fn from_values(values: &[serde_json::Value]) -> Vec<Self> {
		values
			.iter()
			.enumerate()
			.map(|(i, v)| Self::new(&Cocktail::from_value(v), i))
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn missing_fields_fall_back() {
		let cards = CocktailCard::from_values(&[json!({}), json!(null), json!({ "name": "  " })]);
		assert_eq!(cards.len(), 3);
		for card in &cards {
			assert_eq!(card.name, UNKNOWN_COCKTAIL);
			assert_eq!(card.image, PLACEHOLDER_IMAGE);
			assert_eq!(card.ingredients, MISSING_INGREDIENTS);
		}
		assert_eq!(cards[0].key, "Cocktail Inconnu-0");
		assert_eq!(cards[2].key, "Cocktail Inconnu-2");
	}

	#[test]
	fn parsed_ingredients_win_over_raw_text() {
		let cards = CocktailCard::from_values(&[json!({
			"id": "negroni",
			"name": "Negroni",
			"image": "http://img/negroni.jpg",
			"ingredients": "1 part gin, 1 part Campari, 1 part vermouth",
			"parsed_ingredients": ["Gin", "Campari", "Vermouth"]
		})]);
		let card = &cards[0];
		assert_eq!(card.key, "negroni");
		assert_eq!(card.name, "Negroni");
		assert_eq!(card.image, "http://img/negroni.jpg");
		assert_eq!(card.ingredients, "Gin, Campari, Vermouth");
	}

	#[test]
	fn raw_ingredient_text_is_used_otherwise() {
		let cocktail = Cocktail {
			name: Some("Daiquiri".into()),
			ingredients: Some(IngredientText::Text(" Rum, lime, sugar ".into())),
			image: Some(String::new()),
			..Cocktail::default()
		};
		let card = CocktailCard::new(&cocktail, 7);
		assert_eq!(card.ingredients, "Rum, lime, sugar");
		assert_eq!(card.image, PLACEHOLDER_IMAGE);
		assert_eq!(card.key, "Daiquiri-7");
	}
}
