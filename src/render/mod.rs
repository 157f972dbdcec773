//! View models built from backend JSON, with the fallbacks used when fields
//! are missing or malformed.

mod cocktail;
mod sparql;

pub use cocktail::{CocktailCard, PLACEHOLDER_IMAGE};
pub use sparql::SparqlTable;
