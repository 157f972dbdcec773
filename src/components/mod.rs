pub mod cocktail_card;
pub mod force_graph;
