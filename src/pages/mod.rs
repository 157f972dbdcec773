pub mod graphs;
pub mod home;
pub mod not_found;
pub mod optimizer;
pub mod sparql;
