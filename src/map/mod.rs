pub mod models;
pub mod places;
