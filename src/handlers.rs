pub mod dashboard;
pub mod languages;
