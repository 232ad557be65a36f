pub mod generator;
pub mod sales_repo;
pub use sales_repo::{Dataset, SalesRepository};
