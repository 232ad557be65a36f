pub mod aggregation;
pub mod dashboard_service;
pub mod filter_service;
pub mod i18n_store;
