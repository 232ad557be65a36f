pub mod dashboard;
pub mod filter;
pub mod i18n;
pub mod sales;
