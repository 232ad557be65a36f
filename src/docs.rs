// src/docs.rs

use utoipa::OpenApi;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Dashboard ---
        handlers::dashboard::get_dashboard,
        handlers::dashboard::query_dashboard,
        handlers::dashboard::get_filter_options,
        handlers::dashboard::get_summary,
        handlers::dashboard::get_monthly_sales,
        handlers::dashboard::get_units_by_product,
        handlers::dashboard::get_sales_by_payment,
        handlers::dashboard::get_rating_by_city,

        // --- Transactions ---
        handlers::dashboard::list_transactions,

        // --- Languages ---
        handlers::languages::list_languages,
        handlers::languages::get_bundle,
    ),
    components(
        schemas(
            // --- DASHBOARD ---
            models::dashboard::KpiSummary,
            models::dashboard::MonthlySales,
            models::dashboard::ProductUnits,
            models::dashboard::PaymentSales,
            models::dashboard::CityRating,
            models::dashboard::KpiCard,
            models::dashboard::KpiCards,
            models::dashboard::DashboardReport,

            // --- Filtros ---
            models::filter::FilterPayload,
            models::filter::FilterOptions,

            // --- Vendas ---
            models::sales::City,
            models::sales::ProductLine,
            models::sales::PaymentMethod,
            models::sales::CustomerType,
            models::sales::TransactionRecord,

            // --- i18n ---
            models::i18n::Language,
            models::i18n::LabelKey,
            models::i18n::LocalizationBundle,
            models::i18n::LanguageOption,
        )
    ),
    tags(
        (name = "Dashboard", description = "Indicadores e Gráficos de Vendas"),
        (name = "Transactions", description = "Vendas Sintéticas Filtradas"),
        (name = "Languages", description = "Idiomas e Rótulos da Interface")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/dashboard",
            "/api/dashboard/filters",
            "/api/dashboard/summary",
            "/api/dashboard/monthly-sales",
            "/api/dashboard/units-by-product",
            "/api/dashboard/sales-by-payment",
            "/api/dashboard/rating-by-city",
            "/api/transactions",
            "/api/languages",
            "/api/languages/{key}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "faltando {}", path);
        }
    }
}
