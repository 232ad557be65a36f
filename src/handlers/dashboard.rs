// src/handlers/dashboard.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use axum_extra::extract::Query;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::i18n::Locale,
    // Importamos os models para referenciar no Swagger
    models::{
        dashboard::{CityRating, DashboardReport, KpiSummary, MonthlySales, PaymentSales, ProductUnits},
        filter::{FilterOptions, FilterPayload},
        sales::TransactionRecord,
    },
    services::aggregation,
};

// GET /api/dashboard
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = "Dashboard",
    params(
        FilterPayload,
        ("lang" = Option<String>, Query, description = "Chave do idioma (ex.: english, japan)")
    ),
    responses(
        (status = 200, description = "Página do dashboard: KPIs e gráficos já traduzidos", body = DashboardReport),
        (status = 400, description = "Filtro inválido"),
        (status = 404, description = "Idioma não suportado")
    )
)]
pub async fn get_dashboard(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(payload): Query<FilterPayload>,
) -> Result<impl IntoResponse, AppError> {
    report(&app_state, locale, &payload)
}

// POST /api/dashboard
// O corpo JSON permite mandar uma lista vazia de propósito (não casa com nada).
#[utoipa::path(
    post,
    path = "/api/dashboard",
    tag = "Dashboard",
    request_body = FilterPayload,
    params(
        ("lang" = Option<String>, Query, description = "Chave do idioma (ex.: english, japan)")
    ),
    responses(
        (status = 200, description = "Página do dashboard: KPIs e gráficos já traduzidos", body = DashboardReport),
        (status = 400, description = "Filtro inválido"),
        (status = 404, description = "Idioma não suportado")
    )
)]
pub async fn query_dashboard(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<FilterPayload>,
) -> Result<impl IntoResponse, AppError> {
    report(&app_state, locale, &payload)
}

fn report(
    app_state: &AppState,
    locale: Locale,
    payload: &FilterPayload,
) -> Result<(StatusCode, Json<DashboardReport>), AppError> {
    let bundle = app_state.i18n_store.bundle(locale.0)?;
    let report = app_state.dashboard_service.get_report(payload, bundle)?;
    Ok((StatusCode::OK, Json(report)))
}

// GET /api/dashboard/filters
#[utoipa::path(
    get,
    path = "/api/dashboard/filters",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Valores disponíveis para cada filtro e limites de data", body = FilterOptions)
    )
)]
pub async fn get_filter_options(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let options = app_state.dashboard_service.get_filter_options()?;
    Ok((StatusCode::OK, Json(options)))
}

// GET /api/dashboard/summary
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    tag = "Dashboard",
    params(FilterPayload),
    responses(
        (status = 200, description = "Totais de vendas, unidades, vendas líquidas e avaliação média", body = KpiSummary)
    )
)]
pub async fn get_summary(
    State(app_state): State<AppState>,
    Query(payload): Query<FilterPayload>,
) -> Result<impl IntoResponse, AppError> {
    let filtered = app_state.dashboard_service.get_filtered(&payload)?;
    Ok((StatusCode::OK, Json(aggregation::summarize(&filtered))))
}

// GET /api/dashboard/monthly-sales
#[utoipa::path(
    get,
    path = "/api/dashboard/monthly-sales",
    tag = "Dashboard",
    params(FilterPayload),
    responses(
        (status = 200, description = "Vendas por mês, em ordem cronológica", body = Vec<MonthlySales>)
    )
)]
pub async fn get_monthly_sales(
    State(app_state): State<AppState>,
    Query(payload): Query<FilterPayload>,
) -> Result<impl IntoResponse, AppError> {
    let filtered = app_state.dashboard_service.get_filtered(&payload)?;
    Ok((StatusCode::OK, Json(aggregation::rollup_by_month(&filtered))))
}

// GET /api/dashboard/units-by-product
#[utoipa::path(
    get,
    path = "/api/dashboard/units-by-product",
    tag = "Dashboard",
    params(FilterPayload),
    responses(
        (status = 200, description = "Unidades vendidas por linha de produto", body = Vec<ProductUnits>)
    )
)]
pub async fn get_units_by_product(
    State(app_state): State<AppState>,
    Query(payload): Query<FilterPayload>,
) -> Result<impl IntoResponse, AppError> {
    let filtered = app_state.dashboard_service.get_filtered(&payload)?;
    Ok((StatusCode::OK, Json(aggregation::rollup_by_product(&filtered))))
}

// GET /api/dashboard/sales-by-payment
#[utoipa::path(
    get,
    path = "/api/dashboard/sales-by-payment",
    tag = "Dashboard",
    params(FilterPayload),
    responses(
        (status = 200, description = "Vendas por forma de pagamento", body = Vec<PaymentSales>)
    )
)]
pub async fn get_sales_by_payment(
    State(app_state): State<AppState>,
    Query(payload): Query<FilterPayload>,
) -> Result<impl IntoResponse, AppError> {
    let filtered = app_state.dashboard_service.get_filtered(&payload)?;
    Ok((StatusCode::OK, Json(aggregation::rollup_by_payment(&filtered))))
}

// GET /api/dashboard/rating-by-city
#[utoipa::path(
    get,
    path = "/api/dashboard/rating-by-city",
    tag = "Dashboard",
    params(FilterPayload),
    responses(
        (status = 200, description = "Avaliação média por cidade", body = Vec<CityRating>)
    )
)]
pub async fn get_rating_by_city(
    State(app_state): State<AppState>,
    Query(payload): Query<FilterPayload>,
) -> Result<impl IntoResponse, AppError> {
    let filtered = app_state.dashboard_service.get_filtered(&payload)?;
    Ok((StatusCode::OK, Json(aggregation::rollup_by_city(&filtered))))
}

// GET /api/transactions
#[utoipa::path(
    get,
    path = "/api/transactions",
    tag = "Transactions",
    params(FilterPayload),
    responses(
        (status = 200, description = "Vendas que passam no filtro", body = Vec<TransactionRecord>)
    )
)]
pub async fn list_transactions(
    State(app_state): State<AppState>,
    Query(payload): Query<FilterPayload>,
) -> Result<impl IntoResponse, AppError> {
    let filtered = app_state.dashboard_service.get_filtered(&payload)?;
    Ok((StatusCode::OK, Json(filtered)))
}
