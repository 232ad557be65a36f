// src/models/dashboard.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use super::sales::{City, PaymentMethod, ProductLine};

// 1. Indicadores (Os Cards do Topo)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    pub total_sales: Decimal,
    pub total_units: u64,
    pub net_sales: Decimal, // total_sales * 0.95
    pub average_rating: Option<Decimal>, // None = sem dados (vira null no JSON)
}

// 2. Gráfico de linha (Vendas por mês)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySales {
    #[schema(example = "2019-01-01")]
    pub month: NaiveDate, // Primeiro dia do mês
    pub sales: Decimal,
}

// 3. Barras (Unidades por linha de produto)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductUnits {
    pub product_line: ProductLine,
    pub units: u64,
}

// 4. Pizza (Vendas por forma de pagamento)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSales {
    pub payment: PaymentMethod,
    pub sales: Decimal,
}

// 5. Barras horizontais (Avaliação média por cidade)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CityRating {
    pub city: City,
    pub rating: Decimal,
}

/// Um card de KPI já rotulado no idioma escolhido.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KpiCard {
    #[schema(example = "Total Sales")]
    pub label: String,
    pub value: Option<Decimal>,
    #[schema(example = "$120,345")]
    pub display: String,
}

/// Um painel de gráfico: título traduzido + pontos, ou o aviso de "sem dados".
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChartPanel<T: ToSchema> {
    pub title: String,
    pub has_data: bool,
    pub placeholder: Option<String>,
    pub entries: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KpiCards {
    pub total_sales: KpiCard,
    pub total_units: KpiCard,
    pub net_sales: KpiCard,
    pub average_rating: KpiCard,
}

/// A página inteira do dashboard, pronta para a camada de apresentação.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    #[schema(example = "english")]
    pub language: String,
    pub title: String,
    pub row_count: usize,
    pub summary: KpiSummary,
    pub kpis: KpiCards,
    pub monthly_sales: ChartPanel<MonthlySales>,
    pub units_sold: ChartPanel<ProductUnits>,
    pub payment_methods: ChartPanel<PaymentSales>,
    pub rate_by_city: ChartPanel<CityRating>,
}
