// src/models/filter.rs

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::sales::{City, CustomerType, PaymentMethod, ProductLine};

/// Critérios já resolvidos que o motor de filtro aplica.
///
/// Um conjunto vazio em qualquer dimensão não casa com nenhum registro.
/// Quem monta os critérios a partir da UI deve preencher os conjuntos
/// completos quando o usuário não escolheu nada.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub date_min: NaiveDate,
    pub date_max: NaiveDate,
    pub cities: BTreeSet<City>,
    pub customer_types: BTreeSet<CustomerType>,
    pub product_lines: BTreeSet<ProductLine>,
    pub payment_methods: BTreeSet<PaymentMethod>,
}

/// Payload do filtro vindo da UI (query string ou corpo JSON).
///
/// Campos ausentes viram o conjunto completo / os limites do dataset.
/// Uma lista vazia explícita (só possível no JSON) é respeitada ao pé da letra.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct FilterPayload {
    /// Data inicial (inclusiva), formato YYYY-MM-DD
    #[param(example = "2019-01-01")]
    pub date_min: Option<String>,

    /// Data final (inclusiva), formato YYYY-MM-DD
    #[param(example = "2019-12-31")]
    pub date_max: Option<String>,

    #[serde(alias = "cities")]
    pub city: Option<Vec<String>>,

    #[serde(alias = "customerTypes")]
    pub customer_type: Option<Vec<String>>,

    #[serde(alias = "productLines")]
    pub product_line: Option<Vec<String>>,

    #[serde(alias = "payments", alias = "paymentMethod")]
    pub payment: Option<Vec<String>>,
}

/// Opções dos filtros da barra lateral: valores distintos presentes nos dados.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub date_min: Option<NaiveDate>,
    pub date_max: Option<NaiveDate>,
    pub cities: Vec<City>,
    pub customer_types: Vec<CustomerType>,
    pub product_lines: Vec<ProductLine>,
    pub payment_methods: Vec<PaymentMethod>,
}
