// src/services/filter_service.rs

use std::{collections::BTreeSet, str::FromStr};

use chrono::NaiveDate;

use crate::{
    common::error::AppError,
    models::{
        filter::{FilterCriteria, FilterOptions, FilterPayload},
        sales::TransactionRecord,
    },
};

/// Mantém só os registros que passam em todos os critérios.
///
/// Conjunto vazio em qualquer dimensão = nenhum registro.
/// `date_min > date_max` = nenhum registro (não é erro).
pub fn apply(records: &[TransactionRecord], criteria: &FilterCriteria) -> Vec<TransactionRecord> {
    records
        .iter()
        .filter(|record| matches(record, criteria))
        .cloned()
        .collect()
}

fn matches(record: &TransactionRecord, criteria: &FilterCriteria) -> bool {
    record.date >= criteria.date_min
        && record.date <= criteria.date_max
        && criteria.cities.contains(&record.city)
        && criteria.customer_types.contains(&record.customer_type)
        && criteria.product_lines.contains(&record.product_line)
        && criteria.payment_methods.contains(&record.payment_method)
}

/// Valores distintos de cada dimensão, ordenados, e os limites de data.
pub fn filter_options(records: &[TransactionRecord]) -> FilterOptions {
    FilterOptions {
        date_min: records.iter().map(|r| r.date).min(),
        date_max: records.iter().map(|r| r.date).max(),
        cities: distinct(records.iter().map(|r| r.city)),
        customer_types: distinct(records.iter().map(|r| r.customer_type)),
        product_lines: distinct(records.iter().map(|r| r.product_line)),
        payment_methods: distinct(records.iter().map(|r| r.payment_method)),
    }
}

fn distinct<T: Ord>(values: impl Iterator<Item = T>) -> Vec<T> {
    values.collect::<BTreeSet<_>>().into_iter().collect()
}

/// Critério "identidade": tudo o que existe nos dados.
pub fn full_criteria(records: &[TransactionRecord]) -> FilterCriteria {
    let options = filter_options(records);
    FilterCriteria {
        // Dataset vazio: intervalo invertido, que não casa com nada de qualquer forma.
        date_min: options.date_min.unwrap_or(NaiveDate::MAX),
        date_max: options.date_max.unwrap_or(NaiveDate::MIN),
        cities: options.cities.into_iter().collect(),
        customer_types: options.customer_types.into_iter().collect(),
        product_lines: options.product_lines.into_iter().collect(),
        payment_methods: options.payment_methods.into_iter().collect(),
    }
}

/// Monta os critérios a partir do que a UI mandou.
///
/// Campo ausente -> valor padrão do dataset (conjunto completo / limites de data).
/// Valor desconhecido -> ignorado; ele nunca casaria com registro algum.
pub fn resolve_criteria(
    records: &[TransactionRecord],
    payload: &FilterPayload,
) -> Result<FilterCriteria, AppError> {
    let defaults = full_criteria(records);

    Ok(FilterCriteria {
        date_min: parse_date("dateMin", payload.date_min.as_deref())?.unwrap_or(defaults.date_min),
        date_max: parse_date("dateMax", payload.date_max.as_deref())?.unwrap_or(defaults.date_max),
        cities: parse_set("city", payload.city.as_deref()).unwrap_or(defaults.cities),
        customer_types: parse_set("customerType", payload.customer_type.as_deref())
            .unwrap_or(defaults.customer_types),
        product_lines: parse_set("productLine", payload.product_line.as_deref())
            .unwrap_or(defaults.product_lines),
        payment_methods: parse_set("payment", payload.payment.as_deref())
            .unwrap_or(defaults.payment_methods),
    })
}

fn parse_date(field: &str, value: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| {
                AppError::InvalidFilter(format!(
                    "O campo '{}' deve ser uma data no formato AAAA-MM-DD (recebido '{}').",
                    field, raw
                ))
            }),
    }
}

fn parse_set<T: FromStr + Ord>(field: &str, values: Option<&[String]>) -> Option<BTreeSet<T>> {
    values.map(|values| {
        values
            .iter()
            .filter_map(|raw| match raw.parse::<T>() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Valor desconhecido ignorado no filtro '{}': {}", field, raw);
                    None
                }
            })
            .collect()
    })
}
