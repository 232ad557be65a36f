// src/services/aggregation.rs

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{
    dashboard::{CityRating, KpiSummary, MonthlySales, PaymentSales, ProductUnits},
    sales::TransactionRecord,
};

/// Proporção fixa de vendas líquidas (placeholder, não configurável).
pub const NET_SALES_RATIO: Decimal = Decimal::from_parts(95, 0, 0, false, 2);

// 1. KPIs
pub fn summarize(filtered: &[TransactionRecord]) -> KpiSummary {
    let total_sales: Decimal = filtered.iter().map(|r| r.sales_amount).sum();
    let total_units: u64 = filtered.iter().map(|r| u64::from(r.units)).sum();

    KpiSummary {
        total_sales,
        total_units,
        net_sales: total_sales * NET_SALES_RATIO,
        average_rating: mean(filtered.iter().map(|r| r.rating)),
    }
}

// 2. Vendas por mês, em ordem cronológica, só meses com registros
pub fn rollup_by_month(filtered: &[TransactionRecord]) -> Vec<MonthlySales> {
    let mut months: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for record in filtered {
        *months.entry(month_start(record.date)).or_default() += record.sales_amount;
    }

    months
        .into_iter()
        .map(|(month, sales)| MonthlySales { month, sales })
        .collect()
}

// 3. Unidades por linha de produto
pub fn rollup_by_product(filtered: &[TransactionRecord]) -> Vec<ProductUnits> {
    let mut products = BTreeMap::new();
    for record in filtered {
        *products.entry(record.product_line).or_insert(0u64) += u64::from(record.units);
    }

    products
        .into_iter()
        .map(|(product_line, units)| ProductUnits { product_line, units })
        .collect()
}

// 4. Vendas por forma de pagamento
pub fn rollup_by_payment(filtered: &[TransactionRecord]) -> Vec<PaymentSales> {
    let mut payments: BTreeMap<_, Decimal> = BTreeMap::new();
    for record in filtered {
        *payments.entry(record.payment_method).or_default() += record.sales_amount;
    }

    payments
        .into_iter()
        .map(|(payment, sales)| PaymentSales { payment, sales })
        .collect()
}

// 5. Avaliação média por cidade
pub fn rollup_by_city(filtered: &[TransactionRecord]) -> Vec<CityRating> {
    let mut cities: BTreeMap<_, Vec<Decimal>> = BTreeMap::new();
    for record in filtered {
        cities.entry(record.city).or_default().push(record.rating);
    }

    cities
        .into_iter()
        .filter_map(|(city, ratings)| {
            mean(ratings.into_iter()).map(|rating| CityRating { city, rating })
        })
        .collect()
}

fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Média aritmética; `None` quando não há valores.
fn mean(values: impl Iterator<Item = Decimal>) -> Option<Decimal> {
    let (sum, count) = values.fold((Decimal::ZERO, 0u32), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / Decimal::from(count))
}
