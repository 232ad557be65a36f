// src/db/generator.rs

use chrono::{Duration, NaiveDate};
use rand::prelude::*;
use rand_distr::Normal;
use rust_decimal::{prelude::FromPrimitive, Decimal};

use crate::models::sales::{City, CustomerType, PaymentMethod, ProductLine, TransactionRecord};

// Calendário do dataset: 2019-01-01 ..= 2019-12-31
const FIRST_DAY: (i32, u32, u32) = (2019, 1, 1);
const DAYS_IN_RANGE: i64 = 365;

const UNITS_RANGE: std::ops::Range<u32> = 1..50;

const SALES_NOISE_STD_DEV: f64 = 0.05;
const RATING_MEAN: f64 = 6.8;
const RATING_STD_DEV: f64 = 0.7;

/// Gerador de vendas sintéticas.
///
/// O estado aleatório é do próprio gerador (nada de seed global), então
/// duas sessões nunca disputam o mesmo RNG.
pub struct SalesGenerator {
    rng: StdRng,
    first_day: NaiveDate,
    sales_noise: Normal<f64>,
    rating: Normal<f64>,
}

impl SalesGenerator {
    pub fn new(seed: u64) -> Self {
        let (year, month, day) = FIRST_DAY;
        Self {
            rng: StdRng::seed_from_u64(seed),
            first_day: NaiveDate::from_ymd_opt(year, month, day).expect("data inicial fixa"),
            // Normal::new só falha com desvio negativo ou NaN
            sales_noise: Normal::new(0.0, SALES_NOISE_STD_DEV).expect("desvio constante"),
            rating: Normal::new(RATING_MEAN, RATING_STD_DEV).expect("desvio constante"),
        }
    }

    /// Gera `count` registros. Mesma seed + mesmo count = mesma sequência.
    pub fn generate(&mut self, count: usize) -> Vec<TransactionRecord> {
        (0..count).map(|_| self.next_record()).collect()
    }

    fn next_record(&mut self) -> TransactionRecord {
        let date = self.first_day + Duration::days(self.rng.gen_range(0..DAYS_IN_RANGE));
        let city = pick(&mut self.rng, &City::ALL);
        let product_line = pick(&mut self.rng, &ProductLine::ALL);
        let payment_method = pick(&mut self.rng, &PaymentMethod::ALL);
        let customer_type = pick(&mut self.rng, &CustomerType::ALL);
        let units = self.rng.gen_range(UNITS_RANGE);

        let price_per_unit = product_line.unit_price();

        // Vendas = unidades * preço * (1 + ruído), arredondado em centavos
        let noise = self.sales_noise.sample(&mut self.rng);
        let factor = Decimal::from_f64(1.0 + noise).unwrap_or(Decimal::ONE);
        let sales_amount = (Decimal::from(units) * price_per_unit * factor).round_dp(2);

        // Avaliação ~ N(6.8, 0.7), 2 casas, presa em [1, 10]
        let raw_rating = Decimal::from_f64(self.rating.sample(&mut self.rng)).unwrap_or(Decimal::ONE);
        let rating = raw_rating
            .round_dp(2)
            .clamp(Decimal::ONE, Decimal::TEN);

        TransactionRecord {
            date,
            city,
            product_line,
            payment_method,
            customer_type,
            units,
            price_per_unit,
            sales_amount,
            rating,
        }
    }
}

fn pick<T: Copy>(rng: &mut StdRng, values: &[T]) -> T {
    values[rng.gen_range(0..values.len())]
}

/// Atalho sem estado: um gerador novo por chamada.
pub fn generate(seed: u64, count: usize) -> Vec<TransactionRecord> {
    SalesGenerator::new(seed).generate(count)
}
