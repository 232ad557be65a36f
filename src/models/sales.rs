// src/models/sales.rs

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// --- Enums (as dimensões fixas do dataset) ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
pub enum City {
    Yangon,
    Naypyitaw,
    Mandalay,
}

impl City {
    pub const ALL: [City; 3] = [City::Yangon, City::Naypyitaw, City::Mandalay];

    pub fn as_str(&self) -> &'static str {
        match self {
            City::Yangon => "Yangon",
            City::Naypyitaw => "Naypyitaw",
            City::Mandalay => "Mandalay",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
pub enum ProductLine {
    #[serde(rename = "Electronic accessories")]
    ElectronicAccessories,
    #[serde(rename = "Fashion accessories")]
    FashionAccessories,
    #[serde(rename = "Food and beverages")]
    FoodAndBeverages,
    #[serde(rename = "Health and beauty")]
    HealthAndBeauty,
    #[serde(rename = "Home and lifestyle")]
    HomeAndLifestyle,
    #[serde(rename = "Sports and travel")]
    SportsAndTravel,
}

impl ProductLine {
    pub const ALL: [ProductLine; 6] = [
        ProductLine::ElectronicAccessories,
        ProductLine::FashionAccessories,
        ProductLine::FoodAndBeverages,
        ProductLine::HealthAndBeauty,
        ProductLine::HomeAndLifestyle,
        ProductLine::SportsAndTravel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductLine::ElectronicAccessories => "Electronic accessories",
            ProductLine::FashionAccessories => "Fashion accessories",
            ProductLine::FoodAndBeverages => "Food and beverages",
            ProductLine::HealthAndBeauty => "Health and beauty",
            ProductLine::HomeAndLifestyle => "Home and lifestyle",
            ProductLine::SportsAndTravel => "Sports and travel",
        }
    }

    /// Preço unitário fixo da linha de produto.
    pub fn unit_price(&self) -> Decimal {
        let price = match self {
            ProductLine::ElectronicAccessories => 20,
            ProductLine::FashionAccessories => 10,
            ProductLine::FoodAndBeverages => 7,
            ProductLine::HealthAndBeauty => 12,
            ProductLine::HomeAndLifestyle => 15,
            ProductLine::SportsAndTravel => 18,
        };
        Decimal::from(price)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
pub enum PaymentMethod {
    Cash,
    #[serde(rename = "Credit card")]
    CreditCard,
    Ewallet,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Cash,
        PaymentMethod::CreditCard,
        PaymentMethod::Ewallet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::CreditCard => "Credit card",
            PaymentMethod::Ewallet => "Ewallet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
pub enum CustomerType {
    Member,
    Normal,
}

impl CustomerType {
    pub const ALL: [CustomerType; 2] = [CustomerType::Member, CustomerType::Normal];

    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerType::Member => "Member",
            CustomerType::Normal => "Normal",
        }
    }
}

// Conversões texto <-> enum, usadas pelos filtros vindos da UI.
// O nome de exibição é também o nome aceito no filtro.
macro_rules! impl_display_and_parse {
    ($($ty:ident),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl FromStr for $ty {
                type Err = String;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    $ty::ALL
                        .iter()
                        .copied()
                        .find(|v| v.as_str() == s)
                        .ok_or_else(|| s.to_string())
                }
            }
        )+
    };
}

impl_display_and_parse!(City, ProductLine, PaymentMethod, CustomerType);

// --- Structs ---

/// Uma venda do dataset sintético. Imutável depois de gerada.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    #[schema(example = "2019-03-14")]
    pub date: NaiveDate,

    pub city: City,

    pub product_line: ProductLine,

    pub payment_method: PaymentMethod,

    pub customer_type: CustomerType,

    #[schema(example = 12)]
    pub units: u32,

    #[schema(example = 20.0)]
    pub price_per_unit: Decimal,

    #[schema(example = 243.17)]
    pub sales_amount: Decimal,

    #[schema(example = 6.85)]
    pub rating: Decimal,
}
