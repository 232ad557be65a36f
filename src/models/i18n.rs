// src/models/i18n.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Idiomas suportados pelo dashboard, na ordem em que aparecem no seletor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Indonesia,
    Mandarin,
    Japan,
    Korea,
    Finlandia,
    Arab,
    Meksiko,
    Jerman,
    Thailand,
    Filipina,
    Francis,
    Brazil,
    Rusia,
}

impl Language {
    pub const ALL: [Language; 14] = [
        Language::English,
        Language::Indonesia,
        Language::Mandarin,
        Language::Japan,
        Language::Korea,
        Language::Finlandia,
        Language::Arab,
        Language::Meksiko,
        Language::Jerman,
        Language::Thailand,
        Language::Filipina,
        Language::Francis,
        Language::Brazil,
        Language::Rusia,
    ];

    /// A chave usada na API (`?lang=japan`).
    pub fn key(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Indonesia => "indonesia",
            Language::Mandarin => "mandarin",
            Language::Japan => "japan",
            Language::Korea => "korea",
            Language::Finlandia => "finlandia",
            Language::Arab => "arab",
            Language::Meksiko => "meksiko",
            Language::Jerman => "jerman",
            Language::Thailand => "thailand",
            Language::Filipina => "filipina",
            Language::Francis => "francis",
            Language::Brazil => "brazil",
            Language::Rusia => "rusia",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Indonesia => "Indonesia",
            Language::Mandarin => "中文 (Mandarin)",
            Language::Japan => "日本語 (Japanese)",
            Language::Korea => "한국어 (Korean)",
            Language::Finlandia => "Suomi (Finnish)",
            Language::Arab => "العربية (Arabic)",
            Language::Meksiko => "Español (Mexico)",
            Language::Jerman => "Deutsch (German)",
            Language::Thailand => "ไทย (Thai)",
            Language::Filipina => "Filipino (Tagalog)",
            Language::Francis => "Français (French)",
            Language::Brazil => "Português (Brazil)",
            Language::Rusia => "Русский (Russian)",
        }
    }

    /// Códigos ISO-639 aceitos no cabeçalho Accept-Language.
    pub fn locale_codes(&self) -> &'static [&'static str] {
        match self {
            Language::English => &["en"],
            Language::Indonesia => &["id", "in"],
            Language::Mandarin => &["zh"],
            Language::Japan => &["ja"],
            Language::Korea => &["ko"],
            Language::Finlandia => &["fi"],
            Language::Arab => &["ar"],
            Language::Meksiko => &["es"],
            Language::Jerman => &["de"],
            Language::Thailand => &["th"],
            Language::Filipina => &["fil", "tl"],
            Language::Francis => &["fr"],
            Language::Brazil => &["pt"],
            Language::Rusia => &["ru"],
        }
    }

    pub fn from_key(key: &str) -> Option<Language> {
        Language::ALL.iter().copied().find(|l| l.key() == key)
    }

    /// "pt-BR" -> Brazil, "en" -> English. Sem correspondência -> None.
    pub fn from_locale_tag(tag: &str) -> Option<Language> {
        let primary = tag.split(['-', '_']).next().unwrap_or(tag).to_ascii_lowercase();
        Language::ALL
            .iter()
            .copied()
            .find(|l| l.locale_codes().contains(&primary.as_str()))
    }
}

/// As chaves de texto que toda tradução precisa definir.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LabelKey {
    Title,
    KpiTotalSales,
    KpiUnits,
    KpiNetSales,
    KpiRating,
    City,
    Date,
    CustomerType,
    ProductLine,
    Payment,
    MonthlySales,
    UnitsSold,
    PaymentMethods,
    RateByCity,
    Language,
}

impl LabelKey {
    pub const ALL: [LabelKey; 15] = [
        LabelKey::Title,
        LabelKey::KpiTotalSales,
        LabelKey::KpiUnits,
        LabelKey::KpiNetSales,
        LabelKey::KpiRating,
        LabelKey::City,
        LabelKey::Date,
        LabelKey::CustomerType,
        LabelKey::ProductLine,
        LabelKey::Payment,
        LabelKey::MonthlySales,
        LabelKey::UnitsSold,
        LabelKey::PaymentMethods,
        LabelKey::RateByCity,
        LabelKey::Language,
    ];
}

/// Todos os rótulos de um idioma.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocalizationBundle {
    pub language: Language,
    #[schema(value_type = BTreeMap<String, String>)]
    pub labels: BTreeMap<LabelKey, &'static str>,
}

impl LocalizationBundle {
    /// O carregamento do `I18nStore` garante que todas as chaves existem.
    pub fn label(&self, key: LabelKey) -> &'static str {
        self.labels.get(&key).copied().unwrap_or_default()
    }
}

/// Item do seletor de idioma.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LanguageOption {
    pub key: Language,
    #[schema(value_type = String, example = "日本語 (Japanese)")]
    pub display_name: &'static str,
}
