// src/services/i18n_store.rs

use std::collections::{BTreeMap, HashMap};

use crate::{
    common::error::AppError,
    models::i18n::{LabelKey, Language, LanguageOption, LocalizationBundle},
};

type LabelTable = &'static [(LabelKey, &'static str)];

// ---
// Tabela de traduções (dados constantes, verificados em `I18nStore::load`)
// ---
const TRANSLATIONS: &[(Language, LabelTable)] = &[
    (Language::English, &[
        (LabelKey::Title, "Sales Dashboard"),
        (LabelKey::KpiTotalSales, "Total Sales"),
        (LabelKey::KpiUnits, "Total Units Sold"),
        (LabelKey::KpiNetSales, "Net Sales"),
        (LabelKey::KpiRating, "Average Rating"),
        (LabelKey::City, "City"),
        (LabelKey::Date, "Date Range"),
        (LabelKey::CustomerType, "Customer type"),
        (LabelKey::ProductLine, "Product line"),
        (LabelKey::Payment, "Payment"),
        (LabelKey::MonthlySales, "Monthly Sales"),
        (LabelKey::UnitsSold, "Units Sold"),
        (LabelKey::PaymentMethods, "Payment Methods"),
        (LabelKey::RateByCity, "Rate Based on City"),
        (LabelKey::Language, "Select language"),
    ]),
    (Language::Indonesia, &[
        (LabelKey::Title, "Dasbor Penjualan"),
        (LabelKey::KpiTotalSales, "Total Penjualan"),
        (LabelKey::KpiUnits, "Total Unit Terjual"),
        (LabelKey::KpiNetSales, "Penjualan Bersih"),
        (LabelKey::KpiRating, "Rata-rata Rating"),
        (LabelKey::City, "Kota"),
        (LabelKey::Date, "Rentang Tanggal"),
        (LabelKey::CustomerType, "Tipe Pelanggan"),
        (LabelKey::ProductLine, "Produk"),
        (LabelKey::Payment, "Pembayaran"),
        (LabelKey::MonthlySales, "Penjualan Bulanan"),
        (LabelKey::UnitsSold, "Unit Terjual"),
        (LabelKey::PaymentMethods, "Metode Pembayaran"),
        (LabelKey::RateByCity, "Rating Berdasarkan Kota"),
        (LabelKey::Language, "Pilih bahasa"),
    ]),
    (Language::Mandarin, &[
        (LabelKey::Title, "销售仪表盘"),
        (LabelKey::KpiTotalSales, "总销售额"),
        (LabelKey::KpiUnits, "销售总量"),
        (LabelKey::KpiNetSales, "净销售额"),
        (LabelKey::KpiRating, "平均评分"),
        (LabelKey::City, "城市"),
        (LabelKey::Date, "日期范围"),
        (LabelKey::CustomerType, "客户类型"),
        (LabelKey::ProductLine, "产品线"),
        (LabelKey::Payment, "支付方式"),
        (LabelKey::MonthlySales, "每月销售"),
        (LabelKey::UnitsSold, "售出单位"),
        (LabelKey::PaymentMethods, "支付方式"),
        (LabelKey::RateByCity, "按城市评分"),
        (LabelKey::Language, "选择语言"),
    ]),
    (Language::Japan, &[
        (LabelKey::Title, "販売ダッシュボード"),
        (LabelKey::KpiTotalSales, "総売上"),
        (LabelKey::KpiUnits, "総販売数"),
        (LabelKey::KpiNetSales, "純売上"),
        (LabelKey::KpiRating, "平均評価"),
        (LabelKey::City, "都市"),
        (LabelKey::Date, "日付範囲"),
        (LabelKey::CustomerType, "顧客タイプ"),
        (LabelKey::ProductLine, "製品ライン"),
        (LabelKey::Payment, "支払い"),
        (LabelKey::MonthlySales, "月次売上"),
        (LabelKey::UnitsSold, "販売ユニット"),
        (LabelKey::PaymentMethods, "支払い方法"),
        (LabelKey::RateByCity, "都市別評価"),
        (LabelKey::Language, "言語を選択"),
    ]),
    (Language::Korea, &[
        (LabelKey::Title, "판매 대시보드"),
        (LabelKey::KpiTotalSales, "총 판매"),
        (LabelKey::KpiUnits, "총 판매 수량"),
        (LabelKey::KpiNetSales, "순매출"),
        (LabelKey::KpiRating, "평균 평점"),
        (LabelKey::City, "도시"),
        (LabelKey::Date, "기간"),
        (LabelKey::CustomerType, "고객 유형"),
        (LabelKey::ProductLine, "제품 군"),
        (LabelKey::Payment, "결제"),
        (LabelKey::MonthlySales, "월별 판매"),
        (LabelKey::UnitsSold, "판매된 수량"),
        (LabelKey::PaymentMethods, "결제 수단"),
        (LabelKey::RateByCity, "도시별 평점"),
        (LabelKey::Language, "언어 선택"),
    ]),
    (Language::Finlandia, &[
        (LabelKey::Title, "Myyntidashboard"),
        (LabelKey::KpiTotalSales, "Kokonaismyynti"),
        (LabelKey::KpiUnits, "Myydyt yksiköt"),
        (LabelKey::KpiNetSales, "Nettomyynti"),
        (LabelKey::KpiRating, "Keskimääräinen arvostelu"),
        (LabelKey::City, "Kaupunki"),
        (LabelKey::Date, "Päivämäärä"),
        (LabelKey::CustomerType, "Asiakastyyppi"),
        (LabelKey::ProductLine, "Tuoteryhmä"),
        (LabelKey::Payment, "Maksu"),
        (LabelKey::MonthlySales, "Kuukausimyynti"),
        (LabelKey::UnitsSold, "Myytyjä yksiköitä"),
        (LabelKey::PaymentMethods, "Maksutavat"),
        (LabelKey::RateByCity, "Arvio kaupungin mukaan"),
        (LabelKey::Language, "Valitse kieli"),
    ]),
    (Language::Arab, &[
        (LabelKey::Title, "لوحة المبيعات"),
        (LabelKey::KpiTotalSales, "إجمالي المبيعات"),
        (LabelKey::KpiUnits, "إجمالي الوحدات المبيعة"),
        (LabelKey::KpiNetSales, "صافي المبيعات"),
        (LabelKey::KpiRating, "متوسط التقييم"),
        (LabelKey::City, "المدينة"),
        (LabelKey::Date, "نطاق التاريخ"),
        (LabelKey::CustomerType, "نوع العميل"),
        (LabelKey::ProductLine, "خط المنتج"),
        (LabelKey::Payment, "الدفع"),
        (LabelKey::MonthlySales, "المبيعات الشهرية"),
        (LabelKey::UnitsSold, "الوحدات المباعة"),
        (LabelKey::PaymentMethods, "طرق الدفع"),
        (LabelKey::RateByCity, "التقييم حسب المدينة"),
        (LabelKey::Language, "اختر اللغة"),
    ]),
    (Language::Meksiko, &[
        (LabelKey::Title, "Panel de Ventas"),
        (LabelKey::KpiTotalSales, "Ventas Totales"),
        (LabelKey::KpiUnits, "Total Unidades Vendidas"),
        (LabelKey::KpiNetSales, "Ventas Netas"),
        (LabelKey::KpiRating, "Calificación Promedio"),
        (LabelKey::City, "Ciudad"),
        (LabelKey::Date, "Rango de Fecha"),
        (LabelKey::CustomerType, "Tipo de Cliente"),
        (LabelKey::ProductLine, "Línea de Producto"),
        (LabelKey::Payment, "Pago"),
        (LabelKey::MonthlySales, "Ventas Mensuales"),
        (LabelKey::UnitsSold, "Unidades Vendidas"),
        (LabelKey::PaymentMethods, "Métodos de Pago"),
        (LabelKey::RateByCity, "Calificación por Ciudad"),
        (LabelKey::Language, "Seleccionar idioma"),
    ]),
    (Language::Jerman, &[
        (LabelKey::Title, "Verkaufs-Dashboard"),
        (LabelKey::KpiTotalSales, "Gesamtumsatz"),
        (LabelKey::KpiUnits, "Verkaufte Einheiten"),
        (LabelKey::KpiNetSales, "Netto-Umsatz"),
        (LabelKey::KpiRating, "Durchschnittsbewertung"),
        (LabelKey::City, "Stadt"),
        (LabelKey::Date, "Datumsbereich"),
        (LabelKey::CustomerType, "Kundentyp"),
        (LabelKey::ProductLine, "Produktlinie"),
        (LabelKey::Payment, "Zahlung"),
        (LabelKey::MonthlySales, "Monatlicher Umsatz"),
        (LabelKey::UnitsSold, "Verkaufte Einheiten"),
        (LabelKey::PaymentMethods, "Zahlungsmethoden"),
        (LabelKey::RateByCity, "Bewertung nach Stadt"),
        (LabelKey::Language, "Sprache auswählen"),
    ]),
    (Language::Thailand, &[
        (LabelKey::Title, "แดชบอร์ดการขาย"),
        (LabelKey::KpiTotalSales, "ยอดขายรวม"),
        (LabelKey::KpiUnits, "จำนวนหน่วยที่ขาย"),
        (LabelKey::KpiNetSales, "ยอดขายสุทธิ"),
        (LabelKey::KpiRating, "คะแนนเฉลี่ย"),
        (LabelKey::City, "เมือง"),
        (LabelKey::Date, "ช่วงวันที่"),
        (LabelKey::CustomerType, "ประเภทลูกค้า"),
        (LabelKey::ProductLine, "ประเภทสินค้า"),
        (LabelKey::Payment, "การชำระเงิน"),
        (LabelKey::MonthlySales, "ยอดขายรายเดือน"),
        (LabelKey::UnitsSold, "หน่วยที่ขาย"),
        (LabelKey::PaymentMethods, "วิธีการชำระเงิน"),
        (LabelKey::RateByCity, "คะแนนตามเมือง"),
        (LabelKey::Language, "เลือกภาษา"),
    ]),
    (Language::Filipina, &[
        (LabelKey::Title, "Sales Dashboard"),
        (LabelKey::KpiTotalSales, "Kabuuang Benta"),
        (LabelKey::KpiUnits, "Bilang ng Nabentang Yunit"),
        (LabelKey::KpiNetSales, "Netong Benta"),
        (LabelKey::KpiRating, "Karaniwang Rating"),
        (LabelKey::City, "Lungsod"),
        (LabelKey::Date, "Saklaw ng Petsa"),
        (LabelKey::CustomerType, "Uri ng Customer"),
        (LabelKey::ProductLine, "Linya ng Produkto"),
        (LabelKey::Payment, "Paraan ng Bayad"),
        (LabelKey::MonthlySales, "Buwang Benta"),
        (LabelKey::UnitsSold, "Nabentang Yunit"),
        (LabelKey::PaymentMethods, "Mga Paraan ng Pagbabayad"),
        (LabelKey::RateByCity, "Rating Ayon sa Lungsod"),
        (LabelKey::Language, "Piliin ang wika"),
    ]),
    (Language::Francis, &[
        (LabelKey::Title, "Tableau de Ventes"),
        (LabelKey::KpiTotalSales, "Ventes Totales"),
        (LabelKey::KpiUnits, "Unités Vendues"),
        (LabelKey::KpiNetSales, "Ventes Nettes"),
        (LabelKey::KpiRating, "Note Moyenne"),
        (LabelKey::City, "Ville"),
        (LabelKey::Date, "Plage de dates"),
        (LabelKey::CustomerType, "Type de client"),
        (LabelKey::ProductLine, "Gamme de produits"),
        (LabelKey::Payment, "Paiement"),
        (LabelKey::MonthlySales, "Ventes Mensuelles"),
        (LabelKey::UnitsSold, "Unités Vendues"),
        (LabelKey::PaymentMethods, "Méthodes de paiement"),
        (LabelKey::RateByCity, "Note par Ville"),
        (LabelKey::Language, "Choisir la langue"),
    ]),
    (Language::Brazil, &[
        (LabelKey::Title, "Painel de Vendas"),
        (LabelKey::KpiTotalSales, "Vendas Totais"),
        (LabelKey::KpiUnits, "Total de Unidades Vendidas"),
        (LabelKey::KpiNetSales, "Vendas Líquidas"),
        (LabelKey::KpiRating, "Avaliação Média"),
        (LabelKey::City, "Cidade"),
        (LabelKey::Date, "Intervalo de Data"),
        (LabelKey::CustomerType, "Tipo de Cliente"),
        (LabelKey::ProductLine, "Linha de Produto"),
        (LabelKey::Payment, "Pagamento"),
        (LabelKey::MonthlySales, "Vendas Mensais"),
        (LabelKey::UnitsSold, "Unidades Vendidas"),
        (LabelKey::PaymentMethods, "Métodos de Pagamento"),
        (LabelKey::RateByCity, "Avaliação por Cidade"),
        (LabelKey::Language, "Selecione o idioma"),
    ]),
    (Language::Rusia, &[
        (LabelKey::Title, "Панель продаж"),
        (LabelKey::KpiTotalSales, "Общие продажи"),
        (LabelKey::KpiUnits, "Всего продано единиц"),
        (LabelKey::KpiNetSales, "Чистые продажи"),
        (LabelKey::KpiRating, "Средняя оценка"),
        (LabelKey::City, "Город"),
        (LabelKey::Date, "Диапазон дат"),
        (LabelKey::CustomerType, "Тип клиента"),
        (LabelKey::ProductLine, "Линейка продуктов"),
        (LabelKey::Payment, "Оплата"),
        (LabelKey::MonthlySales, "Ежемесячные продажи"),
        (LabelKey::UnitsSold, "Проданные единицы"),
        (LabelKey::PaymentMethods, "Способы оплаты"),
        (LabelKey::RateByCity, "Рейтинг по городу"),
        (LabelKey::Language, "Выберите язык"),
    ]),
];

/// Traduções carregadas e verificadas, compartilhadas (somente leitura) pelo AppState.
#[derive(Debug, Clone)]
pub struct I18nStore {
    bundles: HashMap<Language, LocalizationBundle>,
}

impl I18nStore {
    /// Carrega a tabela constante e garante que todo idioma define todas as chaves.
    pub fn load() -> Result<Self, AppError> {
        Self::from_table(TRANSLATIONS)
    }

    fn from_table(table: &[(Language, LabelTable)]) -> Result<Self, AppError> {
        let mut bundles = HashMap::new();

        for language in Language::ALL {
            let mut rows = table.iter().filter(|(lang, _)| *lang == language);
            let entries = rows.next().map(|(_, entries)| *entries).unwrap_or(&[]);

            // Um idioma repetido na tabela esconderia a segunda tradução.
            if rows.next().is_some() {
                return Err(AppError::InvalidLocalization {
                    language,
                    reason: "idioma definido mais de uma vez".to_string(),
                });
            }

            let mut labels: BTreeMap<LabelKey, &'static str> = BTreeMap::new();
            for &(key, text) in entries {
                if text.trim().is_empty() {
                    return Err(AppError::InvalidLocalization {
                        language,
                        reason: format!("{:?} está em branco", key),
                    });
                }
                if labels.insert(key, text).is_some() {
                    return Err(AppError::InvalidLocalization {
                        language,
                        reason: format!("{:?} definido mais de uma vez", key),
                    });
                }
            }

            let missing: Vec<LabelKey> = LabelKey::ALL
                .iter()
                .copied()
                .filter(|key| !labels.contains_key(key))
                .collect();

            if !missing.is_empty() {
                return Err(AppError::IncompleteLocalization { language, missing });
            }

            bundles.insert(language, LocalizationBundle { language, labels });
        }

        Ok(Self { bundles })
    }

    pub fn get_bundle(&self, language_key: &str) -> Result<&LocalizationBundle, AppError> {
        Language::from_key(language_key)
            .and_then(|language| self.bundles.get(&language))
            .ok_or_else(|| AppError::UnknownLanguage(language_key.to_string()))
    }

    pub fn bundle(&self, language: Language) -> Result<&LocalizationBundle, AppError> {
        self.bundles
            .get(&language)
            .ok_or_else(|| AppError::UnknownLanguage(language.key().to_string()))
    }

    pub fn list_languages(&self) -> Vec<LanguageOption> {
        Language::ALL
            .iter()
            .map(|language| LanguageOption {
                key: *language,
                display_name: language.display_name(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_defines_every_label() {
        let store = I18nStore::load().expect("tabela completa");
        for language in Language::ALL {
            let bundle = store.get_bundle(language.key()).unwrap();
            assert_eq!(bundle.labels.len(), LabelKey::ALL.len());
            for key in LabelKey::ALL {
                assert!(!bundle.label(key).is_empty(), "{:?} sem {:?}", language, key);
            }
        }
    }

    #[test]
    fn unknown_key_is_an_error_not_a_fallback() {
        let store = I18nStore::load().unwrap();
        let err = store.get_bundle("klingon").unwrap_err();
        assert!(matches!(err, AppError::UnknownLanguage(ref k) if k == "klingon"));

        // A chave é o identificador da API, não o nome de exibição.
        assert!(store.get_bundle("English").is_err());
    }

    #[test]
    fn bundles_carry_the_right_text() {
        let store = I18nStore::load().unwrap();
        assert_eq!(store.get_bundle("english").unwrap().label(LabelKey::Title), "Sales Dashboard");
        assert_eq!(store.get_bundle("brazil").unwrap().label(LabelKey::KpiNetSales), "Vendas Líquidas");
        assert_eq!(store.get_bundle("japan").unwrap().label(LabelKey::RateByCity), "都市別評価");
    }

    #[test]
    fn incomplete_table_is_rejected_at_load() {
        const PARTIAL: &[(Language, LabelTable)] = &[
            (Language::English, &[(LabelKey::Title, "Sales Dashboard")]),
        ];
        let err = I18nStore::from_table(PARTIAL).unwrap_err();
        match err {
            AppError::IncompleteLocalization { language, missing } => {
                assert_eq!(language, Language::English);
                assert_eq!(missing.len(), LabelKey::ALL.len() - 1);
                assert!(!missing.contains(&LabelKey::Title));
            }
            other => panic!("erro inesperado: {:?}", other),
        }
    }

    fn english_with(extra: &[(LabelKey, &'static str)]) -> LabelTable {
        let mut entries: Vec<(LabelKey, &'static str)> = TRANSLATIONS[0].1.to_vec();
        entries.extend_from_slice(extra);
        Box::leak(entries.into_boxed_slice())
    }

    fn assert_invalid(table: &[(Language, LabelTable)], expected_reason: &str) {
        match I18nStore::from_table(table) {
            Err(AppError::InvalidLocalization { language, reason }) => {
                assert_eq!(language, Language::English);
                assert!(reason.contains(expected_reason), "motivo: {}", reason);
            }
            other => panic!("esperava InvalidLocalization, veio {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn blank_label_is_rejected() {
        let mut entries: Vec<(LabelKey, &'static str)> = TRANSLATIONS[0].1.to_vec();
        entries[0] = (LabelKey::Title, "  ");
        let leaked: LabelTable = Box::leak(entries.into_boxed_slice());

        assert_invalid(&[(Language::English, leaked)], "Title está em branco");
    }

    #[test]
    fn duplicated_label_is_rejected() {
        let table = [(Language::English, english_with(&[(LabelKey::Title, "Overwritten Title")]))];
        assert_invalid(&table, "Title definido mais de uma vez");
    }

    #[test]
    fn blank_duplicate_after_valid_label_is_rejected() {
        let table = [(Language::English, english_with(&[(LabelKey::City, "   ")]))];
        assert_invalid(&table, "City está em branco");
    }

    #[test]
    fn duplicated_language_row_is_rejected() {
        let english = TRANSLATIONS[0].1;
        let table = [(Language::English, english), (Language::English, english)];
        assert_invalid(&table, "idioma definido mais de uma vez");
    }

    #[test]
    fn shipped_table_has_one_row_per_language() {
        for language in Language::ALL {
            let rows = TRANSLATIONS.iter().filter(|(lang, _)| *lang == language).count();
            assert_eq!(rows, 1, "{:?}", language);
        }
    }

    #[test]
    fn languages_are_listed_in_selector_order() {
        let store = I18nStore::load().unwrap();
        let languages = store.list_languages();
        assert_eq!(languages.len(), 14);
        assert_eq!(languages[0].key, Language::English);
        assert_eq!(languages[13].display_name, "Русский (Russian)");
    }
}
