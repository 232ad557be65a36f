// src/services/dashboard_service.rs

use rust_decimal::{Decimal, RoundingStrategy};

use crate::{
    common::error::AppError,
    db::{Dataset, SalesRepository},
    models::{
        dashboard::{ChartPanel, DashboardReport, KpiCard, KpiCards, KpiSummary},
        filter::{FilterOptions, FilterPayload},
        i18n::{LabelKey, LocalizationBundle},
        sales::TransactionRecord,
    },
    services::{aggregation, filter_service},
};

const NO_DATA_MONTHLY: &str = "No data for the selected filters";
const NO_DATA: &str = "No data";
const MISSING_VALUE: &str = "-";

#[derive(Clone)]
pub struct DashboardService {
    repo: SalesRepository,
}

impl DashboardService {
    pub fn new(repo: SalesRepository) -> Self {
        Self { repo }
    }

    pub fn records(&self) -> Result<Dataset, AppError> {
        self.repo.records()
    }

    pub fn get_filter_options(&self) -> Result<FilterOptions, AppError> {
        Ok(filter_service::filter_options(&self.repo.records()?))
    }

    /// Aplica o filtro da UI sobre o dataset do processo.
    pub fn get_filtered(&self, payload: &FilterPayload) -> Result<Vec<TransactionRecord>, AppError> {
        let records = self.repo.records()?;
        let criteria = filter_service::resolve_criteria(&records, payload)?;
        let filtered = filter_service::apply(&records, &criteria);

        tracing::debug!("Filtro aplicado: {} de {} registros", filtered.len(), records.len());
        Ok(filtered)
    }

    pub fn get_report(
        &self,
        payload: &FilterPayload,
        bundle: &LocalizationBundle,
    ) -> Result<DashboardReport, AppError> {
        let filtered = self.get_filtered(payload)?;
        Ok(build_report(&filtered, bundle))
    }
}

/// Monta a página inteira (KPIs + 4 gráficos) já rotulada no idioma do pacote.
pub fn build_report(filtered: &[TransactionRecord], bundle: &LocalizationBundle) -> DashboardReport {
    let summary = aggregation::summarize(filtered);

    DashboardReport {
        language: bundle.language.key().to_string(),
        title: bundle.label(LabelKey::Title).to_string(),
        row_count: filtered.len(),
        kpis: kpi_cards(&summary, bundle),
        monthly_sales: panel(
            bundle.label(LabelKey::MonthlySales),
            aggregation::rollup_by_month(filtered),
            NO_DATA_MONTHLY,
        ),
        units_sold: panel(
            bundle.label(LabelKey::UnitsSold),
            aggregation::rollup_by_product(filtered),
            NO_DATA,
        ),
        payment_methods: panel(
            bundle.label(LabelKey::PaymentMethods),
            aggregation::rollup_by_payment(filtered),
            NO_DATA,
        ),
        rate_by_city: panel(
            bundle.label(LabelKey::RateByCity),
            aggregation::rollup_by_city(filtered),
            NO_DATA,
        ),
        summary,
    }
}

fn kpi_cards(summary: &KpiSummary, bundle: &LocalizationBundle) -> KpiCards {
    KpiCards {
        total_sales: KpiCard {
            label: bundle.label(LabelKey::KpiTotalSales).to_string(),
            value: Some(summary.total_sales),
            display: format_currency(summary.total_sales),
        },
        total_units: KpiCard {
            label: bundle.label(LabelKey::KpiUnits).to_string(),
            value: Some(Decimal::from(summary.total_units)),
            display: group_thousands(&summary.total_units.to_string()),
        },
        net_sales: KpiCard {
            label: bundle.label(LabelKey::KpiNetSales).to_string(),
            value: Some(summary.net_sales),
            display: format_currency(summary.net_sales),
        },
        average_rating: KpiCard {
            label: bundle.label(LabelKey::KpiRating).to_string(),
            value: summary.average_rating,
            display: summary
                .average_rating
                .map(|rating| format!("{:.2}", rating))
                .unwrap_or_else(|| MISSING_VALUE.to_string()),
        },
    }
}

fn panel<T: utoipa::ToSchema>(title: &str, entries: Vec<T>, placeholder: &str) -> ChartPanel<T> {
    let has_data = !entries.is_empty();
    ChartPanel {
        title: title.to_string(),
        has_data,
        placeholder: (!has_data).then(|| placeholder.to_string()),
        entries,
    }
}

/// `$1,234` (sem centavos).
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);
    let digits = rounded.abs().trunc().to_string();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{}${}", sign, group_thousands(&digits))
}

/// "1234567" -> "1,234,567"
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::generator::generate,
        models::i18n::Language,
        services::i18n_store::I18nStore,
    };

    #[test]
    fn currency_and_units_get_grouped() {
        assert_eq!(format_currency(Decimal::new(123456789, 2)), "$1,234,568");
        assert_eq!(format_currency(Decimal::ZERO), "$0");
        assert_eq!(format_currency(Decimal::new(99949, 2)), "$999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn empty_report_uses_placeholders() {
        let store = I18nStore::load().unwrap();
        let bundle = store.bundle(Language::English).unwrap();
        let report = build_report(&[], bundle);

        assert_eq!(report.row_count, 0);
        assert_eq!(report.kpis.total_sales.display, "$0");
        assert_eq!(report.kpis.average_rating.value, None);
        assert_eq!(report.kpis.average_rating.display, "-");
        assert!(!report.monthly_sales.has_data);
        assert_eq!(report.monthly_sales.placeholder.as_deref(), Some("No data for the selected filters"));
        assert_eq!(report.units_sold.placeholder.as_deref(), Some("No data"));
        assert_eq!(report.payment_methods.placeholder.as_deref(), Some("No data"));
        assert_eq!(report.rate_by_city.placeholder.as_deref(), Some("No data"));
    }

    #[test]
    fn report_is_labelled_in_the_chosen_language() {
        let store = I18nStore::load().unwrap();
        let bundle = store.get_bundle("jerman").unwrap();
        let records = generate(42, 500);
        let report = build_report(&records, bundle);

        assert_eq!(report.language, "jerman");
        assert_eq!(report.title, "Verkaufs-Dashboard");
        assert_eq!(report.kpis.total_sales.label, "Gesamtumsatz");
        assert_eq!(report.monthly_sales.title, "Monatlicher Umsatz");
        assert_eq!(report.rate_by_city.title, "Bewertung nach Stadt");
        assert!(report.monthly_sales.has_data);
        assert_eq!(report.monthly_sales.placeholder, None);
        assert_eq!(report.row_count, 500);
        assert_eq!(report.summary, aggregation::summarize(&records));
    }

    #[test]
    fn rating_card_shows_two_decimals() {
        let store = I18nStore::load().unwrap();
        let records = generate(42, 100);
        let report = build_report(&records, store.bundle(Language::English).unwrap());
        let display = &report.kpis.average_rating.display;
        assert_eq!(display.split('.').nth(1).map(str::len), Some(2), "{}", display);
    }

    #[test]
    fn service_serves_filtered_records() {
        let service = DashboardService::new(SalesRepository::new(42, 300));
        let payload = FilterPayload {
            city: Some(vec!["Mandalay".into()]),
            ..Default::default()
        };
        let filtered = service.get_filtered(&payload).unwrap();
        assert!(!filtered.is_empty());
        assert!(filtered.iter().all(|r| r.city.as_str() == "Mandalay"));

        let options = service.get_filter_options().unwrap();
        assert_eq!(options.cities.len(), 3);
    }
}
