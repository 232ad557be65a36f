// src/config.rs

use std::{env, str::FromStr, sync::Arc};

use anyhow::Context;
use validator::Validate;

use crate::{
    common::error::AppError,
    db::SalesRepository,
    models::i18n::Language,
    services::{dashboard_service::DashboardService, i18n_store::I18nStore},
};

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_SEED: u64 = 42;
const DEFAULT_ROWS: usize = 500;
const DEFAULT_LANGUAGE: &str = "english";

/// Configurações lidas do ambiente (.env opcional).
#[derive(Debug, Clone, Validate)]
pub struct Config {
    pub server_addr: String,
    pub dataset_seed: u64,
    #[validate(range(min = 1, max = 100000, message = "DATASET_ROWS deve estar entre 1 e 100000."))]
    pub dataset_rows: usize,
    pub default_language: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        // O .env é opcional: em produção as variáveis vêm do ambiente
        dotenvy::dotenv().ok();

        let config = Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| DEFAULT_SERVER_ADDR.to_string()),
            dataset_seed: parse_var("DATASET_SEED", DEFAULT_SEED)?,
            dataset_rows: parse_var("DATASET_ROWS", DEFAULT_ROWS)?,
            default_language: env::var("DEFAULT_LANGUAGE").unwrap_or_else(|_| DEFAULT_LANGUAGE.to_string()),
        };

        config.validate().map_err(AppError::from)?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: DEFAULT_SERVER_ADDR.to_string(),
            dataset_seed: DEFAULT_SEED,
            dataset_rows: DEFAULT_ROWS,
            default_language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

fn parse_var<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} inválida: '{}'", name, raw)),
        Err(_) => Ok(default),
    }
}

// O estado compartilhado que será acessível em toda a aplicação.
// Tudo aqui é somente leitura; filtros e resultados vivem só na requisição.
#[derive(Clone)]
pub struct AppState {
    pub i18n_store: Arc<I18nStore>,
    pub dashboard_service: DashboardService,
    pub default_language: Language,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        // Falha aqui se algum idioma não tiver todas as chaves
        let i18n_store = I18nStore::load()?;
        tracing::info!("✅ Traduções verificadas ({} idiomas)", i18n_store.list_languages().len());

        let default_language = Language::from_key(&config.default_language)
            .ok_or_else(|| AppError::UnknownLanguage(config.default_language.clone()))?;

        // --- Monta o gráfico de dependências ---
        let sales_repo = SalesRepository::new(config.dataset_seed, config.dataset_rows);
        let dashboard_service = DashboardService::new(sales_repo);

        // Gera o dataset já na subida, não na primeira requisição
        let records = dashboard_service.records()?;
        tracing::info!("✅ Dataset pronto com {} vendas", records.len());

        Ok(Self {
            i18n_store: Arc::new(i18n_store),
            dashboard_service,
            default_language,
        })
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self::new(&Config::default()).expect("estado de teste")
    }
}
