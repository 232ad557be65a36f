// src/middleware/i18n.rs

use axum::extract::{FromRequestParts, Query};
use axum::http::{header, request::Parts};
use serde::Deserialize;

use crate::{common::error::AppError, config::AppState, models::i18n::Language};

// Cabeçalho para a UI fixar o idioma sem mexer na query
pub const LANGUAGE_HEADER: &str = "x-dashboard-language";

// Nosso extrator de idioma
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale(pub Language);

#[derive(Debug, Deserialize)]
struct LangParam {
    lang: Option<String>,
}

impl FromRequestParts<AppState> for Locale {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // 1. Escolha explícita: ?lang=japan (ou o cabeçalho). Chave desconhecida é erro.
        // `?lang=a&lang=b` não é uma escolha: vira erro, nunca o idioma padrão.
        let Query(param) = Query::<LangParam>::try_from_uri(&parts.uri).map_err(|rejection| {
            AppError::InvalidFilter(format!(
                "O parâmetro 'lang' deve aparecer no máximo uma vez ({}).",
                rejection.body_text()
            ))
        })?;
        let from_query = param.lang;

        let from_header = parts
            .headers
            .get(LANGUAGE_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        if let Some(key) = from_query.or(from_header) {
            let key = key.trim().to_lowercase();
            return Language::from_key(&key)
                .map(Locale)
                .ok_or(AppError::UnknownLanguage(key));
        }

        // 2. Negociação pelo Accept-Language: nunca falha, só cai para o padrão
        let negotiated = parts
            .headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|header_value| header_value.to_str().ok())
            .and_then(|header_str| {
                accept_language::parse(header_str)
                    .iter()
                    .find_map(|tag| Language::from_locale_tag(tag))
            });

        Ok(Locale(negotiated.unwrap_or(state.default_language)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn resolve(request: Request<()>) -> Result<Locale, AppError> {
        let state = AppState::for_tests();
        let (mut parts, _) = request.into_parts();
        Locale::from_request_parts(&mut parts, &state).await
    }

    #[tokio::test]
    async fn query_parameter_wins() {
        let request = Request::builder()
            .uri("/api/dashboard?lang=japan&city=Yangon")
            .header(LANGUAGE_HEADER, "korea")
            .header(header::ACCEPT_LANGUAGE, "fr-FR")
            .body(())
            .unwrap();
        assert_eq!(resolve(request).await.unwrap(), Locale(Language::Japan));
    }

    #[tokio::test]
    async fn header_is_used_without_query() {
        let request = Request::builder()
            .uri("/api/dashboard")
            .header(LANGUAGE_HEADER, "Rusia")
            .body(())
            .unwrap();
        assert_eq!(resolve(request).await.unwrap(), Locale(Language::Rusia));
    }

    #[tokio::test]
    async fn unknown_explicit_key_is_rejected() {
        let request = Request::builder()
            .uri("/api/dashboard?lang=klingon")
            .body(())
            .unwrap();
        assert!(matches!(resolve(request).await, Err(AppError::UnknownLanguage(k)) if k == "klingon"));
    }

    #[tokio::test]
    async fn repeated_lang_parameter_is_rejected() {
        let request = Request::builder()
            .uri("/api/dashboard?lang=klingon&lang=japan")
            .header(header::ACCEPT_LANGUAGE, "en")
            .body(())
            .unwrap();
        assert!(matches!(resolve(request).await, Err(AppError::InvalidFilter(_))));

        let request = Request::builder()
            .uri("/api/dashboard?lang=japan&lang=japan")
            .body(())
            .unwrap();
        assert!(matches!(resolve(request).await, Err(AppError::InvalidFilter(_))));
    }

    #[tokio::test]
    async fn repeated_filter_keys_do_not_disturb_the_language() {
        let request = Request::builder()
            .uri("/api/dashboard?city=Yangon&city=Mandalay&lang=thailand")
            .body(())
            .unwrap();
        assert_eq!(resolve(request).await.unwrap(), Locale(Language::Thailand));
    }

    #[tokio::test]
    async fn accept_language_picks_first_supported_tag() {
        let request = Request::builder()
            .uri("/api/dashboard")
            .header(header::ACCEPT_LANGUAGE, "xx-YY, pt-BR;q=0.9, en;q=0.8")
            .body(())
            .unwrap();
        assert_eq!(resolve(request).await.unwrap(), Locale(Language::Brazil));
    }

    #[tokio::test]
    async fn falls_back_to_configured_default() {
        let request = Request::builder()
            .uri("/api/dashboard")
            .header(header::ACCEPT_LANGUAGE, "xx")
            .body(())
            .unwrap();
        assert_eq!(resolve(request).await.unwrap(), Locale(Language::English));
    }
}
