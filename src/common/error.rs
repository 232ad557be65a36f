use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::models::i18n::{Language, LabelKey};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Nunca caímos para um idioma padrão em silêncio: isso esconderia um bug no pacote de traduções.
    #[error("Idioma não suportado: {0}")]
    UnknownLanguage(String),

    #[error("Filtro inválido: {0}")]
    InvalidFilter(String),

    // Detectado na inicialização, antes de o servidor aceitar requisições.
    #[error("Tradução incompleta: {language:?} não define {missing:?}")]
    IncompleteLocalization {
        language: Language,
        missing: Vec<LabelKey>,
    },

    // Rótulo em branco, chave repetida ou idioma repetido na tabela.
    #[error("Tradução inválida para {language:?}: {reason}")]
    InvalidLocalization {
        language: Language,
        reason: String,
    },

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors.iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::UnknownLanguage(key) => (
                StatusCode::NOT_FOUND,
                format!("Idioma '{}' não é suportado.", key),
            ),
            AppError::InvalidFilter(reason) => (StatusCode::BAD_REQUEST, reason),

            // O resto vira 500. O detalhe fica só no log.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Ocorreu um erro inesperado.".to_string())
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
