// src/handlers/languages.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::error::AppError,
    config::AppState,
    models::i18n::{LanguageOption, LocalizationBundle},
};

// GET /api/languages
#[utoipa::path(
    get,
    path = "/api/languages",
    tag = "Languages",
    responses(
        (status = 200, description = "Idiomas disponíveis no seletor", body = Vec<LanguageOption>)
    )
)]
pub async fn list_languages(State(app_state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(app_state.i18n_store.list_languages()))
}

// GET /api/languages/{key}
#[utoipa::path(
    get,
    path = "/api/languages/{key}",
    tag = "Languages",
    params(
        ("key" = String, Path, description = "Chave do idioma (ex.: english, japan)")
    ),
    responses(
        (status = 200, description = "Todos os rótulos do idioma", body = LocalizationBundle),
        (status = 404, description = "Idioma não suportado")
    )
)]
pub async fn get_bundle(
    State(app_state): State<AppState>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let bundle = app_state.i18n_store.get_bundle(&key)?;
    Ok((StatusCode::OK, Json(bundle.clone())))
}
