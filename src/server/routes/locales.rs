//! Locale Routes
//!
//! - GET /locales - Supported languages and their bundle paths
//! - GET /locales/:lang/main.json - Translation bundle for one language

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::i18n::{bundle_path, LanguageCode};
use crate::server::dto::{LanguageEntry, LanguagesResponse};
use crate::server::error::{ServerError, ServerResult};
use crate::server::state::AppState;

/// GET /locales/:lang/main.json
///
/// Only canonical codes are served; `es-MX` or `ES` get a 404 so that a
/// client's fallback kicks in exactly as it would against a plain file server.
pub async fn get_bundle(
    State(state): State<Arc<AppState>>,
    Path(lang): Path<String>,
) -> ServerResult<Json<Value>> {
    let language = lang
        .parse::<LanguageCode>()
        .ok()
        .filter(|language| language.code() == lang)
        .ok_or_else(|| ServerError::NotFound(format!("unsupported language '{}'", lang)))?;

    let bundle = state.locales.load_raw(language).await?;
    tracing::debug!("Serving bundle '{}'", language);

    Ok(Json(bundle))
}

/// GET /locales
pub async fn list_languages(State(state): State<Arc<AppState>>) -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        fallback: state.fallback.code().to_string(),
        languages: LanguageCode::ALL
            .iter()
            .map(|language| LanguageEntry {
                code: language.code().to_string(),
                name: language.display_name().to_string(),
                path: bundle_path(*language),
            })
            .collect(),
    })
}
