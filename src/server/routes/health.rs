//! Health Routes
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (fallback bundle is servable)
//! - GET /health - Full health status with per-language bundle state

use axum::{extract::State, http::StatusCode, Json};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::i18n::{BundleError, LanguageCode};
use crate::server::dto::HealthResponse;
use crate::server::state::AppState;

/// GET /health/live
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Clients cannot render anything but raw keys without the fallback bundle,
/// so readiness requires it to load.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    match state.locales.load(state.fallback).await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!("Fallback bundle '{}' not servable: {}", state.fallback, e);
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

/// GET /health
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let mut locales = BTreeMap::new();
    let mut fallback_ok = false;
    let mut all_ok = true;

    for language in LanguageCode::ALL {
        let status = match state.locales.load(language).await {
            Ok(_) => "ok",
            Err(BundleError::NotFound(_)) => "missing",
            Err(_) => "invalid",
        };

        if status == "ok" {
            fallback_ok |= language == state.fallback;
        } else {
            all_ok = false;
        }
        locales.insert(language.code().to_string(), status.to_string());
    }

    let overall_status = if all_ok {
        "healthy"
    } else if fallback_ok {
        "degraded"
    } else {
        "unhealthy"
    };

    Json(HealthResponse {
        status: overall_status.to_string(),
        locales,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }
}
