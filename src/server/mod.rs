//! Locale Server
//!
//! Static HTTP server for translation bundles, built with Axum. Any file
//! server honoring the bundle path works with the front end; this one also
//! validates bundles and reports their health.
//!
//! # Endpoints
//!
//! ## Locales
//! - `GET /locales` - Supported languages
//! - `GET /locales/:lang/main.json` - Translation bundle
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! ## Front end
//! - Everything else is served from `static_dir` when configured
//!
//! # Example
//!
//! ```rust,ignore
//! use welcome::config::ServerConfig;
//! use welcome::i18n::{DirBundleSource, LanguageCode};
//! use welcome::server::{serve, AppState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::default();
//!     let state = AppState::new(DirBundleSource::new("./locales"), LanguageCode::En, config.clone());
//!     serve(state, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ServerError, ServerResult};
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::config::ServerConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let locale_routes = Router::new()
        .route("/", get(routes::locales::list_languages))
        .route("/:lang/main.json", get(routes::locales::get_bundle));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let static_dir = state.config.static_dir.clone();
    let shared_state = Arc::new(state);

    let mut router = Router::new()
        .nest("/locales", locale_routes)
        .nest("/health", health_routes);

    if let Some(dir) = static_dir {
        tracing::info!("Serving front end from {:?}", dir);
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ServerError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Locale server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Locale server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{DirBundleSource, LanguageCode};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use std::path::Path;
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    fn write_bundle(root: &Path, code: &str, json: &str) {
        let dir = root.join(code);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("main.json"), json).unwrap();
    }

    fn create_test_app(root: &Path, static_dir: Option<&Path>) -> Router {
        let config = ServerConfig {
            static_dir: static_dir.map(Path::to_path_buf),
            ..Default::default()
        };
        let state = AppState::new(DirBundleSource::new(root), LanguageCode::En, config);
        build_router(state)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_serves_bundle_at_wire_path() {
        let dir = tempdir().unwrap();
        write_bundle(dir.path(), "es", r#"{"welcome": "Bienvenido", "status": {"active": "Activa"}}"#);

        let (status, body) = get(create_test_app(dir.path(), None), "/locales/es/main.json").await;

        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["welcome"], "Bienvenido");
        assert_eq!(json["status"]["active"], "Activa");
    }

    #[tokio::test]
    async fn test_unknown_language_is_404() {
        let dir = tempdir().unwrap();
        write_bundle(dir.path(), "en", r#"{"welcome": "Welcome"}"#);
        let app = create_test_app(dir.path(), None);

        let (status, body) = get(app.clone(), "/locales/fr/main.json").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "NOT_FOUND");

        let (status, _) = get(app, "/locales/EN/main.json").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_missing_bundle_file_is_404() {
        let dir = tempdir().unwrap();
        let (status, _) = get(create_test_app(dir.path(), None), "/locales/es/main.json").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_invalid_bundle_is_500() {
        let dir = tempdir().unwrap();
        write_bundle(dir.path(), "en", r#"{"welcome": 42}"#);

        let (status, body) = get(create_test_app(dir.path(), None), "/locales/en/main.json").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "INVALID_BUNDLE");
    }

    #[tokio::test]
    async fn test_list_languages() {
        let dir = tempdir().unwrap();
        let (status, body) = get(create_test_app(dir.path(), None), "/locales").await;

        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["fallback"], "en");
        assert_eq!(json["languages"][1]["code"], "es");
        assert_eq!(json["languages"][1]["name"], "Spanish");
        assert_eq!(json["languages"][1]["path"], "/locales/es/main.json");
    }

    #[tokio::test]
    async fn test_health() {
        let dir = tempdir().unwrap();
        write_bundle(dir.path(), "en", r#"{"welcome": "Welcome"}"#);
        let app = create_test_app(dir.path(), None);

        let (status, _) = get(app.clone(), "/health/live").await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = get(app.clone(), "/health/ready").await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = get(app, "/health").await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "degraded");
        assert_eq!(json["locales"]["en"], "ok");
        assert_eq!(json["locales"]["es"], "missing");
    }

    #[tokio::test]
    async fn test_not_ready_without_fallback_bundle() {
        let dir = tempdir().unwrap();
        write_bundle(dir.path(), "es", r#"{"welcome": "Bienvenido"}"#);

        let (status, _) = get(create_test_app(dir.path(), None), "/health/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_serves_static_front_end() {
        let locales = tempdir().unwrap();
        let site = tempdir().unwrap();
        std::fs::write(site.path().join("index.html"), "<html>welcome</html>").unwrap();

        let app = create_test_app(locales.path(), Some(site.path()));
        let (status, body) = get(app, "/index.html").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"<html>welcome</html>");
    }

    #[tokio::test]
    async fn test_repository_locales_served() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("locales");
        let app = create_test_app(&root, None);

        for code in ["en", "es"] {
            let (status, _) = get(app.clone(), &format!("/locales/{}/main.json", code)).await;
            assert_eq!(status, StatusCode::OK);
        }
    }
}
