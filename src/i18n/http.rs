//! HTTP Bundle Source
//!
//! Fetches `GET {base_url}/locales/{code}/main.json` from any static file
//! server.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::bundle::TranslationBundle;
use super::error::{BundleError, BundleResult};
use super::language::LanguageCode;
use super::source::{bundle_path, BundleSource};

/// Configuration for the HTTP source
#[derive(Debug, Clone)]
pub struct HttpSourceConfig {
    /// Base URL of the locale server (e.g., "http://localhost:8084")
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for HttpSourceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8084".to_string(),
            request_timeout_ms: 5000,
        }
    }
}

/// Bundle source backed by a locale server
pub struct HttpBundleSource {
    client: Client,
    config: HttpSourceConfig,
}

impl HttpBundleSource {
    pub fn new(config: HttpSourceConfig) -> BundleResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| BundleError::Transport {
                language: LanguageCode::FALLBACK,
                message: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &HttpSourceConfig {
        &self.config
    }

    /// Full URL of the bundle for `language`
    pub fn bundle_url(&self, language: LanguageCode) -> String {
        format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            bundle_path(language)
        )
    }
}

#[async_trait(?Send)]
impl BundleSource for HttpBundleSource {
    async fn fetch(&self, language: LanguageCode) -> BundleResult<TranslationBundle> {
        let url = self.bundle_url(language);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            let message = if e.is_timeout() {
                "request timed out".to_string()
            } else if e.is_connect() {
                "locale server unavailable".to_string()
            } else {
                e.to_string()
            };
            BundleError::Transport { language, message }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BundleError::Status {
                language,
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| BundleError::Transport {
            language,
            message: e.to_string(),
        })?;

        TranslationBundle::from_json(language, &body)
    }

    fn describe(&self) -> String {
        self.config.base_url.clone()
    }
}
