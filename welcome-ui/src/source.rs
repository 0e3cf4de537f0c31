//! Fetch Bundle Source
//!
//! Loads translation bundles with the browser's `fetch`.

use async_trait::async_trait;
use gloo_net::http::Request;

use welcome::i18n::{
    bundle_path, BundleError, BundleResult, BundleSource, LanguageCode, TranslationBundle,
};

/// Local storage key overriding the locale server
pub const LOCALES_URL_KEY: &str = "welcome_locales_url";

/// Locale server base: the local storage override, else the page origin
pub fn get_locales_base() -> String {
    let window = web_sys::window();

    let url = window
        .as_ref()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(LOCALES_URL_KEY).ok().flatten())
        .or_else(|| window.and_then(|w| w.location().origin().ok()))
        .unwrap_or_default();

    normalize_base(&url)
}

/// Strip trailing slashes so paths can be appended
pub fn normalize_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// Bundle source backed by `fetch`
#[derive(Clone)]
pub struct FetchBundleSource {
    base: String,
}

impl FetchBundleSource {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: normalize_base(&base.into()),
        }
    }

    /// Use the configured or same-origin locale server
    pub fn from_location() -> Self {
        Self::new(get_locales_base())
    }

    pub fn bundle_url(&self, language: LanguageCode) -> String {
        format!("{}{}", self.base, bundle_path(language))
    }
}

#[async_trait(?Send)]
impl BundleSource for FetchBundleSource {
    async fn fetch(&self, language: LanguageCode) -> BundleResult<TranslationBundle> {
        let response = Request::get(&self.bundle_url(language))
            .send()
            .await
            .map_err(|e| BundleError::Transport {
                language,
                message: format!("Network error: {}", e),
            })?;

        if !response.ok() {
            return Err(BundleError::Status {
                language,
                status: response.status(),
            });
        }

        let body = response.text().await.map_err(|e| BundleError::Transport {
            language,
            message: format!("Read error: {}", e),
        })?;

        TranslationBundle::from_json(language, &body)
    }

    fn describe(&self) -> String {
        if self.base.is_empty() {
            "same origin".to_string()
        } else {
            self.base.clone()
        }
    }
}
