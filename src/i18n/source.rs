//! Bundle Sources
//!
//! Where translation bundles come from. The resolver only needs `fetch`;
//! HTTP, on-disk and browser implementations live behind this trait.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use super::bundle::TranslationBundle;
use super::error::{BundleError, BundleResult};
use super::language::LanguageCode;

/// Relative path of a bundle on a locale server
pub fn bundle_path(language: LanguageCode) -> String {
    format!("/locales/{}/main.json", language.code())
}

/// A provider of translation bundles
///
/// Fetch futures are not required to be `Send`: bundles are loaded on the
/// UI thread, which in the browser means `spawn_local`.
#[async_trait(?Send)]
pub trait BundleSource {
    /// Obtain the bundle for `language`
    async fn fetch(&self, language: LanguageCode) -> BundleResult<TranslationBundle>;

    /// Short description for log lines
    fn describe(&self) -> String;
}

#[async_trait(?Send)]
impl<S> BundleSource for Arc<S>
where
    S: BundleSource + ?Sized,
{
    async fn fetch(&self, language: LanguageCode) -> BundleResult<TranslationBundle> {
        (**self).fetch(language).await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Bundles held in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    bundles: HashMap<LanguageCode, TranslationBundle>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bundle, replacing any existing one for the same language
    pub fn with_bundle(mut self, bundle: TranslationBundle) -> Self {
        self.bundles.insert(bundle.language(), bundle);
        self
    }
}

#[async_trait(?Send)]
impl BundleSource for MemorySource {
    async fn fetch(&self, language: LanguageCode) -> BundleResult<TranslationBundle> {
        self.bundles
            .get(&language)
            .cloned()
            .ok_or(BundleError::NotFound(language))
    }

    fn describe(&self) -> String {
        format!("memory ({} bundles)", self.bundles.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_path() {
        assert_eq!(bundle_path(LanguageCode::En), "/locales/en/main.json");
        assert_eq!(bundle_path(LanguageCode::Es), "/locales/es/main.json");
    }

    #[tokio::test]
    async fn test_memory_source() {
        let source = MemorySource::new()
            .with_bundle(TranslationBundle::new(LanguageCode::En, [("welcome", "Welcome")]));

        let bundle = source.fetch(LanguageCode::En).await.unwrap();
        assert_eq!(bundle.get("welcome"), Some("Welcome"));

        let err = source.fetch(LanguageCode::Es).await.unwrap_err();
        assert!(matches!(err, BundleError::NotFound(LanguageCode::Es)));
    }

    #[tokio::test]
    async fn test_arc_source_delegates() {
        let source = Arc::new(
            MemorySource::new().with_bundle(TranslationBundle::new(LanguageCode::Es, [("a", "b")])),
        );
        assert!(source.fetch(LanguageCode::Es).await.is_ok());
        assert_eq!(source.describe(), "memory (1 bundles)");
    }
}
