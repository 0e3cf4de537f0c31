//! Translation Context
//!
//! An immutable view of the bundles in effect at one instant. Rendering takes
//! this as an explicit argument instead of reaching into shared state.

use std::sync::Arc;

use super::bundle::{interpolate, TranslationBundle};
use super::language::LanguageCode;

/// Active and fallback bundles, plus whether a switch is still pending
#[derive(Debug, Clone, Default)]
pub struct Translations {
    active: Option<Arc<TranslationBundle>>,
    fallback: Option<Arc<TranslationBundle>>,
    loading: bool,
}

impl Translations {
    pub fn new(
        active: Option<Arc<TranslationBundle>>,
        fallback: Option<Arc<TranslationBundle>>,
    ) -> Self {
        Self {
            active,
            fallback,
            loading: false,
        }
    }

    /// Context with a single active bundle and no fallback
    pub fn from_bundle(bundle: TranslationBundle) -> Self {
        Self::new(Some(Arc::new(bundle)), None)
    }

    /// No bundles at all: every key renders as itself
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_fallback(mut self, bundle: TranslationBundle) -> Self {
        self.fallback = Some(Arc::new(bundle));
        self
    }

    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Language of the active bundle, if any has loaded
    pub fn language(&self) -> Option<LanguageCode> {
        self.active.as_ref().map(|bundle| bundle.language())
    }

    /// True while a requested bundle has not arrived yet
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Active bundle first, then the fallback bundle
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.active
            .as_deref()
            .and_then(|bundle| bundle.get(key))
            .or_else(|| self.fallback.as_deref().and_then(|bundle| bundle.get(key)))
    }

    /// Resolve `key`, rendering the key itself when no bundle has it
    pub fn translate(&self, key: &str) -> String {
        self.lookup(key).unwrap_or(key).to_string()
    }

    /// Resolve `key` and fill its `{{name}}` placeholders
    pub fn translate_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        interpolate(self.lookup(key).unwrap_or(key), args)
    }
}
