//! Localization Resolver
//!
//! Holds the bundle cache and decides which bundle is active.
//!
//! ## Switching
//!
//! 1. `set_language` records the request and takes a generation number
//!    immediately, before the returned future is polled.
//! 2. A cached bundle is activated on the spot; otherwise the source is asked
//!    for it.
//! 3. When the fetch completes the bundle is cached, and activated only if its
//!    language is still the one most recently requested.
//!
//! A failed fetch leaves the previous bundle active. Nothing is retried until
//! the language is selected again.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::bundle::TranslationBundle;
use super::error::BundleResult;
use super::language::LanguageCode;
use super::source::BundleSource;
use super::translations::Translations;

/// Outcome of a language switch. Informational only; failures are absorbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageSwitch {
    /// The bundle is now active
    Applied { language: LanguageCode, cached: bool },
    /// The bundle loaded (and was cached) but a newer request took precedence
    Superseded { language: LanguageCode },
    /// The bundle could not be obtained; the previous bundle stays active
    Failed { language: LanguageCode },
}

impl LanguageSwitch {
    pub fn language(&self) -> LanguageCode {
        match self {
            LanguageSwitch::Applied { language, .. }
            | LanguageSwitch::Superseded { language }
            | LanguageSwitch::Failed { language } => *language,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, LanguageSwitch::Applied { .. })
    }
}

/// Resolves message keys against on-demand loaded bundles
pub struct Localizer<S> {
    source: S,
    fallback: LanguageCode,
    state: RwLock<LocalizerState>,
}

#[derive(Debug)]
struct LocalizerState {
    /// Append-only: entries are added, never replaced or removed
    cache: HashMap<LanguageCode, Arc<TranslationBundle>>,
    active: Option<LanguageCode>,
    requested: LanguageCode,
    generation: u64,
    in_flight: usize,
    ready: bool,
}

enum Ticket<'a> {
    Cached,
    Fetch {
        generation: u64,
        guard: InFlightGuard<'a>,
    },
}

/// Holds one count in `in_flight`; released however the switch future ends
struct InFlightGuard<'a> {
    state: &'a RwLock<LocalizerState>,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.in_flight = state.in_flight.saturating_sub(1);
    }
}

impl<S: BundleSource> Localizer<S> {
    /// Create a resolver falling back to English
    pub fn new(source: S) -> Self {
        Self::with_fallback(source, LanguageCode::FALLBACK)
    }

    pub fn with_fallback(source: S, fallback: LanguageCode) -> Self {
        Self {
            source,
            fallback,
            state: RwLock::new(LocalizerState {
                cache: HashMap::new(),
                active: None,
                requested: fallback,
                generation: 0,
                in_flight: 0,
                ready: false,
            }),
        }
    }

    /// Load the fallback bundle. Until this finishes `is_ready` is false.
    pub async fn init(&self) -> LanguageSwitch {
        let outcome = self.set_language(self.fallback).await;
        self.write().ready = true;

        if !outcome.is_applied() {
            tracing::warn!(
                "Fallback bundle '{}' unavailable from {}; rendering raw keys",
                self.fallback,
                self.source.describe()
            );
        }
        outcome
    }

    /// Request a switch to `language`.
    ///
    /// The request is registered when this is called, so the order of calls
    /// (not the order in which fetches finish) decides which language ends up
    /// active.
    pub fn set_language(
        &self,
        language: LanguageCode,
    ) -> impl Future<Output = LanguageSwitch> + '_ {
        let ticket = self.begin(language);

        async move {
            match ticket {
                Ticket::Cached => LanguageSwitch::Applied {
                    language,
                    cached: true,
                },
                Ticket::Fetch { generation, guard } => {
                    let result = self.source.fetch(language).await;
                    let outcome = self.complete(language, generation, result);
                    drop(guard);
                    outcome
                }
            }
        }
    }

    fn begin(&self, language: LanguageCode) -> Ticket<'_> {
        let mut state = self.write();
        state.generation += 1;
        state.requested = language;

        if state.cache.contains_key(&language) {
            state.active = Some(language);
            tracing::debug!("Switched to cached bundle '{}'", language);
            Ticket::Cached
        } else {
            state.in_flight += 1;
            tracing::debug!(
                "Fetching bundle '{}' from {} (generation {})",
                language,
                self.source.describe(),
                state.generation
            );
            Ticket::Fetch {
                generation: state.generation,
                guard: InFlightGuard { state: &self.state },
            }
        }
    }

    fn complete(
        &self,
        language: LanguageCode,
        generation: u64,
        result: BundleResult<TranslationBundle>,
    ) -> LanguageSwitch {
        let mut state = self.write();

        match result {
            Ok(bundle) => {
                let entries = bundle.len();
                state
                    .cache
                    .entry(language)
                    .or_insert_with(|| Arc::new(bundle));

                // A late response still applies if its language was selected
                // again in the meantime
                if state.generation == generation || state.requested == language {
                    state.active = Some(language);
                    tracing::info!("Applied bundle '{}' ({} messages)", language, entries);
                    LanguageSwitch::Applied {
                        language,
                        cached: false,
                    }
                } else {
                    tracing::debug!(
                        "Bundle '{}' arrived after a newer request; cached but not applied",
                        language
                    );
                    LanguageSwitch::Superseded { language }
                }
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to load bundle '{}': {}; keeping {:?}",
                    language,
                    e,
                    state.active
                );
                LanguageSwitch::Failed { language }
            }
        }
    }

    /// Resolve a key against the active bundle (then the fallback bundle)
    pub fn translate(&self, key: &str) -> String {
        self.snapshot().translate(key)
    }

    /// Resolve a key and fill its `{{name}}` placeholders
    pub fn translate_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        self.snapshot().translate_with(key, args)
    }

    /// The translation context in effect right now
    pub fn snapshot(&self) -> Translations {
        let state = self.read();
        let active = state
            .active
            .and_then(|language| state.cache.get(&language).cloned());
        let fallback = state.cache.get(&self.fallback).cloned();

        Translations::new(active, fallback).with_loading(state.in_flight > 0)
    }

    /// Language whose bundle is currently used for rendering
    pub fn active_language(&self) -> Option<LanguageCode> {
        self.read().active
    }

    /// Language most recently asked for
    pub fn requested_language(&self) -> LanguageCode {
        self.read().requested
    }

    pub fn fallback_language(&self) -> LanguageCode {
        self.fallback
    }

    pub fn is_cached(&self, language: LanguageCode) -> bool {
        self.read().cache.contains_key(&language)
    }

    /// True while any fetch is outstanding
    pub fn is_loading(&self) -> bool {
        self.read().in_flight > 0
    }

    /// True once the initial fallback load has been attempted
    pub fn is_ready(&self) -> bool {
        self.read().ready
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    fn read(&self) -> RwLockReadGuard<'_, LocalizerState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, LocalizerState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
