//! View Controller
//!
//! Owns the UI state, forwards language changes to the resolver and renders
//! the screen from both.

use std::future::Future;
use std::sync::{Arc, PoisonError, RwLock};

use super::screen::{render, Screen};
use super::state::UiState;
use crate::i18n::{BundleSource, LanguageCode, LanguageSwitch, Localizer};

pub struct ViewController<S> {
    state: RwLock<UiState>,
    localizer: Arc<Localizer<S>>,
}

impl<S: BundleSource> ViewController<S> {
    /// Start in the resolver's fallback language with no active session
    pub fn new(localizer: Arc<Localizer<S>>) -> Self {
        let state = UiState::new(localizer.fallback_language());
        Self {
            state: RwLock::new(state),
            localizer,
        }
    }

    /// Load the initial bundle
    pub async fn init(&self) -> LanguageSwitch {
        self.localizer.init().await
    }

    /// Handle a selection in the language selector.
    ///
    /// The selected language is recorded before this returns; the returned
    /// future completes when the bundle switch has been applied, superseded
    /// or has failed. Re-render after awaiting it.
    pub fn on_language_change(
        &self,
        language: LanguageCode,
    ) -> impl Future<Output = LanguageSwitch> + '_ {
        self.select_language(language);
        self.localizer.set_language(language)
    }

    /// Record a selection without starting the bundle switch. Front ends that
    /// drive the switch on a separate task call this first so the selector
    /// updates right away.
    pub fn select_language(&self, language: LanguageCode) -> UiState {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.active_language = language;
        tracing::info!("Language selected: {}", language);
        *state
    }

    /// Handle a click on the start/end button. Returns the new state.
    pub fn on_toggle_session(&self) -> UiState {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        *state = state.toggled();
        tracing::info!(
            "Session {}",
            if state.session_active { "started" } else { "ended" }
        );
        *state
    }

    pub fn state(&self) -> UiState {
        *self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Screen for the current state and translations
    pub fn render(&self) -> Screen {
        render(&self.state(), &self.localizer.snapshot())
    }

    pub fn localizer(&self) -> &Arc<Localizer<S>> {
        &self.localizer
    }

    /// True once the initial bundle load has been attempted
    pub fn is_ready(&self) -> bool {
        self.localizer.is_ready()
    }
}
