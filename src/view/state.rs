//! UI State
//!
//! The two values the screen is a projection of. Only user actions change
//! them, and nothing is persisted.

use serde::Serialize;

use crate::i18n::LanguageCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct UiState {
    /// Language picked in the selector
    pub active_language: LanguageCode,
    /// Whether the user has started a session
    pub session_active: bool,
}

impl UiState {
    pub fn new(active_language: LanguageCode) -> Self {
        Self {
            active_language,
            session_active: false,
        }
    }

    /// Same state with the session flag flipped
    pub fn toggled(self) -> Self {
        Self {
            session_active: !self.session_active,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = UiState::default();
        assert_eq!(state.active_language, LanguageCode::En);
        assert!(!state.session_active);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let state = UiState::new(LanguageCode::Es);
        assert!(state.toggled().session_active);
        assert_eq!(state.toggled().toggled(), state);
    }
}
