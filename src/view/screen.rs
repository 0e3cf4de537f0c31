//! Screen Description
//!
//! What the welcome screen shows, as plain data. `render` is a pure function
//! of the UI state and a translation context; front ends only lay it out.

use serde::Serialize;
use std::fmt;

use super::keys;
use super::state::UiState;
use crate::i18n::{LanguageCode, Translations};

/// Logo asset, relative to the served front end
pub const LOGO_SRC: &str = "esal_logo_blk.png";

/// Everything displayed on the welcome screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Screen {
    pub logo: Logo,
    pub heading: String,
    pub intro: String,
    pub session_button: SessionButton,
    pub status: String,
    pub language_status: String,
    pub language_selector: LanguageSelector,
    /// A bundle switch is still in flight
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Logo {
    pub src: &'static str,
    pub alt: &'static str,
}

/// What pressing the session button will do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionAction {
    Start,
    End,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionButton {
    pub label: String,
    pub action: SessionAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageSelector {
    pub options: Vec<LanguageOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageOption {
    pub value: LanguageCode,
    pub label: &'static str,
    pub selected: bool,
}

impl LanguageSelector {
    /// Currently selected language
    pub fn selected(&self) -> Option<LanguageCode> {
        self.options
            .iter()
            .find(|option| option.selected)
            .map(|option| option.value)
    }
}

/// Project UI state through the given translations
pub fn render(state: &UiState, translations: &Translations) -> Screen {
    let (button_key, action) = if state.session_active {
        (keys::SESSION_END, SessionAction::End)
    } else {
        (keys::SESSION_START, SessionAction::Start)
    };

    let status_key = if state.session_active {
        keys::STATUS_ACTIVE
    } else {
        keys::STATUS_INACTIVE
    };

    let language_name = state.active_language.display_name();

    Screen {
        logo: Logo {
            src: LOGO_SRC,
            alt: "logo",
        },
        heading: translations.translate(keys::WELCOME),
        intro: translations.translate(keys::INTRO),
        session_button: SessionButton {
            label: translations.translate(button_key),
            action,
        },
        status: translations.translate(status_key),
        language_status: translations
            .translate_with(keys::LANGUAGE_STATUS, &[("language", language_name)]),
        language_selector: LanguageSelector {
            options: LanguageCode::ALL
                .iter()
                .map(|&language| LanguageOption {
                    value: language,
                    label: language.display_name(),
                    selected: language == state.active_language,
                })
                .collect(),
        },
        loading: translations.is_loading(),
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", self.logo.alt)?;
        writeln!(f, "# {}", self.heading)?;
        writeln!(f, "{}", self.intro)?;
        writeln!(f, "[ {} ]", self.session_button.label)?;
        writeln!(f, "{}", self.status)?;
        writeln!(f, "{}", self.language_status)?;

        let options: Vec<String> = self
            .language_selector
            .options
            .iter()
            .map(|option| {
                if option.selected {
                    format!("(*) {}", option.label)
                } else {
                    format!("( ) {}", option.label)
                }
            })
            .collect();
        write!(f, "{}", options.join("  "))?;

        if self.loading {
            write!(f, "\n...")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{en_bundle, es_bundle};

    fn english() -> Translations {
        Translations::from_bundle(en_bundle())
    }

    fn spanish() -> Translations {
        Translations::from_bundle(es_bundle()).with_fallback(en_bundle())
    }

    #[test]
    fn test_initial_screen() {
        let screen = render(&UiState::default(), &english());

        assert_eq!(screen.heading, "Welcome");
        assert_eq!(screen.intro, "Thanks for stopping by.");
        assert_eq!(screen.session_button.label, "Start");
        assert_eq!(screen.session_button.action, SessionAction::Start);
        assert_eq!(screen.status, "Inactive");
        assert_eq!(
            screen.language_status,
            "The language is currently set to English."
        );
        assert_eq!(screen.language_selector.selected(), Some(LanguageCode::En));
        assert_eq!(screen.language_selector.options.len(), 2);
        assert!(!screen.loading);
    }

    #[test]
    fn test_active_session() {
        let state = UiState::default().toggled();
        let screen = render(&state, &english());

        assert_eq!(screen.session_button.label, "End");
        assert_eq!(screen.session_button.action, SessionAction::End);
        assert_eq!(screen.status, "Active");
    }

    #[test]
    fn test_spanish_screen() {
        let state = UiState::new(LanguageCode::Es);
        let screen = render(&state, &spanish());

        assert_eq!(screen.heading, "Bienvenido");
        assert_eq!(screen.session_button.label, "Iniciar");
        assert_eq!(screen.status, "Inactiva");
        assert!(screen.language_status.contains("Spanish"));
        assert_eq!(screen.language_selector.selected(), Some(LanguageCode::Es));
    }

    #[test]
    fn test_missing_keys_render_as_keys() {
        let screen = render(&UiState::default(), &Translations::empty());

        assert_eq!(screen.heading, "welcome");
        assert_eq!(screen.session_button.label, "session.start");
        assert_eq!(screen.status, "status.inactive");
        assert_eq!(screen.language_status, "languageStatus");
    }

    #[test]
    fn test_render_is_pure() {
        let state = UiState::new(LanguageCode::Es).toggled();
        let translations = spanish();
        assert_eq!(render(&state, &translations), render(&state, &translations));
    }

    #[test]
    fn test_display() {
        let text = render(&UiState::default(), &english()).to_string();
        assert!(text.contains("# Welcome"));
        assert!(text.contains("[ Start ]"));
        assert!(text.contains("(*) English  ( ) Spanish"));
    }

    #[test]
    fn test_serializes_codes() {
        let screen = render(&UiState::default(), &english());
        let json = serde_json::to_value(&screen).unwrap();

        assert_eq!(json["session_button"]["action"], "start");
        assert_eq!(json["language_selector"]["options"][1]["value"], "es");
    }
}
