//! Supported Languages
//!
//! The fixed set of languages the screen can be shown in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A supported language, identified by its two-letter code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    #[default]
    En,
    Es,
}

impl LanguageCode {
    /// Every supported language, in selector order
    pub const ALL: [LanguageCode; 2] = [LanguageCode::En, LanguageCode::Es];

    /// The language used when a requested bundle is unavailable
    pub const FALLBACK: LanguageCode = LanguageCode::En;

    /// Two-letter code, as used in bundle paths
    pub fn code(&self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Es => "es",
        }
    }

    /// Human-readable name shown in the selector and status line
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageCode::En => "English",
            LanguageCode::Es => "Spanish",
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Returned when a language code is not one of the supported set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported language code: {0:?}")]
pub struct LanguageParseError(pub String);

impl FromStr for LanguageCode {
    type Err = LanguageParseError;

    /// Accepts `en`, `ES`, ` es ` and region-qualified tags such as `es-MX`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "en" => Ok(LanguageCode::En),
            "es" => Ok(LanguageCode::Es),
            _ => Err(LanguageParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes() {
        assert_eq!("en".parse::<LanguageCode>().unwrap(), LanguageCode::En);
        assert_eq!(" ES ".parse::<LanguageCode>().unwrap(), LanguageCode::Es);
        assert_eq!("es-MX".parse::<LanguageCode>().unwrap(), LanguageCode::Es);
        assert_eq!("en_GB".parse::<LanguageCode>().unwrap(), LanguageCode::En);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "fr".parse::<LanguageCode>().unwrap_err();
        assert_eq!(err, LanguageParseError("fr".to_string()));
        assert!("".parse::<LanguageCode>().is_err());
    }

    #[test]
    fn test_default_is_fallback() {
        assert_eq!(LanguageCode::default(), LanguageCode::FALLBACK);
        assert_eq!(LanguageCode::FALLBACK.code(), "en");
    }

    #[test]
    fn test_serde_uses_code() {
        let json = serde_json::to_string(&LanguageCode::Es).unwrap();
        assert_eq!(json, "\"es\"");
        let back: LanguageCode = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(back, LanguageCode::En);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(LanguageCode::En.display_name(), "English");
        assert_eq!(LanguageCode::Es.display_name(), "Spanish");
        assert_eq!(LanguageCode::Es.to_string(), "es");
    }
}
