//! UI Components

pub mod loading;
pub mod welcome;

pub use loading::Loading;
pub use welcome::{Heading, LanguagePanel, SessionPanel};
