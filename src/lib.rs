//! # Welcome
//!
//! A localized welcome screen: a language switcher backed by on-demand
//! translation bundles, and a session start/end toggle.
//!
//! ## Features
//!
//! - **On-demand bundles**: fetched from `/locales/{code}/main.json` and cached
//! - **Fallback policy**: active bundle, then the fallback language, then the key
//! - **Last request wins**: a slow fetch never overrides a newer selection
//! - **Pure rendering**: the screen is a function of UI state and translations
//!
//! ## Modules
//!
//! - [`i18n`]: Languages, bundles, bundle sources and the resolver
//! - [`view`]: UI state, controller and screen renderer
//! - `config`: TOML configuration (native only)
//! - `server`: Locale server with Axum (native only)
//!
//! The `native` feature (on by default) enables the HTTP client, disk access,
//! the server and the binaries. Without it the crate builds for `wasm32`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use welcome::i18n::{HttpBundleSource, HttpSourceConfig, LanguageCode, Localizer};
//! use welcome::view::ViewController;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = HttpBundleSource::new(HttpSourceConfig::default())?;
//!     let controller = ViewController::new(Arc::new(Localizer::new(source)));
//!
//!     // Load the English bundle
//!     controller.init().await;
//!     println!("{}", controller.render());
//!
//!     // Switch to Spanish and start a session
//!     controller.on_language_change(LanguageCode::Es).await;
//!     controller.on_toggle_session();
//!     println!("{}", controller.render());
//!
//!     Ok(())
//! }
//! ```

pub mod i18n;
pub mod view;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod logging;
#[cfg(feature = "native")]
pub mod server;

// Re-export top-level types for convenience
pub use i18n::{
    BundleError, BundleSource, LanguageCode, LanguageSwitch, Localizer, MemorySource,
    TranslationBundle, Translations,
};

pub use view::{render, Screen, SessionAction, UiState, ViewController};

#[cfg(feature = "native")]
pub use i18n::{DirBundleSource, HttpBundleSource, HttpSourceConfig};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError};

#[cfg(feature = "native")]
pub use server::{build_router, serve, AppState, ServerError};
