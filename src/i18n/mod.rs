//! Localization
//!
//! Translation bundles, the sources they are loaded from, and the resolver
//! that keeps one of them active.
//!
//! ## Architecture
//!
//! - **LanguageCode**: the fixed set of supported languages
//! - **TranslationBundle**: key → string table for one language
//! - **BundleSource**: where bundles come from (HTTP, disk, memory)
//! - **Localizer**: caches bundles and switches the active one
//! - **Translations**: immutable snapshot handed to rendering
//!
//! ## Key resolution
//!
//! 1. Active bundle
//! 2. Fallback-language bundle
//! 3. The key itself

mod bundle;
mod error;
mod language;
mod localizer;
mod source;
mod translations;

#[cfg(feature = "native")]
mod dir;
#[cfg(feature = "native")]
mod http;

pub use bundle::{interpolate, TranslationBundle};
pub use error::{BundleError, BundleResult};
pub use language::{LanguageCode, LanguageParseError};
pub use localizer::{LanguageSwitch, Localizer};
pub use source::{bundle_path, BundleSource, MemorySource};
pub use translations::Translations;

#[cfg(feature = "native")]
pub use dir::{DirBundleSource, BUNDLE_FILE};
#[cfg(feature = "native")]
pub use http::{HttpBundleSource, HttpSourceConfig};

#[cfg(test)]
pub(crate) use localizer::tests::{en_bundle, es_bundle, CountingSource, ScriptedSource};
