//! Server State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;
use crate::i18n::{DirBundleSource, LanguageCode};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Bundles served at /locales
    pub locales: Arc<DirBundleSource>,
    /// Language clients fall back to
    pub fallback: LanguageCode,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(locales: DirBundleSource, fallback: LanguageCode, config: ServerConfig) -> Self {
        Self {
            locales: Arc::new(locales),
            fallback,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
