//! Data Transfer Objects
//!
//! Response types for the locale server endpoints.

use serde::Serialize;
use std::collections::BTreeMap;

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded, unhealthy
    pub status: String,
    /// Per-language bundle status: ok, missing, invalid
    pub locales: BTreeMap<String, String>,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}

/// Supported languages listing
#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    pub fallback: String,
    pub languages: Vec<LanguageEntry>,
}

#[derive(Debug, Serialize)]
pub struct LanguageEntry {
    pub code: String,
    pub name: String,
    pub path: String,
}
