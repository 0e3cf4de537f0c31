//! Tracing setup shared by the binaries

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Filter used when neither `RUST_LOG` nor the config names one
pub const DEFAULT_DIRECTIVES: &str = "welcome=info,tower_http=debug";

/// Build the filter: `RUST_LOG` wins, then the configured level.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config.level.is_empty() {
            EnvFilter::new(DEFAULT_DIRECTIVES)
        } else {
            EnvFilter::new(format!("welcome={},tower_http=debug", config.level))
        }
    })
}

/// Install the global subscriber, writing to stderr so stdout stays clean
/// for CLI output. `format = "json"` selects JSON lines.
pub fn init(config: &LoggingConfig) {
    let registry = tracing_subscriber::registry().with(env_filter(config));

    if config.format.eq_ignore_ascii_case("json") {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_from_level() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        };
        if std::env::var("RUST_LOG").is_err() {
            assert!(env_filter(&config).to_string().contains("welcome=debug"));
        }
    }
}
