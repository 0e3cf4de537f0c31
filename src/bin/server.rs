//! Welcome Locale Server
//!
//! Run with: cargo run --bin welcome-server
//!
//! # Configuration
//!
//! Read from `--config`, `~/.config/welcome/config.toml` or `./config.toml`.
//! Environment variables override the file:
//! - `WELCOME_HOST`: Host to bind to (default: 0.0.0.0)
//! - `WELCOME_PORT`: Port to listen on (default: 8084)
//! - `WELCOME_LOCALES_DIR`: Bundle directory (default: ./locales)
//! - `WELCOME_LOG_LEVEL`, `WELCOME_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Full filter directives (overrides the log level)

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use welcome::config::Config;
use welcome::i18n::{DirBundleSource, LanguageCode};
use welcome::server::{serve, AppState};

#[derive(Parser)]
#[command(name = "welcome-server")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve translation bundles and the welcome front end")]
struct Args {
    /// Config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory with the built front end
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::resolve(args.config.as_deref()).context("loading configuration")?;
    if args.static_dir.is_some() {
        config.server.static_dir = args.static_dir;
    }

    welcome::logging::init(&config.logging);

    tracing::info!("Starting welcome locale server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Locales directory: {:?}", config.i18n.locales_dir);

    let locales = DirBundleSource::new(&config.i18n.locales_dir);

    // Report bundle state up front; the server still starts with gaps
    for language in LanguageCode::ALL {
        match locales.load(language).await {
            Ok(bundle) => tracing::info!("Bundle '{}': {} messages", language, bundle.len()),
            Err(e) => tracing::warn!("Bundle '{}' unavailable: {}", language, e),
        }
    }

    let state = AppState::new(locales, config.i18n.fallback_language, config.server.clone());

    tracing::info!("Starting server on {}", config.server.addr());
    serve(state, &config.server).await?;

    tracing::info!("Welcome locale server stopped");
    Ok(())
}
