//! Welcome CLI
//!
//! Drives the welcome screen from the terminal:
//! - Render the screen for a language and session state
//! - Check bundles for missing keys
//! - Print a default configuration file

use anyhow::{bail, Context};
use async_trait::async_trait;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use welcome::config::{generate_default_config, Config};
use welcome::i18n::{
    BundleResult, BundleSource, DirBundleSource, HttpBundleSource, LanguageCode, Localizer,
    TranslationBundle,
};
use welcome::view::{keys, ViewController};

#[derive(Parser)]
#[command(name = "welcome")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Localized welcome screen")]
#[command(long_about = "Render the localized welcome screen from the terminal.\nBundles are fetched from a locale server, or read from a locales directory.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the usual locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Locale server URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Read bundles from this directory instead of over HTTP
    #[arg(long, global = true, conflicts_with = "base_url")]
    pub locales_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the screen
    Render {
        /// Language to select after the initial load
        #[arg(short, long, default_value = "en")]
        lang: LanguageCode,
        /// Press the start button once
        #[arg(long)]
        toggle_session: bool,
        /// Print the screen as JSON
        #[arg(long)]
        json: bool,
    },

    /// Load every bundle and report missing keys
    Check,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Bundle source picked from the command line and config
enum CliSource {
    Http(HttpBundleSource),
    Dir(DirBundleSource),
}

#[async_trait(?Send)]
impl BundleSource for CliSource {
    async fn fetch(&self, language: LanguageCode) -> BundleResult<TranslationBundle> {
        match self {
            CliSource::Http(source) => source.fetch(language).await,
            CliSource::Dir(source) => source.fetch(language).await,
        }
    }

    fn describe(&self) -> String {
        match self {
            CliSource::Http(source) => source.describe(),
            CliSource::Dir(source) => source.describe(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        return write_default_config(output.as_ref());
    }

    let mut config = Config::resolve(cli.config.as_deref()).context("loading configuration")?;
    if let Some(url) = &cli.base_url {
        config.client.base_url = url.clone();
    }
    welcome::logging::init(&config.logging);

    let source = match &cli.locales_dir {
        Some(dir) => CliSource::Dir(DirBundleSource::new(dir)),
        None => CliSource::Http(HttpBundleSource::new(config.client.http_source())?),
    };

    match cli.command {
        Commands::Render {
            lang,
            toggle_session,
            json,
        } => render(source, config.i18n.fallback_language, lang, toggle_session, json).await,
        Commands::Check => check(source, config.i18n.fallback_language).await,
        Commands::Config { .. } => Ok(()),
    }
}

async fn render(
    source: CliSource,
    fallback: LanguageCode,
    lang: LanguageCode,
    toggle_session: bool,
    json: bool,
) -> anyhow::Result<()> {
    let controller = ViewController::new(Arc::new(Localizer::with_fallback(source, fallback)));
    controller.init().await;

    if lang != controller.state().active_language {
        controller.on_language_change(lang).await;
    }
    if toggle_session {
        controller.on_toggle_session();
    }

    let screen = controller.render();
    if json {
        println!("{}", serde_json::to_string_pretty(&screen)?);
    } else {
        println!("{}", screen);
    }
    Ok(())
}

async fn check(source: CliSource, fallback: LanguageCode) -> anyhow::Result<()> {
    println!("Checking bundles from {}", source.describe());

    let reference = source
        .fetch(fallback)
        .await
        .with_context(|| format!("fallback bundle '{}' is unavailable", fallback))?;

    let mut problems = 0;
    for language in LanguageCode::ALL {
        let bundle = match source.fetch(language).await {
            Ok(bundle) => bundle,
            Err(e) => {
                println!("  {:<3} FAILED  {}", language, e);
                problems += 1;
                continue;
            }
        };

        let mut missing: Vec<&str> = keys::ALL
            .iter()
            .copied()
            .filter(|key| !bundle.contains_key(key))
            .collect();
        for key in bundle.missing_keys(&reference) {
            if !missing.contains(&key) {
                missing.push(key);
            }
        }

        if missing.is_empty() {
            println!("  {:<3} ok      {} messages", language, bundle.len());
        } else {
            println!("  {:<3} MISSING {}", language, missing.join(", "));
            problems += 1;
        }
    }

    if problems > 0 {
        bail!("{} bundle(s) have problems", problems);
    }
    Ok(())
}

fn write_default_config(output: Option<&PathBuf>) -> anyhow::Result<()> {
    let content = generate_default_config();
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("Wrote default config to {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}
