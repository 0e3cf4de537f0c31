//! Directory Bundle Source
//!
//! Reads bundles from a `locales/` tree laid out like the server paths:
//! `{root}/{code}/main.json`.

use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};

use super::bundle::TranslationBundle;
use super::error::{BundleError, BundleResult};
use super::language::LanguageCode;
use super::source::BundleSource;

/// File name of every bundle
pub const BUNDLE_FILE: &str = "main.json";

/// Bundle source reading from the local filesystem
#[derive(Debug, Clone)]
pub struct DirBundleSource {
    root: PathBuf,
}

impl DirBundleSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Location of the bundle for `language`
    pub fn bundle_file(&self, language: LanguageCode) -> PathBuf {
        self.root.join(language.code()).join(BUNDLE_FILE)
    }

    /// Read and parse a bundle
    pub async fn load(&self, language: LanguageCode) -> BundleResult<TranslationBundle> {
        let content = self.read(language).await?;
        TranslationBundle::from_json(language, &content)
    }

    /// Read a bundle as it is stored, nesting intact, after checking that it
    /// parses as a bundle
    pub async fn load_raw(&self, language: LanguageCode) -> BundleResult<Value> {
        let content = self.read(language).await?;
        let value: Value = serde_json::from_str(&content)?;
        TranslationBundle::from_value(language, value.clone())?;
        Ok(value)
    }

    async fn read(&self, language: LanguageCode) -> BundleResult<String> {
        let path = self.bundle_file(language);

        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(BundleError::NotFound(language))
            }
            Err(e) => Err(BundleError::Io(e)),
        }
    }
}

#[async_trait(?Send)]
impl BundleSource for DirBundleSource {
    async fn fetch(&self, language: LanguageCode) -> BundleResult<TranslationBundle> {
        self.load(language).await
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_bundle(root: &Path, code: &str, json: &str) {
        let dir = root.join(code);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(BUNDLE_FILE), json).unwrap();
    }

    #[tokio::test]
    async fn test_load_from_directory() {
        let dir = tempdir().unwrap();
        write_bundle(dir.path(), "es", r#"{"welcome": "Bienvenido"}"#);

        let source = DirBundleSource::new(dir.path());
        let bundle = source.fetch(LanguageCode::Es).await.unwrap();

        assert_eq!(bundle.language(), LanguageCode::Es);
        assert_eq!(bundle.get("welcome"), Some("Bienvenido"));
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let source = DirBundleSource::new(dir.path());

        let err = source.load(LanguageCode::En).await.unwrap_err();
        assert!(matches!(err, BundleError::NotFound(LanguageCode::En)));
    }

    #[tokio::test]
    async fn test_malformed_file() {
        let dir = tempdir().unwrap();
        write_bundle(dir.path(), "en", r#"{"welcome": ["not", "a", "string"]}"#);

        let err = DirBundleSource::new(dir.path())
            .load(LanguageCode::En)
            .await
            .unwrap_err();
        assert!(matches!(err, BundleError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_load_raw_keeps_nesting() {
        let dir = tempdir().unwrap();
        write_bundle(dir.path(), "en", r#"{"status": {"active": "Active"}}"#);

        let value = DirBundleSource::new(dir.path())
            .load_raw(LanguageCode::En)
            .await
            .unwrap();
        assert_eq!(value["status"]["active"], "Active");
    }

    #[tokio::test]
    async fn test_repository_locales_are_complete() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("locales");
        let source = DirBundleSource::new(root);

        let en = source.load(LanguageCode::En).await.unwrap();
        let es = source.load(LanguageCode::Es).await.unwrap();

        assert!(es.missing_keys(&en).is_empty());
        assert!(en.missing_keys(&es).is_empty());
    }
}
