//! Translation Bundles
//!
//! A bundle maps message keys to display strings for one language. The wire
//! format is the i18next `main.json` layout: a JSON object whose leaves are
//! strings. Nested objects are flattened into dotted keys, so
//! `{"status": {"active": "Active"}}` yields the key `status.active`.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::error::{BundleError, BundleResult};
use super::language::LanguageCode;

/// Immutable key → string table for a single language
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationBundle {
    language: LanguageCode,
    messages: BTreeMap<String, String>,
}

impl TranslationBundle {
    /// Build a bundle from already-flat entries
    pub fn new<K, V>(language: LanguageCode, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            language,
            messages: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Parse a `main.json` payload
    pub fn from_json(language: LanguageCode, json: &str) -> BundleResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(language, value)
    }

    /// Build a bundle from a decoded JSON value
    pub fn from_value(language: LanguageCode, value: Value) -> BundleResult<Self> {
        let Value::Object(map) = value else {
            return Err(BundleError::Malformed(
                "bundle root must be a JSON object".to_string(),
            ));
        };

        let mut messages = BTreeMap::new();
        flatten_into(&mut messages, None, map)?;

        Ok(Self { language, messages })
    }

    pub fn language(&self) -> LanguageCode {
        self.language
    }

    /// Look up a message by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterate keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    /// Keys present in `reference` but absent here, sorted
    pub fn missing_keys<'a>(&self, reference: &'a TranslationBundle) -> Vec<&'a str> {
        reference
            .keys()
            .filter(|key| !self.contains_key(key))
            .collect()
    }
}

fn flatten_into(
    out: &mut BTreeMap<String, String>,
    prefix: Option<&str>,
    map: Map<String, Value>,
) -> BundleResult<()> {
    for (key, value) in map {
        let full_key = match prefix {
            Some(prefix) => format!("{}.{}", prefix, key),
            None => key,
        };

        match value {
            Value::String(text) => {
                out.insert(full_key, text);
            }
            Value::Object(nested) => flatten_into(out, Some(&full_key), nested)?,
            other => {
                return Err(BundleError::Malformed(format!(
                    "value for '{}' must be a string, found {}",
                    full_key,
                    json_type_name(&other)
                )));
            }
        }
    }
    Ok(())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Substitute `{{name}}` placeholders with named arguments.
///
/// Whitespace inside the braces is ignored (`{{ name }}`). Placeholders with no
/// matching argument, and unterminated `{{`, are left as written.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    if args.is_empty() || !template.contains("{{") {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        let Some(end) = after_open.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };

        let name = after_open[..end].trim();
        match args.iter().find(|(arg, _)| *arg == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after_open[end + 2..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flat_bundle() {
        let bundle = TranslationBundle::from_json(
            LanguageCode::Es,
            r#"{"welcome": "Bienvenido", "message1": "Hola"}"#,
        )
        .unwrap();

        assert_eq!(bundle.language(), LanguageCode::Es);
        assert_eq!(bundle.len(), 2);
        assert_eq!(bundle.get("welcome"), Some("Bienvenido"));
        assert_eq!(bundle.get("missing"), None);
    }

    #[test]
    fn test_nested_keys_are_flattened() {
        let bundle = TranslationBundle::from_json(
            LanguageCode::En,
            r#"{"status": {"active": "Active", "inactive": "Inactive"}, "welcome": "Welcome"}"#,
        )
        .unwrap();

        assert_eq!(bundle.get("status.active"), Some("Active"));
        assert_eq!(bundle.get("status.inactive"), Some("Inactive"));
        assert_eq!(bundle.keys().collect::<Vec<_>>(), vec!["status.active", "status.inactive", "welcome"]);
    }

    #[test]
    fn test_rejects_non_object_root() {
        let err = TranslationBundle::from_json(LanguageCode::En, r#"["welcome"]"#).unwrap_err();
        assert!(matches!(err, BundleError::Malformed(_)));
    }

    #[test]
    fn test_rejects_non_string_leaf() {
        let err = TranslationBundle::from_json(LanguageCode::En, r#"{"count": 3}"#).unwrap_err();
        match err {
            BundleError::Malformed(msg) => assert!(msg.contains("count")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_invalid_json() {
        let err = TranslationBundle::from_json(LanguageCode::En, "not json").unwrap_err();
        assert!(matches!(err, BundleError::Json(_)));
    }

    #[test]
    fn test_missing_keys() {
        let en = TranslationBundle::new(LanguageCode::En, [("a", "A"), ("b", "B"), ("c", "C")]);
        let es = TranslationBundle::new(LanguageCode::Es, [("a", "A"), ("c", "C")]);

        assert_eq!(es.missing_keys(&en), vec!["b"]);
        assert!(en.missing_keys(&es).is_empty());
    }

    #[test]
    fn test_interpolate() {
        assert_eq!(
            interpolate("Set to {{language}}.", &[("language", "Spanish")]),
            "Set to Spanish."
        );
        assert_eq!(
            interpolate("{{ a }} and {{b}}", &[("a", "1"), ("b", "2")]),
            "1 and 2"
        );
    }

    #[test]
    fn test_interpolate_leaves_unknown_placeholders() {
        assert_eq!(interpolate("Hi {{name}}", &[("other", "x")]), "Hi {{name}}");
        assert_eq!(interpolate("Broken {{name", &[("name", "x")]), "Broken {{name");
        assert_eq!(interpolate("No args {{name}}", &[]), "No args {{name}}");
    }
}
