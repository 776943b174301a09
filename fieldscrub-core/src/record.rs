//! Applying a `SanitizationConfig` to a whole record.
//!
//! Only fields that are configured, present, and hold a non-empty JSON string
//! are touched. Everything is computed before anything is written, so a
//! configuration error leaves the record exactly as it was.

use log::debug;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::config::SanitizationConfig;
use crate::errors::{Location, Result};
use crate::input_class::expand;
use crate::log_mask::loggable;
use crate::pipeline::Pipeline;
use crate::sanitizers::registry::Registry;

/// The structured object being sanitized.
pub type Record = serde_json::Map<String, Value>;

/// The before and after value of one changed field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldChange {
    pub original: String,
    pub sanitized: String,
}

/// Fields whose value changed during one application, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SanitizationReport {
    changes: BTreeMap<String, FieldChange>,
}

impl SanitizationReport {
    pub fn get(&self, field: &str) -> Option<&FieldChange> {
        self.changes.get(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldChange)> {
        self.changes.iter()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Field name to value before sanitizing, for audit trails.
    pub fn original_values(&self) -> BTreeMap<String, String> {
        self.changes
            .iter()
            .map(|(field, change)| (field.clone(), change.original.clone()))
            .collect()
    }
}

/// Sanitizes `record` with the global registry.
pub fn apply_to_record(record: &mut Record, config: &SanitizationConfig) -> Result<SanitizationReport> {
    apply_to_record_with(record, config, Registry::global(), None)
}

/// Sanitizes every configured string field of `record` in place.
///
/// `model` only labels errors and log lines.
pub fn apply_to_record_with(
    record: &mut Record,
    config: &SanitizationConfig,
    registry: &Registry,
    model: Option<&str>,
) -> Result<SanitizationReport> {
    let mut pending = Vec::new();

    for (field, field_config) in config.fields() {
        let original = match record.get(field) {
            Some(Value::String(s)) if !s.is_empty() => s,
            Some(other) => {
                debug!("Skipping field '{}': not a non-empty string ({})", field, value_kind(other));
                continue;
            }
            None => continue,
        };

        let location = Location {
            model: model.map(str::to_string),
            field: Some(field.clone()),
        };
        let names = expand(field_config, registry, &location)?;
        let sanitized = Pipeline::build(&names, registry, &location)?.run(original);

        if &sanitized != original {
            debug!("Field '{}' sanitized: {} -> {}", field, loggable(original), loggable(&sanitized));
            pending.push((field.clone(), original.clone(), sanitized));
        }
    }

    let mut report = SanitizationReport::default();
    for (field, original, sanitized) in pending {
        record.insert(field.clone(), Value::String(sanitized.clone()));
        report.changes.insert(field, FieldChange { original, sanitized });
    }

    debug!(
        "Applied sanitization config to {}: {} field(s) changed.",
        model.unwrap_or("record"),
        report.len()
    );
    Ok(report)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "empty string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExplicitConfig, FieldConfig};
    use crate::errors::FieldscrubError;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {}", other),
        }
    }

    fn book_config() -> SanitizationConfig {
        SanitizationConfig::new()
            .with_field("name", FieldConfig::preset("oneLineString"))
            .with_field("description", FieldConfig::preset("multiLineString"))
    }

    #[test]
    fn test_sanitizes_configured_fields_only() -> Result<()> {
        let mut book = record(json!({
            "name": " book\n1 ",
            "description": "book\n1\n",
            "isbn": " 978 ",
        }));
        let report = apply_to_record(&mut book, &book_config())?;

        assert_eq!(book["name"], json!("book 1"));
        assert_eq!(book["description"], json!("book\n1"));
        assert_eq!(book["isbn"], json!(" 978 "));
        assert_eq!(report.len(), 2);
        assert_eq!(report.get("name").map(|c| c.original.as_str()), Some(" book\n1 "));
        Ok(())
    }

    #[test]
    fn test_unchanged_fields_not_reported() -> Result<()> {
        let mut book = record(json!({ "name": "clean", "description": "book\n 1" }));
        let report = apply_to_record(&mut book, &book_config())?;
        assert!(report.is_empty());
        assert_eq!(book["description"], json!("book\n 1"));
        Ok(())
    }

    #[test]
    fn test_non_string_values_bypass() -> Result<()> {
        let mut book = record(json!({
            "name": 42,
            "description": null,
        }));
        let before = book.clone();
        let report = apply_to_record(&mut book, &book_config())?;
        assert!(report.is_empty());
        assert_eq!(book, before);

        let mut nested = record(json!({ "name": { "first": " a " }, "description": [" b "] }));
        let before = nested.clone();
        apply_to_record(&mut nested, &book_config())?;
        assert_eq!(nested, before);
        Ok(())
    }

    #[test]
    fn test_error_leaves_record_untouched() {
        let config = SanitizationConfig::new()
            .with_field("author", FieldConfig::preset("oneLineString"))
            .with_field("title", FieldConfig::Explicit(ExplicitConfig::new().enable("shout")));
        let mut book = record(json!({ "author": " Alex ", "title": " T " }));
        let before = book.clone();

        let err = apply_to_record_with(&mut book, &config, &Registry::builtin(), Some("Book")).unwrap_err();
        assert!(matches!(
            err,
            FieldscrubError::UnknownSanitizer { ref name, ref location }
                if name == "shout" && *location == Location::new("Book", "title")
        ));
        assert_eq!(book, before);
    }

    #[test]
    fn test_unknown_name_set_to_false_rejected() {
        let config = SanitizationConfig::from_yaml_str("author: oneLineString\ntitle:\n  bogus: false\n").unwrap();
        let mut book = record(json!({ "author": " Alex ", "title": " T " }));
        let before = book.clone();

        let err = apply_to_record_with(&mut book, &config, &Registry::builtin(), Some("Book")).unwrap_err();
        assert!(matches!(
            err,
            FieldscrubError::UnknownSanitizer { ref name, ref location }
                if name == "bogus" && *location == Location::new("Book", "title")
        ));
        assert_eq!(book, before);
    }

    #[test]
    fn test_misconfigured_field_skipped_when_empty() -> Result<()> {
        let config = SanitizationConfig::new().with_field("title", FieldConfig::preset("html"));
        let mut book = record(json!({ "title": "" }));
        let report = apply_to_record(&mut book, &config)?;
        assert!(report.is_empty());
        Ok(())
    }

    #[test]
    fn test_original_values() -> Result<()> {
        let mut book = record(json!({ "name": " x " }));
        let report = apply_to_record(&mut book, &book_config())?;
        let originals = report.original_values();
        assert_eq!(originals.get("name").map(String::as_str), Some(" x "));
        Ok(())
    }
}
