//! `fieldscrub record`: sanitize the configured fields of JSON records.
//!
//! Input is either a single JSON object or an array of objects. The
//! configuration is validated before any record is touched.

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use serde_json::Value;
use std::io::{self, Write};

use fieldscrub_core::{ModelSanitizer, SanitizationConfig, SanitizationReport};

use super::{read_input, write_output};
use crate::cli::RecordCommand;

/// Sanitizes every record in `input` and returns the reports in input order.
pub fn sanitize_records(input: &mut Value, model: &ModelSanitizer<'_>) -> Result<Vec<SanitizationReport>> {
    match input {
        Value::Object(record) => Ok(vec![model.apply(record)?]),
        Value::Array(items) => items
            .iter_mut()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(record) => model
                    .apply(record)
                    .with_context(|| format!("Failed to sanitize record #{}", index)),
                other => Err(anyhow!("Record #{} is not a JSON object (found {})", index, kind(other))),
            })
            .collect(),
        other => Err(anyhow!("Expected a JSON object or an array of objects, found {}", kind(other))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

pub fn run_record(cmd: &RecordCommand) -> Result<()> {
    info!("Starting record sanitization for model '{}'.", cmd.model);

    let config = SanitizationConfig::load_from_file(&cmd.config)
        .with_context(|| format!("Failed to load sanitization config {}", cmd.config.display()))?;
    let model = ModelSanitizer::new(cmd.model.clone(), config);
    model.validate().context("Sanitization config is invalid")?;

    let text = read_input(cmd.input_file.as_deref())?;
    let mut input: Value = serde_json::from_str(&text).context("Input is not valid JSON")?;
    let is_batch = input.is_array();

    let reports = sanitize_records(&mut input, &model)?;
    debug!(
        "Sanitized {} record(s); {} field(s) changed.",
        reports.len(),
        reports.iter().map(SanitizationReport::len).sum::<usize>()
    );

    write_output(cmd.output.as_deref(), &serde_json::to_string_pretty(&input)?)?;

    if cmd.report {
        let rendered = if is_batch {
            serde_json::to_string_pretty(&reports)?
        } else {
            serde_json::to_string_pretty(&reports[0])?
        };
        writeln!(io::stderr(), "{}", rendered)?;
    }

    info!("Record sanitization completed.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldscrub_core::FieldConfig;
    use serde_json::json;

    fn model() -> ModelSanitizer<'static> {
        ModelSanitizer::new(
            "Book",
            SanitizationConfig::new().with_field("name", FieldConfig::preset("oneLineString")),
        )
    }

    #[test]
    fn test_single_object() -> Result<()> {
        let mut input = json!({ "name": " a\nb ", "pages": 3 });
        let reports = sanitize_records(&mut input, &model())?;
        assert_eq!(input, json!({ "name": "a b", "pages": 3 }));
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].len(), 1);
        Ok(())
    }

    #[test]
    fn test_array_of_objects() -> Result<()> {
        let mut input = json!([{ "name": " a " }, { "name": "b" }]);
        let reports = sanitize_records(&mut input, &model())?;
        assert_eq!(input, json!([{ "name": "a" }, { "name": "b" }]));
        assert_eq!(reports.iter().map(SanitizationReport::len).collect::<Vec<_>>(), vec![1, 0]);
        Ok(())
    }

    #[test]
    fn test_rejects_non_objects() {
        assert!(sanitize_records(&mut json!("text"), &model()).is_err());
        let err = sanitize_records(&mut json!([{ "name": "a" }, 5]), &model()).unwrap_err();
        assert!(err.to_string().contains("Record #1"));
    }
}
