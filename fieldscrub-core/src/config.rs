//! Configuration management for `fieldscrub-core`.
//!
//! This module defines the per-field sanitization configuration, how it is
//! (de)serialized from YAML or JSON, and an eager validation pass that
//! reports every unknown input class or sanitizer in one go.
//!
//! A configuration maps field names to a [`FieldConfig`]:
//!
//! ```yaml
//! name:
//!   trimSpaces: true
//!   removeNewLines: true
//! description: multiLineString
//! author:
//!   inputClass: oneLineString
//! ```
//!
//! License: MIT OR Apache-2.0

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::errors::{FieldscrubError, Location, Result};
use crate::input_class::expand;
use crate::sanitizers::registry::Registry;

/// The value attached to a sanitizer name in an explicit field configuration.
///
/// Listing a name selects that sanitizer whatever its flag holds;
/// `trimSpaces: false` still trims.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SanitizerFlag {
    /// `trimSpaces: true`
    Enabled(bool),
    /// `trimSpaces: { ... }`. Options are accepted and carried, but no built-in
    /// sanitizer reads them.
    Options(serde_json::Map<String, serde_json::Value>),
}

impl From<bool> for SanitizerFlag {
    fn from(enabled: bool) -> Self {
        SanitizerFlag::Enabled(enabled)
    }
}

/// Sanitizer name to flag.
pub type SanitizerFlags = BTreeMap<String, SanitizerFlag>;

/// Explicit form of a field configuration: an optional input class plus
/// individually flagged sanitizers. Both contribute to the resolved set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExplicitConfig {
    #[serde(rename = "inputClass", default, skip_serializing_if = "Option::is_none")]
    pub input_class: Option<String>,
    #[serde(flatten)]
    pub sanitizers: SanitizerFlags,
}

impl ExplicitConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input_class(mut self, class_name: impl Into<String>) -> Self {
        self.input_class = Some(class_name.into());
        self
    }

    pub fn with_flag(mut self, sanitizer: impl Into<String>, flag: SanitizerFlag) -> Self {
        self.sanitizers.insert(sanitizer.into(), flag);
        self
    }

    pub fn enable(self, sanitizer: impl Into<String>) -> Self {
        self.with_flag(sanitizer, SanitizerFlag::Enabled(true))
    }
}

/// Declares which sanitizers apply to one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldConfig {
    /// A bare input class name, e.g. `description: multiLineString`.
    Preset(String),
    Explicit(ExplicitConfig),
}

impl FieldConfig {
    pub fn preset(class_name: impl Into<String>) -> Self {
        FieldConfig::Preset(class_name.into())
    }

    pub fn explicit(config: ExplicitConfig) -> Self {
        FieldConfig::Explicit(config)
    }
}

/// Field name to field configuration for one model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SanitizationConfig {
    fields: BTreeMap<String, FieldConfig>,
}

impl SanitizationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, field: impl Into<String>, config: FieldConfig) -> Self {
        self.fields.insert(field.into(), config);
        self
    }

    pub fn get(&self, field: &str) -> Option<&FieldConfig> {
        self.fields.get(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&String, &FieldConfig)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: SanitizationConfig =
            serde_yml::from_str(text).map_err(|e| FieldscrubError::ConfigParse(e.to_string()))?;
        debug!("Parsed YAML sanitization config with {} fields.", config.len());
        Ok(config)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: SanitizationConfig =
            serde_json::from_str(text).map_err(|e| FieldscrubError::ConfigParse(e.to_string()))?;
        debug!("Parsed JSON sanitization config with {} fields.", config.len());
        Ok(config)
    }

    /// Loads a configuration file. `.json` files are read as JSON, anything
    /// else as YAML.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading sanitization config from: {}", path.display());
        let text = std::fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config = if is_json {
            Self::from_json_str(&text)?
        } else {
            Self::from_yaml_str(&text)?
        };

        info!("Loaded config for {} fields from {}.", config.len(), path.display());
        Ok(config)
    }

    /// Checks every field against `registry` up front.
    ///
    /// Sanitizing reports these same problems lazily, one at a time; this
    /// collects all of them so a bad configuration can be rejected when it is
    /// built.
    pub fn validate(&self, registry: &Registry, model: Option<&str>) -> Result<()> {
        let mut errors = Vec::new();

        for (field, field_config) in &self.fields {
            let location = Location {
                model: model.map(str::to_string),
                field: Some(field.clone()),
            };
            match expand(field_config, registry, &location) {
                Ok(names) => {
                    for name in names {
                        if registry.lookup(&name).is_none() {
                            errors.push(FieldscrubError::UnknownSanitizer { name, location: location.clone() });
                        }
                    }
                }
                Err(e) => errors.push(e),
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            let message = errors.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("\n");
            warn!("Sanitization config rejected with {} error(s).", errors.len());
            Err(FieldscrubError::InvalidConfig(message))
        }
    }
}

impl FromIterator<(String, FieldConfig)> for SanitizationConfig {
    fn from_iter<T: IntoIterator<Item = (String, FieldConfig)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
