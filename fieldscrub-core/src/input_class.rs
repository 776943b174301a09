//! Input classes and the expansion of field configurations into sanitizer names.
//!
//! An input class is a named preset bundling sanitizers for a common kind of
//! text. Expansion flattens a [`FieldConfig`] (either a preset name or an
//! explicit flag map with an optional `inputClass`) into the set of sanitizer
//! names a pipeline should run. Sanitizer names are not checked here; the
//! pipeline builder does that when it resolves them.

use log::debug;
use std::collections::BTreeSet;

use crate::config::{FieldConfig, SanitizerFlags};
use crate::errors::{FieldscrubError, Location, Result};
use crate::sanitizers::registry::Registry;
use crate::sanitizers::{REMOVE_NEW_LINES, REMOVE_UNICODE_CONTROL_CHARACTERS, TRIM_SPACES};

pub const ONE_LINE_STRING: &str = "oneLineString";
pub const MULTI_LINE_STRING: &str = "multiLineString";

/// A named preset of sanitizer names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputClass {
    pub name: String,
    pub sanitizer_names: BTreeSet<String>,
}

impl InputClass {
    pub fn new<I, S>(name: impl Into<String>, sanitizer_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            sanitizer_names: sanitizer_names.into_iter().map(Into::into).collect(),
        }
    }
}

/// `oneLineString` folds text onto one line; `multiLineString` keeps line feeds.
pub fn builtin_input_classes() -> Vec<InputClass> {
    vec![
        InputClass::new(
            ONE_LINE_STRING,
            [TRIM_SPACES, REMOVE_NEW_LINES, REMOVE_UNICODE_CONTROL_CHARACTERS],
        ),
        InputClass::new(MULTI_LINE_STRING, [TRIM_SPACES, REMOVE_UNICODE_CONTROL_CHARACTERS]),
    ]
}

/// Resolves a field configuration to the flat set of sanitizer names it enables.
///
/// Fails with [`FieldscrubError::UnknownInputClass`] when the preset name or the
/// nested `inputClass` is not registered.
pub fn expand(config: &FieldConfig, registry: &Registry, location: &Location) -> Result<BTreeSet<String>> {
    let names = match config {
        FieldConfig::Preset(class_name) => class_members(class_name, registry, location)?,
        FieldConfig::Explicit(explicit) => {
            let mut names = match explicit.input_class.as_deref() {
                Some(class_name) => class_members(class_name, registry, location)?,
                None => BTreeSet::new(),
            };
            names.extend(flagged_sanitizers(&explicit.sanitizers));
            names
        }
    };

    debug!("Expanded configuration for {} to {:?}", location, names);
    Ok(names)
}

/// Every flagged sanitizer name. A key's presence is what selects the
/// sanitizer; its value is not consulted, so `trimSpaces: false` still trims
/// and a misspelled key still fails the registry lookup.
pub fn flagged_sanitizers(flags: &SanitizerFlags) -> BTreeSet<String> {
    flags.keys().cloned().collect()
}

fn class_members(class_name: &str, registry: &Registry, location: &Location) -> Result<BTreeSet<String>> {
    registry
        .input_class(class_name)
        .map(|class| class.sanitizer_names.clone())
        .ok_or_else(|| FieldscrubError::UnknownInputClass {
            name: class_name.to_string(),
            location: location.clone(),
        })
}
