//! `fieldscrub list`: show the catalog of the global registry.

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Table};
use std::io::Write;

use fieldscrub_core::Registry;

/// Renders sanitizers (in execution order) and input classes as two tables.
pub fn render_catalog(registry: &Registry) -> String {
    let mut sanitizers = Table::new();
    sanitizers
        .load_preset(UTF8_FULL)
        .set_header(vec!["Sanitizer", "Priority"]);
    for spec in registry.sanitizers() {
        sanitizers.add_row(vec![spec.name.clone(), spec.priority.to_string()]);
    }

    let mut classes = Table::new();
    classes
        .load_preset(UTF8_FULL)
        .set_header(vec!["Input class", "Sanitizers"]);
    for class in registry.input_classes() {
        let members = class.sanitizer_names.iter().cloned().collect::<Vec<_>>().join(", ");
        classes.add_row(vec![class.name.clone(), members]);
    }

    format!("{}\n{}", sanitizers, classes)
}

pub fn run_list<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", render_catalog(Registry::global()))?;
    Ok(())
}
