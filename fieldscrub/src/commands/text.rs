//! `fieldscrub text`: sanitize a single blob of free text.

use anyhow::{Context, Result};
use log::info;

use fieldscrub_core::{expand, sanitize, ExplicitConfig, FieldConfig, Location, Registry};

use super::{read_input, write_output};
use crate::cli::TextCommand;

/// The field configuration the command-line options describe.
pub fn field_config_for(cmd: &TextCommand) -> FieldConfig {
    if cmd.sanitizers.is_empty() {
        FieldConfig::preset(cmd.input_class.clone())
    } else {
        FieldConfig::explicit(
            cmd.sanitizers
                .iter()
                .fold(ExplicitConfig::new(), |config, name| config.enable(name.trim())),
        )
    }
}

/// Sanitizes `input` as one value.
pub fn sanitize_text(input: &str, config: &FieldConfig) -> Result<String> {
    let registry = Registry::global();
    let location = Location::field("text");
    let names = expand(config, registry, &location)?;
    let sanitized = sanitize(input, &names, registry, &location).context("Sanitization failed")?;
    Ok(sanitized)
}

pub fn run_text(cmd: &TextCommand) -> Result<()> {
    info!("Starting text sanitization.");
    let input = read_input(cmd.input_file.as_deref())?;
    let sanitized = sanitize_text(&input, &field_config_for(cmd))?;
    write_output(cmd.output.as_deref(), &sanitized)?;
    info!("Text sanitization completed.");
    Ok(())
}
