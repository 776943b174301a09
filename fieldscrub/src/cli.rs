//! This file defines the command-line interface (CLI) for the fieldscrub
//! application, including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "fieldscrub",
    version = env!("CARGO_PKG_VERSION"),
    about = "Clean string fields of records before they are stored",
    long_about = "fieldscrub trims, folds line breaks out of, and strips control characters from text. It sanitizes free text or the configured string fields of JSON records, using either named input classes (oneLineString, multiLineString) or explicit sanitizer flags.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all log output.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `fieldscrub` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sanitizes free text from a file or stdin.
    #[command(about = "Sanitizes free text from a file or stdin.")]
    Text(TextCommand),

    /// Sanitizes the configured fields of JSON records.
    #[command(about = "Sanitizes the configured string fields of one JSON object or an array of objects.")]
    Record(RecordCommand),

    /// Lists the registered sanitizers and input classes.
    #[command(about = "Lists the registered sanitizers and input classes.")]
    List,
}

/// Arguments for the `text` command.
#[derive(Parser, Debug)]
pub struct TextCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write sanitized output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Input class to apply.
    #[arg(long = "input-class", short = 'c', value_name = "NAME", default_value = "oneLineString", help = "Input class to apply (e.g. 'oneLineString' or 'multiLineString').")]
    pub input_class: String,

    /// Explicit sanitizer names (comma-separated). Replaces the input class.
    #[arg(long, short = 's', value_delimiter = ',', help = "Apply only these sanitizers (comma-separated) instead of an input class.")]
    pub sanitizers: Vec<String>,
}

/// Arguments for the `record` command.
#[derive(Parser, Debug)]
pub struct RecordCommand {
    /// Path to the sanitization configuration (YAML, or JSON with a .json extension).
    #[arg(long = "config", value_name = "FILE", help = "Path to the field sanitization configuration (YAML or JSON).")]
    pub config: PathBuf,

    /// Name of the model, used in error messages.
    #[arg(long = "model", value_name = "NAME", default_value = "Record", help = "Model name used in error messages.")]
    pub model: String,

    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read JSON from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write sanitized output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Print the changed fields as JSON to stderr.
    #[arg(long = "report", help = "Print the original and sanitized value of every changed field as JSON to stderr.")]
    pub report: bool,
}
