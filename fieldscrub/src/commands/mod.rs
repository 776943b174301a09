//! Implementations of the fieldscrub subcommands, plus the input/output
//! plumbing they share.

pub mod list;
pub mod record;
pub mod text;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, warn};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

/// Reads the whole input from `path`, or from stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            debug!("Reading input from file: {}", path.display());
            fs::read_to_string(path).with_context(|| format!("Failed to read input file {}", path.display()))
        }
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                warn!("Reading from an interactive terminal; finish input with EOF (Ctrl-D).");
            }
            let mut buffer = String::new();
            stdin.lock().read_to_string(&mut buffer).context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

/// Writes `content` to `path`, or to stdout, ending it with a newline unless
/// it already ends with one.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            debug!("Writing output to file: {}", path.display());
            let mut file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            write_line(&mut file, content)?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_line(&mut writer, content)?;
        }
    }
    Ok(())
}

fn write_line<W: Write>(writer: &mut W, content: &str) -> io::Result<()> {
    writer.write_all(content.as_bytes())?;
    if !content.ends_with('\n') {
        writer.write_all(b"\n")?;
    }
    writer.flush()
}
