//! errors.rs - Custom error types for the fieldscrub-core library.
//!
//! Every error here is a configuration error. Malformed input strings never
//! produce an error; only references to sanitizers or input classes that the
//! registry does not know about (or broken configuration files) do.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;
use thiserror::Error;

/// Identifies where a sanitizer or input class was referenced from.
///
/// Both parts are optional: the direct single-field API has no field name, and
/// a bare `sanitize` call has no model either.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub model: Option<String>,
    pub field: Option<String>,
}

impl Location {
    pub fn new(model: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            model: Some(model.into()),
            field: Some(field.into()),
        }
    }

    pub fn model(model: impl Into<String>) -> Self {
        Self {
            model: Some(model.into()),
            field: None,
        }
    }

    pub fn field(field: impl Into<String>) -> Self {
        Self {
            model: None,
            field: Some(field.into()),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.field, &self.model) {
            (Some(field), Some(model)) => write!(f, "field '{}' of model '{}'", field, model),
            (Some(field), None) => write!(f, "field '{}'", field),
            (None, Some(model)) => write!(f, "model '{}'", model),
            (None, None) => write!(f, "direct call"),
        }
    }
}

/// This enum represents all possible error types in the `fieldscrub-core` library.
///
/// `#[non_exhaustive]` leaves room for new configuration checks without
/// breaking downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FieldscrubError {
    #[error("Unknown input class '{name}' for {location}")]
    UnknownInputClass { name: String, location: Location },

    #[error("Unknown sanitizer '{name}' for {location}")]
    UnknownSanitizer { name: String, location: Location },

    #[error("Sanitizer '{0}' is already registered")]
    DuplicateSanitizer(String),

    #[error("Input class '{0}' is already registered")]
    DuplicateInputClass(String),

    #[error("Invalid sanitization config:\n{0}")]
    InvalidConfig(String),

    #[error("Failed to parse sanitization config: {0}")]
    ConfigParse(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),
}

impl FieldscrubError {
    /// Returns the offending sanitizer or input class name, if this error has one.
    pub fn offending_name(&self) -> Option<&str> {
        match self {
            FieldscrubError::UnknownInputClass { name, .. }
            | FieldscrubError::UnknownSanitizer { name, .. } => Some(name),
            FieldscrubError::DuplicateSanitizer(name)
            | FieldscrubError::DuplicateInputClass(name) => Some(name),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FieldscrubError>;
