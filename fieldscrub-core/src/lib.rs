// fieldscrub-core/src/lib.rs
//! # fieldscrub Core Library
//!
//! `fieldscrub-core` cleans string fields of records before they are
//! persisted. Each configured field is run through an ordered pipeline of
//! small, pure string transforms ("sanitizers"): trimming, folding line
//! breaks, stripping control characters.
//!
//! ## Modules
//!
//! * `sanitizers`: The built-in transforms and the `Registry` cataloging them.
//! * `input_class`: Named presets (`oneLineString`, `multiLineString`) and the
//!   expansion of field configurations into sanitizer names.
//! * `pipeline`: Resolves names, orders them by priority, and runs them.
//! * `record`: Applies a whole `SanitizationConfig` to a record.
//! * `model`: Hooks for a persistence layer (`before_save`, `remote_sanitize`).
//! * `config`: Field configuration types and YAML/JSON loading.
//! * `errors`: The `FieldscrubError` type.
//!
//! ## Usage Example
//!
//! ```rust
//! use fieldscrub_core::{apply_to_record, SanitizationConfig};
//! use serde_json::json;
//!
//! fn main() -> Result<(), fieldscrub_core::FieldscrubError> {
//!     let config = SanitizationConfig::from_yaml_str(
//!         "name: oneLineString\ndescription: multiLineString\n",
//!     )?;
//!
//!     let mut book = json!({ "name": " book\n1 ", "description": "line 1\nline 2\n" })
//!         .as_object()
//!         .cloned()
//!         .unwrap_or_default();
//!
//!     let report = apply_to_record(&mut book, &config)?;
//!     assert_eq!(book["name"], "book 1");
//!     assert_eq!(book["description"], "line 1\nline 2");
//!     assert_eq!(report.len(), 2);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Only configuration mistakes fail: an unknown input class or an unknown
//! sanitizer name. They surface when a field is sanitized, or earlier through
//! `SanitizationConfig::validate`. A failed call never mutates the record.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod errors;
pub mod input_class;
pub mod log_mask;
pub mod model;
pub mod pipeline;
pub mod record;
pub mod sanitizers;

pub use config::{ExplicitConfig, FieldConfig, SanitizationConfig, SanitizerFlag, SanitizerFlags};

pub use errors::{FieldscrubError, Location};

pub use input_class::{expand, InputClass, MULTI_LINE_STRING, ONE_LINE_STRING};

pub use model::{HookState, ModelSanitizer, RemoteArgs, RemoteContext, SaveContext};

pub use pipeline::{sanitize, Pipeline};

pub use record::{apply_to_record, apply_to_record_with, FieldChange, Record, SanitizationReport};

pub use sanitizers::registry::{install_global, Registry, RegistryBuilder};
pub use sanitizers::{
    SanitizerAction, SanitizerSpec, REMOVE_NEW_LINES, REMOVE_UNICODE_CONTROL_CHARACTERS, TRIM_SPACES,
};

/// Sanitizes a single value with the global registry.
///
/// Every listed name runs, whatever its flag value; `inputClass` is not expanded.
pub fn sanitize_field(value: &str, flags: &SanitizerFlags) -> errors::Result<String> {
    sanitize(
        value,
        input_class::flagged_sanitizers(flags),
        Registry::global(),
        &Location::default(),
    )
}
