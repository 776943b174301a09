//! model.rs - Binding a sanitization config to a model's persistence lifecycle.
//!
//! A persistence layer owns a `ModelSanitizer` per model and calls it at two
//! points:
//!
//! * [`ModelSanitizer::before_save`] right before a create or update is
//!   written. An error means the write must be rejected.
//! * [`ModelSanitizer::remote_sanitize`] when a remote call carries a payload
//!   destined for the model.
//!
//! [`ModelSanitizer::sanitize_field`] sanitizes a lone value outside either
//! hook.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, warn};
use std::collections::BTreeMap;

use crate::config::{SanitizationConfig, SanitizerFlags};
use crate::errors::{Location, Result};
use crate::input_class::flagged_sanitizers;
use crate::pipeline::sanitize;
use crate::record::{apply_to_record_with, Record, SanitizationReport};
use crate::sanitizers::registry::Registry;

/// Scratch state shared by the hooks of one save operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookState {
    /// Field name to the value it had before sanitizing. Only changed fields
    /// appear.
    pub sanitizer: BTreeMap<String, String>,
}

/// What a "before save" hook sees.
///
/// Full saves carry the model `instance`; partial updates only carry `data`.
#[derive(Debug, Clone, Default)]
pub struct SaveContext {
    pub instance: Option<Record>,
    pub data: Option<Record>,
    pub hook_state: HookState,
}

impl SaveContext {
    pub fn for_instance(instance: Record) -> Self {
        Self {
            instance: Some(instance),
            ..Self::default()
        }
    }

    pub fn for_data(data: Record) -> Self {
        Self {
            data: Some(data),
            ..Self::default()
        }
    }
}

/// Arguments of an intercepted remote call.
#[derive(Debug, Clone, Default)]
pub struct RemoteArgs {
    pub data: Option<Record>,
}

#[derive(Debug, Clone, Default)]
pub struct RemoteContext {
    pub args: RemoteArgs,
}

/// A model name, its sanitization config, and the registry resolving it.
#[derive(Debug, Clone)]
pub struct ModelSanitizer<'r> {
    model_name: String,
    config: SanitizationConfig,
    registry: &'r Registry,
}

impl ModelSanitizer<'static> {
    /// Uses the process-wide registry.
    pub fn new(model_name: impl Into<String>, config: SanitizationConfig) -> Self {
        Self::with_registry(model_name, config, Registry::global())
    }
}

impl<'r> ModelSanitizer<'r> {
    pub fn with_registry(model_name: impl Into<String>, config: SanitizationConfig, registry: &'r Registry) -> Self {
        let model_name = model_name.into();
        debug!("Sanitizer configured for model [{}] with {} field(s)", model_name, config.len());
        Self {
            model_name,
            config,
            registry,
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn config(&self) -> &SanitizationConfig {
        &self.config
    }

    /// Checks the config against the registry now instead of on first use.
    pub fn validate(&self) -> Result<()> {
        self.config.validate(self.registry, Some(&self.model_name))
    }

    /// Sanitizes one value with an explicit set of sanitizer flags.
    ///
    /// `inputClass` is not expanded here; it is rejected like any other
    /// unknown sanitizer name.
    pub fn sanitize_field(&self, value: &str, flags: &SanitizerFlags) -> Result<String> {
        let location = Location::model(self.model_name.clone());
        sanitize(value, flagged_sanitizers(flags), self.registry, &location)
    }

    /// Sanitizes `record` in place and reports the changed fields.
    pub fn apply(&self, record: &mut Record) -> Result<SanitizationReport> {
        apply_to_record_with(record, &self.config, self.registry, Some(&self.model_name))
    }

    /// The "before save" stage.
    ///
    /// Sanitizes the instance, or the partial data when there is no instance,
    /// and records original values of changed fields in the hook state. Does
    /// nothing when the context carries neither.
    pub fn before_save(&self, ctx: &mut SaveContext) -> Result<()> {
        let target = match (ctx.instance.as_mut(), ctx.data.as_mut()) {
            (Some(instance), _) => instance,
            (None, Some(data)) => data,
            (None, None) => return Ok(()),
        };

        let report = self.apply(target).map_err(|e| {
            warn!("Rejecting save of {}: {}", self.model_name, e);
            e
        })?;
        ctx.hook_state.sanitizer.extend(report.original_values());
        Ok(())
    }

    /// Sanitizes the payload of a remote call. Does nothing without a payload.
    pub fn remote_sanitize(&self, ctx: &mut RemoteContext) -> Result<()> {
        match ctx.args.data.as_mut() {
            Some(data) => self.apply(data).map(|_| ()),
            None => Ok(()),
        }
    }
}
