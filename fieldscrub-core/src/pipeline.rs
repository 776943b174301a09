//! pipeline.rs - Ordering and execution of sanitizers for a single value.
//!
//! A `Pipeline` is the list of sanitizers resolved for one field, sorted by
//! ascending priority. Running it folds the value through each transform from
//! left to right. Building and running are both pure: no I/O, no shared
//! mutable state, safe to call from any number of threads.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::errors::{FieldscrubError, Location, Result};
use crate::log_mask::loggable;
use crate::sanitizers::registry::Registry;
use crate::sanitizers::SanitizerSpec;

/// Sanitizers resolved from a registry, lowest priority first.
#[derive(Debug, Clone)]
pub struct Pipeline<'r> {
    stages: Vec<&'r SanitizerSpec>,
}

impl<'r> Pipeline<'r> {
    /// Resolves every name through `registry` and orders the result.
    ///
    /// Fails with [`FieldscrubError::UnknownSanitizer`] on the first name the
    /// registry does not know. The sort is stable, so entries sharing a
    /// priority keep the order in which `names` yielded them.
    pub fn build<I, S>(names: I, registry: &'r Registry, location: &Location) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stages = Vec::new();
        for name in names {
            let name = name.as_ref();
            let spec = registry.lookup(name).ok_or_else(|| FieldscrubError::UnknownSanitizer {
                name: name.to_string(),
                location: location.clone(),
            })?;
            stages.push(spec);
        }
        stages.sort_by_key(|spec| spec.priority);

        Ok(Self { stages })
    }

    /// Applies each stage in order. An empty value is returned untouched.
    pub fn run(&self, value: &str) -> String {
        if value.is_empty() {
            return String::new();
        }

        self.stages.iter().fold(value.to_string(), |current, spec| {
            let next = spec.apply(&current);
            if next != current {
                debug!("Sanitizer '{}' changed {} to {}", spec.name, loggable(&current), loggable(&next));
            }
            next
        })
    }

    pub fn names(&self) -> Vec<&str> {
        self.stages.iter().map(|spec| spec.name.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

/// Builds and runs a pipeline in one step.
///
/// Empty values short-circuit before any lookup, so they never fail even when
/// `names` contains unknown entries.
pub fn sanitize<I, S>(value: &str, names: I, registry: &Registry, location: &Location) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if value.is_empty() {
        return Ok(String::new());
    }
    Ok(Pipeline::build(names, registry, location)?.run(value))
}
