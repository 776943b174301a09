//! registry.rs - The catalog of sanitizers and input classes.
//!
//! A `Registry` is assembled once and then only read. The process-wide
//! instance returned by [`Registry::global`] is built lazily from the
//! built-in catalog unless a custom registry is installed with
//! [`install_global`] before its first use.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use once_cell::sync::OnceCell;
use std::collections::BTreeMap;

use crate::errors::{FieldscrubError, Result};
use crate::input_class::{builtin_input_classes, InputClass};
use crate::sanitizers::{builtin_sanitizers, SanitizerSpec};

static GLOBAL_REGISTRY: OnceCell<Registry> = OnceCell::new();

/// Read-only lookup tables for sanitizers and input classes.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    sanitizers: BTreeMap<String, SanitizerSpec>,
    input_classes: BTreeMap<String, InputClass>,
}

impl Registry {
    /// The three built-in sanitizers and the `oneLineString` /
    /// `multiLineString` input classes.
    pub fn builtin() -> Self {
        let mut registry = Registry::default();
        for spec in builtin_sanitizers() {
            registry.sanitizers.insert(spec.name.clone(), spec);
        }
        for class in builtin_input_classes() {
            registry.input_classes.insert(class.name.clone(), class);
        }
        registry
    }

    /// Starts an empty registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder { registry: Registry::default() }
    }

    /// Starts from the built-in catalog so callers can add their own entries.
    pub fn builtin_builder() -> RegistryBuilder {
        RegistryBuilder { registry: Registry::builtin() }
    }

    /// The process-wide registry.
    pub fn global() -> &'static Registry {
        GLOBAL_REGISTRY.get_or_init(|| {
            debug!("Initializing global sanitizer registry from built-in catalog.");
            Registry::builtin()
        })
    }

    pub fn lookup(&self, name: &str) -> Option<&SanitizerSpec> {
        self.sanitizers.get(name)
    }

    pub fn input_class(&self, name: &str) -> Option<&InputClass> {
        self.input_classes.get(name)
    }

    /// All sanitizers, lowest priority first.
    pub fn sanitizers(&self) -> Vec<&SanitizerSpec> {
        let mut specs: Vec<&SanitizerSpec> = self.sanitizers.values().collect();
        specs.sort_by_key(|spec| spec.priority);
        specs
    }

    /// All input classes, by name.
    pub fn input_classes(&self) -> impl Iterator<Item = &InputClass> {
        self.input_classes.values()
    }
}

/// Collects entries for a new [`Registry`], rejecting duplicate names.
#[derive(Debug)]
pub struct RegistryBuilder {
    registry: Registry,
}

impl RegistryBuilder {
    pub fn sanitizer(mut self, spec: SanitizerSpec) -> Result<Self> {
        if self.registry.sanitizers.contains_key(&spec.name) {
            return Err(FieldscrubError::DuplicateSanitizer(spec.name));
        }
        debug!("Registering sanitizer '{}' with priority {}.", spec.name, spec.priority);
        self.registry.sanitizers.insert(spec.name.clone(), spec);
        Ok(self)
    }

    /// Input class members are not checked against the catalog here; unknown
    /// members surface when a pipeline is built.
    pub fn input_class(mut self, class: InputClass) -> Result<Self> {
        if self.registry.input_classes.contains_key(&class.name) {
            return Err(FieldscrubError::DuplicateInputClass(class.name));
        }
        debug!("Registering input class '{}'.", class.name);
        self.registry.input_classes.insert(class.name.clone(), class);
        Ok(self)
    }

    pub fn build(self) -> Registry {
        self.registry
    }
}

/// Installs `registry` as the process-wide registry.
///
/// Must happen before anything calls [`Registry::global`]. If the global
/// registry is already initialized the rejected registry is handed back.
pub fn install_global(registry: Registry) -> std::result::Result<(), Registry> {
    GLOBAL_REGISTRY.set(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sanitizers::{REMOVE_NEW_LINES, REMOVE_UNICODE_CONTROL_CHARACTERS, TRIM_SPACES};

    fn shout(value: &str) -> String {
        value.to_uppercase()
    }

    #[test]
    fn test_builtin_lookup() {
        let registry = Registry::builtin();
        assert_eq!(registry.lookup(TRIM_SPACES).map(|s| s.priority), Some(0));
        assert_eq!(registry.lookup(REMOVE_NEW_LINES).map(|s| s.priority), Some(10));
        assert_eq!(registry.lookup(REMOVE_UNICODE_CONTROL_CHARACTERS).map(|s| s.priority), Some(20));
        assert!(registry.lookup("removeEmoji").is_none());
        assert!(registry.input_class("oneLineString").is_some());
        assert!(registry.input_class("multiLineString").is_some());
        assert!(registry.input_class("html").is_none());
    }

    #[test]
    fn test_sanitizers_listed_by_priority() {
        let registry = Registry::builtin_builder()
            .sanitizer(SanitizerSpec::new("shout", 5, shout))
            .unwrap()
            .build();
        let names: Vec<&str> = registry.sanitizers().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec![TRIM_SPACES, "shout", REMOVE_NEW_LINES, REMOVE_UNICODE_CONTROL_CHARACTERS]);
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let err = Registry::builtin_builder()
            .sanitizer(SanitizerSpec::new(TRIM_SPACES, 99, shout))
            .unwrap_err();
        assert!(matches!(err, FieldscrubError::DuplicateSanitizer(ref name) if name == TRIM_SPACES));

        let err = Registry::builtin_builder()
            .input_class(InputClass::new("oneLineString", [TRIM_SPACES]))
            .unwrap_err();
        assert!(matches!(err, FieldscrubError::DuplicateInputClass(_)));
    }

    #[test]
    fn test_global_registry_is_builtin() {
        let global = Registry::global();
        assert_eq!(global.sanitizers().len(), 3);
        assert_eq!(global.input_classes().count(), 2);
    }
}
