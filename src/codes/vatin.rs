use crate::registry::{
    Registry, RegistryError, RuleFamily, ValidatorRule, DEFAULT_VATIN_REGISTRY,
};
use std::sync::Arc;

/// Validates VAT identification numbers: a 2-letter country key followed by the national
/// number, without spaces or punctuation.
#[derive(Clone, Copy)]
pub struct VatinValidator<'r> {
    registry: &'r dyn Registry,
}

impl VatinValidator<'static> {
    /// Uses the built-in formats.
    pub fn new() -> Self {
        Self {
            registry: &*DEFAULT_VATIN_REGISTRY,
        }
    }
}

impl Default for VatinValidator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> VatinValidator<'r> {
    /// Fails if `registry` does not hold VATIN rules.
    pub fn with_registry(registry: &'r dyn Registry) -> Result<Self, RegistryError> {
        if registry.family() != RuleFamily::Vatin {
            return Err(RegistryError::InvalidRuleDefinition(format!(
                "registry '{}' holds {} rules",
                registry.name(),
                registry.family().name()
            )));
        }
        Ok(Self { registry })
    }

    pub fn registry(&self) -> &'r dyn Registry {
        self.registry
    }

    pub fn is_valid(&self, code: &str) -> bool {
        self.registry.is_valid(code)
    }

    pub fn has_validator(&self, code: &str) -> bool {
        self.registry.has(code)
    }

    pub fn validator(&self, code: &str) -> Option<Arc<ValidatorRule>> {
        self.registry.get(code)
    }
}
