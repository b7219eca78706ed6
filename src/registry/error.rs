use crate::shape::ShapeError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Invalid rule definition: {0}")]
    InvalidRuleDefinition(String),

    #[error("The default registry cannot be modified")]
    ImmutableRegistry,

    #[error("Invalid rule pattern: {0}")]
    InvalidShape(ShapeError),
}

impl From<ShapeError> for RegistryError {
    fn from(err: ShapeError) -> Self {
        RegistryError::InvalidShape(err)
    }
}

impl From<RegistryError> for i64 {
    fn from(value: RegistryError) -> i64 {
        match value {
            RegistryError::InvalidRuleDefinition(_) => -1,
            RegistryError::ImmutableRegistry => -2,
            RegistryError::InvalidShape(_) => -3,
        }
    }
}
