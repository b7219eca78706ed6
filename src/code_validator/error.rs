use crate::shape::ShapeError;
use thiserror::Error;

impl From<CreateValidatorError> for i64 {
    fn from(value: CreateValidatorError) -> i64 {
        match value {
            CreateValidatorError::InvalidShape(_) => -2,
            CreateValidatorError::InvalidLengthBounds { .. } => -3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreateValidatorError {
    /// A shape pattern is invalid (bad syntax, too complex, etc.)
    #[error("Invalid shape pattern: {0}")]
    InvalidShape(ShapeError),

    /// The minimum length is above the maximum length
    #[error("Invalid length bounds: min {min} is above max {max}")]
    InvalidLengthBounds { min: usize, max: usize },
}

impl From<ShapeError> for CreateValidatorError {
    fn from(err: ShapeError) -> Self {
        CreateValidatorError::InvalidShape(err)
    }
}
