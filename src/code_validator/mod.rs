mod config;
mod error;
mod metrics;

pub use crate::code_validator::config::CodeValidatorConfig;
pub use crate::code_validator::error::CreateValidatorError;
pub use crate::code_validator::metrics::ValidatorMetrics;

use crate::check_digit::CheckDigit;
use crate::observability::labels::{Labels, NO_LABEL};
use crate::shape::ShapeValidator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use strum::IntoStaticStr;

/// Inclusive bounds on the length of a code, in characters. A missing bound is not checked.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LengthBounds {
    pub min: Option<usize>,
    pub max: Option<usize>,
}

impl LengthBounds {
    pub const UNCHECKED: LengthBounds = LengthBounds {
        min: None,
        max: None,
    };

    pub const fn exact(length: usize) -> Self {
        Self::between(length, length)
    }

    pub const fn between(min: usize, max: usize) -> Self {
        LengthBounds {
            min: Some(min),
            max: Some(max),
        }
    }

    pub const fn at_most(max: usize) -> Self {
        LengthBounds {
            min: None,
            max: Some(max),
        }
    }

    pub fn contains(&self, length: usize) -> bool {
        self.min.map_or(true, |min| length >= min) && self.max.map_or(true, |max| length <= max)
    }

    pub fn validate(&self) -> Result<(), CreateValidatorError> {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min > max => {
                Err(CreateValidatorError::InvalidLengthBounds { min, max })
            }
            _ => Ok(()),
        }
    }
}

/// The steps a code goes through, in order. A rejected code reports the step that failed.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ValidationStage {
    /// Nothing is left once surrounding whitespace is removed.
    Trim,
    /// No shape pattern matches the trimmed input.
    Shape,
    /// The canonical form is too short or too long.
    Length,
    /// The check digit of the canonical form is wrong.
    CheckDigit,
}

/// Validates a code in a fixed order: trim, match the shape, check the length, then check the
/// check digit.
///
/// The shape may drop separators, and every later step sees what it kept: `"123-456-789"` is
/// length-checked as the 9 characters `"123456789"`.
pub struct CodeValidator {
    shape: Option<ShapeValidator>,
    length: LengthBounds,
    check_digit: Option<Arc<dyn CheckDigit>>,
    metrics: ValidatorMetrics,
}

impl CodeValidator {
    pub fn new(
        shape: Option<ShapeValidator>,
        length: LengthBounds,
        check_digit: Option<Arc<dyn CheckDigit>>,
    ) -> Result<Self, CreateValidatorError> {
        Self::with_labels(shape, length, check_digit, &NO_LABEL)
    }

    pub fn with_labels(
        shape: Option<ShapeValidator>,
        length: LengthBounds,
        check_digit: Option<Arc<dyn CheckDigit>>,
        labels: &Labels,
    ) -> Result<Self, CreateValidatorError> {
        length.validate()?;
        Ok(Self {
            shape,
            length,
            check_digit,
            metrics: ValidatorMetrics::new(labels),
        })
    }

    pub fn shape(&self) -> Option<&ShapeValidator> {
        self.shape.as_ref()
    }

    pub fn length(&self) -> LengthBounds {
        self.length
    }

    pub fn check_digit(&self) -> Option<&dyn CheckDigit> {
        self.check_digit.as_deref()
    }

    pub fn is_valid(&self, input: &str) -> bool {
        self.validate(input).is_some()
    }

    /// The canonical code, or `None` if `input` is not a valid code.
    pub fn validate(&self, input: &str) -> Option<String> {
        match self.validate_with_stage(input) {
            Ok(code) => {
                self.metrics.accepted.increment(1);
                Some(code)
            }
            Err(stage) => {
                self.metrics.rejected(stage).increment(1);
                None
            }
        }
    }

    /// Same as [`CodeValidator::validate`], naming the step that rejected the input.
    pub fn validate_with_stage(&self, input: &str) -> Result<String, ValidationStage> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationStage::Trim);
        }

        let code = match &self.shape {
            Some(shape) => shape.validate(trimmed).ok_or(ValidationStage::Shape)?,
            None => trimmed.to_owned(),
        };

        if !self.length.contains(code.chars().count()) {
            return Err(ValidationStage::Length);
        }

        if let Some(check_digit) = &self.check_digit {
            if !check_digit.is_valid(&code) {
                return Err(ValidationStage::CheckDigit);
            }
        }

        Ok(code)
    }
}

impl fmt::Debug for CodeValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodeValidator")
            .field("shape", &self.shape)
            .field("length", &self.length)
            .field("check_digit", &self.check_digit.is_some())
            .finish()
    }
}
