use crate::check_digit::{CheckDigit, CheckDigitAlgorithm};
use crate::code_validator::{CodeValidator, CreateValidatorError, LengthBounds};
use crate::observability::labels::Labels;
use crate::shape::ShapeValidator;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;
use std::sync::Arc;

fn default_case_sensitive() -> bool {
    true
}

/// Serializable description of a [`CodeValidator`].
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CodeValidatorConfig {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub patterns: Vec<String>,
    #[serde(default = "default_case_sensitive")]
    pub case_sensitive: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub check_digit: Option<CheckDigitAlgorithm>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub labels: Labels,
}

impl Default for CodeValidatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeValidatorConfig {
    pub fn new() -> Self {
        Self {
            patterns: vec![],
            case_sensitive: true,
            min_length: None,
            max_length: None,
            check_digit: None,
            labels: Labels::default(),
        }
    }

    pub fn pattern(&self, pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        self.mutate_clone(|x| x.patterns.push(pattern))
    }

    pub fn patterns(&self, patterns: Vec<String>) -> Self {
        self.mutate_clone(|x| x.patterns = patterns)
    }

    pub fn case_sensitive(&self, case_sensitive: bool) -> Self {
        self.mutate_clone(|x| x.case_sensitive = case_sensitive)
    }

    pub fn length(&self, length: usize) -> Self {
        self.mutate_clone(|x| {
            x.min_length = Some(length);
            x.max_length = Some(length);
        })
    }

    pub fn min_length(&self, min_length: usize) -> Self {
        self.mutate_clone(|x| x.min_length = Some(min_length))
    }

    pub fn max_length(&self, max_length: usize) -> Self {
        self.mutate_clone(|x| x.max_length = Some(max_length))
    }

    pub fn check_digit(&self, check_digit: CheckDigitAlgorithm) -> Self {
        self.mutate_clone(|x| x.check_digit = Some(check_digit))
    }

    pub fn labels(&self, labels: Labels) -> Self {
        self.mutate_clone(|x| x.labels = labels)
    }

    pub fn length_bounds(&self) -> LengthBounds {
        LengthBounds {
            min: self.min_length,
            max: self.max_length,
        }
    }

    /// An empty pattern list means the input is not shape-checked.
    pub fn build(&self) -> Result<CodeValidator, CreateValidatorError> {
        let shape = if self.patterns.is_empty() {
            None
        } else {
            Some(ShapeValidator::with_case_sensitivity(
                &self.patterns,
                self.case_sensitive,
            )?)
        };
        let check_digit = self
            .check_digit
            .clone()
            .map(|algorithm| Arc::new(algorithm) as Arc<dyn CheckDigit>);
        CodeValidator::with_labels(shape, self.length_bounds(), check_digit, &self.labels)
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
