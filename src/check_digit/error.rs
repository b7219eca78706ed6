use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckDigitError {
    #[error("Code is missing")]
    MissingInput,

    /// `position` is 1-based, counted from the left of the input given to the algorithm.
    #[error("Invalid character '{character}' at position {position}")]
    InvalidCharacter { position: usize, character: char },

    #[error("Invalid code, sum is zero")]
    ZeroSumCode,

    #[error("Invalid code length {0}")]
    InvalidLength(usize),

    #[error("Check digit value {0} cannot be represented")]
    InvalidCheckDigitValue(u32),

    #[error("Invalid code: {0}")]
    InvalidCode(&'static str),
}

impl From<CheckDigitError> for i64 {
    fn from(value: CheckDigitError) -> i64 {
        match value {
            CheckDigitError::MissingInput => -1,
            CheckDigitError::InvalidCharacter { .. } => -2,
            CheckDigitError::ZeroSumCode => -3,
            CheckDigitError::InvalidLength(_) => -4,
            CheckDigitError::InvalidCheckDigitValue(_) => -5,
            CheckDigitError::InvalidCode(_) => -6,
        }
    }
}
