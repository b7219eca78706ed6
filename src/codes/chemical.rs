use crate::check_digit::CheckDigitAlgorithm;
use crate::code_validator::{CodeValidator, LengthBounds};
use crate::codes::built_in;
use lazy_static::lazy_static;

lazy_static! {
    static ref CAS_NUMBER_VALIDATOR: CodeValidator = built_in(
        "cas_number",
        &[r"([1-9]\d{1,6})-(\d{2})-(\d)"],
        LengthBounds::between(5, 10),
        Some(CheckDigitAlgorithm::CasNumber),
    );
    /// EINECS numbers start with 2, later lists with higher digits.
    static ref EC_NUMBER_VALIDATOR: CodeValidator = built_in(
        "ec_number",
        &[r"([2-9]\d{2})-(\d{3})-(\d)"],
        LengthBounds::exact(7),
        Some(CheckDigitAlgorithm::EcNumber),
    );
    static ref EC_INDEX_NUMBER_VALIDATOR: CodeValidator = built_in(
        "ec_index_number",
        &[r"(\d{3})-(\d{3})-(\d{2})-([0-9X])"],
        LengthBounds::exact(9),
        Some(CheckDigitAlgorithm::EcIndexNumber),
    );
}

/// Validates CAS Registry Numbers such as `7732-18-5`. Valid numbers are returned without
/// hyphens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CasNumberValidator;

impl CasNumberValidator {
    pub fn is_valid(&self, code: &str) -> bool {
        CAS_NUMBER_VALIDATOR.is_valid(code)
    }

    pub fn validate(&self, code: &str) -> Option<String> {
        CAS_NUMBER_VALIDATOR.validate(code)
    }
}

/// Validates European Community numbers (EINECS, ELINCS, NLP) such as `200-001-8`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EcNumberValidator;

impl EcNumberValidator {
    pub fn is_valid(&self, code: &str) -> bool {
        EC_NUMBER_VALIDATOR.is_valid(code)
    }

    pub fn validate(&self, code: &str) -> Option<String> {
        EC_NUMBER_VALIDATOR.validate(code)
    }
}

/// Validates the index numbers of Annex VI of the CLP regulation such as `001-001-00-9`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EcIndexNumberValidator;

impl EcIndexNumberValidator {
    pub fn is_valid(&self, code: &str) -> bool {
        EC_INDEX_NUMBER_VALIDATOR.is_valid(code)
    }

    pub fn validate(&self, code: &str) -> Option<String> {
        EC_INDEX_NUMBER_VALIDATOR.validate(code)
    }
}
