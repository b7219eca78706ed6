use crate::check_digit::{CheckDigit, CheckDigitAlgorithm, LUHN};
use crate::code_validator::{CodeValidator, LengthBounds};
use crate::codes::built_in;
use lazy_static::lazy_static;

const SIREN_LEN: usize = 9;
const SIRET_LEN: usize = 14;

lazy_static! {
    static ref SIRENE_VALIDATOR: CodeValidator = built_in(
        "sirene",
        &[r"(\d{9})", r"(\d{14})"],
        LengthBounds::between(SIREN_LEN, SIRET_LEN),
        Some(CheckDigitAlgorithm::Luhn),
    );
}

/// Validates French company identifiers from the SIRENE register: the 9 digit SIREN of a
/// company, or the 14 digit SIRET of one of its establishments, which starts with the SIREN.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SireneValidator;

impl SireneValidator {
    pub fn is_valid(&self, code: &str) -> bool {
        self.validate(code).is_some()
    }

    /// A SIRET is only valid if the SIREN it starts with is valid too.
    pub fn validate(&self, code: &str) -> Option<String> {
        let code = SIRENE_VALIDATOR.validate(code)?;
        if code.len() == SIRET_LEN && !LUHN.is_valid(&code[..SIREN_LEN]) {
            return None;
        }
        Some(code)
    }
}
