use crate::check_digit::CheckDigitAlgorithm;
use crate::code_validator::{CodeValidator, LengthBounds};
use crate::codes::built_in;
use lazy_static::lazy_static;

/// A federal state (`01` to `16`) or federal (`99`) prefix with an optional region code, an
/// optional alphanumeric detail and two check digits, separated by hyphens.
pub const LEITWEG_PATTERN: &str = r"(01|02|03|04|05|06|07|08|09|10|11|12|13|14|16|99)(\d(?:\d{2}(?:\d{3}|\d{4}|\d{7})?)?)?(?:-([A-Za-z0-9]{1,30}))?-(\d{2})";

/// Bounds on the code as written, hyphens included.
const CODE_LENGTH: LengthBounds = LengthBounds::between(5, 44);

lazy_static! {
    static ref LEITWEG_VALIDATOR: CodeValidator = built_in(
        "leitweg",
        &[LEITWEG_PATTERN],
        LengthBounds::UNCHECKED,
        Some(CheckDigitAlgorithm::Modulus97),
    );
}

/// Validates Leitweg-IDs, the routing identifiers of German public sector e-invoices.
///
/// The check digits cover the code without its hyphens, which is also what
/// [`LeitwegValidator::validate`] returns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LeitwegValidator;

impl LeitwegValidator {
    pub fn is_valid(&self, code: &str) -> bool {
        self.validate(code).is_some()
    }

    pub fn validate(&self, code: &str) -> Option<String> {
        if !CODE_LENGTH.contains(code.trim().chars().count()) {
            return None;
        }
        LEITWEG_VALIDATOR.validate(code)
    }
}
