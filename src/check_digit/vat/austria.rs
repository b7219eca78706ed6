use crate::check_digit::{render_digit, require_body, CheckDigit, CheckDigitError};

use super::digits_after;

const BODY_LEN: usize = 8;

/// Austrian UID number: `U`, seven digits and a check digit.
pub(super) struct AustriaCheckDigit;

impl CheckDigit for AustriaCheckDigit {
    fn calculate(&self, body: &str) -> Result<String, CheckDigitError> {
        require_body(body)?;
        if !body.starts_with('U') || body.chars().count() != BODY_LEN {
            return Err(CheckDigitError::InvalidCode("expected 'U' followed by 7 digits"));
        }
        let digits = digits_after(body, 1)?;

        let mut total = 0;
        for (i, digit) in digits.iter().enumerate() {
            total += if i % 2 == 0 {
                *digit
            } else {
                digit / 5 + (2 * digit) % 10
            };
        }
        if total == 0 {
            return Err(CheckDigitError::ZeroSumCode);
        }
        render_digit((10 - (total + 4) % 10) % 10)
    }
}
