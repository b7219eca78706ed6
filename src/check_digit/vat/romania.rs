use crate::check_digit::{render_digit, require_body, to_digits, CheckDigit, CheckDigitError};

use super::is_zero;

const BODY_LEN: usize = 9;
const WEIGHTS: &[u32] = &[7, 5, 3, 2, 1];

/// Romanian CIF: 2 to 10 digits. Shorter bodies are padded with leading zeros to nine digits.
pub(super) struct RomaniaCheckDigit;

impl CheckDigit for RomaniaCheckDigit {
    fn calculate(&self, body: &str) -> Result<String, CheckDigitError> {
        require_body(body)?;
        let digits = to_digits(body)?;
        if digits.len() > BODY_LEN {
            return Err(CheckDigitError::InvalidLength(digits.len() + 1));
        }
        if is_zero(&digits) {
            return Err(CheckDigitError::ZeroSumCode);
        }
        let padding = BODY_LEN - digits.len();
        let total: u32 = digits
            .iter()
            .enumerate()
            .map(|(i, digit)| digit * WEIGHTS[(i + padding) % WEIGHTS.len()])
            .sum();
        render_digit(total * 10 % 11 % 10)
    }
}
