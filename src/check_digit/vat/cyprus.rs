use crate::check_digit::{require_body, to_digits, CheckDigit, CheckDigitError};

use super::is_zero;

const BODY_LEN: usize = 8;
const ODD_POSITION_VALUES: [u32; 10] = [1, 0, 5, 7, 9, 13, 15, 17, 19, 21];

/// Cyprus: eight digits and a check letter. Numbers starting with `12` are never issued.
pub(super) struct CyprusCheckDigit;

impl CheckDigit for CyprusCheckDigit {
    fn calculate(&self, body: &str) -> Result<String, CheckDigitError> {
        require_body(body)?;
        if body.starts_with("12") {
            return Err(CheckDigitError::InvalidCode("may not start with '12'"));
        }
        let digits = to_digits(body)?;
        if digits.len() != BODY_LEN {
            return Err(CheckDigitError::InvalidLength(digits.len() + 1));
        }
        if is_zero(&digits) {
            return Err(CheckDigitError::ZeroSumCode);
        }
        let total: u32 = digits
            .iter()
            .enumerate()
            .map(|(i, digit)| {
                if i % 2 == 0 {
                    ODD_POSITION_VALUES[*digit as usize]
                } else {
                    *digit
                }
            })
            .sum();
        Ok(char::from(b'A' + (total % 26) as u8).to_string())
    }
}
