use chrono::NaiveDate;

use crate::check_digit::{render_digit, require_body, to_digits, CheckDigit, CheckDigitError};

use super::{is_zero, weighted_sum};

const BODY_LEN: usize = 10;
const LEGAL_ENTITY_WEIGHTS: &[u32] = &[9, 1, 4, 8, 3, 10, 2, 5, 7, 6];
const PERSON_WEIGHTS: &[u32] = &[1, 6, 3, 7, 9, 10, 5, 8, 4, 2];

/// Latvian PVN number. A first digit above 3 marks a legal entity; anything else is a
/// personal code, which carries a `ddmmyy` birth date unless its first two digits exceed 31.
pub(super) struct LatviaCheckDigit;

/// `offset - remainder`, wrapped into 0..=10. A result of -1 has no check digit.
fn offset_check(offset: i32, remainder: u32) -> Result<u32, CheckDigitError> {
    match offset - remainder as i32 {
        -1 => Err(CheckDigitError::InvalidCode("check value is negative")),
        value if value < -1 => Ok((value + 11) as u32),
        value => Ok(value as u32),
    }
}

/// The seventh digit gives the century: 0 for the 1800s, 1 for the 1900s, 2 for the 2000s.
fn has_valid_birth_date(digits: &[u32]) -> bool {
    let dd = digits[0] * 10 + digits[1];
    let mm = digits[2] * 10 + digits[3];
    let yy = (digits[4] * 10 + digits[5]) as i32;
    let century = match digits[6] {
        0 => 1800,
        1 => 1900,
        2 => 2000,
        _ => return false,
    };
    NaiveDate::from_ymd_opt(century + yy, mm, dd).is_some()
}

impl CheckDigit for LatviaCheckDigit {
    fn calculate(&self, body: &str) -> Result<String, CheckDigitError> {
        require_body(body)?;
        let digits = to_digits(body)?;
        if digits.len() != BODY_LEN {
            return Err(CheckDigitError::InvalidLength(digits.len() + 1));
        }
        if is_zero(&digits) {
            return Err(CheckDigitError::ZeroSumCode);
        }
        if digits[0] > 3 {
            let remainder = weighted_sum(&digits, LEGAL_ENTITY_WEIGHTS) % 11;
            return render_digit(offset_check(3, remainder)?);
        }
        let day = digits[0] * 10 + digits[1];
        if (1..=31).contains(&day) && !has_valid_birth_date(&digits) {
            return Err(CheckDigitError::InvalidCode("invalid birth date"));
        }
        let remainder = weighted_sum(&digits, PERSON_WEIGHTS) % 11;
        render_digit(offset_check(1, remainder)?)
    }
}
