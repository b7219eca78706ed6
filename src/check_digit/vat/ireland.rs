use crate::check_digit::{require_body, to_digits, CheckDigit, CheckDigitError};
use std::borrow::Cow;

use super::{is_zero, weighted_sum};

const DIGITS_LEN: usize = 7;
const WEIGHTS: &[u32] = &[8, 7, 6, 5, 4, 3, 2];
const SUFFIX_WEIGHT: u32 = 9;
const CHECK_LETTERS: &[u8] = b"WABCDEFGHIJKLMNOPQRSTUV";

/// Irish VAT number: seven digits, a check letter and, for newer numbers, a trailing letter
/// that takes part in the check. The body handed to `calculate` is the digits plus that
/// trailing letter, if any.
pub(super) struct IrelandCheckDigit;

/// `A` to `I` count 1 to 9 and `W` counts 0.
fn suffix_value(suffix: char) -> Result<u32, CheckDigitError> {
    match suffix {
        'A'..='I' => Ok(suffix as u32 - 'A' as u32 + 1),
        'W' => Ok(0),
        character => Err(CheckDigitError::InvalidCharacter {
            position: DIGITS_LEN + 1,
            character,
        }),
    }
}

impl CheckDigit for IrelandCheckDigit {
    fn calculate(&self, body: &str) -> Result<String, CheckDigitError> {
        require_body(body)?;
        let length = body.chars().count();
        if !body.is_ascii() || !(DIGITS_LEN..=DIGITS_LEN + 1).contains(&length) {
            return Err(CheckDigitError::InvalidLength(length + 1));
        }
        let (digits, suffix) = body.split_at(DIGITS_LEN);
        let digits = to_digits(digits)?;
        if is_zero(&digits) {
            return Err(CheckDigitError::ZeroSumCode);
        }
        let suffix_total = match suffix.chars().next() {
            Some(suffix) => suffix_value(suffix)? * SUFFIX_WEIGHT,
            None => 0,
        };
        let total = weighted_sum(&digits, WEIGHTS) + suffix_total;
        Ok(char::from(CHECK_LETTERS[(total % 23) as usize]).to_string())
    }

    fn split_code<'c>(&self, code: &'c str) -> Option<(Cow<'c, str>, &'c str)> {
        if code.len() <= DIGITS_LEN || !code.is_ascii() {
            return None;
        }
        let (digits, rest) = code.split_at(DIGITS_LEN);
        let (check, suffix) = rest.split_at(1);
        if suffix.is_empty() {
            return Some((Cow::Borrowed(digits), check));
        }
        Some((Cow::Owned(format!("{digits}{suffix}")), check))
    }
}
