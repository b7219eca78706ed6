use chrono::NaiveDate;

use crate::check_digit::{
    numeric_value, render_digit, require_body, split_check_digit, to_digits, CheckDigit,
    CheckDigitError,
};
use std::borrow::Cow;

use super::is_zero;

const LEGAL_ENTITY_LEN: usize = 8;
const SPECIAL_CASE_LEN: usize = 9;
const BIRTH_NUMBER_LEN: usize = 10;
const SPECIAL_CASE_CHECKS: [u32; 11] = [8, 7, 6, 5, 4, 3, 2, 1, 0, 9, 8];

/// Czech DIČ. Up to eight digits for a legal entity, nine digits starting with `6` for some
/// individuals, and ten digits for a birth number (rodné číslo).
pub(super) struct CzechiaCheckDigit;

/// Weights count down to 2 at the last body digit.
fn descending_sum(digits: &[u32]) -> u32 {
    let len = digits.len() as u32;
    digits
        .iter()
        .enumerate()
        .map(|(i, digit)| digit * (len + 1 - i as u32))
        .sum()
}

fn legal_entity(digits: &[u32]) -> Result<u32, CheckDigitError> {
    let total = descending_sum(digits);
    if total == 0 {
        return Err(CheckDigitError::ZeroSumCode);
    }
    Ok(match total % 11 {
        0 => 1,
        remainder => (11 - remainder) % 10,
    })
}

fn special_case(digits: &[u32]) -> Result<u32, CheckDigitError> {
    if digits[0] != 6 {
        return Err(CheckDigitError::InvalidCode("nine digit numbers start with '6'"));
    }
    let total = descending_sum(&digits[1..]);
    if total == 0 {
        return Err(CheckDigitError::ZeroSumCode);
    }
    let difference = match total % 11 {
        0 => 11,
        remainder => 11 - remainder,
    };
    Ok(SPECIAL_CASE_CHECKS[difference as usize - 1])
}

/// The month carries the sex and overflow ranges: +20, +50 or +70. Two digit years below 54
/// belong to this century.
fn has_valid_birth_date(digits: &[u32]) -> bool {
    let yy = (digits[0] * 10 + digits[1]) as i32;
    let mm = digits[2] * 10 + digits[3];
    let dd = digits[4] * 10 + digits[5];
    let month = match mm {
        71.. => mm - 70,
        51.. => mm - 50,
        21.. => mm - 20,
        _ => mm,
    };
    let year = if yy < 54 { 2000 + yy } else { 1900 + yy };
    NaiveDate::from_ymd_opt(year, month, dd).is_some()
}

/// The whole number is divisible by 11, except that a body leaving 10 takes the check digit 0.
fn birth_number(digits: &[u32]) -> Result<u32, CheckDigitError> {
    if is_zero(digits) {
        return Err(CheckDigitError::ZeroSumCode);
    }
    if !has_valid_birth_date(digits) {
        return Err(CheckDigitError::InvalidCode("invalid birth date"));
    }
    Ok((numeric_value(digits)? % 11 % 10) as u32)
}

impl CheckDigit for CzechiaCheckDigit {
    fn calculate(&self, body: &str) -> Result<String, CheckDigitError> {
        require_body(body)?;
        let digits = to_digits(body)?;
        let check = match digits.len() + 1 {
            LEGAL_ENTITY_LEN if digits[0] == 9 => {
                return Err(CheckDigitError::InvalidCode(
                    "eight digit numbers cannot start with '9'",
                ))
            }
            2..=LEGAL_ENTITY_LEN => legal_entity(&digits)?,
            SPECIAL_CASE_LEN => special_case(&digits)?,
            BIRTH_NUMBER_LEN => birth_number(&digits)?,
            length => return Err(CheckDigitError::InvalidLength(length)),
        };
        render_digit(check)
    }

    fn split_code<'c>(&self, code: &'c str) -> Option<(Cow<'c, str>, &'c str)> {
        if code.len() == LEGAL_ENTITY_LEN && code.starts_with('9') {
            return None;
        }
        split_check_digit(code, 1).map(|(body, check)| (Cow::Borrowed(body), check))
    }
}
