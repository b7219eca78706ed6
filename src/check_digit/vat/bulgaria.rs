use chrono::NaiveDate;

use crate::check_digit::{
    numeric_value, render_digit, require_body, to_digits, CheckDigit, CheckDigitError,
};

use super::weighted_sum;

const LEGAL_ENTITY_WEIGHTS: &[u32] = &[1, 2, 3, 4, 5, 6, 7, 8];
const LEGAL_ENTITY_FALLBACK_WEIGHTS: &[u32] = &[3, 4, 5, 6, 7, 8, 9, 10];
const PERSON_WEIGHTS: &[u32] = &[2, 4, 8, 5, 10, 9, 7, 3, 6];
const BRANCH_WEIGHTS: &[u32] = &[2, 7, 3, 5];
const BRANCH_FALLBACK_WEIGHTS: &[u32] = &[4, 9, 5, 7];

/// Bulgarian VAT number. Nine digits identify a legal entity, ten a person (EGN, with the
/// birth date in its first six digits) and thirteen a branch of a legal entity (BULSTAT).
pub(super) struct BulgariaCheckDigit;

/// Weighted sum mod 11, retried with the fallback weights when it comes out as 10.
fn two_pass(digits: &[u32], weights: &[u32], fallback: &[u32]) -> u32 {
    match weighted_sum(digits, weights) % 11 {
        10 => weighted_sum(digits, fallback) % 11 % 10,
        remainder => remainder,
    }
}

fn legal_entity(digits: &[u32]) -> u32 {
    two_pass(digits, LEGAL_ENTITY_WEIGHTS, LEGAL_ENTITY_FALLBACK_WEIGHTS)
}

/// The month carries the century: +20 for the 1800s, +40 for the 2000s.
fn has_valid_birth_date(digits: &[u32]) -> bool {
    let yy = (digits[0] * 10 + digits[1]) as i32;
    let mm = digits[2] * 10 + digits[3];
    let dd = digits[4] * 10 + digits[5];
    let (year, month) = match mm {
        41.. => (2000 + yy, mm - 40),
        21.. => (1800 + yy, mm - 20),
        _ => (1900 + yy, mm),
    };
    NaiveDate::from_ymd_opt(year, month, dd).is_some()
}

impl CheckDigit for BulgariaCheckDigit {
    fn calculate(&self, body: &str) -> Result<String, CheckDigitError> {
        require_body(body)?;
        let digits = to_digits(body)?;
        if numeric_value(&digits)? == 0 {
            return Err(CheckDigitError::ZeroSumCode);
        }
        let check = match digits.len() {
            8 => legal_entity(&digits),
            9 => {
                if !has_valid_birth_date(&digits) {
                    return Err(CheckDigitError::InvalidCode("invalid birth date"));
                }
                weighted_sum(&digits, PERSON_WEIGHTS) % 11 % 10
            }
            12 => {
                let (entity, branch) = digits.split_at(8);
                if legal_entity(entity) != branch[0] {
                    return Err(CheckDigitError::InvalidCode(
                        "legal entity part fails its check",
                    ));
                }
                two_pass(branch, BRANCH_WEIGHTS, BRANCH_FALLBACK_WEIGHTS)
            }
            length => return Err(CheckDigitError::InvalidLength(length + 1)),
        };
        render_digit(check)
    }
}
