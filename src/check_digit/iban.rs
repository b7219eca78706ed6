use crate::check_digit::modulus_97::remainder_97;
use crate::check_digit::{is_blank, render_two_digits, require_body, CheckDigit, CheckDigitError};
use std::borrow::Cow;

const MIN_CODE_LEN: usize = 5;

/// IBAN check digits (ISO 13616 over ISO 7064 MOD 97-10).
///
/// The two check digits are characters 3 and 4 of the IBAN, not trailing ones, so
/// [`CheckDigit::calculate`] takes the complete IBAN and ignores whatever sits in the check
/// position.
pub struct IbanCheckDigit;

impl IbanCheckDigit {
    /// Moves the country code and check digits to the end before reducing.
    fn rearranged_remainder(code: &str) -> Result<u64, CheckDigitError> {
        if let Some((i, character)) = code.char_indices().find(|(_, c)| !c.is_ascii()) {
            return Err(CheckDigitError::InvalidCharacter {
                position: i + 1,
                character,
            });
        }
        let (head, tail) = code.split_at(4);
        remainder_97(&format!("{tail}{head}"))
    }
}

impl CheckDigit for IbanCheckDigit {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        require_body(code)?;
        let length = code.chars().count();
        if length < MIN_CODE_LEN {
            return Err(CheckDigitError::InvalidLength(length));
        }
        let mut placeholder = String::with_capacity(code.len());
        let mut chars = code.chars();
        placeholder.extend(chars.by_ref().take(2));
        placeholder.push_str("00");
        placeholder.extend(chars.skip(2));

        let remainder = Self::rearranged_remainder(&placeholder)?;
        render_two_digits((98 - remainder) as u32)
    }

    fn split_code<'c>(&self, code: &'c str) -> Option<(Cow<'c, str>, &'c str)> {
        if code.len() < MIN_CODE_LEN || !code.is_ascii() {
            return None;
        }
        Some((Cow::Borrowed(code), &code[2..4]))
    }

    fn is_valid(&self, code: &str) -> bool {
        if is_blank(code) || code.len() < MIN_CODE_LEN || !code.is_ascii() {
            return false;
        }
        if matches!(&code[2..4], "00" | "01" | "99") {
            return false;
        }
        matches!(Self::rearranged_remainder(code), Ok(1))
    }
}
