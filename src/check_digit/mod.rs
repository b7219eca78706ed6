mod czech_bank_account;
mod error;
mod iban;
mod isbn;
mod isin;
mod modulus;
mod modulus_11_10;
mod modulus_97;
mod vat;
mod verhoeff;

pub use crate::check_digit::czech_bank_account::CzechBankAccountCheckDigit;
pub use crate::check_digit::error::CheckDigitError;
pub use crate::check_digit::iban::IbanCheckDigit;
pub use crate::check_digit::isbn::IsbnCheckDigit;
pub use crate::check_digit::isin::IsinCheckDigit;
pub use crate::check_digit::modulus::{
    CharValues, CheckChar, CheckValue, ModulusCheckDigit, Products, Weights, ABA, CAS_NUMBER,
    CUSIP, EAN13, EC_INDEX_NUMBER, EC_NUMBER, ISBN10, ISSN, LUHN, SEDOL,
};
pub use crate::check_digit::modulus_11_10::{GermanTaxIdCheckDigit, Modulus11TenCheckDigit};
pub use crate::check_digit::modulus_97::Modulus97CheckDigit;
pub use crate::check_digit::vat::{VatCheckDigit, VatCountry, VatinCheckDigit};
pub use crate::check_digit::verhoeff::VerhoeffCheckDigit;

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use strum::IntoStaticStr;

/// A check-digit scheme: derives the check character(s) of a code from its body, and verifies
/// a complete code.
pub trait CheckDigit: Send + Sync {
    /// Computes the check character(s) for `body`.
    fn calculate(&self, body: &str) -> Result<String, CheckDigitError>;

    /// Splits a complete code into the body given to [`CheckDigit::calculate`] and the check
    /// characters it should produce. The check digit is the last character unless a scheme
    /// says otherwise.
    fn split_code<'c>(&self, code: &'c str) -> Option<(Cow<'c, str>, &'c str)> {
        split_check_digit(code, 1).map(|(body, check)| (Cow::Borrowed(body), check))
    }

    /// Never fails: any malformed code is simply not valid.
    fn is_valid(&self, code: &str) -> bool {
        if is_blank(code) {
            return false;
        }
        match self.split_code(code) {
            Some((body, check)) => self
                .calculate(&body)
                .map(|expected| expected.eq_ignore_ascii_case(check))
                .unwrap_or(false),
            None => false,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, IntoStaticStr)]
#[serde(tag = "type")]
pub enum CheckDigitAlgorithm {
    Aba,
    CasNumber,
    Cusip,
    CzechBankAccount,
    Ean13,
    EcIndexNumber,
    EcNumber,
    GermanTaxId,
    Iban,
    Isbn,
    Isbn10,
    Isin,
    Issn,
    Luhn,
    Modulus11Ten,
    Modulus97,
    ModulusTen {
        weights: Vec<u32>,
        #[serde(default)]
        use_right_pos: bool,
        #[serde(default)]
        sum_weighted_digits: bool,
    },
    Sedol,
    Vat {
        country: VatCountry,
    },
    Vatin,
    Verhoeff,
}

impl CheckDigitAlgorithm {
    pub fn name(&self) -> &'static str {
        self.into()
    }

    fn with_check_digit<R>(&self, f: impl FnOnce(&dyn CheckDigit) -> R) -> R {
        match self {
            CheckDigitAlgorithm::Aba => f(&ABA),
            CheckDigitAlgorithm::CasNumber => f(&CAS_NUMBER),
            CheckDigitAlgorithm::Cusip => f(&CUSIP),
            CheckDigitAlgorithm::CzechBankAccount => f(&CzechBankAccountCheckDigit),
            CheckDigitAlgorithm::Ean13 => f(&EAN13),
            CheckDigitAlgorithm::EcIndexNumber => f(&EC_INDEX_NUMBER),
            CheckDigitAlgorithm::EcNumber => f(&EC_NUMBER),
            CheckDigitAlgorithm::GermanTaxId => f(&GermanTaxIdCheckDigit),
            CheckDigitAlgorithm::Iban => f(&IbanCheckDigit),
            CheckDigitAlgorithm::Isbn => f(&IsbnCheckDigit),
            CheckDigitAlgorithm::Isbn10 => f(&ISBN10),
            CheckDigitAlgorithm::Isin => f(&IsinCheckDigit),
            CheckDigitAlgorithm::Issn => f(&ISSN),
            CheckDigitAlgorithm::Luhn => f(&LUHN),
            CheckDigitAlgorithm::Modulus11Ten => f(&Modulus11TenCheckDigit),
            CheckDigitAlgorithm::Modulus97 => f(&Modulus97CheckDigit),
            CheckDigitAlgorithm::ModulusTen {
                weights,
                use_right_pos,
                sum_weighted_digits,
            } => f(&ModulusCheckDigit::modulus_ten(
                weights,
                *use_right_pos,
                *sum_weighted_digits,
            )),
            CheckDigitAlgorithm::Sedol => f(&SEDOL),
            CheckDigitAlgorithm::Vat { country } => f(&VatCheckDigit::new(*country)),
            CheckDigitAlgorithm::Vatin => f(&VatinCheckDigit),
            CheckDigitAlgorithm::Verhoeff => f(&VerhoeffCheckDigit),
        }
    }
}

impl CheckDigit for CheckDigitAlgorithm {
    fn calculate(&self, body: &str) -> Result<String, CheckDigitError> {
        self.with_check_digit(|check_digit| check_digit.calculate(body))
    }

    fn split_code<'c>(&self, code: &'c str) -> Option<(Cow<'c, str>, &'c str)> {
        self.with_check_digit(|check_digit| check_digit.split_code(code))
    }

    fn is_valid(&self, code: &str) -> bool {
        self.with_check_digit(|check_digit| check_digit.is_valid(code))
    }
}

/// `null` is not representable, so whitespace-only input takes its place.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub(crate) fn require_body(body: &str) -> Result<(), CheckDigitError> {
    if is_blank(body) {
        return Err(CheckDigitError::MissingInput);
    }
    Ok(())
}

/// Splits off the last `check_len` characters. Safe on non-ASCII input.
pub(crate) fn split_check_digit(code: &str, check_len: usize) -> Option<(&str, &str)> {
    if check_len == 0 {
        return Some((code, ""));
    }
    let (index, _) = code.char_indices().rev().nth(check_len - 1)?;
    Some(code.split_at(index))
}

/// Maps every character of `body` to its decimal value.
pub(crate) fn to_digits(body: &str) -> Result<Vec<u32>, CheckDigitError> {
    body.chars()
        .enumerate()
        .map(|(i, character)| {
            character
                .to_digit(10)
                .ok_or(CheckDigitError::InvalidCharacter {
                    position: i + 1,
                    character,
                })
        })
        .collect()
}

/// Reads the digits as a single number, failing on anything that is not a plain digit string.
pub(crate) fn numeric_value(digits: &[u32]) -> Result<u64, CheckDigitError> {
    digits.iter().try_fold(0u64, |acc, digit| {
        acc.checked_mul(10)
            .and_then(|acc| acc.checked_add(*digit as u64))
            .ok_or(CheckDigitError::InvalidLength(digits.len()))
    })
}

/// Sum all the digits from a number
#[inline]
pub(crate) fn sum_all_digits(digits: u32) -> u32 {
    let mut sum = 0;
    let mut num = digits;
    while num > 0 {
        sum += num % 10;
        num /= 10;
    }
    sum
}

pub(crate) fn render_digit(value: u32) -> Result<String, CheckDigitError> {
    match char::from_digit(value, 10) {
        Some(digit) => Ok(digit.to_string()),
        None => Err(CheckDigitError::InvalidCheckDigitValue(value)),
    }
}

pub(crate) fn render_two_digits(value: u32) -> Result<String, CheckDigitError> {
    if value > 99 {
        return Err(CheckDigitError::InvalidCheckDigitValue(value));
    }
    Ok(format!("{:02}", value))
}

/// Asserts that every code is valid and that its check characters are what `calculate`
/// produces for its body.
#[cfg(test)]
pub(crate) fn assert_valid_codes(check_digit: &dyn CheckDigit, codes: &[&str]) {
    for code in codes {
        println!("valid code: {code}");
        assert!(check_digit.is_valid(code), "{code} should be valid");
        let (body, check) = check_digit.split_code(code).unwrap();
        assert_eq!(check_digit.calculate(&body).unwrap(), check, "{code}");
    }
}
