use crate::check_digit::{
    is_blank, numeric_value, render_two_digits, require_body, to_digits, CheckDigit,
    CheckDigitError,
};
use std::borrow::Cow;

const SIREN_LEN: usize = 9;
const KEY_LEN: usize = 2;
const KEY_ALPHABET: &str = "0123456789ABCDEFGHJKLMNPQRSTUVWXYZ";

/// French TVA number: a two character key followed by the nine digit SIREN.
///
/// The key leads the code. Numeric keys are `(SIREN * 100 + 12) mod 97`, which is what
/// `calculate` returns. Newer numbers may carry an alphanumeric key instead, and both forms
/// are accepted by `is_valid`.
pub(super) struct FranceCheckDigit;

fn siren(body: &str) -> Result<u64, CheckDigitError> {
    require_body(body)?;
    let digits = to_digits(body)?;
    if digits.len() != SIREN_LEN {
        return Err(CheckDigitError::InvalidLength(digits.len() + KEY_LEN));
    }
    numeric_value(&digits)
}

fn numeric_key(siren: u64) -> u64 {
    (siren * 100 + 12) % 97
}

/// Alphanumeric keys mix one digit with one letter, each indexed in [`KEY_ALPHABET`].
fn alphanumeric_key_matches(key: &str, siren: u64) -> bool {
    let mut chars = key.chars();
    let (Some(first), Some(second)) = (chars.next(), chars.next()) else {
        return false;
    };
    let (Some(i0), Some(i1)) = (KEY_ALPHABET.find(first), KEY_ALPHABET.find(second)) else {
        return false;
    };
    let (i0, i1) = (i0 as u64, i1 as u64);
    let s = match (first.is_ascii_digit(), second.is_ascii_digit()) {
        (false, true) => i0 * 34 + i1 - 100,
        (true, false) => i0 * 24 + i1 - 10,
        _ => return false,
    };
    s % 11 == (siren + s / 11 + 1) % 11
}

impl CheckDigit for FranceCheckDigit {
    fn calculate(&self, body: &str) -> Result<String, CheckDigitError> {
        let siren = siren(body)?;
        if siren == 0 {
            return Err(CheckDigitError::ZeroSumCode);
        }
        render_two_digits(numeric_key(siren) as u32)
    }

    fn split_code<'c>(&self, code: &'c str) -> Option<(Cow<'c, str>, &'c str)> {
        if code.len() != KEY_LEN + SIREN_LEN || !code.is_ascii() {
            return None;
        }
        let (key, siren) = code.split_at(KEY_LEN);
        Some((Cow::Borrowed(siren), key))
    }

    fn is_valid(&self, code: &str) -> bool {
        if is_blank(code) {
            return false;
        }
        let Some((siren_digits, key)) = self.split_code(code) else {
            return false;
        };
        let Ok(siren) = siren(&siren_digits) else {
            return false;
        };
        if siren == 0 {
            return false;
        }
        if key.chars().all(|c| c.is_ascii_digit()) {
            return key.parse::<u64>().ok() == Some(numeric_key(siren));
        }
        alphanumeric_key_matches(key, siren)
    }
}

#[cfg(test)]
mod test {
    use crate::check_digit::*;

    const NUMERIC_KEYS: &[&str] = &[
        "00300076965",
        "55502090897",
        "62914691134",
        "39423495704",
        "56395208796",
        "21431506443",
        "87791184211",
        "82419238647",
        "58349403683",
        "50818467615",
        "42916220106",
        "85343262622",
        "88882736077",
        "40303265045",
        "23334175221",
        "06399859412",
        "83404833048",
        "11123456782",
        "95952418325",
        "02813197589",
    ];

    #[test]
    fn validate_numeric_keys() {
        assert_valid_codes(&VatCheckDigit::new(VatCountry::FR), NUMERIC_KEYS);
    }

    #[test]
    fn alphanumeric_keys_are_accepted_but_not_canonical() {
        let france = VatCheckDigit::new(VatCountry::FR);
        for code in ["2H123456789", "K7399859412", "N0303265045", "0Q300076965", "9X334175221"] {
            println!("alphanumeric key: {code}");
            assert!(france.is_valid(code));
        }
        assert_eq!(france.calculate("303265045").unwrap(), "40");
    }

    #[test]
    fn rejects_invalid_french_numbers() {
        let france = VatCheckDigit::new(VatCountry::FR);
        for code in [
            "01300076965",
            "2J123456789",
            "HH123456789",
            "00000000000",
            "4030326504",
            "40303265045X",
            "4030326504A",
        ] {
            println!("invalid: {code}");
            assert!(!france.is_valid(code));
        }
        assert_eq!(
            france.calculate("000000000"),
            Err(CheckDigitError::ZeroSumCode)
        );
        assert_eq!(
            france.calculate("30326504"),
            Err(CheckDigitError::InvalidLength(10))
        );
    }
}
