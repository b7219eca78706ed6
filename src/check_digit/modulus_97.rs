use crate::check_digit::{
    is_blank, render_two_digits, require_body, split_check_digit, CheckDigit, CheckDigitError,
};
use std::borrow::Cow;

const MODULUS: u64 = 97;
const MIN_CODE_LEN: usize = 4;
const MAX_PARTIAL: u64 = 999_999_999;

/// ISO 7064 MOD 97-10 computed in place, as used by LEI and Leitweg-ID codes.
///
/// Letters expand to two digits (`A=10` up to `Z=35`). A code is valid when the expanded number
/// is congruent to 1 modulo 97.
pub struct Modulus97CheckDigit;

/// Remainder modulo 97 of the numeric expansion of `code`.
pub(crate) fn remainder_97(code: &str) -> Result<u64, CheckDigitError> {
    let mut total: u64 = 0;
    for (i, character) in code.chars().enumerate() {
        let value = character
            .to_digit(36)
            .ok_or(CheckDigitError::InvalidCharacter {
                position: i + 1,
                character,
            })? as u64;
        total = if value > 9 { total * 100 } else { total * 10 } + value;
        if total > MAX_PARTIAL {
            total %= MODULUS;
        }
    }
    Ok(total % MODULUS)
}

impl CheckDigit for Modulus97CheckDigit {
    fn calculate(&self, body: &str) -> Result<String, CheckDigitError> {
        require_body(body)?;
        let length = body.chars().count();
        if length < MIN_CODE_LEN {
            return Err(CheckDigitError::InvalidLength(length));
        }
        // append the "00" placeholder
        let remainder = remainder_97(body)? * 100 % MODULUS;
        if remainder == 0 {
            return Err(CheckDigitError::ZeroSumCode);
        }
        render_two_digits(((MODULUS + 1 - remainder) % MODULUS) as u32)
    }

    fn split_code<'c>(&self, code: &'c str) -> Option<(Cow<'c, str>, &'c str)> {
        split_check_digit(code, 2).map(|(body, check)| (Cow::Borrowed(body), check))
    }

    fn is_valid(&self, code: &str) -> bool {
        if is_blank(code) || code.chars().count() < MIN_CODE_LEN {
            return false;
        }
        // 97 to 99 would alias 00 to 02
        let canonical_check = split_check_digit(code, 2)
            .filter(|(_, check)| check.chars().all(|c| c.is_ascii_digit()))
            .and_then(|(_, check)| check.parse::<u64>().ok())
            .is_some_and(|check| check < MODULUS);
        canonical_check && matches!(remainder_97(code), Ok(1))
    }
}

#[cfg(test)]
mod test {
    use crate::check_digit::*;
    use iso_iec_7064::{System, MOD_97_10};

    const VALID: &[&str] = &[
        "000195",
        "99999999999999999928",
        "999999999999999999999999999916",
        // Leitweg-IDs without separators
        "9929000996",
        "0517000520523100135",
        "0533400020023300423",
        "057110600179",
        "059139900125",
        "11200000100030",
        // LEIs
        "54930084UKLVMY22DS16",
        "213800WSGIIZCXF1P572",
        "M07J9MTYHFCSVRBV2631",
        "529900CLVK38HUKPKF71",
    ];

    #[test]
    fn validate_modulus_97() {
        for code in VALID {
            println!("valid code: {code}");
            assert!(Modulus97CheckDigit.is_valid(code));
            let (body, check) = split_check_digit(code, 2).unwrap();
            assert_eq!(Modulus97CheckDigit.calculate(body).unwrap(), check);
        }
    }

    #[test]
    fn numeric_codes_agree_with_iso_7064() {
        for code in VALID.iter().filter(|c| c.chars().all(|c| c.is_ascii_digit())) {
            assert!(MOD_97_10.validate_string(code));
        }
    }

    #[test]
    fn check_digits_must_be_numeric() {
        assert!(!Modulus97CheckDigit.is_valid("0001A5"));
        assert!(!Modulus97CheckDigit.is_valid("54930084UKLVMY22DS1G"));
        assert!(!Modulus97CheckDigit.is_valid("54930084UKLVMY22DS17"));
    }

    #[test]
    fn check_pairs_above_96_are_rejected() {
        assert_eq!(Modulus97CheckDigit.calculate("001002").unwrap(), "02");
        assert!(Modulus97CheckDigit.is_valid("00100202"));
        // same remainder as 02
        assert!(!Modulus97CheckDigit.is_valid("00100299"));
    }

    #[test]
    fn short_and_degenerate_bodies() {
        assert_eq!(
            Modulus97CheckDigit.calculate("123"),
            Err(CheckDigitError::InvalidLength(3))
        );
        assert_eq!(
            Modulus97CheckDigit.calculate("0000"),
            Err(CheckDigitError::ZeroSumCode)
        );
        assert!(!Modulus97CheckDigit.is_valid("195"));
    }
}
