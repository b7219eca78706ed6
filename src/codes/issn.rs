use crate::check_digit::{CheckDigit, CheckDigitAlgorithm, CheckDigitError, EAN13, ISSN};
use crate::code_validator::{CodeValidator, LengthBounds};
use crate::codes::built_in;
use lazy_static::lazy_static;

/// An optional `ISSN ` prefix, then two groups of four characters joined by a hyphen.
pub const ISSN_PATTERN: &str = r"(?:ISSN )?(\d{4})-(\d{3}[0-9X])";

const EAN_ISSN_PATTERN: &str = r"(977)(\d{10})";
const EAN_ISSN_PREFIX: &str = "977";
const EAN_ISSN_LEN: usize = 13;
const ISSN_BODY_LEN: usize = 7;

lazy_static! {
    static ref ISSN_VALIDATOR: CodeValidator = built_in(
        "issn",
        &[ISSN_PATTERN],
        LengthBounds::exact(8),
        Some(CheckDigitAlgorithm::Issn),
    );
    static ref EAN_ISSN_VALIDATOR: CodeValidator = built_in(
        "ean_issn",
        &[EAN_ISSN_PATTERN],
        LengthBounds::exact(EAN_ISSN_LEN),
        Some(CheckDigitAlgorithm::Ean13),
    );
}

/// Validates International Standard Serial Numbers such as `ISSN 0317-8471` or `1050-124X`.
/// Valid codes are returned as their eight characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IssnValidator;

impl IssnValidator {
    pub fn is_valid(&self, code: &str) -> bool {
        ISSN_VALIDATOR.is_valid(code)
    }

    pub fn validate(&self, code: &str) -> Option<String> {
        ISSN_VALIDATOR.validate(code)
    }

    /// Builds the EAN-13 barcode of an ISSN: `977`, the ISSN without its check digit, the
    /// two digit `suffix` and an EAN-13 check digit.
    ///
    /// Fails if `suffix` is not two digits. Returns `None` if `issn` is not valid.
    pub fn convert_to_ean13(
        &self,
        issn: &str,
        suffix: &str,
    ) -> Result<Option<String>, CheckDigitError> {
        if suffix.len() != 2 || !suffix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CheckDigitError::InvalidCode("suffix must be two digits"));
        }
        let Some(issn) = self.validate(issn) else {
            return Ok(None);
        };
        let body = format!("{EAN_ISSN_PREFIX}{}{suffix}", &issn[..ISSN_BODY_LEN]);
        let check = EAN13.calculate(&body)?;
        Ok(Some(body + &check))
    }

    /// Recovers the ISSN from an EAN-13 barcode built by [`IssnValidator::convert_to_ean13`].
    ///
    /// Fails if `ean13` is not 13 characters or does not start with `977`. Returns `None` if
    /// it is not a valid EAN-13.
    pub fn extract_from_ean13(&self, ean13: &str) -> Result<Option<String>, CheckDigitError> {
        let ean13 = ean13.trim();
        let length = ean13.chars().count();
        if length != EAN_ISSN_LEN {
            return Err(CheckDigitError::InvalidLength(length));
        }
        if !ean13.starts_with(EAN_ISSN_PREFIX) {
            return Err(CheckDigitError::InvalidCode("prefix must be 977"));
        }
        let Some(ean13) = EAN_ISSN_VALIDATOR.validate(ean13) else {
            return Ok(None);
        };
        let start = EAN_ISSN_PREFIX.len();
        let body = &ean13[start..start + ISSN_BODY_LEN];
        let check = ISSN.calculate(body)?;
        Ok(Some(format!("{body}{check}")))
    }
}

#[cfg(test)]
mod test {
    use crate::check_digit::CheckDigitError;
    use crate::codes::*;

    #[test]
    fn valid_codes() {
        for code in [
            "ISSN 0317-8471",
            "1050-124X",
            "ISSN 1562-6865",
            "1063-7710",
            "1748-7188",
            "ISSN 0264-2875",
            "1750-0095",
            "1188-1534",
            "1911-1479",
            "ISSN 1911-1460",
            "0001-6772",
            "1365-201X",
            "0264-3596",
            "1144-875X",
        ] {
            println!("valid: {code}");
            assert!(IssnValidator.is_valid(code));
        }
        assert_eq!(
            IssnValidator.validate("ISSN 0317-8471"),
            Some("03178471".to_string())
        );
        assert_eq!(IssnValidator.validate("1050-124X"), Some("1050124X".into()));
    }

    #[test]
    fn invalid_codes() {
        for code in [
            "",
            "   ",
            "ISBN 0317-8471",
            "'1050-124X",
            "ISSN1562-6865",
            "10637710",
            "1748-7188'",
            "ISSN  0264-2875",
            "1750 0095",
            "1188_1534",
            "1911-1478",
        ] {
            println!("invalid: {code}");
            assert!(!IssnValidator.is_valid(code));
            assert_eq!(IssnValidator.validate(code), None);
        }
    }

    #[test]
    fn convert_to_ean13() {
        assert_eq!(
            IssnValidator.convert_to_ean13("1144-875X", "00").unwrap(),
            Some("9771144875007".to_string())
        );
        assert_eq!(
            IssnValidator.convert_to_ean13("0264-3596", "00").unwrap(),
            Some("9770264359008".to_string())
        );
        assert_eq!(
            IssnValidator.convert_to_ean13("1234-5679", "00").unwrap(),
            Some("9771234567003".to_string())
        );
        assert_eq!(
            IssnValidator.convert_to_ean13("ISSN 1144-875X", "12").unwrap(),
            Some("9771144875120".to_string())
        );
        assert_eq!(IssnValidator.convert_to_ean13("1911-1478", "00"), Ok(None));
        assert_eq!(IssnValidator.convert_to_ean13("", "00"), Ok(None));
    }

    #[test]
    fn convert_rejects_bad_suffixes() {
        for suffix in ["", "0", "A", "000", "0A"] {
            assert_eq!(
                IssnValidator.convert_to_ean13("1144-875X", suffix),
                Err(CheckDigitError::InvalidCode("suffix must be two digits"))
            );
        }
    }

    #[test]
    fn extract_from_ean13() {
        assert_eq!(
            IssnValidator.extract_from_ean13("9771144875007").unwrap(),
            Some("1144875X".to_string())
        );
        assert_eq!(
            IssnValidator.extract_from_ean13(" 9770264359008 ").unwrap(),
            Some("02643596".to_string())
        );
        // bad EAN-13 check digit
        assert_eq!(IssnValidator.extract_from_ean13("9771144875008"), Ok(None));
        assert_eq!(
            IssnValidator.extract_from_ean13("977114487500"),
            Err(CheckDigitError::InvalidLength(12))
        );
        assert_eq!(
            IssnValidator.extract_from_ean13("9781930110991"),
            Err(CheckDigitError::InvalidCode("prefix must be 977"))
        );
    }
}
