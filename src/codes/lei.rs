use crate::check_digit::CheckDigitAlgorithm;
use crate::code_validator::{CodeValidator, LengthBounds};
use crate::codes::built_in;
use lazy_static::lazy_static;

/// The current layout (issuer prefix, entity part, check digits) and the older free-form one.
pub const LEI_PATTERNS: &[&str] = &[r"(\d{4})([A-Z0-9]{14})(\d{2})", r"([A-Z0-9]{18})(\d{2})"];

lazy_static! {
    static ref LEI_VALIDATOR: CodeValidator = built_in(
        "lei",
        LEI_PATTERNS,
        LengthBounds::exact(20),
        Some(CheckDigitAlgorithm::Modulus97),
    );
}

/// Validates Legal Entity Identifiers (ISO 17442).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LeiValidator;

impl LeiValidator {
    pub fn is_valid(&self, code: &str) -> bool {
        LEI_VALIDATOR.is_valid(code)
    }

    pub fn validate(&self, code: &str) -> Option<String> {
        LEI_VALIDATOR.validate(code)
    }
}

#[cfg(test)]
mod test {
    use crate::codes::*;

    #[test]
    fn valid_codes() {
        for code in [
            "54930084UKLVMY22DS16",
            "213800WSGIIZCXF1P572",
            // issued before the current layout
            "M07J9MTYHFCSVRBV2631",
            "529900CLVK38HUKPKF71",
            "549300ABCDEFGH001801",
        ] {
            println!("valid: {code}");
            assert!(LeiValidator.is_valid(code));
            assert_eq!(LeiValidator.validate(code), Some(code.to_string()));
        }
    }

    #[test]
    fn invalid_codes() {
        for code in [
            "",
            "M07J9MTYHFCSVRBV2600",
            "529900CLVK38HUKPKF77",
            "529900clvk38hukpkf71",
            "529900CLVK38HUKPKF7",
            "529900CLVK38HUKPKF711",
            // 98 leaves the same remainder as the canonical 01
            "549300ABCDEFGH001898",
        ] {
            println!("invalid: {code}");
            assert!(!LeiValidator.is_valid(code));
        }
    }
}
