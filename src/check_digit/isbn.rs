use crate::check_digit::{is_blank, require_body, CheckDigit, CheckDigitError, EAN13, ISBN10};

/// ISBN-10 or ISBN-13 check digit, chosen by the length of the input.
pub struct IsbnCheckDigit;

impl CheckDigit for IsbnCheckDigit {
    fn calculate(&self, body: &str) -> Result<String, CheckDigitError> {
        require_body(body)?;
        match body.chars().count() {
            9 => ISBN10.calculate(body),
            12 => EAN13.calculate(body),
            length => Err(CheckDigitError::InvalidLength(length)),
        }
    }

    fn is_valid(&self, code: &str) -> bool {
        if is_blank(code) {
            return false;
        }
        match code.chars().count() {
            10 => ISBN10.is_valid(code),
            13 => EAN13.is_valid(code),
            _ => false,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::check_digit::*;

    #[test]
    fn validate_both_isbn_lengths() {
        for code in [
            "9780072129519",
            "9780764558313",
            "1930110995",
            "020163385X",
            "1590596277",
            "9781590596272",
        ] {
            assert!(IsbnCheckDigit.is_valid(code));
            let (body, check) = split_check_digit(code, 1).unwrap();
            assert_eq!(IsbnCheckDigit.calculate(body).unwrap(), check);
        }
    }

    #[test]
    fn other_lengths_are_rejected() {
        for code in ["123456789", "12345678901", "123456789012", "12345678901234"] {
            assert!(!IsbnCheckDigit.is_valid(code));
        }
        for body in ["12345678", "1234567890", "12345678901", "1234567890123"] {
            assert_eq!(
                IsbnCheckDigit.calculate(body),
                Err(CheckDigitError::InvalidLength(body.len()))
            );
        }
        assert_eq!(
            IsbnCheckDigit.calculate("000000000000"),
            Err(CheckDigitError::ZeroSumCode)
        );
    }
}
