use crate::check_digit::{is_blank, require_body, split_check_digit, CheckDigit, CheckDigitError, LUHN};

/// ISIN check digit: every character is expanded to its decimal value (`A=10` up to `Z=35`)
/// and the resulting digit string goes through Luhn.
pub struct IsinCheckDigit;

impl IsinCheckDigit {
    fn expand(body: &str) -> Result<String, CheckDigitError> {
        let mut expanded = String::with_capacity(body.len() * 2);
        for (i, character) in body.chars().enumerate() {
            let value = character
                .to_digit(36)
                .ok_or(CheckDigitError::InvalidCharacter {
                    position: i + 1,
                    character,
                })?;
            expanded.push_str(&value.to_string());
        }
        Ok(expanded)
    }
}

impl CheckDigit for IsinCheckDigit {
    fn calculate(&self, body: &str) -> Result<String, CheckDigitError> {
        require_body(body)?;
        LUHN.calculate(&Self::expand(body)?)
    }

    fn is_valid(&self, code: &str) -> bool {
        if is_blank(code) {
            return false;
        }
        match split_check_digit(code, 1) {
            Some((body, check)) if check.chars().all(|c| c.is_ascii_digit()) => self
                .calculate(body)
                .map(|expected| expected == check)
                .unwrap_or(false),
            _ => false,
        }
    }
}
