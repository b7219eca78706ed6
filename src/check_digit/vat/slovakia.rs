use crate::check_digit::{
    numeric_value, render_digit, require_body, to_digits, CheckDigit, CheckDigitError,
};

/// Slovak IČ DPH: the whole number is divisible by 11.
pub(super) struct SlovakiaCheckDigit;

impl CheckDigit for SlovakiaCheckDigit {
    fn calculate(&self, body: &str) -> Result<String, CheckDigitError> {
        require_body(body)?;
        let value = numeric_value(&to_digits(body)?)?;
        if value == 0 {
            return Err(CheckDigitError::ZeroSumCode);
        }
        let check = (11 - value * 10 % 11) % 11;
        render_digit(check as u32)
    }
}
