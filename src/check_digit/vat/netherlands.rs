use crate::check_digit::modulus::{ModulusCheckDigit, Weights};
use crate::check_digit::{
    require_body, split_check_digit, to_digits, CheckDigit, CheckDigitError,
};
use std::borrow::Cow;

use super::is_zero;

const CODE_LEN: usize = 9;
const SUFFIX_LEN: usize = 3;

const ENGINE: ModulusCheckDigit<'static> = ModulusCheckDigit::new(11, Weights::RightPosition)
    .remainder()
    .code_length(2, CODE_LEN);

/// Dutch BTW number: nine digits, optionally followed by a `B` and a two digit branch number
/// other than `00`.
pub(super) struct NetherlandsCheckDigit;

impl CheckDigit for NetherlandsCheckDigit {
    fn calculate(&self, body: &str) -> Result<String, CheckDigitError> {
        require_body(body)?;
        if is_zero(&to_digits(body)?) {
            return Err(CheckDigitError::ZeroSumCode);
        }
        ENGINE.calculate(body)
    }

    fn split_code<'c>(&self, code: &'c str) -> Option<(Cow<'c, str>, &'c str)> {
        if !code.is_ascii() {
            return None;
        }
        let code = if code.len() > CODE_LEN {
            let suffix = &code[CODE_LEN..];
            if code.len() != CODE_LEN + SUFFIX_LEN || !suffix.starts_with('B') || suffix == "B00" {
                return None;
            }
            &code[..CODE_LEN]
        } else {
            code
        };
        split_check_digit(code, 1).map(|(body, check)| (Cow::Borrowed(body), check))
    }
}
