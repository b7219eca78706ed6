use crate::check_digit::{
    numeric_value, render_two_digits, require_body, split_check_digit, to_digits, CheckDigit,
    CheckDigitError,
};
use std::borrow::Cow;

use super::{is_zero, weighted_sum};

const MIN_CODE_LEN: usize = 4;

/// A pair of trailing check digits derived from the digits of the body.
pub(super) struct TwoDigitCheckDigit {
    check: fn(&[u32]) -> Result<u32, CheckDigitError>,
}

/// Belgium: `97 - (body mod 97)`.
pub(super) const BELGIUM: TwoDigitCheckDigit = TwoDigitCheckDigit {
    check: |digits| match numeric_value(digits)? % 97 {
        0 => Err(CheckDigitError::ZeroSumCode),
        remainder => Ok(97 - remainder as u32),
    },
};

/// Luxembourg: `body mod 89`.
pub(super) const LUXEMBOURG: TwoDigitCheckDigit = TwoDigitCheckDigit {
    check: |digits| match numeric_value(digits)? % 89 {
        0 => Err(CheckDigitError::ZeroSumCode),
        remainder => Ok(remainder as u32),
    },
};

/// Malta: `37 - (weighted sum mod 37)` over the first six digits.
pub(super) const MALTA: TwoDigitCheckDigit = TwoDigitCheckDigit {
    check: |digits| {
        if is_zero(digits) {
            return Err(CheckDigitError::ZeroSumCode);
        }
        Ok(37 - weighted_sum(digits, &[3, 4, 6, 7, 8, 9]) % 37)
    },
};

impl CheckDigit for TwoDigitCheckDigit {
    fn calculate(&self, body: &str) -> Result<String, CheckDigitError> {
        require_body(body)?;
        let code_length = body.chars().count() + 2;
        if code_length < MIN_CODE_LEN {
            return Err(CheckDigitError::InvalidLength(code_length));
        }
        let digits = to_digits(body)?;
        render_two_digits((self.check)(&digits)?)
    }

    fn split_code<'c>(&self, code: &'c str) -> Option<(Cow<'c, str>, &'c str)> {
        split_check_digit(code, 2).map(|(body, check)| (Cow::Borrowed(body), check))
    }
}
