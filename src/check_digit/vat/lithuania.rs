use crate::check_digit::{render_digit, require_body, to_digits, CheckDigit, CheckDigitError};

use super::is_zero;

const MAX_CODE_LEN: usize = 12;

/// Lithuanian PVM code, 9 digits for legal entities and 12 for temporary payers.
pub(super) struct LithuaniaCheckDigit;

fn weighted_remainder(digits: &[u32], weight: impl Fn(u32) -> u32) -> Result<u32, CheckDigitError> {
    let total: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, digit)| digit * weight(i as u32 + 1))
        .sum();
    if total == 0 {
        return Err(CheckDigitError::ZeroSumCode);
    }
    Ok(total % 11)
}

impl CheckDigit for LithuaniaCheckDigit {
    fn calculate(&self, body: &str) -> Result<String, CheckDigitError> {
        require_body(body)?;
        let digits = to_digits(body)?;
        if digits.len() + 1 > MAX_CODE_LEN {
            return Err(CheckDigitError::InvalidLength(digits.len() + 1));
        }
        if digits.len() + 1 == MAX_CODE_LEN && is_zero(&digits) {
            return Err(CheckDigitError::ZeroSumCode);
        }
        let first = weighted_remainder(&digits, |pos| if pos > 9 { pos - 9 } else { pos })?;
        if first != 10 {
            return render_digit(first);
        }
        let second = weighted_remainder(&digits, |pos| if pos > 7 { pos - 7 } else { pos + 2 })?;
        render_digit(second % 10)
    }
}

#[cfg(test)]
mod test {
    use crate::check_digit::*;

    #[test]
    fn validate_lithuanian_vat_numbers() {
        let lithuania = VatCheckDigit::new(VatCountry::LT);
        assert_valid_codes(
            &lithuania,
            &[
                "213179412",
                "290061371314",
                "100014579016",
                "100008668610",
                "582708716",
                "237153113",
                "230335113",
                "321389515",
            ],
        );
        for code in ["07091910933", "2131794120000", "000000000000"] {
            println!("invalid: {code}");
            assert!(!lithuania.is_valid(code));
        }
    }
}
