use crate::check_digit::{require_body, split_check_digit, CheckDigit, CheckDigitError, LUHN};
use std::borrow::Cow;

const NUMBER_LEN: usize = 10;
const SUFFIX: &str = "01";

/// Swedish momsregistreringsnummer: a ten digit organisation number with a Luhn check digit,
/// usually followed by `01`.
pub(super) struct SwedenCheckDigit;

impl CheckDigit for SwedenCheckDigit {
    fn calculate(&self, body: &str) -> Result<String, CheckDigitError> {
        require_body(body)?;
        let code_length = body.chars().count() + 1;
        if code_length != NUMBER_LEN {
            return Err(CheckDigitError::InvalidLength(code_length));
        }
        LUHN.calculate(body)
    }

    fn split_code<'c>(&self, code: &'c str) -> Option<(Cow<'c, str>, &'c str)> {
        let number = if code.len() > NUMBER_LEN {
            match code.strip_suffix(SUFFIX) {
                Some(number) if number.len() == NUMBER_LEN => number,
                _ => return None,
            }
        } else {
            code
        };
        split_check_digit(number, 1).map(|(body, check)| (Cow::Borrowed(body), check))
    }
}

#[cfg(test)]
mod test {
    use crate::check_digit::*;

    #[test]
    fn validate_swedish_vat_numbers() {
        let sweden = VatCheckDigit::new(VatCountry::SE);
        assert_valid_codes(
            &sweden,
            &[
                "0000000018",
                "1366959755",
                "5561888404",
                "1234567897",
                "5560528514",
                "5566801444",
                "5565102471",
                "5565102570",
                "9999999999",
                "136695975501",
            ],
        );
        for code in ["1366959756", "136695975502", "13669597550", "1366959755011"] {
            println!("invalid: {code}");
            assert!(!sweden.is_valid(code));
        }
        assert_eq!(sweden.calculate("136695975").unwrap(), "5");
        for body in ["002794601382", "00301594556", "0038546052", "13669597"] {
            assert_eq!(
                sweden.calculate(body),
                Err(CheckDigitError::InvalidLength(body.len() + 1))
            );
        }
        assert!(!sweden.is_valid("13669597"));
    }
}
