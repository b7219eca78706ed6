use crate::check_digit::{
    render_two_digits, require_body, split_check_digit, to_digits, CheckDigit, CheckDigitError,
};
use std::borrow::Cow;

use super::weighted_sum;

const BODY_LEN: usize = 7;
const CODE_LEN: usize = 9;
const BRANCH_CODE_LEN: usize = 12;
const WEIGHTS: &[u32] = &[8, 7, 6, 5, 4, 3, 2];

/// UK VAT registration number, still used with the `XI` prefix in Northern Ireland. Seven
/// digits are followed by two check digits and optionally a three digit branch number.
///
/// Numbers are issued in two ranges: one where the weighted sum plus the check is divisible
/// by 97, and a newer one where it leaves 42 instead.
pub(super) struct UnitedKingdomCheckDigit;

impl CheckDigit for UnitedKingdomCheckDigit {
    fn calculate(&self, body: &str) -> Result<String, CheckDigitError> {
        require_body(body)?;
        let digits = to_digits(body)?;
        if digits.len() != BODY_LEN {
            return Err(CheckDigitError::InvalidLength(digits.len() + 2));
        }
        let total = weighted_sum(&digits, WEIGHTS);
        if total == 0 {
            return Err(CheckDigitError::ZeroSumCode);
        }
        let check = match total % 97 {
            0 => 0,
            remainder if remainder >= 42 => 139 - remainder,
            remainder => 97 - remainder,
        };
        render_two_digits(check)
    }

    fn split_code<'c>(&self, code: &'c str) -> Option<(Cow<'c, str>, &'c str)> {
        let number = match code.len() {
            BRANCH_CODE_LEN => code.get(..CODE_LEN)?,
            _ => code,
        };
        split_check_digit(number, 2).map(|(body, check)| (Cow::Borrowed(body), check))
    }
}

#[cfg(test)]
mod test {
    use crate::check_digit::*;

    #[test]
    fn validate_uk_vat_numbers() {
        let united_kingdom = VatCheckDigit::new(VatCountry::XI);
        assert_valid_codes(
            &united_kingdom,
            &[
                "110305878",
                "366303068",
                "174918964",
                "434031494",
                "613451470",
                "980780684",
                "888801276",
                "888850259",
                "888851256",
                "426985160",
                "439432385",
                "439268659",
                "428671865",
                "432880687",
                "430510547",
                "427092792",
                "427264494",
                "427661973",
                "428756265",
                "438017796",
                "426751194",
                "428819561",
                "440211846",
                "436338390",
                "433477292",
            ],
        );
        assert!(united_kingdom.is_valid("110305878001"));
    }

    #[test]
    fn rejects_invalid_uk_numbers() {
        let united_kingdom = VatCheckDigit::new(VatCountry::XI);
        for code in ["110305879", "11030587", "1103058780", "000000000"] {
            println!("invalid: {code}");
            assert!(!united_kingdom.is_valid(code));
        }
    }
}
