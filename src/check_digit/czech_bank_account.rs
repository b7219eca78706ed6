use crate::check_digit::modulus::{ModulusCheckDigit, Weights};
use crate::check_digit::{is_blank, require_body, CheckDigit, CheckDigitError};

const WEIGHTS: &[u32] = &[6, 3, 7, 9, 10, 5, 8, 4, 2, 1];
const PREFIX_LEN: usize = 6;
const ACCOUNT_LEN: usize = 10;

const ACCOUNT: ModulusCheckDigit<'static> = ModulusCheckDigit::new(11, Weights::FixedFromLeft(WEIGHTS));

/// Czech National Bank account number check, run over the last 16 digits of a Czech IBAN:
/// a 6-digit prefix followed by a 10-digit account number, each checked mod 11.
pub struct CzechBankAccountCheckDigit;

impl CzechBankAccountCheckDigit {
    fn prefix_is_valid(prefix: &str) -> bool {
        prefix == "000000" || matches!(ACCOUNT.checksum(prefix), Ok(0))
    }
}

impl CheckDigit for CzechBankAccountCheckDigit {
    fn calculate(&self, body: &str) -> Result<String, CheckDigitError> {
        require_body(body)?;
        let length = body.chars().count();
        if length < PREFIX_LEN + ACCOUNT_LEN - 1 || !body.is_ascii() {
            return Err(CheckDigitError::InvalidLength(length));
        }
        let tail = &body[body.len() - (PREFIX_LEN + ACCOUNT_LEN - 1)..];
        let (prefix, account) = tail.split_at(PREFIX_LEN);
        if !Self::prefix_is_valid(prefix) {
            return Err(CheckDigitError::InvalidCode("account prefix fails its check"));
        }
        ACCOUNT.calculate(account)
    }

    fn is_valid(&self, code: &str) -> bool {
        if is_blank(code) || code.len() < PREFIX_LEN + ACCOUNT_LEN || !code.is_ascii() {
            return false;
        }
        let tail = &code[code.len() - (PREFIX_LEN + ACCOUNT_LEN)..];
        let (prefix, account) = tail.split_at(PREFIX_LEN);
        Self::prefix_is_valid(prefix) && matches!(ACCOUNT.checksum(account), Ok(0))
    }
}
