use crate::check_digit::{render_digit, require_body, to_digits, CheckDigit, CheckDigitError};

/// ISO 7064 hybrid MOD 11,10, as used by German and Croatian VAT numbers.
pub struct Modulus11TenCheckDigit;

/// German tax identification number (Steuer-ID): MOD 11,10 plus a rule on how the digits of
/// the body are distributed.
pub struct GermanTaxIdCheckDigit;

fn modulus_11_10(digits: &[u32]) -> u32 {
    let mut product = 10;
    for digit in digits {
        let sum = match (digit + product) % 10 {
            0 => 10,
            sum => sum,
        };
        product = 2 * sum % 11;
    }
    match 11 - product {
        10 => 0,
        check => check,
    }
}

fn nonzero_digits(body: &str) -> Result<Vec<u32>, CheckDigitError> {
    require_body(body)?;
    let digits = to_digits(body)?;
    if digits.iter().all(|d| *d == 0) {
        return Err(CheckDigitError::ZeroSumCode);
    }
    Ok(digits)
}

impl CheckDigit for Modulus11TenCheckDigit {
    fn calculate(&self, body: &str) -> Result<String, CheckDigitError> {
        let digits = nonzero_digits(body)?;
        render_digit(modulus_11_10(&digits))
    }
}

/// Exactly one digit appears twice or three times, and a tripled digit never appears three
/// times in a row.
fn check_digit_distribution(digits: &[u32]) -> Result<(), CheckDigitError> {
    let mut counts = [0usize; 10];
    for digit in digits {
        counts[*digit as usize] += 1;
    }
    let doubled = counts.iter().filter(|count| **count == 2).count();
    let tripled: Vec<u32> = (0..10u32).filter(|d| counts[*d as usize] == 3).collect();

    if doubled == 0 && tripled.is_empty() {
        return Err(CheckDigitError::InvalidCode("no digit is repeated"));
    }
    if doubled > 1 {
        return Err(CheckDigitError::InvalidCode("more than one digit appears twice"));
    }
    if tripled.len() > 1 {
        return Err(CheckDigitError::InvalidCode("more than one digit appears three times"));
    }
    if let Some(triple) = tripled.first() {
        if let Some(first) = digits.iter().position(|d| d == triple) {
            if digits[first..].iter().take(3).all(|d| d == triple) {
                return Err(CheckDigitError::InvalidCode("a digit appears three times in a row"));
            }
        }
    }
    Ok(())
}

impl CheckDigit for GermanTaxIdCheckDigit {
    fn calculate(&self, body: &str) -> Result<String, CheckDigitError> {
        let digits = nonzero_digits(body)?;
        check_digit_distribution(&digits)?;
        render_digit(modulus_11_10(&digits))
    }
}
