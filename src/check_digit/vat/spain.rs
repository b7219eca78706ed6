use crate::check_digit::{numeric_value, require_body, CheckDigit, CheckDigitError, LUHN};

use super::digits_after;

const MIN_CODE_LEN: usize = 5;
const DNI_LETTERS: &[u8] = b"TRWAGMYFPDXBNJZSQVHLCKE";
const ENTITY_LETTERS: &[u8] = b"JABCDEFGHI";

/// Spanish NIF. The leading character picks the scheme: a digit for a national (DNI), one of
/// `XYZKLM` for a foreigner or person without DNI, one of `NPQRSW` for an entity with a
/// letter check, any other letter for an entity with a digit check.
pub(super) struct SpainCheckDigit;

fn dni_letter(digits: &[u32]) -> Result<String, CheckDigitError> {
    let value = numeric_value(digits)?;
    if value == 0 {
        return Err(CheckDigitError::ZeroSumCode);
    }
    Ok(char::from(DNI_LETTERS[(value % 23) as usize]).to_string())
}

impl CheckDigit for SpainCheckDigit {
    fn calculate(&self, body: &str) -> Result<String, CheckDigitError> {
        require_body(body)?;
        let code_length = body.chars().count() + 1;
        if code_length < MIN_CODE_LEN {
            return Err(CheckDigitError::InvalidLength(code_length));
        }
        let first = body.chars().next().unwrap_or_default();
        match first {
            '0'..='9' => dni_letter(&digits_after(body, 0)?),
            'X' | 'Y' | 'Z' | 'K' | 'L' | 'M' => dni_letter(&digits_after(body, 1)?),
            'N' | 'P' | 'Q' | 'R' | 'S' | 'W' => {
                let check = LUHN.calculate(&body[1..])?;
                let index = check
                    .parse::<usize>()
                    .map_err(|_| CheckDigitError::InvalidCode("expected a numeric check"))?;
                Ok(char::from(ENTITY_LETTERS[index]).to_string())
            }
            'A'..='Z' => LUHN.calculate(&body[1..]),
            character => Err(CheckDigitError::InvalidCharacter {
                position: 1,
                character,
            }),
        }
    }
}
