use crate::check_digit::{is_blank, require_body, to_digits, CheckDigit, CheckDigitError};

pub struct VerhoeffCheckDigit;

const MULT_TABLE: [[usize; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

const PERM_TABLE: [[usize; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

const INV_TABLE: [usize; 10] = [0, 4, 3, 2, 1, 5, 6, 7, 8, 9];

impl VerhoeffCheckDigit {
    /// `first_position` is the permutation index of the rightmost digit: 0 when the check
    /// digit is included, 1 when it is still to be computed.
    fn checksum(digits: &str, first_position: usize) -> Result<usize, CheckDigitError> {
        let digits = to_digits(digits)?;
        let mut c = 0;
        for (i, digit) in digits.iter().rev().enumerate() {
            c = MULT_TABLE[c][PERM_TABLE[(i + first_position) % 8][*digit as usize]];
        }
        Ok(c)
    }
}

impl CheckDigit for VerhoeffCheckDigit {
    fn calculate(&self, body: &str) -> Result<String, CheckDigitError> {
        require_body(body)?;
        let c = Self::checksum(body, 1)?;
        Ok(INV_TABLE[c].to_string())
    }

    fn is_valid(&self, code: &str) -> bool {
        if is_blank(code) {
            return false;
        }
        matches!(Self::checksum(code, 0), Ok(0))
    }
}

#[cfg(test)]
mod test {
    use crate::check_digit::*;

    #[test]
    fn validate_verhoeff_check_digit() {
        let valid_numbers = vec![
            "15",
            "1428570",
            "12345678902",
            "199009301238",
            "199310281454",
            "200112030877",
            "197912200328",
            "196605150762",
        ];
        for number in valid_numbers {
            println!("valid verhoeff number: {number}");
            assert!(VerhoeffCheckDigit.is_valid(number));

            let (body, check) = number.split_at(number.len() - 1);
            assert_eq!(VerhoeffCheckDigit.calculate(body).unwrap(), check);

            let verhoeff_digit = check.parse::<u32>().unwrap();
            let invalid_number = format!("{body}{}", (verhoeff_digit + 1) % 10);
            println!("invalid verhoeff number: {invalid_number}");
            assert!(!VerhoeffCheckDigit.is_valid(&invalid_number));
        }
    }

    #[test]
    fn detects_adjacent_transpositions() {
        assert!(VerhoeffCheckDigit.is_valid("1428570"));
        assert!(!VerhoeffCheckDigit.is_valid("4128570"));
        assert!(!VerhoeffCheckDigit.is_valid("1248570"));
    }

    #[test]
    fn all_zero_body_has_a_check_digit() {
        assert_eq!(VerhoeffCheckDigit.calculate("0000").unwrap(), "7");
        assert!(VerhoeffCheckDigit.is_valid("00007"));
        assert!(!VerhoeffCheckDigit.is_valid("00000"));
        assert_eq!(VerhoeffCheckDigit.calculate("0000000").unwrap(), "1");
    }

    #[test]
    fn rejects_non_digits() {
        assert!(!VerhoeffCheckDigit.is_valid("1428A70"));
        assert_eq!(
            VerhoeffCheckDigit.calculate("14-857"),
            Err(CheckDigitError::InvalidCharacter {
                position: 3,
                character: '-'
            })
        );
    }
}
