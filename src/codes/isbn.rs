use crate::check_digit::{
    split_check_digit, CheckDigit, CheckDigitAlgorithm, CheckDigitError, EAN13,
};
use crate::code_validator::{CodeValidator, LengthBounds};
use crate::codes::built_in;
use lazy_static::lazy_static;

/// Ten characters, either run together or as four `-` or space separated groups: registration
/// group, registrant, publication and check digit.
pub const ISBN10_PATTERN: &str = r"(\d{9}[0-9X])|(?:(\d{1,5})(?:-|\s)(\d{1,7})(?:-|\s)(\d{1,6})(?:-|\s)([0-9X]))";

/// A `978` or `979` prefix followed by ten digits, run together or as four separated groups.
pub const ISBN13_PATTERN: &str = r"(978|979)(?:(\d{10})|(?:(?:-|\s)(\d{1,5})(?:-|\s)(\d{1,7})(?:-|\s)(\d{1,6})(?:-|\s)([0-9])))";

const ISBN10_LEN: usize = 10;
const ISBN13_PREFIX: &str = "978";

lazy_static! {
    static ref ISBN10_VALIDATOR: CodeValidator = built_in(
        "isbn10",
        &[ISBN10_PATTERN],
        LengthBounds::exact(ISBN10_LEN),
        Some(CheckDigitAlgorithm::Isbn10),
    );
    static ref ISBN13_VALIDATOR: CodeValidator = built_in(
        "isbn13",
        &[ISBN13_PATTERN],
        LengthBounds::exact(13),
        Some(CheckDigitAlgorithm::Ean13),
    );
}

/// Validates ISBN-10 and ISBN-13 codes. Valid codes are returned without separators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IsbnValidator {
    convert: bool,
}

impl Default for IsbnValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl IsbnValidator {
    /// [`IsbnValidator::validate`] converts ISBN-10 codes to ISBN-13.
    pub fn new() -> Self {
        Self { convert: true }
    }

    /// Whether [`IsbnValidator::validate`] converts ISBN-10 codes to ISBN-13.
    pub fn with_conversion(convert: bool) -> Self {
        Self { convert }
    }

    pub fn converts(&self) -> bool {
        self.convert
    }

    pub fn is_valid(&self, code: &str) -> bool {
        self.is_valid_isbn13(code) || self.is_valid_isbn10(code)
    }

    pub fn is_valid_isbn10(&self, code: &str) -> bool {
        ISBN10_VALIDATOR.is_valid(code)
    }

    pub fn is_valid_isbn13(&self, code: &str) -> bool {
        ISBN13_VALIDATOR.is_valid(code)
    }

    /// Tries ISBN-13 first, then ISBN-10.
    pub fn validate(&self, code: &str) -> Option<String> {
        if let Some(isbn13) = self.validate_isbn13(code) {
            return Some(isbn13);
        }
        let isbn10 = self.validate_isbn10(code)?;
        if self.convert {
            return convert_to_isbn13(&isbn10).ok();
        }
        Some(isbn10)
    }

    pub fn validate_isbn10(&self, code: &str) -> Option<String> {
        ISBN10_VALIDATOR.validate(code)
    }

    pub fn validate_isbn13(&self, code: &str) -> Option<String> {
        ISBN13_VALIDATOR.validate(code)
    }

    /// Prefixes the first nine characters of an ISBN-10 with `978` and recomputes the check
    /// digit. The ISBN-10 check digit itself is not verified.
    pub fn convert_to_isbn13(&self, isbn10: &str) -> Result<String, CheckDigitError> {
        convert_to_isbn13(isbn10)
    }
}

fn convert_to_isbn13(isbn10: &str) -> Result<String, CheckDigitError> {
    let isbn10 = isbn10.trim();
    let length = isbn10.chars().count();
    if length != ISBN10_LEN {
        return Err(CheckDigitError::InvalidLength(length));
    }
    let (body, _) =
        split_check_digit(isbn10, 1).ok_or(CheckDigitError::InvalidLength(length))?;
    let body = format!("{ISBN13_PREFIX}{body}");
    let check = EAN13.calculate(&body)?;
    Ok(body + &check)
}

#[cfg(test)]
mod test {
    use crate::check_digit::CheckDigitError;
    use crate::codes::*;
    use crate::shape::ShapeValidator;

    const VALID_ISBN10: &[&str] = &[
        "1930110995",
        "1-930110-99-5",
        "1 930110 99 5",
        "020163385X",
        "0-201-63385-X",
        "0 201 63385 X",
    ];

    const VALID_ISBN13: &[&str] = &[
        "9781930110991",
        "978-1-930110-99-1",
        "978 1 930110 99 1",
        "9780201633856",
        "978-0-201-63385-6",
        "978 0 201 63385 6",
    ];

    #[test]
    fn isbn10_shape() {
        let shape = ShapeValidator::new(&[ISBN10_PATTERN]).unwrap();
        for code in [
            "1234567890",
            "123456789X",
            "12345-1234567-123456-X",
            "12345 1234567 123456 X",
            "1-2-3-4",
            "1 2 3 4",
        ] {
            println!("matches: {code}");
            assert!(shape.is_valid(code));
        }
        for code in [
            "1",
            "123456789",
            "12345678901",
            "12345678X0",
            "123456-1234567-123456-X",
            "12345-12345678-123456-X",
            "12345-1234567-1234567-X",
            "12345-1234567-123456-X2",
            "--1 930110 99 5",
            "1 930110 99 5--",
            "1 930110-99 5-",
            "1.2.3.4",
            "1=2=3=4",
            "1_2_3_4",
            "123456789Y",
            "dsasdsadsa",
            "I love sparrows!",
            "068-556-98-45",
        ] {
            println!("does not match: {code}");
            assert!(!shape.is_valid(code));
            assert!(!IsbnValidator::new().is_valid_isbn10(code));
            assert_eq!(IsbnValidator::new().validate_isbn10(code), None);
        }
    }

    #[test]
    fn isbn13_shape() {
        let shape = ShapeValidator::new(&[ISBN13_PATTERN]).unwrap();
        for code in [
            "9781234567890",
            "9791234567890",
            "978-12345-1234567-123456-1",
            "979-12345-1234567-123456-1",
            "978 12345 1234567 123456 1",
            "979 12345 1234567 123456 1",
            "978-1-2-3-4",
            "979-1-2-3-4",
            "978 1 2 3 4",
            "979 1 2 3 4",
        ] {
            println!("matches: {code}");
            assert!(shape.is_valid(code));
        }
        for code in [
            "1",
            "978123456789",
            "97812345678901",
            "978-123456-1234567-123456-1",
            "978-12345-12345678-123456-1",
            "978-12345-1234567-1234567-1",
            "978-12345-1234567-123456-12",
            "--978 1 930110 99 1",
            "978 1 930110 99 1--",
            "978 1 930110-99 1-",
            "123-4-567890-12-8",
            "978.1.2.3.4",
            "978=1=2=3=4",
            "978_1_2_3_4",
            "978123456789X",
            "978-0-201-63385-X",
            "dsasdsadsadsa",
            "I love sparrows!",
            "979-1-234-567-89-6",
        ] {
            println!("does not match: {code}");
            assert!(!shape.is_valid(code));
            assert!(!IsbnValidator::new().is_valid_isbn13(code));
            assert_eq!(IsbnValidator::new().validate_isbn13(code), None);
        }
    }

    #[test]
    fn valid_codes() {
        let validator = IsbnValidator::new();
        for code in VALID_ISBN10 {
            assert!(validator.is_valid_isbn10(code));
            assert!(!validator.is_valid_isbn13(code));
            assert!(validator.is_valid(code));
        }
        for code in VALID_ISBN13 {
            assert!(validator.is_valid_isbn13(code));
            assert!(!validator.is_valid_isbn10(code));
            assert!(validator.is_valid(code));
        }
    }

    #[test]
    fn validate_strips_separators() {
        let validator = IsbnValidator::new();
        assert_eq!(
            validator.validate_isbn10("1-930110-99-5"),
            Some("1930110995".to_string())
        );
        assert_eq!(
            validator.validate_isbn10("0 201 63385 X"),
            Some("020163385X".to_string())
        );
        assert_eq!(
            validator.validate_isbn13("978-1-930110-99-1"),
            Some("9781930110991".to_string())
        );
        assert_eq!(
            validator.validate("978 0 201 63385 6"),
            Some("9780201633856".to_string())
        );
    }

    #[test]
    fn validate_converts_isbn10_when_asked() {
        let converting = IsbnValidator::new();
        assert!(converting.converts());
        assert_eq!(
            converting.validate("1-930110-99-5"),
            Some("9781930110991".to_string())
        );
        assert_eq!(
            converting.validate("0-201-63385-X"),
            Some("9780201633856".to_string())
        );

        let keeping = IsbnValidator::with_conversion(false);
        assert_eq!(
            keeping.validate("1-930110-99-5"),
            Some("1930110995".to_string())
        );
        assert_eq!(
            keeping.validate("9781930110991"),
            Some("9781930110991".to_string())
        );
    }

    #[test]
    fn invalid_check_digits() {
        let validator = IsbnValidator::new();
        for code in ["1930110990", "1-930110-99-0", "9781930110990", "978-1-930110-99-0"] {
            println!("invalid: {code}");
            assert!(!validator.is_valid(code));
            assert_eq!(validator.validate(code), None);
        }
        for code in ["", "   "] {
            assert!(!validator.is_valid(code));
        }
    }

    #[test]
    fn convert_isbn10() {
        let validator = IsbnValidator::new();
        assert_eq!(
            validator.convert_to_isbn13("1930110995").unwrap(),
            "9781930110991"
        );
        assert_eq!(
            validator.convert_to_isbn13(" 020163385X ").unwrap(),
            "9780201633856"
        );
        // the ISBN-10 check digit is recomputed, not verified
        assert_eq!(
            validator.convert_to_isbn13("1930110990").unwrap(),
            "9781930110991"
        );
        assert_eq!(
            validator.convert_to_isbn13("123456789"),
            Err(CheckDigitError::InvalidLength(9))
        );
        assert_eq!(
            validator.convert_to_isbn13("12345678901"),
            Err(CheckDigitError::InvalidLength(11))
        );
    }
}
