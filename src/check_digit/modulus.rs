use crate::check_digit::{render_digit, require_body, sum_all_digits, CheckDigit, CheckDigitError};

/// How a character's position in the code selects its weight.
///
/// Positions are 1-based and counted over the complete code, so the check digit itself sits at
/// right position 1 and the last body character at right position 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Weights<'a> {
    /// Cyclic table indexed by the position from the left.
    FromLeft(&'a [u32]),
    /// Cyclic table indexed by the position from the right.
    FromRight(&'a [u32]),
    /// Table indexed by the position from the left. Positions past its end weigh nothing.
    FixedFromLeft(&'a [u32]),
    /// Table indexed by the position from the right. Positions past its end weigh nothing.
    FixedFromRight(&'a [u32]),
    /// The weight is the position from the right.
    RightPosition,
}

impl Weights<'_> {
    fn weight(&self, left_pos: usize, right_pos: usize) -> u32 {
        match self {
            Weights::FromLeft(weights) => cyclic(weights, left_pos),
            Weights::FromRight(weights) => cyclic(weights, right_pos),
            Weights::FixedFromLeft(weights) => weights.get(left_pos - 1).copied().unwrap_or(0),
            Weights::FixedFromRight(weights) => weights.get(right_pos - 1).copied().unwrap_or(0),
            Weights::RightPosition => right_pos as u32,
        }
    }
}

fn cyclic(weights: &[u32], position: usize) -> u32 {
    if weights.is_empty() {
        return 0;
    }
    weights[(position - 1) % weights.len()]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharValues {
    Digits,
    /// `0-9` then `A=10` up to `Z=35`, either case.
    Alphanumeric,
}

impl CharValues {
    fn value(&self, character: char, position: usize) -> Result<u32, CheckDigitError> {
        let radix = match self {
            CharValues::Digits => 10,
            CharValues::Alphanumeric => 36,
        };
        character
            .to_digit(radix)
            .ok_or(CheckDigitError::InvalidCharacter {
                position,
                character,
            })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Products {
    Weighted,
    /// The decimal digits of each weighted value are summed (Luhn doubling).
    SumOfDigits,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckValue {
    /// `(modulus - remainder) % modulus`
    Complement,
    Remainder,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckChar {
    /// A single decimal digit; any larger value is unrepresentable.
    Digit,
    /// A decimal digit, or `X` for 10.
    DigitOrX,
    /// The last decimal digit of the value.
    LastDigit,
    /// As `LastDigit`, but a value of zero has no check digit.
    NonZeroLastDigit,
}

impl CheckChar {
    fn render(&self, value: u32) -> Result<String, CheckDigitError> {
        match self {
            CheckChar::Digit => render_digit(value),
            CheckChar::DigitOrX if value == 10 => Ok("X".to_string()),
            CheckChar::DigitOrX => render_digit(value),
            CheckChar::LastDigit => render_digit(value % 10),
            CheckChar::NonZeroLastDigit if value == 0 => {
                Err(CheckDigitError::InvalidCheckDigitValue(value))
            }
            CheckChar::NonZeroLastDigit => render_digit(value % 10),
        }
    }
}

/// Positional weighted-modulus check digit, parameterized by configuration only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModulusCheckDigit<'a> {
    modulus: u32,
    weights: Weights<'a>,
    values: CharValues,
    products: Products,
    check: CheckValue,
    render: CheckChar,
    min_length: usize,
    max_length: usize,
}

impl<'a> ModulusCheckDigit<'a> {
    pub const fn new(modulus: u32, weights: Weights<'a>) -> Self {
        Self {
            modulus,
            weights,
            values: CharValues::Digits,
            products: Products::Weighted,
            check: CheckValue::Complement,
            render: CheckChar::Digit,
            min_length: 1,
            max_length: usize::MAX,
        }
    }

    /// Modulus 10 over alphanumeric values with a cyclic weight table, as used by several
    /// securities and national identifiers.
    pub const fn modulus_ten(weights: &'a [u32], use_right_pos: bool, sum_digits: bool) -> Self {
        let weights = if use_right_pos {
            Weights::FromRight(weights)
        } else {
            Weights::FromLeft(weights)
        };
        let engine = Self::new(10, weights).alphanumeric();
        if sum_digits {
            engine.sum_of_digits()
        } else {
            engine
        }
    }

    pub const fn alphanumeric(self) -> Self {
        Self {
            values: CharValues::Alphanumeric,
            ..self
        }
    }

    pub const fn sum_of_digits(self) -> Self {
        Self {
            products: Products::SumOfDigits,
            ..self
        }
    }

    pub const fn remainder(self) -> Self {
        Self {
            check: CheckValue::Remainder,
            ..self
        }
    }

    pub const fn render(self, render: CheckChar) -> Self {
        Self { render, ..self }
    }

    /// Bounds on the length of the complete code, check digit included.
    pub const fn code_length(self, min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
            ..self
        }
    }

    pub fn modulus(&self) -> u32 {
        self.modulus
    }

    /// Weighted sum modulo the modulus over a code that already carries its check digit.
    pub fn checksum(&self, code: &str) -> Result<u32, CheckDigitError> {
        require_body(code)?;
        self.weighted_remainder(code, code.chars().count())
    }

    fn weighted_remainder(&self, chars: &str, code_length: usize) -> Result<u32, CheckDigitError> {
        let mut total: u64 = 0;
        for (i, character) in chars.chars().enumerate() {
            let left_pos = i + 1;
            let right_pos = code_length - i;
            let value = self.values.value(character, left_pos)?;
            let weighted = value.saturating_mul(self.weights.weight(left_pos, right_pos));
            total += match self.products {
                Products::Weighted => weighted,
                Products::SumOfDigits => sum_all_digits(weighted),
            } as u64;
        }
        if total == 0 {
            return Err(CheckDigitError::ZeroSumCode);
        }
        match total.checked_rem(self.modulus as u64) {
            Some(remainder) => Ok(remainder as u32),
            None => Err(CheckDigitError::InvalidCode("modulus must not be zero")),
        }
    }
}

impl CheckDigit for ModulusCheckDigit<'_> {
    fn calculate(&self, body: &str) -> Result<String, CheckDigitError> {
        require_body(body)?;
        let code_length = body.chars().count() + 1;
        if code_length < self.min_length || code_length > self.max_length {
            return Err(CheckDigitError::InvalidLength(code_length));
        }
        let remainder = self.weighted_remainder(body, code_length)?;
        let value = match self.check {
            CheckValue::Complement => (self.modulus - remainder) % self.modulus,
            CheckValue::Remainder => remainder,
        };
        self.render.render(value)
    }
}

pub const LUHN: ModulusCheckDigit<'static> =
    ModulusCheckDigit::new(10, Weights::FromRight(&[1, 2])).sum_of_digits();

/// EAN-13, UPC-A and ISBN-13.
pub const EAN13: ModulusCheckDigit<'static> = ModulusCheckDigit::new(10, Weights::FromRight(&[1, 3]));

pub const ISBN10: ModulusCheckDigit<'static> =
    ModulusCheckDigit::new(11, Weights::RightPosition).render(CheckChar::DigitOrX);

/// American Bankers Association routing transit number.
pub const ABA: ModulusCheckDigit<'static> = ModulusCheckDigit::new(10, Weights::FromRight(&[1, 7, 3]));

/// The check character must be a digit; `*`, `@` and `#` are not supported.
pub const CUSIP: ModulusCheckDigit<'static> = ModulusCheckDigit::modulus_ten(&[1, 2], true, true);

pub const SEDOL: ModulusCheckDigit<'static> =
    ModulusCheckDigit::new(10, Weights::FixedFromLeft(&[1, 3, 1, 7, 3, 9, 1]))
        .alphanumeric()
        .code_length(1, 7);

pub const ISSN: ModulusCheckDigit<'static> =
    ModulusCheckDigit::new(11, Weights::FixedFromLeft(&[8, 7, 6, 5, 4, 3, 2, 1]))
        .render(CheckChar::DigitOrX)
        .code_length(8, 8);

/// CAS Registry Number, without its dashes.
pub const CAS_NUMBER: ModulusCheckDigit<'static> =
    ModulusCheckDigit::new(10, Weights::FromRight(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]))
        .remainder()
        .code_length(5, 10);

/// European Community number, without its dashes.
pub const EC_NUMBER: ModulusCheckDigit<'static> =
    ModulusCheckDigit::new(11, Weights::FixedFromLeft(&[1, 2, 3, 4, 5, 6]))
        .remainder()
        .code_length(7, 7);

/// Index number of Annex VI of the CLP regulation, without its dashes.
pub const EC_INDEX_NUMBER: ModulusCheckDigit<'static> =
    ModulusCheckDigit::new(11, Weights::FixedFromLeft(&[1, 2, 3, 4, 5, 6, 7, 8]))
        .remainder()
        .render(CheckChar::DigitOrX)
        .code_length(9, 9);
