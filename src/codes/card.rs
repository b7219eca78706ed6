use crate::check_digit::{CheckDigit, CheckDigitAlgorithm, LUHN};
use crate::code_validator::{
    CodeValidator, CodeValidatorConfig, CreateValidatorError, LengthBounds,
};
use crate::codes::built_in;
use crate::observability::labels::Labels;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

const GENERIC_PATTERN: &str = r"(\d+)";
const MIN_CARD_LEN: usize = 12;
const MAX_CARD_LEN: usize = 19;

const AMEX_PATTERNS: &[&str] = &[r"(3[47]\d{13})"];
const DINERS_PATTERNS: &[&str] = &[r"(30[0-5]\d{11}|3095\d{10}|36\d{12}|3[8-9]\d{12})"];
const DISCOVER_PATTERNS: &[&str] = &[
    r"(6011\d{12,13})",
    r"(64[4-9]\d{13})",
    r"(65\d{14})",
    r"(62[2-8]\d{13})",
];
#[rustfmt::skip]
const MASTERCARD_PATTERNS: &[&str] = &[
    r"(5[1-5]\d{14})",   // 51 - 55
    r"(2221\d{12})",     // 222100 - 222199
    r"(222[2-9]\d{12})", // 222200 - 222999
    r"(22[3-9]\d{13})",  // 223000 - 229999
    r"(2[3-6]\d{14})",   // 230000 - 269999
    r"(27[01]\d{13})",   // 270000 - 271999
    r"(2720\d{12})",     // 272000 - 272099
];
const MASTERCARD_PRE_OCT2016_PATTERNS: &[&str] = &[r"(5[1-5]\d{14})"];
const VISA_PATTERNS: &[&str] = &[r"(4)(\d{12}|\d{15})"];
const VPAY_PATTERNS: &[&str] = &[r"(4)(\d{12,18})"];

lazy_static! {
    static ref AMEX: CodeValidator = card_validator(CardType::Amex);
    static ref DINERS: CodeValidator = card_validator(CardType::Diners);
    static ref DISCOVER: CodeValidator = card_validator(CardType::Discover);
    static ref MASTERCARD: CodeValidator = card_validator(CardType::Mastercard);
    static ref MASTERCARD_PRE_OCT2016: CodeValidator =
        card_validator(CardType::MastercardPreOct2016);
    static ref VISA: CodeValidator = card_validator(CardType::Visa);
    static ref VPAY: CodeValidator = card_validator(CardType::Vpay);
    static ref GENERIC: CodeValidator = built_in(
        "credit_card",
        &[GENERIC_PATTERN],
        LengthBounds::between(MIN_CARD_LEN, MAX_CARD_LEN),
        Some(CheckDigitAlgorithm::Luhn),
    );
}

fn card_validator(card_type: CardType) -> CodeValidator {
    built_in(
        card_type.name(),
        card_type.patterns(),
        LengthBounds::UNCHECKED,
        Some(CheckDigitAlgorithm::Luhn),
    )
}

/// A card network, identified by the number prefixes and lengths it issues.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CardType {
    Amex,
    Diners,
    Discover,
    /// Both the 51-55 and the 2221-2720 ranges.
    Mastercard,
    /// Only the 51-55 range.
    MastercardPreOct2016,
    Visa,
    /// Visa debit, 13 to 19 digits.
    Vpay,
}

impl CardType {
    /// The networks accepted by [`CreditCardValidator::new`].
    pub const DEFAULT: &'static [CardType] = &[
        CardType::Amex,
        CardType::Visa,
        CardType::Mastercard,
        CardType::Discover,
    ];

    pub fn all() -> &'static [CardType] {
        &[
            CardType::Amex,
            CardType::Diners,
            CardType::Discover,
            CardType::Mastercard,
            CardType::MastercardPreOct2016,
            CardType::Visa,
            CardType::Vpay,
        ]
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }

    pub fn patterns(&self) -> &'static [&'static str] {
        match self {
            CardType::Amex => AMEX_PATTERNS,
            CardType::Diners => DINERS_PATTERNS,
            CardType::Discover => DISCOVER_PATTERNS,
            CardType::Mastercard => MASTERCARD_PATTERNS,
            CardType::MastercardPreOct2016 => MASTERCARD_PRE_OCT2016_PATTERNS,
            CardType::Visa => VISA_PATTERNS,
            CardType::Vpay => VPAY_PATTERNS,
        }
    }

    fn validator(&self) -> &'static CodeValidator {
        match self {
            CardType::Amex => &AMEX,
            CardType::Diners => &DINERS,
            CardType::Discover => &DISCOVER,
            CardType::Mastercard => &MASTERCARD,
            CardType::MastercardPreOct2016 => &MASTERCARD_PRE_OCT2016,
            CardType::Visa => &VISA,
            CardType::Vpay => &VPAY,
        }
    }
}

/// The card lengths a [`CreditCardRange`] accepts.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CardLengths {
    Between { min: usize, max: usize },
    OneOf(Vec<usize>),
}

impl CardLengths {
    pub fn contains(&self, length: usize) -> bool {
        match self {
            CardLengths::Between { min, max } => (*min..=*max).contains(&length),
            CardLengths::OneOf(lengths) => lengths.contains(&length),
        }
    }
}

/// A range of issuer identification numbers.
///
/// `low` and `high` may be shorter than a full issuer number, and need not have the same
/// length: `"644"` to `"65"` covers every number from 644 up to 659 included. Without `high`
/// the card number must start with `low`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CreditCardRange {
    pub low: String,
    #[serde(default)]
    pub high: Option<String>,
    pub lengths: CardLengths,
}

impl CreditCardRange {
    pub fn new(low: &str, high: Option<&str>, min_length: usize, max_length: usize) -> Self {
        Self {
            low: low.to_owned(),
            high: high.map(str::to_owned),
            lengths: CardLengths::Between {
                min: min_length,
                max: max_length,
            },
        }
    }

    pub fn with_lengths(low: &str, high: Option<&str>, lengths: &[usize]) -> Self {
        Self {
            low: low.to_owned(),
            high: high.map(str::to_owned),
            lengths: CardLengths::OneOf(lengths.to_vec()),
        }
    }

    /// Digits past the length of `high` are ignored on the upper side.
    pub fn contains(&self, number: &str) -> bool {
        if !self.lengths.contains(number.len()) {
            return false;
        }
        match &self.high {
            None => number.starts_with(self.low.as_str()),
            Some(high) => {
                self.low.as_str() <= number
                    && number
                        .get(..high.len())
                        .is_some_and(|prefix| high.as_str() >= prefix)
            }
        }
    }
}

enum CardCheck {
    Type(CardType),
    Generic,
    Custom(CodeValidator),
    Ranges(Vec<CreditCardRange>),
}

impl CardCheck {
    fn validate(&self, card: &str) -> Option<String> {
        match self {
            CardCheck::Type(card_type) => card_type.validator().validate(card),
            CardCheck::Generic => GENERIC.validate(card),
            CardCheck::Custom(validator) => validator.validate(card),
            CardCheck::Ranges(ranges) => {
                let card = card.trim();
                let in_range = !card.is_empty()
                    && card.bytes().all(|b| b.is_ascii_digit())
                    && ranges.iter().any(|range| range.contains(card));
                (in_range && LUHN.is_valid(card)).then(|| card.to_owned())
            }
        }
    }
}

/// Validates credit card numbers: a card is valid if any of the configured checks accepts it.
///
/// Card types and issuer ranges also require a valid Luhn check digit. Custom validators
/// bring their own.
pub struct CreditCardValidator {
    checks: Vec<CardCheck>,
}

impl Default for CreditCardValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl CreditCardValidator {
    /// Accepts the [`CardType::DEFAULT`] networks.
    pub fn new() -> Self {
        Self::from_card_types(CardType::DEFAULT)
    }

    pub fn from_card_types(card_types: &[CardType]) -> Self {
        Self {
            checks: card_types.iter().copied().map(CardCheck::Type).collect(),
        }
    }

    pub fn from_validators(validators: Vec<CodeValidator>) -> Self {
        Self {
            checks: validators.into_iter().map(CardCheck::Custom).collect(),
        }
    }

    /// Card numbers in any of `ranges`, with no separators.
    pub fn from_ranges(ranges: Vec<CreditCardRange>) -> Self {
        Self {
            checks: vec![CardCheck::Ranges(ranges)],
        }
    }

    /// Also accepts card numbers in any of `ranges`.
    pub fn with_ranges(mut self, ranges: Vec<CreditCardRange>) -> Self {
        self.checks.push(CardCheck::Ranges(ranges));
        self
    }

    /// Any 12 to 19 digit number with a valid Luhn check digit.
    pub fn generic() -> Self {
        Self {
            checks: vec![CardCheck::Generic],
        }
    }

    /// Any number of `min_length` to `max_length` digits with a valid Luhn check digit.
    pub fn generic_with_lengths(
        min_length: usize,
        max_length: usize,
    ) -> Result<Self, CreateValidatorError> {
        let validator = CodeValidatorConfig::new()
            .pattern(GENERIC_PATTERN)
            .min_length(min_length)
            .max_length(max_length)
            .check_digit(CheckDigitAlgorithm::Luhn)
            .labels(Labels::new(&[("validator", "credit_card")]))
            .build()?;
        Ok(Self::from_validators(vec![validator]))
    }

    pub fn is_valid(&self, card: &str) -> bool {
        self.validate(card).is_some()
    }

    /// The card number as accepted by the first check that accepts it.
    pub fn validate(&self, card: &str) -> Option<String> {
        if card.trim().is_empty() {
            return None;
        }
        self.checks.iter().find_map(|check| check.validate(card))
    }
}
