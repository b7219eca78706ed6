//! Ready-made validators for well-known code families, built from the generic pieces in
//! [`crate::code_validator`], [`crate::check_digit`] and [`crate::registry`].

mod card;
mod chemical;
mod iban;
mod isbn;
mod isin;
mod issn;
mod lei;
mod leitweg;
mod sirene;
mod vatin;

pub use crate::codes::card::{CardLengths, CardType, CreditCardRange, CreditCardValidator};
pub use crate::codes::chemical::{CasNumberValidator, EcIndexNumberValidator, EcNumberValidator};
pub use crate::codes::iban::IbanValidator;
pub use crate::codes::isbn::{IsbnValidator, ISBN10_PATTERN, ISBN13_PATTERN};
pub use crate::codes::isin::{IsinValidator, ISIN_PATTERN};
pub use crate::codes::issn::{IssnValidator, ISSN_PATTERN};
pub use crate::codes::lei::{LeiValidator, LEI_PATTERNS};
pub use crate::codes::leitweg::{LeitwegValidator, LEITWEG_PATTERN};
pub use crate::codes::sirene::SireneValidator;
pub use crate::codes::vatin::VatinValidator;

use crate::check_digit::CheckDigitAlgorithm;
use crate::code_validator::{CodeValidator, CodeValidatorConfig, LengthBounds};
use crate::observability::labels::Labels;

/// Builds a validator whose patterns are compiled into the crate. Its metrics are labelled
/// with `validator:<name>`.
fn built_in(
    name: &'static str,
    patterns: &[&str],
    length: LengthBounds,
    check_digit: Option<CheckDigitAlgorithm>,
) -> CodeValidator {
    let mut config = CodeValidatorConfig::new()
        .patterns(patterns.iter().map(|pattern| pattern.to_string()).collect())
        .labels(Labels::new(&[("validator", name)]));
    config.min_length = length.min;
    config.max_length = length.max;
    config.check_digit = check_digit;
    config
        .build()
        .expect("built-in code validators are valid")
}
