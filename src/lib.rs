// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod check_digit;
mod code_validator;
mod codes;
mod observability;
mod registry;
mod shape;
mod stats;

// This is the public API of the check digit library
pub use check_digit::{
    CharValues, CheckChar, CheckDigit, CheckDigitAlgorithm, CheckDigitError, CheckValue,
    CzechBankAccountCheckDigit, GermanTaxIdCheckDigit, IbanCheckDigit, IsbnCheckDigit,
    IsinCheckDigit, Modulus11TenCheckDigit, Modulus97CheckDigit, ModulusCheckDigit, Products,
    VatCheckDigit, VatCountry, VatinCheckDigit, VerhoeffCheckDigit, Weights, ABA, CAS_NUMBER,
    CUSIP, EAN13, EC_INDEX_NUMBER, EC_NUMBER, ISBN10, ISSN, LUHN, SEDOL,
};
pub use code_validator::{
    CodeValidator, CodeValidatorConfig, CreateValidatorError, LengthBounds, ValidationStage,
};
pub use codes::{
    CardLengths, CardType, CasNumberValidator, CreditCardRange, CreditCardValidator,
    EcIndexNumberValidator, EcNumberValidator, IbanValidator, IsbnValidator, IsinValidator,
    IssnValidator, LeiValidator, LeitwegValidator, SireneValidator, VatinValidator,
    ISBN10_PATTERN, ISBN13_PATTERN, ISIN_PATTERN, ISSN_PATTERN, LEITWEG_PATTERN, LEI_PATTERNS,
};
pub use observability::labels::Labels;
pub use registry::{
    FrozenRegistry, MutableRegistry, Registry, RegistryError, RuleDefinition, RuleFamily,
    ValidatorRule, DEFAULT_IBAN_REGISTRY, DEFAULT_VATIN_REGISTRY, KEY_LEN,
};
pub use shape::{validate_pattern, ShapeError, ShapeValidator};
