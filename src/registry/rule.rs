use crate::check_digit::{CheckDigit, CheckDigitAlgorithm};
use crate::code_validator::LengthBounds;
use crate::registry::RegistryError;
use crate::shape::ShapeValidator;
use regex_syntax::hir::literal::{ExtractKind, Extractor};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use strum::IntoStaticStr;

pub const KEY_LEN: usize = 2;

/// The kind of code a registry holds. It fixes how a rule's declared length is read and what
/// part of the code its check digit covers.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RuleFamily {
    /// The declared length is exact and the check digit covers the whole code.
    Iban,
    /// The declared length is a maximum and the check digit skips the country key.
    Vatin,
}

impl RuleFamily {
    pub fn name(&self) -> &'static str {
        self.into()
    }

    fn allowed_lengths(&self) -> RangeInclusive<usize> {
        match self {
            RuleFamily::Iban => 8..=34,
            // China has 18, but no such rule is defined
            RuleFamily::Vatin => 10..=16,
        }
    }

    fn length_bounds(&self, length: usize) -> LengthBounds {
        match self {
            RuleFamily::Iban => LengthBounds::exact(length),
            RuleFamily::Vatin => LengthBounds::at_most(length),
        }
    }

    fn check_digit_input<'c>(&self, code: &'c str) -> Option<&'c str> {
        match self {
            RuleFamily::Iban => Some(code),
            RuleFamily::Vatin => code.get(KEY_LEN..),
        }
    }
}

/// Serializable form of a [`ValidatorRule`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RuleDefinition {
    pub family: RuleFamily,
    pub key: String,
    /// Exact length for IBANs, maximum length for VATINs.
    pub length: usize,
    pub pattern: String,
    #[serde(default)]
    pub check_digit: Option<CheckDigitAlgorithm>,
}

/// How codes starting with one classification key are validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorRule {
    family: RuleFamily,
    key: String,
    length: usize,
    shape: ShapeValidator,
    check_digit: Option<CheckDigitAlgorithm>,
}

impl ValidatorRule {
    /// Fails unless `key` is two upper-case ASCII letters, `length` is allowed for the family and
    /// every code `pattern` matches starts with `key`.
    pub fn new(
        family: RuleFamily,
        key: &str,
        length: usize,
        pattern: &str,
        check_digit: Option<CheckDigitAlgorithm>,
    ) -> Result<Self, RegistryError> {
        if key.len() != KEY_LEN || !key.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(RegistryError::InvalidRuleDefinition(format!(
                "invalid key '{key}', must be exactly {KEY_LEN} upper-case characters"
            )));
        }
        let allowed = family.allowed_lengths();
        if !allowed.contains(&length) {
            return Err(RegistryError::InvalidRuleDefinition(format!(
                "invalid length {length} for '{key}', must be in range {} to {} inclusive",
                allowed.start(),
                allowed.end()
            )));
        }
        let shape = ShapeValidator::new(&[pattern])?;
        if !pattern_starts_with(pattern, key) {
            return Err(RegistryError::InvalidRuleDefinition(format!(
                "key '{key}' does not agree with pattern '{pattern}'"
            )));
        }
        Ok(Self {
            family,
            key: key.to_owned(),
            length,
            shape,
            check_digit,
        })
    }

    pub fn family(&self) -> RuleFamily {
        self.family
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn length_bounds(&self) -> LengthBounds {
        self.family.length_bounds(self.length)
    }

    pub fn shape(&self) -> &ShapeValidator {
        &self.shape
    }

    pub fn check_digit(&self) -> Option<&CheckDigitAlgorithm> {
        self.check_digit.as_ref()
    }

    /// Length first, then shape, then the check digit. The code is not trimmed.
    pub fn is_valid(&self, code: &str) -> bool {
        if !self.length_bounds().contains(code.chars().count()) || !self.shape.is_valid(code) {
            return false;
        }
        match &self.check_digit {
            Some(check_digit) => self
                .family
                .check_digit_input(code)
                .is_some_and(|input| check_digit.is_valid(input)),
            None => true,
        }
    }

    pub fn definition(&self) -> RuleDefinition {
        RuleDefinition {
            family: self.family,
            key: self.key.clone(),
            length: self.length,
            pattern: self.shape.patterns().concat(),
            check_digit: self.check_digit.clone(),
        }
    }
}

impl TryFrom<RuleDefinition> for ValidatorRule {
    type Error = RegistryError;

    fn try_from(definition: RuleDefinition) -> Result<Self, Self::Error> {
        ValidatorRule::new(
            definition.family,
            &definition.key,
            definition.length,
            &definition.pattern,
            definition.check_digit,
        )
    }
}

/// True when every literal prefix of `pattern` starts with `key`. A pattern without a finite set
/// of literal prefixes never agrees with a key.
fn pattern_starts_with(pattern: &str, key: &str) -> bool {
    let Ok(hir) = regex_syntax::Parser::new().parse(pattern) else {
        return false;
    };
    let prefixes = Extractor::new().kind(ExtractKind::Prefix).extract(&hir);
    match prefixes.literals() {
        Some(literals) => {
            !literals.is_empty()
                && literals
                    .iter()
                    .all(|literal| literal.as_bytes().starts_with(key.as_bytes()))
        }
        None => false,
    }
}

#[cfg(test)]
mod test {
    use crate::check_digit::CheckDigitAlgorithm;
    use crate::code_validator::LengthBounds;
    use crate::registry::*;
    use crate::shape::ShapeError;

    fn invalid_definition(result: Result<ValidatorRule, RegistryError>) -> bool {
        matches!(result, Err(RegistryError::InvalidRuleDefinition(_)))
    }

    #[test]
    fn key_must_be_two_upper_case_letters() {
        for key in ["D", "de", "DEU", "D1", "ÄT"] {
            println!("key: {key}");
            assert!(invalid_definition(ValidatorRule::new(
                RuleFamily::Iban,
                key,
                22,
                r"DE\d{20}",
                None
            )));
        }
    }

    #[test]
    fn length_must_be_allowed_for_the_family() {
        assert!(invalid_definition(ValidatorRule::new(
            RuleFamily::Iban,
            "XX",
            7,
            r"XX\d{5}",
            None
        )));
        assert!(invalid_definition(ValidatorRule::new(
            RuleFamily::Iban,
            "XX",
            35,
            r"XX\d{33}",
            None
        )));
        assert!(ValidatorRule::new(RuleFamily::Iban, "XX", 8, r"XX\d{6}", None).is_ok());
        assert!(invalid_definition(ValidatorRule::new(
            RuleFamily::Vatin,
            "XX",
            9,
            r"XX\d{7}",
            None
        )));
        assert!(ValidatorRule::new(RuleFamily::Vatin, "XX", 16, r"XX\d{14}", None).is_ok());
    }

    #[test]
    fn pattern_must_start_with_the_key() {
        assert!(invalid_definition(ValidatorRule::new(
            RuleFamily::Iban,
            "AT",
            20,
            r"DE\d{18}",
            None
        )));
        // one alternative does not start with the key
        assert!(invalid_definition(ValidatorRule::new(
            RuleFamily::Iban,
            "AT",
            20,
            r"(AT|DE)\d{18}",
            None
        )));
        assert!(invalid_definition(ValidatorRule::new(
            RuleFamily::Iban,
            "AT",
            20,
            r"[A-Z]{2}\d{18}",
            None
        )));
        assert!(ValidatorRule::new(RuleFamily::Vatin, "BE", 12, r"BE[0-1]\d{9}", None).is_ok());
        assert!(ValidatorRule::new(RuleFamily::Vatin, "XI", 14, r"XI(\d{3})?\d{9}", None).is_ok());
    }

    #[test]
    fn pattern_must_compile() {
        assert_eq!(
            ValidatorRule::new(RuleFamily::Iban, "DE", 22, r"DE\d{20", None),
            Err(RegistryError::InvalidShape(ShapeError::InvalidSyntax))
        );
    }

    #[test]
    fn vatin_check_digit_skips_the_key() {
        let rule = ValidatorRule::new(
            RuleFamily::Vatin,
            "DE",
            11,
            r"DE\d{9}",
            Some(CheckDigitAlgorithm::Modulus11Ten),
        )
        .unwrap();
        assert!(rule.is_valid("DE136695976"));
        assert!(!rule.is_valid("DE136695978"));
        assert!(!rule.is_valid("DE13669597"));
        assert!(!rule.is_valid("DE1366959761"));
        assert_eq!(rule.length_bounds(), LengthBounds::at_most(11));
    }

    #[test]
    fn iban_length_is_exact() {
        let rule = ValidatorRule::new(
            RuleFamily::Iban,
            "DE",
            22,
            r"DE\d{2,20}",
            Some(CheckDigitAlgorithm::Iban),
        )
        .unwrap();
        assert!(rule.is_valid("DE89370400440532013000"));
        assert!(!rule.is_valid("DE8937040044053201300"));
    }

    #[test]
    fn definitions_round_trip() {
        let json = r#"{
            "family": "iban",
            "key": "DE",
            "length": 22,
            "pattern": "DE\\d{20}",
            "check_digit": {"type": "Iban"}
        }"#;
        let definition: RuleDefinition = serde_json::from_str(json).unwrap();
        let rule = ValidatorRule::try_from(definition.clone()).unwrap();
        assert_eq!(rule.key(), "DE");
        assert_eq!(rule.definition(), definition);
        assert!(rule.is_valid("DE89370400440532013000"));
    }
}
