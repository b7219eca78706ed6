use crate::registry::{
    Registry, RegistryError, RuleFamily, ValidatorRule, DEFAULT_IBAN_REGISTRY,
};
use std::sync::Arc;

/// Validates International Bank Account Numbers against a registry of per-country formats.
///
/// The code must be in its electronic form: upper case, no spaces.
#[derive(Clone, Copy)]
pub struct IbanValidator<'r> {
    registry: &'r dyn Registry,
}

impl IbanValidator<'static> {
    /// Uses the built-in formats.
    pub fn new() -> Self {
        Self {
            registry: &*DEFAULT_IBAN_REGISTRY,
        }
    }
}

impl Default for IbanValidator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> IbanValidator<'r> {
    /// Fails if `registry` does not hold IBAN rules.
    pub fn with_registry(registry: &'r dyn Registry) -> Result<Self, RegistryError> {
        if registry.family() != RuleFamily::Iban {
            return Err(RegistryError::InvalidRuleDefinition(format!(
                "registry '{}' holds {} rules",
                registry.name(),
                registry.family().name()
            )));
        }
        Ok(Self { registry })
    }

    pub fn registry(&self) -> &'r dyn Registry {
        self.registry
    }

    pub fn is_valid(&self, code: &str) -> bool {
        self.registry.is_valid(code)
    }

    /// Whether a format exists for the country `code` starts with.
    pub fn has_validator(&self, code: &str) -> bool {
        self.registry.has(code)
    }

    pub fn validator(&self, code: &str) -> Option<Arc<ValidatorRule>> {
        self.registry.get(code)
    }
}

#[cfg(test)]
mod test {
    use crate::codes::*;
    use crate::registry::{MutableRegistry, Registry, RuleFamily, ValidatorRule};
    use crate::check_digit::CheckDigitAlgorithm;

    const VALID: &[&str] = &[
        "AD1200012030200359100100",
        "AE070331234567890123456",
        "AL47212110090000000235698741",
        "AT611904300234573201",
        "AZ21NABZ00000000137010001944",
        "BA391290079401028494",
        "BE68539007547034",
        "BG80BNBG96611020345678",
        "BH67BMAG00001299123456",
        "BR1800000000141455123924100C2",
        "BY13NBRB3600900000002Z00AB00",
        "CH9300762011623852957",
        "CR05015202001026284066",
        "CY17002001280000001200527600",
        "CZ6508000000192000145399",
        "DE89370400440532013000",
        "DK5000400440116243",
        "DO28BAGR00000001212453611324",
        "EE382200221020145685",
        "ES9121000418450200051332",
        "FI2112345600000785",
        "FO6264600001631634",
        "FR1420041010050500013M02606",
        "GB29NWBK60161331926819",
        "GI75NWBK000000007099453",
        "GL8964710001000206",
        "GR1601101250000000012300695",
        "GT82TRAJ01020000001210029690",
        "HR1210010051863000160",
        "HU42117730161111101800000000",
        "IE29AIBK93115212345678",
        "IL620108000000099999999",
        "IS140159260076545510730339",
        "IT60X0542811101000000123456",
        "JO94CBJO0010000000000131000302",
        "KW81CBKU0000000000001234560101",
        "KZ86125KZT5004100100",
        "LB62099900000001001901229114",
        "LI21088100002324013AA",
        "LT121000011101001000",
        "LU280019400644750000",
        "LV80BANK0000435195001",
        "MC5811222000010123456789030",
        "MD24AG000225100013104168",
        "ME25505000012345678951",
        "MK07250120000058984",
        "MR1300020001010000123456753",
        "MT84MALT011000012345MTLCAST001S",
        "MU17BOMM0101101030300200000MUR",
        "NL91ABNA0417164300",
        "NO9386011117947",
        "PK36SCBL0000001123456702",
        "PL61109010140000071219812874",
        "PS92PALS000000000400123456702",
        "PT50000201231234567890154",
        "QA58DOHB00001234567890ABCDEFG",
        "RO49AAAA1B31007593840000",
        "RS35260005601001611379",
        "SA0380000000608010167519",
        "SE4550000000058398257466",
        "SI56191000000123438",
        "SK3112000000198742637541",
        "SM86U0322509800000000270100",
        "TL380080012345678910157",
        "TN5910006035183598478831",
        "TR330006100519786457841326",
        "UA213996220000026007233566001",
        "VG96VPVG0000012345678901",
        "XK051212012345678906",
    ];

    #[test]
    fn validates_the_default_formats() {
        let validator = IbanValidator::new();
        for code in VALID {
            println!("valid: {code}");
            assert!(validator.is_valid(code));
            assert!(validator.has_validator(code));
        }
    }

    #[test]
    fn agrees_with_an_independent_implementation() {
        let validator = IbanValidator::default();
        for code in [
            "BE68539007547034",
            "CH9300762011623852957",
            "DE89370400440532013000",
            "DE89370400440532013001",
            "ES9121000418450200051332",
            "FR1420041010050500013M02606",
            "GB29NWBK60161331926819",
            "GB29NWBK60161331926818",
            "IT60X0542811101000000123456",
            "NL91ABNA0417164300",
        ] {
            assert_eq!(
                validator.is_valid(code),
                code.parse::<::iban::Iban>().is_ok(),
                "disagreement on {code}"
            );
        }
    }

    #[test]
    fn rejects_invalid_codes() {
        let validator = IbanValidator::new();
        for code in [
            "",
            "   ",
            "A",
            "AB",
            "FR1420041010050500013m02606",
            "MT84MALT011000012345mtlcast001s",
            "LI21088100002324013aa",
            "QA58DOHB00001234567890abcdefg",
            "RO49AAAA1b31007593840000",
            "LC62HEMM000100010012001200023015",
            "BY00NBRB3600000000000Z00AB00",
            "ST68000200010192194210112",
            "SV62CENR0000000000000700025",
            // wrong check digit
            "DE89370400440532013001",
            // one character short
            "DE8937040044053201300",
            // unknown country
            "ZZ12345678901234",
            // lower-case country
            "de89370400440532013000",
            // spaces are not removed
            "DE89 3704 0044 0532 0130 00",
        ] {
            println!("invalid: {code}");
            assert!(!validator.is_valid(code));
        }
        assert!(!validator.has_validator("ZZ12"));
        assert!(validator.validator("ZZ12").is_none());
    }

    #[test]
    fn exposes_the_rule_for_a_country() {
        let validator = IbanValidator::new();
        let rule = validator.validator("DE89370400440532013000").unwrap();
        assert_eq!(rule.key(), "DE");
        assert_eq!(rule.length(), 22);
        assert_eq!(rule.check_digit(), Some(&CheckDigitAlgorithm::Iban));
    }

    #[test]
    fn custom_registry() {
        let registry = MutableRegistry::copy_of("custom-iban", IbanValidator::new().registry());
        registry
            .install(
                ValidatorRule::new(
                    RuleFamily::Iban,
                    "DE",
                    22,
                    r"DE\d{2}37040044\d{10}",
                    Some(CheckDigitAlgorithm::Iban),
                )
                .unwrap(),
            )
            .unwrap();
        let validator = IbanValidator::with_registry(&registry).unwrap();
        assert!(validator.is_valid("DE89370400440532013000"));
        assert!(!validator.is_valid("DE44500105175407324931"));
        assert!(validator.is_valid("NL91ABNA0417164300"));
        assert_eq!(validator.registry().name(), "custom-iban");
    }

    #[test]
    fn registry_of_another_family_is_rejected() {
        let registry = MutableRegistry::new("vat", RuleFamily::Vatin);
        assert!(IbanValidator::with_registry(&registry).is_err());
    }
}
