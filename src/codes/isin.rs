use crate::check_digit::CheckDigitAlgorithm;
use crate::code_validator::{CodeValidator, LengthBounds};
use crate::codes::built_in;
use lazy_static::lazy_static;

/// Country code, nine character national security identifier and a check digit.
pub const ISIN_PATTERN: &str = "([A-Z]{2}[A-Z0-9]{9}[0-9])";

lazy_static! {
    static ref ISIN_VALIDATOR: CodeValidator = built_in(
        "isin",
        &[ISIN_PATTERN],
        LengthBounds::exact(12),
        Some(CheckDigitAlgorithm::Isin),
    );
}

/// ISO 3166-1 alpha-2 codes, sorted.
#[rustfmt::skip]
const COUNTRY_CODES: &[&str] = &[
    "AD", "AE", "AF", "AG", "AI", "AL", "AM", "AO", "AQ", "AR", "AS", "AT", "AU", "AW", "AX", "AZ",
    "BA", "BB", "BD", "BE", "BF", "BG", "BH", "BI", "BJ", "BL", "BM", "BN", "BO", "BQ", "BR", "BS",
    "BT", "BV", "BW", "BY", "BZ", "CA", "CC", "CD", "CF", "CG", "CH", "CI", "CK", "CL", "CM", "CN",
    "CO", "CR", "CU", "CV", "CW", "CX", "CY", "CZ", "DE", "DJ", "DK", "DM", "DO", "DZ", "EC", "EE",
    "EG", "EH", "ER", "ES", "ET", "FI", "FJ", "FK", "FM", "FO", "FR", "GA", "GB", "GD", "GE", "GF",
    "GG", "GH", "GI", "GL", "GM", "GN", "GP", "GQ", "GR", "GS", "GT", "GU", "GW", "GY", "HK", "HM",
    "HN", "HR", "HT", "HU", "ID", "IE", "IL", "IM", "IN", "IO", "IQ", "IR", "IS", "IT", "JE", "JM",
    "JO", "JP", "KE", "KG", "KH", "KI", "KM", "KN", "KP", "KR", "KW", "KY", "KZ", "LA", "LB", "LC",
    "LI", "LK", "LR", "LS", "LT", "LU", "LV", "LY", "MA", "MC", "MD", "ME", "MF", "MG", "MH", "MK",
    "ML", "MM", "MN", "MO", "MP", "MQ", "MR", "MS", "MT", "MU", "MV", "MW", "MX", "MY", "MZ", "NA",
    "NC", "NE", "NF", "NG", "NI", "NL", "NO", "NP", "NR", "NU", "NZ", "OM", "PA", "PE", "PF", "PG",
    "PH", "PK", "PL", "PM", "PN", "PR", "PS", "PT", "PW", "PY", "QA", "RE", "RO", "RS", "RU", "RW",
    "SA", "SB", "SC", "SD", "SE", "SG", "SH", "SI", "SJ", "SK", "SL", "SM", "SN", "SO", "SR", "SS",
    "ST", "SV", "SX", "SY", "SZ", "TC", "TD", "TF", "TG", "TH", "TJ", "TK", "TL", "TM", "TN", "TO",
    "TR", "TT", "TV", "TW", "TZ", "UA", "UG", "UM", "US", "UY", "UZ", "VA", "VC", "VE", "VG", "VI",
    "VN", "VU", "WF", "WS", "YE", "YT", "ZA", "ZM", "ZW",
];

/// Prefixes that are not countries but are issued by depositories: `EZ` for derivatives and
/// `XS` for securities held in international clearing systems.
const SPECIAL_CODES: &[&str] = &["EZ", "XS"];

/// Validates International Securities Identification Numbers, optionally requiring a known
/// country prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IsinValidator {
    check_country_code: bool,
}

impl IsinValidator {
    pub fn new(check_country_code: bool) -> Self {
        Self { check_country_code }
    }

    pub fn checks_country_code(&self) -> bool {
        self.check_country_code
    }

    pub fn is_valid(&self, code: &str) -> bool {
        self.validate(code).is_some()
    }

    pub fn validate(&self, code: &str) -> Option<String> {
        let isin = ISIN_VALIDATOR.validate(code)?;
        if self.check_country_code && !is_known_prefix(&isin) {
            return None;
        }
        Some(isin)
    }
}

fn is_known_prefix(isin: &str) -> bool {
    isin.get(..2).is_some_and(|prefix| {
        COUNTRY_CODES.binary_search(&prefix).is_ok() || SPECIAL_CODES.contains(&prefix)
    })
}
