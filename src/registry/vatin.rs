use crate::check_digit::{CheckDigitAlgorithm, VatCountry};
use crate::registry::{RegistryError, RuleFamily, ValidatorRule};

/// Country key, maximum length, layout and check digit scheme of every VATIN format known by
/// default. `EU` numbers have no check digit.
#[rustfmt::skip]
const VATIN_FORMATS: &[(&str, usize, &str, Option<VatCountry>)] = &[
    ("AT", 11, r"ATU\d{8}", Some(VatCountry::AT)),                                          // Austria
    ("BE", 12, r"BE[0-1]\d{9}", Some(VatCountry::BE)),                                      // Belgium
    ("BG", 12, r"BG(\d)?\d{9}", Some(VatCountry::BG)),                                      // Bulgaria
    ("CY", 11, r"CY[013459]\d{7}[A-Z]", Some(VatCountry::CY)),                              // Cyprus
    ("CZ", 12, r"CZ(\d)?(\d)?\d{8}", Some(VatCountry::CZ)),                                 // Czechia
    ("DE", 11, r"DE\d{9}", Some(VatCountry::DE)),                                           // Germany
    ("DK", 10, r"DK[1-9]\d{7}", Some(VatCountry::DK)),                                      // Denmark
    ("EE", 11, r"EE\d{9}", Some(VatCountry::EE)),                                           // Estonia
    ("EL", 11, r"EL\d{9}", Some(VatCountry::EL)),                                           // Greece
    ("ES", 11, r"ES[A-Z0-9]\d{7}[A-Z0-9]", Some(VatCountry::ES)),                           // Spain
    ("EU", 11, r"EU\d{9}", None),                                                           // Foreign companies trading with EU consumers
    ("FI", 10, r"FI\d{8}", Some(VatCountry::FI)),                                           // Finland
    ("FR", 13, r"FR[A-Z0-9]{2}\d{9}", Some(VatCountry::FR)),                                // France
    ("HR", 13, r"HR\d{11}", Some(VatCountry::HR)),                                          // Croatia
    ("HU", 10, r"HU\d{8}", Some(VatCountry::HU)),                                           // Hungary
    ("IE", 11, r"IE\d{7}[A-W]([A-I])?", Some(VatCountry::IE)),                              // Ireland
    ("IT", 13, r"IT\d{11}", Some(VatCountry::IT)),                                          // Italy
    ("LT", 14, r"LT\d{9}([0-9]1[0-9])?", Some(VatCountry::LT)),                             // Lithuania, 12 digits for temporary payers
    ("LU", 13, r"LU\d{8}", Some(VatCountry::LU)),                                           // Luxembourg
    ("LV", 13, r"LV\d{11}", Some(VatCountry::LV)),                                          // Latvia
    ("MT", 14, r"MT\d{8}", Some(VatCountry::MT)),                                           // Malta
    ("NL", 14, r"NL\d{9}B\d{2}", Some(VatCountry::NL)),                                     // Netherlands
    ("PL", 12, r"PL\d{10}", Some(VatCountry::PL)),                                          // Poland
    ("PT", 11, r"PT\d{9}", Some(VatCountry::PT)),                                           // Portugal
    ("RO", 12, r"RO[1-9](\d)?(\d)?(\d)?(\d)?(\d)?(\d)?(\d)?(\d)?\d", Some(VatCountry::RO)), // Romania
    ("SE", 14, r"SE\d{10}01", Some(VatCountry::SE)),                                        // Sweden
    ("SI", 10, r"SI[1-9]\d{7}", Some(VatCountry::SI)),                                      // Slovenia
    ("SK", 12, r"SK[1-9]\d[2-47-9]\d{7}", Some(VatCountry::SK)),                            // Slovakia
    ("XI", 14, r"XI(\d{3})?\d{9}", Some(VatCountry::XI)),                                   // Northern Ireland
];

pub(super) fn default_vatin_rules() -> Result<Vec<ValidatorRule>, RegistryError> {
    VATIN_FORMATS
        .iter()
        .map(|(key, max_length, pattern, country)| {
            ValidatorRule::new(
                RuleFamily::Vatin,
                key,
                *max_length,
                pattern,
                country.map(|country| CheckDigitAlgorithm::Vat { country }),
            )
        })
        .collect()
}
