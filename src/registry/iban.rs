use crate::check_digit::CheckDigitAlgorithm;
use crate::registry::{RegistryError, RuleFamily, ValidatorRule};

/// Country key, exact length and layout of every IBAN format known by default.
#[rustfmt::skip]
const IBAN_FORMATS: &[(&str, usize, &str)] = &[
    ("AD", 24, r"AD\d{10}[A-Z0-9]{12}"),            // Andorra
    ("AE", 23, r"AE\d{21}"),                        // United Arab Emirates (The)
    ("AL", 28, r"AL\d{10}[A-Z0-9]{16}"),            // Albania
    ("AT", 20, r"AT\d{18}"),                        // Austria
    ("AZ", 28, r"AZ\d{2}[A-Z]{4}[A-Z0-9]{20}"),     // Azerbaijan
    ("BA", 20, r"BA\d{18}"),                        // Bosnia and Herzegovina
    ("BE", 16, r"BE\d{14}"),                        // Belgium
    ("BG", 22, r"BG\d{2}[A-Z]{4}\d{6}[A-Z0-9]{8}"), // Bulgaria
    ("BH", 22, r"BH\d{2}[A-Z]{4}[A-Z0-9]{14}"),     // Bahrain
    ("BI", 27, r"BI\d{25}"),                        // Burundi
    ("BR", 29, r"BR\d{25}[A-Z]{1}[A-Z0-9]{1}"),     // Brazil
    ("BY", 28, r"BY\d{2}[A-Z0-9]{4}\d{4}[A-Z0-9]{16}"),// Republic of Belarus
    ("CH", 21, r"CH\d{7}[A-Z0-9]{12}"),             // Switzerland
    ("CR", 22, r"CR\d{20}"),                        // Costa Rica
    ("CY", 28, r"CY\d{10}[A-Z0-9]{16}"),            // Cyprus
    ("CZ", 24, r"CZ\d{22}"),                        // Czechia
    ("DE", 22, r"DE\d{20}"),                        // Germany
    ("DK", 18, r"DK\d{16}"),                        // Denmark
    ("DO", 28, r"DO\d{2}[A-Z0-9]{4}\d{20}"),        // Dominican Republic
    ("EE", 20, r"EE\d{18}"),                        // Estonia
    ("EG", 29, r"EG\d{27}"),                        // Egypt
    ("ES", 24, r"ES\d{22}"),                        // Spain
    ("FI", 18, r"FI\d{16}"),                        // Finland
    ("FO", 18, r"FO\d{16}"),                        // Faroe Islands
    ("FR", 27, r"FR\d{12}[A-Z0-9]{11}\d{2}"),       // France
    ("GB", 22, r"GB\d{2}[A-Z]{4}\d{14}"),           // United Kingdom
    ("GE", 22, r"GE\d{2}[A-Z]{2}\d{16}"),           // Georgia
    ("GI", 23, r"GI\d{2}[A-Z]{4}[A-Z0-9]{15}"),     // Gibraltar
    ("GL", 18, r"GL\d{16}"),                        // Greenland
    ("GR", 27, r"GR\d{9}[A-Z0-9]{16}"),             // Greece
    ("GT", 28, r"GT\d{2}[A-Z0-9]{24}"),             // Guatemala
    ("HR", 21, r"HR\d{19}"),                        // Croatia
    ("HU", 28, r"HU\d{26}"),                        // Hungary
    ("IE", 22, r"IE\d{2}[A-Z]{4}\d{14}"),           // Ireland
    ("IL", 23, r"IL\d{21}"),                        // Israel
    ("IQ", 23, r"IQ\d{2}[A-Z]{4}\d{15}"),           // Iraq
    ("IS", 26, r"IS\d{24}"),                        // Iceland
    ("IT", 27, r"IT\d{2}[A-Z]{1}\d{10}[A-Z0-9]{12}"),// Italy
    ("JO", 30, r"JO\d{2}[A-Z]{4}\d{4}[A-Z0-9]{18}"),// Jordan
    ("KW", 30, r"KW\d{2}[A-Z]{4}[A-Z0-9]{22}"),     // Kuwait
    ("KZ", 20, r"KZ\d{5}[A-Z0-9]{13}"),             // Kazakhstan
    ("LB", 28, r"LB\d{6}[A-Z0-9]{20}"),             // Lebanon
    ("LC", 32, r"LC\d{2}[A-Z]{4}[A-Z0-9]{24}"),     // Saint Lucia
    ("LI", 21, r"LI\d{7}[A-Z0-9]{12}"),             // Liechtenstein
    ("LT", 20, r"LT\d{18}"),                        // Lithuania
    ("LU", 20, r"LU\d{5}[A-Z0-9]{13}"),             // Luxembourg
    ("LV", 21, r"LV\d{2}[A-Z]{4}[A-Z0-9]{13}"),     // Latvia
    ("LY", 25, r"LY\d{23}"),                        // Libya
    ("MC", 27, r"MC\d{12}[A-Z0-9]{11}\d{2}"),       // Monaco
    ("MD", 24, r"MD\d{2}[A-Z0-9]{20}"),             // Moldova
    ("ME", 22, r"ME\d{20}"),                        // Montenegro
    ("MK", 19, r"MK\d{5}[A-Z0-9]{10}\d{2}"),        // Macedonia
    ("MR", 27, r"MR\d{25}"),                        // Mauritania
    ("MT", 31, r"MT\d{2}[A-Z]{4}\d{5}[A-Z0-9]{18}"),// Malta
    ("MU", 30, r"MU\d{2}[A-Z]{4}\d{19}[A-Z]{3}"),   // Mauritius
    ("NL", 18, r"NL\d{2}[A-Z]{4}\d{10}"),           // Netherlands (The)
    ("NO", 15, r"NO\d{13}"),                        // Norway
    ("PK", 24, r"PK\d{2}[A-Z]{4}[A-Z0-9]{16}"),     // Pakistan
    ("PL", 28, r"PL\d{26}"),                        // Poland
    ("PS", 29, r"PS\d{2}[A-Z]{4}[A-Z0-9]{21}"),     // Palestine, State of
    ("PT", 25, r"PT\d{23}"),                        // Portugal
    ("QA", 29, r"QA\d{2}[A-Z]{4}[A-Z0-9]{21}"),     // Qatar
    ("RO", 24, r"RO\d{2}[A-Z]{4}[A-Z0-9]{16}"),     // Romania
    ("RS", 22, r"RS\d{20}"),                        // Serbia
    ("SA", 24, r"SA\d{4}[A-Z0-9]{18}"),             // Saudi Arabia
    ("SC", 31, r"SC\d{2}[A-Z]{4}\d{20}[A-Z]{3}"),   // Seychelles
    ("SD", 18, r"SD\d{16}"),                        // Sudan
    ("SE", 24, r"SE\d{22}"),                        // Sweden
    ("SI", 19, r"SI\d{17}"),                        // Slovenia
    ("SK", 24, r"SK\d{22}"),                        // Slovakia
    ("SM", 27, r"SM\d{2}[A-Z]{1}\d{10}[A-Z0-9]{12}"),// San Marino
    ("ST", 25, r"ST\d{23}"),                        // Sao Tome and Principe
    ("SV", 28, r"SV\d{2}[A-Z]{4}\d{20}"),           // El Salvador
    ("TL", 23, r"TL\d{21}"),                        // Timor-Leste
    ("TN", 24, r"TN\d{22}"),                        // Tunisia
    ("TR", 26, r"TR\d{8}[A-Z0-9]{16}"),             // Turkey
    ("UA", 29, r"UA\d{8}[A-Z0-9]{19}"),             // Ukraine
    ("VA", 22, r"VA\d{20}"),                        // Vatican City State
    ("VG", 24, r"VG\d{2}[A-Z]{4}\d{16}"),           // Virgin Islands
    ("XK", 20, r"XK\d{18}"),                        // Kosovo
];

pub(super) fn default_iban_rules() -> Result<Vec<ValidatorRule>, RegistryError> {
    IBAN_FORMATS
        .iter()
        .map(|(key, length, pattern)| {
            ValidatorRule::new(
                RuleFamily::Iban,
                key,
                *length,
                pattern,
                Some(CheckDigitAlgorithm::Iban),
            )
        })
        .collect()
}
