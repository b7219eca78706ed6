mod austria;
mod bulgaria;
mod cyprus;
mod czechia;
mod france;
mod ireland;
mod latvia;
mod lithuania;
mod netherlands;
mod romania;
mod slovakia;
mod spain;
mod sweden;
mod two_digit;
mod united_kingdom;

use crate::check_digit::modulus::{CheckChar, ModulusCheckDigit, Weights};
use crate::check_digit::{
    require_body, to_digits, CheckDigit, CheckDigitError, Modulus11TenCheckDigit, ABA, LUHN,
};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use self::austria::AustriaCheckDigit;
use self::bulgaria::BulgariaCheckDigit;
use self::cyprus::CyprusCheckDigit;
use self::czechia::CzechiaCheckDigit;
use self::france::FranceCheckDigit;
use self::ireland::IrelandCheckDigit;
use self::latvia::LatviaCheckDigit;
use self::lithuania::LithuaniaCheckDigit;
use self::netherlands::NetherlandsCheckDigit;
use self::romania::RomaniaCheckDigit;
use self::slovakia::SlovakiaCheckDigit;
use self::spain::SpainCheckDigit;
use self::sweden::SwedenCheckDigit;
use self::two_digit::{BELGIUM, LUXEMBOURG, MALTA};
use self::united_kingdom::UnitedKingdomCheckDigit;

/// Country prefixes of VAT identification numbers that carry a check digit.
///
/// `EL` is Greece and `XI` is Northern Ireland, which keeps the UK scheme.
#[allow(clippy::upper_case_acronyms)]
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    Display,
    EnumIter,
    IntoStaticStr,
)]
pub enum VatCountry {
    AT,
    BE,
    BG,
    CY,
    CZ,
    DE,
    DK,
    EE,
    EL,
    ES,
    FI,
    FR,
    HR,
    HU,
    IE,
    IT,
    LT,
    LU,
    LV,
    MT,
    NL,
    PL,
    PT,
    RO,
    SE,
    SI,
    SK,
    XI,
}

const DENMARK: ModulusCheckDigit<'static> =
    ModulusCheckDigit::new(11, Weights::FixedFromLeft(&[2, 7, 6, 5, 4, 3, 2, 1])).code_length(8, 8);

const ESTONIA: ModulusCheckDigit<'static> = ABA.code_length(9, 9);

const GREECE: ModulusCheckDigit<'static> = ModulusCheckDigit::new(
    11,
    Weights::FixedFromRight(&[0, 2, 4, 8, 16, 32, 64, 128, 256]),
)
.remainder()
.render(CheckChar::LastDigit)
.code_length(9, 9);

const FINLAND: ModulusCheckDigit<'static> =
    ModulusCheckDigit::new(11, Weights::FixedFromLeft(&[7, 9, 10, 5, 8, 4, 2])).code_length(8, 8);

const HUNGARY: ModulusCheckDigit<'static> =
    ModulusCheckDigit::new(10, Weights::FromRight(&[1, 3, 7, 9])).code_length(8, 8);

const POLAND: ModulusCheckDigit<'static> =
    ModulusCheckDigit::new(11, Weights::FixedFromLeft(&[6, 5, 7, 2, 3, 4, 5, 6, 7]))
        .remainder()
        .code_length(10, 10);

const PORTUGAL: ModulusCheckDigit<'static> = ModulusCheckDigit::new(11, Weights::RightPosition)
    .render(CheckChar::LastDigit)
    .code_length(9, 9);

const SLOVENIA: ModulusCheckDigit<'static> = ModulusCheckDigit::new(11, Weights::RightPosition)
    .render(CheckChar::NonZeroLastDigit)
    .code_length(8, 8);

/// The check-digit scheme of one country's VAT numbers, applied to the number without its
/// country prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VatCheckDigit {
    country: VatCountry,
}

impl VatCheckDigit {
    pub fn new(country: VatCountry) -> Self {
        Self { country }
    }

    pub fn country(&self) -> VatCountry {
        self.country
    }

    fn with_check_digit<R>(&self, f: impl FnOnce(&dyn CheckDigit) -> R) -> R {
        match self.country {
            VatCountry::AT => f(&AustriaCheckDigit),
            VatCountry::BE => f(&BELGIUM),
            VatCountry::BG => f(&BulgariaCheckDigit),
            VatCountry::CY => f(&CyprusCheckDigit),
            VatCountry::CZ => f(&CzechiaCheckDigit),
            VatCountry::DE | VatCountry::HR => f(&Modulus11TenCheckDigit),
            VatCountry::DK => f(&DENMARK),
            VatCountry::EE => f(&ESTONIA),
            VatCountry::EL => f(&GREECE),
            VatCountry::ES => f(&SpainCheckDigit),
            VatCountry::FI => f(&FINLAND),
            VatCountry::FR => f(&FranceCheckDigit),
            VatCountry::HU => f(&HUNGARY),
            VatCountry::IE => f(&IrelandCheckDigit),
            VatCountry::IT => f(&LUHN),
            VatCountry::LT => f(&LithuaniaCheckDigit),
            VatCountry::LU => f(&LUXEMBOURG),
            VatCountry::LV => f(&LatviaCheckDigit),
            VatCountry::MT => f(&MALTA),
            VatCountry::NL => f(&NetherlandsCheckDigit),
            VatCountry::PL => f(&POLAND),
            VatCountry::PT => f(&PORTUGAL),
            VatCountry::RO => f(&RomaniaCheckDigit),
            VatCountry::SE => f(&SwedenCheckDigit),
            VatCountry::SI => f(&SLOVENIA),
            VatCountry::SK => f(&SlovakiaCheckDigit),
            VatCountry::XI => f(&UnitedKingdomCheckDigit),
        }
    }
}

impl CheckDigit for VatCheckDigit {
    fn calculate(&self, body: &str) -> Result<String, CheckDigitError> {
        self.with_check_digit(|check_digit| check_digit.calculate(body))
    }

    fn split_code<'c>(&self, code: &'c str) -> Option<(Cow<'c, str>, &'c str)> {
        self.with_check_digit(|check_digit| check_digit.split_code(code))
    }

    fn is_valid(&self, code: &str) -> bool {
        self.with_check_digit(|check_digit| check_digit.is_valid(code))
    }
}

/// Check digit of a complete VAT identification number, country prefix included. The scheme
/// is picked from the first two characters.
pub struct VatinCheckDigit;

impl VatinCheckDigit {
    fn split_country(code: &str) -> Result<(VatCountry, &str), CheckDigitError> {
        require_body(code)?;
        let (prefix, rest) = match (code.get(..2), code.get(2..)) {
            (Some(prefix), Some(rest)) => (prefix, rest),
            _ => return Err(CheckDigitError::InvalidLength(code.chars().count())),
        };
        let country = prefix
            .parse::<VatCountry>()
            .map_err(|_| CheckDigitError::InvalidCode("unknown VAT country prefix"))?;
        Ok((country, rest))
    }
}

impl CheckDigit for VatinCheckDigit {
    fn calculate(&self, body: &str) -> Result<String, CheckDigitError> {
        let (country, rest) = Self::split_country(body)?;
        VatCheckDigit::new(country).calculate(rest)
    }

    fn split_code<'c>(&self, code: &'c str) -> Option<(Cow<'c, str>, &'c str)> {
        let (country, rest) = Self::split_country(code).ok()?;
        let (body, check) = VatCheckDigit::new(country).split_code(rest)?;
        Some((Cow::Owned(format!("{}{}", &code[..2], body)), check))
    }

    fn is_valid(&self, code: &str) -> bool {
        match Self::split_country(code) {
            Ok((country, rest)) => VatCheckDigit::new(country).is_valid(rest),
            Err(_) => false,
        }
    }
}

/// Digits of `body` after its first `skip` characters. Error positions stay relative to `body`.
fn digits_after(body: &str, skip: usize) -> Result<Vec<u32>, CheckDigitError> {
    let rest = body
        .char_indices()
        .nth(skip)
        .map(|(i, _)| &body[i..])
        .unwrap_or("");
    to_digits(rest).map_err(|err| match err {
        CheckDigitError::InvalidCharacter {
            position,
            character,
        } => CheckDigitError::InvalidCharacter {
            position: position + skip,
            character,
        },
        err => err,
    })
}

fn is_zero(digits: &[u32]) -> bool {
    digits.iter().all(|digit| *digit == 0)
}

/// Weighted sum of `digits`, pairing them with `weights` from the left. Extra digits weigh
/// nothing.
fn weighted_sum(digits: &[u32], weights: &[u32]) -> u32 {
    digits.iter().zip(weights).map(|(d, w)| d * w).sum()
}
