// This needs cleaned up a bit before clippy should run here
#![allow(warnings)]

use afl::fuzz;
use dd_checkdigit::{
    CardType, CasNumberValidator, CheckDigit, CheckDigitAlgorithm, CodeValidatorConfig,
    CreditCardValidator, EcIndexNumberValidator, EcNumberValidator, IbanValidator, IsbnValidator,
    IsinValidator, IssnValidator, LeiValidator, LeitwegValidator, SireneValidator, VatCountry,
    VatinValidator,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (pattern, bytes) = split_bytes_once(bytes)?;
    let (input, rand_seed) = split_bytes_once(bytes)?;

    let pattern_str = std::str::from_utf8(pattern).ok()?;
    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for i in 0..8 {
        if rand_seed.len() > i {
            rng_seed <<= 8;
            rng_seed += rand_seed[i] as u64;
        }
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(pattern_str, input_str, rng);

    Some(())
}

/// Algorithms whose check digit is the last character of the code.
const TRAILING_CHECK_DIGIT: &[CheckDigitAlgorithm] = &[
    CheckDigitAlgorithm::Aba,
    CheckDigitAlgorithm::CasNumber,
    CheckDigitAlgorithm::Cusip,
    CheckDigitAlgorithm::Ean13,
    CheckDigitAlgorithm::EcIndexNumber,
    CheckDigitAlgorithm::EcNumber,
    CheckDigitAlgorithm::Isbn,
    CheckDigitAlgorithm::Isbn10,
    CheckDigitAlgorithm::Isin,
    CheckDigitAlgorithm::Issn,
    CheckDigitAlgorithm::Luhn,
    CheckDigitAlgorithm::Modulus11Ten,
    CheckDigitAlgorithm::Sedol,
    CheckDigitAlgorithm::Verhoeff,
];

fn gen_algorithm(rng: &mut StdRng) -> CheckDigitAlgorithm {
    match rng.gen_range::<u8, _>(0..6) {
        0 => CheckDigitAlgorithm::Iban,
        1 => CheckDigitAlgorithm::Modulus97,
        2 => CheckDigitAlgorithm::Vatin,
        3 => {
            let countries = [
                VatCountry::AT,
                VatCountry::DE,
                VatCountry::FR,
                VatCountry::HU,
                VatCountry::IE,
                VatCountry::NL,
            ];
            CheckDigitAlgorithm::Vat {
                country: countries[rng.gen_range(0..countries.len())],
            }
        }
        4 => CheckDigitAlgorithm::ModulusTen {
            weights: (0..rng.gen_range(1..5)).map(|_| rng.gen_range(1..10)).collect(),
            use_right_pos: rng.gen_bool(0.5),
            sum_weighted_digits: rng.gen_bool(0.5),
        },
        _ => TRAILING_CHECK_DIGIT[rng.gen_range(0..TRAILING_CHECK_DIGIT.len())].clone(),
    }
}

fn run_fuzz(pattern: &str, input: &str, mut rng: StdRng) {
    let algorithm = gen_algorithm(&mut rng);

    #[cfg(feature = "manual_test")]
    {
        println!("Pattern: {:?}", pattern);
        println!("Input: {:?}", input);
        println!("Input len: {:?}", input.len());
        println!("Algorithm: {:?}", algorithm);
    }

    // A computed check digit always completes a valid code.
    if TRAILING_CHECK_DIGIT.contains(&algorithm) {
        if let Ok(check) = algorithm.calculate(input) {
            let code = format!("{input}{check}");
            assert!(algorithm.is_valid(&code), "{algorithm:?} rejects {code:?}");
        }
    } else {
        let _ = algorithm.calculate(input);
        let _ = algorithm.is_valid(input);
    }

    // None of the built-in validators may panic.
    let _ = IbanValidator::new().is_valid(input);
    let _ = VatinValidator::new().is_valid(input);
    let _ = CreditCardValidator::from_card_types(CardType::all()).validate(input);
    let _ = CreditCardValidator::generic().validate(input);
    let _ = IsbnValidator::new().validate(input);
    let _ = IsinValidator::new(rng.gen_bool(0.5)).validate(input);
    let _ = IssnValidator.validate(input);
    let _ = IssnValidator.extract_from_ean13(input);
    let _ = IsbnValidator::new().convert_to_isbn13(input);
    let _ = LeiValidator.validate(input);
    let _ = LeitwegValidator.validate(input);
    let _ = SireneValidator.validate(input);
    let _ = CasNumberValidator.validate(input);
    let _ = EcNumberValidator.validate(input);
    let _ = EcIndexNumberValidator.validate(input);

    let validator = CodeValidatorConfig::new()
        .pattern(pattern)
        .case_sensitive(rng.gen_bool(0.5))
        .check_digit(algorithm.clone())
        .build();

    if let Ok(validator) = validator {
        let result = validator.validate(input);
        #[cfg(feature = "manual_test")]
        {
            println!("Validated: {:?}", result);
        }
        if let Some(code) = result {
            assert!(algorithm.is_valid(&code));
        }
    }
}
