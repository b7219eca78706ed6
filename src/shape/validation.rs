use regex::{Regex, RegexBuilder};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("At least one shape pattern is required")]
    MissingPattern,

    #[error("Invalid regex syntax")]
    InvalidSyntax,

    #[error("The regex has exceeded the complexity limit (i.e. it might be too slow)")]
    TooComplex,

    #[error("Shape patterns are not allowed to match an empty string")]
    MatchesEmptyString,
}

impl From<ShapeError> for i64 {
    fn from(value: ShapeError) -> i64 {
        match value {
            ShapeError::MissingPattern => -1,
            ShapeError::InvalidSyntax => -2,
            ShapeError::TooComplex => -3,
            ShapeError::MatchesEmptyString => -4,
        }
    }
}

const REGEX_COMPLEXITY_LIMIT: usize = 1_000_000;

/// Checks that a pattern can be used as a shape pattern.
pub fn validate_pattern(pattern: &str) -> Result<(), ShapeError> {
    // Same as `validate_and_create_regex`, without exposing the `Regex` type.
    validate_and_create_regex(pattern, true).map(|_| ())
}

/// Compiles `pattern` so that it only matches a whole input.
pub fn validate_and_create_regex(pattern: &str, case_sensitive: bool) -> Result<Regex, ShapeError> {
    let regex = RegexBuilder::new(&anchor(pattern))
        .case_insensitive(!case_sensitive)
        .dot_matches_new_line(false)
        .unicode(true)
        .size_limit(REGEX_COMPLEXITY_LIMIT)
        .build()
        .map_err(|regex_err| match regex_err {
            regex::Error::CompiledTooBig(_) => ShapeError::TooComplex,
            _ => ShapeError::InvalidSyntax,
        })?;

    if regex.is_match("") {
        return Err(ShapeError::MatchesEmptyString);
    }

    Ok(regex)
}

/// The non-capturing group keeps alternations inside the anchors and leaves group numbering
/// unchanged.
fn anchor(pattern: &str) -> String {
    format!("^(?:{pattern})$")
}
