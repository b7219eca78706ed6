mod regex_store;
mod validation;

pub use crate::shape::regex_store::{get_memoized_regex, SharedRegex};
pub use crate::shape::validation::{validate_and_create_regex, validate_pattern, ShapeError};

/// Recognizes the textual layout of a code and extracts its significant parts.
///
/// Every pattern must match the whole input. Alternatives are tried in order and the first
/// match wins. Whatever the patterns capture is concatenated into the canonical form, which
/// is how separators such as spaces or dashes are dropped: leave them outside the capture
/// groups. A pattern without capture groups keeps its whole match.
#[derive(Debug, Clone)]
pub struct ShapeValidator {
    patterns: Vec<String>,
    regexes: Vec<SharedRegex>,
    case_sensitive: bool,
}

impl ShapeValidator {
    pub fn new(patterns: &[impl AsRef<str>]) -> Result<Self, ShapeError> {
        Self::with_case_sensitivity(patterns, true)
    }

    pub fn with_case_sensitivity(
        patterns: &[impl AsRef<str>],
        case_sensitive: bool,
    ) -> Result<Self, ShapeError> {
        if patterns.is_empty() {
            return Err(ShapeError::MissingPattern);
        }
        let regexes = patterns
            .iter()
            .map(|pattern| {
                get_memoized_regex(pattern.as_ref(), case_sensitive, validate_and_create_regex)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            patterns: patterns.iter().map(|p| p.as_ref().to_owned()).collect(),
            regexes,
            case_sensitive,
        })
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn is_valid(&self, text: &str) -> bool {
        self.regexes.iter().any(|regex| regex.is_match(text))
    }

    /// The capture groups of the first matching pattern. Groups that did not take part in the
    /// match are `None`.
    pub fn match_groups<'t>(&self, text: &'t str) -> Option<Vec<Option<&'t str>>> {
        self.regexes.iter().find_map(|regex| {
            let captures = regex.captures(text)?;
            if captures.len() == 1 {
                return Some(vec![captures.get(0).map(|m| m.as_str())]);
            }
            Some(
                captures
                    .iter()
                    .skip(1)
                    .map(|group| group.map(|m| m.as_str()))
                    .collect(),
            )
        })
    }

    /// The canonical form of `text`, or `None` when no pattern matches.
    pub fn validate(&self, text: &str) -> Option<String> {
        self.match_groups(text)
            .map(|groups| groups.into_iter().flatten().collect())
    }
}

impl PartialEq for ShapeValidator {
    fn eq(&self, other: &Self) -> bool {
        self.patterns == other.patterns && self.case_sensitive == other.case_sensitive
    }
}

impl Eq for ShapeValidator {}
