//! Matchers over string subjects, including regex and glob patterns.

use glob::Pattern;
use regex::Regex;

use crate::assertion::{Assertion, Not};
use crate::result::TestResult;

/// Prefix match against a fixed substring.
#[derive(Debug, Clone)]
pub struct StartsWith {
    prefix: String,
}

impl Assertion<str> for StartsWith {
    fn test(&self, actual: &str) -> TestResult {
        TestResult::relation(
            actual.starts_with(&self.prefix),
            actual.to_owned(),
            self.prefix.clone(),
            "does not start with",
            "starts with",
        )
    }
}

/// Passes when the subject starts with `prefix`.
pub fn starts_with(prefix: impl Into<String>) -> StartsWith {
    StartsWith {
        prefix: prefix.into(),
    }
}

/// Passes when the subject does not start with `prefix`.
pub fn does_not_start_with(prefix: impl Into<String>) -> Not<StartsWith> {
    Not::new(starts_with(prefix))
}

/// Suffix match against a fixed substring.
#[derive(Debug, Clone)]
pub struct EndsWith {
    suffix: String,
}

impl Assertion<str> for EndsWith {
    fn test(&self, actual: &str) -> TestResult {
        TestResult::relation(
            actual.ends_with(&self.suffix),
            actual.to_owned(),
            self.suffix.clone(),
            "does not end with",
            "ends with",
        )
    }
}

/// Passes when the subject ends with `suffix`.
pub fn ends_with(suffix: impl Into<String>) -> EndsWith {
    EndsWith {
        suffix: suffix.into(),
    }
}

/// Passes when the subject does not end with `suffix`.
pub fn does_not_end_with(suffix: impl Into<String>) -> Not<EndsWith> {
    Not::new(ends_with(suffix))
}

/// Substring containment anywhere in the subject.
#[derive(Debug, Clone)]
pub struct ContainsSubstring {
    needle: String,
}

impl Assertion<str> for ContainsSubstring {
    fn test(&self, actual: &str) -> TestResult {
        TestResult::relation(
            actual.contains(&self.needle),
            actual.to_owned(),
            self.needle.clone(),
            "does not contain",
            "contains",
        )
    }
}

/// Passes when the subject contains `needle` anywhere.
pub fn contains_string(needle: impl Into<String>) -> ContainsSubstring {
    ContainsSubstring {
        needle: needle.into(),
    }
}

/// Passes when the subject contains `needle` nowhere.
pub fn does_not_contain_string(needle: impl Into<String>) -> Not<ContainsSubstring> {
    Not::new(contains_string(needle))
}

/// Regular-expression match anywhere in the subject.
#[derive(Debug, Clone)]
pub struct MatchesRegex {
    regex: Regex,
}

impl Assertion<str> for MatchesRegex {
    fn test(&self, actual: &str) -> TestResult {
        TestResult::relation(
            self.regex.is_match(actual),
            actual.to_owned(),
            self.regex.as_str().to_owned(),
            "does not match",
            "matches",
        )
    }
}

/// Passes when the subject matches `pattern` anywhere. Anchor with `^`/`$`
/// for a whole-string match.
///
/// # Panics
///
/// Panics if `pattern` is not a valid regular expression.
pub fn matches_regex(pattern: &str) -> MatchesRegex {
    let regex =
        Regex::new(pattern).unwrap_or_else(|err| panic!("invalid regex {pattern:?}: {err}"));
    MatchesRegex { regex }
}

/// Whole-string glob match (`*`, `?`, `[...]`).
#[derive(Debug, Clone)]
pub struct MatchesGlob {
    pattern: Pattern,
}

impl Assertion<str> for MatchesGlob {
    fn test(&self, actual: &str) -> TestResult {
        TestResult::relation(
            self.pattern.matches(actual),
            actual.to_owned(),
            self.pattern.as_str().to_owned(),
            "does not match glob",
            "matches glob",
        )
    }
}

/// Passes when the whole subject matches the glob `pattern`.
///
/// # Panics
///
/// Panics if `pattern` is not a valid glob.
pub fn matches_glob(pattern: &str) -> MatchesGlob {
    let pattern =
        Pattern::new(pattern).unwrap_or_else(|err| panic!("invalid glob {pattern:?}: {err}"));
    MatchesGlob { pattern }
}
