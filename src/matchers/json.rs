//! Matchers over `serde_json::Value` subjects.

use glob::Pattern;
use regex::Regex;
use serde_json::Value;

use crate::assertion::{Assertion, Not};
use crate::result::TestResult;

/// Presence of a named field on a JSON object.
#[derive(Debug, Clone)]
pub struct HasField {
    name: String,
}

impl Assertion<Value> for HasField {
    fn test(&self, actual: &Value) -> TestResult {
        let present = actual.get(&self.name).is_some();
        let failed_name = self.name.clone();
        let passed_name = self.name.clone();
        TestResult::new(
            present,
            message!("has no field {:?}", failed_name),
            message!("has field {:?}", passed_name),
        )
    }
}

/// Passes when the JSON value is an object with a field called `name`.
pub fn has_field(name: impl Into<String>) -> HasField {
    HasField { name: name.into() }
}

/// A named field whose stringified value matches a pattern.
///
/// The pattern is tried as a glob first, then as a regex, then as an exact
/// string, so `"v*"`, `"^v\\d+$"`, and `"v1"` all work without the caller
/// declaring which kind they meant.
#[derive(Debug, Clone)]
pub struct FieldMatches {
    name: String,
    pattern: String,
}

impl Assertion<Value> for FieldMatches {
    fn test(&self, actual: &Value) -> TestResult {
        let name = self.name.clone();
        let pattern = self.pattern.clone();
        match actual.get(&self.name) {
            None => {
                let matched_name = self.name.clone();
                let matched_pattern = self.pattern.clone();
                TestResult::new(
                    false,
                    message!("has no field {:?}", name),
                    message!("field {:?} matches {:?}", matched_name, matched_pattern),
                )
            }
            Some(field) => {
                let rendered = stringify(field);
                let passed = pattern_matches(&self.pattern, &rendered);
                let matched_name = self.name.clone();
                let matched_value = rendered.clone();
                let matched_pattern = self.pattern.clone();
                TestResult::new(
                    passed,
                    message!(
                        "field {:?} is {:?}, which does not match {:?}",
                        name,
                        rendered,
                        pattern
                    ),
                    message!(
                        "field {:?} is {:?}, which matches {:?}",
                        matched_name,
                        matched_value,
                        matched_pattern
                    ),
                )
            }
        }
    }
}

/// Passes when the object's `name` field, rendered as a string, matches
/// `pattern` (glob, regex, or exact text).
pub fn field_matches(name: impl Into<String>, pattern: impl Into<String>) -> FieldMatches {
    FieldMatches {
        name: name.into(),
        pattern: pattern.into(),
    }
}

/// Passes when the object lacks the field or its value does not match.
pub fn field_does_not_match(
    name: impl Into<String>,
    pattern: impl Into<String>,
) -> Not<FieldMatches> {
    Not::new(field_matches(name, pattern))
}

/// Render a JSON scalar the way a caller would write it: strings without
/// their quotes, everything else in serialized form.
fn stringify(field: &Value) -> String {
    match field {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Whole-string match, trying glob syntax first, then regex, then literal
/// equality.
fn pattern_matches(pattern: &str, actual: &str) -> bool {
    if let Ok(glob) = Pattern::new(pattern) {
        if glob.matches(actual) {
            return true;
        }
    }
    if let Ok(regex) = Regex::new(&format!("^{pattern}$")) {
        if regex.is_match(actual) {
            return true;
        }
    }
    pattern == actual
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tester::assert_that;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "name": "veracity",
            "version": "1.4.2",
            "checks": 17,
        })
    }

    #[test]
    fn field_presence() {
        assert_that(&sample(), has_field("name"));
        assert!(has_field("missing").test(&sample()).failed());
        assert_eq!(
            has_field("missing").test(&sample()).failure_message().render(),
            "has no field \"missing\""
        );
    }

    #[test]
    fn exact_field_text() {
        assert_that(&sample(), field_matches("name", "veracity"));
        assert_that(&sample(), field_does_not_match("name", "other"));
    }

    #[test]
    fn glob_field_patterns() {
        assert_that(&sample(), field_matches("version", "1.*"));
        assert!(field_matches("version", "2.*").test(&sample()).failed());
    }

    #[test]
    fn regex_field_patterns() {
        assert_that(&sample(), field_matches("version", r"\d+\.\d+\.\d+"));
    }

    #[test]
    fn non_string_fields_match_their_serialized_form() {
        assert_that(&sample(), field_matches("checks", "17"));
        assert_that(&sample(), field_matches("checks", r"\d+"));
    }

    #[test]
    fn missing_field_fails_the_pattern() {
        let result = field_matches("missing", "*").test(&sample());
        assert!(result.failed());
        assert_eq!(result.failure_message().render(), "has no field \"missing\"");
    }

    #[test]
    fn mismatch_text_shows_value_and_pattern() {
        let result = field_matches("name", "other").test(&sample());
        assert_eq!(
            result.failure_message().render(),
            "field \"name\" is \"veracity\", which does not match \"other\""
        );
    }
}
