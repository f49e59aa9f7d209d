//! Matchers over arbitrary values: equality, rendered forms, booleans,
//! options, lengths, and named predicates.

use std::collections::HashMap;
use std::fmt;

use crate::assertion::{Assertion, Not};
use crate::message::Message;
use crate::result::TestResult;

/// Equality against a bound value.
#[derive(Debug, Clone)]
pub struct IsEqualTo<T> {
    expected: T,
}

impl<T> Assertion<T> for IsEqualTo<T>
where
    T: PartialEq + fmt::Debug + Clone + 'static,
{
    fn test(&self, actual: &T) -> TestResult {
        TestResult::relation(
            actual == &self.expected,
            actual.clone(),
            self.expected.clone(),
            "is not equal to",
            "is equal to",
        )
    }
}

/// Passes when the subject equals `expected`.
pub fn equals<T>(expected: T) -> IsEqualTo<T> {
    IsEqualTo { expected }
}

/// Alias of [`equals`] for callers who prefer the longer wording.
pub fn is_equal_to<T>(expected: T) -> IsEqualTo<T> {
    equals(expected)
}

/// Passes when the subject differs from `expected`.
pub fn is_not_equal_to<T>(expected: T) -> Not<IsEqualTo<T>> {
    Not::new(equals(expected))
}

/// Compares the subject's `Display` rendering against an expected string.
#[derive(Debug, Clone)]
pub struct HasDisplay {
    expected: String,
}

impl<T: fmt::Display + ?Sized> Assertion<T> for HasDisplay {
    fn test(&self, actual: &T) -> TestResult {
        let rendered = actual.to_string();
        let passed = rendered == self.expected;
        TestResult::relation(
            passed,
            rendered,
            self.expected.clone(),
            "does not display as",
            "displays as",
        )
    }
}

/// Passes when `format!("{subject}")` equals `expected`.
pub fn has_display(expected: impl Into<String>) -> HasDisplay {
    HasDisplay {
        expected: expected.into(),
    }
}

/// Compares the subject's `Debug` rendering against an expected string.
#[derive(Debug, Clone)]
pub struct HasDebug {
    expected: String,
}

impl<T: fmt::Debug + ?Sized> Assertion<T> for HasDebug {
    fn test(&self, actual: &T) -> TestResult {
        let rendered = format!("{actual:?}");
        let passed = rendered == self.expected;
        TestResult::relation(
            passed,
            rendered,
            self.expected.clone(),
            "does not debug-print as",
            "debug-prints as",
        )
    }
}

/// Passes when `format!("{subject:?}")` equals `expected`.
pub fn has_debug(expected: impl Into<String>) -> HasDebug {
    HasDebug {
        expected: expected.into(),
    }
}

/// Truth of a boolean subject.
#[derive(Debug, Clone, Copy)]
pub struct IsTrue;

impl Assertion<bool> for IsTrue {
    fn test(&self, actual: &bool) -> TestResult {
        TestResult::new(*actual, Message::fixed("is false"), Message::fixed("is true"))
    }
}

/// Passes when the subject is `true`.
pub fn is_true() -> IsTrue {
    IsTrue
}

/// Passes when the subject is `false`.
pub fn is_false() -> Not<IsTrue> {
    Not::new(IsTrue)
}

/// Presence of an `Option` subject.
#[derive(Debug, Clone, Copy)]
pub struct IsSome;

impl<T> Assertion<Option<T>> for IsSome
where
    T: fmt::Debug + Clone + 'static,
{
    fn test(&self, actual: &Option<T>) -> TestResult {
        let value = actual.clone();
        TestResult::new(
            actual.is_some(),
            Message::fixed("is None"),
            message!("is {:?}", value),
        )
    }
}

/// Passes when the subject is `Some(_)`.
pub fn is_some() -> IsSome {
    IsSome
}

/// Absence of an `Option` subject.
#[derive(Debug, Clone, Copy)]
pub struct IsNone;

impl<T> Assertion<Option<T>> for IsNone
where
    T: fmt::Debug + Clone + 'static,
{
    fn test(&self, actual: &Option<T>) -> TestResult {
        let value = actual.clone();
        TestResult::new(
            actual.is_none(),
            message!("is {:?} rather than None", value),
            Message::fixed("is None"),
        )
    }
}

/// Passes when the subject is `None`.
pub fn is_none() -> IsNone {
    IsNone
}

/// A named predicate function lifted into an assertion.
///
/// The description appears in both explanations, so pick wording that reads
/// as a property: `satisfies("is even", |n: &i64| n % 2 == 0)`.
#[derive(Debug, Clone)]
pub struct Satisfies<F> {
    description: String,
    predicate: F,
}

impl<T, F> Assertion<T> for Satisfies<F>
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    fn test(&self, actual: &T) -> TestResult {
        let failed_description = self.description.clone();
        let passed_description = self.description.clone();
        TestResult::new(
            (self.predicate)(actual),
            message!("does not satisfy {:?}", failed_description),
            message!("satisfies {:?}", passed_description),
        )
    }
}

/// Lift a plain predicate function into an assertion.
pub fn satisfies<T: ?Sized, F: Fn(&T) -> bool>(
    description: impl Into<String>,
    predicate: F,
) -> Satisfies<F> {
    Satisfies {
        description: description.into(),
        predicate,
    }
}

/// Subjects with a measurable length, for [`has_length`] and [`is_empty`].
pub trait Len {
    fn length(&self) -> usize;
}

impl Len for str {
    fn length(&self) -> usize {
        self.len()
    }
}

impl Len for String {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<E> Len for [E] {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<E> Len for Vec<E> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Len for HashMap<K, V, S> {
    fn length(&self) -> usize {
        self.len()
    }
}

/// Exact length of any [`Len`] subject.
#[derive(Debug, Clone, Copy)]
pub struct HasLength {
    expected: usize,
}

impl<T: Len + ?Sized> Assertion<T> for HasLength {
    fn test(&self, actual: &T) -> TestResult {
        let actual_length = actual.length();
        let expected = self.expected;
        TestResult::new(
            actual_length == expected,
            message!("length is {} instead of {}", actual_length, expected),
            message!("length is {}", actual_length),
        )
    }
}

/// Passes when the subject's length equals `expected`.
pub fn has_length(expected: usize) -> HasLength {
    HasLength { expected }
}

/// Passes when the subject's length differs from `expected`.
pub fn does_not_have_length(expected: usize) -> Not<HasLength> {
    Not::new(has_length(expected))
}

/// Emptiness of any [`Len`] subject.
#[derive(Debug, Clone, Copy)]
pub struct IsEmpty;

impl<T: Len + ?Sized> Assertion<T> for IsEmpty {
    fn test(&self, actual: &T) -> TestResult {
        TestResult::new(
            actual.length() == 0,
            Message::fixed("is not empty"),
            Message::fixed("is empty"),
        )
    }
}

/// Passes when the subject has length zero.
pub fn is_empty() -> IsEmpty {
    IsEmpty
}

/// Passes when the subject has at least one element.
pub fn is_not_empty() -> Not<IsEmpty> {
    Not::new(IsEmpty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tester::assert_that;

    #[test]
    fn equality_reports_both_operands() {
        let result = equals(5).test(&7);
        assert!(result.failed());
        assert_eq!(result.failure_message().render(), "7 is not equal to 5");

        let result = equals(5).test(&5);
        assert!(result.passed());
        assert_eq!(result.negated_message().render(), "5 is equal to 5");
    }

    #[test]
    fn inequality_is_the_negation_of_equality() {
        assert_that(&7, is_not_equal_to(5));
        assert!(is_not_equal_to(5).test(&5).failed());
    }

    #[test]
    fn display_and_debug_forms() {
        assert_that(&42, has_display("42"));
        assert_that("text", has_debug("\"text\""));
        assert!(has_display("41").test(&42).failed());
    }

    #[test]
    fn boolean_subjects() {
        assert_that(&true, is_true());
        assert_that(&false, is_false());
        assert_eq!(is_true().test(&false).failure_message().render(), "is false");
    }

    #[test]
    fn option_subjects() {
        assert_that(&Some(3), is_some());
        assert_that(&None::<i32>, is_none());

        let result = is_none().test(&Some(3));
        assert_eq!(
            result.failure_message().render(),
            "is Some(3) rather than None"
        );
    }

    #[test]
    fn named_predicates_use_their_description() {
        let even = satisfies("is even", |n: &i64| n % 2 == 0);
        assert_that(&4, &even);
        assert_eq!(
            even.test(&3).failure_message().render(),
            "does not satisfy \"is even\""
        );
    }

    #[test]
    fn lengths_span_strings_slices_and_maps() {
        assert_that("four", has_length(4));
        assert_that(&[1, 2, 3][..], has_length(3));
        assert_that(&vec![1, 2], does_not_have_length(3));

        let mut map = HashMap::new();
        map.insert("k", 1);
        assert_that(&map, has_length(1));
    }

    #[test]
    fn emptiness() {
        assert_that("", is_empty());
        assert_that("x", is_not_empty());
        assert_eq!(
            is_empty().test("x").failure_message().render(),
            "is not empty"
        );
    }
}
