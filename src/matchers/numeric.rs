//! Matchers over ordered and numeric values.

use std::fmt;
use std::ops::Rem;

use crate::assertion::{Assertion, Not};
use crate::result::TestResult;

// ---------------------------------------------------------------------------
// Ordering comparisons
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
enum Op {
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
}

impl Op {
    fn holds<T: PartialOrd>(self, actual: &T, bound: &T) -> bool {
        match self {
            Op::Less => actual < bound,
            Op::LessOrEqual => actual <= bound,
            Op::Greater => actual > bound,
            Op::GreaterOrEqual => actual >= bound,
        }
    }

    fn failure_phrase(self) -> &'static str {
        match self {
            Op::Less => "is not less than",
            Op::LessOrEqual => "is not less than or equal to",
            Op::Greater => "is not greater than",
            Op::GreaterOrEqual => "is not greater than or equal to",
        }
    }

    fn negated_phrase(self) -> &'static str {
        match self {
            Op::Less => "is less than",
            Op::LessOrEqual => "is less than or equal to",
            Op::Greater => "is greater than",
            Op::GreaterOrEqual => "is greater than or equal to",
        }
    }
}

/// An ordering comparison against a fixed bound.
#[derive(Debug, Clone)]
pub struct Comparison<T> {
    bound: T,
    op: Op,
}

impl<T> Assertion<T> for Comparison<T>
where
    T: PartialOrd + fmt::Debug + Clone + 'static,
{
    fn test(&self, actual: &T) -> TestResult {
        TestResult::relation(
            self.op.holds(actual, &self.bound),
            actual.clone(),
            self.bound.clone(),
            self.op.failure_phrase(),
            self.op.negated_phrase(),
        )
    }
}

/// Passes when the subject is strictly below `bound`.
pub fn is_less_than<T>(bound: T) -> Comparison<T> {
    Comparison {
        bound,
        op: Op::Less,
    }
}

/// Passes when the subject is at most `bound`.
pub fn is_less_than_or_equal_to<T>(bound: T) -> Comparison<T> {
    Comparison {
        bound,
        op: Op::LessOrEqual,
    }
}

/// Passes when the subject is strictly above `bound`.
pub fn is_greater_than<T>(bound: T) -> Comparison<T> {
    Comparison {
        bound,
        op: Op::Greater,
    }
}

/// Passes when the subject is at least `bound`.
pub fn is_greater_than_or_equal_to<T>(bound: T) -> Comparison<T> {
    Comparison {
        bound,
        op: Op::GreaterOrEqual,
    }
}

// ---------------------------------------------------------------------------
// Divisibility
// ---------------------------------------------------------------------------

/// Exact divisibility by a fixed base.
#[derive(Debug, Clone)]
pub struct IsMultipleOf<T> {
    base: T,
}

impl<T> Assertion<T> for IsMultipleOf<T>
where
    T: Copy + Rem<Output = T> + Default + PartialEq + fmt::Debug + 'static,
{
    fn test(&self, actual: &T) -> TestResult {
        TestResult::relation(
            *actual % self.base == T::default(),
            *actual,
            self.base,
            "is not a multiple of",
            "is a multiple of",
        )
    }
}

/// Passes when the subject divides evenly by `base`.
pub fn is_multiple_of<T>(base: T) -> IsMultipleOf<T> {
    IsMultipleOf { base }
}

/// Alias of [`is_multiple_of`].
pub fn is_divisible_by<T>(base: T) -> IsMultipleOf<T> {
    is_multiple_of(base)
}

/// Passes when the subject leaves a remainder when divided by `base`.
pub fn is_not_multiple_of<T>(base: T) -> Not<IsMultipleOf<T>> {
    Not::new(is_multiple_of(base))
}

// ---------------------------------------------------------------------------
// Approximate equality
// ---------------------------------------------------------------------------

/// Floating-point closeness within an absolute tolerance.
///
/// The default tolerance is `1e-8`; use [`within`](IsCloseTo::within) to
/// widen or tighten it.
#[derive(Debug, Clone, Copy)]
pub struct IsCloseTo {
    expected: f64,
    delta: f64,
}

impl IsCloseTo {
    /// Replace the tolerance.
    pub fn within(self, delta: f64) -> Self {
        IsCloseTo { delta, ..self }
    }
}

impl Assertion<f64> for IsCloseTo {
    fn test(&self, actual: &f64) -> TestResult {
        let subject = *actual;
        let expected = self.expected;
        let delta = self.delta;
        TestResult::new(
            (subject - expected).abs() <= delta,
            message!("{} is not within {} \u{b1} {}", subject, expected, delta),
            message!("{} is within {} \u{b1} {}", subject, expected, delta),
        )
    }
}

/// Passes when the subject is within the tolerance of `expected`.
pub fn is_close_to(expected: f64) -> IsCloseTo {
    IsCloseTo {
        expected,
        delta: 1e-8,
    }
}

/// Passes when the subject is outside the tolerance of `expected`.
pub fn is_not_close_to(expected: f64) -> Not<IsCloseTo> {
    Not::new(is_close_to(expected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tester::assert_that;

    #[test]
    fn strict_comparisons() {
        assert_that(&5, is_less_than(6));
        assert_that(&5, is_greater_than(4));
        assert!(is_less_than(5).test(&5).failed());
        assert!(is_greater_than(5).test(&5).failed());
    }

    #[test]
    fn inclusive_comparisons_admit_the_bound() {
        assert_that(&5, is_less_than_or_equal_to(5));
        assert_that(&5, is_greater_than_or_equal_to(5));
    }

    #[test]
    fn comparison_messages_name_both_operands() {
        let result = is_greater_than(10).test(&7);
        assert_eq!(result.failure_message().render(), "7 is not greater than 10");

        let result = is_less_than(10).test(&7);
        assert_eq!(result.negated_message().render(), "7 is less than 10");
    }

    #[test]
    fn comparisons_work_over_floats() {
        assert_that(&1.5, is_less_than(2.0));
    }

    #[test]
    fn divisibility() {
        assert_that(&12, is_multiple_of(3));
        assert_that(&12, is_divisible_by(4));
        assert_that(&13, is_not_multiple_of(3));
        assert_eq!(
            is_multiple_of(5).test(&12).failure_message().render(),
            "12 is not a multiple of 5"
        );
    }

    #[test]
    fn closeness_defaults_to_a_tight_tolerance() {
        assert_that(&(0.1 + 0.2), is_close_to(0.3));
        assert!(is_close_to(0.3).test(&0.31).failed());
    }

    #[test]
    fn closeness_tolerance_is_adjustable() {
        assert_that(&0.31, is_close_to(0.3).within(0.05));
        assert_that(&0.4, is_not_close_to(0.3).negate().within(0.15));
    }

    #[test]
    fn closeness_messages_show_the_tolerance() {
        let result = is_close_to(0.3).within(0.01).test(&0.5);
        assert_eq!(
            result.failure_message().render(),
            "0.5 is not within 0.3 \u{b1} 0.01"
        );
    }
}
