//! Bridging failed results into Rust test failures.
//!
//! The core algebra never raises for a failed test; failure is data. This
//! module is the one place that converts: a [`Tester`] runs an assertion and
//! panics with the rendered failure text, which Rust's test harness reports
//! like any other failed assertion.

use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::assertion::{Assertion, BoxAssertion};
use crate::message::{describe, indent};
use crate::result::TestResult;

/// Runs assertions and raises test failures.
///
/// A unit struct rather than free functions so a test suite can alias its
/// own instance under preferred wording (`let check = Tester;`).
///
/// # Example
///
/// ```rust
/// use veracity::Tester;
/// use veracity::matchers::equals;
///
/// let test_that = Tester;
/// test_that.that(&(2 + 2), equals(4));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Tester;

impl Tester {
    /// Evaluate `assertion` against `subject`; panic with the failure
    /// explanation if it does not hold.
    pub fn that<T, A>(&self, subject: &T, assertion: A)
    where
        T: fmt::Debug + ?Sized,
        A: Assertion<T>,
    {
        fail_if_failed(subject, assertion.test(subject));
    }

    /// Like [`that`](Tester::that), but on failure panic with a
    /// caller-supplied message built from the subject instead of the
    /// assertion's own explanation.
    pub fn that_with_message<T, A, F>(&self, subject: &T, assertion: A, message: F)
    where
        T: ?Sized,
        A: Assertion<T>,
        F: FnOnce(&T) -> String,
    {
        if assertion.test(subject).failed() {
            panic!("assertion failed: {}", message(subject));
        }
    }

    /// Require every assertion in the list to hold.
    ///
    /// # Panics
    ///
    /// Panics on failure, or immediately if `assertions` is empty (nothing
    /// would be tested).
    pub fn all<T>(&self, subject: &T, assertions: &[BoxAssertion<T>])
    where
        T: fmt::Debug + ?Sized,
    {
        fail_if_failed(subject, combined(subject, assertions, TestResult::all_of));
    }

    /// Require at least one assertion in the list to hold.
    ///
    /// # Panics
    ///
    /// Panics on failure, or immediately if `assertions` is empty.
    pub fn any<T>(&self, subject: &T, assertions: &[BoxAssertion<T>])
    where
        T: fmt::Debug + ?Sized,
    {
        fail_if_failed(subject, combined(subject, assertions, TestResult::any_of));
    }

    /// Require no assertion in the list to hold.
    ///
    /// # Panics
    ///
    /// Panics on failure, or immediately if `assertions` is empty.
    pub fn none<T>(&self, subject: &T, assertions: &[BoxAssertion<T>])
    where
        T: fmt::Debug + ?Sized,
    {
        fail_if_failed(subject, combined(subject, assertions, TestResult::none_of));
    }
}

fn combined<T: ?Sized>(
    subject: &T,
    assertions: &[BoxAssertion<T>],
    aggregate: fn(Vec<TestResult>) -> TestResult,
) -> TestResult {
    aggregate(
        assertions
            .iter()
            .map(|assertion| assertion.test(subject))
            .collect(),
    )
}

fn fail_if_failed<T: fmt::Debug + ?Sized>(subject: &T, result: TestResult) {
    if result.failed() {
        panic!(
            "assertion failed for {}:\n{}",
            describe(subject),
            indent(&result.failure_message().render())
        );
    }
}

/// Evaluate `assertion` against `subject`; panic with the failure
/// explanation if it does not hold.
///
/// # Example
///
/// ```rust
/// use veracity::assert_that;
/// use veracity::matchers::starts_with;
///
/// assert_that("veracity", starts_with("ver"));
/// ```
pub fn assert_that<T, A>(subject: &T, assertion: A)
where
    T: fmt::Debug + ?Sized,
    A: Assertion<T>,
{
    Tester.that(subject, assertion);
}

/// Run `operation` and panic if it completes without panicking.
///
/// The counterpart of asserting that code raises: useful when a test needs
/// to check that some call rejects its input.
pub fn assert_panics<F: FnOnce()>(operation: F) {
    if catch_unwind(AssertUnwindSafe(operation)).is_ok() {
        panic!("code was expected to panic but completed normally");
    }
}
