//! # veracity
//!
//! A composable assertion library in the Hamcrest style.
//!
//! An [`Assertion`] tests a subject and produces a [`TestResult`]: a verdict
//! plus two lazily rendered explanations, one for failure and one for use
//! under negation. Failure is plain data until a [`Tester`] (or
//! [`assert_that`]) turns it into a test panic, so assertions compose freely
//! before anything is reported.
//!
//! ## Quick start
//!
//! ```rust
//! use veracity::{assert_that, Assertion};
//! use veracity::matchers::{contains, is_greater_than, is_less_than, starts_with};
//!
//! assert_that(&7, is_greater_than(0).and(is_less_than(10)));
//! assert_that("veracity", starts_with("ver"));
//! assert_that(&[1, 2, 3][..], contains(2).negate().negate());
//! ```
//!
//! ## Combining and negating
//!
//! Combinators are plain boolean algebra with observable structure:
//! [`and`](Assertion::and) and [`or`](Assertion::or) flatten into a single
//! [`AllOf`] / [`AnyOf`] rather than nesting, and
//! [`negate`](Assertion::negate) is an involution, so double negation hands
//! back the original assertion. Negating a disjunction reports like a
//! none-of, and negating that reports like the disjunction again.
//!
//! ```rust
//! use veracity::{any_of, assert_that, Assertion};
//! use veracity::matchers::{equals, is_multiple_of};
//!
//! // Passes when 7 is neither of these.
//! assert_that(&7, any_of![equals(0), is_multiple_of(2)].negate());
//! ```
//!
//! ## Writing a matcher
//!
//! A matcher is any type implementing [`Assertion`]; the combinators come
//! for free. Build results with [`TestResult::new`] and the [`message!`]
//! macro, which defers formatting until some caller actually renders the
//! text.
//!
//! ```rust
//! use veracity::{assert_that, Assertion, TestResult, message};
//!
//! struct IsAscii;
//!
//! impl Assertion<str> for IsAscii {
//!     fn test(&self, actual: &str) -> TestResult {
//!         let subject = actual.to_owned();
//!         let shared = subject.clone();
//!         TestResult::new(
//!             actual.is_ascii(),
//!             message!("{:?} is not pure ASCII", subject),
//!             message!("{:?} is pure ASCII", shared),
//!         )
//!     }
//! }
//!
//! assert_that("plain", IsAscii);
//! ```

mod error;
#[macro_use]
mod message;
mod result;
mod assertion;
mod sequence;
mod tester;

pub mod matchers;

pub use assertion::{all_of, any_of, none_of, AllOf, AnyOf, Assertion, BoxAssertion, Not};
pub use error::Error;
pub use message::{describe, indent, Message};
pub use result::{negate, TestResult};
pub use sequence::{contains_in_order, try_contains_in_order};
pub use tester::{assert_panics, assert_that, Tester};
