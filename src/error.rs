//! Error types for malformed assertion composition.
//!
//! A *failed* assertion is never an error — it is an ordinary
//! [`TestResult`](crate::TestResult) carried as data. The errors here cover
//! configuration mistakes only: compositions that can never be evaluated
//! meaningfully and are rejected at construction time.

use thiserror::Error;

/// A configuration error raised while building an assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An `all_of`/`any_of`/`none_of` combinator was given no children.
    #[error("combinator requires at least one child assertion")]
    EmptyCombinator,

    /// Ordered containment was asked to search for an empty needle.
    #[error("ordered containment requires a non-empty needle")]
    EmptyNeedle,
}
