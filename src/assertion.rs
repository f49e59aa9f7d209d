//! The assertion trait and its combinators.
//!
//! An [`Assertion`] is a reusable, stateless predicate over a subject type:
//! construction captures the values to compare against, and
//! [`test`](Assertion::test) evaluates one subject without retaining it, so a
//! single instance can be reused across subjects and shared across threads.
//!
//! Combination is plain boolean logic with observable structure:
//!
//! - [`and`](Assertion::and) / [`or`](Assertion::or) flatten when either
//!   operand is already the matching combinator, so `(a and b) and c` and
//!   `a and (b and c)` build the same three-child [`AllOf`].
//! - `and` across an [`AnyOf`] (and vice versa) nests; AND/OR do not
//!   distribute.
//! - [`negate`](Assertion::negate) is an involution enforced at construction:
//!   negating a [`Not`] hands back the inner assertion, so a double wrapper
//!   cannot be built.

use crate::error::Error;
use crate::result::TestResult;

/// A boxed, type-erased assertion, shareable across threads.
pub type BoxAssertion<T> = Box<dyn Assertion<T> + Send + Sync>;

/// A reusable predicate over subjects of type `T`.
pub trait Assertion<T: ?Sized> {
    /// Evaluate one subject and report the outcome.
    ///
    /// Implementations must not retain `actual` or mutate shared state;
    /// testing the same subject twice yields results with the same verdict
    /// and the same rendered text.
    fn test(&self, actual: &T) -> TestResult;

    /// Require both this assertion and `other` to hold.
    ///
    /// If either operand is already an [`AllOf`], its children are absorbed
    /// rather than nested.
    fn and<B>(self, other: B) -> AllOf<T>
    where
        Self: Sized + Send + Sync + 'static,
        B: Assertion<T> + Send + Sync + 'static,
        T: 'static,
    {
        let mut all = self.into_all_of();
        all.children.extend(other.into_all_of().children);
        all
    }

    /// Require this assertion or `other` (or both) to hold.
    ///
    /// If either operand is already an [`AnyOf`], its children are absorbed
    /// rather than nested.
    fn or<B>(self, other: B) -> AnyOf<T>
    where
        Self: Sized + Send + Sync + 'static,
        B: Assertion<T> + Send + Sync + 'static,
        T: 'static,
    {
        let mut any = self.into_any_of();
        any.children.extend(other.into_any_of().children);
        any
    }

    /// The logical negation of this assertion.
    fn negate(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not { inner: self }
    }

    /// View this assertion as an [`AllOf`]; overridden by `AllOf` itself so
    /// that [`and`](Assertion::and) flattens from both sides.
    fn into_all_of(self) -> AllOf<T>
    where
        Self: Sized + Send + Sync + 'static,
        T: 'static,
    {
        AllOf {
            children: vec![Box::new(self)],
        }
    }

    /// View this assertion as an [`AnyOf`]; overridden by `AnyOf` itself so
    /// that [`or`](Assertion::or) flattens from both sides.
    fn into_any_of(self) -> AnyOf<T>
    where
        Self: Sized + Send + Sync + 'static,
        T: 'static,
    {
        AnyOf {
            children: vec![Box::new(self)],
        }
    }
}

impl<T: ?Sized, A: Assertion<T> + ?Sized> Assertion<T> for &A {
    fn test(&self, actual: &T) -> TestResult {
        (**self).test(actual)
    }
}

impl<T: ?Sized, A: Assertion<T> + ?Sized> Assertion<T> for Box<A> {
    fn test(&self, actual: &T) -> TestResult {
        (**self).test(actual)
    }
}

/// Conjunction: passes iff every child passes.
///
/// Every child is evaluated eagerly, in list order, even after one has
/// already failed — a correct `AllOf` explanation needs every child's result,
/// including the passing ones.
pub struct AllOf<T: ?Sized> {
    children: Vec<BoxAssertion<T>>,
}

impl<T: ?Sized> AllOf<T> {
    /// Build from an ordered child list.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. Use [`try_new`](AllOf::try_new) to get
    /// an [`Error`] instead.
    pub fn new(children: Vec<BoxAssertion<T>>) -> Self {
        Self::try_new(children).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Fallible form of [`new`](AllOf::new).
    pub fn try_new(children: Vec<BoxAssertion<T>>) -> Result<Self, Error> {
        if children.is_empty() {
            return Err(Error::EmptyCombinator);
        }
        Ok(AllOf { children })
    }

    /// Append a child in place, extending this combinator rather than
    /// nesting a new one around it.
    pub fn push(&mut self, assertion: impl Assertion<T> + Send + Sync + 'static)
    where
        T: 'static,
    {
        self.children.push(Box::new(assertion));
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Always false; the child list is non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<T: ?Sized> Assertion<T> for AllOf<T> {
    fn test(&self, actual: &T) -> TestResult {
        // No short-circuit: every child result is part of the explanation.
        TestResult::all_of(self.children.iter().map(|child| child.test(actual)).collect())
    }

    fn into_all_of(self) -> AllOf<T>
    where
        Self: Sized + Send + Sync + 'static,
        T: 'static,
    {
        self
    }
}

/// Disjunction: passes iff at least one child passes.
///
/// Children are evaluated eagerly, in list order, so a failing `AnyOf` can
/// still enumerate every reason.
pub struct AnyOf<T: ?Sized> {
    children: Vec<BoxAssertion<T>>,
}

impl<T: ?Sized> AnyOf<T> {
    /// Build from an ordered child list.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. Use [`try_new`](AnyOf::try_new) to get
    /// an [`Error`] instead.
    pub fn new(children: Vec<BoxAssertion<T>>) -> Self {
        Self::try_new(children).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Fallible form of [`new`](AnyOf::new).
    pub fn try_new(children: Vec<BoxAssertion<T>>) -> Result<Self, Error> {
        if children.is_empty() {
            return Err(Error::EmptyCombinator);
        }
        Ok(AnyOf { children })
    }

    /// Append a child in place, extending this combinator rather than
    /// nesting a new one around it.
    pub fn push(&mut self, assertion: impl Assertion<T> + Send + Sync + 'static)
    where
        T: 'static,
    {
        self.children.push(Box::new(assertion));
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Always false; the child list is non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<T: ?Sized> Assertion<T> for AnyOf<T> {
    fn test(&self, actual: &T) -> TestResult {
        TestResult::any_of(self.children.iter().map(|child| child.test(actual)).collect())
    }

    fn into_any_of(self) -> AnyOf<T>
    where
        Self: Sized + Send + Sync + 'static,
        T: 'static,
    {
        self
    }
}

/// Negation wrapper produced by [`Assertion::negate`].
///
/// Delegates to the wrapped assertion and negates its result. Negating a
/// `Not` returns the inner assertion, so `Not<Not<_>>` is unrepresentable
/// through the public API.
#[derive(Debug, Clone)]
pub struct Not<A> {
    inner: A,
}

impl<A> Not<A> {
    pub(crate) fn new(inner: A) -> Self {
        Not { inner }
    }

    /// Undo the negation, handing back the wrapped assertion.
    ///
    /// This inherent method takes precedence over [`Assertion::negate`], which
    /// is what makes double negation return the original at construction time.
    pub fn negate(self) -> A {
        self.inner
    }
}

impl<T: ?Sized, A: Assertion<T>> Assertion<T> for Not<A> {
    fn test(&self, actual: &T) -> TestResult {
        self.inner.test(actual).negate()
    }
}

/// Conjunction over an explicit child list; passes iff every child passes.
///
/// # Panics
///
/// Panics if `children` is empty.
pub fn all_of<T: ?Sized>(children: Vec<BoxAssertion<T>>) -> AllOf<T> {
    AllOf::new(children)
}

/// Disjunction over an explicit child list; passes iff any child passes.
///
/// # Panics
///
/// Panics if `children` is empty.
pub fn any_of<T: ?Sized>(children: Vec<BoxAssertion<T>>) -> AnyOf<T> {
    AnyOf::new(children)
}

/// Passes iff no child passes. Built as the negation of [`any_of`], which
/// the result algebra resolves to a `NoneOf` composite (De Morgan).
///
/// # Panics
///
/// Panics if `children` is empty.
pub fn none_of<T: ?Sized + 'static>(children: Vec<BoxAssertion<T>>) -> Not<AnyOf<T>> {
    AnyOf::new(children).negate()
}

/// Build an [`AllOf`] from a comma-separated list of assertions.
///
/// # Example
///
/// ```rust
/// use veracity::{all_of, assert_that};
/// use veracity::matchers::{is_greater_than, is_less_than};
///
/// assert_that(&5, all_of![is_greater_than(0), is_less_than(10)]);
/// ```
#[macro_export]
macro_rules! all_of {
    ($($assertion:expr),+ $(,)?) => {
        $crate::AllOf::new(::std::vec![
            $(::std::boxed::Box::new($assertion) as $crate::BoxAssertion<_>),+
        ])
    };
}

/// Build an [`AnyOf`] from a comma-separated list of assertions.
#[macro_export]
macro_rules! any_of {
    ($($assertion:expr),+ $(,)?) => {
        $crate::AnyOf::new(::std::vec![
            $(::std::boxed::Box::new($assertion) as $crate::BoxAssertion<_>),+
        ])
    };
}

/// Build a none-of combinator from a comma-separated list of assertions.
#[macro_export]
macro_rules! none_of {
    ($($assertion:expr),+ $(,)?) => {
        $crate::none_of(::std::vec![
            $(::std::boxed::Box::new($assertion) as $crate::BoxAssertion<_>),+
        ])
    };
}
