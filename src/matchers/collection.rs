//! Matchers over slice subjects.

use std::fmt;

use crate::assertion::{Assertion, Not};
use crate::error::Error;
use crate::message::Message;
use crate::result::TestResult;
use crate::sequence::contains_in_order;

/// Membership of a single element.
#[derive(Debug, Clone)]
pub struct Contains<E> {
    element: E,
}

impl<E> Assertion<[E]> for Contains<E>
where
    E: PartialEq + fmt::Debug + Clone + 'static,
{
    fn test(&self, actual: &[E]) -> TestResult {
        TestResult::relation(
            actual.contains(&self.element),
            actual.to_vec(),
            self.element.clone(),
            "does not contain",
            "contains",
        )
    }
}

/// Passes when the slice contains `element`.
pub fn contains<E>(element: E) -> Contains<E> {
    Contains { element }
}

/// Passes when the slice does not contain `element`.
pub fn does_not_contain<E>(element: E) -> Not<Contains<E>> {
    Not::new(contains(element))
}

/// Order-preserving containment of a whole needle sequence.
///
/// Backed by [`contains_in_order`]: the needle elements must appear in the
/// subject in the given relative order, with arbitrary gaps between them.
#[derive(Debug, Clone)]
pub struct ContainsAllInOrder<E> {
    needle: Vec<E>,
}

impl<E> Assertion<[E]> for ContainsAllInOrder<E>
where
    E: PartialEq + fmt::Debug + Clone + 'static,
{
    fn test(&self, actual: &[E]) -> TestResult {
        let refs: Vec<&E> = self.needle.iter().collect();
        TestResult::relation(
            contains_in_order(actual.iter(), &refs),
            actual.to_vec(),
            self.needle.clone(),
            "does not contain, in order,",
            "contains, in order,",
        )
    }
}

/// Passes when the slice contains every needle element in the given relative
/// order, gaps allowed.
///
/// # Panics
///
/// Panics if `needle` is empty.
pub fn contains_all_in_order<E>(needle: Vec<E>) -> ContainsAllInOrder<E> {
    assert!(!needle.is_empty(), "{}", Error::EmptyNeedle);
    ContainsAllInOrder { needle }
}

/// Lifts one assertion over every item: passes iff every item passes.
///
/// An empty slice passes vacuously.
pub struct AllPass<A> {
    item_assertion: A,
}

impl<E, A> Assertion<[E]> for AllPass<A>
where
    A: Assertion<E>,
{
    fn test(&self, actual: &[E]) -> TestResult {
        if actual.is_empty() {
            return TestResult::new(
                true,
                Message::fixed("no items to test"),
                Message::fixed("no items to test"),
            );
        }
        TestResult::all_of(
            actual
                .iter()
                .map(|item| self.item_assertion.test(item))
                .collect(),
        )
    }
}

/// Passes when every item satisfies `item_assertion`; vacuously true for an
/// empty slice.
pub fn all_items_pass<A>(item_assertion: A) -> AllPass<A> {
    AllPass { item_assertion }
}

/// Passes when at least one item fails `item_assertion`.
pub fn not_all_items_pass<A>(item_assertion: A) -> Not<AllPass<A>> {
    Not::new(all_items_pass(item_assertion))
}

/// Lifts one assertion over every item: passes iff at least one item passes.
///
/// An empty slice fails, there being no item to satisfy the assertion.
pub struct AnyPass<A> {
    item_assertion: A,
}

impl<E, A> Assertion<[E]> for AnyPass<A>
where
    A: Assertion<E>,
{
    fn test(&self, actual: &[E]) -> TestResult {
        if actual.is_empty() {
            return TestResult::new(
                false,
                Message::fixed("no items to test"),
                Message::fixed("no items to test"),
            );
        }
        TestResult::any_of(
            actual
                .iter()
                .map(|item| self.item_assertion.test(item))
                .collect(),
        )
    }
}

/// Passes when at least one item satisfies `item_assertion`; an empty slice
/// fails.
pub fn any_item_passes<A>(item_assertion: A) -> AnyPass<A> {
    AnyPass { item_assertion }
}

/// Lifts one assertion over every item: passes iff no item passes.
///
/// An empty slice passes vacuously.
pub struct NonePass<A> {
    item_assertion: A,
}

impl<E, A> Assertion<[E]> for NonePass<A>
where
    A: Assertion<E>,
{
    fn test(&self, actual: &[E]) -> TestResult {
        if actual.is_empty() {
            return TestResult::new(
                true,
                Message::fixed("no items to test"),
                Message::fixed("no items to test"),
            );
        }
        TestResult::none_of(
            actual
                .iter()
                .map(|item| self.item_assertion.test(item))
                .collect(),
        )
    }
}

/// Passes when no item satisfies `item_assertion`; vacuously true for an
/// empty slice.
pub fn no_items_pass<A>(item_assertion: A) -> NonePass<A> {
    NonePass { item_assertion }
}
