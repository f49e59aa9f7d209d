//! Matchers over `HashMap` subjects.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::assertion::{Assertion, Not};
use crate::message::Message;
use crate::result::TestResult;

/// Presence of a key bound to a specific value.
#[derive(Debug, Clone)]
pub struct HasEntry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Assertion<HashMap<K, V>> for HasEntry<K, V>
where
    K: Eq + Hash + fmt::Debug + Clone + 'static,
    V: PartialEq + fmt::Debug + Clone + 'static,
{
    fn test(&self, actual: &HashMap<K, V>) -> TestResult {
        let found = actual.get(&self.key).cloned();
        let passed = found.as_ref() == Some(&self.value);

        let key = self.key.clone();
        let expected = self.value.clone();
        let negated_key = self.key.clone();
        let negated_value = self.value.clone();
        TestResult::new(
            passed,
            Message::lazy(move || match &found {
                None => format!("map does not have key {key:?}"),
                Some(found) => {
                    format!("map has {key:?} = {found:?} rather than {expected:?}")
                }
            }),
            message!("map contains {:?} = {:?}", negated_key, negated_value),
        )
    }
}

/// Passes when the map binds `key` to exactly `value`.
pub fn has_entry<K, V>(key: K, value: V) -> HasEntry<K, V> {
    HasEntry { key, value }
}

/// Passes when the map does not bind `key` to `value`.
pub fn does_not_have_entry<K, V>(key: K, value: V) -> Not<HasEntry<K, V>> {
    Not::new(has_entry(key, value))
}

/// Presence of a key, whatever its value.
#[derive(Debug, Clone)]
pub struct HasKey<K> {
    key: K,
}

impl<K, V> Assertion<HashMap<K, V>> for HasKey<K>
where
    K: Eq + Hash + fmt::Debug + Clone + 'static,
{
    fn test(&self, actual: &HashMap<K, V>) -> TestResult {
        let failed_key = self.key.clone();
        let passed_key = self.key.clone();
        TestResult::new(
            actual.contains_key(&self.key),
            message!("map does not have key {:?}", failed_key),
            message!("map has key {:?}", passed_key),
        )
    }
}

/// Passes when the map contains `key`.
pub fn has_key<K>(key: K) -> HasKey<K> {
    HasKey { key }
}

/// Passes when the map does not contain `key`.
pub fn does_not_have_key<K>(key: K) -> Not<HasKey<K>> {
    Not::new(has_key(key))
}

/// Presence of a value under any key.
#[derive(Debug, Clone)]
pub struct HasValue<V> {
    value: V,
}

impl<K, V> Assertion<HashMap<K, V>> for HasValue<V>
where
    V: PartialEq + fmt::Debug + Clone + 'static,
{
    fn test(&self, actual: &HashMap<K, V>) -> TestResult {
        let failed_value = self.value.clone();
        let passed_value = self.value.clone();
        TestResult::new(
            actual.values().any(|value| value == &self.value),
            message!("map does not have value {:?}", failed_value),
            message!("map has value {:?}", passed_value),
        )
    }
}

/// Passes when some key maps to `value`.
pub fn has_value<V>(value: V) -> HasValue<V> {
    HasValue { value }
}

/// Passes when no key maps to `value`.
pub fn does_not_have_value<V>(value: V) -> Not<HasValue<V>> {
    Not::new(has_value(value))
}

/// Lifts one assertion over every value: passes iff every value passes.
///
/// An empty map passes vacuously.
pub struct AllValuesPass<A> {
    value_assertion: A,
}

impl<K, V, A> Assertion<HashMap<K, V>> for AllValuesPass<A>
where
    A: Assertion<V>,
{
    fn test(&self, actual: &HashMap<K, V>) -> TestResult {
        if actual.is_empty() {
            return TestResult::new(
                true,
                Message::fixed("no values to test"),
                Message::fixed("no values to test"),
            );
        }
        TestResult::all_of(
            actual
                .values()
                .map(|value| self.value_assertion.test(value))
                .collect(),
        )
    }
}

/// Passes when every value satisfies `value_assertion`; vacuously true for an
/// empty map.
pub fn all_values_pass<A>(value_assertion: A) -> AllValuesPass<A> {
    AllValuesPass { value_assertion }
}

/// Lifts one assertion over every value: passes iff at least one value passes.
///
/// An empty map fails, there being no value to satisfy the assertion.
pub struct AnyValuePasses<A> {
    value_assertion: A,
}

impl<K, V, A> Assertion<HashMap<K, V>> for AnyValuePasses<A>
where
    A: Assertion<V>,
{
    fn test(&self, actual: &HashMap<K, V>) -> TestResult {
        if actual.is_empty() {
            return TestResult::new(
                false,
                Message::fixed("no values to test"),
                Message::fixed("no values to test"),
            );
        }
        TestResult::any_of(
            actual
                .values()
                .map(|value| self.value_assertion.test(value))
                .collect(),
        )
    }
}

/// Passes when at least one value satisfies `value_assertion`; an empty map
/// fails.
pub fn any_value_passes<A>(value_assertion: A) -> AnyValuePasses<A> {
    AnyValuePasses { value_assertion }
}

/// Lifts one assertion over every value: passes iff no value passes.
///
/// An empty map passes vacuously.
pub struct NoValuesPass<A> {
    value_assertion: A,
}

impl<K, V, A> Assertion<HashMap<K, V>> for NoValuesPass<A>
where
    A: Assertion<V>,
{
    fn test(&self, actual: &HashMap<K, V>) -> TestResult {
        if actual.is_empty() {
            return TestResult::new(
                true,
                Message::fixed("no values to test"),
                Message::fixed("no values to test"),
            );
        }
        TestResult::none_of(
            actual
                .values()
                .map(|value| self.value_assertion.test(value))
                .collect(),
        )
    }
}

/// Passes when no value satisfies `value_assertion`; vacuously true for an
/// empty map.
pub fn no_values_pass<A>(value_assertion: A) -> NoValuesPass<A> {
    NoValuesPass { value_assertion }
}
