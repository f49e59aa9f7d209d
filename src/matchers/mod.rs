//! The leaf matcher catalog.
//!
//! Every matcher here is a thin predicate over the core algebra: given a
//! subject it decides a boolean and supplies two templated explanations (the
//! failure-case text and the negated-case text). Matchers compose with
//! [`and`](crate::Assertion::and), [`or`](crate::Assertion::or), and
//! [`negate`](crate::Assertion::negate) like any other assertion.
//!
//! # Example
//!
//! ```rust
//! use veracity::{assert_that, Assertion};
//! use veracity::matchers::{contains, has_length, is_greater_than};
//!
//! let primes = [2, 3, 5, 7];
//! assert_that(&primes[..], contains(5).and(has_length(4)));
//! assert_that(&7, is_greater_than(2).negate().negate());
//! ```

mod collection;
mod json;
mod map;
mod numeric;
mod string;
mod value;

pub use collection::{
    all_items_pass, any_item_passes, contains, contains_all_in_order, does_not_contain,
    no_items_pass, not_all_items_pass, AllPass, AnyPass, Contains, ContainsAllInOrder, NonePass,
};
pub use json::{field_does_not_match, field_matches, has_field, FieldMatches, HasField};
pub use map::{
    all_values_pass, any_value_passes, does_not_have_entry, does_not_have_key,
    does_not_have_value, has_entry, has_key, has_value, no_values_pass, AllValuesPass,
    AnyValuePasses, HasEntry, HasKey, HasValue, NoValuesPass,
};
pub use numeric::{
    is_close_to, is_divisible_by, is_greater_than, is_greater_than_or_equal_to, is_less_than,
    is_less_than_or_equal_to, is_multiple_of, is_not_close_to, is_not_multiple_of, Comparison,
    IsCloseTo, IsMultipleOf,
};
pub use string::{
    contains_string, does_not_contain_string, does_not_end_with, does_not_start_with, ends_with,
    matches_glob, matches_regex, starts_with, ContainsSubstring, EndsWith, MatchesGlob,
    MatchesRegex, StartsWith,
};
pub use value::{
    does_not_have_length, equals, has_debug, has_display, has_length, is_empty, is_equal_to,
    is_false, is_none, is_not_empty, is_not_equal_to, is_some, is_true, satisfies, HasDebug,
    HasDisplay, HasLength, IsEmpty, IsEqualTo, IsNone, IsSome, IsTrue, Len, Satisfies,
};
