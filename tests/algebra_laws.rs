//! Property tests for the combinator algebra and the ordered-containment
//! search, checked against simple oracles.

use proptest::prelude::*;

use veracity::{
    all_of, any_of, assert_that, contains_in_order, none_of, Assertion, Message, TestResult,
};

/// A fixed-verdict assertion with a distinguishing label in its messages.
#[derive(Debug, Clone)]
struct Flag {
    passed: bool,
    label: usize,
}

impl Assertion<()> for Flag {
    fn test(&self, _actual: &()) -> TestResult {
        TestResult::new(
            self.passed,
            Message::fixed(format!("flag {} failed", self.label)),
            Message::fixed(format!("flag {} passed", self.label)),
        )
    }
}

fn flags(verdicts: &[bool]) -> Vec<veracity::BoxAssertion<()>> {
    verdicts
        .iter()
        .enumerate()
        .map(|(label, &passed)| {
            Box::new(Flag { passed, label }) as veracity::BoxAssertion<()>
        })
        .collect()
}

fn leaves(verdicts: &[bool]) -> Vec<TestResult> {
    verdicts
        .iter()
        .enumerate()
        .map(|(label, &passed)| Flag { passed, label }.test(&()))
        .collect()
}

/// Left-to-right greedy matching decides subsequence containment exactly.
fn greedy_subsequence(haystack: &[u8], needle: &[u8]) -> bool {
    let mut remaining = haystack.iter();
    needle
        .iter()
        .all(|wanted| remaining.any(|element| element == wanted))
}

proptest! {
    #[test]
    fn double_negation_preserves_verdict_and_text(verdicts in prop::collection::vec(any::<bool>(), 1..6)) {
        let original = any_of(flags(&verdicts)).test(&());
        let twice = any_of(flags(&verdicts)).test(&()).negate().negate();

        prop_assert_eq!(original.passed(), twice.passed());
        if original.failed() {
            prop_assert_eq!(
                original.failure_message().render(),
                twice.failure_message().render()
            );
        } else {
            prop_assert_eq!(
                original.negated_message().render(),
                twice.negated_message().render()
            );
        }
    }

    #[test]
    fn none_of_is_the_negation_of_any_of(verdicts in prop::collection::vec(any::<bool>(), 1..6)) {
        let direct = TestResult::none_of(leaves(&verdicts));
        let negated = TestResult::any_of(leaves(&verdicts)).negate();

        prop_assert_eq!(direct.passed(), negated.passed());
        if direct.failed() {
            prop_assert_eq!(
                direct.failure_message().render(),
                negated.failure_message().render()
            );
        }
    }

    #[test]
    fn negating_none_of_reads_like_any_of(verdicts in prop::collection::vec(any::<bool>(), 1..6)) {
        let round_trip = TestResult::none_of(leaves(&verdicts)).negate();
        let direct = TestResult::any_of(leaves(&verdicts));

        prop_assert_eq!(round_trip.passed(), direct.passed());
        if round_trip.failed() {
            prop_assert_eq!(
                round_trip.failure_message().render(),
                direct.failure_message().render()
            );
        }
    }

    #[test]
    fn and_is_associative_in_structure_and_text(verdicts in prop::collection::vec(any::<bool>(), 3..=3)) {
        let flag = |index: usize| Flag { passed: verdicts[index], label: index };

        let left = flag(0).and(flag(1)).and(flag(2));
        let right = flag(0).and(flag(1).and(flag(2)));
        let listed = all_of(flags(&verdicts));

        prop_assert_eq!(left.len(), 3);
        prop_assert_eq!(right.len(), 3);

        let outcomes = [left.test(&()), right.test(&()), listed.test(&())];
        for outcome in &outcomes {
            prop_assert_eq!(outcome.passed(), outcomes[0].passed());
        }
        if outcomes[0].failed() {
            let text = outcomes[0].failure_message().render();
            prop_assert_eq!(&outcomes[1].failure_message().render(), &text);
            prop_assert_eq!(&outcomes[2].failure_message().render(), &text);
        }
    }

    #[test]
    fn or_is_associative_in_structure_and_text(verdicts in prop::collection::vec(any::<bool>(), 3..=3)) {
        let flag = |index: usize| Flag { passed: verdicts[index], label: index };

        let left = flag(0).or(flag(1)).or(flag(2));
        let right = flag(0).or(flag(1).or(flag(2)));

        prop_assert_eq!(left.len(), 3);
        prop_assert_eq!(right.len(), 3);
        prop_assert_eq!(left.test(&()).passed(), right.test(&()).passed());
    }

    #[test]
    fn all_of_agrees_with_the_boolean_fold(verdicts in prop::collection::vec(any::<bool>(), 1..8)) {
        let expected = verdicts.iter().all(|&passed| passed);
        prop_assert_eq!(all_of(flags(&verdicts)).test(&()).passed(), expected);
    }

    #[test]
    fn any_of_agrees_with_the_boolean_fold(verdicts in prop::collection::vec(any::<bool>(), 1..8)) {
        let expected = verdicts.iter().any(|&passed| passed);
        prop_assert_eq!(any_of(flags(&verdicts)).test(&()).passed(), expected);
    }

    #[test]
    fn none_of_agrees_with_the_boolean_fold(verdicts in prop::collection::vec(any::<bool>(), 1..8)) {
        let expected = !verdicts.iter().any(|&passed| passed);
        prop_assert_eq!(none_of(flags(&verdicts)).test(&()).passed(), expected);
    }

    #[test]
    fn ordered_containment_agrees_with_greedy_matching(
        haystack in prop::collection::vec(0u8..4, 0..16),
        needle in prop::collection::vec(0u8..4, 1..5),
    ) {
        prop_assert_eq!(
            contains_in_order(haystack.iter().copied(), &needle),
            greedy_subsequence(&haystack, &needle)
        );
    }
}

#[test]
fn a_failed_conjunction_lists_only_the_failed_children() {
    let verdicts = [true, false, true, false];
    let result = all_of(flags(&verdicts)).test(&());

    let text = result.failure_message().render();
    assert!(text.starts_with("Some assertions failed:"));
    assert!(text.contains("flag 1 failed"));
    assert!(text.contains("flag 3 failed"));
    assert!(!text.contains("flag 0"));
    assert!(!text.contains("flag 2"));
}

#[test]
fn a_failed_disjunction_lists_every_reason() {
    let result = any_of(flags(&[false, false])).test(&());

    let text = result.failure_message().render();
    assert!(text.starts_with("Every assertion failed:"));
    assert!(text.contains("flag 0 failed"));
    assert!(text.contains("flag 1 failed"));
}

#[test]
fn matchers_and_combinators_compose_end_to_end() {
    use veracity::matchers::{contains, contains_all_in_order, has_length, is_greater_than};

    let readings = [3, 1, 4, 1, 5, 9, 2, 6];
    assert_that(
        &readings[..],
        contains(9)
            .and(has_length(8))
            .and(contains_all_in_order(vec![3, 4, 5, 6])),
    );
    assert_that(&readings[..], contains(7).negate());
    assert_that(&9, is_greater_than(8));
}
