//! Ordered-subsequence containment.
//!
//! Answers "does this sequence contain these elements, in this relative
//! order, not necessarily contiguously?" — the search behind
//! [`contains_all_in_order`](crate::matchers::contains_all_in_order).
//!
//! The search anchors on each occurrence of the first needle element and
//! tries to extend the match forward, allowing gaps in the haystack but not
//! in the needle. A failed extension resumes one position past the anchor,
//! so an early duplicate that does not lead to a full match cannot sink the
//! whole search. The haystack may be a single-pass iterator: consumed
//! elements are buffered internally, since the retry steps revisit positions
//! a plain forward cursor has already passed.

use crate::error::Error;

/// Whether `needle` appears in `haystack` as an order-preserving, not
/// necessarily contiguous subsequence.
///
/// True iff there are indices `i_1 < i_2 < ... < i_k` into the haystack with
/// `haystack[i_j] == needle[j]` for every `j`. Elements between matched
/// positions are ignored and values may repeat.
///
/// # Panics
///
/// Panics if `needle` is empty. Use [`try_contains_in_order`] to get an
/// [`Error`] instead.
///
/// # Example
///
/// ```rust
/// use veracity::contains_in_order;
///
/// assert!(contains_in_order([1, 2, 3, 2, 4], &[2, 3, 4]));
/// assert!(!contains_in_order([1, 2, 3], &[3, 1]));
/// ```
pub fn contains_in_order<I, E>(haystack: I, needle: &[E]) -> bool
where
    I: IntoIterator<Item = E>,
    E: PartialEq,
{
    match try_contains_in_order(haystack, needle) {
        Ok(found) => found,
        Err(err) => panic!("{err}"),
    }
}

/// Fallible form of [`contains_in_order`].
pub fn try_contains_in_order<I, E>(haystack: I, needle: &[E]) -> Result<bool, Error>
where
    I: IntoIterator<Item = E>,
    E: PartialEq,
{
    let (first, rest) = needle.split_first().ok_or(Error::EmptyNeedle)?;
    let mut source = Buffered::new(haystack.into_iter());

    let mut cursor = 0;
    while let Some(anchor) = source.find_from(cursor, first) {
        if extends_from(&mut source, anchor, rest) {
            return Ok(true);
        }
        // This anchor did not extend to a full match; retry one past it.
        cursor = anchor + 1;
    }
    Ok(false)
}

/// Match the remaining needle elements forward from `anchor`, allowing gaps
/// in the haystack only.
fn extends_from<I>(source: &mut Buffered<I>, anchor: usize, rest: &[I::Item]) -> bool
where
    I: Iterator,
    I::Item: PartialEq,
{
    let mut position = anchor;
    for element in rest {
        match source.find_from(position + 1, element) {
            Some(found) => position = found,
            None => return false,
        }
    }
    true
}

/// A forward iterator with the consumed prefix kept addressable, so the
/// search can re-read positions behind the frontier.
struct Buffered<I: Iterator> {
    source: I,
    seen: Vec<I::Item>,
}

impl<I: Iterator> Buffered<I> {
    fn new(source: I) -> Self {
        Buffered {
            source,
            seen: Vec::new(),
        }
    }

    /// The element at `index`, pulling from the source as needed.
    fn get(&mut self, index: usize) -> Option<&I::Item> {
        while self.seen.len() <= index {
            self.seen.push(self.source.next()?);
        }
        Some(&self.seen[index])
    }
}

impl<I: Iterator> Buffered<I>
where
    I::Item: PartialEq,
{
    /// Index of the first element equal to `target` at or after `index`.
    fn find_from(&mut self, mut index: usize, target: &I::Item) -> Option<usize> {
        loop {
            match self.get(index) {
                Some(element) if element == target => return Some(index),
                Some(_) => index += 1,
                None => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backtracks_past_an_anchor_that_does_not_extend() {
        // The first 2 is a dead end for [2, 4] only under contiguous
        // matching; either way the search must consider the second 2.
        assert!(contains_in_order([1, 2, 3, 2, 4], &[2, 4]));
    }

    #[test]
    fn gaps_in_the_haystack_are_allowed() {
        assert!(contains_in_order([1, 2, 3, 2, 4], &[2, 3, 4]));
    }

    #[test]
    fn order_violations_fail() {
        assert!(!contains_in_order([1, 2, 3], &[3, 1]));
    }

    #[test]
    fn empty_haystack_contains_nothing() {
        assert!(!contains_in_order(Vec::<i32>::new(), &[1]));
    }

    #[test]
    fn repeated_needle_elements_match_distinct_positions() {
        assert!(contains_in_order([1, 1, 1, 2], &[1, 1, 2]));
        assert!(!contains_in_order([1, 2], &[1, 1, 2]));
    }

    #[test]
    fn needle_longer_than_haystack_fails_cleanly() {
        assert!(!contains_in_order([1, 2], &[1, 2, 3]));
    }

    #[test]
    fn single_element_needle_is_plain_containment() {
        assert!(contains_in_order([5, 6, 7], &[6]));
        assert!(!contains_in_order([5, 6, 7], &[8]));
    }

    #[test]
    fn works_over_a_single_pass_iterator() {
        // filter() yields a non-cloneable, forward-only iterator; the
        // buffered traversal must still be able to retry earlier positions.
        let haystack = (0..10).filter(|n| n % 2 == 0);
        assert!(contains_in_order(haystack, &[2, 4, 8]));
    }

    #[test]
    fn empty_needle_is_rejected() {
        assert_eq!(
            try_contains_in_order([1, 2, 3], &[]).unwrap_err(),
            Error::EmptyNeedle
        );
    }

    #[test]
    #[should_panic(expected = "non-empty needle")]
    fn empty_needle_panics_in_the_infallible_form() {
        contains_in_order([1, 2, 3], &[]);
    }
}
