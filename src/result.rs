//! Outcomes of evaluating an assertion against one subject.
//!
//! A [`TestResult`] records whether the test passed together with two lazy
//! [`Message`]s: the failure explanation (read when the result failed) and
//! the negated explanation (what the negation of this result would report —
//! read by combinators when a passing child contributes to an overall
//! failure). Results are immutable once constructed; negating or aggregating
//! them builds new results without touching the originals.
//!
//! Composite results follow boolean algebra, and negation respects
//! De Morgan duality: negating an `AnyOf` yields a `NoneOf` over the same
//! children and vice versa, rather than a generic wrapper, because the two
//! aggregate their message text differently.

use std::fmt;
use std::rc::Rc;

use crate::error::Error;
use crate::message::Message;

/// The result of one assertion evaluation.
#[derive(Clone)]
pub struct TestResult {
    kind: Kind,
}

#[derive(Clone)]
enum Kind {
    Leaf {
        passed: bool,
        failure: Message,
        negated: Message,
    },
    Negated(Box<TestResult>),
    AllOf(Vec<TestResult>),
    AnyOf(Vec<TestResult>),
    NoneOf(Vec<TestResult>),
}

impl TestResult {
    /// Build a leaf result from a verdict and its two explanations.
    ///
    /// `failure` is read when the result failed; `negated` describes what the
    /// negation of this result would have said, and is read when a passing
    /// result is reported inside a failing composite.
    pub fn new(passed: bool, failure: Message, negated: Message) -> Self {
        TestResult {
            kind: Kind::Leaf {
                passed,
                failure,
                negated,
            },
        }
    }

    /// Build a result comparing an actual value against an expected one.
    ///
    /// Renders as `{actual:?} <negative> {expected:?}` on failure and
    /// `{actual:?} <positive> {expected:?}` when negated, with both operands
    /// captured once and shared between the two messages.
    pub fn relation<A, B>(
        passed: bool,
        actual: A,
        expected: B,
        negative: &'static str,
        positive: &'static str,
    ) -> Self
    where
        A: fmt::Debug + 'static,
        B: fmt::Debug + 'static,
    {
        let operands = Rc::new((actual, expected));
        let shared = Rc::clone(&operands);
        TestResult::new(
            passed,
            Message::lazy(move || format!("{:?} {} {:?}", operands.0, negative, operands.1)),
            Message::lazy(move || format!("{:?} {} {:?}", shared.0, positive, shared.1)),
        )
    }

    /// Like [`relation`](TestResult::relation) for one-operand judgements,
    /// rendering `{actual:?} <phrase>`.
    pub fn unary<A>(passed: bool, actual: A, negative: &'static str, positive: &'static str) -> Self
    where
        A: fmt::Debug + 'static,
    {
        let actual = Rc::new(actual);
        let shared = Rc::clone(&actual);
        TestResult::new(
            passed,
            Message::lazy(move || format!("{actual:?} {negative}")),
            Message::lazy(move || format!("{shared:?} {positive}")),
        )
    }

    /// Aggregate child results; passes iff every child passed.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. Use
    /// [`try_all_of`](TestResult::try_all_of) to get an [`Error`] instead.
    pub fn all_of(children: Vec<TestResult>) -> Self {
        Self::try_all_of(children).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Fallible form of [`all_of`](TestResult::all_of).
    pub fn try_all_of(children: Vec<TestResult>) -> Result<Self, Error> {
        Self::composite(children, Kind::AllOf)
    }

    /// Aggregate child results; passes iff at least one child passed.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn any_of(children: Vec<TestResult>) -> Self {
        Self::try_any_of(children).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Fallible form of [`any_of`](TestResult::any_of).
    pub fn try_any_of(children: Vec<TestResult>) -> Result<Self, Error> {
        Self::composite(children, Kind::AnyOf)
    }

    /// Aggregate child results; passes iff no child passed.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn none_of(children: Vec<TestResult>) -> Self {
        Self::try_none_of(children).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Fallible form of [`none_of`](TestResult::none_of).
    pub fn try_none_of(children: Vec<TestResult>) -> Result<Self, Error> {
        Self::composite(children, Kind::NoneOf)
    }

    fn composite(
        children: Vec<TestResult>,
        build: fn(Vec<TestResult>) -> Kind,
    ) -> Result<Self, Error> {
        if children.is_empty() {
            return Err(Error::EmptyCombinator);
        }
        Ok(TestResult {
            kind: build(children),
        })
    }

    /// Whether the assertion held.
    pub fn passed(&self) -> bool {
        match &self.kind {
            Kind::Leaf { passed, .. } => *passed,
            Kind::Negated(inner) => !inner.passed(),
            Kind::AllOf(children) => children.iter().all(TestResult::passed),
            Kind::AnyOf(children) => children.iter().any(TestResult::passed),
            Kind::NoneOf(children) => !children.iter().any(TestResult::passed),
        }
    }

    /// Whether the assertion did not hold.
    pub fn failed(&self) -> bool {
        !self.passed()
    }

    /// The logical negation of this result.
    ///
    /// Negation is an involution: negating a negated result returns the
    /// original. `AnyOf` and `NoneOf` convert into each other over the same
    /// children (De Morgan), since their message aggregation is not a simple
    /// failure/negated swap.
    pub fn negate(self) -> TestResult {
        let kind = match self.kind {
            Kind::Negated(inner) => return *inner,
            Kind::AnyOf(children) => Kind::NoneOf(children),
            Kind::NoneOf(children) => Kind::AnyOf(children),
            other => Kind::Negated(Box::new(TestResult { kind: other })),
        };
        TestResult { kind }
    }

    /// The explanation to show when this result failed.
    ///
    /// Building the message is cheap; the actual text is rendered only when
    /// the message is read.
    pub fn failure_message(&self) -> Message {
        match &self.kind {
            Kind::Leaf { failure, .. } => failure.clone(),
            Kind::Negated(inner) => inner.negated_message(),
            Kind::AllOf(children) => joined(
                "Some assertions failed:\n",
                failure_messages_of_failed(children),
            ),
            Kind::AnyOf(children) => joined(
                "Every assertion failed:\n",
                failure_messages_of_failed(children),
            ),
            Kind::NoneOf(children) => joined(
                "Some assertions passed:\n",
                negated_messages_of_passed(children),
            ),
        }
    }

    /// The explanation the negation of this result would report.
    pub fn negated_message(&self) -> Message {
        match &self.kind {
            Kind::Leaf { negated, .. } => negated.clone(),
            Kind::Negated(inner) => inner.failure_message(),
            // Negating an AllOf does not decompose per child; the contract is
            // a fixed sentence.
            Kind::AllOf(_) => {
                Message::fixed("Every assertion passed when at least one was expected to fail")
            }
            Kind::AnyOf(children) => joined(
                "Some assertions passed:\n",
                negated_messages_of_passed(children),
            ),
            Kind::NoneOf(children) => joined(
                "Every assertion failed:\n",
                failure_messages_of_failed(children),
            ),
        }
    }
}

impl fmt::Debug for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dbg = f.debug_struct("TestResult");
        dbg.field("passed", &self.passed());
        if self.failed() {
            dbg.field("failure", &self.failure_message().render());
        }
        dbg.finish_non_exhaustive()
    }
}

/// Negate a result; free-function form of [`TestResult::negate`].
pub fn negate(result: TestResult) -> TestResult {
    result.negate()
}

fn failure_messages_of_failed(children: &[TestResult]) -> Vec<Message> {
    children
        .iter()
        .filter(|child| child.failed())
        .map(TestResult::failure_message)
        .collect()
}

fn negated_messages_of_passed(children: &[TestResult]) -> Vec<Message> {
    children
        .iter()
        .filter(|child| child.passed())
        .map(TestResult::negated_message)
        .collect()
}

fn joined(header: &'static str, parts: Vec<Message>) -> Message {
    Message::lazy(move || {
        let body: Vec<String> = parts.iter().map(Message::render).collect();
        format!("{header}{}", body.join("\nAND "))
    })
}
