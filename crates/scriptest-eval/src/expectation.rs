//! The expectation stack: a two-slot record of anticipated outcomes that
//! implements nested `expect` semantics.

use crate::status::Status;

/// Anticipated statuses for the next two evaluated outcomes.
///
/// `expected[0]` guards the next outcome to reach [`evaluate`](Self::evaluate);
/// `expected[1]` the one after that. Both default to [`Status::Ok`], meaning
/// nothing special is anticipated. [`anticipate`](Self::anticipate) pushes
/// onto the front: with nested expects, the innermost invocation completes
/// first, so the most recently armed expectation must be checked first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectationStack {
    expected: [Status; 2],
}

impl Default for ExpectationStack {
    fn default() -> Self {
        Self {
            expected: [Status::Ok, Status::Ok],
        }
    }
}

impl ExpectationStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms a one-shot expectation for the next evaluated outcome.
    ///
    /// Returns `false` when both slots are already armed; expectations deeper
    /// than two levels are refused rather than silently dropped.
    pub fn anticipate(&mut self, status: Status) -> bool {
        if self.expected[1] != Status::Ok {
            return false;
        }
        self.expected[1] = self.expected[0];
        self.expected[0] = status;
        true
    }

    /// Evaluates an outcome against the armed expectation.
    ///
    /// The front slot is consumed on every outcome, so a missed expectation
    /// never leaks into a later script line:
    /// - anticipated status occurred -> `Ok`
    /// - command succeeded where a failure was anticipated -> `UnexpectedSuccess`
    /// - any other status -> returned unchanged
    pub fn evaluate(&mut self, status: Status) -> Status {
        let expected = self.expected[0];
        self.expected[0] = self.expected[1];
        self.expected[1] = Status::Ok;

        if status == expected {
            Status::Ok
        } else if status == Status::Ok {
            Status::UnexpectedSuccess
        } else {
            status
        }
    }

    /// Whether nothing is currently anticipated.
    pub fn is_idle(&self) -> bool {
        self.expected == [Status::Ok, Status::Ok]
    }
}
