//! One traversal of the question sequence by one user.
//!
//! A [`Session`] exclusively owns its recorded answers. Progression is
//! strictly linear — `current_step` is always the number of answers recorded
//! so far, and recording stops once every question has been answered. There
//! is no persistence: dropping the session discards it.

use crate::scoring::{decision_for_total, sum_scores};
use crate::types::{Decision, SessionPhase};

/// Mutable questionnaire state for a single user.
#[derive(Clone, Debug)]
pub struct Session {
    answers: Vec<i32>,
    question_count: usize,
}

impl Session {
    /// Fresh session over a questionnaire of `question_count` steps.
    pub fn new(question_count: usize) -> Self {
        Self {
            answers: Vec::with_capacity(question_count),
            question_count,
        }
    }

    /// Record one answer score.
    ///
    /// Returns `false` without recording anything when the session is already
    /// complete — advancing past the last question is a no-op, not an error.
    /// Any `i32` is accepted; scores are not range-checked.
    pub fn record_answer(&mut self, score: i32) -> bool {
        if self.is_complete() {
            return false;
        }
        self.answers.push(score);
        true
    }

    /// Index of the question the session is on. Always `answers.len()`.
    pub fn current_step(&self) -> usize {
        self.answers.len()
    }

    /// Sum of all recorded scores. Pure; empty sequence → 0.
    pub fn current_total(&self) -> i32 {
        sum_scores(&self.answers)
    }

    /// True once every question has been answered.
    pub fn is_complete(&self) -> bool {
        self.answers.len() >= self.question_count
    }

    /// Where the session is in the `NotStarted → Answering → Completed` line.
    ///
    /// A zero-question bank is complete from the start.
    pub fn phase(&self) -> SessionPhase {
        if self.is_complete() {
            SessionPhase::Completed
        } else if self.answers.is_empty() {
            SessionPhase::NotStarted
        } else {
            SessionPhase::Answering(self.answers.len())
        }
    }

    /// Recommendation for the current total. Pure and idempotent — callable
    /// at any point, though the frontend only asks once the flow completes.
    pub fn decide(&self) -> Decision {
        decision_for_total(self.current_total())
    }

    /// Discard all recorded answers and return to `NotStarted`.
    pub fn reset(&mut self) {
        self.answers.clear();
    }

    /// Recorded scores, in answer order.
    pub fn answers(&self) -> &[i32] {
        &self.answers
    }
}
