//! Core questionnaire types.

use serde::{Deserialize, Serialize};

/// One selectable answer: a label shown to the user and the score it
/// contributes to the session total.
///
/// The shipped instrument keeps scores in −2..=2, but the range is not
/// enforced anywhere — the engine sums whatever the bank declares.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub label: String,
    pub score: i32,
}

/// One questionnaire step: a unique id, the prompt, and its ordered options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: Vec<AnswerOption>,
}

/// Final recommendation, derived from the session total and never stored.
///
/// Variants are ordered least to most favourable so that a higher total can
/// never map to a strictly lower variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    DoNotBuy,
    Postpone,
    NotUrgent,
    BuyNow,
}

impl Decision {
    /// Human-readable label shown by the frontend.
    pub fn label(&self) -> &'static str {
        match self {
            Decision::BuyNow => "Buy now",
            Decision::NotUrgent => "Might need it, not urgent",
            Decision::Postpone => "Postpone",
            Decision::DoNotBuy => "Impulsive — should not buy",
        }
    }
}

/// Linear session progression: `NotStarted → Answering(0..N−1) → Completed`.
///
/// There is no transition backwards; discarding the session (or an explicit
/// `reset`) is the only way to start over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    NotStarted,
    /// Index of the question the session is currently on.
    Answering(usize),
    Completed,
}

impl SessionPhase {
    /// Wire name for the phase, used in session snapshots.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionPhase::NotStarted => "not_started",
            SessionPhase::Answering(_) => "answering",
            SessionPhase::Completed => "completed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_labels() {
        assert_eq!(Decision::BuyNow.label(), "Buy now");
        assert_eq!(Decision::NotUrgent.label(), "Might need it, not urgent");
        assert_eq!(Decision::Postpone.label(), "Postpone");
        assert_eq!(Decision::DoNotBuy.label(), "Impulsive — should not buy");
    }

    #[test]
    fn test_decision_ordering() {
        assert!(Decision::DoNotBuy < Decision::Postpone);
        assert!(Decision::Postpone < Decision::NotUrgent);
        assert!(Decision::NotUrgent < Decision::BuyNow);
    }

    #[test]
    fn test_phase_wire_names() {
        assert_eq!(SessionPhase::NotStarted.as_str(), "not_started");
        assert_eq!(SessionPhase::Answering(3).as_str(), "answering");
        assert_eq!(SessionPhase::Completed.as_str(), "completed");
    }
}
