//! Decision mapping: cumulative total → recommendation.
//!
//! Pure functions only. The threshold comparison is evaluated top-down and
//! the first match wins, so the bands partition every possible total.

use crate::constants::{BUY_NOW_MIN, NOT_URGENT_MIN, POSTPONE_MIN};
use crate::types::Decision;

/// Sum a recorded score sequence. Empty → 0.
pub fn sum_scores(scores: &[i32]) -> i32 {
    scores.iter().sum()
}

/// Map a session total to its recommendation.
pub fn decision_for_total(total: i32) -> Decision {
    if total >= BUY_NOW_MIN {
        Decision::BuyNow
    } else if total >= NOT_URGENT_MIN {
        Decision::NotUrgent
    } else if total >= POSTPONE_MIN {
        Decision::Postpone
    } else {
        Decision::DoNotBuy
    }
}
