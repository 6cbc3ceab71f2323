//! Property-based tests for the decision engine.

use proptest::prelude::*;

use choice_maker::constants::*;
use choice_maker::scoring::{decision_for_total, sum_scores};
use choice_maker::session::Session;
use choice_maker::types::Decision;

/// Strategy: a plausible recorded-score sequence. Individual scores go well
/// past the shipped −2..=2 range since the engine accepts any value.
fn scores_strategy() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-100..=100i32, 0..32)
}

proptest! {
    // 1. The total is the arithmetic sum of the recorded scores
    #[test]
    fn total_is_sum(scores in scores_strategy()) {
        let mut session = Session::new(scores.len());
        for &s in &scores {
            prop_assert!(session.record_answer(s));
        }
        let expected: i32 = scores.iter().sum();
        prop_assert_eq!(session.current_total(), expected);
    }

    // 2. The decision is a pure function of the total: two sessions with the
    //    same total agree, whatever sequences produced it
    #[test]
    fn decision_depends_only_on_total(scores in scores_strategy()) {
        let mut forward = Session::new(scores.len());
        for &s in &scores {
            forward.record_answer(s);
        }
        let mut backward = Session::new(scores.len());
        for &s in scores.iter().rev() {
            backward.record_answer(s);
        }
        prop_assert_eq!(forward.current_total(), backward.current_total());
        prop_assert_eq!(forward.decide(), backward.decide());
    }

    // 3. Threshold bands map exactly per the decision table
    #[test]
    fn thresholds_respected(total in -500..=500i32) {
        let decision = decision_for_total(total);
        let expected = if total >= BUY_NOW_MIN {
            Decision::BuyNow
        } else if total >= NOT_URGENT_MIN {
            Decision::NotUrgent
        } else if total >= POSTPONE_MIN {
            Decision::Postpone
        } else {
            Decision::DoNotBuy
        };
        prop_assert_eq!(decision, expected);
    }

    // 4. A higher total never yields a less favourable decision
    #[test]
    fn decision_monotonic_in_total(a in -500..=500i32, b in -500..=500i32) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(decision_for_total(lo) <= decision_for_total(hi));
    }

    // 5. Deciding repeatedly without recording is stable
    #[test]
    fn decide_idempotent(scores in scores_strategy()) {
        let mut session = Session::new(scores.len() + 1);
        for &s in &scores {
            session.record_answer(s);
        }
        prop_assert_eq!(session.decide(), session.decide());
        prop_assert_eq!(session.current_total(), session.current_total());
    }

    // 6. Recording past completion never changes the total
    #[test]
    fn completed_session_is_frozen(scores in scores_strategy(), extra in -100..=100i32) {
        let mut session = Session::new(scores.len());
        for &s in &scores {
            session.record_answer(s);
        }
        let total_before = session.current_total();
        prop_assert!(!session.record_answer(extra));
        prop_assert_eq!(session.current_total(), total_before);
        prop_assert_eq!(session.current_step(), scores.len());
    }

    // 7. sum_scores agrees with the session-accumulated total
    #[test]
    fn sum_scores_matches_iterative(scores in scores_strategy()) {
        let mut session = Session::new(scores.len());
        for &s in &scores {
            session.record_answer(s);
        }
        prop_assert_eq!(sum_scores(&scores), session.current_total());
    }
}

// 8. The four labels are distinct strings (non-proptest)
#[test]
fn labels_are_distinct() {
    let labels = [
        Decision::BuyNow.label(),
        Decision::NotUrgent.label(),
        Decision::Postpone.label(),
        Decision::DoNotBuy.label(),
    ];
    for (i, a) in labels.iter().enumerate() {
        for b in labels.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}
