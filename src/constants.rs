//! Decision thresholds and server defaults.
//!
//! The thresholds partition the integers into four bands, evaluated top-down
//! with first match winning:
//!
//! | Condition on total | Decision |
//! |--------------------|----------|
//! | total ≥ [`BUY_NOW_MIN`] | Buy now |
//! | total ≥ [`NOT_URGENT_MIN`] | Might need it, not urgent |
//! | total ≥ [`POSTPONE_MIN`] | Postpone |
//! | otherwise | Impulsive — should not buy |

/// Minimum total for an unconditional "buy now".
pub const BUY_NOW_MIN: i32 = 5;

/// Minimum total for "might need it, not urgent".
pub const NOT_URGENT_MIN: i32 = 2;

/// Minimum total for "postpone"; anything below is "should not buy".
pub const POSTPONE_MIN: i32 = -1;

/// Default HTTP port when `CHOICE_MAKER_PORT` is unset.
pub const DEFAULT_PORT: u16 = 9000;

/// Default question-bank file when `CHOICE_MAKER_QUESTIONS` is unset.
pub const DEFAULT_BANK_PATH: &str = "data/questions.toml";
