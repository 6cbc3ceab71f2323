//! Ledger demo panel: mock activity history and canned conversions.
//!
//! Nothing here computes a balance or persists anything. The history is
//! seeded once at startup and served verbatim; the two conversion actions
//! always answer with the same canned text, matching the demo frontend.

use chrono::Local;
use serde::Serialize;

/// Whether a history entry counts toward merit or sin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeedKind {
    Merit,
    Sin,
}

/// One row of the mock activity history.
#[derive(Clone, Debug, Serialize)]
pub struct LedgerEntry {
    pub id: u32,
    pub description: String,
    pub kind: DeedKind,
    /// Displayed as a percentage delta, signed by `kind` in the frontend.
    pub amount_pct: u32,
    /// Wall-clock display time (`HH:MM`), stamped at seed time.
    pub time: String,
}

/// Canned answer for the merit conversion: always unavailable.
pub const MERIT_CONVERSION_NOTICE: &str =
    "SYSTEM ERROR: the ledger server is down for maintenance. Try again after the holidays!";

/// Canned answer for the sin conversion.
pub const SIN_CONVERSION_REPLY: &str = "Hello World!";

/// Build the mock history served by the demo panel.
pub fn seed_history() -> Vec<LedgerEntry> {
    let time = Local::now().format("%H:%M").to_string();
    let rows: [(&str, DeedKind, u32); 4] = [
        ("Returned a lost wallet", DeedKind::Merit, 5),
        ("Jaywalked across the intersection", DeedKind::Sin, 2),
        ("Donated to charity", DeedKind::Merit, 3),
        ("Claimed to be busy to skip a meeting", DeedKind::Sin, 4),
    ];

    rows.iter()
        .enumerate()
        .map(|(i, &(description, kind, amount_pct))| LedgerEntry {
            id: i as u32 + 1,
            description: description.to_string(),
            kind,
            amount_pct,
            time: time.clone(),
        })
        .collect()
}
