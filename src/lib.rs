//! # Choice Maker — purchase-decision questionnaire backend
//!
//! Serves the Choice Maker browser frontend: a linear multi-step
//! questionnaire that accumulates a score per answered question and maps the
//! final total to one of four recommendations, plus the ledger demo panel
//! (mock history, canned conversions).
//!
//! | Concern | Module |
//! |---------|--------|
//! | Core data types | [`types`] |
//! | Decision thresholds | [`constants`] |
//! | Total → recommendation mapping | [`scoring`] |
//! | Session lifecycle | [`session`] |
//! | Question storage | [`question_bank`] |
//! | Ledger panel data | [`ledger`] |
//! | Environment configuration | [`env_config`] |
//! | HTTP boundary | [`server`] |
//!
//! The library is synchronous and allocation-light; only [`server`] is async.
//! Sessions are plain owned values — the caller (normally the HTTP layer)
//! decides where they live and when they are discarded.

pub mod constants;
pub mod env_config;
pub mod ledger;
pub mod question_bank;
pub mod scoring;
pub mod server;
pub mod session;
pub mod types;
