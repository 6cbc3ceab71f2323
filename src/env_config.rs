//! Environment configuration for the server binary.
//!
//! Consolidates the `CHOICE_MAKER_PORT`, `CHOICE_MAKER_QUESTIONS`, and
//! `LOG_LEVEL` reads. Every value has a default so the server starts with an
//! empty environment.

use tracing::Level;

use crate::constants::{DEFAULT_BANK_PATH, DEFAULT_PORT};

/// Read `CHOICE_MAKER_PORT` (default 9000).
pub fn server_port() -> u16 {
    std::env::var("CHOICE_MAKER_PORT")
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// Read `CHOICE_MAKER_QUESTIONS` (default `data/questions.toml`).
pub fn question_bank_path() -> String {
    std::env::var("CHOICE_MAKER_QUESTIONS").unwrap_or_else(|_| DEFAULT_BANK_PATH.to_string())
}

/// Read `LOG_LEVEL` (default INFO). Unknown values fall back to INFO.
pub fn log_level() -> Level {
    let level_str = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "INFO".to_string())
        .to_uppercase();
    match level_str.as_str() {
        "TRACE" => Level::TRACE,
        "DEBUG" => Level::DEBUG,
        "WARN" => Level::WARN,
        "ERROR" => Level::ERROR,
        _ => Level::INFO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // These mutate process env; each test touches only its own variables.

    #[test]
    fn test_port_default_and_parse() {
        std::env::remove_var("CHOICE_MAKER_PORT");
        assert_eq!(server_port(), DEFAULT_PORT);

        std::env::set_var("CHOICE_MAKER_PORT", "8123");
        assert_eq!(server_port(), 8123);

        std::env::set_var("CHOICE_MAKER_PORT", "not-a-port");
        assert_eq!(server_port(), DEFAULT_PORT);
        std::env::remove_var("CHOICE_MAKER_PORT");
    }

    #[test]
    fn test_bank_path_default() {
        std::env::remove_var("CHOICE_MAKER_QUESTIONS");
        assert_eq!(question_bank_path(), DEFAULT_BANK_PATH);
    }

    #[test]
    fn test_log_level_parse() {
        std::env::set_var("LOG_LEVEL", "debug");
        assert_eq!(log_level(), Level::DEBUG);
        std::env::set_var("LOG_LEVEL", "bogus");
        assert_eq!(log_level(), Level::INFO);
        std::env::remove_var("LOG_LEVEL");
    }
}
