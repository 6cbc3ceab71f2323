//! Question storage: the built-in instrument and TOML file loading.
//!
//! The bank is an ordered, immutable question sequence fixed at startup.
//! File format (`data/questions.toml`):
//!
//! ```toml
//! [[questions]]
//! id = "need"
//! prompt = "Is this a need or a want?"
//!
//! [[questions.options]]
//! label = "Essential need"
//! score = 2
//! ```
//!
//! The server loads the bank from disk when the file exists and falls back to
//! the built-in instrument otherwise, so a fresh checkout runs without any
//! data directory.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::types::{AnswerOption, Question};

/// On-disk bank layout: a single `questions` array-of-tables.
#[derive(Serialize, Deserialize)]
struct BankFile {
    questions: Vec<Question>,
}

/// Why a bank failed to load or validate.
#[derive(Debug, Error)]
pub enum BankError {
    #[error("failed to read question bank: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse question bank: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("question bank contains no questions")]
    Empty,
    #[error("duplicate question id: {0}")]
    DuplicateId(String),
}

/// Ordered, immutable question sequence.
#[derive(Debug)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank from an explicit question list.
    ///
    /// Rejects empty banks and duplicate ids; everything else (option counts,
    /// score ranges) is the instrument author's business.
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }
        for (i, q) in questions.iter().enumerate() {
            if questions[..i].iter().any(|prev| prev.id == q.id) {
                return Err(BankError::DuplicateId(q.id.clone()));
            }
        }
        Ok(Self { questions })
    }

    /// The shipped five-question purchase instrument.
    pub fn builtin() -> Self {
        fn q(id: &str, prompt: &str, options: &[(&str, i32)]) -> Question {
            Question {
                id: id.to_string(),
                prompt: prompt.to_string(),
                options: options
                    .iter()
                    .map(|&(label, score)| AnswerOption {
                        label: label.to_string(),
                        score,
                    })
                    .collect(),
            }
        }

        let questions = vec![
            q(
                "need",
                "Is this a need or a want?",
                &[
                    ("Essential need", 2),
                    ("Partly a need", 1),
                    ("A want", -1),
                    ("Pure impulse", -2),
                ],
            ),
            q(
                "frequency",
                "How often will it be used?",
                &[("Every day", 2), ("Sometimes", 1), ("Rarely", 0)],
            ),
            q(
                "budget",
                "Is the budget safe?",
                &[
                    ("Very safe", 2),
                    ("Safe", 1),
                    ("Just enough", 0),
                    ("Not safe", -1),
                    ("Very unsafe", -2),
                ],
            ),
            q(
                "emotion",
                "Are you feeling emotional right now?",
                &[
                    ("Very calm", 2),
                    ("Calm", 1),
                    ("Neutral", 0),
                    ("Emotional", -1),
                    ("Very emotional", -2),
                ],
            ),
            q(
                "alternative",
                "Is there an alternative?",
                &[
                    ("Yes, and far better", -2),
                    ("A similar alternative exists", -1),
                    ("Not sure", 0),
                    ("No alternative", 1),
                ],
            ),
        ];

        // The built-in instrument is statically well-formed.
        Self::new(questions).expect("built-in question bank must validate")
    }

    /// Parse a bank from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, BankError> {
        let file: BankFile = toml::from_str(text)?;
        Self::new(file.questions)
    }

    /// Load a bank from a TOML file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, BankError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Load from `path`, falling back to the built-in instrument when the
    /// file is missing or malformed.
    pub fn load_or_builtin(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            warn!("Question bank file not found at {}, using built-in instrument", path.display());
            return Self::builtin();
        }
        match Self::load_from_file(path) {
            Ok(bank) => bank,
            Err(e) => {
                warn!("Failed to load question bank from {}: {e}; using built-in instrument", path.display());
                Self::builtin()
            }
        }
    }

    /// Serialize the bank back to TOML text.
    pub fn to_toml_string(&self) -> String {
        let file = BankFile {
            questions: self.questions.clone(),
        };
        toml::to_string_pretty(&file).expect("question bank serializes to TOML")
    }

    /// Question at `index`, or `None` at and past the end — the designed
    /// end-of-flow signal, never an error.
    pub fn question_at(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Number of questions in the bank.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// True for a bank with no questions (unreachable via [`Self::new`]).
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// All questions, in flow order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}
