use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── QUESTION KIND ─────────────────────────────────────────────────────────────
//

/// The three question types supported by a quiz.
///
/// `TrueFalse` is a single-select kind restricted to exactly two choices.
/// The serde aliases accept the original data format's spellings
/// (`multiple-choice`, `multiple-answer`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    /// Exactly one correct option; selecting a choice replaces the previous one.
    #[serde(alias = "multiple-choice")]
    SingleChoice,
    /// A fixed set of correct options; choices toggle independently.
    #[serde(alias = "multiple-answer")]
    MultiChoice,
    /// A single-select question with exactly two choices.
    TrueFalse,
}

impl QuestionKind {
    /// Returns true for kinds where the selection is a single index.
    #[must_use]
    pub fn is_single_select(self) -> bool {
        matches!(self, QuestionKind::SingleChoice | QuestionKind::TrueFalse)
    }
}

//
// ─── ANSWER KEY ────────────────────────────────────────────────────────────────
//

/// The correct answer for a question: one index or a set of indices.
///
/// Untagged on the wire, so `0` and `[1, 2]` both parse. The set type drops
/// duplicate indices during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerKey {
    Single(usize),
    Multiple(BTreeSet<usize>),
}

impl AnswerKey {
    /// Returns true if `index` is one of the correct indices.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        match self {
            AnswerKey::Single(key) => *key == index,
            AnswerKey::Multiple(keys) => keys.contains(&index),
        }
    }

    fn indices(&self) -> Vec<usize> {
        match self {
            AnswerKey::Single(key) => vec![*key],
            AnswerKey::Multiple(keys) => keys.iter().copied().collect(),
        }
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// Unvalidated question data as authored or deserialized.
///
/// The field aliases accept the original data format (`type`, `correct`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionDraft {
    pub prompt: String,
    #[serde(alias = "type")]
    pub kind: QuestionKind,
    pub choices: Vec<String>,
    #[serde(alias = "correct")]
    pub key: AnswerKey,
}

impl QuestionDraft {
    /// Checks the draft's invariants and produces an immutable [`Question`].
    ///
    /// # Errors
    ///
    /// Returns a [`QuestionError`] describing the first violated invariant.
    pub fn validate(self) -> Result<Question, QuestionError> {
        if self.prompt.trim().is_empty() {
            return Err(QuestionError::BlankPrompt);
        }
        if self.choices.len() < 2 {
            return Err(QuestionError::NotEnoughChoices {
                len: self.choices.len(),
            });
        }
        if self.kind == QuestionKind::TrueFalse && self.choices.len() != 2 {
            return Err(QuestionError::TrueFalseChoices {
                len: self.choices.len(),
            });
        }

        match (&self.kind, &self.key) {
            (QuestionKind::SingleChoice | QuestionKind::TrueFalse, AnswerKey::Single(_)) => {}
            (QuestionKind::MultiChoice, AnswerKey::Multiple(keys)) => {
                if keys.is_empty() {
                    return Err(QuestionError::EmptyKey);
                }
            }
            _ => return Err(QuestionError::KeyShape { kind: self.kind }),
        }

        for index in self.key.indices() {
            if index >= self.choices.len() {
                return Err(QuestionError::KeyIndexOutOfRange {
                    index,
                    choices: self.choices.len(),
                });
            }
        }

        Ok(Question {
            prompt: self.prompt,
            kind: self.kind,
            choices: self.choices,
            key: self.key,
        })
    }
}

/// A validated, immutable quiz question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    kind: QuestionKind,
    choices: Vec<String>,
    key: AnswerKey,
}

impl Question {
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    #[must_use]
    pub fn key(&self) -> &AnswerKey {
        &self.key
    }
}

//
// ─── VALIDATION ERRORS ─────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt is blank")]
    BlankPrompt,

    #[error("question needs at least two choices, got {len}")]
    NotEnoughChoices { len: usize },

    #[error("true/false question must have exactly two choices, got {len}")]
    TrueFalseChoices { len: usize },

    #[error("answer key index {index} is out of range for {choices} choices")]
    KeyIndexOutOfRange { index: usize, choices: usize },

    #[error("multi-choice answer key is empty")]
    EmptyKey,

    #[error("answer key shape does not match question kind {kind:?}")]
    KeyShape { kind: QuestionKind },
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
