use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::Path;

use quiz_core::model::{AnswerKey, Question, QuestionDraft, QuestionError, QuestionKind};

//
// ─── LOAD ERRORS ───────────────────────────────────────────────────────────────
//

#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid { index: usize, source: QuestionError },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "failed to read question file: {err}"),
            LoadError::Parse(err) => write!(f, "failed to parse question file: {err}"),
            LoadError::Invalid { index, source } => {
                write!(f, "question {index} is invalid: {source}")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            LoadError::Parse(err) => Some(err),
            LoadError::Invalid { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err)
    }
}

//
// ─── LOADING ───────────────────────────────────────────────────────────────────
//

/// Load and validate a JSON question set.
///
/// The file is a JSON array of question objects; both this crate's field
/// names (`kind`, `key`) and the original data format's (`type`, `correct`)
/// are accepted.
///
/// # Errors
///
/// Returns a `LoadError` for I/O failures, malformed JSON, or a question
/// that fails validation.
pub fn load_question_file(path: &Path) -> Result<Vec<Question>, LoadError> {
    let raw = fs::read_to_string(path)?;
    parse_question_set(&raw)
}

pub fn parse_question_set(raw: &str) -> Result<Vec<Question>, LoadError> {
    let drafts: Vec<QuestionDraft> = serde_json::from_str(raw)?;
    drafts
        .into_iter()
        .enumerate()
        .map(|(index, draft)| {
            draft
                .validate()
                .map_err(|source| LoadError::Invalid { index, source })
        })
        .collect()
}

//
// ─── SAMPLE SET ────────────────────────────────────────────────────────────────
//

/// The built-in three-question set, used when no question file is given.
///
/// # Panics
///
/// Panics if the hard-coded set fails validation, which would be a bug in
/// this function.
#[must_use]
pub fn sample_questions() -> Vec<Question> {
    vec![
        QuestionDraft {
            prompt: "What are the other two primary colours besides Yellow?".into(),
            kind: QuestionKind::MultiChoice,
            choices: vec!["Green".into(), "Red".into(), "Blue".into(), "White".into()],
            key: AnswerKey::Multiple(BTreeSet::from([1, 2])),
        },
        QuestionDraft {
            prompt: "What is the capital of France?".into(),
            kind: QuestionKind::SingleChoice,
            choices: vec!["Paris".into(), "London".into(), "Rome".into(), "Berlin".into()],
            key: AnswerKey::Single(0),
        },
        QuestionDraft {
            prompt: "The earth is flat.".into(),
            kind: QuestionKind::TrueFalse,
            choices: vec!["True".into(), "False".into()],
            key: AnswerKey::Single(1),
        },
    ]
    .into_iter()
    .map(|draft| {
        draft
            .validate()
            .expect("built-in sample question should be valid")
    })
    .collect()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
