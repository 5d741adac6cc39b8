use thiserror::Error;

use crate::model::answer::RecordedAnswer;
use crate::model::question::Question;

//
// ─── SCORE REPORT ──────────────────────────────────────────────────────────────
//

/// Final result of a completed session: total correct plus per-question
/// correctness for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    total: usize,
    per_question: Vec<bool>,
}

impl ScoreReport {
    /// Evaluate a completed answer sequence against its question set.
    ///
    /// Each position is scored from the answer's captured key; the captured
    /// key and the question's key are the same value by construction, so the
    /// two sources always agree.
    ///
    /// # Errors
    ///
    /// Returns `ScoreError::LengthMismatch` unless there is exactly one answer
    /// per question.
    pub fn from_answers(
        questions: &[Question],
        answers: &[RecordedAnswer],
    ) -> Result<Self, ScoreError> {
        if answers.len() != questions.len() {
            return Err(ScoreError::LengthMismatch {
                questions: questions.len(),
                answers: answers.len(),
            });
        }

        let per_question: Vec<bool> = questions
            .iter()
            .zip(answers)
            .map(|(question, answer)| {
                debug_assert_eq!(answer.key(), question.key());
                answer.is_correct()
            })
            .collect();
        let total = per_question.iter().filter(|correct| **correct).count();

        Ok(Self {
            total,
            per_question,
        })
    }

    /// Number of correctly answered questions.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.per_question.len()
    }

    #[must_use]
    pub fn per_question(&self) -> &[bool] {
        &self.per_question
    }
}

//
// ─── CHOICE MARKS ──────────────────────────────────────────────────────────────
//

/// Display classification of one choice on the summary screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceMark {
    /// Not selected by the user.
    Unmarked,
    /// Selected and part of the answer key.
    SelectedCorrect,
    /// Selected but not part of the answer key.
    SelectedIncorrect,
}

/// Classifies every choice of a question for summary display.
#[must_use]
pub fn choice_marks(question: &Question, answer: &RecordedAnswer) -> Vec<ChoiceMark> {
    (0..question.choices().len())
        .map(|index| {
            if !answer.selected().contains(index) {
                ChoiceMark::Unmarked
            } else if answer.key().contains(index) {
                ChoiceMark::SelectedCorrect
            } else {
                ChoiceMark::SelectedIncorrect
            }
        })
        .collect()
}

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoreError {
    #[error("answer count ({answers}) does not match question count ({questions})")]
    LengthMismatch { questions: usize, answers: usize },
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
