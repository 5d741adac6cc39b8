use std::fmt;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::answer::RecordedAnswer;
use crate::model::question::Question;
use crate::model::score::{ScoreError, ScoreReport};
use crate::model::selection::{Selection, SelectionError};

//
// ─── OUTCOME & PROGRESS ────────────────────────────────────────────────────────
//

/// Result of committing an answer: more questions remain, or the session is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Continue,
    Completed,
}

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory state of one quiz attempt.
///
/// Steps through the question list in order, appending one [`RecordedAnswer`]
/// per commit. `answers[i]` always answers `questions[i]`; answers are never
/// altered or removed once appended.
pub struct QuizSession {
    questions: Vec<Question>,
    current: usize,
    answers: Vec<RecordedAnswer>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Create a session over the given question list.
    ///
    /// `started_at` should come from the caller's clock to keep time
    /// deterministic.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no questions are provided.
    pub fn new(questions: Vec<Question>, started_at: DateTime<Utc>) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }

        Ok(Self {
            questions,
            current: 0,
            answers: Vec::new(),
            started_at,
            completed_at: None,
        })
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn answers(&self) -> &[RecordedAnswer] {
        &self.answers
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// The question awaiting an answer, or `None` once the session is complete.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.current < self.questions.len() {
            Some(&self.questions[self.current])
        } else {
            None
        }
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.questions.len(),
            answered: self.answers.len(),
            remaining: self.questions.len().saturating_sub(self.current),
            is_complete: self.is_complete(),
        }
    }

    /// Commit a selection for the current question and advance.
    ///
    /// Records the committed value together with the current question's answer
    /// key, then moves to the next question. When the final question was just
    /// answered, stamps `completed_at` and reports completion; the caller
    /// should branch to scoring rather than request another question.
    ///
    /// `answered_at` should come from the caller's clock.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is already finished.
    /// Returns `SessionError::Selection` if the selection is empty.
    pub fn answer_current(
        &mut self,
        selection: &Selection,
        answered_at: DateTime<Utc>,
    ) -> Result<SessionOutcome, SessionError> {
        let Some(question) = self.current_question() else {
            return Err(SessionError::Completed);
        };
        let key = question.key().clone();
        let selected = selection.commit()?;

        self.answers.push(RecordedAnswer::new(selected, key));
        self.current += 1;

        if self.current >= self.questions.len() {
            self.completed_at = Some(answered_at);
            return Ok(SessionOutcome::Completed);
        }
        Ok(SessionOutcome::Continue)
    }

    /// Score the completed session.
    ///
    /// # Errors
    ///
    /// Returns `ScoreError::LengthMismatch` if the session is not complete.
    pub fn report(&self) -> Result<ScoreReport, ScoreError> {
        ScoreReport::from_answers(&self.questions, &self.answers)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("answers_len", &self.answers.len())
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for session")]
    Empty,

    #[error("session already completed")]
    Completed,

    #[error(transparent)]
    Selection(#[from] SelectionError),
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnswerKey, ChosenAnswer, QuestionDraft, QuestionKind};
    use crate::time::fixed_now;
    use std::collections::BTreeSet;

    /// The three-question set from the original app: primary colours
    /// (multi-choice, key {1, 2}), capital of France (single-choice, key 0),
    /// the earth is flat (true/false, key 1).
    fn sample_questions() -> Vec<Question> {
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
        .map(|draft| draft.validate().unwrap())
        .collect()
    }

    fn single(pick: usize) -> Selection {
        Selection::Single(Some(pick))
    }

    fn multiple<const N: usize>(picks: [usize; N]) -> Selection {
        Selection::Multiple(BTreeSet::from(picks))
    }

    #[test]
    fn empty_question_list_is_rejected() {
        let err = QuizSession::new(Vec::new(), fixed_now()).unwrap_err();
        assert!(matches!(err, SessionError::Empty));
    }

    #[test]
    fn session_advances_and_completes() {
        let mut session = QuizSession::new(sample_questions(), fixed_now()).unwrap();

        assert!(!session.is_complete());
        assert_eq!(session.progress().remaining, 3);

        let outcome = session.answer_current(&multiple([1, 2]), fixed_now()).unwrap();
        assert_eq!(outcome, SessionOutcome::Continue);
        assert_eq!(session.completed_at(), None);

        let outcome = session.answer_current(&single(0), fixed_now()).unwrap();
        assert_eq!(outcome, SessionOutcome::Continue);

        let outcome = session.answer_current(&single(1), fixed_now()).unwrap();
        assert_eq!(outcome, SessionOutcome::Completed);
        assert!(session.is_complete());
        assert_eq!(session.completed_at(), Some(fixed_now()));
        assert_eq!(session.current_question(), None);
    }

    #[test]
    fn answers_are_appended_in_question_order() {
        let mut session = QuizSession::new(sample_questions(), fixed_now()).unwrap();

        session.answer_current(&multiple([1]), fixed_now()).unwrap();
        assert_eq!(session.answers().len(), 1);
        let first = session.answers()[0].clone();

        session.answer_current(&single(2), fixed_now()).unwrap();
        assert_eq!(session.answers().len(), 2);

        // earlier entries are untouched by later commits
        assert_eq!(session.answers()[0], first);
        assert_eq!(
            session.answers()[0].selected(),
            &ChosenAnswer::Multiple(BTreeSet::from([1]))
        );
        assert_eq!(session.answers()[1].selected(), &ChosenAnswer::Single(2));
        assert_eq!(session.answers()[1].key(), session.questions()[1].key());
    }

    #[test]
    fn empty_selection_cannot_be_committed() {
        let mut session = QuizSession::new(sample_questions(), fixed_now()).unwrap();

        let err = session
            .answer_current(&Selection::Multiple(BTreeSet::new()), fixed_now())
            .unwrap_err();
        assert!(matches!(err, SessionError::Selection(SelectionError::Empty)));

        // nothing was recorded and the index did not move
        assert_eq!(session.answers().len(), 0);
        assert_eq!(session.progress().answered, 0);
    }

    #[test]
    fn completed_session_rejects_further_answers() {
        let mut session = QuizSession::new(sample_questions(), fixed_now()).unwrap();
        session.answer_current(&multiple([1, 2]), fixed_now()).unwrap();
        session.answer_current(&single(0), fixed_now()).unwrap();
        session.answer_current(&single(1), fixed_now()).unwrap();

        let err = session.answer_current(&single(0), fixed_now()).unwrap_err();
        assert!(matches!(err, SessionError::Completed));
        assert_eq!(session.answers().len(), 3);
    }

    #[test]
    fn scoring_an_incomplete_session_fails() {
        let mut session = QuizSession::new(sample_questions(), fixed_now()).unwrap();
        session.answer_current(&multiple([1, 2]), fixed_now()).unwrap();

        let err = session.report().unwrap_err();
        assert!(matches!(err, ScoreError::LengthMismatch { .. }));
    }

    #[test]
    fn all_correct_run_scores_full_marks() {
        let mut session = QuizSession::new(sample_questions(), fixed_now()).unwrap();
        session.answer_current(&multiple([1, 2]), fixed_now()).unwrap();
        session.answer_current(&single(0), fixed_now()).unwrap();
        session.answer_current(&single(1), fixed_now()).unwrap();

        let report = session.report().unwrap();
        assert_eq!(report.total(), 3);
        assert_eq!(report.per_question(), &[true, true, true]);
    }

    #[test]
    fn all_wrong_run_scores_zero() {
        let mut session = QuizSession::new(sample_questions(), fixed_now()).unwrap();
        session.answer_current(&multiple([1]), fixed_now()).unwrap();
        session.answer_current(&single(1), fixed_now()).unwrap();
        session.answer_current(&single(0), fixed_now()).unwrap();

        let report = session.report().unwrap();
        assert_eq!(report.total(), 0);
        assert_eq!(report.per_question(), &[false, false, false]);
    }

    #[test]
    fn superset_of_the_key_is_incorrect() {
        let mut session = QuizSession::new(sample_questions(), fixed_now()).unwrap();
        session
            .answer_current(&multiple([1, 2, 0]), fixed_now())
            .unwrap();
        session.answer_current(&single(0), fixed_now()).unwrap();
        session.answer_current(&single(1), fixed_now()).unwrap();

        let report = session.report().unwrap();
        assert_eq!(report.per_question(), &[false, true, true]);
        assert_eq!(report.total(), 2);
    }
}
