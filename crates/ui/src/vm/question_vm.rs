use chrono::{DateTime, Utc};

use quiz_core::model::{
    QuestionKind, QuizSession, Selection, SessionError, SessionOutcome, SessionProgress,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionOutcome {
    Continue,
    Completed,
}

/// One renderable choice line: the label plus whether it is currently picked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceRow {
    pub label: String,
    pub selected: bool,
}

/// View model for the question screen.
///
/// Owns the session and the transient selection for the question on screen.
/// The presentation layer feeds it toggle/next intents and renders from its
/// getters; it knows nothing about how choices are drawn.
pub struct QuestionVm {
    session: QuizSession,
    selection: Selection,
}

impl QuestionVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        let selection = session
            .current_question()
            .map_or(Selection::Single(None), |q| Selection::for_kind(q.kind()));
        Self { session, selection }
    }

    #[must_use]
    pub fn prompt(&self) -> Option<&str> {
        self.session.current_question().map(|q| q.prompt())
    }

    #[must_use]
    pub fn kind(&self) -> Option<QuestionKind> {
        self.session.current_question().map(|q| q.kind())
    }

    #[must_use]
    pub fn choices(&self) -> Vec<ChoiceRow> {
        self.session
            .current_question()
            .map_or_else(Vec::new, |question| {
                question
                    .choices()
                    .iter()
                    .enumerate()
                    .map(|(index, label)| ChoiceRow {
                        label: label.clone(),
                        selected: self.selection.is_selected(index),
                    })
                    .collect()
            })
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        self.session.progress()
    }

    /// Activate a choice on the current question.
    pub fn toggle(&mut self, index: usize) {
        self.selection = self.selection.toggle(index);
    }

    /// Whether the Next action is available.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.selection.is_committable()
    }

    /// Commit the selection and move to the next question.
    ///
    /// Resets the selection to the empty state of the following question's
    /// kind, so a multi-choice set never leaks into a single-choice screen.
    ///
    /// # Errors
    ///
    /// Propagates `SessionError` for an empty selection or a completed session.
    pub fn next(&mut self, now: DateTime<Utc>) -> Result<QuestionOutcome, SessionError> {
        match self.session.answer_current(&self.selection, now)? {
            SessionOutcome::Continue => {
                if let Some(question) = self.session.current_question() {
                    self.selection = Selection::for_kind(question.kind());
                }
                Ok(QuestionOutcome::Continue)
            }
            SessionOutcome::Completed => Ok(QuestionOutcome::Completed),
        }
    }

    /// Hand the session over, typically to build a summary once complete.
    #[must_use]
    pub fn into_session(self) -> QuizSession {
        self.session
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
