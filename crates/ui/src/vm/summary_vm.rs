use quiz_core::model::{ChoiceMark, QuizSession, ScoreError, ScoreReport, choice_marks};

use crate::vm::time_fmt::format_datetime;

/// One question block on the summary screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryRow {
    pub prompt: String,
    pub choices: Vec<(String, ChoiceMark)>,
    pub is_correct: bool,
}

/// View model for the summary screen, built from a completed session.
#[derive(Debug)]
pub struct SummaryVm {
    session: QuizSession,
    report: ScoreReport,
}

impl SummaryVm {
    /// # Errors
    ///
    /// Returns `ScoreError::LengthMismatch` if the session is not complete.
    pub fn new(session: QuizSession) -> Result<Self, ScoreError> {
        let report = session.report()?;
        Ok(Self { session, report })
    }

    /// The headline score, formatted as `"<total> / <questionCount>"`.
    #[must_use]
    pub fn score_line(&self) -> String {
        format!("{} / {}", self.report.total(), self.report.question_count())
    }

    #[must_use]
    pub fn completed_at_str(&self) -> Option<String> {
        self.session.completed_at().map(format_datetime)
    }

    #[must_use]
    pub fn rows(&self) -> Vec<SummaryRow> {
        self.session
            .questions()
            .iter()
            .zip(self.session.answers())
            .zip(self.report.per_question())
            .map(|((question, answer), correct)| SummaryRow {
                prompt: question.prompt().to_string(),
                choices: question
                    .choices()
                    .iter()
                    .cloned()
                    .zip(choice_marks(question, answer))
                    .collect(),
                is_correct: *correct,
            })
            .collect()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
