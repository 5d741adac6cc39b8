mod answer;
mod question;
mod score;
mod selection;
mod session;

pub use answer::RecordedAnswer;
pub use question::{AnswerKey, Question, QuestionDraft, QuestionError, QuestionKind};
pub use score::{ChoiceMark, ScoreError, ScoreReport, choice_marks};
pub use selection::{ChosenAnswer, Selection, SelectionError};
pub use session::{QuizSession, SessionError, SessionOutcome, SessionProgress};
