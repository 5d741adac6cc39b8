mod question_vm;
mod summary_vm;
mod time_fmt;

pub use question_vm::{ChoiceRow, QuestionOutcome, QuestionVm};
pub use summary_vm::{SummaryRow, SummaryVm};
