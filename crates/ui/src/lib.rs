#![forbid(unsafe_code)]

pub mod vm;

pub use vm::{ChoiceRow, QuestionOutcome, QuestionVm, SummaryRow, SummaryVm};
