use crate::model::question::AnswerKey;
use crate::model::selection::ChosenAnswer;

impl AnswerKey {
    /// Returns true if `selected` matches this key.
    ///
    /// A single key matches only the same single index; a multiple key matches
    /// only the identical index set. A shape mismatch between key and
    /// selection is incorrect by definition.
    #[must_use]
    pub fn accepts(&self, selected: &ChosenAnswer) -> bool {
        match (self, selected) {
            (AnswerKey::Single(key), ChosenAnswer::Single(pick)) => pick == key,
            (AnswerKey::Multiple(keys), ChosenAnswer::Multiple(picks)) => picks == keys,
            _ => false,
        }
    }
}

/// One committed answer, paired with the answer key of the question it
/// answered.
///
/// The key is copied at recording time so scoring never needs to reach back
/// into the question set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedAnswer {
    selected: ChosenAnswer,
    key: AnswerKey,
}

impl RecordedAnswer {
    #[must_use]
    pub fn new(selected: ChosenAnswer, key: AnswerKey) -> Self {
        Self { selected, key }
    }

    #[must_use]
    pub fn selected(&self) -> &ChosenAnswer {
        &self.selected
    }

    #[must_use]
    pub fn key(&self) -> &AnswerKey {
        &self.key
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.key.accepts(&self.selected)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
