use std::collections::BTreeSet;

use thiserror::Error;

use crate::model::question::QuestionKind;

//
// ─── SELECTION ─────────────────────────────────────────────────────────────────
//

/// Transient per-question selection state, shaped by the question kind.
///
/// Single-select kinds hold at most one index (radio semantics); multi-choice
/// holds a set of indices (checkbox semantics). Choice indices come from the
/// rendered choice list, so range checking is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Single(Option<usize>),
    Multiple(BTreeSet<usize>),
}

impl Selection {
    /// Returns the empty selection matching a question kind.
    #[must_use]
    pub fn for_kind(kind: QuestionKind) -> Self {
        if kind.is_single_select() {
            Selection::Single(None)
        } else {
            Selection::Multiple(BTreeSet::new())
        }
    }

    /// Returns the selection after activating `choice`.
    ///
    /// Single-select replaces any prior pick; multi-select removes the index
    /// if present, else adds it. Pure: `self` is left untouched.
    #[must_use]
    pub fn toggle(&self, choice: usize) -> Self {
        match self {
            Selection::Single(_) => Selection::Single(Some(choice)),
            Selection::Multiple(picks) => {
                let mut picks = picks.clone();
                if !picks.remove(&choice) {
                    picks.insert(choice);
                }
                Selection::Multiple(picks)
            }
        }
    }

    /// Returns true if `choice` is currently selected.
    #[must_use]
    pub fn is_selected(&self, choice: usize) -> bool {
        match self {
            Selection::Single(pick) => *pick == Some(choice),
            Selection::Multiple(picks) => picks.contains(&choice),
        }
    }

    /// The commit guard: true once the selection is non-empty.
    #[must_use]
    pub fn is_committable(&self) -> bool {
        match self {
            Selection::Single(pick) => pick.is_some(),
            Selection::Multiple(picks) => !picks.is_empty(),
        }
    }

    /// Finalizes the selection into an immutable [`ChosenAnswer`].
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::Empty` when nothing is selected.
    pub fn commit(&self) -> Result<ChosenAnswer, SelectionError> {
        match self {
            Selection::Single(Some(pick)) => Ok(ChosenAnswer::Single(*pick)),
            Selection::Single(None) => Err(SelectionError::Empty),
            Selection::Multiple(picks) if picks.is_empty() => Err(SelectionError::Empty),
            Selection::Multiple(picks) => Ok(ChosenAnswer::Multiple(picks.clone())),
        }
    }
}

//
// ─── CHOSEN ANSWER ─────────────────────────────────────────────────────────────
//

/// A committed selection value, immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChosenAnswer {
    Single(usize),
    Multiple(BTreeSet<usize>),
}

impl ChosenAnswer {
    /// Returns true if `index` was among the chosen indices.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        match self {
            ChosenAnswer::Single(pick) => *pick == index,
            ChosenAnswer::Multiple(picks) => picks.contains(&index),
        }
    }
}

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no choice has been selected")]
    Empty,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_select_toggle_replaces_prior_pick() {
        let selection = Selection::for_kind(QuestionKind::SingleChoice);
        let selection = selection.toggle(1).toggle(3);

        assert_eq!(selection, Selection::Single(Some(3)));
        assert!(selection.is_selected(3));
        assert!(!selection.is_selected(1));
    }

    #[test]
    fn multi_select_toggle_twice_returns_to_original_state() {
        let selection = Selection::for_kind(QuestionKind::MultiChoice).toggle(1);
        let toggled = selection.toggle(2).toggle(2);

        assert_eq!(toggled, selection);
    }

    #[test]
    fn multi_select_accumulates_independent_indices() {
        let selection = Selection::for_kind(QuestionKind::MultiChoice)
            .toggle(2)
            .toggle(0);

        assert_eq!(selection, Selection::Multiple(BTreeSet::from([0, 2])));
    }

    #[test]
    fn empty_selection_is_not_committable() {
        assert!(!Selection::for_kind(QuestionKind::SingleChoice).is_committable());
        assert!(!Selection::for_kind(QuestionKind::TrueFalse).is_committable());
        assert!(!Selection::for_kind(QuestionKind::MultiChoice).is_committable());
    }

    #[test]
    fn non_empty_selection_is_committable() {
        assert!(Selection::Single(Some(0)).is_committable());
        assert!(Selection::Multiple(BTreeSet::from([2])).is_committable());
    }

    #[test]
    fn commit_rejects_empty_selection() {
        let err = Selection::Single(None).commit().unwrap_err();
        assert_eq!(err, SelectionError::Empty);

        let err = Selection::Multiple(BTreeSet::new()).commit().unwrap_err();
        assert_eq!(err, SelectionError::Empty);
    }

    #[test]
    fn commit_captures_the_selected_indices() {
        let single = Selection::Single(Some(2)).commit().unwrap();
        assert_eq!(single, ChosenAnswer::Single(2));

        let multiple = Selection::Multiple(BTreeSet::from([1, 2])).commit().unwrap();
        assert_eq!(multiple, ChosenAnswer::Multiple(BTreeSet::from([1, 2])));
    }

    #[test]
    fn toggle_does_not_mutate_the_original() {
        let original = Selection::Multiple(BTreeSet::from([1]));
        let _ = original.toggle(2);

        assert_eq!(original, Selection::Multiple(BTreeSet::from([1])));
    }
}
