//! Editor actions and their execution.
//!
//! `EditorAction` is the serialisable form of the selection commands an
//! adapter can send. Adapters that replay scripts or receive JSON commands
//! hand them to `execute_action`.

use serde::{Deserialize, Serialize};

use crate::editor::{MoveOutcome, SelectionEditor};
use crate::error::RangeError;
use crate::text::TextStorage;
use crate::types::SentenceSpan;

/// A semantic editing operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum EditorAction {
    /// Select the sentence under a tap.
    SelectAt { offset: usize },
    /// Drop the selected sentence at an offset.
    MoveSelectionTo { offset: usize },
    /// Tap outside the text or cancel a drag.
    ClearSelection,
}

/// What an executed action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Selected(SentenceSpan),
    Move(MoveOutcome),
    Cleared,
}

/// Execute an editor action.
pub fn execute_action<S: TextStorage>(
    editor: &mut SelectionEditor<S>,
    action: &EditorAction,
) -> Result<ActionOutcome, RangeError> {
    match action {
        EditorAction::SelectAt { offset } => {
            editor.select_at(*offset).map(ActionOutcome::Selected)
        }
        EditorAction::MoveSelectionTo { offset } => {
            editor.move_selection_to(*offset).map(ActionOutcome::Move)
        }
        EditorAction::ClearSelection => {
            editor.clear_selection();
            Ok(ActionOutcome::Cleared)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_sequence() {
        let mut editor = SelectionEditor::from_text("A. B. C.");

        let selected = execute_action(&mut editor, &EditorAction::SelectAt { offset: 3 });
        assert_eq!(selected, Ok(ActionOutcome::Selected(SentenceSpan::new(2, 5))));

        let cleared = execute_action(&mut editor, &EditorAction::ClearSelection);
        assert_eq!(cleared, Ok(ActionOutcome::Cleared));
        assert!(editor.highlight_ranges().is_empty());

        let moved = execute_action(&mut editor, &EditorAction::MoveSelectionTo { offset: 8 });
        assert_eq!(moved, Ok(ActionOutcome::Move(MoveOutcome::NothingSelected)));
        assert_eq!(editor.content(), "A. B. C.");
    }

    #[test]
    fn test_action_json_shape() {
        let action: EditorAction =
            serde_json::from_str(r#"{"action":"move_selection_to","offset":4}"#).unwrap();
        assert_eq!(action, EditorAction::MoveSelectionTo { offset: 4 });

        let json = serde_json::to_string(&EditorAction::ClearSelection).unwrap();
        assert_eq!(json, r#"{"action":"clear_selection"}"#);
    }
}
