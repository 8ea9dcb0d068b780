//! Capability traits between the editor and a drag-and-drop platform.
//!
//! The platform layer owns the drag session itself (pointer tracking, item
//! providers, cross-app transfer). It only needs two things from the editor:
//! something to drag, and somewhere to drop it. Translating screen
//! coordinates into buffer offsets is also the platform's job; use
//! [`checked_offset`](crate::error::checked_offset) for signed positions.

use smol_str::SmolStr;

use crate::editor::{MoveOutcome, SelectionEditor};
use crate::error::RangeError;
use crate::text::TextStorage;
use crate::types::SentenceSpan;

/// Plain-text payload for an in-progress sentence drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    /// The dragged sentence, including any leading whitespace.
    pub text: SmolStr,
    /// Where the sentence currently sits in the buffer.
    pub source: SentenceSpan,
}

/// Produces a payload when the platform begins a drag.
pub trait DragSource {
    /// Payload for the current selection, or None when nothing or only an
    /// empty span is selected (the platform should then refuse to start a
    /// drag).
    fn drag_payload(&self) -> Option<DragPayload>;
}

/// Accepts a drop once the platform has resolved it to a buffer offset.
pub trait DropTarget {
    /// Whether a drop would move anything right now.
    fn can_accept_drop(&self) -> bool;

    /// Perform the drop at `position`.
    fn accept_drop(&mut self, position: usize) -> Result<MoveOutcome, RangeError>;
}

impl<S: TextStorage> DragSource for SelectionEditor<S> {
    fn drag_payload(&self) -> Option<DragPayload> {
        let source = self.selection().filter(|span| !span.is_empty())?;
        let text = self.selection_text()?;
        Some(DragPayload { text, source })
    }
}

impl<S: TextStorage> DropTarget for SelectionEditor<S> {
    fn can_accept_drop(&self) -> bool {
        self.selection().is_some_and(|span| !span.is_empty())
    }

    fn accept_drop(&mut self, position: usize) -> Result<MoveOutcome, RangeError> {
        self.move_selection_to(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_payload_when_idle() {
        let editor = SelectionEditor::from_text("A. B.");
        assert_eq!(editor.drag_payload(), None);
        assert!(!editor.can_accept_drop());
    }

    #[test]
    fn test_drag_then_drop() {
        let mut editor = SelectionEditor::from_text("A. B. C.");
        editor.select_at(3).unwrap();

        let payload = editor.drag_payload().unwrap();
        assert_eq!(payload.text.as_str(), " B.");
        assert_eq!(payload.source, SentenceSpan::new(2, 5));
        assert!(editor.can_accept_drop());

        let outcome = editor.accept_drop(8).unwrap();
        assert!(outcome.is_moved());
        assert_eq!(editor.content(), "A. C. B.");
        assert!(!editor.can_accept_drop());
        assert_eq!(editor.drag_payload(), None);
    }

    #[test]
    fn test_empty_selection_is_not_draggable() {
        let mut editor = SelectionEditor::from_text("A. B.");
        editor.select_at(5).unwrap();
        assert_eq!(editor.drag_payload(), None);
        assert!(!editor.can_accept_drop());
        assert_eq!(editor.accept_drop(0), Ok(MoveOutcome::EmptySelection));
        assert_eq!(editor.content(), "A. B.");
    }
}
