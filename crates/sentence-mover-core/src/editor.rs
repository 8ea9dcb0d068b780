//! Sentence selection and move editing.
//!
//! `SelectionEditor` owns the text buffer and is the only way to mutate it.
//! It holds at most one selected sentence:
//!
//! - `Idle`: nothing selected
//! - `Selected(span)`: one sentence selected and highlighted
//!
//! `select_at` moves to `Selected`, a completed move returns to `Idle`.

use std::ops::Range;

use smol_str::SmolStr;

use crate::buffer::TextBuffer;
use crate::error::{EditError, RangeError};
use crate::format::Attribute;
use crate::locator::locate_sentence;
use crate::text::{TextRope, TextStorage};
use crate::types::SentenceSpan;

/// Selection state of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    Selected(SentenceSpan),
}

/// Result of a move request that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The selected sentence was relocated.
    Moved {
        /// Span the sentence occupied before the move.
        source: SentenceSpan,
        /// Offset of the sentence's first char after the move.
        inserted_at: usize,
    },
    /// Destination lies inside the selected sentence; nothing changed.
    Overlap,
    /// No sentence was selected; nothing changed.
    NothingSelected,
    /// The selection is empty, e.g. a cursor after the final terminator.
    /// Nothing changed and the selection is kept.
    EmptySelection,
}

impl MoveOutcome {
    /// Check whether the buffer changed.
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

/// Editor holding a buffer and a single-slot sentence selection.
#[derive(Debug, Clone, Default)]
pub struct SelectionEditor<S = TextRope> {
    buffer: TextBuffer<S>,
    state: SelectionState,
}

impl SelectionEditor<TextRope> {
    /// Create an editor over `content` with nothing selected.
    pub fn from_text(content: &str) -> Self {
        Self::new(TextBuffer::from_text(content))
    }

    /// Replace the whole text. Formatting and selection are dropped.
    pub fn replace_content(&mut self, content: &str) {
        self.buffer.reset(TextRope::from_str(content));
        self.state = SelectionState::Idle;
        tracing::debug!(
            target: "sentence_mover::editor",
            len = self.buffer.len_chars(),
            "content replaced"
        );
    }
}

impl<S: TextStorage> SelectionEditor<S> {
    pub fn new(buffer: TextBuffer<S>) -> Self {
        Self {
            buffer,
            state: SelectionState::Idle,
        }
    }

    /// Read-only view of the buffer.
    pub fn buffer(&self) -> &TextBuffer<S> {
        &self.buffer
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// The selected span, if any.
    pub fn selection(&self) -> Option<SentenceSpan> {
        match self.state {
            SelectionState::Idle => None,
            SelectionState::Selected(span) => Some(span),
        }
    }

    /// Text of the selected sentence, for packaging into a drag payload.
    pub fn selection_text(&self) -> Option<SmolStr> {
        self.selection()
            .and_then(|span| self.buffer.substring(span.to_range()).ok())
    }

    /// Full content as a String.
    pub fn content(&self) -> String {
        self.buffer.content()
    }

    /// Ranges currently highlighted, for rendering.
    pub fn highlight_ranges(&self) -> Vec<Range<usize>> {
        self.buffer.highlight_ranges()
    }

    /// Select and highlight the sentence under `position`.
    ///
    /// Replaces any earlier selection.
    pub fn select_at(&mut self, position: usize) -> Result<SentenceSpan, RangeError> {
        RangeError::check_offset(position, self.buffer.len_chars())?;

        let span = locate_sentence(self.buffer.storage(), position..position);
        self.buffer.set_highlight(span.to_range(), true)?;
        self.state = SelectionState::Selected(span);

        tracing::debug!(
            target: "sentence_mover::editor",
            position,
            start = span.start,
            end = span.end,
            "sentence selected"
        );
        Ok(span)
    }

    /// Drop the selection and its highlight.
    pub fn clear_selection(&mut self) {
        if self.state != SelectionState::Idle {
            tracing::debug!(target: "sentence_mover::editor", "selection cleared");
        }
        self.buffer.clear_highlight();
        self.state = SelectionState::Idle;
    }

    /// Move the selected sentence in front of the sentence under `drop_position`.
    ///
    /// Does nothing when idle, when the selection is empty or when the
    /// destination overlaps the selection. On success the selection is cleared.
    pub fn move_selection_to(&mut self, drop_position: usize) -> Result<MoveOutcome, RangeError> {
        RangeError::check_offset(drop_position, self.buffer.len_chars())?;

        let SelectionState::Selected(source) = self.state else {
            tracing::debug!(
                target: "sentence_mover::editor",
                drop_position,
                "move ignored, nothing selected"
            );
            return Ok(MoveOutcome::NothingSelected);
        };
        if source.is_empty() {
            tracing::debug!(
                target: "sentence_mover::editor",
                drop_position,
                "move ignored, selection is empty"
            );
            return Ok(MoveOutcome::EmptySelection);
        }

        let destination = locate_sentence(self.buffer.storage(), drop_position..drop_position);
        let source_text = self.buffer.substring(source.to_range())?;
        let source_runs = self.buffer.runs_within(source.to_range())?;

        if destination.overlaps(&source) {
            tracing::debug!(
                target: "sentence_mover::editor",
                drop_position,
                source_start = source.start,
                source_end = source.end,
                "move rejected, destination overlaps selection"
            );
            return Ok(MoveOutcome::Overlap);
        }

        // Nothing below can fail: the compensated offset is always within the
        // shortened buffer.
        self.buffer.delete_range(source.to_range())?;
        let inserted_at = if destination.start >= source.end {
            destination.start - source.len()
        } else {
            destination.start
        };
        self.buffer.insert_formatted(inserted_at, &source_text, source_runs)?;

        self.buffer.clear_highlight();
        self.state = SelectionState::Idle;

        tracing::debug!(
            target: "sentence_mover::editor",
            source_start = source.start,
            source_end = source.end,
            inserted_at,
            "sentence moved"
        );
        Ok(MoveOutcome::Moved {
            source,
            inserted_at,
        })
    }

    /// Apply a non-highlight attribute, e.g. from an external style command.
    ///
    /// Any mutation other than a move invalidates the selection, so it is
    /// cleared first. Highlight is refused with
    /// [`EditError::HighlightNotApplicable`]; use [`select_at`](Self::select_at).
    pub fn apply_attribute(
        &mut self,
        range: Range<usize>,
        attribute: Attribute,
    ) -> Result<(), EditError> {
        if attribute == Attribute::Highlight {
            return Err(EditError::HighlightNotApplicable);
        }
        RangeError::check_range(range.start, range.end, self.buffer.len_chars())?;
        self.clear_selection();
        self.buffer.apply_attribute(range, attribute)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::FormatRun;

    const SAMPLE: &str =
        "This is a sample sentence. Here's another one. And one more for good measure.";

    #[test]
    fn test_select_at_highlights_sentence() {
        let mut editor = SelectionEditor::from_text(SAMPLE);
        let span = editor.select_at(30).unwrap();

        insta::assert_debug_snapshot!(span, @r"
        SentenceSpan {
            start: 26,
            end: 46,
        }
        ");
        assert_eq!(editor.selection_text().as_deref(), Some(" Here's another one."));
        assert_eq!(editor.highlight_ranges(), vec![26..46]);
        assert_eq!(editor.state(), SelectionState::Selected(span));
    }

    #[test]
    fn test_reselect_replaces_highlight() {
        let mut editor = SelectionEditor::from_text(SAMPLE);
        editor.select_at(0).unwrap();
        editor.select_at(50).unwrap();
        assert_eq!(editor.highlight_ranges(), vec![46..77]);
        assert_eq!(editor.selection(), Some(SentenceSpan::new(46, 77)));
    }

    #[test]
    fn test_move_first_sentence_to_end() {
        let mut editor = SelectionEditor::from_text(SAMPLE);
        editor.select_at(3).unwrap();
        let outcome = editor.move_selection_to(77).unwrap();

        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                source: SentenceSpan::new(0, 26),
                inserted_at: 51,
            }
        );
        assert_eq!(
            editor.content(),
            " Here's another one. And one more for good measure.This is a sample sentence."
        );
        assert_eq!(editor.selection(), None);
        assert!(editor.highlight_ranges().is_empty());
    }

    #[test]
    fn test_move_backward_needs_no_compensation() {
        let mut editor = SelectionEditor::from_text("A. B. C.");
        editor.select_at(7).unwrap();
        let outcome = editor.move_selection_to(0).unwrap();

        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                source: SentenceSpan::new(5, 8),
                inserted_at: 0,
            }
        );
        assert_eq!(editor.content(), " C.A. B.");
    }

    #[test]
    fn test_move_when_idle_is_ignored() {
        let mut editor = SelectionEditor::from_text("A. B.");
        assert_eq!(editor.move_selection_to(0), Ok(MoveOutcome::NothingSelected));
        assert_eq!(editor.content(), "A. B.");
    }

    #[test]
    fn test_move_out_of_bounds_when_idle_still_errors() {
        let mut editor = SelectionEditor::from_text("A. B.");
        assert_eq!(
            editor.move_selection_to(6),
            Err(RangeError::OffsetOutOfBounds { offset: 6, len: 5 })
        );
    }

    #[test]
    fn test_moved_sentence_keeps_its_formatting() {
        let mut editor = SelectionEditor::from_text("A. Bold. C.");
        editor.apply_attribute(3..7, Attribute::Bold).unwrap();
        editor.apply_attribute(9..10, Attribute::Italic).unwrap();

        editor.select_at(4).unwrap();
        editor.move_selection_to(11).unwrap();

        assert_eq!(editor.content(), "A. C. Bold.");
        assert_eq!(
            editor.buffer().runs(),
            &[
                FormatRun::new(3..4, Attribute::Italic),
                FormatRun::new(6..10, Attribute::Bold),
            ]
        );
    }

    #[test]
    fn test_apply_attribute_clears_selection() {
        let mut editor = SelectionEditor::from_text("A. B.");
        editor.select_at(0).unwrap();
        editor.apply_attribute(0..1, Attribute::Underline).unwrap();
        assert_eq!(editor.selection(), None);
        assert!(editor.highlight_ranges().is_empty());
    }

    #[test]
    fn test_apply_attribute_rejects_bad_range_without_clearing() {
        let mut editor = SelectionEditor::from_text("A. B.");
        editor.select_at(0).unwrap();
        assert!(matches!(
            editor.apply_attribute(0..9, Attribute::Bold),
            Err(EditError::Range(RangeError::RangeOutOfBounds { .. }))
        ));
        assert_eq!(editor.selection(), Some(SentenceSpan::new(0, 2)));
    }

    #[test]
    fn test_apply_attribute_refuses_highlight() {
        let mut editor = SelectionEditor::from_text("A. B.");
        editor.select_at(0).unwrap();
        assert_eq!(
            editor.apply_attribute(3..5, Attribute::Highlight),
            Err(EditError::HighlightNotApplicable)
        );
        assert_eq!(editor.selection(), Some(SentenceSpan::new(0, 2)));
        assert_eq!(editor.highlight_ranges(), vec![0..2]);
    }

    #[test]
    fn test_replace_content_resets_state() {
        let mut editor = SelectionEditor::from_text("A. B.");
        editor.select_at(0).unwrap();
        editor.replace_content("Fresh text!");
        assert_eq!(editor.state(), SelectionState::Idle);
        assert_eq!(editor.content(), "Fresh text!");
        assert!(editor.buffer().runs().is_empty());
    }

    #[test]
    fn test_empty_buffer() {
        let mut editor = SelectionEditor::from_text("");
        let span = editor.select_at(0).unwrap();
        assert_eq!(span, SentenceSpan::new(0, 0));
        assert_eq!(editor.highlight_ranges(), vec![0..0]);
        assert_eq!(editor.selection_text().as_deref(), Some(""));
        assert_eq!(editor.move_selection_to(0), Ok(MoveOutcome::EmptySelection));
    }

    #[test]
    fn test_select_past_final_terminator() {
        let mut editor = SelectionEditor::from_text("A. B.");
        let span = editor.select_at(5).unwrap();
        assert_eq!(span, SentenceSpan::new(5, 5));
        assert_eq!(editor.highlight_ranges(), vec![5..5]);

        assert_eq!(editor.move_selection_to(0), Ok(MoveOutcome::EmptySelection));
        assert_eq!(editor.content(), "A. B.");
        assert_eq!(editor.selection(), Some(span));

        editor.select_at(1).unwrap();
        assert_eq!(editor.highlight_ranges(), vec![0..2]);
    }
}
