//! Plain-text rendering of the editor for a terminal.

use std::fmt::Write;

use sentence_mover_core::{SelectionEditor, sentence_spans};

use crate::config::DisplayConfig;

/// Render the content with the highlighted sentence wrapped in markers.
pub fn render_content(editor: &SelectionEditor, display: &DisplayConfig) -> String {
    let highlight = editor.highlight_ranges().into_iter().next();
    let mut out = String::new();
    let mut len = 0;
    for (i, c) in editor.content().chars().enumerate() {
        if highlight.as_ref().is_some_and(|h| h.start == i) {
            out.push_str(&display.highlight_open);
        }
        if highlight.as_ref().is_some_and(|h| h.end == i) {
            out.push_str(&display.highlight_close);
        }
        out.push(c);
        len = i + 1;
    }
    if highlight.as_ref().is_some_and(|h| h.start == len) {
        out.push_str(&display.highlight_open);
    }
    if highlight.as_ref().is_some_and(|h| h.end == len) {
        out.push_str(&display.highlight_close);
    }
    out
}

/// One line per sentence: its span and its text.
pub fn render_sentences(editor: &SelectionEditor) -> String {
    let mut out = String::new();
    for span in sentence_spans(editor.buffer().storage()) {
        let text = editor
            .buffer()
            .substring(span.to_range())
            .unwrap_or_default();
        let _ = writeln!(out, "{}..{} {:?}", span.start, span.end, text.as_str());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_is_bracketed() {
        let mut editor = SelectionEditor::from_text("A. B. C.");
        let display = DisplayConfig::default();
        assert_eq!(render_content(&editor, &display), "A. B. C.");

        editor.select_at(3).unwrap();
        assert_eq!(render_content(&editor, &display), "A.[ B.] C.");

        editor.select_at(7).unwrap();
        assert_eq!(render_content(&editor, &display), "A. B.[ C.]");
    }

    #[test]
    fn empty_highlight_renders_as_bare_markers() {
        let display = DisplayConfig::default();
        let mut editor = SelectionEditor::from_text("A. B.");
        editor.select_at(5).unwrap();
        assert_eq!(render_content(&editor, &display), "A. B.[]");

        let mut editor = SelectionEditor::from_text("");
        editor.select_at(0).unwrap();
        assert_eq!(render_content(&editor, &display), "[]");
    }

    #[test]
    fn sentence_listing() {
        let editor = SelectionEditor::from_text("Hi. Bye!");
        assert_eq!(render_sentences(&editor), "0..3 \"Hi.\"\n3..8 \" Bye!\"\n");
    }
}
