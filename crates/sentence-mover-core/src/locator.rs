//! Sentence boundary detection.
//!
//! Sentences are delimited by a fixed set of ASCII terminators. Whitespace
//! following a terminator belongs to the next sentence, so the spans returned
//! here tile the buffer without gaps.

use std::ops::Range;

use crate::text::TextStorage;
use crate::types::SentenceSpan;

/// Characters that end a sentence.
pub const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Check whether `c` ends a sentence.
pub fn is_terminator(c: char) -> bool {
    TERMINATORS.contains(&c)
}

/// Find the sentence enclosing `anchor`.
///
/// The span starts one past the nearest terminator strictly before
/// `anchor.start` (or at 0) and ends one past the nearest terminator at or
/// after `anchor.end` (or at the end of the text). Zero-length anchors are
/// accepted; anchors past the end of the text are clamped.
pub fn locate_sentence<S: TextStorage>(text: &S, anchor: Range<usize>) -> SentenceSpan {
    let len = text.len_chars();
    let (anchor_start, anchor_end) = if anchor.start <= anchor.end {
        (anchor.start, anchor.end)
    } else {
        (anchor.end, anchor.start)
    };

    let start = find_sentence_start(text, anchor_start.min(len));
    let end = find_sentence_end(text, anchor_end.min(len));

    tracing::trace!(
        target: "sentence_mover::locator",
        anchor_start,
        anchor_end,
        start,
        end,
        "located sentence"
    );

    SentenceSpan::new(start, end)
}

/// Scan backward from `offset` for the nearest terminator strictly before it.
fn find_sentence_start<S: TextStorage>(text: &S, offset: usize) -> usize {
    let mut pos = offset;
    while pos > 0 {
        match text.char_at(pos - 1) {
            Some(c) if is_terminator(c) => return pos,
            Some(_) => pos -= 1,
            None => break,
        }
    }
    0
}

/// Scan forward from `offset` for the nearest terminator at or after it.
fn find_sentence_end<S: TextStorage>(text: &S, offset: usize) -> usize {
    let len = text.len_chars();
    let mut pos = offset;
    while pos < len {
        match text.char_at(pos) {
            Some(c) if is_terminator(c) => return pos + 1,
            Some(_) => pos += 1,
            None => break,
        }
    }
    len
}

/// Enumerate every sentence of the text in order.
///
/// The spans are contiguous and together cover `[0, len)`. Empty text yields
/// no spans.
pub fn sentence_spans<S: TextStorage>(text: &S) -> Vec<SentenceSpan> {
    let len = text.len_chars();
    let mut spans = Vec::new();
    let mut start = 0;
    while start < len {
        let end = find_sentence_end(text, start);
        spans.push(SentenceSpan::new(start, end));
        start = end;
    }
    spans
}
