//! The authoritative text buffer: content plus formatting.
//!
//! Every mutation validates its input before touching anything, so a call
//! that returns `Err` leaves content and formatting exactly as they were.

use std::ops::Range;

use smol_str::SmolStr;

use crate::error::RangeError;
use crate::format::{Attribute, FormatRun, Formatting};
use crate::text::{TextRope, TextStorage};

/// Text content with per-range formatting, generic over its storage.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer<S = TextRope> {
    text: S,
    formatting: Formatting,
}

impl TextBuffer<TextRope> {
    /// Create a rope-backed buffer holding `content` with no formatting.
    pub fn from_text(content: &str) -> Self {
        Self::new(TextRope::from_str(content))
    }
}

impl<S: TextStorage> TextBuffer<S> {
    /// Wrap existing storage. The buffer starts without formatting.
    pub fn new(text: S) -> Self {
        Self {
            text,
            formatting: Formatting::new(),
        }
    }

    /// Raw storage, for read-only consumers such as the sentence locator.
    pub fn storage(&self) -> &S {
        &self.text
    }

    /// All formatting runs in application order.
    pub fn runs(&self) -> &[FormatRun] {
        self.formatting.runs()
    }

    pub fn len_chars(&self) -> usize {
        self.text.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Full content as a String.
    pub fn content(&self) -> String {
        self.text.to_string()
    }

    /// Characters in `range`.
    pub fn substring(&self, range: Range<usize>) -> Result<SmolStr, RangeError> {
        RangeError::check_range(range.start, range.end, self.len_chars())?;
        self.text
            .slice(range.clone())
            .ok_or(RangeError::RangeOutOfBounds {
                start: range.start,
                end: range.end,
                len: self.len_chars(),
            })
    }

    /// Remove the characters in `range` and fix up formatting around the hole.
    pub fn delete_range(&mut self, range: Range<usize>) -> Result<(), RangeError> {
        RangeError::check_range(range.start, range.end, self.len_chars())?;
        if range.is_empty() {
            return Ok(());
        }
        self.text.delete(range.clone());
        self.formatting.on_delete(range);
        Ok(())
    }

    /// Insert plain text at `offset`.
    pub fn insert(&mut self, offset: usize, text: &str) -> Result<(), RangeError> {
        self.insert_formatted(offset, text, Vec::new())
    }

    /// Insert text at `offset` carrying its own formatting.
    ///
    /// `runs` are relative to the inserted text and must lie within it.
    pub fn insert_formatted(
        &mut self,
        offset: usize,
        text: &str,
        runs: Vec<FormatRun>,
    ) -> Result<(), RangeError> {
        RangeError::check_offset(offset, self.len_chars())?;
        let inserted_len = text.chars().count();
        for run in &runs {
            RangeError::check_range(run.range.start, run.range.end, inserted_len)?;
        }
        if inserted_len == 0 {
            return Ok(());
        }

        self.text.insert(offset, text);
        self.formatting.on_insert(offset, inserted_len);
        self.formatting.extend_rebased(offset, runs);
        Ok(())
    }

    /// Set or clear the highlight over `range`.
    ///
    /// Turning highlight on first clears it everywhere, so at most one
    /// highlighted range exists at a time. An empty range is recorded as a
    /// zero-length highlight marking the selection point.
    pub fn set_highlight(&mut self, range: Range<usize>, on: bool) -> Result<(), RangeError> {
        RangeError::check_range(range.start, range.end, self.len_chars())?;
        if on {
            self.formatting.clear_attribute(Attribute::Highlight);
            self.formatting.push(FormatRun::new(range, Attribute::Highlight));
        } else {
            self.formatting.remove_attribute(range, Attribute::Highlight);
        }
        Ok(())
    }

    /// Remove highlight from the whole buffer.
    pub fn clear_highlight(&mut self) {
        self.formatting.clear_attribute(Attribute::Highlight);
    }

    /// Ranges currently highlighted.
    pub fn highlight_ranges(&self) -> Vec<Range<usize>> {
        self.formatting.ranges_with(Attribute::Highlight)
    }

    /// Apply a non-exclusive attribute over `range`.
    ///
    /// Highlight is routed through [`set_highlight`](Self::set_highlight) so
    /// it stays exclusive.
    pub fn apply_attribute(
        &mut self,
        range: Range<usize>,
        attribute: Attribute,
    ) -> Result<(), RangeError> {
        if attribute == Attribute::Highlight {
            return self.set_highlight(range, true);
        }
        RangeError::check_range(range.start, range.end, self.len_chars())?;
        self.formatting.push(FormatRun::new(range, attribute));
        Ok(())
    }

    /// Attributes covering `offset`.
    pub fn attributes_at(&self, offset: usize) -> Vec<Attribute> {
        self.formatting.attributes_at(offset)
    }

    /// Non-highlight runs inside `range`, rebased to its start.
    pub fn runs_within(&self, range: Range<usize>) -> Result<Vec<FormatRun>, RangeError> {
        RangeError::check_range(range.start, range.end, self.len_chars())?;
        Ok(self
            .formatting
            .runs_within(range, Some(Attribute::Highlight)))
    }

    /// Replace storage and drop all formatting.
    pub fn reset(&mut self, text: S) {
        self.text = text;
        self.formatting.clear();
    }
}
