//! Core value type: the sentence span.
//!
//! Spans are framework-agnostic and carry no reference to the buffer they
//! were computed from.

use std::ops::Range;

/// A half-open char range `[start, end)` covering one sentence.
///
/// A span is a value computed against the buffer content at one moment. It
/// goes stale as soon as content before `start` changes.
#[derive(Clone, Debug, Copy, PartialEq, Eq, Hash, Default)]
pub struct SentenceSpan {
    /// Inclusive start offset.
    pub start: usize,
    /// Exclusive end offset.
    pub end: usize,
}

impl SentenceSpan {
    /// Create a new span. Callers guarantee `start <= end`.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} after end {end}");
        Self { start, end }
    }

    /// Length in chars.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if an offset is within the span.
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Check whether two spans share at least one char position.
    ///
    /// An empty span overlaps a non-empty one when it sits strictly inside it.
    pub fn overlaps(&self, other: &SentenceSpan) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Convert to a `Range<usize>`.
    pub fn to_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for SentenceSpan {
    fn from(r: Range<usize>) -> Self {
        Self::new(r.start, r.end)
    }
}

impl From<SentenceSpan> for Range<usize> {
    fn from(s: SentenceSpan) -> Self {
        s.start..s.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_basics() {
        let span = SentenceSpan::new(2, 5);
        assert_eq!(span.len(), 3);
        assert!(!span.is_empty());
        assert!(span.contains(2));
        assert!(span.contains(4));
        assert!(!span.contains(5));
        assert_eq!(span.to_range(), 2..5);
        assert_eq!(SentenceSpan::from(2..5), span);
    }

    #[test]
    fn test_overlaps() {
        let a = SentenceSpan::new(2, 5);

        assert!(a.overlaps(&SentenceSpan::new(4, 8)));
        assert!(a.overlaps(&SentenceSpan::new(0, 3)));
        assert!(a.overlaps(&a));

        // Adjacent half-open spans do not overlap.
        assert!(!a.overlaps(&SentenceSpan::new(5, 8)));
        assert!(!a.overlaps(&SentenceSpan::new(0, 2)));

        // Empty spans only overlap when strictly inside.
        assert!(a.overlaps(&SentenceSpan::new(3, 3)));
        assert!(!a.overlaps(&SentenceSpan::new(2, 2)));
        assert!(!a.overlaps(&SentenceSpan::new(5, 5)));
    }
}
