//! Text storage abstraction for the buffer.
//!
//! The `TextStorage` trait is the raw character store underneath
//! [`TextBuffer`](crate::buffer::TextBuffer). It knows nothing about
//! formatting or bounds policy; the buffer validates before calling into it.

use smol_str::{SmolStr, ToSmolStr};
use std::ops::Range;

/// A character store that supports editing by char offset.
///
/// All offsets are in Unicode scalar values (chars), not bytes or UTF-16.
pub trait TextStorage {
    /// Total length in chars (Unicode scalar values).
    fn len_chars(&self) -> usize;

    /// Check if empty.
    fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// Insert text at char offset. Callers guarantee `char_offset <= len_chars()`.
    fn insert(&mut self, char_offset: usize, text: &str);

    /// Delete char range. Callers guarantee the range is in bounds.
    fn delete(&mut self, char_range: Range<usize>);

    /// Get a slice as SmolStr. Returns None if range is invalid.
    fn slice(&self, char_range: Range<usize>) -> Option<SmolStr>;

    /// Get character at offset. Returns None if out of bounds.
    fn char_at(&self, char_offset: usize) -> Option<char>;

    /// Convert entire storage to String.
    fn to_string(&self) -> String;
}

/// Ropey-backed text storage.
#[derive(Clone, Debug, Default)]
pub struct TextRope {
    rope: ropey::Rope,
}

impl TextRope {
    /// Create a new empty rope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from string.
    pub fn from_str(s: &str) -> Self {
        Self {
            rope: ropey::Rope::from_str(s),
        }
    }
}

impl TextStorage for TextRope {
    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn insert(&mut self, char_offset: usize, text: &str) {
        self.rope.insert(char_offset, text);
    }

    fn delete(&mut self, char_range: Range<usize>) {
        self.rope.remove(char_range);
    }

    fn slice(&self, char_range: Range<usize>) -> Option<SmolStr> {
        if char_range.start > char_range.end || char_range.end > self.len_chars() {
            return None;
        }
        Some(self.rope.slice(char_range).to_smolstr())
    }

    fn char_at(&self, char_offset: usize) -> Option<char> {
        if char_offset >= self.len_chars() {
            return None;
        }
        Some(self.rope.char(char_offset))
    }

    fn to_string(&self) -> String {
        self.rope.to_string()
    }
}

impl From<&str> for TextRope {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}

impl From<String> for TextRope {
    fn from(s: String) -> Self {
        Self::from_str(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let mut rope = TextRope::from_str("hello world");
        assert_eq!(rope.len_chars(), 11);
        assert_eq!(rope.to_string(), "hello world");

        rope.insert(5, " beautiful");
        assert_eq!(rope.to_string(), "hello beautiful world");

        // " beautiful" is 10 chars at positions 5..15
        rope.delete(5..15);
        assert_eq!(rope.to_string(), "hello world");
    }

    #[test]
    fn test_char_at() {
        let rope = TextRope::from_str("héllo");
        assert_eq!(rope.char_at(0), Some('h'));
        assert_eq!(rope.char_at(1), Some('é'));
        assert_eq!(rope.char_at(5), None);
    }

    #[test]
    fn test_slice() {
        let rope = TextRope::from_str("hello world");
        assert_eq!(rope.slice(0..5).as_deref(), Some("hello"));
        assert_eq!(rope.slice(6..11).as_deref(), Some("world"));
        assert_eq!(rope.slice(0..100), None);
        #[allow(clippy::reversed_empty_ranges)]
        let inverted = rope.slice(4..2);
        assert_eq!(inverted, None);
    }
}
