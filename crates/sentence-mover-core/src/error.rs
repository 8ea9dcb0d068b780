//! Error types for buffer and editor operations.

use miette::Diagnostic;
use thiserror::Error;

/// An offset or range that does not fit the current buffer.
///
/// Every failing operation leaves the buffer, the selection and the highlight
/// exactly as they were before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
#[non_exhaustive]
pub enum RangeError {
    /// Offset past the end of the buffer.
    #[error("offset {offset} is outside a buffer of {len} chars")]
    #[diagnostic(
        code(sentence_mover::range::offset),
        help("offsets may point at any char or one past the last char")
    )]
    OffsetOutOfBounds { offset: usize, len: usize },

    /// Range extends past the end of the buffer.
    #[error("range {start}..{end} exceeds a buffer of {len} chars")]
    #[diagnostic(code(sentence_mover::range::bounds))]
    RangeOutOfBounds { start: usize, end: usize, len: usize },

    /// Range whose start lies after its end.
    #[error("malformed range {start}..{end}: start is after end")]
    #[diagnostic(code(sentence_mover::range::inverted))]
    Inverted { start: usize, end: usize },

    /// Negative position handed over by a UI layer.
    #[error("negative offset {offset}")]
    #[diagnostic(code(sentence_mover::range::negative))]
    Negative { offset: i64 },
}

impl RangeError {
    /// Check that `offset` is a valid insertion point in a buffer of `len` chars.
    pub fn check_offset(offset: usize, len: usize) -> Result<(), RangeError> {
        if offset > len {
            return Err(RangeError::OffsetOutOfBounds { offset, len });
        }
        Ok(())
    }

    /// Check that `start..end` is well-formed and lies within `len` chars.
    pub fn check_range(start: usize, end: usize, len: usize) -> Result<(), RangeError> {
        if start > end {
            return Err(RangeError::Inverted { start, end });
        }
        if end > len {
            return Err(RangeError::RangeOutOfBounds { start, end, len });
        }
        Ok(())
    }
}

/// A formatting request the editor refuses.
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
#[non_exhaustive]
pub enum EditError {
    /// Highlight is owned by the selection.
    #[error("highlight cannot be applied directly")]
    #[diagnostic(
        code(sentence_mover::edit::highlight),
        help("select a sentence to highlight it")
    )]
    HighlightNotApplicable,

    #[error(transparent)]
    #[diagnostic(transparent)]
    Range(#[from] RangeError),
}

/// Convert a signed position from a UI layer into a buffer offset.
pub fn checked_offset(raw: i64, len: usize) -> Result<usize, RangeError> {
    let offset = usize::try_from(raw).map_err(|_| RangeError::Negative { offset: raw })?;
    RangeError::check_offset(offset, len)?;
    Ok(offset)
}
