//! sentence-mover-core: select a sentence and drag it elsewhere in the text.
//!
//! This crate provides:
//! - `TextStorage` trait for raw text storage, with the ropey-backed `TextRope`
//! - `TextBuffer` - content plus per-range formatting with checked mutation
//! - `locate_sentence` - pure sentence boundary detection
//! - `SelectionEditor` - single-sentence selection and move state machine
//! - `DragSource` / `DropTarget` - capability traits for a drag-and-drop platform
//!
//! No rendering or platform code lives here; a UI layer translates taps and
//! drops into char offsets and renders `content()` plus `highlight_ranges()`.

pub mod actions;
pub mod buffer;
pub mod config;
pub mod editor;
pub mod error;
pub mod format;
pub mod locator;
pub mod platform;
pub mod text;
pub mod types;

pub use actions::{ActionOutcome, EditorAction, execute_action};
pub use buffer::TextBuffer;
pub use config::{ConfigError, DEFAULT_TEXT, EditorConfig};
pub use editor::{MoveOutcome, SelectionEditor, SelectionState};
pub use error::{EditError, RangeError, checked_offset};
pub use format::{Attribute, FormatRun, Formatting};
pub use locator::{TERMINATORS, is_terminator, locate_sentence, sentence_spans};
pub use platform::{DragPayload, DragSource, DropTarget};
pub use smol_str::SmolStr;
pub use text::{TextRope, TextStorage};
pub use types::SentenceSpan;
