//! Line-oriented command session standing in for a drag-and-drop UI.
//!
//! `select` plays the tap, `drag` the start of a drag session and `drop` the
//! drop. Positions are signed so a UI-style negative coordinate reaches the
//! core's bounds check instead of failing to parse. A line starting with `{`
//! is a JSON [`EditorAction`], as a remote front end would send it.

use std::io::Write;

use miette::Diagnostic;
use sentence_mover_core::{
    ActionOutcome, DragPayload, DragSource, DropTarget, EditorAction, MoveOutcome, RangeError,
    SelectionEditor, checked_offset, execute_action,
};
use thiserror::Error;

use crate::config::DisplayConfig;
use crate::render::{render_content, render_sentences};

pub const HELP: &str = "\
commands:
  select <offset>   select the sentence under <offset>
  drag              start dragging the selected sentence
  drop <offset>     drop the dragged sentence at <offset>
  clear             clear the selection
  text <content>    replace the whole text
  show              print the text
  sentences         list sentences with their offsets
  {\"action\": ...}   run a JSON editor action
  help              show this help
  quit              leave";

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Select(i64),
    Drag,
    Drop(i64),
    Clear,
    Text(String),
    Show,
    Sentences,
    Action(EditorAction),
    Help,
    Quit,
}

#[derive(Error, Debug, Diagnostic)]
pub enum CommandError {
    #[error("unknown command `{0}`")]
    #[diagnostic(code(sentmove::command::unknown), help("type `help` for a list"))]
    Unknown(String),

    #[error("`{command}` needs an offset")]
    #[diagnostic(code(sentmove::command::missing_offset))]
    MissingOffset { command: &'static str },

    #[error("`{0}` is not an offset")]
    #[diagnostic(code(sentmove::command::bad_offset))]
    BadOffset(String),

    #[error("invalid JSON action")]
    #[diagnostic(
        code(sentmove::command::action),
        help("actions are select_at, move_selection_to and clear_selection")
    )]
    Action(#[source] serde_json::Error),

    #[error("nothing is being dragged")]
    #[diagnostic(
        code(sentmove::command::no_drag),
        help("select a sentence and `drag` it first")
    )]
    NoDrag,

    #[error(transparent)]
    #[diagnostic(transparent)]
    Range(#[from] RangeError),
}

impl Command {
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        if line.starts_with('{') {
            let action = serde_json::from_str(line).map_err(CommandError::Action)?;
            return Ok(Some(Command::Action(action)));
        }
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };
        let command = match name {
            "select" => Command::Select(parse_offset("select", rest)?),
            "drag" => Command::Drag,
            "drop" => Command::Drop(parse_offset("drop", rest)?),
            "clear" => Command::Clear,
            "text" => Command::Text(rest.to_owned()),
            "show" => Command::Show,
            "sentences" => Command::Sentences,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_owned())),
        };
        Ok(Some(command))
    }
}

fn parse_offset(command: &'static str, arg: &str) -> Result<i64, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingOffset { command });
    }
    arg.parse().map_err(|_| CommandError::BadOffset(arg.to_owned()))
}

/// Editor plus the drag currently in flight.
pub struct Session {
    editor: SelectionEditor,
    display: DisplayConfig,
    drag: Option<DragPayload>,
}

/// Whether the session should keep reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

impl Session {
    pub fn new(editor: SelectionEditor, display: DisplayConfig) -> Self {
        Self {
            editor,
            display,
            drag: None,
        }
    }

    pub fn editor(&self) -> &SelectionEditor {
        &self.editor
    }

    /// Run one command, writing any output to `out`.
    pub fn execute(
        &mut self,
        command: Command,
        out: &mut impl Write,
    ) -> Result<Flow, CommandError> {
        match command {
            Command::Select(raw) => {
                let offset = checked_offset(raw, self.editor.buffer().len_chars())?;
                self.dispatch(EditorAction::SelectAt { offset }, out)?;
            }
            Command::Drag => {
                // The platform would refuse to start a drag with no payload.
                match self.editor.drag_payload() {
                    Some(payload) => {
                        let _ = writeln!(out, "dragging {:?}", payload.text.as_str());
                        self.drag = Some(payload);
                    }
                    None => {
                        let _ = writeln!(out, "nothing selected");
                    }
                }
            }
            Command::Drop(raw) => {
                let offset = checked_offset(raw, self.editor.buffer().len_chars())?;
                if self.drag.is_none() || !self.editor.can_accept_drop() {
                    return Err(CommandError::NoDrag);
                }
                let outcome = self.editor.accept_drop(offset)?;
                self.report_move(outcome, out);
                self.show(out);
            }
            Command::Clear => self.dispatch(EditorAction::ClearSelection, out)?,
            Command::Action(action) => self.dispatch(action, out)?,
            Command::Text(content) => {
                self.drag = None;
                self.editor.replace_content(&content);
                self.show(out);
            }
            Command::Show => {
                let _ = writeln!(out, "{}", render_content(&self.editor, &self.display));
            }
            Command::Sentences => {
                let _ = write!(out, "{}", render_sentences(&self.editor));
            }
            Command::Help => {
                let _ = writeln!(out, "{HELP}");
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn dispatch(
        &mut self,
        action: EditorAction,
        out: &mut impl Write,
    ) -> Result<(), CommandError> {
        match execute_action(&mut self.editor, &action)? {
            ActionOutcome::Selected(span) => {
                self.drag = None;
                tracing::info!(start = span.start, end = span.end, "selected");
            }
            ActionOutcome::Move(outcome) => self.report_move(outcome, out),
            ActionOutcome::Cleared => self.drag = None,
        }
        self.show(out);
        Ok(())
    }

    fn report_move(&mut self, outcome: MoveOutcome, out: &mut impl Write) {
        match outcome {
            MoveOutcome::Moved { inserted_at, .. } => {
                tracing::info!(inserted_at, "dropped");
                self.drag = None;
            }
            MoveOutcome::Overlap => {
                let _ = writeln!(out, "dropped onto itself, nothing moved");
            }
            MoveOutcome::NothingSelected => {
                self.drag = None;
                let _ = writeln!(out, "nothing selected");
            }
            MoveOutcome::EmptySelection => {
                self.drag = None;
                let _ = writeln!(out, "selection is empty, nothing moved");
            }
        }
    }

    fn show(&self, out: &mut impl Write) {
        let _ = writeln!(out, "{}", render_content(&self.editor, &self.display));
        if self.display.show_sentences {
            let _ = write!(out, "{}", render_sentences(&self.editor));
        }
    }
}
