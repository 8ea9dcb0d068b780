//! Editor configuration.
//!
//! Configuration is plain JSON, usually embedded in a front end's own config
//! file. Every field has a default, so an empty object gives a working editor.

use miette::Diagnostic;
use serde::{Deserialize, Serialize};

use crate::editor::SelectionEditor;
use crate::format::{Attribute, FormatRun};

/// Text shown when no initial text is configured.
pub const DEFAULT_TEXT: &str =
    "This is a sample sentence. Here's another one. And one more for good measure.";

/// Errors raised while loading configuration.
#[derive(thiserror::Error, Debug, Diagnostic)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid config JSON")]
    #[diagnostic(
        code(sentence_mover::config::json),
        help("see EditorConfig for the accepted fields")
    )]
    Json(#[from] serde_json::Error),

    #[error("initial formatting run {start}..{end} lies outside the initial text")]
    #[diagnostic(code(sentence_mover::config::formatting))]
    Formatting { start: usize, end: usize },
}

/// Startup configuration for a [`SelectionEditor`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Text loaded into the buffer at startup.
    pub initial_text: String,
    /// Formatting applied to the initial text. Highlight runs are ignored,
    /// highlight only ever follows the selection.
    pub initial_formatting: Vec<FormatRun>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            initial_text: DEFAULT_TEXT.to_owned(),
            initial_formatting: Vec::new(),
        }
    }
}

impl EditorConfig {
    /// Parse configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build an editor holding the configured text and formatting.
    pub fn build(&self) -> Result<SelectionEditor, ConfigError> {
        let mut editor = SelectionEditor::from_text(&self.initial_text);
        for run in &self.initial_formatting {
            if run.attribute == Attribute::Highlight {
                continue;
            }
            editor
                .apply_attribute(run.range.clone(), run.attribute)
                .map_err(|_| ConfigError::Formatting {
                    start: run.range.start,
                    end: run.range.end,
                })?;
        }
        Ok(editor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = EditorConfig::from_json("{}").unwrap();
        assert_eq!(config, EditorConfig::default());
        assert_eq!(config.build().unwrap().content(), DEFAULT_TEXT);
    }

    #[test]
    fn test_initial_formatting() {
        let config = EditorConfig::from_json(
            r#"{
                "initial_text": "A. B.",
                "initial_formatting": [
                    { "range": { "start": 0, "end": 1 }, "attribute": "bold" },
                    { "range": { "start": 2, "end": 5 }, "attribute": "highlight" }
                ]
            }"#,
        )
        .unwrap();
        let editor = config.build().unwrap();
        assert_eq!(editor.buffer().attributes_at(0), vec![Attribute::Bold]);
        assert!(editor.highlight_ranges().is_empty());
    }

    #[test]
    fn test_formatting_out_of_range() {
        let config = EditorConfig {
            initial_text: "abc".to_owned(),
            initial_formatting: vec![FormatRun::new(1..9, Attribute::Italic)],
        };
        assert!(matches!(
            config.build(),
            Err(ConfigError::Formatting { start: 1, end: 9 })
        ));
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            EditorConfig::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }
}
