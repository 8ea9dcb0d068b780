use std::path::Path;

use miette::{IntoDiagnostic, Result, WrapErr};
use sentence_mover_core::EditorConfig;
use serde::{Deserialize, Serialize};

/// How the terminal marks the selected sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub highlight_open: String,
    pub highlight_close: String,
    /// Print the sentence list with offsets after every change.
    pub show_sentences: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            highlight_open: "[".to_owned(),
            highlight_close: "]".to_owned(),
            show_sentences: false,
        }
    }
}

/// Whole config file: editor settings plus terminal display settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub editor: EditorConfig,
    pub display: DisplayConfig,
}

impl Config {
    /// Load from `path`, or fall back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let json = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("couldn't read config {}", path.display()))?;
        let config = serde_json::from_str(&json)
            .into_diagnostic()
            .wrap_err_with(|| format!("couldn't parse config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
