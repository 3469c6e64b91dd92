//! Settings file handling.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{InterpreterError, Result};

/// File name looked up in the working directory when no `--config` is given.
pub const SETTINGS_FILE_NAME: &str = "interpreter.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Location of the backing table.
    pub dictionary_path: PathBuf,
    /// Label for the left-hand column, shown in the menu.
    pub source_language: String,
    /// Label for the right-hand column, shown in the menu.
    pub target_language: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dictionary_path: PathBuf::from("dictionary.csv"),
            source_language: "English".to_string(),
            target_language: "Aliench".to_string(),
        }
    }
}

impl Settings {
    /// Reads an explicitly named settings file. The file must exist.
    pub fn from_file(path: &Path) -> Result<Self> {
        tracing::debug!("Loading settings from: {:?}", path);

        let content = std::fs::read_to_string(path).map_err(|e| InterpreterError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| InterpreterError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Uses `explicit` when given, else `interpreter.json` in `dir` if it
    /// exists, else the defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let candidate = dir.join(SETTINGS_FILE_NAME);
        if !candidate.exists() {
            tracing::debug!("Settings file not found: {:?}", candidate);
            return Ok(Self::default());
        }
        Self::from_file(&candidate)
    }
}
