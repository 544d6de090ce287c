//! Runtime settings — request caps enforced at the service boundary.
//!
//! The kernel itself accepts any well-formed board; these caps exist to
//! keep a single request from asking for unbounded work.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// All possible settings-loading failures.
#[derive(Debug)]
pub enum SettingsError {
    /// File I/O error.
    Io(String),
    /// Malformed settings JSON (unknown or missing fields included).
    Parse(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(msg) => write!(f, "IoError: {}", msg),
            SettingsError::Parse(msg) => write!(f, "ParseError: {}", msg),
        }
    }
}

impl From<io::Error> for SettingsError {
    fn from(err: io::Error) -> Self {
        SettingsError::Io(err.to_string())
    }
}

/// Service-boundary limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Largest accepted board height.
    pub max_rows: usize,
    /// Largest accepted board width.
    pub max_columns: usize,
    /// Largest accepted iteration count / budget per request.
    pub max_iterations: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_rows: 200,
            max_columns: 200,
            max_iterations: 1000,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file. Strict: unknown fields are rejected,
    /// all fields are required.
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }
}
