use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the bump pipeline.
///
/// File-level variants never abort a run: the patcher and reader convert
/// them into per-file outcomes so every target is attempted.
#[derive(Debug, Error)]
pub enum BumpError {
    #[error("Invalid version format: '{0}' (expected MAJOR.MINOR.PATCH, e.g. 2.9.0)")]
    InvalidVersionFormat(String),

    #[error("No version specified")]
    MissingArgument,

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("Invalid pattern for rule '{rule}': {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },
}

impl BumpError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BumpError::Io {
            path: path.into(),
            source,
        }
    }

    /// Exit code when this error stops the run before any target is patched.
    ///
    /// File-level errors never get here: the patcher turns them into
    /// per-file outcomes, and those map to exit code 2 via `BumpStatus`.
    pub fn exit_code(&self) -> u8 {
        1
    }
}
