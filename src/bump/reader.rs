use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub const UNKNOWN_VERSION: &str = "unknown";

/// The version currently recorded in the manifest.
///
/// Advisory only: nothing in the patch step depends on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrentVersion {
    Found(String),
    /// The file was read but no line carries the marker.
    Absent,
    NotFound,
    ReadError(String),
}

impl CurrentVersion {
    pub fn as_str(&self) -> &str {
        match self {
            CurrentVersion::Found(v) => v,
            _ => UNKNOWN_VERSION,
        }
    }
}

/// Reads the value of the first line starting with `marker`.
///
/// ### Parameters
/// - `path`: the manifest file.
/// - `marker`: exact line prefix, e.g. `## Version:`.
pub fn read_current_version(path: &Path, marker: &str) -> CurrentVersion {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => return CurrentVersion::NotFound,
        Err(e) => return CurrentVersion::ReadError(e.to_string()),
    };
    content
        .lines()
        .find_map(|line| line.strip_prefix(marker))
        .map(|value| CurrentVersion::Found(value.trim().to_string()))
        .unwrap_or(CurrentVersion::Absent)
}
