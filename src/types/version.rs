use crate::error::BumpError;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

// ASCII digits only: `\d` would also accept other Unicode decimal digits.
static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+$").expect("valid version regex")
});

/// Returns true when `candidate` is exactly `MAJOR.MINOR.PATCH`.
pub fn validate(candidate: &str) -> bool {
    VERSION_RE.is_match(candidate)
}

/// A validated release version, kept as the token it was given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Version(String);

impl Version {
    pub fn parse(candidate: &str) -> Result<Self, BumpError> {
        if validate(candidate) {
            Ok(Version(candidate.to_string()))
        } else {
            Err(BumpError::InvalidVersionFormat(candidate.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
