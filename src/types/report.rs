use serde::Serialize;
use std::path::PathBuf;

/// What happened to a single target file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    /// Patched text differed and was written.
    Updated,
    /// Patched text differed but the run was a dry run.
    WouldUpdate,
    /// Patched text equals the original; nothing written.
    Unchanged,
    NotFound,
    Failed { cause: String },
}

impl FileOutcome {
    pub fn ok(&self) -> bool {
        matches!(
            self,
            FileOutcome::Updated | FileOutcome::WouldUpdate | FileOutcome::Unchanged
        )
    }

    pub fn written(&self) -> bool {
        matches!(self, FileOutcome::Updated)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleHit {
    pub rule: String,
    pub matches: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub name: String,
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: FileOutcome,
    pub rules: Vec<RuleHit>,
}

impl FileReport {
    pub fn ok(&self) -> bool {
        self.outcome.ok()
    }

    /// Rules that found nothing to replace in a file that was read.
    pub fn unmatched_rules(&self) -> impl Iterator<Item = &str> {
        self.rules
            .iter()
            .filter(|h| h.matches == 0)
            .map(|h| h.rule.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BumpStatus {
    Success,
    Failure,
}

impl BumpStatus {
    pub fn exit_code(self) -> u8 {
        match self {
            BumpStatus::Success => 0,
            BumpStatus::Failure => 2,
        }
    }
}

/// Aggregate result of one invocation.
#[derive(Debug, Clone, Serialize)]
pub struct BumpReport {
    pub current_version: String,
    pub new_version: String,
    pub dry_run: bool,
    pub files: Vec<FileReport>,
    pub status: BumpStatus,
}

impl BumpReport {
    pub fn new(current_version: String, new_version: String, dry_run: bool, files: Vec<FileReport>) -> Self {
        let status = if files.iter().all(FileReport::ok) {
            BumpStatus::Success
        } else {
            BumpStatus::Failure
        };
        BumpReport {
            current_version,
            new_version,
            dry_run,
            files,
            status,
        }
    }
}
