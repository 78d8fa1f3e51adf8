use crate::error::BumpError;
use crate::types::report::{FileOutcome, RuleHit};
use crate::types::rule::PatchRule;
use crate::types::version::Version;
use crate::utils::fs::write_atomic;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    #[default]
    Write,
    DryRun,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchResult {
    pub outcome: FileOutcome,
    pub rules: Vec<RuleHit>,
}

/// Runs `rules` in order over `text`, returning the patched text and per-rule match counts.
pub fn patch_text(text: &str, rules: &[PatchRule], version: &Version) -> (String, Vec<RuleHit>) {
    let mut current = text.to_string();
    let mut hits = Vec::with_capacity(rules.len());
    for rule in rules {
        let (next, matches) = rule.apply(&current, version);
        current = next.into_owned();
        hits.push(RuleHit {
            rule: rule.name.clone(),
            matches,
        });
    }
    (current, hits)
}

/// Applies `rules` to the file at `path`, writing only when the text changes.
///
/// A missing file is reported as `NotFound` and is never created. Read and
/// write failures become `Failed` with the underlying cause; a failed write
/// leaves the previous content in place.
pub fn apply_rules(path: &Path, rules: &[PatchRule], version: &Version, mode: WriteMode) -> PatchResult {
    apply_rules_with(path, rules, version, mode, write_atomic)
}

/// Same as [`apply_rules`], with the final write delegated to `write`.
fn apply_rules_with<W>(
    path: &Path,
    rules: &[PatchRule],
    version: &Version,
    mode: WriteMode,
    write: W,
) -> PatchResult
where
    W: FnOnce(&Path, &str) -> io::Result<()>,
{
    let original = match read_target(path) {
        Ok(text) => text,
        Err(e) => {
            return PatchResult {
                outcome: failure_outcome(e),
                rules: Vec::new(),
            };
        }
    };

    let (patched, hits) = patch_text(&original, rules, version);
    let outcome = if patched == original {
        FileOutcome::Unchanged
    } else if mode == WriteMode::DryRun {
        FileOutcome::WouldUpdate
    } else {
        match write(path, &patched) {
            Ok(()) => FileOutcome::Updated,
            Err(e) => failure_outcome(BumpError::io(path, e)),
        }
    };

    PatchResult {
        outcome,
        rules: hits,
    }
}

fn read_target(path: &Path) -> Result<String, BumpError> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => BumpError::FileNotFound(path.to_path_buf()),
        _ => BumpError::io(path, e),
    })
}

fn failure_outcome(err: BumpError) -> FileOutcome {
    match err {
        BumpError::FileNotFound(_) => FileOutcome::NotFound,
        other => FileOutcome::Failed {
            cause: other.to_string(),
        },
    }
}
