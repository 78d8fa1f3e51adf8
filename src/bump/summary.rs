use crate::bump::orchestrator::BumpRun;
use crate::bump::reader::CurrentVersion;
use crate::types::report::{BumpStatus, FileOutcome};
use crate::utils::ci::OutputConfig;
use crate::utils::fs::to_unix_string;
use crate::utils::logger::{LogLevel, Logger};

/// One rendered log line; kept separate from printing so it can be checked.
pub type Line = (LogLevel, String);

/// Builds the per-file lines and the summary line for a run.
pub fn summary_lines(run: &BumpRun, manifest_name: &str) -> Vec<Line> {
    let report = &run.report;
    let mut lines: Vec<Line> = Vec::new();

    let verb = if report.dry_run { "Would bump" } else { "Bumping" };
    lines.push((
        LogLevel::Info,
        format!("{} version to: {}", verb, report.new_version),
    ));

    match &run.current {
        CurrentVersion::NotFound => lines.push((
            LogLevel::Error,
            format!("Error: {} not found", manifest_name),
        )),
        CurrentVersion::ReadError(cause) => lines.push((
            LogLevel::Error,
            format!("Error reading {}: {}", manifest_name, cause),
        )),
        CurrentVersion::Found(_) | CurrentVersion::Absent => {}
    }
    lines.push((
        LogLevel::Info,
        format!("Current version: {}", report.current_version),
    ));
    lines.push((
        LogLevel::Info,
        format!("New version:     {}", report.new_version),
    ));

    for file in &report.files {
        let shown = to_unix_string(&file.path);
        let line = match &file.outcome {
            FileOutcome::Updated => (LogLevel::Success, format!("✓ Updated: {}", shown)),
            FileOutcome::WouldUpdate => (LogLevel::Info, format!("Would update: {}", shown)),
            FileOutcome::Unchanged => (LogLevel::Info, format!("No changes needed: {}", shown)),
            FileOutcome::NotFound => (LogLevel::Error, format!("✗ File not found: {}", shown)),
            FileOutcome::Failed { cause } => (
                LogLevel::Error,
                format!("✗ Error updating {}: {}", shown, cause),
            ),
        };
        lines.push(line);

        if file.ok() {
            for rule in file.unmatched_rules() {
                lines.push((
                    LogLevel::Warning,
                    format!("Rule '{}' matched nothing in {}", rule, shown),
                ));
            }
        }
    }

    lines.push(match report.status {
        BumpStatus::Success if report.dry_run => {
            (LogLevel::Success, "✓ Dry run complete, no files written".to_string())
        }
        BumpStatus::Success => {
            let written = report.files.iter().filter(|f| f.outcome.written()).count();
            (
                LogLevel::Success,
                format!("✓ Version bump complete! ({} file(s) written)", written),
            )
        }
        BumpStatus::Failure => (LogLevel::Error, "✗ Version bump failed!".to_string()),
    });

    lines
}

/// Prints the run through the logger, followed by release guidance outside CI.
pub fn print_summary(run: &BumpRun, manifest_name: &str, output: OutputConfig) {
    let logger = Logger::new(output.color);
    for (level, message) in summary_lines(run, manifest_name) {
        logger.log_message(level, &message);
    }

    let report = &run.report;
    if output.show_next_steps && report.status == BumpStatus::Success && !report.dry_run {
        let commit = format!(
            "git commit -am \"Bump version to {}\"",
            report.new_version
        );
        let tag = format!("git tag v{}", report.new_version);
        logger.log_message_with_trace(
            LogLevel::Info,
            "Next steps",
            vec!["git diff", commit.as_str(), tag.as_str(), "git push --follow-tags"],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::report::{BumpReport, FileReport, RuleHit};
    use std::path::PathBuf;

    fn file(name: &str, path: &str, outcome: FileOutcome, hits: &[(&str, usize)]) -> FileReport {
        FileReport {
            name: name.into(),
            path: PathBuf::from(path),
            outcome,
            rules: hits
                .iter()
                .map(|(r, m)| RuleHit {
                    rule: r.to_string(),
                    matches: *m,
                })
                .collect(),
        }
    }

    fn messages(lines: &[Line]) -> Vec<&str> {
        lines.iter().map(|(_, m)| m.as_str()).collect()
    }

    #[test]
    fn successful_run_lists_each_file() {
        let run = BumpRun {
            current: CurrentVersion::Found("2.8.0".into()),
            report: BumpReport::new(
                "2.8.0".into(),
                "2.9.0".into(),
                false,
                vec![
                    file("manifest", "ConsumableManager.toc", FileOutcome::Updated, &[("version-line", 1)]),
                    file("source", "ConsumableManager.lua", FileOutcome::Unchanged, &[("header-line", 1)]),
                ],
            ),
        };
        let lines = summary_lines(&run, "ConsumableManager.toc");
        let msgs = messages(&lines);
        assert!(msgs.contains(&"Current version: 2.8.0"));
        assert!(msgs.contains(&"✓ Updated: ConsumableManager.toc"));
        assert!(msgs.contains(&"No changes needed: ConsumableManager.lua"));
        assert_eq!(
            *msgs.last().unwrap(),
            "✓ Version bump complete! (1 file(s) written)"
        );
    }

    #[test]
    fn failures_and_unmatched_rules_are_reported() {
        let run = BumpRun {
            current: CurrentVersion::NotFound,
            report: BumpReport::new(
                "unknown".into(),
                "2.9.0".into(),
                false,
                vec![
                    file("manifest", "ConsumableManager.toc", FileOutcome::NotFound, &[]),
                    file(
                        "source",
                        "ConsumableManager.lua",
                        FileOutcome::Updated,
                        &[("header-line", 1), ("display-token", 0)],
                    ),
                ],
            ),
        };
        let lines = summary_lines(&run, "ConsumableManager.toc");
        let msgs = messages(&lines);
        assert!(msgs.contains(&"Error: ConsumableManager.toc not found"));
        assert!(msgs.contains(&"✗ File not found: ConsumableManager.toc"));
        assert!(msgs.contains(&"Rule 'display-token' matched nothing in ConsumableManager.lua"));
        let (level, last) = lines.last().unwrap();
        assert_eq!(*level, LogLevel::Error);
        assert_eq!(last, "✗ Version bump failed!");
    }
}
