use crate::bump::patcher::{WriteMode, apply_rules};
use crate::bump::reader::{CurrentVersion, read_current_version};
use crate::config::BumpConfig;
use crate::types::report::{BumpReport, FileReport};
use crate::types::version::Version;
use std::path::Path;

/// Everything one invocation produced: the advisory current version and the patch report.
#[derive(Debug, Clone)]
pub struct BumpRun {
    pub current: CurrentVersion,
    pub report: BumpReport,
}

/// Propagates `version` into every configured target under `root`.
///
/// ### Parameters
/// - `root`: directory the configured paths are relative to.
/// - `version`: the already validated new version.
/// - `config`: reader location and target rule sets.
/// - `mode`: write or dry run.
///
/// Every target is attempted even after an earlier failure, and nothing is
/// rolled back: re-running with the same version retries only what is left.
pub fn bump(root: &Path, version: &Version, config: &BumpConfig, mode: WriteMode) -> BumpRun {
    let current = read_current_version(&root.join(&config.source.path), &config.source.marker);

    let files = config
        .targets
        .iter()
        .map(|target| {
            let result = apply_rules(&root.join(&target.path), &target.rules, version, mode);
            FileReport {
                name: target.name.clone(),
                path: target.path.clone(),
                outcome: result.outcome,
                rules: result.rules,
            }
        })
        .collect();

    let report = BumpReport::new(
        current.as_str().to_string(),
        version.to_string(),
        mode == WriteMode::DryRun,
        files,
    );
    BumpRun { current, report }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MANIFEST_FILE, SOURCE_FILE};
    use crate::types::report::{BumpStatus, FileOutcome};
    use std::fs;
    use tempfile::TempDir;

    const TOC: &str = "## Interface: 30300\n## Title: Consumable Manager\n## Author: Someone\n## Version: 2.8.0\n\nConsumableManager.lua\n";
    const LUA: &str = "-- ConsumableManager\n-- Version: 2.8.0\n\nlocal version = HexColor(\"v2.8.0\", \"ffd100\")\n";

    fn project() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILE), TOC).unwrap();
        fs::write(dir.path().join(SOURCE_FILE), LUA).unwrap();
        dir
    }

    fn run(dir: &Path, version: &str) -> BumpRun {
        let config = BumpConfig::builtin().unwrap();
        bump(dir, &Version::parse(version).unwrap(), &config, WriteMode::Write)
    }

    fn read(dir: &Path, name: &str) -> String {
        fs::read_to_string(dir.join(name)).unwrap()
    }

    #[test]
    fn bumps_both_files() {
        let dir = project();
        let out = run(dir.path(), "3.0.0");
        assert_eq!(out.current, CurrentVersion::Found("2.8.0".into()));
        assert_eq!(out.report.status, BumpStatus::Success);
        assert!(out.report.files.iter().all(|f| f.outcome == FileOutcome::Updated));

        let toc = read(dir.path(), MANIFEST_FILE);
        let lua = read(dir.path(), SOURCE_FILE);
        assert_eq!(toc, TOC.replace("2.8.0", "3.0.0"));
        assert!(lua.contains("-- Version: 3.0.0"));
        assert!(lua.contains("\"v3.0.0\""));
        assert!(!toc.contains("2.8.0") && !lua.contains("2.8.0"));
    }

    #[test]
    fn second_run_is_a_noop() {
        let dir = project();
        run(dir.path(), "2.9.0");
        let toc = read(dir.path(), MANIFEST_FILE);
        let lua = read(dir.path(), SOURCE_FILE);

        let again = run(dir.path(), "2.9.0");
        assert_eq!(again.report.status, BumpStatus::Success);
        assert!(again.report.files.iter().all(|f| f.outcome == FileOutcome::Unchanged));
        assert_eq!(read(dir.path(), MANIFEST_FILE), toc);
        assert_eq!(read(dir.path(), SOURCE_FILE), lua);
    }

    #[test]
    fn sequential_bumps_leave_only_latest() {
        let dir = project();
        run(dir.path(), "2.9.0");
        let last = run(dir.path(), "3.0.0");
        assert_eq!(last.report.current_version, "2.9.0");
        for name in [MANIFEST_FILE, SOURCE_FILE] {
            let text = read(dir.path(), name);
            assert!(text.contains("3.0.0"));
            assert!(!text.contains("2.8.0"));
            assert!(!text.contains("2.9.0"));
        }
    }

    #[test]
    fn missing_manifest_fails_but_still_patches_source() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SOURCE_FILE), LUA).unwrap();

        let out = run(dir.path(), "2.9.0");
        assert_eq!(out.current, CurrentVersion::NotFound);
        assert_eq!(out.report.current_version, "unknown");
        assert_eq!(out.report.status, BumpStatus::Failure);
        assert_eq!(out.report.status.exit_code(), 2);
        assert_eq!(out.report.files[0].outcome, FileOutcome::NotFound);
        assert_eq!(out.report.files[1].outcome, FileOutcome::Updated);
        assert!(!dir.path().join(MANIFEST_FILE).exists());
        assert!(read(dir.path(), SOURCE_FILE).contains("v2.9.0"));
    }

    #[test]
    fn both_missing_reports_both() {
        let dir = tempfile::tempdir().unwrap();
        let out = run(dir.path(), "2.9.0");
        assert_eq!(out.report.status, BumpStatus::Failure);
        assert!(out.report.files.iter().all(|f| f.outcome == FileOutcome::NotFound));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn malformed_manifest_reads_unknown_and_is_left_alone() {
        let dir = project();
        let toc = "## Title: Consumable Manager\n## Interface: 30300\n";
        fs::write(dir.path().join(MANIFEST_FILE), toc).unwrap();

        let out = run(dir.path(), "3.0.0");
        assert_eq!(out.current, CurrentVersion::Absent);
        assert_eq!(out.report.files[0].outcome, FileOutcome::Unchanged);
        assert_eq!(out.report.files[0].unmatched_rules().collect::<Vec<_>>(), ["version-line"]);
        assert_eq!(out.report.status, BumpStatus::Success);
        assert_eq!(read(dir.path(), MANIFEST_FILE), toc);
    }

    #[test]
    fn dry_run_touches_nothing() {
        let dir = project();
        let config = BumpConfig::builtin().unwrap();
        let out = bump(
            dir.path(),
            &Version::parse("5.0.0").unwrap(),
            &config,
            WriteMode::DryRun,
        );
        assert!(out.report.dry_run);
        assert!(out.report.files.iter().all(|f| f.outcome == FileOutcome::WouldUpdate));
        assert_eq!(read(dir.path(), MANIFEST_FILE), TOC);
        assert_eq!(read(dir.path(), SOURCE_FILE), LUA);
    }

    #[test]
    fn manifest_rules_never_touch_source_tokens() {
        let dir = project();
        // a v-token in the manifest belongs to no manifest rule
        let toc = "## Notes: see v2.8.0 changelog\n## Version: 2.8.0\n";
        fs::write(dir.path().join(MANIFEST_FILE), toc).unwrap();
        run(dir.path(), "3.0.0");
        assert_eq!(
            read(dir.path(), MANIFEST_FILE),
            "## Notes: see v2.8.0 changelog\n## Version: 3.0.0\n"
        );
    }
}
