use crate::error::BumpError;
use crate::types::rule::{PatchRule, RuleScope};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "addonbump.toml";
pub const MANIFEST_FILE: &str = "ConsumableManager.toc";
pub const SOURCE_FILE: &str = "ConsumableManager.lua";
pub const MANIFEST_MARKER: &str = "## Version:";

#[derive(Debug, Deserialize, Default)]
struct ReaderSection {
    path: Option<String>,
    marker: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RuleEntry {
    name: String,
    pattern: String,
    replacement: String,
    #[serde(default)]
    scope: RuleScope,
}

#[derive(Debug, Deserialize)]
struct TargetEntry {
    name: Option<String>,
    path: String,
    #[serde(default, rename = "rule")]
    rules: Vec<RuleEntry>,
}

#[derive(Debug, Deserialize, Default)]
struct ConfigDoc {
    reader: Option<ReaderSection>,
    #[serde(default, rename = "target")]
    targets: Vec<TargetEntry>,
}

/// Where the current version is read from.
#[derive(Debug, Clone)]
pub struct VersionSource {
    pub path: PathBuf,
    pub marker: String,
}

/// One file to patch and its ordered rule list.
#[derive(Debug, Clone)]
pub struct Target {
    pub name: String,
    pub path: PathBuf,
    pub rules: Vec<PatchRule>,
}

#[derive(Debug, Clone)]
pub struct BumpConfig {
    pub source: VersionSource,
    pub targets: Vec<Target>,
}

impl BumpConfig {
    /// Built-in layout: the `.toc` manifest and the `.lua` source.
    pub fn builtin() -> Result<Self, BumpError> {
        Ok(BumpConfig {
            source: VersionSource {
                path: PathBuf::from(MANIFEST_FILE),
                marker: MANIFEST_MARKER.to_string(),
            },
            targets: vec![
                Target {
                    name: "manifest".into(),
                    path: PathBuf::from(MANIFEST_FILE),
                    rules: vec![PatchRule::new(
                        "version-line",
                        r"(?m)^## Version:[^\r\n]*",
                        "## Version: {version}",
                        RuleScope::First,
                    )?],
                },
                Target {
                    name: "source".into(),
                    path: PathBuf::from(SOURCE_FILE),
                    rules: vec![
                        PatchRule::new(
                            "header-line",
                            r"(?m)^-- Version:[^\r\n]*",
                            "-- Version: {version}",
                            RuleScope::First,
                        )?,
                        PatchRule::new(
                            "display-token",
                            r"v\d+\.\d+\.\d+",
                            "v{version}",
                            RuleScope::All,
                        )?,
                    ],
                },
            ],
        })
    }

    /// Resolves the configuration for a working directory.
    ///
    /// ### Parameters
    /// - `root`: the directory holding the target files.
    /// - `explicit`: a config file passed on the command line; it must exist.
    ///
    /// Without `explicit`, `addonbump.toml` in `root` is used when present,
    /// otherwise the built-in layout.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self, BumpError> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let candidate = root.join(CONFIG_FILE);
                if !candidate.is_file() {
                    return Self::builtin();
                }
                candidate
            }
        };
        let text = fs::read_to_string(&path).map_err(|e| BumpError::Config {
            path: path.clone(),
            message: e.to_string(),
        })?;
        Self::from_toml(&text, &path)
    }

    /// Parses a config document; omitted sections fall back to the built-in ones.
    pub fn from_toml(text: &str, origin: &Path) -> Result<Self, BumpError> {
        let doc: ConfigDoc = toml::from_str(text).map_err(|e| BumpError::Config {
            path: origin.to_path_buf(),
            message: e.message().to_string(),
        })?;
        let mut config = Self::builtin()?;

        if let Some(reader) = doc.reader {
            if let Some(path) = reader.path {
                config.source.path = PathBuf::from(path);
            }
            if let Some(marker) = reader.marker {
                if marker.is_empty() {
                    return Err(BumpError::Config {
                        path: origin.to_path_buf(),
                        message: "[reader].marker must not be empty".into(),
                    });
                }
                config.source.marker = marker;
            }
        }

        if !doc.targets.is_empty() {
            let mut targets = Vec::with_capacity(doc.targets.len());
            for (i, entry) in doc.targets.into_iter().enumerate() {
                if entry.rules.is_empty() {
                    return Err(BumpError::Config {
                        path: origin.to_path_buf(),
                        message: format!("target '{}' has no rules", entry.path),
                    });
                }
                let rules = entry
                    .rules
                    .iter()
                    .map(|r| PatchRule::new(&r.name, &r.pattern, &r.replacement, r.scope))
                    .collect::<Result<Vec<_>, _>>()?;
                targets.push(Target {
                    name: entry.name.unwrap_or_else(|| format!("target-{}", i + 1)),
                    path: PathBuf::from(entry.path),
                    rules,
                });
            }
            config.targets = targets;
        }

        Ok(config)
    }
}
