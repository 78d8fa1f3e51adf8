use crate::error::BumpError;
use crate::types::version::Version;
use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Placeholder substituted with the new version in replacement templates.
pub const VERSION_PLACEHOLDER: &str = "{version}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleScope {
    /// Only the first match in the file.
    First,
    /// Every match in the file.
    #[default]
    All,
}

/// A named pattern -> replacement pair scoped to one field of one file.
#[derive(Debug, Clone)]
pub struct PatchRule {
    pub name: String,
    pattern: Regex,
    template: String,
    pub scope: RuleScope,
}

impl PatchRule {
    pub fn new(name: &str, pattern: &str, template: &str, scope: RuleScope) -> Result<Self, BumpError> {
        let pattern = Regex::new(pattern).map_err(|source| BumpError::InvalidPattern {
            rule: name.to_string(),
            source,
        })?;
        Ok(PatchRule {
            name: name.to_string(),
            pattern,
            template: template.to_string(),
            scope,
        })
    }

    pub fn replacement(&self, version: &Version) -> String {
        self.template.replace(VERSION_PLACEHOLDER, version.as_str())
    }

    /// Applies the rule to `text`, returning the new text and how many matches were replaced.
    pub fn apply<'t>(&self, text: &'t str, version: &Version) -> (Cow<'t, str>, usize) {
        let limit = match self.scope {
            RuleScope::First => 1,
            RuleScope::All => 0,
        };
        let found = self.pattern.find_iter(text).count();
        let matches = if limit == 0 { found } else { found.min(limit) };
        if matches == 0 {
            return (Cow::Borrowed(text), 0);
        }
        let replacement = self.replacement(version);
        let out = self.pattern.replacen(text, limit, NoExpand(replacement.as_str()));
        (out, matches)
    }
}
