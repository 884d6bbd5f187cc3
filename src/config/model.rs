use serde::{Deserialize, Serialize};

use crate::rules::Severity;

/// Supported config schema version.
pub const CONFIG_VERSION: &str = "1";

/// Conventional project-relative config file name.
pub const CONFIG_FILE_NAME: &str = ".spec-guard.toml";

/// Validation configuration as declared in `.spec-guard.toml`.
///
/// This is the raw, deserialized shape. It is merged with the builtin
/// rule catalog into a [`super::ResolvedRules`] exactly once, at
/// service construction time; the merged set is immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ValidationConfig {
    /// Config schema version ("1"). Absent means current.
    #[serde(default)]
    pub version: Option<String>,

    /// Global on/off switch. When false, validation reports no issues.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Rule ids to suppress. Every entry must name a known rule.
    #[serde(default)]
    pub disabled_rules: Vec<String>,

    /// Per-rule severity overrides.
    #[serde(default)]
    pub overrides: Vec<SeverityOverride>,

    /// Project-defined rules, appended after the builtins.
    #[serde(default)]
    pub custom_rules: Vec<CustomRule>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            version: None,
            enabled: true,
            disabled_rules: Vec::new(),
            overrides: Vec::new(),
            custom_rules: Vec::new(),
        }
    }
}

const fn default_true() -> bool {
    true
}

/// Severity override for a single rule [[overrides]].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SeverityOverride {
    /// Id of the rule to override.
    pub rule: String,

    /// New severity for that rule.
    pub severity: Severity,
}

/// Check kind discriminator as spelled in the config file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum CheckName {
    SectionPresence,
    PatternPresent,
    PatternAbsent,
    PatternCount,
}

/// Custom rule declaration [[custom_rules]].
///
/// `pattern` holds a regular expression for the pattern kinds and the
/// literal section heading for `section-presence`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CustomRule {
    /// Unique rule id. Must not collide with any builtin id.
    pub name: String,

    /// Used as the issue message. Falls back to a generic message.
    #[serde(default)]
    pub description: Option<String>,

    pub pattern: String,

    pub severity: Severity,

    /// Scoring category (free-form; unknown categories get the
    /// default weight).
    pub category: String,

    pub check: CheckName,

    /// Match limit, required for `pattern-count`.
    #[serde(default)]
    pub max: Option<usize>,

    /// Optional line selector for `pattern-present`: lines matching
    /// the selector must also match `pattern`.
    #[serde(default)]
    pub selector: Option<String>,

    /// Optional remediation hint copied onto issues.
    #[serde(default)]
    pub suggestion: Option<String>,

    #[serde(default = "default_true")]
    pub enabled: bool,
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
