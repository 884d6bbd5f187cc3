use serde::{Deserialize, Serialize};

/// Severity of a rule violation.
///
/// Severity drives three things: the `status` of a validation result
/// (any error fails the document), the score deduction multiplier, and
/// the CLI exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Deduction multiplier applied to the category weight.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Error => 1.0,
            Self::Warning => 0.5,
            Self::Info => 0.1,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Where a rule came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleOrigin {
    Builtin,
    Custom,
}

/// The check a rule performs, as a tagged variant rather than a trait
/// hierarchy, so builtin and custom rules stay structurally identical
/// and deserializable from the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "check", rename_all = "kebab-case")]
pub enum CheckKind {
    /// The document must contain a `## <section>` heading.
    SectionPresence { section: String },
    /// The pattern must match somewhere in the document. With a
    /// `selector`, every line matching the selector must also match
    /// the pattern, and each offending line is reported individually.
    PatternPresent {
        pattern: String,
        selector: Option<String>,
    },
    /// The pattern must match nowhere; every match is reported.
    PatternAbsent { pattern: String },
    /// Total matches across the document must not exceed `max_count`.
    PatternCount { pattern: String, max_count: usize },
}

impl CheckKind {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SectionPresence { .. } => "section-presence",
            Self::PatternPresent { .. } => "pattern-present",
            Self::PatternAbsent { .. } => "pattern-absent",
            Self::PatternCount { .. } => "pattern-count",
        }
    }
}

/// A single named check with a severity and a scoring category.
///
/// Rule ids are unique across the union of builtin and custom rules;
/// the resolver enforces this at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRule {
    pub id: String,
    pub severity: Severity,
    /// Free-form grouping key shared with the score calculator
    /// (e.g. structure, requirements, acceptance, clarity, naming).
    pub category: String,
    #[serde(flatten)]
    pub check: CheckKind,
    /// Human-readable description, used as the issue message.
    pub message: String,
    /// Optional remediation hint copied onto issues.
    pub suggestion: Option<String>,
    /// Disabled rules are skipped by the engine but still visible for
    /// introspection and id-uniqueness validation.
    pub enabled: bool,
    pub origin: RuleOrigin,
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
