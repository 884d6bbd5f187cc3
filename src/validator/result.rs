use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::rules::Severity;
use crate::score::ScoreWeights;

/// Validation outcome for one document, derived from issue severities:
/// any error fails the document, otherwise any warning demotes it to
/// `Warn`, otherwise it passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    Pass,
    Warn,
    Fail,
}

impl ValidationStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Warn => "warn",
            Self::Fail => "fail",
        }
    }
}

impl std::fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// One concrete rule violation in a specific document.
///
/// Issues are created by rule evaluation (or synthesized by the
/// validator for unreadable/empty documents) and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub rule_id: String,
    /// Severity at evaluation time, after any configured override.
    pub severity: Severity,
    /// Scoring category copied from the rule.
    pub category: String,
    /// 1-indexed; 0 means the issue applies to the whole document.
    pub line_number: usize,
    pub message: String,
    pub suggestion: Option<String>,
}

/// The aggregate outcome for one document.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub path: PathBuf,
    pub status: ValidationStatus,
    pub quality_score: u8,
    pub error_count: usize,
    pub warning_count: usize,
    pub info_count: usize,
    /// Ordered by rule evaluation order, then line number. Stable for
    /// identical input.
    pub issues: Vec<ValidationIssue>,
    /// Informational only; excluded from any equality or determinism
    /// consideration.
    pub validated_at: DateTime<Utc>,
}

impl ValidationResult {
    /// Assemble a result from evaluated issues: counts severities,
    /// derives the status, and computes the quality score.
    #[must_use]
    pub fn from_issues(path: &Path, issues: Vec<ValidationIssue>, weights: &ScoreWeights) -> Self {
        let (mut errors, mut warnings, mut infos) = (0, 0, 0);
        for issue in &issues {
            match issue.severity {
                Severity::Error => errors += 1,
                Severity::Warning => warnings += 1,
                Severity::Info => infos += 1,
            }
        }

        let status = if errors > 0 {
            ValidationStatus::Fail
        } else if warnings > 0 {
            ValidationStatus::Warn
        } else {
            ValidationStatus::Pass
        };

        Self {
            path: path.to_path_buf(),
            status,
            quality_score: weights.quality_score(&issues),
            error_count: errors,
            warning_count: warnings,
            info_count: infos,
            issues,
            validated_at: Utc::now(),
        }
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.status, ValidationStatus::Fail)
    }
}

/// Project-level aggregation over a batch of results.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationSummary {
    pub total_specs: usize,
    pub passed: usize,
    pub warned: usize,
    pub failed: usize,
    /// Arithmetic mean of quality scores; 0.0 for an empty batch.
    pub average_score: f64,
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
