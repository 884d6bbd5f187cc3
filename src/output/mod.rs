mod json;
mod text;

pub use json::JsonFormatter;
pub use text::{ColorMode, TextFormatter};

use crate::error::Result;
use crate::rules::Severity;
use crate::validator::{ValidationResult, ValidationSummary};

/// Trait for formatting validation results into various output formats.
pub trait OutputFormatter {
    /// Format a single-document result.
    ///
    /// # Errors
    /// Returns an error if formatting fails.
    fn format_single(&self, result: &ValidationResult) -> Result<String>;

    /// Format a batch of results with their summary.
    ///
    /// # Errors
    /// Returns an error if formatting fails.
    fn format_batch(
        &self,
        results: &[ValidationResult],
        summary: &ValidationSummary,
    ) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "human" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Minimum-severity filter for displayed issues.
///
/// Filtering affects display only; scores, statuses, and exit codes
/// are always computed from the full issue list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeverityFilter {
    Error,
    Warning,
    Info,
    #[default]
    All,
}

impl SeverityFilter {
    #[must_use]
    pub const fn includes(self, severity: Severity) -> bool {
        match self {
            Self::All | Self::Info => true,
            Self::Warning => matches!(severity, Severity::Error | Severity::Warning),
            Self::Error => matches!(severity, Severity::Error),
        }
    }
}

impl std::str::FromStr for SeverityFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warning" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            "all" => Ok(Self::All),
            _ => Err(format!("Unknown severity filter: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
