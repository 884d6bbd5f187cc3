use serde::Serialize;

use crate::error::Result;
use crate::validator::{ValidationResult, ValidationSummary};

use super::{OutputFormatter, SeverityFilter};

pub struct JsonFormatter {
    severity: SeverityFilter,
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new(SeverityFilter::All)
    }
}

impl JsonFormatter {
    #[must_use]
    pub const fn new(severity: SeverityFilter) -> Self {
        Self { severity }
    }
}

#[derive(Serialize)]
struct JsonBatch {
    summary: JsonSummary,
    results: Vec<JsonResult>,
}

#[derive(Serialize)]
struct JsonSummary {
    total_specs: usize,
    passed: usize,
    failed: usize,
    average_score: f64,
}

#[derive(Serialize)]
struct JsonResult {
    spec_path: String,
    status: String,
    quality_score: u8,
    error_count: usize,
    warning_count: usize,
    info_count: usize,
    issues: Vec<JsonIssue>,
    validated_at: String,
}

#[derive(Serialize)]
struct JsonIssue {
    rule_id: String,
    severity: String,
    line_number: usize,
    message: String,
    suggestion: Option<String>,
}

impl OutputFormatter for JsonFormatter {
    fn format_single(&self, result: &ValidationResult) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.convert(result))?)
    }

    fn format_batch(
        &self,
        results: &[ValidationResult],
        summary: &ValidationSummary,
    ) -> Result<String> {
        let output = JsonBatch {
            summary: JsonSummary {
                total_specs: summary.total_specs,
                passed: summary.passed,
                failed: summary.failed,
                average_score: summary.average_score,
            },
            results: results.iter().map(|r| self.convert(r)).collect(),
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

impl JsonFormatter {
    fn convert(&self, result: &ValidationResult) -> JsonResult {
        JsonResult {
            spec_path: result.path.display().to_string(),
            status: result.status.to_string(),
            quality_score: result.quality_score,
            error_count: result.error_count,
            warning_count: result.warning_count,
            info_count: result.info_count,
            issues: result
                .issues
                .iter()
                .filter(|issue| self.severity.includes(issue.severity))
                .map(|issue| JsonIssue {
                    rule_id: issue.rule_id.clone(),
                    severity: issue.severity.to_string(),
                    line_number: issue.line_number,
                    message: issue.message.clone(),
                    suggestion: issue.suggestion.clone(),
                })
                .collect(),
            validated_at: result.validated_at.to_rfc3339(),
        }
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
