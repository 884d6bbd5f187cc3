use std::path::Path;

use super::*;
use crate::rules::Severity;
use crate::score::ScoreWeights;

fn issue(severity: Severity) -> ValidationIssue {
    ValidationIssue {
        rule_id: "r".to_string(),
        severity,
        category: "structure".to_string(),
        line_number: 1,
        message: "m".to_string(),
        suggestion: None,
    }
}

fn result(issues: Vec<ValidationIssue>) -> ValidationResult {
    ValidationResult::from_issues(Path::new("spec.md"), issues, &ScoreWeights::default())
}

#[test]
fn no_issues_passes_with_full_score() {
    let r = result(vec![]);
    assert_eq!(r.status, ValidationStatus::Pass);
    assert_eq!(r.quality_score, 100);
    assert_eq!(r.error_count, 0);
    assert_eq!(r.warning_count, 0);
    assert_eq!(r.info_count, 0);
    assert!(!r.is_failed());
}

#[test]
fn any_error_fails() {
    let r = result(vec![issue(Severity::Warning), issue(Severity::Error)]);
    assert_eq!(r.status, ValidationStatus::Fail);
    assert!(r.is_failed());
}

#[test]
fn warnings_without_errors_warn() {
    let r = result(vec![issue(Severity::Warning), issue(Severity::Info)]);
    assert_eq!(r.status, ValidationStatus::Warn);
}

#[test]
fn info_only_passes() {
    let r = result(vec![issue(Severity::Info)]);
    assert_eq!(r.status, ValidationStatus::Pass);
}

#[test]
fn counts_partition_by_severity() {
    let r = result(vec![
        issue(Severity::Error),
        issue(Severity::Error),
        issue(Severity::Warning),
        issue(Severity::Info),
        issue(Severity::Info),
        issue(Severity::Info),
    ]);
    assert_eq!(r.error_count, 2);
    assert_eq!(r.warning_count, 1);
    assert_eq!(r.info_count, 3);
    assert_eq!(r.issues.len(), 6);
}

#[test]
fn status_display_is_lowercase() {
    assert_eq!(ValidationStatus::Pass.to_string(), "pass");
    assert_eq!(ValidationStatus::Warn.to_string(), "warn");
    assert_eq!(ValidationStatus::Fail.to_string(), "fail");
}
