use std::collections::BTreeMap;

use super::*;
use crate::rules::Severity;
use crate::validator::ValidationIssue;

fn issue(rule_id: &str, severity: Severity, category: &str) -> ValidationIssue {
    ValidationIssue {
        rule_id: rule_id.to_string(),
        severity,
        category: category.to_string(),
        line_number: 0,
        message: String::new(),
        suggestion: None,
    }
}

#[test]
fn empty_issue_list_scores_100() {
    let weights = ScoreWeights::default();
    assert_eq!(weights.quality_score(&[]), 100);
}

#[test]
fn single_structural_error_scores_80() {
    // Scenario: missing Requirements heading, category structure
    // (weight 20), error multiplier 1.0.
    let weights = ScoreWeights::default();
    let issues = vec![issue("missing-requirements", Severity::Error, "structure")];
    assert_eq!(weights.quality_score(&issues), 80);
}

#[test]
fn repeated_category_issues_cap_at_category_weight() {
    // Scenario: three naming warnings in requirements (weight 15,
    // multiplier 0.5). Uncapped that would be 22.5; the cap holds the
    // category to 15, so the score is 85, not 77.
    let weights = ScoreWeights::default();
    let issues = vec![
        issue("requirement-naming", Severity::Warning, "requirements"),
        issue("requirement-naming", Severity::Warning, "requirements"),
        issue("requirement-naming", Severity::Warning, "requirements"),
    ];
    assert_eq!(weights.quality_score(&issues), 85);
}

#[test]
fn clarity_warnings_cap_at_clarity_weight() {
    // Scenario: two unresolved-clarification warnings (clarity weight
    // 5, multiplier 0.5) deduct exactly the 5-point budget.
    let weights = ScoreWeights::default();
    let issues = vec![
        issue("unresolved-clarification", Severity::Warning, "clarity"),
        issue("unresolved-clarification", Severity::Warning, "clarity"),
    ];
    assert_eq!(weights.quality_score(&issues), 95);
}

#[test]
fn score_is_order_insensitive() {
    let weights = ScoreWeights::default();
    let issues = vec![
        issue("a", Severity::Error, "structure"),
        issue("b", Severity::Warning, "requirements"),
        issue("c", Severity::Info, "clarity"),
        issue("d", Severity::Warning, "clarity"),
        issue("e", Severity::Error, "unmapped"),
    ];
    let expected = weights.quality_score(&issues);

    let mut reversed = issues.clone();
    reversed.reverse();
    assert_eq!(weights.quality_score(&reversed), expected);

    let mut rotated = issues.clone();
    rotated.rotate_left(2);
    assert_eq!(weights.quality_score(&rotated), expected);

    let mut interleaved = vec![
        issues[3].clone(),
        issues[0].clone(),
        issues[4].clone(),
        issues[1].clone(),
        issues[2].clone(),
    ];
    assert_eq!(weights.quality_score(&interleaved), expected);
    interleaved.swap(0, 4);
    assert_eq!(weights.quality_score(&interleaved), expected);
}

#[test]
fn adding_an_issue_never_increases_the_score() {
    let weights = ScoreWeights::default();
    let categories = ["structure", "requirements", "acceptance", "clarity", "other"];
    let severities = [Severity::Error, Severity::Warning, Severity::Info];

    let mut issues = Vec::new();
    let mut previous = weights.quality_score(&issues);
    for category in categories {
        for severity in severities {
            issues.push(issue("monotone", severity, category));
            let current = weights.quality_score(&issues);
            assert!(
                current <= previous,
                "score increased from {previous} to {current} after adding {severity:?}/{category}"
            );
            previous = current;
        }
    }
}

#[test]
fn unknown_category_falls_back_to_default_weight() {
    let weights = ScoreWeights::default();
    let issues = vec![issue("custom", Severity::Error, "never-heard-of-it")];
    assert_eq!(weights.quality_score(&issues), 95);
}

#[test]
fn fractional_totals_truncate() {
    // One info issue in clarity: 5 * 0.1 = 0.5 points, 99.5 truncates
    // to 99, not rounds to 100.
    let weights = ScoreWeights::default();
    let issues = vec![issue("todo-marker", Severity::Info, "clarity")];
    assert_eq!(weights.quality_score(&issues), 99);
}

#[test]
fn score_floors_at_zero() {
    let mut categories = BTreeMap::new();
    categories.insert("huge".to_string(), 200.0);
    let weights = ScoreWeights::new(categories, 5.0);

    let issues = vec![issue("x", Severity::Error, "huge")];
    assert_eq!(weights.quality_score(&issues), 0);
}

#[test]
fn custom_weight_table_drives_capping() {
    let mut categories = BTreeMap::new();
    categories.insert("tiny".to_string(), 2.0);
    let weights = ScoreWeights::new(categories, 1.0);

    // Ten errors in a 2-point category still cost exactly 2 points.
    let issues: Vec<_> = (0..10).map(|_| issue("t", Severity::Error, "tiny")).collect();
    assert_eq!(weights.quality_score(&issues), 98);

    // Unknown category uses the injected default weight.
    let issues = vec![issue("u", Severity::Error, "elsewhere")];
    assert_eq!(weights.quality_score(&issues), 99);
}

#[test]
fn caps_apply_per_category_independently() {
    let weights = ScoreWeights::default();
    let mut issues = Vec::new();
    for _ in 0..10 {
        issues.push(issue("s", Severity::Error, "structure"));
        issues.push(issue("n", Severity::Error, "naming"));
    }
    // structure capped at 20, naming capped at 5.
    assert_eq!(weights.quality_score(&issues), 75);
}
