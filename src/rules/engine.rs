//! Rule evaluation.
//!
//! Evaluates the resolved rule set against one document's text. The
//! engine is total over any string input: a rule with no matches is
//! simply a passed rule, never an error. Issues come out in rule
//! evaluation order, then line order, so output is stable for
//! identical input.

use regex::Regex;

use crate::config::{CompiledCheck, ResolvedRules};
use crate::validator::ValidationIssue;

use super::model::ValidationRule;

/// Whole-document issues carry line number 0.
pub const DOCUMENT_LINE: usize = 0;

/// Evaluates rules against document text. Holds only a shared
/// reference to the frozen rule set, so engines are cheap to create
/// per file and safe to use from parallel workers.
pub struct RuleEngine<'a> {
    rules: &'a ResolvedRules,
}

impl<'a> RuleEngine<'a> {
    #[must_use]
    pub const fn new(rules: &'a ResolvedRules) -> Self {
        Self { rules }
    }

    /// Evaluate every enabled rule against `content`.
    #[must_use]
    pub fn evaluate(&self, content: &str) -> Vec<ValidationIssue> {
        if !self.rules.is_enabled() {
            return Vec::new();
        }

        let lines: Vec<&str> = content.lines().collect();
        let mut issues = Vec::new();

        for resolved in self.rules.enabled_rules() {
            match &resolved.check {
                CompiledCheck::SectionPresence { heading } => {
                    check_section_presence(&resolved.rule, heading, &lines, &mut issues);
                }
                CompiledCheck::PatternPresent { pattern, selector } => {
                    check_pattern_present(
                        &resolved.rule,
                        pattern,
                        selector.as_ref(),
                        &lines,
                        &mut issues,
                    );
                }
                CompiledCheck::PatternAbsent { pattern } => {
                    check_pattern_absent(&resolved.rule, pattern, &lines, &mut issues);
                }
                CompiledCheck::PatternCount { pattern, max_count } => {
                    check_pattern_count(&resolved.rule, pattern, *max_count, &lines, &mut issues);
                }
            }
        }

        issues
    }
}

fn issue(rule: &ValidationRule, line_number: usize, message: String) -> ValidationIssue {
    ValidationIssue {
        rule_id: rule.id.clone(),
        severity: rule.severity,
        category: rule.category.clone(),
        line_number,
        message,
        suggestion: rule.suggestion.clone(),
    }
}

fn check_section_presence(
    rule: &ValidationRule,
    heading: &Regex,
    lines: &[&str],
    issues: &mut Vec<ValidationIssue>,
) {
    if !lines.iter().any(|line| heading.is_match(line)) {
        issues.push(issue(rule, DOCUMENT_LINE, rule.message.clone()));
    }
}

fn check_pattern_present(
    rule: &ValidationRule,
    pattern: &Regex,
    selector: Option<&Regex>,
    lines: &[&str],
    issues: &mut Vec<ValidationIssue>,
) {
    match selector {
        // Selector form: every line the rule applies to must match the
        // required pattern; each offending line is reported.
        Some(selector) => {
            for (idx, line) in lines.iter().enumerate() {
                if selector.is_match(line) && !pattern.is_match(line) {
                    issues.push(issue(rule, idx + 1, rule.message.clone()));
                }
            }
        }
        // Plain form: the pattern must match at least once somewhere.
        None => {
            if !lines.iter().any(|line| pattern.is_match(line)) {
                issues.push(issue(rule, DOCUMENT_LINE, rule.message.clone()));
            }
        }
    }
}

fn check_pattern_absent(
    rule: &ValidationRule,
    pattern: &Regex,
    lines: &[&str],
    issues: &mut Vec<ValidationIssue>,
) {
    for (idx, line) in lines.iter().enumerate() {
        if pattern.is_match(line) {
            issues.push(issue(rule, idx + 1, rule.message.clone()));
        }
    }
}

fn check_pattern_count(
    rule: &ValidationRule,
    pattern: &Regex,
    max_count: usize,
    lines: &[&str],
    issues: &mut Vec<ValidationIssue>,
) {
    let count: usize = lines.iter().map(|line| pattern.find_iter(line).count()).sum();
    if count > max_count {
        let message = format!("{} ({count} occurrences, limit {max_count})", rule.message);
        issues.push(issue(rule, DOCUMENT_LINE, message));
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
