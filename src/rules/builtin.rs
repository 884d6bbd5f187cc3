//! Builtin rule catalog.
//!
//! Pure static data, materialized per call so concurrent services never
//! share mutable state. Order here is the canonical evaluation order;
//! custom rules are appended after these in declaration order.

use super::model::{CheckKind, RuleOrigin, Severity, ValidationRule};

fn rule(
    id: &str,
    severity: Severity,
    category: &str,
    check: CheckKind,
    message: &str,
    suggestion: Option<&str>,
) -> ValidationRule {
    ValidationRule {
        id: id.to_string(),
        severity,
        category: category.to_string(),
        check,
        message: message.to_string(),
        suggestion: suggestion.map(str::to_string),
        enabled: true,
        origin: RuleOrigin::Builtin,
    }
}

/// Returns the builtin rules in canonical evaluation order.
#[must_use]
pub fn builtin_rules() -> Vec<ValidationRule> {
    vec![
        rule(
            "missing-title",
            Severity::Error,
            "structure",
            CheckKind::PatternPresent {
                pattern: r"^#\s+\S".to_string(),
                selector: None,
            },
            "Document has no top-level title",
            Some("Start the document with a '# <Feature Name>' heading"),
        ),
        rule(
            "missing-overview",
            Severity::Error,
            "structure",
            CheckKind::SectionPresence {
                section: "Overview".to_string(),
            },
            "Missing required section '## Overview'",
            Some("Add an '## Overview' section summarizing the feature"),
        ),
        rule(
            "missing-requirements",
            Severity::Error,
            "structure",
            CheckKind::SectionPresence {
                section: "Requirements".to_string(),
            },
            "Missing required section '## Requirements'",
            Some("Add a '## Requirements' section with FR-NNN entries"),
        ),
        rule(
            "missing-user-scenarios",
            Severity::Warning,
            "structure",
            CheckKind::SectionPresence {
                section: "User Scenarios".to_string(),
            },
            "Missing section '## User Scenarios'",
            Some("Describe at least one primary user scenario"),
        ),
        rule(
            "missing-acceptance-criteria",
            Severity::Error,
            "acceptance",
            CheckKind::SectionPresence {
                section: "Acceptance Criteria".to_string(),
            },
            "Missing required section '## Acceptance Criteria'",
            Some("Add an '## Acceptance Criteria' section"),
        ),
        rule(
            "requirement-naming",
            Severity::Warning,
            "requirements",
            CheckKind::PatternPresent {
                pattern: r"\*\*FR-\d{3}\*\*:".to_string(),
                selector: Some(r"\bFR-".to_string()),
            },
            "Requirement identifier does not follow the **FR-NNN**: convention",
            Some("Format requirements as '- **FR-001**: <requirement text>'"),
        ),
        rule(
            "acceptance-given-when-then",
            Severity::Warning,
            "acceptance",
            CheckKind::PatternPresent {
                pattern: r"\b(Given|When|Then)\b".to_string(),
                selector: None,
            },
            "No Given/When/Then acceptance criteria found",
            Some("Write acceptance criteria in Given/When/Then form"),
        ),
        rule(
            "unresolved-clarification",
            Severity::Warning,
            "clarity",
            CheckKind::PatternAbsent {
                pattern: r"\[NEEDS CLARIFICATION".to_string(),
            },
            "Unresolved [NEEDS CLARIFICATION] marker",
            Some("Resolve the open question and remove the marker"),
        ),
        rule(
            "todo-marker",
            Severity::Info,
            "clarity",
            CheckKind::PatternAbsent {
                pattern: r"\b(TODO|TBD|FIXME)\b".to_string(),
            },
            "Placeholder marker left in document",
            Some("Replace TODO/TBD/FIXME with concrete content"),
        ),
        rule(
            "vague-terms",
            Severity::Info,
            "clarity",
            CheckKind::PatternCount {
                pattern: r"(?i)\b(maybe|possibly|somehow|etc\.?)\b".to_string(),
                max_count: 5,
            },
            "Document relies heavily on vague wording",
            Some("Replace vague terms with measurable statements"),
        ),
        rule(
            "heading-case",
            Severity::Info,
            "naming",
            CheckKind::PatternAbsent {
                pattern: r"^#{1,3}\s+[a-z]".to_string(),
            },
            "Heading does not start with a capital letter",
            None,
        ),
    ]
}

#[cfg(test)]
#[path = "builtin_tests.rs"]
mod tests;
