//! Rule set resolution.
//!
//! Merges the builtin catalog with the user configuration
//! (builtins ⊕ severity overrides ⊖ disabled ⊕ custom rules) into a
//! flat, validated rule list with pre-compiled patterns. Resolution
//! runs exactly once per service; the output is immutable.

use indexmap::IndexMap;
use regex::Regex;

use crate::error::{Result, SpecGuardError};
use crate::rules::{CheckKind, RuleOrigin, ValidationRule, builtin_rules};

use super::model::{CheckName, CustomRule, ValidationConfig};

/// A rule's check with its pattern compiled, ready for evaluation.
#[derive(Debug)]
pub enum CompiledCheck {
    SectionPresence { heading: Regex },
    PatternPresent { pattern: Regex, selector: Option<Regex> },
    PatternAbsent { pattern: Regex },
    PatternCount { pattern: Regex, max_count: usize },
}

/// One entry of the resolved rule list.
#[derive(Debug)]
pub struct ResolvedRule {
    pub rule: ValidationRule,
    pub check: CompiledCheck,
}

/// The finalized, immutable rule set.
///
/// Rule order is the canonical evaluation order: builtins first (in
/// catalog order), then custom rules in declaration order. Disabled
/// rules stay in the list for introspection; the engine skips them.
#[derive(Debug)]
pub struct ResolvedRules {
    enabled: bool,
    rules: Vec<ResolvedRule>,
}

impl ResolvedRules {
    /// Merge builtins with the given configuration and validate the result.
    ///
    /// # Errors
    /// Returns `DuplicateRuleId` if a custom rule reuses an id,
    /// `UnknownRule` if a disable/override entry references an unknown
    /// id, `InvalidPattern` if a pattern does not compile, and
    /// `Config` for structurally invalid custom rules.
    pub fn resolve(config: &ValidationConfig) -> Result<Self> {
        let mut rules = builtin_rules();

        for custom in &config.custom_rules {
            if rules.iter().any(|r| r.id == custom.name) {
                return Err(SpecGuardError::DuplicateRuleId {
                    id: custom.name.clone(),
                });
            }
            rules.push(convert_custom(custom)?);
        }

        // Index by id for override application; preserves list order.
        let mut by_id: IndexMap<&str, usize> = IndexMap::with_capacity(rules.len());
        for (idx, r) in rules.iter().enumerate() {
            by_id.insert(r.id.as_str(), idx);
        }

        let mut disabled = Vec::with_capacity(config.disabled_rules.len());
        for id in &config.disabled_rules {
            let idx = by_id
                .get(id.as_str())
                .copied()
                .ok_or_else(|| SpecGuardError::UnknownRule {
                    id: id.clone(),
                    context: "disabled_rules",
                })?;
            disabled.push(idx);
        }

        let mut severity_overrides = Vec::with_capacity(config.overrides.len());
        for over in &config.overrides {
            let idx = by_id.get(over.rule.as_str()).copied().ok_or_else(|| {
                SpecGuardError::UnknownRule {
                    id: over.rule.clone(),
                    context: "overrides",
                }
            })?;
            severity_overrides.push((idx, over.severity));
        }

        for idx in disabled {
            rules[idx].enabled = false;
        }
        for (idx, severity) in severity_overrides {
            rules[idx].severity = severity;
        }

        let rules = rules
            .into_iter()
            .map(|rule| {
                let check = compile_check(&rule)?;
                Ok(ResolvedRule { rule, check })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            enabled: config.enabled,
            rules,
        })
    }

    /// Resolve the builtin catalog with no overrides.
    ///
    /// # Errors
    /// Never fails in practice; builtin patterns are valid by construction.
    pub fn defaults() -> Result<Self> {
        Self::resolve(&ValidationConfig::default())
    }

    /// Global on/off switch from the configuration.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// All rules in evaluation order, including disabled ones.
    #[must_use]
    pub fn rules(&self) -> &[ResolvedRule] {
        &self.rules
    }

    /// Enabled rules in evaluation order.
    pub fn enabled_rules(&self) -> impl Iterator<Item = &ResolvedRule> {
        self.rules.iter().filter(|r| r.rule.enabled)
    }
}

fn convert_custom(custom: &CustomRule) -> Result<ValidationRule> {
    let check = match custom.check {
        CheckName::SectionPresence => CheckKind::SectionPresence {
            section: custom.pattern.clone(),
        },
        CheckName::PatternPresent => CheckKind::PatternPresent {
            pattern: custom.pattern.clone(),
            selector: custom.selector.clone(),
        },
        CheckName::PatternAbsent => CheckKind::PatternAbsent {
            pattern: custom.pattern.clone(),
        },
        CheckName::PatternCount => CheckKind::PatternCount {
            pattern: custom.pattern.clone(),
            max_count: custom.max.ok_or_else(|| {
                SpecGuardError::Config(format!(
                    "custom rule '{}' uses check = \"pattern-count\" but has no 'max' field",
                    custom.name
                ))
            })?,
        },
    };

    let message = custom.description.clone().unwrap_or_else(|| {
        format!("Custom rule '{}' violated", custom.name)
    });

    Ok(ValidationRule {
        id: custom.name.clone(),
        severity: custom.severity,
        category: custom.category.clone(),
        check,
        message,
        suggestion: custom.suggestion.clone(),
        enabled: custom.enabled,
        origin: RuleOrigin::Custom,
    })
}

fn compile_check(rule: &ValidationRule) -> Result<CompiledCheck> {
    let compile = |pattern: &str| {
        Regex::new(pattern).map_err(|source| SpecGuardError::InvalidPattern {
            rule: rule.id.clone(),
            source,
        })
    };

    let check = match &rule.check {
        CheckKind::SectionPresence { section } => CompiledCheck::SectionPresence {
            heading: compile(&format!(r"^##\s+{}", regex::escape(section)))?,
        },
        CheckKind::PatternPresent { pattern, selector } => CompiledCheck::PatternPresent {
            pattern: compile(pattern)?,
            selector: selector.as_deref().map(compile).transpose()?,
        },
        CheckKind::PatternAbsent { pattern } => CompiledCheck::PatternAbsent {
            pattern: compile(pattern)?,
        },
        CheckKind::PatternCount { pattern, max_count } => CompiledCheck::PatternCount {
            pattern: compile(pattern)?,
            max_count: *max_count,
        },
    };
    Ok(check)
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
