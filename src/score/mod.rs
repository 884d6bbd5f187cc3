//! Quality score calculation.
//!
//! Maps a list of issues to an integer score in `[0, 100]` via
//! category-capped weighted deductions. The function is total and
//! order-insensitive: identical issue multisets always produce the
//! same score, regardless of input order.

use std::collections::BTreeMap;

use crate::validator::ValidationIssue;

/// Default per-category point budgets.
const DEFAULT_CATEGORY_WEIGHTS: &[(&str, f64)] = &[
    ("structure", 20.0),
    ("requirements", 15.0),
    ("acceptance", 10.0),
    ("clarity", 5.0),
    ("naming", 5.0),
];

/// Weight for categories not present in the weight table.
const DEFAULT_WEIGHT: f64 = 5.0;

/// Injectable scoring configuration: per-category point budgets plus
/// the fallback weight for unknown categories. Severity multipliers
/// live on [`crate::rules::Severity`].
///
/// Each issue deducts `weight(category) * multiplier(severity)`,
/// accumulated per category and capped at that category's weight, so
/// one noisy category can never cost more than its own budget. The
/// final score is `100 - sum(capped deductions)`, floored at 0 and
/// truncated to an integer.
#[derive(Debug, Clone)]
pub struct ScoreWeights {
    categories: BTreeMap<String, f64>,
    default_weight: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORY_WEIGHTS
                .iter()
                .map(|(name, weight)| ((*name).to_string(), *weight))
                .collect(),
            default_weight: DEFAULT_WEIGHT,
        }
    }
}

impl ScoreWeights {
    /// Build a custom weight table (used by tests to exercise the
    /// capping logic with small, exact weights).
    #[must_use]
    pub fn new(categories: BTreeMap<String, f64>, default_weight: f64) -> Self {
        Self {
            categories,
            default_weight,
        }
    }

    /// Point budget for a category.
    #[must_use]
    pub fn weight(&self, category: &str) -> f64 {
        self.categories
            .get(category)
            .copied()
            .unwrap_or(self.default_weight)
    }

    /// Compute the quality score for a set of issues.
    ///
    /// Total over any input: the empty list scores 100, and unknown
    /// categories fall back to the default weight.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // score is clamped to [0, 100]
    pub fn quality_score(&self, issues: &[ValidationIssue]) -> u8 {
        // BTreeMap keeps per-category accumulation independent of
        // issue order, which the determinism guarantee depends on.
        let mut deductions: BTreeMap<&str, f64> = BTreeMap::new();

        for issue in issues {
            let weight = self.weight(&issue.category);
            let deduction = weight * issue.severity.multiplier();
            let entry = deductions.entry(issue.category.as_str()).or_insert(0.0);
            *entry = (*entry + deduction).min(weight);
        }

        let total: f64 = deductions.values().sum();
        (100.0 - total).clamp(0.0, 100.0) as u8
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
