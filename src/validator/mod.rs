//! Validation service: the sole entry point external callers use.
//!
//! Orchestrates config-driven rule evaluation and scoring for a single
//! file, a directory, or a whole project tree, and aggregates batch
//! results into summary statistics.

mod result;

pub use result::{ValidationIssue, ValidationResult, ValidationStatus, ValidationSummary};

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use walkdir::WalkDir;

use crate::config::ResolvedRules;
use crate::error::{Result, SpecGuardError};
use crate::rules::{RuleEngine, Severity};
use crate::score::ScoreWeights;

/// File extensions accepted as spec documents.
const SPEC_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Conventional document root under the project root.
const SPEC_DIR_NAME: &str = "specs";

/// Validates spec documents against a frozen rule set.
///
/// Construction happens after configuration resolution; from then on
/// every validation call is a pure function of file content and the
/// immutable rule set, which is what makes parallel batch evaluation
/// safe.
pub struct SpecValidator {
    rules: ResolvedRules,
    weights: ScoreWeights,
    root: PathBuf,
}

impl SpecValidator {
    #[must_use]
    pub fn new(rules: ResolvedRules, root: PathBuf) -> Self {
        Self {
            rules,
            weights: ScoreWeights::default(),
            root,
        }
    }

    /// Replace the default scoring weights.
    #[must_use]
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    #[must_use]
    pub const fn rules(&self) -> &ResolvedRules {
        &self.rules
    }

    /// Validate a single spec document.
    ///
    /// A zero-byte document is a validatable-but-failing state: it
    /// yields a result carrying one synthetic `empty-file` error
    /// issue, not an error.
    ///
    /// # Errors
    /// Returns `NotFound` if the path does not exist, `InvalidDocument`
    /// if it is not plausibly a spec document (wrong extension, binary
    /// content, a directory), and `FileRead` on read failure.
    pub fn validate_file(&self, path: &Path) -> Result<ValidationResult> {
        if !path.exists() {
            return Err(SpecGuardError::NotFound {
                path: path.to_path_buf(),
            });
        }
        if path.is_dir() {
            return Err(SpecGuardError::InvalidDocument {
                path: path.to_path_buf(),
                reason: "is a directory".to_string(),
            });
        }
        if !is_spec_document(path) {
            return Err(SpecGuardError::InvalidDocument {
                path: path.to_path_buf(),
                reason: "unsupported file extension".to_string(),
            });
        }

        let bytes = std::fs::read(path).map_err(|source| SpecGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        if bytes.is_empty() {
            let issues = vec![empty_file_issue()];
            return Ok(ValidationResult::from_issues(path, issues, &self.weights));
        }

        let content = String::from_utf8(bytes).map_err(|_| SpecGuardError::InvalidDocument {
            path: path.to_path_buf(),
            reason: "binary content".to_string(),
        })?;

        let issues = RuleEngine::new(&self.rules).evaluate(&content);
        Ok(ValidationResult::from_issues(path, issues, &self.weights))
    }

    /// Validate every spec document directly inside `dir` (non-recursive).
    ///
    /// A failure on one file never aborts the batch: it becomes a
    /// result with a single synthetic `read-error` issue, so the
    /// returned list always has one entry per discovered file, sorted
    /// by path.
    ///
    /// # Errors
    /// Returns `NotFound` if the directory does not exist and
    /// `InvalidDocument` if the path is not a directory.
    pub fn validate_directory(&self, dir: &Path) -> Result<Vec<ValidationResult>> {
        if !dir.exists() {
            return Err(SpecGuardError::NotFound {
                path: dir.to_path_buf(),
            });
        }
        if !dir.is_dir() {
            return Err(SpecGuardError::InvalidDocument {
                path: dir.to_path_buf(),
                reason: "not a directory".to_string(),
            });
        }

        let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && is_spec_document(path))
            .collect();
        paths.sort();

        Ok(self.validate_batch(paths))
    }

    /// Validate the whole project tree, recursively, starting from the
    /// conventional document root (`<root>/specs` when it exists,
    /// otherwise the project root itself).
    ///
    /// # Errors
    /// Returns `NotFound` if the document root does not exist.
    pub fn validate_all(&self) -> Result<Vec<ValidationResult>> {
        let doc_root = self.document_root();
        if !doc_root.exists() {
            return Err(SpecGuardError::NotFound { path: doc_root });
        }

        let mut paths: Vec<PathBuf> = WalkDir::new(&doc_root)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.file_type().is_file() && is_spec_document(entry.path()))
            .map(walkdir::DirEntry::into_path)
            .collect();
        paths.sort();

        Ok(self.validate_batch(paths))
    }

    /// Pure aggregation over a batch of results. No re-validation.
    #[must_use]
    pub fn summarize(results: &[ValidationResult]) -> ValidationSummary {
        let (mut passed, mut warned, mut failed) = (0, 0, 0);
        for result in results {
            match result.status {
                ValidationStatus::Pass => passed += 1,
                ValidationStatus::Warn => warned += 1,
                ValidationStatus::Fail => failed += 1,
            }
        }

        #[allow(clippy::cast_precision_loss)] // batch sizes are far below 2^52
        let average_score = if results.is_empty() {
            0.0
        } else {
            let total: u32 = results.iter().map(|r| u32::from(r.quality_score)).sum();
            f64::from(total) / results.len() as f64
        };

        ValidationSummary {
            total_specs: results.len(),
            passed,
            warned,
            failed,
            average_score,
        }
    }

    /// Evaluate files in parallel. Input is pre-sorted and rayon's
    /// indexed map preserves order, so batch output stays canonical
    /// regardless of scheduling.
    fn validate_batch(&self, paths: Vec<PathBuf>) -> Vec<ValidationResult> {
        paths
            .par_iter()
            .map(|path| {
                self.validate_file(path)
                    .unwrap_or_else(|error| self.error_result(path, &error))
            })
            .collect()
    }

    fn document_root(&self) -> PathBuf {
        let specs = self.root.join(SPEC_DIR_NAME);
        if specs.is_dir() { specs } else { self.root.clone() }
    }

    /// Represent a per-file failure as a failing result so batch
    /// output stays complete.
    fn error_result(&self, path: &Path, error: &SpecGuardError) -> ValidationResult {
        let issues = vec![ValidationIssue {
            rule_id: "read-error".to_string(),
            severity: Severity::Error,
            category: "structure".to_string(),
            line_number: 0,
            message: format!("Could not validate document: {error}"),
            suggestion: None,
        }];
        ValidationResult::from_issues(path, issues, &self.weights)
    }
}

fn is_spec_document(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SPEC_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

fn empty_file_issue() -> ValidationIssue {
    ValidationIssue {
        rule_id: "empty-file".to_string(),
        severity: Severity::Error,
        category: "structure".to_string(),
        line_number: 0,
        message: "Spec document is empty".to_string(),
        suggestion: Some("Write the spec, or delete the file".to_string()),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
