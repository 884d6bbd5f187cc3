#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the spec-guard binary.
#[macro_export]
macro_rules! spec_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("spec-guard"))
    };
}

pub const GOOD_SPEC: &str = "\
# Checkout Flow

## Overview

Customers pay for the items in their cart.

## User Scenarios

A signed-in customer checks out a non-empty cart.

## Requirements

- **FR-001**: The system MUST create an order on successful payment.
- **FR-002**: The system MUST release reserved stock on failure.

## Acceptance Criteria

- Given a non-empty cart, When the customer pays, Then an order is created.
";

/// Temporary project tree for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// A spec document that fails validation (missing every required
    /// section except the title).
    pub fn create_bad_spec(&self, relative_path: &str) -> PathBuf {
        self.create_file(relative_path, "# Half-finished\n\nSome prose.\n")
    }
}
