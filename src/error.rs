use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpecGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown rule id '{id}' in {context}")]
    UnknownRule { id: String, context: &'static str },

    #[error("Custom rule '{id}' reuses an existing rule id")]
    DuplicateRuleId { id: String },

    #[error("Invalid pattern in rule '{rule}': {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    #[error("Spec not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Not a spec document: {} ({reason})", path.display())]
    InvalidDocument { path: PathBuf, reason: String },

    #[error("Failed to read file: {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SpecGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
