mod builtin;
mod engine;
mod model;

pub use builtin::builtin_rules;
pub use engine::RuleEngine;
pub use model::{CheckKind, RuleOrigin, Severity, ValidationRule};
