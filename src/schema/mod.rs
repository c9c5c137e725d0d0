//! Validation of untyped content and quality lint.
//!
//! - `validate_entry`: structural checks, every violation collected
//! - `lint_entry`: non-fatal authoring warnings
//! - `ValidationReport`: aggregation for the `validate` command

pub mod lint;
pub mod report;
pub mod validate;

pub use lint::{lint_entry, LintKind, LintWarning};
pub use report::{SourceError, ValidationReport};
pub use validate::{validate_entry, SchemaError, Violation, ViolationKind};
