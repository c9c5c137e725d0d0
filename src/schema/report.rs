//! Aggregated validation results for tooling.

use std::fmt;

use serde::Serialize;

use super::lint::{lint_entry, LintWarning};
use crate::corpus::{Corpus, DanglingReference};
use crate::domain::EducationalContent;

/// A fatal problem tied to one source (file path or entry id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceError {
    pub source: String,
    pub message: String,
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.source, self.message)
    }
}

/// Everything a validation pass found
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    /// Entries that passed schema validation
    pub valid: usize,
    pub errors: Vec<SourceError>,
    pub warnings: Vec<LintWarning>,
    pub dangling: Vec<DanglingReference>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a valid entry and lint it
    pub fn record_entry(&mut self, entry: &EducationalContent) {
        self.valid += 1;
        self.warnings.extend(lint_entry(entry));
    }

    pub fn record_error(&mut self, source: impl Into<String>, error: impl fmt::Display) {
        self.errors.push(SourceError {
            source: source.into(),
            message: error.to_string(),
        });
    }

    /// Record the dangling references of a built corpus
    pub fn record_corpus(&mut self, corpus: &Corpus) {
        self.dangling.extend(corpus.find_dangling_references());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Errors always fail; warnings fail only in strict mode.
    /// Dangling references never fail.
    pub fn passed(&self, strict: bool) -> bool {
        !self.has_errors() && !(strict && !self.warnings.is_empty())
    }
}
