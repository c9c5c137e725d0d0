//! medcorpus - bilingual medical education content corpus
//!
//! Strongly-typed Spanish/English medical education material: conditions,
//! procedures and topics, each authored at up to five complexity levels
//! (1 = 8th grade through 5 = practicing physician).
//!
//! # Architecture
//!
//! Entries are immutable values gathered into a corpus:
//! - Untyped input is validated into typed entries, every violation reported at once
//! - A corpus rejects duplicate ids and reports dangling cross-references
//! - Lookups return `Option`; search is a case-insensitive substring scan
//! - A shared handle swaps in rebuilt corpora without disturbing readers
//!
//! # Modules
//!
//! - `domain`: Content schema (EducationalContent, LevelContent, LocalizedText)
//! - `schema`: Validation and lint of untyped content
//! - `corpus`: Corpus construction, lookup, filtering and search
//! - `content`: Authored entries and the procedure database
//! - `loader`: JSON/YAML content files on disk
//! - `watch`: Hot reload of a content directory
//! - `config`: Configuration discovery
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Validate a content directory
//! medcorpus validate --dir content/ --strict
//!
//! # Search the built-in corpus
//! medcorpus search kidney
//!
//! # Read one level in Spanish
//! medcorpus show condition-stroke --level 2 --lang es
//! ```

pub mod cli;
pub mod config;
pub mod content;
pub mod corpus;
pub mod domain;
pub mod loader;
pub mod schema;
pub mod watch;

// Re-export main types at crate root for convenience
pub use corpus::{CategoryField, Corpus, CorpusEntry, DanglingReference, DuplicateIdError, SharedCorpus};
pub use domain::{ComplexityLevel, EducationalContent, Language, LevelContent, LocalizedText, ProcedureSummary};
pub use loader::{load_dir, ContentFormat, LoadError, LoadOutcome};
pub use schema::{lint_entry, validate_entry, SchemaError, ValidationReport, Violation, ViolationKind};
pub use watch::{ContentWatcher, ReloadOutcome, WatcherConfig};
