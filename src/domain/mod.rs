//! Domain types for the content corpus.
//!
//! This module contains the content schema:
//! - EducationalContent: one entry with up to five levels
//! - LevelContent: what is authored at a single complexity level
//! - LocalizedText: bilingual English/Spanish strings
//! - ProcedureSummary: compact specialty-database records
//! - Closed vocabularies (content type, status, relevance, ...)

pub mod dates;
pub mod entry;
pub mod level;
pub mod lists;
pub mod procedure;
pub mod text;
pub mod vocab;

// Re-export commonly used types
pub use entry::{Citation, ContentTags, CrossReference, EducationalContent, ExamRelevance, Media};
pub use level::{ComplexityLevel, KeyTerm, LevelContent, LevelOutOfRange};
pub use procedure::ProcedureSummary;
pub use text::LocalizedText;
pub use vocab::{
    CitationKind, ClinicalRelevance, ContentCategory, ContentType, Language, MediaKind,
    Relationship, Status, SurgicalCategory, UnknownVariant,
};
