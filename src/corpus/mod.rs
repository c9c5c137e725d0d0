//! In-memory corpus of content entries.
//!
//! A corpus is built once from a list of entries and is immutable
//! afterwards. Entries are shared (`Arc`) so index modules and corpora can
//! hold the same values without copying them.
//!
//! - `Corpus::build` rejects duplicate ids
//! - dangling cross-references are reported, never fatal
//! - lookups return `Option`, searches return insertion-ordered lists

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::domain::{CrossReference, EducationalContent, ProcedureSummary};

pub mod search;
pub mod shared;

pub use search::search;
pub use shared::SharedCorpus;

/// Two entries in one corpus share an id
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicate content id: {id}")]
pub struct DuplicateIdError {
    pub id: String,
}

/// A cross-reference whose target is not in the corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingReference {
    pub from_id: String,
    pub target_id: String,
}

impl fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} (not found)", self.from_id, self.target_id)
    }
}

/// Enumerable fields an entry can be filtered on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryField {
    /// Any of the fields below
    Any,
    Type,
    Category,
    System,
    Topic,
    ClinicalRelevance,
    Status,
    Shelf,
}

impl FromStr for CategoryField {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "any" => Ok(Self::Any),
            "type" => Ok(Self::Type),
            "category" => Ok(Self::Category),
            "system" | "systems" => Ok(Self::System),
            "topic" | "topics" => Ok(Self::Topic),
            "relevance" | "clinical-relevance" => Ok(Self::ClinicalRelevance),
            "status" => Ok(Self::Status),
            "shelf" => Ok(Self::Shelf),
            _ => anyhow::bail!("Unknown category field: {}", s),
        }
    }
}

/// What the corpus needs to know about an entry type
pub trait CorpusEntry {
    /// Corpus-wide unique id
    fn id(&self) -> &str;

    /// Values of one enumerable field
    fn category_values(&self, field: CategoryField) -> Vec<&str>;

    /// Every text field that free-text search looks at
    fn search_text(&self) -> Vec<&str>;

    fn cross_references(&self) -> &[CrossReference] {
        &[]
    }
}

fn as_strs(values: &[String]) -> Vec<&str> {
    values.iter().map(String::as_str).collect()
}

impl CorpusEntry for EducationalContent {
    fn id(&self) -> &str {
        &self.id
    }

    fn category_values(&self, field: CategoryField) -> Vec<&str> {
        match field {
            CategoryField::Type => vec![self.content_type.as_str()],
            CategoryField::Category => self.category.iter().map(|c| c.as_str()).collect(),
            CategoryField::System => as_strs(&self.tags.systems),
            CategoryField::Topic => as_strs(&self.tags.topics),
            CategoryField::ClinicalRelevance => vec![self.tags.clinical_relevance.as_str()],
            CategoryField::Status => vec![self.status.as_str()],
            CategoryField::Shelf => self
                .tags
                .exam_relevance
                .iter()
                .flat_map(|exam| exam.shelf.iter().map(String::as_str))
                .collect(),
            CategoryField::Any => [
                CategoryField::Type,
                CategoryField::Category,
                CategoryField::System,
                CategoryField::Topic,
                CategoryField::ClinicalRelevance,
                CategoryField::Status,
                CategoryField::Shelf,
            ]
            .into_iter()
            .flat_map(|field| self.category_values(field))
            .collect(),
        }
    }

    fn search_text(&self) -> Vec<&str> {
        let mut text: Vec<&str> = self.name.variants().collect();
        text.extend(self.alternate_names.iter().map(String::as_str));
        text.push(self.content_type.as_str());
        text.extend(self.category.iter().map(|c| c.as_str()));
        text.extend(self.tags.systems.iter().map(String::as_str));
        text.extend(self.tags.topics.iter().map(String::as_str));
        text.extend(self.tags.keywords.iter().map(String::as_str));

        for level in self.levels.values() {
            text.extend(level.summary.variants());
            for term in &level.key_terms {
                text.extend(term.term.variants());
                text.extend(term.definition.variants());
            }
        }

        text
    }

    fn cross_references(&self) -> &[CrossReference] {
        &self.cross_references
    }
}

impl CorpusEntry for ProcedureSummary {
    fn id(&self) -> &str {
        &self.id
    }

    fn category_values(&self, field: CategoryField) -> Vec<&str> {
        match field {
            CategoryField::Type => vec!["procedure"],
            CategoryField::Category => vec![self.category.as_str()],
            CategoryField::Any => vec!["procedure", self.category.as_str()],
            _ => Vec::new(),
        }
    }

    fn search_text(&self) -> Vec<&str> {
        let mut text: Vec<&str> = self.name.variants().collect();
        text.push(&self.description);
        text.push(self.category.as_str());
        text.extend(self.indications.iter().map(String::as_str));
        text.extend(self.technique.iter().map(String::as_str));
        text.push(&self.key_pearl);
        text
    }
}

/// Immutable, de-duplicated collection of entries addressable by id
#[derive(Debug)]
pub struct Corpus<E = EducationalContent> {
    /// Entries in insertion order
    entries: Vec<Arc<E>>,

    /// id -> position in `entries`
    index: HashMap<String, usize>,
}

impl<E> Clone for Corpus<E> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            index: self.index.clone(),
        }
    }
}

impl<E> Default for Corpus<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<E: CorpusEntry> Corpus<E> {
    /// Build a corpus, failing on the first repeated id
    pub fn build(entries: impl IntoIterator<Item = E>) -> Result<Self, DuplicateIdError> {
        Self::build_shared(entries.into_iter().map(Arc::new))
    }

    /// Build a corpus from entries already shared elsewhere
    pub fn build_shared(
        entries: impl IntoIterator<Item = Arc<E>>,
    ) -> Result<Self, DuplicateIdError> {
        let mut corpus = Self::default();

        for entry in entries {
            let id = entry.id().to_string();

            if corpus.index.contains_key(&id) {
                return Err(DuplicateIdError { id });
            }

            corpus.index.insert(id, corpus.entries.len());
            corpus.entries.push(entry);
        }

        tracing::debug!("Built corpus with {} entries", corpus.entries.len());
        Ok(corpus)
    }

    /// Look up an entry by id
    pub fn get(&self, id: &str) -> Option<&Arc<E>> {
        self.index.get(id).map(|&position| &self.entries[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Number of entries
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<E>> {
        self.entries.iter()
    }

    /// Ids in insertion order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.id())
    }

    /// Entries whose `field` has exactly `value`, in insertion order
    pub fn list_by_category(&self, field: CategoryField, value: &str) -> Vec<&Arc<E>> {
        self.filter(|entry| entry.category_values(field).contains(&value))
    }

    /// Entries matching an arbitrary predicate, in insertion order
    pub fn filter(&self, predicate: impl Fn(&E) -> bool) -> Vec<&Arc<E>> {
        self.entries
            .iter()
            .filter(|entry| predicate(entry.as_ref()))
            .collect()
    }

    /// Case-insensitive substring search, see [`search::search`]
    pub fn search(&self, query: &str) -> Vec<&Arc<E>> {
        search::search(self, query)
    }

    /// Cross-references whose target id is not in this corpus
    pub fn find_dangling_references(&self) -> Vec<DanglingReference> {
        self.entries
            .iter()
            .flat_map(|entry| {
                entry
                    .cross_references()
                    .iter()
                    .filter(move |reference| !self.contains(&reference.target_id))
                    .map(move |reference| DanglingReference {
                        from_id: entry.id().to_string(),
                        target_id: reference.target_id.clone(),
                    })
            })
            .collect()
    }
}
