//! Authored content shipped with the crate.
//!
//! Every entry is an explicit constructor function; each topic module
//! exposes `entries()` over the constructors it curates. Nothing registers
//! itself: adding an entry means adding it to its module's list.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::corpus::{Corpus, DuplicateIdError};
use crate::domain::{
    Citation, CitationKind, ComplexityLevel, ContentType, CrossReference, EducationalContent,
    KeyTerm, LevelContent, LocalizedText, ProcedureSummary, Relationship,
};

pub mod dermatology;
pub mod nephrology;
pub mod neurology;
pub mod plastic_surgery;

/// Contributor credited on the authored entries
pub const CONTENT_TEAM: &str = "SOMA AI Content Team";

/// Every authored educational entry, grouped by specialty
pub fn entries() -> Vec<EducationalContent> {
    let mut all = nephrology::entries();
    all.extend(dermatology::entries());
    all.extend(neurology::entries());
    all
}

/// The built-in corpus of educational entries
pub fn corpus() -> Result<Corpus, DuplicateIdError> {
    Corpus::build(entries())
}

/// The built-in plastic-surgery procedure database
pub fn procedure_corpus() -> Result<Corpus<ProcedureSummary>, DuplicateIdError> {
    Corpus::build(plastic_surgery::procedures())
}

fn text(es: &str, en: &str) -> LocalizedText {
    LocalizedText::new(es, en)
}

fn texts(pairs: &[(&str, &str)]) -> Vec<LocalizedText> {
    pairs.iter().map(|(es, en)| text(es, en)).collect()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn term(term: (&str, &str), definition: (&str, &str)) -> KeyTerm {
    KeyTerm {
        term: text(term.0, term.1),
        definition: text(definition.0, definition.1),
        pronunciation: None,
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Key each level by its own `level` field
fn levels(items: impl IntoIterator<Item = LevelContent>) -> BTreeMap<ComplexityLevel, LevelContent> {
    items.into_iter().map(|content| (content.level, content)).collect()
}

fn level(level: ComplexityLevel, summary: (&str, &str), explanation: (&str, &str)) -> LevelContent {
    LevelContent::new(
        level,
        text(summary.0, summary.1),
        text(explanation.0, explanation.1),
    )
}

fn related(target_id: &str, target_type: ContentType, relationship: Relationship, label: &str) -> CrossReference {
    CrossReference {
        target_id: target_id.to_string(),
        target_type,
        relationship,
        label: label.to_string(),
    }
}

fn citation(id: &str, kind: CitationKind, title: &str, authors: &[&str], source: &str) -> Citation {
    Citation {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        authors: strings(authors),
        source: Some(source.to_string()),
        url: None,
        license: Some("CC BY 4.0".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::validate_entry;

    #[test]
    fn test_authored_entries_build_a_corpus() {
        let corpus = corpus().unwrap();
        assert_eq!(corpus.count(), entries().len());
        assert!(procedure_corpus().unwrap().count() >= 8);
    }

    #[test]
    fn test_level_keys_match_values() {
        for entry in entries() {
            for (key, content) in &entry.levels {
                assert_eq!(*key, content.level, "{}", entry.id);
            }
        }
    }

    #[test]
    fn test_authored_entries_survive_validation() {
        for entry in entries() {
            let raw = serde_json::to_value(&entry).unwrap();
            let validated = validate_entry(&raw).unwrap_or_else(|e| panic!("{}", e));
            assert_eq!(validated, entry);
        }
    }

    #[test]
    fn test_every_entry_is_bilingual() {
        for entry in entries() {
            assert!(entry.name.has_spanish(), "{}", entry.id);
            for content in entry.levels.values() {
                assert!(content.summary.has_spanish(), "{} level {}", entry.id, content.level);
            }
        }
    }
}
