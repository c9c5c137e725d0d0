//! The `EducationalContent` entry and its nested records.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::level::{ComplexityLevel, LevelContent};
use super::text::LocalizedText;
use super::vocab::{
    CitationKind, ClinicalRelevance, ContentCategory, ContentType, MediaKind, Relationship, Status,
};

/// One self-contained educational record: a disease, procedure or topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationalContent {
    /// Corpus-wide unique identifier, target of cross-references
    pub id: String,

    #[serde(rename = "type")]
    pub content_type: ContentType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ContentCategory>,

    pub name: LocalizedText,

    /// Synonyms and abbreviations, used for search
    #[serde(default, deserialize_with = "super::lists::null_as_empty")]
    pub alternate_names: Vec<String>,

    /// Authored levels; keys always equal the value's `level`
    pub levels: BTreeMap<ComplexityLevel, LevelContent>,

    #[serde(default, deserialize_with = "super::lists::null_as_empty")]
    pub media: Vec<Media>,

    #[serde(default, deserialize_with = "super::lists::null_as_empty")]
    pub citations: Vec<Citation>,

    #[serde(default, deserialize_with = "super::lists::null_as_empty")]
    pub cross_references: Vec<CrossReference>,

    pub tags: ContentTags,

    #[serde(with = "super::dates")]
    pub created_at: NaiveDate,

    #[serde(with = "super::dates")]
    pub updated_at: NaiveDate,

    /// Bumped on every re-authoring, starts at 1
    pub version: u32,

    pub status: Status,

    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "super::lists::null_as_empty"
    )]
    pub contributors: Vec<String>,
}

impl EducationalContent {
    /// Content authored at `level`, or `None` when that level was not written.
    ///
    /// Never substitutes a different level.
    pub fn level(&self, level: ComplexityLevel) -> Option<&LevelContent> {
        self.levels.get(&level)
    }

    /// Closest authored level at or below `level`.
    ///
    /// A fallback policy for callers that want one; `level` does not apply it.
    pub fn nearest_level_at_or_below(&self, level: ComplexityLevel) -> Option<&LevelContent> {
        self.levels.range(..=level).next_back().map(|(_, content)| content)
    }

    /// Levels that have content, lowest first
    pub fn authored_levels(&self) -> impl Iterator<Item = ComplexityLevel> + '_ {
        self.levels.keys().copied()
    }

    /// Levels in 1..=5 with no content
    pub fn missing_levels(&self) -> Vec<ComplexityLevel> {
        ComplexityLevel::ALL
            .into_iter()
            .filter(|level| !self.levels.contains_key(level))
            .collect()
    }
}

/// A media asset attached to an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub filename: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A source reference.
///
/// `license` is carried verbatim ("CC BY 4.0", "Proprietary", ...) and never
/// interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: CitationKind,
    pub title: String,
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "super::lists::null_as_empty"
    )]
    pub authors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

/// A soft link to another entry. The target may not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossReference {
    pub target_id: String,
    pub target_type: ContentType,
    pub relationship: Relationship,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTags {
    /// Body or domain systems ("renal", "nervous", ...)
    pub systems: Vec<String>,

    pub topics: Vec<String>,

    /// Extra search terms
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "super::lists::null_as_empty"
    )]
    pub keywords: Vec<String>,

    pub clinical_relevance: ClinicalRelevance,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_relevance: Option<ExamRelevance>,
}

/// Board-exam applicability
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamRelevance {
    #[serde(default)]
    pub usmle: bool,
    #[serde(default)]
    pub nbme: bool,
    /// Applicable shelf exams ("surgery", "pediatrics", ...)
    #[serde(default, deserialize_with = "super::lists::null_as_empty")]
    pub shelf: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_with_levels(levels: &[ComplexityLevel]) -> EducationalContent {
        EducationalContent {
            id: "condition-test".to_string(),
            content_type: ContentType::Condition,
            category: None,
            name: LocalizedText::en("Test"),
            alternate_names: Vec::new(),
            levels: levels
                .iter()
                .map(|&level| {
                    (
                        level,
                        LevelContent::new(
                            level,
                            LocalizedText::en(format!("summary {}", level)),
                            LocalizedText::en("explanation"),
                        ),
                    )
                })
                .collect(),
            media: Vec::new(),
            citations: Vec::new(),
            cross_references: Vec::new(),
            tags: ContentTags {
                systems: vec!["renal".to_string()],
                topics: vec!["nephrology".to_string()],
                keywords: Vec::new(),
                clinical_relevance: ClinicalRelevance::High,
                exam_relevance: None,
            },
            created_at: NaiveDate::from_ymd_opt(2026, 2, 5).unwrap(),
            updated_at: NaiveDate::from_ymd_opt(2026, 2, 5).unwrap(),
            version: 1,
            status: Status::Published,
            contributors: Vec::new(),
        }
    }

    #[test]
    fn test_missing_level_is_explicit() {
        let entry = entry_with_levels(&[ComplexityLevel::L1, ComplexityLevel::L3]);

        assert!(entry.level(ComplexityLevel::L1).is_some());
        assert!(entry.level(ComplexityLevel::L2).is_none());
        assert_eq!(
            entry.missing_levels(),
            vec![ComplexityLevel::L2, ComplexityLevel::L4, ComplexityLevel::L5]
        );
    }

    #[test]
    fn test_nearest_level_fallback() {
        let entry = entry_with_levels(&[ComplexityLevel::L1, ComplexityLevel::L3]);

        let nearest = entry.nearest_level_at_or_below(ComplexityLevel::L5).unwrap();
        assert_eq!(nearest.level, ComplexityLevel::L3);

        let nearest = entry.nearest_level_at_or_below(ComplexityLevel::L2).unwrap();
        assert_eq!(nearest.level, ComplexityLevel::L1);

        let entry = entry_with_levels(&[ComplexityLevel::L4]);
        assert!(entry.nearest_level_at_or_below(ComplexityLevel::L3).is_none());
    }

    #[test]
    fn test_levels_serialize_with_string_keys() {
        let entry = entry_with_levels(&[ComplexityLevel::L2]);
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["levels"]["2"]["level"], 2);
        assert_eq!(value["type"], "condition");
        assert_eq!(value["createdAt"], "2026-02-05");
        assert!(value.get("category").is_none());

        let parsed: EducationalContent = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, entry);
    }
}
