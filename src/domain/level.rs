//! Complexity levels and the content authored at each one.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::text::LocalizedText;

/// A level number outside the fixed 1..=5 range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("complexity level {0} is outside 1..=5")]
pub struct LevelOutOfRange(pub u64);

/// One of five ordinal complexity tiers.
///
/// Level 1 targets an 8th-grade reader, level 5 a practicing physician.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u8")]
pub struct ComplexityLevel(u8);

impl ComplexityLevel {
    pub const L1: Self = Self(1);
    pub const L2: Self = Self(2);
    pub const L3: Self = Self(3);
    pub const L4: Self = Self(4);
    pub const L5: Self = Self(5);

    /// All levels, lowest first
    pub const ALL: [Self; 5] = [Self::L1, Self::L2, Self::L3, Self::L4, Self::L5];

    pub fn new(level: u64) -> Option<Self> {
        match level {
            1..=5 => Some(Self(level as u8)),
            _ => None,
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Intended audience of this level
    pub fn audience(self) -> &'static str {
        match self.0 {
            1 => "8th grade",
            2 => "High school",
            3 => "Undergraduate",
            4 => "Medical student",
            _ => "MD/Professional",
        }
    }

    /// The next lower level, if any
    pub fn below(self) -> Option<Self> {
        Self::new(u64::from(self.0) - 1)
    }
}

impl TryFrom<u64> for ComplexityLevel {
    type Error = LevelOutOfRange;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(LevelOutOfRange(value))
    }
}

impl From<ComplexityLevel> for u8 {
    fn from(level: ComplexityLevel) -> Self {
        level.0
    }
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ComplexityLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let value: u64 = s
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid complexity level: {}", s))?;
        Ok(Self::try_from(value)?)
    }
}

/// A glossary term introduced at a level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyTerm {
    pub term: LocalizedText,
    pub definition: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
}

/// Content authored for a single complexity level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelContent {
    /// Must equal the key this content is stored under
    pub level: ComplexityLevel,

    pub summary: LocalizedText,

    /// Long-form body, Markdown-like
    pub explanation: LocalizedText,

    #[serde(default, deserialize_with = "super::lists::null_as_empty")]
    pub key_terms: Vec<KeyTerm>,

    #[serde(default, deserialize_with = "super::lists::null_as_empty")]
    pub analogies: Vec<LocalizedText>,

    #[serde(default, deserialize_with = "super::lists::null_as_empty")]
    pub examples: Vec<LocalizedText>,

    /// Usually present on the lower, patient-facing levels
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "super::lists::null_as_empty"
    )]
    pub patient_counseling_points: Vec<LocalizedText>,

    /// Usually present on the higher, clinician-facing levels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinical_notes: Option<LocalizedText>,
}

impl LevelContent {
    pub fn new(level: ComplexityLevel, summary: LocalizedText, explanation: LocalizedText) -> Self {
        Self {
            level,
            summary,
            explanation,
            key_terms: Vec::new(),
            analogies: Vec::new(),
            examples: Vec::new(),
            patient_counseling_points: Vec::new(),
            clinical_notes: None,
        }
    }
}
