//! Closed vocabularies used by content entries.
//!
//! Every enum here serializes to the kebab/lowercase strings used in the
//! authored content files and rejects anything else when parsed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A string that is not a member of a closed vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        pub enum $name:ident as $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $text)] $variant, )+
        }

        impl $name {
            /// Every member, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Human-readable vocabulary name used in error messages
            pub const KIND: &'static str = $kind;

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    _ => Err(UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                        expected: Self::ALL
                            .iter()
                            .map(|v| v.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    }),
                }
            }
        }
    };
}

vocabulary! {
    /// What kind of thing an entry describes
    pub enum ContentType as "content type" {
        Structure => "structure",
        System => "system",
        Pathway => "pathway",
        Process => "process",
        Condition => "condition",
        Concept => "concept",
        Topic => "topic",
        Procedure => "procedure",
    }
}

vocabulary! {
    /// Editorial grouping of an entry
    pub enum ContentCategory as "content category" {
        PrimaryCare => "primary-care",
        Surgical => "surgical",
        Medical => "medical",
        WomensReproductive => "womens-reproductive",
        MentalHealth => "mental-health",
        Diagnostic => "diagnostic",
        Other => "other",
    }
}

vocabulary! {
    /// Publication status of an entry
    pub enum Status as "status" {
        Draft => "draft",
        Review => "review",
        Published => "published",
    }
}

vocabulary! {
    /// How important an entry is in clinical practice, ordered low to critical
    pub enum ClinicalRelevance as "clinical relevance" {
        Low => "low",
        Medium => "medium",
        High => "high",
        Critical => "critical",
    }
}

vocabulary! {
    /// Edge label of a cross-reference
    pub enum Relationship as "relationship" {
        Parent => "parent",
        Child => "child",
        Sibling => "sibling",
        Related => "related",
        SeeAlso => "see-also",
        Prerequisite => "prerequisite",
    }
}

vocabulary! {
    pub enum MediaKind as "media type" {
        Image => "image",
        Diagram => "diagram",
        Video => "video",
        Animation => "animation",
        Histology => "histology",
        Audio => "audio",
    }
}

vocabulary! {
    pub enum CitationKind as "citation type" {
        Textbook => "textbook",
        Article => "article",
        Journal => "journal",
        Guideline => "guideline",
        Website => "website",
        Database => "database",
    }
}

vocabulary! {
    /// Plastic surgery subspecialty of a procedure summary
    pub enum SurgicalCategory as "surgical category" {
        Reconstructive => "reconstructive",
        HandSurgery => "hand-surgery",
        Craniofacial => "craniofacial",
        Burn => "burn",
        Microsurgery => "microsurgery",
        Cosmetic => "cosmetic",
        WoundManagement => "wound-management",
        PediatricPlastic => "pediatric-plastic",
    }
}

vocabulary! {
    /// Language of a localized string
    pub enum Language as "language" {
        En => "en",
        Es => "es",
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::En
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_str() {
        for relationship in Relationship::ALL {
            let parsed: Relationship = relationship.as_str().parse().unwrap();
            assert_eq!(&parsed, relationship);
        }
        assert_eq!("see-also".parse::<Relationship>().unwrap(), Relationship::SeeAlso);
    }

    #[test]
    fn test_unknown_value_is_rejected() {
        let err = "archived".parse::<Status>().unwrap_err();
        assert_eq!(err.kind, "status");
        assert_eq!(err.value, "archived");
        assert_eq!(err.expected, "draft, review, published");
    }

    #[test]
    fn test_parsing_is_case_sensitive() {
        assert!("Published".parse::<Status>().is_err());
        assert!("HIGH".parse::<ClinicalRelevance>().is_err());
    }

    #[test]
    fn test_clinical_relevance_ordering() {
        assert!(ClinicalRelevance::Low < ClinicalRelevance::Medium);
        assert!(ClinicalRelevance::High < ClinicalRelevance::Critical);
    }

    #[test]
    fn test_serde_uses_authored_names() {
        let json = serde_json::to_string(&ContentCategory::WomensReproductive).unwrap();
        assert_eq!(json, "\"womens-reproductive\"");

        let parsed: SurgicalCategory = serde_json::from_str("\"hand-surgery\"").unwrap();
        assert_eq!(parsed, SurgicalCategory::HandSurgery);

        assert!(serde_json::from_str::<ContentType>("\"disease\"").is_err());
    }
}
