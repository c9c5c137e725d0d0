//! Compact procedure summaries used by specialty databases.

use serde::{Deserialize, Serialize};

use super::text::LocalizedText;
use super::vocab::SurgicalCategory;

/// A single surgical procedure, summarized for quick reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcedureSummary {
    pub id: String,
    pub name: LocalizedText,
    pub category: SurgicalCategory,
    pub description: String,
    pub indications: Vec<String>,
    pub technique: Vec<String>,
    pub complications: Vec<String>,
    pub recovery: String,
    /// The one thing to remember about this procedure
    pub key_pearl: String,
}
