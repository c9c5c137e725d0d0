//! Non-fatal content quality checks.
//!
//! A schema-valid entry can still be unfinished: untranslated, missing
//! levels, or carrying authoring markers. Lint findings are warnings; they
//! only fail `validate --strict`.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::domain::{ComplexityLevel, EducationalContent, LocalizedText};

/// Prefix marking an ICD-11 code inside `tags.systems`
pub const ICD11_PREFIX: &str = "ICD-11:";

const PLACEHOLDER_MARKERS: [&str; 2] = ["TODO", "FIXME"];

/// Letter, one or two digits, optional dot, up to three digits
const ICD11_PATTERN: &str = r"^[A-Z][0-9]{1,2}\.?[0-9]{0,3}$";

static ICD11_REGEX: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();

/// What a lint warning is about
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LintKind {
    MissingSpanish,
    MissingLevels { levels: Vec<u8> },
    NoKeyTerms,
    Placeholder { marker: String },
    SuspiciousIcdCode { code: String },
    UpdatedBeforeCreated,
}

/// A single lint finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintWarning {
    pub entry_id: String,
    pub path: String,
    #[serde(flatten)]
    pub kind: LintKind,
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: ", self.entry_id, self.path)?;
        match &self.kind {
            LintKind::MissingSpanish => write!(f, "no Spanish text"),
            LintKind::MissingLevels { levels } => {
                let levels: Vec<String> = levels.iter().map(u8::to_string).collect();
                write!(f, "levels not authored: {}", levels.join(", "))
            }
            LintKind::NoKeyTerms => write!(f, "level has no key terms"),
            LintKind::Placeholder { marker } => write!(f, "contains placeholder '{}'", marker),
            LintKind::SuspiciousIcdCode { code } => {
                write!(f, "'{}' does not look like an ICD-11 code", code)
            }
            LintKind::UpdatedBeforeCreated => write!(f, "updatedAt is earlier than createdAt"),
        }
    }
}

/// Run every quality check against a validated entry
pub fn lint_entry(entry: &EducationalContent) -> Vec<LintWarning> {
    let mut lint = Lint {
        entry_id: &entry.id,
        warnings: Vec::new(),
    };

    if !entry.name.has_spanish() {
        lint.warn("name", LintKind::MissingSpanish);
    }
    lint.text("name", &entry.name);

    let missing = entry.missing_levels();
    if !missing.is_empty() {
        lint.warn(
            "levels",
            LintKind::MissingLevels {
                levels: missing.iter().map(|level| level.get()).collect(),
            },
        );
    }

    for (level, content) in &entry.levels {
        let path = format!("levels.{}", level);
        if content.key_terms.is_empty() {
            lint.warn(format!("{}.keyTerms", path), LintKind::NoKeyTerms);
        }
        for (field, text) in [("summary", &content.summary), ("explanation", &content.explanation)] {
            let field_path = format!("{}.{}", path, field);
            if !text.has_spanish() {
                lint.warn(field_path.clone(), LintKind::MissingSpanish);
            }
            lint.text(&field_path, text);
        }
        if let Some(notes) = &content.clinical_notes {
            lint.text(&format!("{}.clinicalNotes", path), notes);
        }
        for (index, term) in content.key_terms.iter().enumerate() {
            lint.text(&format!("{}.keyTerms[{}].term", path, index), &term.term);
            lint.text(
                &format!("{}.keyTerms[{}].definition", path, index),
                &term.definition,
            );
        }
    }

    for (index, system) in entry.tags.systems.iter().enumerate() {
        if let Some(code) = system.strip_prefix(ICD11_PREFIX) {
            let code = code.trim();
            if !looks_like_icd11(code) {
                lint.warn(
                    format!("tags.systems[{}]", index),
                    LintKind::SuspiciousIcdCode {
                        code: code.to_string(),
                    },
                );
            }
        }
    }

    if entry.updated_at < entry.created_at {
        lint.warn("updatedAt", LintKind::UpdatedBeforeCreated);
    }

    lint.warnings
}

struct Lint<'a> {
    entry_id: &'a str,
    warnings: Vec<LintWarning>,
}

impl Lint<'_> {
    fn warn(&mut self, path: impl Into<String>, kind: LintKind) {
        self.warnings.push(LintWarning {
            entry_id: self.entry_id.to_string(),
            path: path.into(),
            kind,
        });
    }

    fn text(&mut self, path: &str, text: &LocalizedText) {
        if let Some(marker) = text.variants().find_map(placeholder_marker) {
            self.warn(path, LintKind::Placeholder { marker });
        }
    }
}

/// First authoring marker in `text`, matched on whole words
fn placeholder_marker(text: &str) -> Option<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .find(|word| {
            PLACEHOLDER_MARKERS.contains(word) || word.eq_ignore_ascii_case("placeholder")
        })
        .map(str::to_string)
}

fn looks_like_icd11(code: &str) -> bool {
    ICD11_REGEX
        .get_or_init(|| Regex::new(ICD11_PATTERN))
        .as_ref()
        .is_ok_and(|re| re.is_match(code))
}

/// Whether every level from 1 to 5 is authored
pub fn is_fully_leveled(entry: &EducationalContent) -> bool {
    ComplexityLevel::ALL
        .iter()
        .all(|level| entry.levels.contains_key(level))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    #[test]
    fn test_icd11_shape() {
        assert!(looks_like_icd11("N17"));
        assert!(looks_like_icd11("N17.9"));
        assert!(looks_like_icd11("C4"));
        assert!(looks_like_icd11("E119"));
        assert!(looks_like_icd11("A0012"));
        assert!(looks_like_icd11("N123"));
        assert!(!looks_like_icd11("n17"));
        assert!(!looks_like_icd11("N"));
        assert!(!looks_like_icd11("N17.1234"));
        assert!(!looks_like_icd11("N1234567"));
        assert!(!looks_like_icd11("kidney"));
    }

    #[test]
    fn test_placeholder_matches_whole_words() {
        assert_eq!(placeholder_marker("TODO: write this"), Some("TODO".to_string()));
        assert_eq!(placeholder_marker("a Placeholder text"), Some("Placeholder".to_string()));
        assert_eq!(placeholder_marker("TODOS los pacientes"), None);
        assert_eq!(placeholder_marker("Complete explanation."), None);
    }

    #[test]
    fn test_authored_content_is_clean_of_markers() {
        for entry in content::entries() {
            let placeholders: Vec<_> = lint_entry(&entry)
                .into_iter()
                .filter(|w| matches!(w.kind, LintKind::Placeholder { .. }))
                .collect();
            assert!(placeholders.is_empty(), "{:?}", placeholders);
        }
    }

    #[test]
    fn test_lint_flags_unfinished_entry() {
        let mut entry = content::nephrology::chronic_kidney_disease();
        entry.name = LocalizedText::en("Chronic Kidney Disease");
        entry.tags.systems.push("ICD-11:kidney".to_string());
        if let Some(level) = entry.levels.values_mut().next() {
            level.summary = LocalizedText::en("TODO summary");
            level.key_terms.clear();
        }
        entry.updated_at = entry.created_at.pred_opt().unwrap();

        let warnings = lint_entry(&entry);
        let kinds: Vec<_> = warnings.iter().map(|w| &w.kind).collect();

        assert!(kinds.contains(&&LintKind::MissingSpanish));
        assert!(kinds.contains(&&LintKind::NoKeyTerms));
        assert!(kinds.contains(&&LintKind::UpdatedBeforeCreated));
        assert!(kinds.contains(&&LintKind::SuspiciousIcdCode {
            code: "kidney".to_string()
        }));
        assert!(warnings
            .iter()
            .any(|w| w.path == "levels.1.summary"
                && w.kind == LintKind::Placeholder { marker: "TODO".to_string() }));
        assert!(!is_fully_leveled(&entry));
    }

    #[test]
    fn test_untranslated_level_text_is_flagged() {
        let mut entry = content::nephrology::acute_kidney_injury();
        if let Some(level) = entry.levels.get_mut(&ComplexityLevel::L4) {
            level.explanation = LocalizedText::en("Staged by KDIGO criteria.");
        }

        let paths: Vec<_> = lint_entry(&entry)
            .into_iter()
            .filter(|w| w.kind == LintKind::MissingSpanish)
            .map(|w| w.path)
            .collect();

        assert_eq!(paths, vec!["levels.4.explanation"]);
    }

    #[test]
    fn test_authored_content_is_translated() {
        for entry in content::entries() {
            assert!(
                lint_entry(&entry).iter().all(|w| w.kind != LintKind::MissingSpanish),
                "{}",
                entry.id
            );
        }
    }

    #[test]
    fn test_missing_levels_listed() {
        let entry = content::nephrology::chronic_kidney_disease();
        let warning = lint_entry(&entry)
            .into_iter()
            .find(|w| matches!(w.kind, LintKind::MissingLevels { .. }))
            .unwrap();

        assert_eq!(warning.to_string(), "condition-chronic-kidney-disease levels: levels not authored: 4, 5");
    }
}
