//! Structural validation of untyped entries.
//!
//! `validate_entry` walks a `serde_json::Value` and records every problem
//! it finds before giving up, so authors get the complete list in one pass.
//! Only when the walk is clean is the value deserialized into an
//! [`EducationalContent`].

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::{
    dates, CitationKind, ClinicalRelevance, ComplexityLevel, ContentCategory, ContentType,
    EducationalContent, MediaKind, Relationship, Status, UnknownVariant,
};

/// What is wrong at a field path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViolationKind {
    #[error("required field is missing")]
    Missing,

    #[error("expected {expected}")]
    WrongType { expected: &'static str },

    #[error("must not be empty")]
    Empty,

    #[error("{0}")]
    UnknownValue(UnknownVariant),

    #[error("stored under level {key} but declares level {declared}")]
    LevelMismatch { key: u8, declared: u64 },

    #[error("level '{0}' is outside 1..=5")]
    LevelOutOfRange(String),

    #[error("version must be an integer >= 1, got {0}")]
    InvalidVersion(String),

    #[error("'{0}' is not a valid date")]
    InvalidDate(String),

    #[error("{0}")]
    Malformed(String),
}

/// A single schema violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Dotted path to the offending field, e.g. `levels.3.summary`
    pub path: String,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}

/// An entry failed validation; carries every violation found
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct SchemaError {
    /// The entry id, when one could be read
    pub id: Option<String>,
    pub violations: Vec<Violation>,
}

impl SchemaError {
    /// Paths of all violations, in discovery order
    pub fn paths(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.path.as_str()).collect()
    }

    /// True if any violation sits at `path`
    pub fn has_violation_at(&self, path: &str) -> bool {
        self.violations.iter().any(|v| v.path == path)
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let subject = self.id.as_deref().unwrap_or("<unknown id>");
        write!(
            f,
            "entry {} has {} schema violation(s)",
            subject,
            self.violations.len()
        )?;
        for violation in &self.violations {
            write!(f, "\n  - {}", violation)?;
        }
        Ok(())
    }
}

/// Validate an untyped entry and convert it to its typed form.
///
/// Checks required fields, field types, level key/value consistency, the
/// closed vocabularies, `version >= 1` and date formats. Cross-references
/// are not resolved here. Legacy input with a plain-string `name` plus a
/// `nameEs` field is merged into a bilingual name.
pub fn validate_entry(raw: &Value) -> Result<EducationalContent, SchemaError> {
    let Some(object) = raw.as_object() else {
        return Err(SchemaError {
            id: None,
            violations: vec![Violation {
                path: "$".to_string(),
                kind: ViolationKind::WrongType { expected: "object" },
            }],
        });
    };

    let normalized = merge_legacy_name(object);
    let id = normalized
        .get("id")
        .and_then(Value::as_str)
        .map(str::to_string);

    let mut validator = Validator::default();
    validator.entry(&normalized);

    if !validator.violations.is_empty() {
        return Err(SchemaError {
            id,
            violations: validator.violations,
        });
    }

    serde_json::from_value(Value::Object(normalized)).map_err(|e| SchemaError {
        id,
        violations: vec![Violation {
            path: "$".to_string(),
            kind: ViolationKind::Malformed(e.to_string()),
        }],
    })
}

/// Fold `{ name: "...", nameEs: "..." }` into `{ name: { en, es } }`
fn merge_legacy_name(object: &Map<String, Value>) -> Map<String, Value> {
    let mut normalized = object.clone();

    if let (Some(Value::String(en)), Some(Value::String(es))) =
        (object.get("name"), object.get("nameEs"))
    {
        let mut name = Map::new();
        name.insert("en".to_string(), Value::String(en.clone()));
        name.insert("es".to_string(), Value::String(es.clone()));
        normalized.insert("name".to_string(), Value::Object(name));
        normalized.remove("nameEs");
    }

    normalized
}

fn child(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

fn item(parent: &str, index: usize) -> String {
    format!("{}[{}]", parent, index)
}

/// Accumulates violations while walking an entry
#[derive(Default)]
struct Validator {
    violations: Vec<Violation>,
}

impl Validator {
    fn push(&mut self, path: impl Into<String>, kind: ViolationKind) {
        self.violations.push(Violation {
            path: path.into(),
            kind,
        });
    }

    fn entry(&mut self, object: &Map<String, Value>) {
        self.required_string(object, "", "id");
        self.required_vocab::<ContentType>(object, "", "type");
        self.optional_vocab::<ContentCategory>(object, "", "category");
        self.required_text(object, "", "name");
        self.optional_string_list(object, "", "alternateNames");
        self.levels(object.get("levels"));
        self.records(object, "media", Self::media);
        self.records(object, "citations", Self::citation);
        self.records(object, "crossReferences", Self::cross_reference);
        self.tags(object.get("tags"));
        self.date(object, "createdAt");
        self.date(object, "updatedAt");
        self.version(object.get("version"));
        self.required_vocab::<Status>(object, "", "status");
        self.optional_string_list(object, "", "contributors");
    }

    fn levels(&mut self, raw: Option<&Value>) {
        let map = match raw {
            None | Some(Value::Null) => return self.push("levels", ViolationKind::Missing),
            Some(Value::Object(map)) => map,
            Some(_) => {
                return self.push("levels", ViolationKind::WrongType { expected: "object" })
            }
        };

        for (key, value) in map {
            let path = child("levels", key);
            // "01" or "+1" would collapse onto level 1
            let key_level = key
                .parse::<u64>()
                .ok()
                .and_then(ComplexityLevel::new)
                .filter(|level| level.to_string() == *key);
            if key_level.is_none() {
                self.push(path.clone(), ViolationKind::LevelOutOfRange(key.clone()));
            }

            let Some(content) = value.as_object() else {
                self.push(path, ViolationKind::WrongType { expected: "object" });
                continue;
            };

            self.level_number(content, &path, key_level);
            self.required_text(content, &path, "summary");
            self.required_text(content, &path, "explanation");
            self.key_terms(content, &path);
            self.optional_text_list(content, &path, "analogies");
            self.optional_text_list(content, &path, "examples");
            self.optional_text_list(content, &path, "patientCounselingPoints");
            self.optional_text(content, &path, "clinicalNotes");
        }
    }

    fn level_number(
        &mut self,
        content: &Map<String, Value>,
        parent: &str,
        key_level: Option<ComplexityLevel>,
    ) {
        let path = child(parent, "level");
        match content.get("level") {
            None | Some(Value::Null) => self.push(path, ViolationKind::Missing),
            Some(value) => match value.as_u64() {
                None => self.push(path, ViolationKind::WrongType { expected: "integer" }),
                Some(declared) => match key_level {
                    Some(key) if u64::from(key.get()) != declared => self.push(
                        path,
                        ViolationKind::LevelMismatch {
                            key: key.get(),
                            declared,
                        },
                    ),
                    None if ComplexityLevel::new(declared).is_none() => {
                        self.push(path, ViolationKind::LevelOutOfRange(declared.to_string()))
                    }
                    _ => {}
                },
            },
        }
    }

    fn key_terms(&mut self, content: &Map<String, Value>, parent: &str) {
        let path = child(parent, "keyTerms");
        let terms = match content.get("keyTerms") {
            None | Some(Value::Null) => return,
            Some(Value::Array(terms)) => terms,
            Some(_) => return self.push(path, ViolationKind::WrongType { expected: "array" }),
        };

        for (index, term) in terms.iter().enumerate() {
            let term_path = item(&path, index);
            let Some(term) = term.as_object() else {
                self.push(term_path, ViolationKind::WrongType { expected: "object" });
                continue;
            };
            self.required_text(term, &term_path, "term");
            self.required_text(term, &term_path, "definition");
            self.optional_string(term, &term_path, "pronunciation");
        }
    }

    fn media(&mut self, object: &Map<String, Value>, path: &str) {
        self.required_string(object, path, "id");
        self.required_vocab::<MediaKind>(object, path, "type");
        self.required_string(object, path, "filename");
        self.required_string(object, path, "title");
        self.optional_string(object, path, "description");
    }

    fn citation(&mut self, object: &Map<String, Value>, path: &str) {
        self.required_string(object, path, "id");
        self.required_vocab::<CitationKind>(object, path, "type");
        self.required_string(object, path, "title");
        self.optional_string_list(object, path, "authors");
        self.optional_string(object, path, "source");
        self.optional_string(object, path, "url");
        self.optional_string(object, path, "license");
    }

    fn cross_reference(&mut self, object: &Map<String, Value>, path: &str) {
        self.required_string(object, path, "targetId");
        self.required_vocab::<ContentType>(object, path, "targetType");
        self.required_vocab::<Relationship>(object, path, "relationship");
        self.required_field(object, path, "label", "string", Value::is_string);
    }

    fn tags(&mut self, raw: Option<&Value>) {
        let tags = match raw {
            None | Some(Value::Null) => return self.push("tags", ViolationKind::Missing),
            Some(Value::Object(tags)) => tags,
            Some(_) => return self.push("tags", ViolationKind::WrongType { expected: "object" }),
        };

        self.required_string_list(tags, "tags", "systems");
        self.required_string_list(tags, "tags", "topics");
        self.optional_string_list(tags, "tags", "keywords");
        self.required_vocab::<ClinicalRelevance>(tags, "tags", "clinicalRelevance");

        let path = "tags.examRelevance";
        match tags.get("examRelevance") {
            None | Some(Value::Null) => {}
            Some(Value::Object(exam)) => {
                for flag in ["usmle", "nbme"] {
                    if let Some(value) = exam.get(flag) {
                        if !value.is_boolean() {
                            self.push(
                                child(path, flag),
                                ViolationKind::WrongType { expected: "boolean" },
                            );
                        }
                    }
                }
                self.optional_string_list(exam, path, "shelf");
            }
            Some(_) => self.push(path, ViolationKind::WrongType { expected: "object" }),
        }
    }

    fn date(&mut self, object: &Map<String, Value>, key: &str) {
        match object.get(key) {
            None | Some(Value::Null) => self.push(key, ViolationKind::Missing),
            Some(Value::String(text)) => {
                if dates::parse_date(text).is_none() {
                    self.push(key, ViolationKind::InvalidDate(text.clone()));
                }
            }
            Some(_) => self.push(key, ViolationKind::WrongType { expected: "date string" }),
        }
    }

    fn version(&mut self, raw: Option<&Value>) {
        match raw {
            None | Some(Value::Null) => self.push("version", ViolationKind::Missing),
            Some(value) => {
                let valid = value
                    .as_u64()
                    .is_some_and(|v| v >= 1 && v <= u64::from(u32::MAX));
                if !valid {
                    self.push("version", ViolationKind::InvalidVersion(value.to_string()));
                }
            }
        }
    }

    /// Validate each element of an optional array of objects
    fn records(
        &mut self,
        object: &Map<String, Value>,
        key: &str,
        check: fn(&mut Self, &Map<String, Value>, &str),
    ) {
        let records = match object.get(key) {
            None | Some(Value::Null) => return,
            Some(Value::Array(records)) => records,
            Some(_) => return self.push(key, ViolationKind::WrongType { expected: "array" }),
        };

        for (index, record) in records.iter().enumerate() {
            let path = item(key, index);
            match record.as_object() {
                Some(record) => check(self, record, &path),
                None => self.push(path, ViolationKind::WrongType { expected: "object" }),
            }
        }
    }

    fn required_field(
        &mut self,
        object: &Map<String, Value>,
        parent: &str,
        key: &str,
        expected: &'static str,
        is_valid: fn(&Value) -> bool,
    ) -> bool {
        match object.get(key) {
            None | Some(Value::Null) => {
                self.push(child(parent, key), ViolationKind::Missing);
                false
            }
            Some(value) if !is_valid(value) => {
                self.push(child(parent, key), ViolationKind::WrongType { expected });
                false
            }
            Some(_) => true,
        }
    }

    /// A non-empty string
    fn required_string(&mut self, object: &Map<String, Value>, parent: &str, key: &str) {
        if self.required_field(object, parent, key, "string", Value::is_string) {
            if object[key].as_str().is_some_and(|s| s.trim().is_empty()) {
                self.push(child(parent, key), ViolationKind::Empty);
            }
        }
    }

    fn optional_string(&mut self, object: &Map<String, Value>, parent: &str, key: &str) {
        if let Some(value) = object.get(key) {
            if !value.is_null() && !value.is_string() {
                self.push(child(parent, key), ViolationKind::WrongType { expected: "string" });
            }
        }
    }

    fn required_string_list(&mut self, object: &Map<String, Value>, parent: &str, key: &str) {
        if self.required_field(object, parent, key, "array of strings", Value::is_array) {
            self.string_items(&object[key], &child(parent, key));
        }
    }

    fn optional_string_list(&mut self, object: &Map<String, Value>, parent: &str, key: &str) {
        match object.get(key) {
            None | Some(Value::Null) => {}
            Some(value @ Value::Array(_)) => self.string_items(value, &child(parent, key)),
            Some(_) => self.push(
                child(parent, key),
                ViolationKind::WrongType {
                    expected: "array of strings",
                },
            ),
        }
    }

    fn string_items(&mut self, list: &Value, path: &str) {
        let Some(items) = list.as_array() else { return };
        for (index, value) in items.iter().enumerate() {
            match value.as_str() {
                Some(text) if text.trim().is_empty() => {
                    self.push(item(path, index), ViolationKind::Empty)
                }
                Some(_) => {}
                None => self.push(item(path, index), ViolationKind::WrongType { expected: "string" }),
            }
        }
    }

    /// A non-empty bilingual text: legacy string or `{ en, es? }`
    fn required_text(&mut self, object: &Map<String, Value>, parent: &str, key: &str) {
        let path = child(parent, key);
        match object.get(key) {
            None | Some(Value::Null) => self.push(path, ViolationKind::Missing),
            Some(value) => {
                if self.text(value, &path) && text_is_blank(value) {
                    self.push(path, ViolationKind::Empty);
                }
            }
        }
    }

    fn optional_text(&mut self, object: &Map<String, Value>, parent: &str, key: &str) {
        match object.get(key) {
            None | Some(Value::Null) => {}
            Some(value) => {
                self.text(value, &child(parent, key));
            }
        }
    }

    fn optional_text_list(&mut self, object: &Map<String, Value>, parent: &str, key: &str) {
        let path = child(parent, key);
        match object.get(key) {
            None | Some(Value::Null) => {}
            Some(Value::Array(items)) => {
                for (index, value) in items.iter().enumerate() {
                    self.text(value, &item(&path, index));
                }
            }
            Some(_) => self.push(path, ViolationKind::WrongType { expected: "array" }),
        }
    }

    /// Check the shape of a text value; returns true when well-formed
    fn text(&mut self, value: &Value, path: &str) -> bool {
        match value {
            Value::String(_) => true,
            Value::Object(text) => {
                let mut ok = true;
                match text.get("en") {
                    Some(Value::String(_)) => {}
                    None | Some(Value::Null) => {
                        self.push(child(path, "en"), ViolationKind::Missing);
                        ok = false;
                    }
                    Some(_) => {
                        self.push(child(path, "en"), ViolationKind::WrongType { expected: "string" });
                        ok = false;
                    }
                }
                if let Some(es) = text.get("es") {
                    if !es.is_null() && !es.is_string() {
                        self.push(child(path, "es"), ViolationKind::WrongType { expected: "string" });
                        ok = false;
                    }
                }
                ok
            }
            _ => {
                self.push(
                    path,
                    ViolationKind::WrongType {
                        expected: "string or {en, es} object",
                    },
                );
                false
            }
        }
    }

    fn required_vocab<T>(&mut self, object: &Map<String, Value>, parent: &str, key: &str)
    where
        T: FromStr<Err = UnknownVariant>,
    {
        match object.get(key) {
            None | Some(Value::Null) => self.push(child(parent, key), ViolationKind::Missing),
            Some(value) => self.vocab::<T>(value, &child(parent, key)),
        }
    }

    fn optional_vocab<T>(&mut self, object: &Map<String, Value>, parent: &str, key: &str)
    where
        T: FromStr<Err = UnknownVariant>,
    {
        match object.get(key) {
            None | Some(Value::Null) => {}
            Some(value) => self.vocab::<T>(value, &child(parent, key)),
        }
    }

    fn vocab<T>(&mut self, value: &Value, path: &str)
    where
        T: FromStr<Err = UnknownVariant>,
    {
        match value.as_str() {
            Some(text) => {
                if let Err(unknown) = text.parse::<T>() {
                    self.push(path, ViolationKind::UnknownValue(unknown));
                }
            }
            None => self.push(path, ViolationKind::WrongType { expected: "string" }),
        }
    }
}

/// English rendering of a well-formed text value is blank
fn text_is_blank(value: &Value) -> bool {
    let english = match value {
        Value::String(text) => crate::domain::LocalizedText::from_legacy(text).en,
        Value::Object(text) => text
            .get("en")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        _ => return false,
    };
    english.trim().is_empty()
}
