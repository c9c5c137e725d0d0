//! Content files on disk.
//!
//! One entry per file, JSON (`.json`) or YAML (`.yaml`, `.yml`). Loading a
//! directory validates every file and reports all failures together; a bad
//! file never hides the files after it.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;
use thiserror::Error;
use tokio::fs;

use crate::corpus::{Corpus, DuplicateIdError};
use crate::domain::EducationalContent;
use crate::schema::{validate_entry, SchemaError};

/// Serialization format of a content file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    Json,
    Yaml,
}

impl ContentFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") {
            Some(Self::Yaml)
        } else {
            None
        }
    }

    /// Extension used when writing
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// Why a single content file could not be loaded
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("{path}: {source}")]
    Schema {
        path: PathBuf,
        #[source]
        source: SchemaError,
    },
}

impl LoadError {
    /// The file this error belongs to
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Parse { path, .. } | Self::Schema { path, .. } => path,
        }
    }

    /// The failure without the file path
    pub fn reason(&self) -> String {
        match self {
            Self::Io { source, .. } => source.to_string(),
            Self::Parse { message, .. } => message.clone(),
            Self::Schema { source, .. } => source.to_string(),
        }
    }
}

/// Result of loading a content directory
#[derive(Debug, Default)]
pub struct LoadOutcome {
    /// Number of content files found
    pub files: usize,

    /// Entries that passed validation, in file-name order
    pub entries: Vec<EducationalContent>,

    /// Every file that failed, in file-name order
    pub failures: Vec<LoadError>,
}

impl LoadOutcome {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Build a corpus from the entries that loaded
    pub fn into_corpus(self) -> Result<Corpus, DuplicateIdError> {
        Corpus::build(self.entries)
    }
}

/// Find content files under `dir`, recursively, sorted by path
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>> {
    let base = glob::Pattern::escape(&dir.to_string_lossy());
    let mut files = Vec::new();

    for ext in ["json", "yaml", "yml"] {
        let pattern = format!("{}/**/*.{}", base, ext);
        for path in glob::glob(&pattern).context("Invalid content glob")? {
            let path = path.context("Failed to read content directory")?;
            if path.is_file() {
                files.push(path);
            }
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

/// Parse file text into an untyped value
pub fn parse_source(text: &str, format: ContentFormat) -> Result<Value, String> {
    match format {
        ContentFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
        ContentFormat::Yaml => {
            let yaml: serde_yaml::Value = serde_yaml::from_str(text).map_err(|e| e.to_string())?;
            yaml_to_json(yaml)
        }
    }
}

/// Convert YAML to JSON, turning scalar mapping keys into strings.
///
/// YAML writes level keys as integers (`1:`); the schema expects the JSON
/// object form (`"1"`).
pub fn yaml_to_json(value: serde_yaml::Value) -> Result<Value, String> {
    use serde_yaml::Value as Yaml;

    Ok(match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => {
            if let Some(u) = n.as_u64() {
                Value::from(u)
            } else if let Some(i) = n.as_i64() {
                Value::from(i)
            } else {
                let f = n.as_f64().unwrap_or(f64::NAN);
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| format!("unsupported number: {}", n))?
            }
        }
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(yaml_to_json)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Yaml::Mapping(mapping) => {
            let mut object = serde_json::Map::new();
            for (key, value) in mapping {
                let key = match key {
                    Yaml::String(s) => s,
                    Yaml::Number(n) => n.to_string(),
                    Yaml::Bool(b) => b.to_string(),
                    other => return Err(format!("unsupported mapping key: {:?}", other)),
                };
                object.insert(key, yaml_to_json(value)?);
            }
            Value::Object(object)
        }
        Yaml::Tagged(tagged) => yaml_to_json(tagged.value)?,
    })
}

/// Read, parse and validate one content file
pub async fn load_file(path: &Path) -> Result<EducationalContent, LoadError> {
    let format = ContentFormat::from_path(path).ok_or_else(|| LoadError::Parse {
        path: path.to_path_buf(),
        message: "unsupported file extension".to_string(),
    })?;

    let text = fs::read_to_string(path).await.map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let raw = parse_source(&text, format).map_err(|message| LoadError::Parse {
        path: path.to_path_buf(),
        message,
    })?;

    validate_entry(&raw).map_err(|source| LoadError::Schema {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and validate every content file under `dir`.
///
/// Fails only when the directory itself is unusable; per-file problems are
/// collected in [`LoadOutcome::failures`].
pub async fn load_dir(dir: &Path) -> Result<LoadOutcome> {
    if !fs::metadata(dir)
        .await
        .with_context(|| format!("Content directory not found: {}", dir.display()))?
        .is_dir()
    {
        anyhow::bail!("Not a directory: {}", dir.display());
    }

    let files = discover(dir)?;
    let mut outcome = LoadOutcome {
        files: files.len(),
        ..Default::default()
    };

    for path in files {
        match load_file(&path).await {
            Ok(entry) => {
                tracing::debug!("Loaded {} from {}", entry.id, path.display());
                outcome.entries.push(entry);
            }
            Err(e) => {
                tracing::warn!("{}", e);
                outcome.failures.push(e);
            }
        }
    }

    tracing::info!(
        "Loaded {} of {} content files from {}",
        outcome.entries.len(),
        outcome.files,
        dir.display()
    );

    Ok(outcome)
}

/// File name for an entry id, with path-unsafe characters replaced
fn file_name(id: &str, format: ContentFormat) -> String {
    let stem: String = id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{}.{}", stem, format.extension())
}

/// Write each entry to `dir` as `<id>.<ext>`; returns the written paths
pub async fn write_entries<'a>(
    dir: &Path,
    entries: impl IntoIterator<Item = &'a EducationalContent>,
    format: ContentFormat,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create export directory: {}", dir.display()))?;

    let mut written = Vec::new();

    for entry in entries {
        let path = dir.join(file_name(&entry.id, format));
        let content = match format {
            ContentFormat::Json => serde_json::to_string_pretty(entry)?,
            ContentFormat::Yaml => serde_yaml::to_string(entry)?,
        };

        fs::write(&path, content)
            .await
            .with_context(|| format!("Failed to write entry: {}", path.display()))?;

        written.push(path);
    }

    Ok(written)
}
