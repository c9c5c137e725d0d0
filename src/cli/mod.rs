//! Command-line interface for medcorpus.
//!
//! Provides commands for validating content files, querying the corpus,
//! browsing the procedure database, exporting, and hot-reloading a
//! content directory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::config;
use crate::content;
use crate::corpus::{CategoryField, Corpus, SharedCorpus};
use crate::domain::{ComplexityLevel, EducationalContent, Language, LevelContent, SurgicalCategory};
use crate::loader::{self, ContentFormat};
use crate::schema::{self, validate_entry, ValidationReport};
use crate::watch::{ContentWatcher, ReloadOutcome, WatcherConfig};

/// medcorpus - bilingual medical education content corpus
#[derive(Parser, Debug)]
#[command(name = "medcorpus")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate content files and report every problem found
    Validate {
        /// Content directory (defaults to the configured one, else built-in content)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Fail on lint warnings too
        #[arg(long)]
        strict: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search entries (case-insensitive substring)
    Search {
        /// Search query
        query: String,

        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Show an entry
    Show {
        /// Entry ID
        id: String,

        /// Only this complexity level (1-5)
        #[arg(short, long)]
        level: Option<ComplexityLevel>,

        /// Fall back to the nearest lower level when --level is not authored
        #[arg(long, requires = "level")]
        nearest: bool,

        /// Display language
        #[arg(long, value_enum)]
        lang: Option<LangArg>,

        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// List entries, optionally filtered by a category field
    List {
        /// Field to filter on (type, category, system, topic, relevance, status, shelf, any)
        #[arg(short, long, requires = "value")]
        field: Option<CategoryField>,

        /// Value the field must equal
        #[arg(short, long)]
        value: Option<String>,

        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Show corpus statistics
    Stats {
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Browse the plastic surgery procedure database
    Procedures {
        /// Filter by surgical category
        #[arg(short, long)]
        category: Option<SurgicalCategory>,

        /// Search query
        #[arg(short, long)]
        query: Option<String>,

        /// Show one procedure in full
        #[arg(long)]
        id: Option<String>,
    },

    /// Write the built-in entries to a directory, one file per entry
    Export {
        /// Output directory
        out_dir: PathBuf,

        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
    },

    /// Watch a content directory and hot-reload the corpus
    Watch {
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Show resolved configuration (debug)
    Config,
}

/// Display language for CLI (maps to Language)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LangArg {
    En,
    Es,
}

impl From<LangArg> for Language {
    fn from(lang: LangArg) -> Self {
        match lang {
            LangArg::En => Language::En,
            LangArg::Es => Language::Es,
        }
    }
}

/// Export format for CLI (maps to ContentFormat)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    Json,
    Yaml,
}

impl From<ExportFormat> for ContentFormat {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Json => ContentFormat::Json,
            ExportFormat::Yaml => ContentFormat::Yaml,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Validate { dir, strict, json } => validate(dir, strict, json).await,
            Commands::Search { query, dir } => search(&query, dir).await,
            Commands::Show {
                id,
                level,
                nearest,
                lang,
                dir,
            } => show(&id, level, nearest, lang, dir).await,
            Commands::List { field, value, dir } => list(field, value, dir).await,
            Commands::Stats { dir } => stats(dir).await,
            Commands::Procedures {
                category,
                query,
                id,
            } => procedures(category, query, id),
            Commands::Export { out_dir, format } => export(&out_dir, format.into()).await,
            Commands::Watch { dir } => watch(dir).await,
            Commands::Config => show_config(),
        }
    }
}

/// Directory argument, else the configured content directory
fn content_dir(dir: Option<PathBuf>) -> Result<Option<PathBuf>> {
    match dir {
        Some(dir) => Ok(Some(dir)),
        None => Ok(config::config()?.content_dir.clone()),
    }
}

/// Build the corpus from a content directory, or the built-in content.
///
/// Files that fail validation are skipped with a warning; `validate`
/// reports them in full.
async fn load_corpus(dir: Option<PathBuf>) -> Result<Corpus> {
    let Some(dir) = content_dir(dir)? else {
        return Ok(content::corpus()?);
    };

    let outcome = loader::load_dir(&dir).await?;
    if !outcome.is_clean() {
        tracing::warn!(
            "{} file(s) failed to load; run `medcorpus validate --dir {}` for details",
            outcome.failures.len(),
            dir.display()
        );
    }

    let corpus = outcome.into_corpus()?;
    for dangling in corpus.find_dangling_references() {
        tracing::debug!("Dangling cross-reference: {}", dangling);
    }
    Ok(corpus)
}

fn language(lang: Option<LangArg>) -> Result<Language> {
    match lang {
        Some(lang) => Ok(lang.into()),
        None => Ok(config::config()?.default_language),
    }
}

/// Cut `text` to `max` characters, marking the cut with "..."
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

async fn validate(dir: Option<PathBuf>, strict: bool, json: bool) -> Result<()> {
    let strict = strict || config::config()?.strict_lint;
    let mut report = ValidationReport::new();
    let mut entries = Vec::new();

    match content_dir(dir)? {
        Some(dir) => {
            let outcome = loader::load_dir(&dir).await?;
            for failure in &outcome.failures {
                report.record_error(failure.path().display().to_string(), failure.reason());
            }
            entries = outcome.entries;
        }
        None => {
            // Built-in entries go through the same untyped validation as files
            for entry in content::entries() {
                let raw = serde_json::to_value(&entry)?;
                match validate_entry(&raw) {
                    Ok(entry) => entries.push(entry),
                    Err(e) => report.record_error(entry.id.clone(), e),
                }
            }
        }
    }

    for entry in &entries {
        report.record_entry(entry);
    }

    match Corpus::build(entries) {
        Ok(corpus) => report.record_corpus(&corpus),
        Err(e) => report.record_error("corpus", e),
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if !report.passed(strict) {
        anyhow::bail!(
            "Validation failed: {} error(s), {} warning(s){}",
            report.errors.len(),
            report.warnings.len(),
            if strict { " (strict)" } else { "" }
        );
    }

    Ok(())
}

fn print_report(report: &ValidationReport) {
    for error in &report.errors {
        println!("ERROR   {}", error);
    }
    for warning in &report.warnings {
        println!("WARN    {}", warning);
    }
    for dangling in &report.dangling {
        println!("DANGLE  {}", dangling);
    }

    println!();
    println!(
        "{} valid, {} error(s), {} warning(s), {} dangling reference(s)",
        report.valid,
        report.errors.len(),
        report.warnings.len(),
        report.dangling.len()
    );
}

fn print_entry_table<'a>(entries: impl IntoIterator<Item = &'a Arc<EducationalContent>>) -> usize {
    println!("{:<38} {:<10} {:<10} {:<30}", "ID", "TYPE", "STATUS", "NAME");
    println!("{}", "-".repeat(90));

    let mut count = 0;
    for entry in entries {
        println!(
            "{:<38} {:<10} {:<10} {:<30}",
            truncate(&entry.id, 38),
            entry.content_type,
            entry.status,
            truncate(&entry.name.en, 30)
        );
        count += 1;
    }
    count
}

async fn search(query: &str, dir: Option<PathBuf>) -> Result<()> {
    let corpus = load_corpus(dir).await?;
    let results = corpus.search(query);

    if results.is_empty() {
        println!("No results found for: {}", query);
        return Ok(());
    }

    println!("Found {} result(s) for \"{}\":\n", results.len(), query);
    print_entry_table(results);

    Ok(())
}

async fn show(
    id: &str,
    level: Option<ComplexityLevel>,
    nearest: bool,
    lang: Option<LangArg>,
    dir: Option<PathBuf>,
) -> Result<()> {
    let corpus = load_corpus(dir).await?;
    let lang = language(lang)?;
    let entry = corpus
        .get(id)
        .with_context(|| format!("Entry not found: {}", id))?;

    println!("{}", "=".repeat(70));
    println!("  {}", entry.name.text(lang));
    println!("{}", "=".repeat(70));
    println!("  ID:        {}", entry.id);
    println!("  Type:      {}", entry.content_type);
    if let Some(category) = entry.category {
        println!("  Category:  {}", category);
    }
    println!("  Status:    {} (v{})", entry.status, entry.version);
    println!("  Updated:   {}", entry.updated_at);
    if !entry.alternate_names.is_empty() {
        println!("  Also:      {}", entry.alternate_names.join(", "));
    }
    println!("  Relevance: {}", entry.tags.clinical_relevance);

    match level {
        Some(requested) => {
            let content = if nearest {
                entry.nearest_level_at_or_below(requested)
            } else {
                entry.level(requested)
            };
            match content {
                Some(content) => print_level(content, lang),
                None => println!("\nLevel {} is not authored for this entry", requested),
            }
        }
        None => {
            for content in entry.levels.values() {
                print_level(content, lang);
            }
        }
    }

    if !entry.cross_references.is_empty() {
        println!("\nSee also:");
        for reference in &entry.cross_references {
            let marker = if corpus.contains(&reference.target_id) { "" } else { " (missing)" };
            println!(
                "  [{}] {} -> {}{}",
                reference.relationship, reference.label, reference.target_id, marker
            );
        }
    }

    if !entry.citations.is_empty() {
        println!("\nCitations:");
        for citation in &entry.citations {
            println!("  {} [{}] {}", citation.id, citation.kind, citation.title);
            if let Some(license) = &citation.license {
                println!("      License: {}", license);
            }
        }
    }

    Ok(())
}

fn print_level(content: &LevelContent, lang: Language) {
    println!(
        "\n--- Level {} ({}) ---\n",
        content.level,
        content.level.audience()
    );
    println!("{}", content.summary.text(lang));
    println!();
    println!("{}", content.explanation.text(lang));

    if !content.key_terms.is_empty() {
        println!("\nKey terms:");
        for term in &content.key_terms {
            println!("  {}: {}", term.term.text(lang), term.definition.text(lang));
        }
    }

    if let Some(notes) = &content.clinical_notes {
        println!("\nClinical notes: {}", notes.text(lang));
    }
}

async fn list(field: Option<CategoryField>, value: Option<String>, dir: Option<PathBuf>) -> Result<()> {
    let corpus = load_corpus(dir).await?;

    let count = match (field, value) {
        (Some(field), Some(value)) => print_entry_table(corpus.list_by_category(field, &value)),
        (None, Some(value)) => print_entry_table(corpus.list_by_category(CategoryField::Any, &value)),
        _ => print_entry_table(corpus.iter()),
    };

    println!("\nTotal: {} of {} entries", count, corpus.count());
    Ok(())
}

async fn stats(dir: Option<PathBuf>) -> Result<()> {
    let corpus = load_corpus(dir).await?;

    let mut by_type: BTreeMap<&str, usize> = BTreeMap::new();
    let mut by_status: BTreeMap<&str, usize> = BTreeMap::new();
    let mut by_level: BTreeMap<ComplexityLevel, usize> = BTreeMap::new();
    let mut fully_leveled = 0;

    for entry in corpus.iter() {
        *by_type.entry(entry.content_type.as_str()).or_default() += 1;
        *by_status.entry(entry.status.as_str()).or_default() += 1;
        for level in entry.authored_levels() {
            *by_level.entry(level).or_default() += 1;
        }
        if schema::lint::is_fully_leveled(entry) {
            fully_leveled += 1;
        }
    }

    println!("Entries: {}", corpus.count());
    println!("\nBy type:");
    for (kind, count) in &by_type {
        println!("  {:<12} {}", kind, count);
    }
    println!("\nBy status:");
    for (status, count) in &by_status {
        println!("  {:<12} {}", status, count);
    }
    println!("\nLevel coverage:");
    for level in ComplexityLevel::ALL {
        println!(
            "  {} {:<16} {}",
            level,
            level.audience(),
            by_level.get(&level).copied().unwrap_or(0)
        );
    }
    println!("  All five levels: {}", fully_leveled);
    println!(
        "\nDangling cross-references: {}",
        corpus.find_dangling_references().len()
    );
    println!("Procedures: {}", content::procedure_corpus()?.count());

    Ok(())
}

fn procedures(category: Option<SurgicalCategory>, query: Option<String>, id: Option<String>) -> Result<()> {
    let corpus = content::procedure_corpus()?;

    if let Some(id) = id {
        let procedure = corpus
            .get(&id)
            .with_context(|| format!("Procedure not found: {}", id))?;

        println!("{} ({})", procedure.name.en, procedure.category);
        if let Some(es) = &procedure.name.es {
            println!("{}", es);
        }
        println!("\n{}", procedure.description);
        for (title, items) in [
            ("Indications", &procedure.indications),
            ("Technique", &procedure.technique),
            ("Complications", &procedure.complications),
        ] {
            println!("\n{}:", title);
            for item in items {
                println!("  - {}", item);
            }
        }
        println!("\nRecovery: {}", procedure.recovery);
        println!("Key pearl: {}", procedure.key_pearl);
        return Ok(());
    }

    let matches: Vec<_> = match &query {
        Some(query) => corpus.search(query),
        None => corpus.iter().collect(),
    };

    println!("{:<34} {:<18} {:<40}", "ID", "CATEGORY", "NAME");
    println!("{}", "-".repeat(90));

    let mut shown = 0;
    for procedure in matches {
        if category.is_some_and(|c| c != procedure.category) {
            continue;
        }
        println!(
            "{:<34} {:<18} {:<40}",
            procedure.id,
            procedure.category,
            truncate(&procedure.name.en, 40)
        );
        shown += 1;
    }

    println!("\nTotal: {} of {} procedures", shown, corpus.count());
    Ok(())
}

async fn export(out_dir: &Path, format: ContentFormat) -> Result<()> {
    let entries = content::entries();
    let written = loader::write_entries(out_dir, &entries, format).await?;

    eprintln!("Exported {} entries to {}", written.len(), out_dir.display());
    Ok(())
}

async fn watch(dir: Option<PathBuf>) -> Result<()> {
    let dir = content_dir(dir)?
        .context("No content directory: pass --dir or set MEDCORPUS_CONTENT_DIR")?;

    let watcher_config = WatcherConfig {
        content_dir: dir,
        debounce_ms: config::config()?.watch_debounce_ms,
    };
    let watcher = ContentWatcher::new(watcher_config, Arc::new(SharedCorpus::default()));
    let (mut events, handle) = watcher.watch().await?;

    eprintln!(
        "Watching {} (Ctrl+C to stop)",
        watcher.config().content_dir.display()
    );

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Some(ReloadOutcome::Swapped { entries, .. }) => {
                    eprintln!("Reloaded: {} entries", entries);
                }
                Some(ReloadOutcome::Rejected { reasons }) => {
                    eprintln!("Reload rejected, keeping previous corpus:");
                    for reason in reasons {
                        eprintln!("  {}", reason);
                    }
                }
                Some(ReloadOutcome::Unchanged) => {}
                None => break,
            },
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    handle.stop().await?;
    eprintln!("Serving {} entries at shutdown", watcher.shared().load().count());
    Ok(())
}

/// Show the resolved configuration (for debugging)
fn show_config() -> Result<()> {
    let cfg = config::config()?;

    println!("medcorpus configuration");
    println!();
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!();
    println!("Paths:");
    println!("  Home:    {}", cfg.home.display());
    println!(
        "  Content: {}",
        cfg.content_dir
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(built-in)".to_string())
    );
    println!();
    println!("Settings:");
    println!("  Default language: {}", cfg.default_language);
    println!("  Strict lint:      {}", cfg.strict_lint);
    println!("  Watch debounce:   {}ms", cfg.watch_debounce_ms);

    Ok(())
}
