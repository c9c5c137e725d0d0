//! Configuration for medcorpus.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (MEDCORPUS_HOME, MEDCORPUS_CONTENT_DIR)
//! 2. Config file (.medcorpus/config.yaml)
//! 3. Defaults (~/.medcorpus, built-in content)
//!
//! Config file discovery:
//! - Searches current directory and parents for .medcorpus/config.yaml
//! - `paths.home` is relative to the .medcorpus/ directory
//! - `paths.content` is relative to the project root (parent of .medcorpus/)

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::Language;

pub const HOME_ENV: &str = "MEDCORPUS_HOME";
pub const CONTENT_DIR_ENV: &str = "MEDCORPUS_CONTENT_DIR";

const CONFIG_DIR: &str = ".medcorpus";
const CONFIG_FILE: &str = "config.yaml";
const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub content: Option<ContentConfig>,
    #[serde(default)]
    pub watch: Option<WatchConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    /// State directory (relative to .medcorpus/)
    pub home: Option<String>,
    /// Content directory (relative to the project root)
    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentConfig {
    pub default_language: Option<Language>,
    /// Treat lint warnings as errors in `validate`
    pub strict: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WatchConfig {
    pub debounce_ms: Option<u64>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedConfig {
    pub home: PathBuf,
    /// Content files to load; `None` means the built-in corpus
    pub content_dir: Option<PathBuf>,
    pub default_language: Language,
    pub strict_lint: bool,
    pub watch_debounce_ms: u64,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

/// Environment overrides, read once per load
#[derive(Debug, Clone, Default)]
struct EnvOverrides {
    home: Option<PathBuf>,
    content_dir: Option<PathBuf>,
}

impl EnvOverrides {
    fn from_env() -> Self {
        let var = |name: &str| std::env::var_os(name).filter(|v| !v.is_empty()).map(PathBuf::from);
        Self {
            home: var(HOME_ENV),
            content_dir: var(CONTENT_DIR_ENV),
        }
    }
}

/// Find config file by searching `start` and its parents
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_DIR).join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to `base`
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Combine an optional config file, env overrides and defaults
fn resolve(
    config_file: Option<(PathBuf, ConfigFile)>,
    env: EnvOverrides,
    default_home: PathBuf,
) -> ResolvedConfig {
    let Some((config_path, config)) = config_file else {
        let home = env.home.unwrap_or(default_home);
        let content_dir = env.content_dir.or_else(|| existing_dir(home.join("content")));

        return ResolvedConfig {
            home,
            content_dir,
            default_language: Language::default(),
            strict_lint: false,
            watch_debounce_ms: DEFAULT_DEBOUNCE_MS,
            config_file: None,
        };
    };

    let config_dir = config_path.parent().unwrap_or(Path::new("."));
    let project_root = config_dir.parent().unwrap_or(Path::new("."));

    let home = match (env.home, &config.paths.home) {
        (Some(home), _) => home,
        (None, Some(home)) => resolve_path(config_dir, home),
        (None, None) => default_home,
    };

    let content_dir = match (env.content_dir, &config.paths.content) {
        (Some(dir), _) => Some(dir),
        (None, Some(dir)) => Some(resolve_path(project_root, dir)),
        (None, None) => existing_dir(home.join("content")),
    };

    let content = config.content.as_ref();

    ResolvedConfig {
        home,
        content_dir,
        default_language: content
            .and_then(|c| c.default_language)
            .unwrap_or_default(),
        strict_lint: content.and_then(|c| c.strict).unwrap_or(false),
        watch_debounce_ms: config
            .watch
            .as_ref()
            .and_then(|w| w.debounce_ms)
            .unwrap_or(DEFAULT_DEBOUNCE_MS),
        config_file: Some(config_path),
    }
}

fn existing_dir(path: PathBuf) -> Option<PathBuf> {
    path.is_dir().then_some(path)
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let default_home = dirs::home_dir()
        .context("Failed to determine home directory")?
        .join(CONFIG_DIR);

    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let config_file = match find_config_file(&cwd) {
        Some(path) => {
            let config = load_config_file(&path)?;
            tracing::debug!("Using config file {}", path.display());
            Some((path, config))
        }
        None => None,
    };

    Ok(resolve(config_file, EnvOverrides::from_env(), default_home))
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(root: &Path, body: &str) -> PathBuf {
        let dir = root.join(CONFIG_DIR);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE);
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "{}", body).unwrap();
        path
    }

    #[test]
    fn test_defaults_without_file() {
        let temp = TempDir::new().unwrap();
        let home = temp.path().join(".medcorpus");

        let config = resolve(None, EnvOverrides::default(), home.clone());

        assert_eq!(config.home, home);
        assert!(config.content_dir.is_none());
        assert_eq!(config.default_language, Language::En);
        assert_eq!(config.watch_debounce_ms, DEFAULT_DEBOUNCE_MS);
        assert!(!config.strict_lint);
        assert!(config.config_file.is_none());
    }

    #[test]
    fn test_home_content_dir_used_when_present() {
        let temp = TempDir::new().unwrap();
        let home = temp.path().join(".medcorpus");
        std::fs::create_dir_all(home.join("content")).unwrap();

        let config = resolve(None, EnvOverrides::default(), home.clone());
        assert_eq!(config.content_dir, Some(home.join("content")));
    }

    #[test]
    fn test_config_file_parsing() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            temp.path(),
            r#"
version: "1.0"
paths:
  home: ./
  content: content
content:
  default_language: es
  strict: true
watch:
  debounce_ms: 250
"#,
        );

        let file = load_config_file(&path).unwrap();
        assert_eq!(file.version, "1.0");
        assert_eq!(file.paths.content.as_deref(), Some("content"));

        let config = resolve(
            Some((path.clone(), file)),
            EnvOverrides::default(),
            PathBuf::from("/unused"),
        );

        assert_eq!(config.default_language, Language::Es);
        assert!(config.strict_lint);
        assert_eq!(config.watch_debounce_ms, 250);
        assert_eq!(config.content_dir, Some(temp.path().join("content")));
        assert_eq!(config.config_file, Some(path));
    }

    #[test]
    fn test_env_overrides_config_file() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            temp.path(),
            "version: \"1.0\"\npaths:\n  content: content\n",
        );
        let file = load_config_file(&path).unwrap();

        let env = EnvOverrides {
            home: Some(PathBuf::from("/env/home")),
            content_dir: Some(PathBuf::from("/env/content")),
        };
        let config = resolve(Some((path, file)), env, PathBuf::from("/unused"));

        assert_eq!(config.home, PathBuf::from("/env/home"));
        assert_eq!(config.content_dir, Some(PathBuf::from("/env/content")));
    }

    #[test]
    fn test_find_config_walks_up() {
        let temp = TempDir::new().unwrap();
        let path = write_config(temp.path(), "version: \"1.0\"");
        let nested = temp.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_config_file(&nested), Some(path));
    }

    #[test]
    fn test_unknown_language_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            temp.path(),
            "version: \"1.0\"\ncontent:\n  default_language: fr\n",
        );
        assert!(load_config_file(&path).is_err());
    }

    #[test]
    fn test_resolve_relative_path() {
        let base = PathBuf::from("/home/user/project");

        assert_eq!(
            resolve_path(&base, "/absolute/path"),
            PathBuf::from("/absolute/path")
        );
        assert_eq!(
            resolve_path(&base, "./subdir"),
            PathBuf::from("/home/user/project/./subdir")
        );
    }
}
