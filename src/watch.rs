//! Content directory watcher.
//!
//! Watches the content directory and rebuilds the corpus when files change.
//! A rebuilt corpus is swapped into the [`SharedCorpus`] only when every
//! file loads and the corpus builds; otherwise the previous corpus stays.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use notify::RecursiveMode;
use notify_debouncer_mini::{new_debouncer, DebounceEventResult};
use sha2::{Digest, Sha256};
use thiserror::Error;
use tokio::sync::mpsc;

use crate::corpus::SharedCorpus;
use crate::loader::{self, ContentFormat};

/// Errors that can occur with the watcher
#[derive(Debug, Error)]
pub enum WatcherError {
    #[error("Content directory does not exist: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration for the watcher
#[derive(Debug, Clone)]
pub struct WatcherConfig {
    pub content_dir: PathBuf,

    /// Quiet period before a burst of changes triggers a reload
    pub debounce_ms: u64,
}

impl WatcherConfig {
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
            debounce_ms: 500,
        }
    }

    /// Check if the content directory exists
    pub fn validate(&self) -> Result<(), WatcherError> {
        if !self.content_dir.is_dir() {
            return Err(WatcherError::DirectoryNotFound(self.content_dir.clone()));
        }
        Ok(())
    }
}

/// What a reload attempt did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReloadOutcome {
    /// Files are byte-identical to the last successful load
    Unchanged,

    /// A new corpus was swapped in
    Swapped { entries: usize, digest: String },

    /// Loading or building failed; the previous corpus is still served
    Rejected { reasons: Vec<String> },
}

/// Reloads a content directory into a shared corpus
pub struct ContentWatcher {
    config: WatcherConfig,
    shared: Arc<SharedCorpus>,
}

impl ContentWatcher {
    pub fn new(config: WatcherConfig, shared: Arc<SharedCorpus>) -> Self {
        Self { config, shared }
    }

    pub fn config(&self) -> &WatcherConfig {
        &self.config
    }

    /// The corpus this watcher swaps
    pub fn shared(&self) -> &Arc<SharedCorpus> {
        &self.shared
    }

    /// Reload once; skips the rebuild when the digest equals `last_digest`
    pub async fn reload(&self, last_digest: Option<&str>) -> Result<ReloadOutcome> {
        reload(&self.config, &self.shared, last_digest).await
    }

    /// Watch the directory and reload on change.
    ///
    /// Performs an initial load, then emits one [`ReloadOutcome`] per
    /// debounced burst of changes until stopped via the returned handle.
    pub async fn watch(&self) -> Result<(mpsc::Receiver<ReloadOutcome>, WatchHandle)> {
        self.config.validate().map_err(|e| anyhow::anyhow!("{}", e))?;

        let (event_tx, event_rx) = mpsc::channel::<ReloadOutcome>(16);
        let (stop_tx, mut stop_rx) = mpsc::channel::<()>(1);

        let config = self.config.clone();
        let shared = Arc::clone(&self.shared);

        let handle = tokio::spawn(async move {
            if let Err(e) = run_watcher(config, shared, event_tx, &mut stop_rx).await {
                tracing::error!("Watcher error: {}", e);
            }
        });

        Ok((
            event_rx,
            WatchHandle {
                stop_tx,
                task: handle,
            },
        ))
    }
}

/// Handle to control the watcher
pub struct WatchHandle {
    stop_tx: mpsc::Sender<()>,
    task: tokio::task::JoinHandle<()>,
}

impl WatchHandle {
    /// Stop the watcher
    pub async fn stop(self) -> Result<()> {
        let _ = self.stop_tx.send(()).await;
        self.task.await?;
        Ok(())
    }
}

/// SHA-256 over every content file's relative path and bytes, hex-encoded
pub async fn content_digest(dir: &std::path::Path) -> Result<String> {
    let mut hasher = Sha256::new();

    for path in loader::discover(dir)? {
        let relative = path.strip_prefix(dir).unwrap_or(&path);
        hasher.update(relative.to_string_lossy().as_bytes());
        hasher.update([0u8]);
        hasher.update(tokio::fs::read(&path).await?);
        hasher.update([0u8]);
    }

    Ok(hex::encode(hasher.finalize()))
}

async fn reload(
    config: &WatcherConfig,
    shared: &SharedCorpus,
    last_digest: Option<&str>,
) -> Result<ReloadOutcome> {
    let digest = content_digest(&config.content_dir).await?;
    if last_digest == Some(digest.as_str()) {
        tracing::debug!("Content unchanged ({})", &digest[..12]);
        return Ok(ReloadOutcome::Unchanged);
    }

    let outcome = loader::load_dir(&config.content_dir).await?;
    if !outcome.is_clean() {
        let reasons = outcome.failures.iter().map(|e| e.to_string()).collect();
        tracing::warn!(
            "Reload rejected: {} file(s) failed, keeping previous corpus",
            outcome.failures.len()
        );
        return Ok(ReloadOutcome::Rejected { reasons });
    }

    let corpus = match outcome.into_corpus() {
        Ok(corpus) => corpus,
        Err(e) => {
            tracing::warn!("Reload rejected: {}, keeping previous corpus", e);
            return Ok(ReloadOutcome::Rejected {
                reasons: vec![e.to_string()],
            });
        }
    };

    for dangling in corpus.find_dangling_references() {
        tracing::warn!("Dangling cross-reference: {}", dangling);
    }

    let entries = corpus.count();
    shared.replace(corpus);
    tracing::info!("Corpus swapped: {} entries ({})", entries, &digest[..12]);

    Ok(ReloadOutcome::Swapped { entries, digest })
}

/// Internal watcher loop
async fn run_watcher(
    config: WatcherConfig,
    shared: Arc<SharedCorpus>,
    event_tx: mpsc::Sender<ReloadOutcome>,
    stop_rx: &mut mpsc::Receiver<()>,
) -> Result<()> {
    let (change_tx, mut change_rx) = mpsc::unbounded_channel::<DebounceEventResult>();
    let mut debouncer = new_debouncer(
        Duration::from_millis(config.debounce_ms),
        move |result: DebounceEventResult| {
            let _ = change_tx.send(result);
        },
    )?;
    debouncer
        .watcher()
        .watch(&config.content_dir, RecursiveMode::Recursive)?;

    // Changes made during the initial load queue up behind it
    let mut last_digest = None;
    let initial = reload(&config, &shared, None).await?;
    if let ReloadOutcome::Swapped { digest, .. } = &initial {
        last_digest = Some(digest.clone());
    }
    let _ = event_tx.send(initial).await;

    tracing::info!("Watching {} for content changes", config.content_dir.display());

    loop {
        let result = tokio::select! {
            _ = stop_rx.recv() => {
                tracing::info!("Watcher stopping...");
                break;
            }
            result = change_rx.recv() => match result {
                Some(result) => result,
                None => {
                    tracing::error!("Watcher channel disconnected");
                    break;
                }
            },
        };

        let changed = match result {
            Ok(events) => events
                .iter()
                .any(|event| ContentFormat::from_path(&event.path).is_some()),
            Err(e) => {
                tracing::warn!("Watcher error: {:?}", e);
                false
            }
        };

        if changed {
            match reload(&config, &shared, last_digest.as_deref()).await {
                Ok(outcome) => {
                    if let ReloadOutcome::Swapped { digest, .. } = &outcome {
                        last_digest = Some(digest.clone());
                    }
                    if event_tx.send(outcome).await.is_err() {
                        break;
                    }
                }
                Err(e) => tracing::warn!("Reload failed: {}", e),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;
    use crate::domain::EducationalContent;
    use crate::loader::write_entries;
    use tempfile::TempDir;

    async fn seeded_dir() -> TempDir {
        let temp = TempDir::new().unwrap();
        let entries = content::entries();
        write_entries(temp.path(), &entries, ContentFormat::Json)
            .await
            .unwrap();
        temp
    }

    #[test]
    fn test_missing_directory_fails_validation() {
        let config = WatcherConfig::new("/definitely/not/here");
        assert!(matches!(
            config.validate(),
            Err(WatcherError::DirectoryNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_reload_swaps_then_skips_unchanged() {
        let temp = seeded_dir().await;
        let shared = Arc::new(SharedCorpus::default());
        let watcher = ContentWatcher::new(WatcherConfig::new(temp.path()), Arc::clone(&shared));

        let first = watcher.reload(None).await.unwrap();
        let ReloadOutcome::Swapped { entries, digest } = first.clone() else {
            panic!("expected swap, got {:?}", first);
        };
        assert_eq!(entries, content::entries().len());
        assert_eq!(shared.load().count(), entries);

        let second = watcher.reload(Some(&digest)).await.unwrap();
        assert_eq!(second, ReloadOutcome::Unchanged);
    }

    #[tokio::test]
    async fn test_broken_file_keeps_previous_corpus() {
        let temp = seeded_dir().await;
        let shared = Arc::new(SharedCorpus::default());
        let watcher = ContentWatcher::new(WatcherConfig::new(temp.path()), Arc::clone(&shared));

        watcher.reload(None).await.unwrap();
        let before = shared.load();

        tokio::fs::write(temp.path().join("zz-broken.json"), "{ \"id\": ")
            .await
            .unwrap();

        let outcome = watcher.reload(None).await.unwrap();
        assert!(matches!(outcome, ReloadOutcome::Rejected { ref reasons } if reasons.len() == 1));
        assert!(Arc::ptr_eq(&before, &shared.load()));
    }

    #[tokio::test]
    async fn test_duplicate_ids_are_rejected() {
        let temp = seeded_dir().await;
        let original = temp.path().join("condition-acute-kidney-injury.json");
        tokio::fs::copy(&original, temp.path().join("copy.json"))
            .await
            .unwrap();

        let shared = Arc::new(SharedCorpus::default());
        let watcher = ContentWatcher::new(WatcherConfig::new(temp.path()), Arc::clone(&shared));

        let outcome = watcher.reload(None).await.unwrap();
        assert!(matches!(outcome, ReloadOutcome::Rejected { .. }));
        assert!(shared.load().is_empty());
    }

    #[tokio::test]
    async fn test_watch_reloads_on_change_and_stops() {
        let temp = seeded_dir().await;
        let config = WatcherConfig {
            content_dir: temp.path().to_path_buf(),
            debounce_ms: 50,
        };
        let watcher = ContentWatcher::new(config, Arc::new(SharedCorpus::default()));
        let (mut events, handle) = watcher.watch().await.unwrap();
        let seeded = content::entries().len();

        let initial = events.recv().await.unwrap();
        assert!(matches!(initial, ReloadOutcome::Swapped { entries, .. } if entries == seeded));

        let extra = content::nephrology::acute_kidney_injury();
        let extra = EducationalContent {
            id: "condition-acute-kidney-injury-copy".to_string(),
            ..extra
        };
        write_entries(temp.path(), [&extra], ContentFormat::Json)
            .await
            .unwrap();

        // a burst may land mid-write and be rejected before the final swap
        let swapped = loop {
            let next = tokio::time::timeout(Duration::from_secs(10), events.recv())
                .await
                .expect("no reload after change")
                .unwrap();
            if let ReloadOutcome::Swapped { entries, .. } = next {
                break entries;
            }
        };
        assert_eq!(swapped, seeded + 1);
        assert_eq!(watcher.shared().load().count(), seeded + 1);

        tokio::time::timeout(Duration::from_secs(5), handle.stop())
            .await
            .expect("watcher did not stop")
            .unwrap();
    }

    #[tokio::test]
    async fn test_digest_changes_with_content() {
        let temp = seeded_dir().await;
        let before = content_digest(temp.path()).await.unwrap();
        assert_eq!(before.len(), 64);

        tokio::fs::write(temp.path().join("notes.md"), "ignored").await.unwrap();
        assert_eq!(content_digest(temp.path()).await.unwrap(), before);

        tokio::fs::write(temp.path().join("extra.yaml"), "id: x").await.unwrap();
        assert_ne!(content_digest(temp.path()).await.unwrap(), before);
    }
}
