//! File watching for `docsmith watch`.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc as async_mpsc;

/// Events emitted by the file watcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    /// A config file was created or modified
    ConfigChanged(PathBuf),

    /// A markdown page was created, modified or removed
    PageChanged(PathBuf),
}

/// File watcher for the config files and docs directory.
pub struct FileWatcher {
    watcher: RecommendedWatcher,
    config_dirs: HashSet<PathBuf>,
}

impl FileWatcher {
    /// Watch the directory holding each of `config_files` (non-recursively)
    /// and, if given, `docs_dir` recursively.
    ///
    /// Returns the watcher and a channel to receive events.
    pub fn new(
        config_files: &[PathBuf],
        docs_dir: Option<&Path>,
    ) -> Result<(Self, async_mpsc::Receiver<WatchEvent>), std::io::Error> {
        let (sync_tx, sync_rx) = mpsc::channel();
        let (async_tx, async_rx) = async_mpsc::channel(100);

        let watcher = notify::recommended_watcher(move |res: Result<notify::Event, _>| {
            if let Ok(event) = res {
                let _ = sync_tx.send(event);
            }
        })
        .map_err(std::io::Error::other)?;

        let mut file_watcher = Self {
            watcher,
            config_dirs: HashSet::new(),
        };
        file_watcher.watch_config_files(config_files)?;

        if let Some(docs) = docs_dir {
            if docs.exists() {
                file_watcher
                    .watcher
                    .watch(docs, RecursiveMode::Recursive)
                    .map_err(std::io::Error::other)?;
            }
        }

        std::thread::spawn(move || debounce(sync_rx, async_tx, DEBOUNCE));

        Ok((file_watcher, async_rx))
    }

    /// Start watching the directories of any config files not yet covered.
    pub fn watch_config_files(&mut self, config_files: &[PathBuf]) -> Result<(), std::io::Error> {
        for file in config_files {
            // Editors often replace files on save, so watch the parent directory
            let dir = match file.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            };
            if self.config_dirs.contains(&dir) {
                continue;
            }

            self.watcher
                .watch(&dir, RecursiveMode::NonRecursive)
                .map_err(std::io::Error::other)?;
            tracing::debug!("Watching {}", dir.display());
            self.config_dirs.insert(dir);
        }
        Ok(())
    }
}

/// Quiet period before pending events are delivered.
const DEBOUNCE: Duration = Duration::from_millis(100);

/// Coalesce raw events and deliver them once no new event arrived for
/// `quiet`. Pending events are flushed when the sender disconnects.
fn debounce(
    rx: mpsc::Receiver<notify::Event>,
    tx: async_mpsc::Sender<WatchEvent>,
    quiet: Duration,
) {
    let mut pending: Vec<WatchEvent> = Vec::new();

    loop {
        let disconnected = match rx.recv_timeout(quiet) {
            Ok(event) => {
                for path in &event.paths {
                    if let Some(e) = classify_event(path, &event.kind) {
                        if !pending.contains(&e) {
                            pending.push(e);
                        }
                    }
                }
                continue;
            }
            Err(RecvTimeoutError::Timeout) => false,
            Err(RecvTimeoutError::Disconnected) => true,
        };

        for event in pending.drain(..) {
            if tx.blocking_send(event).is_err() {
                return;
            }
        }

        if disconnected {
            return;
        }
    }
}

/// Classify a notify event into a WatchEvent.
fn classify_event(path: &Path, kind: &notify::EventKind) -> Option<WatchEvent> {
    use notify::EventKind;

    if !matches!(
        kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    ) {
        return None;
    }

    match path.extension().and_then(|e| e.to_str()) {
        Some("md") => Some(WatchEvent::PageChanged(path.to_path_buf())),
        Some("toml") | Some("yaml") | Some("yml") | Some("json") => {
            Some(WatchEvent::ConfigChanged(path.to_path_buf()))
        }
        _ => None,
    }
}
