//! Watch command: re-check the config on every change.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use docsmith_config::load_with_sources;

use super::check::check;
use crate::watcher::{FileWatcher, WatchEvent};

/// Run the watch command until interrupted.
pub async fn run(config_path: &Path, docs: Option<PathBuf>) -> Result<()> {
    let docs = docs.as_deref();

    report(config_path, docs);

    let (mut watcher, mut rx) = FileWatcher::new(&config_sources(config_path), docs)
        .context("Failed to start file watcher")?;

    tracing::info!("Watching {} for changes (Ctrl+C to stop)", config_path.display());

    loop {
        tokio::select! {
            event = rx.recv() => {
                let Some(event) = event else {
                    break;
                };

                match &event {
                    WatchEvent::ConfigChanged(path) => {
                        tracing::info!("Config changed: {}", path.display());
                        // The change may have pointed `extends` at a new file
                        if let Err(e) = watcher.watch_config_files(&config_sources(config_path)) {
                            tracing::warn!("Failed to watch extended config: {}", e);
                        }
                    }
                    WatchEvent::PageChanged(path) => {
                        if docs.is_none() {
                            continue;
                        }
                        tracing::info!("Page changed: {}", path.display());
                    }
                }

                report(config_path, docs);
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Stopping watcher");
                break;
            }
        }
    }

    Ok(())
}

/// Every file in the config's `extends` chain, or just the config itself
/// when it cannot be loaded.
fn config_sources(config_path: &Path) -> Vec<PathBuf> {
    match load_with_sources(config_path) {
        Ok((_, sources)) => sources,
        Err(e) => {
            tracing::debug!("Watching {} only: {}", config_path.display(), e);
            vec![config_path.to_path_buf()]
        }
    }
}

/// Run a strict check and log the outcome without stopping the watcher.
fn report(config_path: &Path, docs: Option<&Path>) {
    if let Err(e) = check(config_path, docs, true) {
        tracing::error!("{:#}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn sources_follow_extends_chain() {
        let temp = tempdir().unwrap();
        let shared = temp.path().join("shared");
        fs::create_dir_all(&shared).unwrap();
        fs::write(shared.join("mid.toml"), "description = \"Docs\"\n").unwrap();
        let config_path = temp.path().join("docs.toml");
        fs::write(&config_path, "extends = \"shared/mid.toml\"\ntitle = \"Doc\"\n").unwrap();

        let sources = config_sources(&config_path);

        assert_eq!(sources.len(), 2);
        assert!(sources[1].ends_with("shared/mid.toml"));
    }

    #[test]
    fn sources_fall_back_to_config_when_unloadable() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("docs.toml");

        assert_eq!(config_sources(&config_path), vec![config_path]);
    }
}
