//! Config validation command.

use std::path::Path;

use anyhow::{Context, Result};
use docsmith_config::{PageIndex, SiteConfig};
use docsmith_theme::{Theme, ThemeRegistry};

use super::load_site;

/// Validate the config, its theme wiring and, with `docs`, its site links.
///
/// Dead links fail the check when `strict` is set, otherwise they are
/// only reported.
pub fn check(config_path: &Path, docs: Option<&Path>, strict: bool) -> Result<SiteConfig> {
    let config = load_site(config_path)?;

    Theme::wire(&config, &ThemeRegistry::builtin())?;

    if let Some(docs) = docs {
        let index = PageIndex::scan(docs)?;
        let dead_links = index.find_dead_links(&config);

        for link in &dead_links {
            if strict {
                tracing::error!("{}: no page for `{}`", link.field, link.target);
            } else {
                tracing::warn!("{}: no page for `{}`", link.field, link.target);
            }
        }

        if strict && !dead_links.is_empty() {
            anyhow::bail!(
                "{} dead link(s) against {} ({} pages)",
                dead_links.len(),
                docs.display(),
                index.len()
            );
        }
    }

    let entries: usize = config.sidebar.iter().map(|g| g.items.len()).sum();
    tracing::info!(
        "{} is valid: {} nav entries, {} sidebar groups ({} links)",
        config_path.display(),
        config.nav.len(),
        config.sidebar.len(),
        entries
    );

    Ok(config)
}

/// Run the check command.
pub async fn run(config_path: &Path, docs: Option<&Path>, strict: bool) -> Result<()> {
    check(config_path, docs, strict)
        .with_context(|| format!("Check failed for {}", config_path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const CONFIG: &str = r#"
title = "Doc"
description = "Docs"

[[nav]]
label = "Home"
target = "/"

[[sidebar]]
heading = "Start"
items = [{ label = "About", target = "/start/about" }]
"#;

    #[test]
    fn passes_valid_config() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("docs.toml");
        fs::write(&path, CONFIG).unwrap();

        let config = check(&path, None, true).unwrap();

        assert_eq!(config.title, "Doc");
    }

    #[test]
    fn fails_invalid_config() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("docs.toml");
        fs::write(&path, "title = \"Doc\"\nnav = [{ label = \"Home\", target = \"home\" }]\n")
            .unwrap();

        let err = check(&path, None, true).unwrap_err();

        assert!(err.to_string().contains("2 configuration error(s)"));
    }

    #[test]
    fn dead_links_fail_only_when_strict() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("docs.toml");
        let docs = temp.path().join("docs");
        fs::create_dir_all(&docs).unwrap();
        fs::write(docs.join("index.md"), "# Home").unwrap();
        fs::write(&path, CONFIG).unwrap();

        assert!(check(&path, Some(docs.as_path()), true).is_err());
        assert!(check(&path, Some(docs.as_path()), false).is_ok());

        fs::create_dir_all(docs.join("start")).unwrap();
        fs::write(docs.join("start/about.md"), "# About").unwrap();

        assert!(check(&path, Some(docs.as_path()), true).is_ok());
    }

    #[test]
    fn fails_unknown_plugin() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("docs.toml");
        fs::write(
            &path,
            format!("{}\n[theme]\nplugins = [\"comments\"]\n", CONFIG),
        )
        .unwrap();

        assert!(check(&path, None, true).is_err());
    }
}
