//! Page index for dead-link detection.
//!
//! Scans the docs source directory for markdown pages and checks that every
//! site-relative nav and sidebar target lands on one of them.

use std::collections::BTreeSet;
use std::path::{Component, Path};

use walkdir::WalkDir;

use crate::link::{route_path, LinkTarget};
use crate::model::SiteConfig;

/// Routes of the markdown pages in a docs directory.
#[derive(Debug, Default, Clone)]
pub struct PageIndex {
    routes: BTreeSet<String>,
}

/// A site-relative target with no page behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadLink {
    /// Path of the config field holding the target
    pub field: String,
    /// The unresolved target
    pub target: String,
}

/// Errors that can occur when scanning pages.
#[derive(Debug, thiserror::Error)]
pub enum PageIndexError {
    #[error("Docs directory not found: {0}")]
    DirectoryNotFound(String),
}

impl PageIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan a docs directory for `.md` pages.
    pub fn scan(docs_dir: &Path) -> Result<Self, PageIndexError> {
        if !docs_dir.exists() {
            return Err(PageIndexError::DirectoryNotFound(
                docs_dir.display().to_string(),
            ));
        }

        let mut index = Self::new();

        for entry in WalkDir::new(docs_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("md") {
                continue;
            }

            // Skip dot-directories such as the generator's own config dir
            let relative = path.strip_prefix(docs_dir).unwrap_or(path);
            if relative.components().any(|c| match c {
                Component::Normal(name) => name.to_string_lossy().starts_with('.'),
                _ => false,
            }) {
                continue;
            }

            index.insert_page(relative);
        }

        tracing::debug!(
            "Indexed {} pages in {}",
            index.routes.len(),
            docs_dir.display()
        );

        Ok(index)
    }

    /// Register a page by its path relative to the docs directory.
    ///
    /// `index.md` maps to its directory route (`/`, `/guide/`), any other
    /// page to its extension-less path (`/guide/setup`).
    pub fn insert_page(&mut self, relative: &Path) {
        let mut segments: Vec<String> = relative
            .with_extension("")
            .components()
            .filter_map(|c| match c {
                Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();

        let route = if segments.last().map(String::as_str) == Some("index") {
            segments.pop();
            if segments.is_empty() {
                "/".to_string()
            } else {
                format!("/{}/", segments.join("/"))
            }
        } else {
            format!("/{}", segments.join("/"))
        };

        self.routes.insert(route);
    }

    /// Number of indexed pages.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Check whether a site path resolves to an indexed page.
    ///
    /// Fragments and queries are ignored, as is a trailing `.html`. A path
    /// without a trailing slash also matches a directory index.
    pub fn contains(&self, target: &str) -> bool {
        let path = route_path(target);
        let path = path.strip_suffix(".html").unwrap_or(path);
        let path = match path.strip_suffix("index") {
            Some(dir) if dir.ends_with('/') => dir,
            _ => path,
        };

        if self.routes.contains(path) {
            return true;
        }

        match path.strip_suffix('/') {
            Some("") => false,
            Some(stripped) => self.routes.contains(stripped),
            None => self.routes.contains(&format!("{}/", path)),
        }
    }

    /// Find site-relative nav and sidebar targets with no page.
    ///
    /// Absolute URLs are never checked.
    pub fn find_dead_links(&self, config: &SiteConfig) -> Vec<DeadLink> {
        config
            .links()
            .filter_map(|(field, entry)| match LinkTarget::classify(&entry.target) {
                Some(LinkTarget::Internal(target)) if !self.contains(target) => Some(DeadLink {
                    field: format!("{}.target", field),
                    target: entry.target.clone(),
                }),
                _ => None,
            })
            .collect()
    }
}
