//! Config file loading.
//!
//! A config file may name a base revision with `extends`; the chain is
//! followed to its root and each revision layered over the previous one.

use std::fs;
use std::path::{Path, PathBuf};

use crate::raw::RawSiteConfig;

/// Supported config file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Some(Self::Toml),
            Some("yaml") | Some("yml") => Some(Self::Yaml),
            Some("json") => Some(Self::Json),
            _ => None,
        }
    }
}

/// Errors that can occur when loading a config file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported config format: {0} (expected .toml, .yaml, .yml or .json)")]
    UnsupportedFormat(PathBuf),

    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Config extends cycle: {}", format_chain(.0))]
    ExtendsCycle(Vec<PathBuf>),
}

fn format_chain(chain: &[PathBuf]) -> String {
    chain
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Parse a raw configuration from a string.
pub fn parse_str(content: &str, format: ConfigFormat) -> Result<RawSiteConfig, String> {
    match format {
        ConfigFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        ConfigFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
    }
}

/// Load a config file, following its `extends` chain.
///
/// The returned config has every revision merged and `extends` cleared.
pub fn load(path: &Path) -> Result<RawSiteConfig, LoadError> {
    load_with_sources(path).map(|(raw, _)| raw)
}

/// Load a config file like [`load`], also returning the canonical path of
/// every file in its `extends` chain, starting with `path` itself.
pub fn load_with_sources(path: &Path) -> Result<(RawSiteConfig, Vec<PathBuf>), LoadError> {
    let mut chain = Vec::new();
    let raw = load_revision(path, &mut chain)?;
    Ok((raw, chain))
}

fn load_revision(path: &Path, chain: &mut Vec<PathBuf>) -> Result<RawSiteConfig, LoadError> {
    let format =
        ConfigFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat(path.into()))?;

    let canonical = fs::canonicalize(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if chain.contains(&canonical) {
        chain.push(canonical);
        return Err(LoadError::ExtendsCycle(chain.clone()));
    }
    chain.push(canonical);

    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let raw = parse_str(&content, format).map_err(|message| LoadError::Parse {
        path: path.to_path_buf(),
        message,
    })?;

    tracing::debug!("Loaded config revision {}", path.display());

    let Some(extends) = raw.extends.clone() else {
        return Ok(raw);
    };

    let base_path = path.parent().unwrap_or(Path::new("")).join(&extends);
    let base = load_revision(&base_path, chain)?;

    Ok(base.merge(RawSiteConfig {
        extends: None,
        ..raw
    }))
}
