pub mod check;
pub mod init;
pub mod layout;
pub mod resolve;
pub mod watch;

use std::path::Path;

use anyhow::{Context, Result};
use docsmith_config::{diagnose, load, SiteConfig};

/// Load and resolve the site config, logging every validation error.
pub fn load_site(config_path: &Path) -> Result<SiteConfig> {
    let raw = load(config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;

    let issues = diagnose(&raw);
    if !issues.is_empty() {
        for issue in &issues {
            tracing::error!("{}", issue);
        }
        anyhow::bail!(
            "{} has {} configuration error(s)",
            config_path.display(),
            issues.len()
        );
    }

    let config = docsmith_config::resolve(&raw)?;
    tracing::debug!("Loaded config from {}", config_path.display());
    Ok(config)
}
