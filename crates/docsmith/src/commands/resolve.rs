//! Normalized config output command.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use docsmith_config::SiteConfig;

use super::load_site;

/// Serialization format for the normalized config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
    Toml,
}

/// Serialize a resolved config.
pub fn render(config: &SiteConfig, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(config)?,
        OutputFormat::Yaml => serde_yaml::to_string(config)?,
        OutputFormat::Toml => toml::to_string_pretty(config)?,
    };
    Ok(rendered)
}

/// Run the resolve command.
pub async fn run(config_path: &Path, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    let config = load_site(config_path)?;
    let rendered = render(&config, format)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote normalized config to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
