//! Layout shell command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use docsmith_config::SiteConfig;
use docsmith_theme::{Theme, ThemeRegistry};

use super::load_site;

/// Files written by the layout command.
#[derive(Debug)]
pub struct LayoutOutput {
    pub layout: PathBuf,
    pub manifest: PathBuf,
}

/// Wire the theme and write `layout.html` and `theme.json` into `output_dir`.
pub fn write_layout(config: &SiteConfig, output_dir: &Path) -> Result<LayoutOutput> {
    let theme = Theme::wire(config, &ThemeRegistry::builtin())?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let layout = output_dir.join("layout.html");
    let html = theme.render_layout(config)?;
    fs::write(&layout, html).with_context(|| format!("Failed to write {}", layout.display()))?;

    let manifest = output_dir.join("theme.json");
    let json = serde_json::to_string_pretty(&theme.manifest())?;
    fs::write(&manifest, json)
        .with_context(|| format!("Failed to write {}", manifest.display()))?;

    Ok(LayoutOutput { layout, manifest })
}

/// Run the layout command.
pub async fn run(config_path: &Path, output_dir: &Path) -> Result<()> {
    let config = load_site(config_path)?;
    let output = write_layout(&config, output_dir)?;

    tracing::info!("Layout: {}", output.layout.display());
    tracing::info!("Theme manifest: {}", output.manifest.display());

    Ok(())
}
