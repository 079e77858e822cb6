//! Initialize a documentation site config.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Write the starter config and pages. Existing files are kept unless `yes`.
pub fn scaffold(config_path: &Path, docs_dir: &Path, yes: bool) -> Result<()> {
    // Check if docs already exists
    if docs_dir.exists() {
        if !yes {
            tracing::warn!(
                "{} already exists. Use --yes to overwrite.",
                docs_dir.display()
            );
            return Ok(());
        }
    } else {
        fs::create_dir_all(docs_dir).context("Failed to create docs directory")?;
    }

    if !config_path.exists() || yes {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        fs::write(config_path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        tracing::info!("Created {}", config_path.display());
    }

    let pages = [
        ("index.md", DEFAULT_INDEX),
        ("guide/getting-started.md", DEFAULT_GETTING_STARTED),
        ("guide/configuration.md", DEFAULT_CONFIGURATION),
    ];

    for (relative, content) in pages {
        let path = docs_dir.join(relative);
        if path.exists() && !yes {
            continue;
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, content).with_context(|| format!("Failed to write {}", relative))?;
        tracing::info!("Created {}", path.display());
    }

    Ok(())
}

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing docsmith...");

    scaffold(config_path, Path::new("docs"), yes)?;

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'docsmith check --docs docs' to validate the site.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# docsmith site configuration

title = "My Documentation"
description = "Documentation for my project"

# Emit /page instead of /page.html
cleanUrls = true

# local | algolia
searchProvider = "local"

head = [["link", { rel = "icon", href = "/favicon.ico" }]]

[[nav]]
label = "Home"
target = "/"

[[nav]]
label = "Guide"
target = "/guide/getting-started"

[[sidebar]]
heading = "Guide"
items = [
  { label = "Getting Started", target = "/guide/getting-started" },
  { label = "Configuration", target = "/guide/configuration" },
]

[[socialLinks]]
icon = "github"
url = "https://github.com/your-org/your-project"

[theme]
extends = "default"
plugins = ["git-changelog"]
"#;

const DEFAULT_INDEX: &str = r#"# Welcome

This is your documentation site.

Start with the [Getting Started](/guide/getting-started) guide.
"#;

const DEFAULT_GETTING_STARTED: &str = r#"# Getting Started

Edit `docs.toml` to change the navigation and sidebar, then run:

```bash
docsmith check --docs docs
```
"#;

const DEFAULT_CONFIGURATION: &str = r#"# Configuration

Every nav and sidebar target must be an absolute URL or a site path
starting with `/`. Labels must be unique within a menu.

Print the normalized config with:

```bash
docsmith resolve --format json
```
"#;
