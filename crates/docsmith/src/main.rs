//! docsmith CLI - documentation site configuration resolver.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod watcher;

use commands::resolve::OutputFormat;

#[derive(Parser)]
#[command(name = "docsmith")]
#[command(about = "Resolve and validate documentation site configuration")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the site config file (.toml, .yaml, .yml or .json)
    #[arg(short, long, default_value = "docs.toml", global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter config and docs directory
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Validate the config and report every problem
    Check {
        /// Docs source directory to check site links against
        #[arg(short, long)]
        docs: Option<PathBuf>,

        /// Report dead links as warnings instead of failing
        #[arg(long)]
        ignore_dead_links: bool,
    },

    /// Print the normalized config
    Resolve {
        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render the theme layout shell and manifest
    Layout {
        /// Output directory
        #[arg(short, long, default_value = "dist")]
        output: PathBuf,
    },

    /// Re-check the config whenever it or the docs change
    Watch {
        /// Docs source directory to watch and check links against
        #[arg(short, long)]
        docs: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes).await?;
        }
        Commands::Check {
            docs,
            ignore_dead_links,
        } => {
            commands::check::run(&cli.config, docs.as_deref(), !ignore_dead_links).await?;
        }
        Commands::Resolve { format, output } => {
            commands::resolve::run(&cli.config, format, output.as_deref()).await?;
        }
        Commands::Layout { output } => {
            commands::layout::run(&cli.config, &output).await?;
        }
        Commands::Watch { docs } => {
            commands::watch::run(&cli.config, docs).await?;
        }
    }

    Ok(())
}
