//! Theme wiring for docsmith documentation sites.
//!
//! Resolves the theme a site extends, runs each configured plugin's
//! enhancement hook and renders the layout shell around page content.

pub mod plugin;
pub mod registry;
pub mod templates;
pub mod theme;

pub use plugin::{App, ClientComponent, GitChangelogPlugin, ThemePlugin};
pub use registry::{ThemeDefinition, ThemeRegistry};
pub use templates::TemplateEngine;
pub use theme::{href, Theme, ThemeError, ThemeManifest};
