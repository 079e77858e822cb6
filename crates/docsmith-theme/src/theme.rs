//! Theme wiring.

use docsmith_config::{LinkTarget, NavEntry, SiteConfig};
use serde::Serialize;

use crate::plugin::{App, ClientComponent};
use crate::registry::ThemeRegistry;
use crate::templates::{Context, HeadItem, LinkItem, SidebarSection, SocialItem, TemplateEngine};

/// Errors that can occur while wiring or rendering a theme.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("Unknown theme '{0}' in theme.extends")]
    UnknownTheme(String),

    #[error("Unknown plugin '{name}' in theme.plugins (available: {available})")]
    UnknownPlugin { name: String, available: String },

    #[error("Failed to render template: {0}")]
    TemplateError(String),
}

/// Summary of a wired theme, for the site generator's client bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeManifest {
    pub theme: String,
    pub plugins: Vec<String>,
    pub stylesheets: Vec<String>,
    pub components: Vec<ClientComponent>,
}

/// A base theme with its plugins applied.
pub struct Theme {
    name: String,
    plugins: Vec<String>,
    app: App,
    templates: TemplateEngine,
}

impl Theme {
    /// Wire the theme named by `config.theme`.
    ///
    /// The base theme's stylesheets come first, then each plugin's
    /// `enhance_app` hook runs in declaration order.
    pub fn wire(config: &SiteConfig, registry: &ThemeRegistry) -> Result<Self, ThemeError> {
        let options = &config.theme;

        let base = registry
            .theme(&options.extends)
            .ok_or_else(|| ThemeError::UnknownTheme(options.extends.clone()))?;

        let mut app = App::new();
        for style in &base.stylesheets {
            app.use_stylesheet(style.clone());
        }

        for name in &options.plugins {
            let plugin = registry
                .plugin(name)
                .ok_or_else(|| ThemeError::UnknownPlugin {
                    name: name.clone(),
                    available: registry.plugin_names().join(", "),
                })?;

            plugin.enhance_app(&mut app);
            tracing::debug!("Applied theme plugin {}", name);
        }

        tracing::info!(
            "Wired theme '{}' with {} plugin(s)",
            base.name,
            options.plugins.len()
        );

        Ok(Self {
            name: base.name.clone(),
            plugins: options.plugins.clone(),
            app,
            templates: TemplateEngine::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    /// Describe the wired theme.
    pub fn manifest(&self) -> ThemeManifest {
        ThemeManifest {
            theme: self.name.clone(),
            plugins: self.plugins.clone(),
            stylesheets: self.app.stylesheets().to_vec(),
            components: self.app.components().to_vec(),
        }
    }

    /// Render the HTML layout shell for `config`.
    ///
    /// Page content is left as a `<!--content-->` marker for the site
    /// generator to fill in.
    pub fn render_layout(&self, config: &SiteConfig) -> Result<String, ThemeError> {
        let link = |entry: &NavEntry| LinkItem {
            label: entry.label.clone(),
            href: href(config, &entry.target),
            external: LinkTarget::classify(&entry.target).is_some_and(|t| t.is_external()),
        };

        let mut modules: Vec<String> = Vec::new();
        for component in self.app.components() {
            if !modules.contains(&component.module) {
                modules.push(component.module.clone());
            }
        }

        let context = Context {
            lang: config.lang.clone(),
            site_title: config.title.clone(),
            description: config.description.clone(),
            base_url: config.base.clone(),
            head: config
                .head
                .iter()
                .map(|tag| HeadItem {
                    tag: tag.tag.clone(),
                    attrs: tag.attrs.clone(),
                    content: tag.content.clone(),
                    void: tag.is_void(),
                })
                .collect(),
            nav: config.nav.iter().map(link).collect(),
            sidebar: config
                .sidebar
                .iter()
                .map(|group| SidebarSection {
                    heading: group.heading.clone(),
                    items: group.items.iter().map(link).collect(),
                })
                .collect(),
            social_links: config
                .social_links
                .iter()
                .map(|s| SocialItem {
                    icon: s.icon.clone(),
                    url: s.url.clone(),
                })
                .collect(),
            styles: self
                .app
                .stylesheets()
                .iter()
                .map(|s| href(config, s))
                .collect(),
            modules: modules.iter().map(|m| href(config, m)).collect(),
            search_provider: config.search_provider.as_str().to_string(),
            edit_link_pattern: config.edit_link_pattern.clone(),
            last_updated_label: config.last_updated_label.clone(),
        };

        self.templates
            .render_layout(&context)
            .map_err(|e: minijinja::Error| ThemeError::TemplateError(e.to_string()))
    }
}

/// Turn a link target into the href emitted in the layout.
///
/// Site paths are prefixed with the deployment base; without clean URLs,
/// page paths get an `.html` suffix. Absolute URLs pass through.
pub fn href(config: &SiteConfig, target: &str) -> String {
    let Some(LinkTarget::Internal(path)) = LinkTarget::classify(target) else {
        return target.to_string();
    };

    let split = path.find(['#', '?']).unwrap_or(path.len());
    let (route, suffix) = path.split_at(split);

    let needs_html = !config.clean_urls
        && !route.ends_with('/')
        && !route.rsplit('/').next().is_some_and(|last| last.contains('.'));

    format!(
        "{}{}{}{}",
        config.base.trim_end_matches('/'),
        route,
        if needs_html { ".html" } else { "" },
        suffix
    )
}
