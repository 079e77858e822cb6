//! Registry of available themes and plugins.

use std::collections::HashMap;
use std::sync::Arc;

use crate::plugin::{GitChangelogPlugin, ThemePlugin};

/// A base theme that site configs can extend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeDefinition {
    /// Name used in `theme.extends`
    pub name: String,
    /// Stylesheets every page of the theme loads
    pub stylesheets: Vec<String>,
}

impl ThemeDefinition {
    /// The built-in default theme.
    pub fn default_theme() -> Self {
        Self {
            name: "default".to_string(),
            stylesheets: vec!["/assets/theme/default.css".to_string()],
        }
    }
}

/// Themes and plugins looked up by name.
#[derive(Default)]
pub struct ThemeRegistry {
    themes: HashMap<String, ThemeDefinition>,
    plugins: HashMap<String, Arc<dyn ThemePlugin>>,
}

impl ThemeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in default theme and plugins.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register_theme(ThemeDefinition::default_theme());
        registry.register_plugin(GitChangelogPlugin);
        registry
    }

    pub fn register_theme(&mut self, theme: ThemeDefinition) {
        self.themes.insert(theme.name.clone(), theme);
    }

    pub fn register_plugin(&mut self, plugin: impl ThemePlugin + 'static) {
        self.plugins
            .insert(plugin.name().to_string(), Arc::new(plugin));
    }

    pub fn theme(&self, name: &str) -> Option<&ThemeDefinition> {
        self.themes.get(name)
    }

    pub fn plugin(&self, name: &str) -> Option<Arc<dyn ThemePlugin>> {
        self.plugins.get(name).cloned()
    }

    /// Registered plugin names, sorted.
    pub fn plugin_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.plugins.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::App;

    struct NoopPlugin;

    impl ThemePlugin for NoopPlugin {
        fn name(&self) -> &'static str {
            "noop"
        }

        fn enhance_app(&self, _app: &mut App) {}
    }

    #[test]
    fn builtin_has_default_theme_and_changelog() {
        let registry = ThemeRegistry::builtin();

        assert!(registry.theme("default").is_some());
        assert!(registry.plugin("git-changelog").is_some());
        assert!(registry.plugin("missing").is_none());
    }

    #[test]
    fn lists_plugin_names_sorted() {
        let mut registry = ThemeRegistry::builtin();
        registry.register_plugin(NoopPlugin);

        assert_eq!(registry.plugin_names(), vec!["git-changelog", "noop"]);
    }
}
