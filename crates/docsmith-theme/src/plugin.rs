//! Theme plugins and the app enhancement hook.

use serde::Serialize;

/// A client-side component registered by a plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientComponent {
    /// Component name usable in page layouts
    pub name: String,
    /// Module that defines the component
    pub module: String,
}

/// The client app being wired, mutated by each plugin's hook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct App {
    stylesheets: Vec<String>,
    components: Vec<ClientComponent>,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stylesheet. Re-adding the same path is a no-op.
    pub fn use_stylesheet(&mut self, href: impl Into<String>) -> &mut Self {
        let href = href.into();
        if !self.stylesheets.contains(&href) {
            self.stylesheets.push(href);
        }
        self
    }

    /// Register a client component. A later registration with the same name
    /// replaces the earlier one.
    pub fn component(&mut self, name: impl Into<String>, module: impl Into<String>) -> &mut Self {
        let component = ClientComponent {
            name: name.into(),
            module: module.into(),
        };

        match self.components.iter_mut().find(|c| c.name == component.name) {
            Some(existing) => *existing = component,
            None => self.components.push(component),
        }
        self
    }

    pub fn stylesheets(&self) -> &[String] {
        &self.stylesheets
    }

    pub fn components(&self) -> &[ClientComponent] {
        &self.components
    }
}

/// A plugin that enhances the client app of a theme.
pub trait ThemePlugin: Send + Sync {
    /// Name used in `theme.plugins`
    fn name(&self) -> &'static str;

    /// Enhance the app: register stylesheets and components.
    fn enhance_app(&self, app: &mut App);
}

/// Shows the git history of each page below its content.
///
/// Only wires the client side; the changelog data itself is produced by
/// the site generator's build step.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitChangelogPlugin;

impl GitChangelogPlugin {
    pub const NAME: &'static str = "git-changelog";
    pub const MODULE: &'static str = "/assets/plugins/git-changelog.js";
    pub const STYLESHEET: &'static str = "/assets/plugins/git-changelog.css";
}

impl ThemePlugin for GitChangelogPlugin {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn enhance_app(&self, app: &mut App) {
        app.use_stylesheet(Self::STYLESHEET)
            .component("GitChangelog", Self::MODULE)
            .component("GitChangelogMarkdownSection", Self::MODULE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn git_changelog_registers_style_and_components() {
        let mut app = App::new();

        GitChangelogPlugin.enhance_app(&mut app);

        assert_eq!(app.stylesheets(), [GitChangelogPlugin::STYLESHEET.to_string()]);
        let names: Vec<&str> = app.components().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["GitChangelog", "GitChangelogMarkdownSection"]);
    }

    #[test]
    fn enhancing_twice_does_not_duplicate() {
        let mut app = App::new();

        GitChangelogPlugin.enhance_app(&mut app);
        GitChangelogPlugin.enhance_app(&mut app);

        assert_eq!(app.stylesheets().len(), 1);
        assert_eq!(app.components().len(), 2);
    }

    #[test]
    fn later_component_registration_wins() {
        let mut app = App::new();

        app.component("Badge", "/a.js").component("Badge", "/b.js");

        assert_eq!(
            app.components(),
            [ClientComponent {
                name: "Badge".to_string(),
                module: "/b.js".to_string(),
            }]
        );
    }
}
