//! Template engine for rendering the site layout shell.

use std::collections::BTreeMap;

use minijinja::{context, Environment};

/// A link in the nav bar or sidebar, with its final href.
#[derive(Debug, Clone, serde::Serialize)]
pub struct LinkItem {
    /// Display label
    pub label: String,
    /// Resolved href
    pub href: String,
    /// Open in a new tab
    pub external: bool,
}

/// A sidebar group.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SidebarSection {
    pub heading: String,
    pub items: Vec<LinkItem>,
}

/// A head tag ready for rendering.
#[derive(Debug, Clone, serde::Serialize)]
pub struct HeadItem {
    pub tag: String,
    pub attrs: BTreeMap<String, String>,
    pub content: Option<String>,
    pub void: bool,
}

/// A social icon link.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SocialItem {
    pub icon: String,
    pub url: String,
}

/// Context for rendering the layout template.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Context {
    /// Document language
    pub lang: String,
    /// Site title
    pub site_title: String,
    /// Site description
    pub description: String,
    /// Base URL
    pub base_url: String,
    /// Extra head tags
    pub head: Vec<HeadItem>,
    /// Nav bar links
    pub nav: Vec<LinkItem>,
    /// Sidebar groups
    pub sidebar: Vec<SidebarSection>,
    /// Social icons
    pub social_links: Vec<SocialItem>,
    /// Stylesheets from the theme and its plugins
    pub styles: Vec<String>,
    /// Client component modules to load
    pub modules: Vec<String>,
    /// Search backend name
    pub search_provider: String,
    /// Edit link pattern, if configured
    pub edit_link_pattern: Option<String>,
    /// Last-updated label, if configured
    pub last_updated_label: Option<String>,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the layout templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("layout.html".to_string(), LAYOUT_TEMPLATE.to_string())
            .expect("Failed to add layout template");

        env.add_template_owned("head.html".to_string(), HEAD_TEMPLATE.to_string())
            .expect("Failed to add head template");

        env.add_template_owned("nav.html".to_string(), NAV_TEMPLATE.to_string())
            .expect("Failed to add nav template");

        env.add_template_owned("sidebar.html".to_string(), SIDEBAR_TEMPLATE.to_string())
            .expect("Failed to add sidebar template");

        Self { env }
    }

    /// Render the layout shell.
    pub fn render_layout(&self, context: &Context) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("layout.html")?;

        tmpl.render(context! {
            lang => &context.lang,
            site_title => &context.site_title,
            description => &context.description,
            base_url => &context.base_url,
            head => &context.head,
            nav => &context.nav,
            sidebar => &context.sidebar,
            social_links => &context.social_links,
            styles => &context.styles,
            modules => &context.modules,
            search_provider => &context.search_provider,
            edit_link_pattern => &context.edit_link_pattern,
            last_updated_label => &context.last_updated_label,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const LAYOUT_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="{{ lang }}">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ site_title }}</title>
  <meta name="description" content="{{ description }}">
  {% for style in styles %}<link rel="stylesheet" href="{{ style }}">
  {% endfor %}{% include "head.html" %}
</head>
<body data-search="{{ search_provider }}">
  <div class="layout">
    <header class="navbar">
      {% include "nav.html" %}
    </header>
    <nav class="sidebar">
      {% include "sidebar.html" %}
    </nav>
    <main class="main">
      <!--content-->
      {% if edit_link_pattern or last_updated_label %}
      <footer class="doc-footer"{% if edit_link_pattern %} data-edit-link="{{ edit_link_pattern }}"{% endif %}{% if last_updated_label %} data-last-updated-label="{{ last_updated_label }}"{% endif %}></footer>
      {% endif %}
    </main>
  </div>
  {% for module in modules %}<script type="module" src="{{ module }}"></script>
  {% endfor %}
</body>
</html>"##;

const HEAD_TEMPLATE: &str = r##"{% for item in head %}<{{ item.tag }}{% for name, value in item.attrs|items %} {{ name }}="{{ value }}"{% endfor %}>{% if not item.void %}{% if item.content %}{{ item.content | safe }}{% endif %}</{{ item.tag }}>{% endif %}
  {% endfor %}"##;

const NAV_TEMPLATE: &str = r##"<a href="{{ base_url }}" class="nav-logo">{{ site_title }}</a>
<ul class="nav-list">
{% for item in nav %}
  <li class="nav-item"><a href="{{ item.href }}"{% if item.external %} target="_blank" rel="noreferrer"{% endif %}>{{ item.label }}</a></li>
{% endfor %}
</ul>
{% if social_links %}
<ul class="social-links">
{% for link in social_links %}
  <li><a href="{{ link.url }}" class="social-{{ link.icon }}" aria-label="{{ link.icon }}" target="_blank" rel="noreferrer"></a></li>
{% endfor %}
</ul>
{% endif %}"##;

const SIDEBAR_TEMPLATE: &str = r##"{% for section in sidebar %}
<section class="sidebar-group">
  <h2>{{ section.heading }}</h2>
  <ul>
  {% for item in section.items %}
    <li><a href="{{ item.href }}"{% if item.external %} target="_blank" rel="noreferrer"{% endif %}>{{ item.label }}</a></li>
  {% endfor %}
  </ul>
</section>
{% endfor %}"##;
