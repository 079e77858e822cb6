//! Normalized site configuration consumed by the site generator.

use std::collections::BTreeMap;

use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};

/// Normalized, validated site configuration.
///
/// Built once by [`crate::resolve`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Site title
    pub title: String,

    /// Site description (used for the default meta description)
    pub description: String,

    /// Document language, e.g. "en-US"
    pub lang: String,

    /// Base path the site is deployed under, always `/`-delimited
    pub base: String,

    /// Emit `/page` instead of `/page.html`
    pub clean_urls: bool,

    /// Top navigation, in render order
    pub nav: Vec<NavEntry>,

    /// Sidebar groups, in render order
    pub sidebar: Vec<SidebarGroup>,

    /// Social icons shown in the nav bar
    pub social_links: Vec<SocialLink>,

    /// Extra tags injected into `<head>`
    pub head: Vec<HeadTag>,

    /// Search backend
    pub search_provider: SearchProvider,

    /// Algolia credentials, present only when `search_provider` is Algolia
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algolia: Option<AlgoliaOptions>,

    /// Edit link pattern containing a `:path` placeholder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_link_pattern: Option<String>,

    /// Label shown next to the last-updated timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_label: Option<String>,

    /// Theme wiring
    pub theme: ThemeOptions,
}

/// A single navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub label: String,
    pub target: String,
}

/// A named, ordered group of links in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarGroup {
    pub heading: String,
    pub items: Vec<NavEntry>,
}

/// An icon link to an external profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub icon: String,
    pub url: String,
}

/// A tag injected into the page `<head>`.
///
/// Serialized in the tuple form `[tag, attrs]` or `[tag, attrs, content]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadTag {
    pub tag: String,
    pub attrs: BTreeMap<String, String>,
    pub content: Option<String>,
}

impl HeadTag {
    /// Tags that never carry inner content.
    pub const VOID_TAGS: &'static [&'static str] = &["base", "link", "meta"];

    /// Whether this tag is a void element.
    pub fn is_void(&self) -> bool {
        Self::VOID_TAGS.contains(&self.tag.to_ascii_lowercase().as_str())
    }
}

impl Serialize for HeadTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.content.is_some() { 3 } else { 2 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.tag)?;
        seq.serialize_element(&self.attrs)?;
        if let Some(content) = &self.content {
            seq.serialize_element(content)?;
        }
        seq.end()
    }
}

/// Search backend used by the generated site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    /// In-browser index built by the site generator
    #[default]
    Local,
    /// Hosted Algolia DocSearch
    Algolia,
}

impl SearchProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Algolia => "algolia",
        }
    }
}

/// Credentials for the Algolia search provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AlgoliaOptions {
    #[serde(default, alias = "app_id")]
    pub app_id: String,
    #[serde(default, alias = "api_key")]
    pub api_key: String,
    #[serde(default, alias = "index_name")]
    pub index_name: String,
}

/// Which theme to extend and which plugins enhance it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeOptions {
    pub extends: String,
    pub plugins: Vec<String>,
}

impl ThemeOptions {
    pub const DEFAULT_THEME: &'static str = "default";
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            extends: Self::DEFAULT_THEME.to_string(),
            plugins: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Iterate every navigation link with its field path, nav first, then sidebar.
    pub fn links(&self) -> impl Iterator<Item = (String, &NavEntry)> {
        let nav = self
            .nav
            .iter()
            .enumerate()
            .map(|(i, entry)| (format!("nav[{}]", i), entry));

        let sidebar = self.sidebar.iter().enumerate().flat_map(|(g, group)| {
            group
                .items
                .iter()
                .enumerate()
                .map(move |(i, entry)| (format!("sidebar[{}].items[{}]", g, i), entry))
        });

        nav.chain(sidebar)
    }
}
