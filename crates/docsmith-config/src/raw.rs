//! Raw configuration as declared in a config file.
//!
//! Every field is optional so that revisions in an `extends` chain can be
//! layered with [`RawSiteConfig::merge`] before resolution.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::model::{AlgoliaOptions, SearchProvider};

/// Site configuration before validation and defaulting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawSiteConfig {
    /// Path of a base revision, relative to the declaring file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,

    #[serde(default, alias = "clean_urls", skip_serializing_if = "Option::is_none")]
    pub clean_urls: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nav: Option<Vec<RawNavEntry>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar: Option<Vec<RawSidebarGroup>>,

    #[serde(default, alias = "social_links", skip_serializing_if = "Option::is_none")]
    pub social_links: Option<Vec<RawSocialLink>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<Vec<RawHeadTag>>,

    #[serde(
        default,
        alias = "search_provider",
        skip_serializing_if = "Option::is_none"
    )]
    pub search_provider: Option<SearchProvider>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algolia: Option<AlgoliaOptions>,

    /// Nested form of `searchProvider` and `algolia`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<RawSearchOptions>,

    #[serde(
        default,
        alias = "edit_link_pattern",
        skip_serializing_if = "Option::is_none"
    )]
    pub edit_link_pattern: Option<String>,

    #[serde(
        default,
        alias = "last_updated_label",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_updated_label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<RawThemeOptions>,
}

/// A navigation link as declared. Accepts `text`/`link` as aliases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawNavEntry {
    #[serde(default, alias = "text")]
    pub label: String,

    #[serde(default, alias = "link")]
    pub target: String,
}

/// A sidebar group as declared. Accepts `text` as an alias for `heading`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSidebarGroup {
    #[serde(default, alias = "text")]
    pub heading: String,

    #[serde(default)]
    pub items: Vec<RawNavEntry>,
}

/// A social link as declared. Accepts `link` as an alias for `url`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSocialLink {
    #[serde(default)]
    pub icon: String,

    #[serde(default, alias = "link")]
    pub url: String,
}

/// A head tag tuple: `[tag, attrs]` or `[tag, attrs, content]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawHeadTag {
    WithContent(String, BTreeMap<String, String>, String),
    Bare(String, BTreeMap<String, String>),
}

impl RawHeadTag {
    pub fn tag(&self) -> &str {
        match self {
            Self::WithContent(tag, _, _) | Self::Bare(tag, _) => tag,
        }
    }

    pub fn attrs(&self) -> &BTreeMap<String, String> {
        match self {
            Self::WithContent(_, attrs, _) | Self::Bare(_, attrs) => attrs,
        }
    }

    pub fn content(&self) -> Option<&str> {
        match self {
            Self::WithContent(_, _, content) => Some(content),
            Self::Bare(..) => None,
        }
    }
}

/// Search settings in nested form: `search: { provider, options }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSearchOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<SearchProvider>,

    /// Algolia credentials
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<AlgoliaOptions>,
}

impl RawSearchOptions {
    fn merge(self, overlay: Self) -> Self {
        Self {
            provider: overlay.provider.or(self.provider),
            options: overlay.options.or(self.options),
        }
    }
}

/// Theme options as declared.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawThemeOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<String>>,
}

impl RawThemeOptions {
    fn merge(self, overlay: Self) -> Self {
        Self {
            extends: overlay.extends.or(self.extends),
            plugins: overlay.plugins.or(self.plugins),
        }
    }
}

impl RawSiteConfig {
    /// Layer `overlay` on top of `self`.
    ///
    /// Fields present in the overlay win; lists are replaced whole, never
    /// concatenated. Theme and search options merge per field. The result
    /// carries the overlay's `extends`.
    pub fn merge(self, overlay: RawSiteConfig) -> RawSiteConfig {
        let theme = match (self.theme, overlay.theme) {
            (Some(base), Some(top)) => Some(base.merge(top)),
            (base, top) => top.or(base),
        };
        let search = match (self.search, overlay.search) {
            (Some(base), Some(top)) => Some(base.merge(top)),
            (base, top) => top.or(base),
        };

        RawSiteConfig {
            extends: overlay.extends,
            title: overlay.title.or(self.title),
            description: overlay.description.or(self.description),
            lang: overlay.lang.or(self.lang),
            base: overlay.base.or(self.base),
            clean_urls: overlay.clean_urls.or(self.clean_urls),
            nav: overlay.nav.or(self.nav),
            sidebar: overlay.sidebar.or(self.sidebar),
            social_links: overlay.social_links.or(self.social_links),
            head: overlay.head.or(self.head),
            search_provider: overlay.search_provider.or(self.search_provider),
            algolia: overlay.algolia.or(self.algolia),
            search,
            edit_link_pattern: overlay.edit_link_pattern.or(self.edit_link_pattern),
            last_updated_label: overlay.last_updated_label.or(self.last_updated_label),
            theme,
        }
    }
}
