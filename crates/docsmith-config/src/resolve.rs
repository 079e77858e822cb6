//! Site configuration resolver.
//!
//! Turns a [`RawSiteConfig`] into a [`SiteConfig`] in one pass: required
//! fields are checked, link targets and labels validated, optional fields
//! defaulted. Every problem is reported against the path of the field that
//! caused it, e.g. `sidebar[1].items[0].target`.

use std::collections::HashMap;

use regex::Regex;
use std::sync::LazyLock;

use crate::link::LinkTarget;
use crate::model::{
    AlgoliaOptions, HeadTag, NavEntry, SearchProvider, SidebarGroup, SiteConfig, SocialLink,
    ThemeOptions,
};
use crate::raw::{
    RawHeadTag, RawNavEntry, RawSidebarGroup, RawSiteConfig, RawSocialLink, RawThemeOptions,
};

/// Default document language.
pub const DEFAULT_LANG: &str = "en-US";

/// Default deployment base.
pub const DEFAULT_BASE: &str = "/";

/// Placeholder substituted with the page path in edit links.
pub const EDIT_LINK_PLACEHOLDER: &str = ":path";

static TAG_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9-]*$").expect("Invalid tag name regex"));

static ATTR_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_:][A-Za-z0-9_:.-]*$").expect("Invalid attribute name regex")
});

/// A configuration validation failure, naming the offending field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("{field}: required field is missing or empty")]
    MissingField { field: String },

    #[error("{field}: link target is empty")]
    EmptyTarget { field: String },

    #[error("{field}: `{target}` is neither an absolute URL nor a site path starting with `/`")]
    MalformedTarget { field: String, target: String },

    #[error("{field}: duplicate label `{label}` (already used by {first})")]
    DuplicateLabel {
        field: String,
        label: String,
        first: String,
    },

    #[error("{field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl ConfigValidationError {
    /// Path of the offending field.
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField { field }
            | Self::EmptyTarget { field }
            | Self::MalformedTarget { field, .. }
            | Self::DuplicateLabel { field, .. }
            | Self::InvalidValue { field, .. } => field,
        }
    }

    fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Resolve a raw configuration into a normalized [`SiteConfig`].
///
/// Fails with the first validation error in field order.
pub fn resolve(raw: &RawSiteConfig) -> Result<SiteConfig, ConfigValidationError> {
    let (config, mut issues) = Resolver::default().run(raw);

    if issues.is_empty() {
        tracing::debug!(
            "Resolved config '{}' ({} nav entries, {} sidebar groups)",
            config.title,
            config.nav.len(),
            config.sidebar.len()
        );
        Ok(config)
    } else {
        Err(issues.swap_remove(0))
    }
}

/// Collect every validation error in a raw configuration.
///
/// Returns an empty list when [`resolve`] would succeed.
pub fn diagnose(raw: &RawSiteConfig) -> Vec<ConfigValidationError> {
    Resolver::default().run(raw).1
}

/// Single-pass resolver accumulating issues.
#[derive(Default)]
struct Resolver {
    issues: Vec<ConfigValidationError>,
}

impl Resolver {
    fn run(mut self, raw: &RawSiteConfig) -> (SiteConfig, Vec<ConfigValidationError>) {
        let title = self.required("title", raw.title.as_deref());
        let description = self.required("description", raw.description.as_deref());
        let lang = self.lang(raw.lang.as_deref());
        let base = self.base(raw.base.as_deref());

        let nav = self.nav(raw.nav.as_deref().unwrap_or_default());
        let sidebar = self.sidebar(raw.sidebar.as_deref().unwrap_or_default());
        let social_links = self.social_links(raw.social_links.as_deref().unwrap_or_default());
        let head = self.head(raw.head.as_deref().unwrap_or_default());

        let nested = raw.search.as_ref();
        let search_provider =
            self.search_provider(raw.search_provider, nested.and_then(|s| s.provider));
        let algolia = self.algolia(
            search_provider,
            raw.algolia.as_ref().or(nested.and_then(|s| s.options.as_ref())),
        );

        let edit_link_pattern = self.edit_link_pattern(raw.edit_link_pattern.as_deref());
        let last_updated_label = raw
            .last_updated_label
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(str::to_string);

        let theme = self.theme(raw.theme.as_ref());

        let config = SiteConfig {
            title,
            description,
            lang,
            base,
            clean_urls: raw.clean_urls.unwrap_or(true),
            nav,
            sidebar,
            social_links,
            head,
            search_provider,
            algolia,
            edit_link_pattern,
            last_updated_label,
            theme,
        };

        (config, self.issues)
    }

    fn required(&mut self, field: &str, value: Option<&str>) -> String {
        let value = value.map(str::trim).unwrap_or_default();
        if value.is_empty() {
            self.issues.push(ConfigValidationError::MissingField {
                field: field.to_string(),
            });
        }
        value.to_string()
    }

    fn lang(&mut self, lang: Option<&str>) -> String {
        match lang.map(str::trim) {
            None => DEFAULT_LANG.to_string(),
            Some("") => {
                self.issues.push(ConfigValidationError::MissingField {
                    field: "lang".to_string(),
                });
                DEFAULT_LANG.to_string()
            }
            Some(lang) => lang.to_string(),
        }
    }

    fn base(&mut self, base: Option<&str>) -> String {
        let Some(base) = base.map(str::trim) else {
            return DEFAULT_BASE.to_string();
        };

        if !base.starts_with('/') || base.chars().any(char::is_whitespace) {
            self.issues.push(ConfigValidationError::invalid(
                "base",
                format!("`{}` must be a path starting with `/`", base),
            ));
            return DEFAULT_BASE.to_string();
        }

        if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{}/", base)
        }
    }

    fn nav(&mut self, entries: &[RawNavEntry]) -> Vec<NavEntry> {
        let mut seen = HashMap::new();
        entries
            .iter()
            .enumerate()
            .map(|(i, entry)| self.entry(&format!("nav[{}]", i), entry, &mut seen))
            .collect()
    }

    fn sidebar(&mut self, groups: &[RawSidebarGroup]) -> Vec<SidebarGroup> {
        groups
            .iter()
            .enumerate()
            .map(|(g, group)| {
                let field = format!("sidebar[{}]", g);
                let heading =
                    self.required(&format!("{}.heading", field), Some(group.heading.as_str()));

                let mut seen = HashMap::new();
                let items = group
                    .items
                    .iter()
                    .enumerate()
                    .map(|(i, entry)| {
                        self.entry(&format!("{}.items[{}]", field, i), entry, &mut seen)
                    })
                    .collect();

                SidebarGroup { heading, items }
            })
            .collect()
    }

    /// Validate one entry; `seen` maps labels already used in the same menu
    /// to the field that first used them.
    fn entry(
        &mut self,
        field: &str,
        entry: &RawNavEntry,
        seen: &mut HashMap<String, String>,
    ) -> NavEntry {
        let label = self.label(&format!("{}.label", field), &entry.label, seen);
        let target = self.target(&format!("{}.target", field), &entry.target);
        NavEntry { label, target }
    }

    fn label(
        &mut self,
        field: &str,
        label: &str,
        seen: &mut HashMap<String, String>,
    ) -> String {
        let label = label.trim();
        if label.is_empty() {
            self.issues.push(ConfigValidationError::MissingField {
                field: field.to_string(),
            });
            return String::new();
        }

        if let Some(first) = seen.get(label) {
            self.issues.push(ConfigValidationError::DuplicateLabel {
                field: field.to_string(),
                label: label.to_string(),
                first: first.clone(),
            });
        } else {
            seen.insert(label.to_string(), field.to_string());
        }

        label.to_string()
    }

    fn target(&mut self, field: &str, target: &str) -> String {
        let target = target.trim();
        if target.is_empty() {
            self.issues.push(ConfigValidationError::EmptyTarget {
                field: field.to_string(),
            });
        } else if LinkTarget::classify(target).is_none() {
            self.issues.push(ConfigValidationError::MalformedTarget {
                field: field.to_string(),
                target: target.to_string(),
            });
        }
        target.to_string()
    }

    fn social_links(&mut self, links: &[RawSocialLink]) -> Vec<SocialLink> {
        links
            .iter()
            .enumerate()
            .map(|(i, link)| {
                let field = format!("socialLinks[{}]", i);
                let icon = self.required(&format!("{}.icon", field), Some(link.icon.as_str()));

                let url = link.url.trim();
                let url_field = format!("{}.url", field);
                if url.is_empty() {
                    self.issues.push(ConfigValidationError::EmptyTarget { field: url_field });
                } else if !LinkTarget::classify(url).is_some_and(|t| t.is_external()) {
                    self.issues.push(ConfigValidationError::MalformedTarget {
                        field: url_field,
                        target: url.to_string(),
                    });
                }

                SocialLink {
                    icon,
                    url: url.to_string(),
                }
            })
            .collect()
    }

    fn head(&mut self, tags: &[RawHeadTag]) -> Vec<HeadTag> {
        tags.iter()
            .enumerate()
            .map(|(i, raw)| {
                let field = format!("head[{}]", i);
                let tag = HeadTag {
                    tag: raw.tag().trim().to_string(),
                    attrs: raw.attrs().clone(),
                    content: raw.content().map(str::to_string),
                };

                if !TAG_NAME_RE.is_match(&tag.tag) {
                    self.issues.push(ConfigValidationError::invalid(
                        field.clone(),
                        format!("`{}` is not a valid tag name", tag.tag),
                    ));
                } else if tag.is_void() && tag.content.is_some() {
                    self.issues.push(ConfigValidationError::invalid(
                        field.clone(),
                        format!("<{}> is a void element and cannot have content", tag.tag),
                    ));
                }

                for name in tag.attrs.keys() {
                    if !ATTR_NAME_RE.is_match(name) {
                        self.issues.push(ConfigValidationError::invalid(
                            format!("{}.attrs.{}", field, name),
                            "not a valid attribute name",
                        ));
                    }
                }

                tag
            })
            .collect()
    }

    fn search_provider(
        &mut self,
        flat: Option<SearchProvider>,
        nested: Option<SearchProvider>,
    ) -> SearchProvider {
        match (flat, nested) {
            (Some(flat), Some(nested)) if flat != nested => {
                self.issues.push(ConfigValidationError::invalid(
                    "search.provider",
                    format!(
                        "`{}` conflicts with searchProvider `{}`",
                        nested.as_str(),
                        flat.as_str()
                    ),
                ));
                flat
            }
            (flat, nested) => flat.or(nested).unwrap_or_default(),
        }
    }

    fn algolia(
        &mut self,
        provider: SearchProvider,
        options: Option<&AlgoliaOptions>,
    ) -> Option<AlgoliaOptions> {
        match (provider, options) {
            (SearchProvider::Local, Some(_)) => {
                tracing::warn!("Ignoring `algolia` options: search provider is local");
                None
            }
            (SearchProvider::Local, None) => None,
            (SearchProvider::Algolia, None) => {
                self.issues.push(ConfigValidationError::invalid(
                    "algolia",
                    "required when searchProvider is `algolia`",
                ));
                None
            }
            (SearchProvider::Algolia, Some(options)) => Some(AlgoliaOptions {
                app_id: self.required("algolia.appId", Some(options.app_id.as_str())),
                api_key: self.required("algolia.apiKey", Some(options.api_key.as_str())),
                index_name: self.required("algolia.indexName", Some(options.index_name.as_str())),
            }),
        }
    }

    fn edit_link_pattern(&mut self, pattern: Option<&str>) -> Option<String> {
        let pattern = pattern?.trim();
        if !pattern.contains(EDIT_LINK_PLACEHOLDER) {
            self.issues.push(ConfigValidationError::invalid(
                "editLinkPattern",
                format!("must contain the `{}` placeholder", EDIT_LINK_PLACEHOLDER),
            ));
        }
        Some(pattern.to_string())
    }

    fn theme(&mut self, theme: Option<&RawThemeOptions>) -> ThemeOptions {
        let Some(theme) = theme else {
            return ThemeOptions::default();
        };

        let extends = match theme.extends.as_deref().map(str::trim) {
            None => ThemeOptions::DEFAULT_THEME.to_string(),
            Some(extends) => self.required("theme.extends", Some(extends)),
        };

        let mut seen = HashMap::new();
        let plugins = theme
            .plugins
            .as_deref()
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(|(i, name)| self.label(&format!("theme.plugins[{}]", i), name, &mut seen))
            .collect();

        ThemeOptions { extends, plugins }
    }
}

impl SiteConfig {
    /// Convert back into raw form with every field present.
    ///
    /// Resolving the result yields `self` again.
    pub fn to_raw(&self) -> RawSiteConfig {
        let entry = |e: &NavEntry| RawNavEntry {
            label: e.label.clone(),
            target: e.target.clone(),
        };

        RawSiteConfig {
            extends: None,
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            lang: Some(self.lang.clone()),
            base: Some(self.base.clone()),
            clean_urls: Some(self.clean_urls),
            nav: Some(self.nav.iter().map(entry).collect()),
            sidebar: Some(
                self.sidebar
                    .iter()
                    .map(|g| RawSidebarGroup {
                        heading: g.heading.clone(),
                        items: g.items.iter().map(entry).collect(),
                    })
                    .collect(),
            ),
            social_links: Some(
                self.social_links
                    .iter()
                    .map(|s| RawSocialLink {
                        icon: s.icon.clone(),
                        url: s.url.clone(),
                    })
                    .collect(),
            ),
            head: Some(
                self.head
                    .iter()
                    .map(|h| match &h.content {
                        Some(content) => {
                            RawHeadTag::WithContent(h.tag.clone(), h.attrs.clone(), content.clone())
                        }
                        None => RawHeadTag::Bare(h.tag.clone(), h.attrs.clone()),
                    })
                    .collect(),
            ),
            search_provider: Some(self.search_provider),
            algolia: self.algolia.clone(),
            search: None,
            edit_link_pattern: self.edit_link_pattern.clone(),
            last_updated_label: self.last_updated_label.clone(),
            theme: Some(RawThemeOptions {
                extends: Some(self.theme.extends.clone()),
                plugins: Some(self.theme.plugins.clone()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn minimal() -> RawSiteConfig {
        serde_json::from_str(r#"{"title":"T","description":"D","nav":[],"sidebar":[]}"#).unwrap()
    }

    fn nav(entries: &[(&str, &str)]) -> Option<Vec<RawNavEntry>> {
        Some(
            entries
                .iter()
                .map(|(label, target)| RawNavEntry {
                    label: label.to_string(),
                    target: target.to_string(),
                })
                .collect(),
        )
    }

    fn full() -> RawSiteConfig {
        toml::from_str(
            r#"
title = "MuRainBot2 Doc"
description = "MuRainBot2's Doc"
cleanUrls = true
lastUpdatedLabel = "Last updated"
editLinkPattern = "https://github.com/acme/doc/edit/main/docs/:path"
head = [["link", { rel = "icon", href = "/favicon.ico" }]]

[[nav]]
text = "Home"
link = "/"

[[nav]]
text = "API"
link = "https://api.example.com"

[[sidebar]]
text = "Quick start"
items = [
  { text = "About", link = "/start/about" },
  { text = "Getting started", link = "/start/getting-started" },
]

[[sidebar]]
text = "Advanced"
items = [{ text = "About", link = "/advanced/about" }]

[[socialLinks]]
icon = "github"
link = "https://github.com/acme/doc"

[theme]
plugins = ["git-changelog"]
"#,
        )
        .unwrap()
    }

    #[test]
    fn applies_defaults_to_minimal_config() {
        let config = resolve(&minimal()).unwrap();

        assert!(config.clean_urls);
        assert_eq!(config.search_provider, SearchProvider::Local);
        assert_eq!(config.lang, "en-US");
        assert_eq!(config.base, "/");
        assert_eq!(config.theme, ThemeOptions::default());
        assert!(config.nav.is_empty());
        assert!(config.sidebar.is_empty());
    }

    #[test]
    fn serializes_defaults_in_camel_case() {
        let config = resolve(&minimal()).unwrap();
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["cleanUrls"], serde_json::json!(true));
        assert_eq!(json["searchProvider"], serde_json::json!("local"));
        assert!(json.get("editLinkPattern").is_none());
    }

    #[test]
    fn resolves_full_config() {
        let config = resolve(&full()).unwrap();

        assert_eq!(config.nav.len(), 2);
        assert_eq!(config.sidebar[0].heading, "Quick start");
        assert_eq!(config.sidebar[0].items[1].target, "/start/getting-started");
        assert_eq!(config.social_links[0].icon, "github");
        assert_eq!(config.head[0].tag, "link");
        assert_eq!(config.theme.plugins, vec!["git-changelog".to_string()]);
        assert_eq!(config.last_updated_label.as_deref(), Some("Last updated"));
    }

    #[test]
    fn resolution_is_idempotent() {
        for raw in [minimal(), full()] {
            let once = resolve(&raw).unwrap();
            let twice = resolve(&once.to_raw()).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn serialized_output_resolves_to_itself() {
        let once = resolve(&full()).unwrap();
        let json = serde_json::to_string(&once).unwrap();
        let reparsed: RawSiteConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(resolve(&reparsed).unwrap(), once);
    }

    #[test]
    fn rejects_missing_title() {
        let raw = RawSiteConfig {
            title: None,
            ..minimal()
        };

        let err = resolve(&raw).unwrap_err();

        assert_eq!(
            err,
            ConfigValidationError::MissingField {
                field: "title".to_string()
            }
        );
    }

    #[test]
    fn rejects_blank_description() {
        let raw = RawSiteConfig {
            description: Some("   ".to_string()),
            ..minimal()
        };

        assert_eq!(resolve(&raw).unwrap_err().field(), "description");
    }

    #[test]
    fn rejects_empty_target() {
        let raw = RawSiteConfig {
            nav: nav(&[("Home", "")]),
            ..minimal()
        };

        let err = resolve(&raw).unwrap_err();

        assert!(matches!(err, ConfigValidationError::EmptyTarget { .. }));
        assert_eq!(err.field(), "nav[0].target");
    }

    #[test]
    fn rejects_malformed_target() {
        let raw = RawSiteConfig {
            nav: nav(&[("Home", "not-a-path")]),
            ..minimal()
        };

        let err = resolve(&raw).unwrap_err();

        assert_eq!(
            err,
            ConfigValidationError::MalformedTarget {
                field: "nav[0].target".to_string(),
                target: "not-a-path".to_string(),
            }
        );
    }

    #[test]
    fn rejects_duplicate_labels_within_sidebar_group() {
        let raw = RawSiteConfig {
            sidebar: Some(vec![RawSidebarGroup {
                heading: "Guide".to_string(),
                items: nav(&[("Intro", "/a"), ("Intro", "/b")]).unwrap(),
            }]),
            ..minimal()
        };

        let err = resolve(&raw).unwrap_err();

        assert_eq!(
            err,
            ConfigValidationError::DuplicateLabel {
                field: "sidebar[0].items[1].label".to_string(),
                label: "Intro".to_string(),
                first: "sidebar[0].items[0].label".to_string(),
            }
        );
    }

    #[test]
    fn rejects_duplicate_nav_labels() {
        let raw = RawSiteConfig {
            nav: nav(&[("Docs", "/a"), ("Docs", "/b")]),
            ..minimal()
        };

        assert_eq!(resolve(&raw).unwrap_err().field(), "nav[1].label");
    }

    #[test]
    fn allows_same_label_across_groups() {
        // `full()` reuses "About" in two groups.
        assert!(resolve(&full()).is_ok());
    }

    #[test]
    fn allows_repeated_group_headings() {
        let raw = RawSiteConfig {
            sidebar: Some(vec![
                RawSidebarGroup {
                    heading: "Guide".to_string(),
                    items: nav(&[("Install", "/guide/install")]).unwrap(),
                },
                RawSidebarGroup {
                    heading: "Guide".to_string(),
                    items: nav(&[("Deploy", "/guide/deploy")]).unwrap(),
                },
            ]),
            ..minimal()
        };

        let config = resolve(&raw).unwrap();

        assert_eq!(config.sidebar.len(), 2);
        assert_eq!(config.sidebar[1].heading, "Guide");
    }

    #[test]
    fn rejects_blank_group_heading() {
        let raw = RawSiteConfig {
            sidebar: Some(vec![RawSidebarGroup {
                heading: "  ".to_string(),
                items: vec![],
            }]),
            ..minimal()
        };

        assert_eq!(resolve(&raw).unwrap_err().field(), "sidebar[0].heading");
    }

    #[test]
    fn trims_labels_before_comparing() {
        let raw = RawSiteConfig {
            nav: nav(&[("Docs", "/a"), (" Docs ", "/b")]),
            ..minimal()
        };

        assert!(matches!(
            resolve(&raw).unwrap_err(),
            ConfigValidationError::DuplicateLabel { .. }
        ));
    }

    #[test]
    fn diagnose_reports_every_issue_in_field_order() {
        let raw = RawSiteConfig {
            title: None,
            nav: nav(&[("", "/"), ("Home", "oops")]),
            ..minimal()
        };

        let fields: Vec<String> = diagnose(&raw)
            .iter()
            .map(|e| e.field().to_string())
            .collect();

        assert_eq!(fields, vec!["title", "nav[0].label", "nav[1].target"]);
    }

    #[test]
    fn diagnose_is_empty_for_valid_config() {
        assert!(diagnose(&full()).is_empty());
    }

    #[test]
    fn social_links_must_be_absolute() {
        let raw = RawSiteConfig {
            social_links: Some(vec![RawSocialLink {
                icon: "github".to_string(),
                url: "/github".to_string(),
            }]),
            ..minimal()
        };

        assert_eq!(resolve(&raw).unwrap_err().field(), "socialLinks[0].url");
    }

    #[test]
    fn normalizes_base_with_trailing_slash() {
        let raw = RawSiteConfig {
            base: Some("/docs".to_string()),
            ..minimal()
        };

        assert_eq!(resolve(&raw).unwrap().base, "/docs/");
    }

    #[test]
    fn rejects_relative_base() {
        let raw = RawSiteConfig {
            base: Some("docs/".to_string()),
            ..minimal()
        };

        assert_eq!(resolve(&raw).unwrap_err().field(), "base");
    }

    #[test]
    fn rejects_content_on_void_head_tag() {
        let raw = RawSiteConfig {
            head: Some(vec![RawHeadTag::WithContent(
                "meta".to_string(),
                Default::default(),
                "text".to_string(),
            )]),
            ..minimal()
        };

        assert_eq!(resolve(&raw).unwrap_err().field(), "head[0]");
    }

    #[test]
    fn rejects_invalid_head_tag_name() {
        let raw = RawSiteConfig {
            head: Some(vec![RawHeadTag::Bare("<link>".to_string(), Default::default())]),
            ..minimal()
        };

        assert_eq!(resolve(&raw).unwrap_err().field(), "head[0]");
    }

    #[test]
    fn rejects_invalid_head_attribute_name() {
        let raw: RawSiteConfig = serde_json::from_str(
            r#"{
                "title": "T",
                "description": "D",
                "head": [["link", { "rel": "icon", "x onload=alert(1) y": "z" }]]
            }"#,
        )
        .unwrap();

        let issues = diagnose(&raw);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field(), "head[0].attrs.x onload=alert(1) y");
    }

    #[test]
    fn accepts_namespaced_head_attributes() {
        let raw: RawSiteConfig = serde_json::from_str(
            r#"{
                "title": "T",
                "description": "D",
                "head": [["meta", { "property": "og:title", "data-theme.mode": "dark", "xml:lang": "en" }]]
            }"#,
        )
        .unwrap();

        assert!(resolve(&raw).is_ok());
    }

    #[test]
    fn resolves_nested_search_options() {
        let raw: RawSiteConfig = serde_json::from_str(
            r#"{
                "title": "T",
                "description": "D",
                "search": {
                    "provider": "algolia",
                    "options": { "appId": "APP", "apiKey": "KEY", "indexName": "docs" }
                }
            }"#,
        )
        .unwrap();

        let config = resolve(&raw).unwrap();

        assert_eq!(config.search_provider, SearchProvider::Algolia);
        assert_eq!(config.algolia.unwrap().app_id, "APP");
    }

    #[test]
    fn rejects_conflicting_search_providers() {
        let raw: RawSiteConfig = serde_json::from_str(
            r#"{
                "title": "T",
                "description": "D",
                "searchProvider": "local",
                "search": { "provider": "algolia" }
            }"#,
        )
        .unwrap();

        assert_eq!(resolve(&raw).unwrap_err().field(), "search.provider");
    }

    #[test]
    fn edit_link_requires_placeholder() {
        let raw = RawSiteConfig {
            edit_link_pattern: Some("https://github.com/acme/doc/edit/main".to_string()),
            ..minimal()
        };

        assert_eq!(resolve(&raw).unwrap_err().field(), "editLinkPattern");
    }

    #[test]
    fn blank_last_updated_label_is_dropped() {
        let raw = RawSiteConfig {
            last_updated_label: Some("  ".to_string()),
            ..minimal()
        };

        assert_eq!(resolve(&raw).unwrap().last_updated_label, None);
    }

    #[test]
    fn algolia_provider_requires_options() {
        let raw = RawSiteConfig {
            search_provider: Some(SearchProvider::Algolia),
            ..minimal()
        };

        assert_eq!(resolve(&raw).unwrap_err().field(), "algolia");
    }

    #[test]
    fn algolia_options_must_be_complete() {
        let raw = RawSiteConfig {
            search_provider: Some(SearchProvider::Algolia),
            algolia: Some(AlgoliaOptions {
                app_id: "APP".to_string(),
                api_key: String::new(),
                index_name: "docs".to_string(),
            }),
            ..minimal()
        };

        assert_eq!(resolve(&raw).unwrap_err().field(), "algolia.apiKey");
    }

    #[test]
    fn local_provider_drops_algolia_options() {
        let raw = RawSiteConfig {
            algolia: Some(AlgoliaOptions {
                app_id: "APP".to_string(),
                api_key: "KEY".to_string(),
                index_name: "docs".to_string(),
            }),
            ..minimal()
        };

        assert_eq!(resolve(&raw).unwrap().algolia, None);
    }

    #[test]
    fn rejects_duplicate_theme_plugins() {
        let raw = RawSiteConfig {
            theme: Some(RawThemeOptions {
                extends: None,
                plugins: Some(vec!["git-changelog".to_string(), "git-changelog".to_string()]),
            }),
            ..minimal()
        };

        assert_eq!(resolve(&raw).unwrap_err().field(), "theme.plugins[1]");
    }

    #[test]
    fn error_message_names_field() {
        let err = ConfigValidationError::MalformedTarget {
            field: "nav[0].target".to_string(),
            target: "not-a-path".to_string(),
        };

        assert!(err.to_string().starts_with("nav[0].target:"));
    }
}
