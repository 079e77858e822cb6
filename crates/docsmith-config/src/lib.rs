//! Site configuration for docsmith documentation sites.
//!
//! This crate loads a declarative site configuration (title, navigation,
//! sidebar, social links, head tags, theme options), validates it and
//! produces the normalized [`SiteConfig`] consumed by the site generator.

pub mod link;
pub mod load;
pub mod model;
pub mod pages;
pub mod raw;
pub mod resolve;

pub use link::LinkTarget;
pub use load::{load, load_with_sources, ConfigFormat, LoadError};
pub use model::{
    AlgoliaOptions, HeadTag, NavEntry, SearchProvider, SidebarGroup, SiteConfig, SocialLink,
    ThemeOptions,
};
pub use pages::{DeadLink, PageIndex, PageIndexError};
pub use raw::{
    RawHeadTag, RawNavEntry, RawSearchOptions, RawSidebarGroup, RawSiteConfig, RawSocialLink,
    RawThemeOptions,
};
pub use resolve::{diagnose, resolve, ConfigValidationError};
