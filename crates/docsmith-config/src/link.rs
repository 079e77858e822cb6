//! Link target classification.

use regex::Regex;
use std::sync::LazyLock;

static ABSOLUTE_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://[^\s/?#]+\S*$").expect("Invalid absolute URL regex")
});

/// Where a navigation target points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    /// Absolute URL with a scheme and host, e.g. `https://example.com/x`
    External(&'a str),
    /// Site-relative path starting with `/`
    Internal(&'a str),
}

impl<'a> LinkTarget<'a> {
    /// Classify a target, or `None` if it is neither form.
    ///
    /// Protocol-relative targets (`//host/x`) and anything containing
    /// whitespace are rejected.
    pub fn classify(target: &'a str) -> Option<Self> {
        if ABSOLUTE_URL_RE.is_match(target) {
            return Some(Self::External(target));
        }

        if target.starts_with('/')
            && !target.starts_with("//")
            && !target.chars().any(char::is_whitespace)
        {
            return Some(Self::Internal(target));
        }

        None
    }

    pub fn is_external(&self) -> bool {
        matches!(self, Self::External(_))
    }
}

/// Strip the `#fragment` and `?query` parts of a site path.
pub fn route_path(target: &str) -> &str {
    let end = target.find(['#', '?']).unwrap_or(target.len());
    &target[..end]
}
