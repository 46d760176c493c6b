//! Query normalization

use std::fmt;

/// Line numbers are always requested, so an embedded `-n ` token is dropped.
pub const LINE_NUMBER_FLAG: &str = "-n ";

/// A trimmed, non-empty search keyword
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SearchQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Clean a raw query from the keyword entry.
///
/// Returns `None` when there is nothing to search for. Every `-n `
/// substring is removed, including ones inside the search term.
///
/// # Examples
/// ```
/// use ggg::query::normalize;
///
/// assert_eq!(normalize("  foo  ").unwrap().as_str(), "foo");
/// assert_eq!(normalize("-n term").unwrap().as_str(), "term");
/// assert!(normalize("   ").is_none());
/// ```
pub fn normalize(raw: &str) -> Option<SearchQuery> {
    if raw.trim().is_empty() {
        return None;
    }

    let cleaned = raw.replace(LINE_NUMBER_FLAG, "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }

    Some(SearchQuery(cleaned.to_string()))
}
