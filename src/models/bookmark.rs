use std::cmp::Ordering;

use serde::Serialize;

/// A bookmark scraped from an export file
///
/// Equality looks at both fields. There is no [`Ord`] impl since reports sort by `link`
/// alone; use [`Bookmark::cmp_by_link`] with a stable sort so duplicate links keep their
/// discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bookmark {
    link: String,
    text: String,
}

impl Bookmark {
    /// Create a bookmark, falling back to the link when the label is empty
    ///
    /// Returns `None` if `link` is empty.
    pub fn new(link: impl Into<String>, text: impl Into<String>) -> Option<Self> {
        let link = link.into();
        if link.is_empty() {
            return None;
        }

        let text = text.into();
        let text = if text.is_empty() { link.clone() } else { text };

        Some(Self { link, text })
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Compare by link only, ignoring the label
    pub fn cmp_by_link(&self, other: &Self) -> Ordering {
        self.link.cmp(&other.link)
    }
}
