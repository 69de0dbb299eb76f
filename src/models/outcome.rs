use std::path::PathBuf;

use serde::Serialize;

use super::{Bookmark, RawFragment};

/// Result of running a single parser over a single fragment
///
/// A `Success` always carries a non-empty link; parsers report an empty `HREF`/`uri` as a
/// `Failure` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Success { link: String, text: String },
    Failure { reason: String },
}

impl ParseOutcome {
    /// Build a success, or the given failure reason if `link` is empty
    ///
    /// An empty `text` is replaced by the link so a label is never blank.
    pub fn from_link(link: &str, text: Option<&str>, missing_reason: &str) -> Self {
        if link.is_empty() {
            return Self::failure(missing_reason);
        }

        let text = match text {
            Some(text) if !text.is_empty() => text,
            _ => link,
        };

        Self::Success { link: link.to_string(), text: text.to_string() }
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        Self::Failure { reason: reason.into() }
    }

    /// True for a `Success` that can become a bookmark, i.e. with a non-empty link
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { link, .. } if !link.is_empty())
    }

    /// Convert into a bookmark, or hand back the failure reason
    pub fn into_bookmark(self) -> Result<Bookmark, String> {
        match self {
            Self::Success { link, text } => Bookmark::new(link, text)
                .ok_or_else(|| "Parser produced an empty link.".to_string()),
            Self::Failure { reason } => Err(reason),
        }
    }
}

/// A fragment that no registered parser could turn into a bookmark
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseFailure {
    /// Reason reported by the last parser in the fallback chain
    pub reason: String,
    /// The fragment exactly as the reader extracted it
    pub fragment: RawFragment,
    /// File the fragment came from
    pub source: PathBuf,
}
