//! Format readers: turn a whole export file into raw bookmark fragments
//!
//! # Error Handling Strategy
//!
//! Readers only fail on file-level problems: the file cannot be opened or read, exceeds the
//! configured size limit, or (for JSON) is not a valid document at all. These are returned as
//! `anyhow::Error` with the file path attached as context. Lines or nodes that merely don't
//! look like bookmarks are skipped silently; recognizing a fragment is the parsers' job.

pub mod html;
pub mod json;

use std::path::Path;

use anyhow::Result;

use crate::models::RawFragment;

pub use html::HtmlBookmarkReader;
pub use json::JsonBookmarkReader;

/// Maximum export file size accepted by the default readers: 10MB
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Extracts candidate bookmark fragments from files of one format
pub trait BookmarkReader {
    /// File extension handled by this reader, including the leading dot (e.g. ".html")
    fn extension(&self) -> &str;

    /// Read `path` and return its fragments in document order
    fn extract_fragments(&self, path: &Path) -> Result<Vec<RawFragment>>;
}
