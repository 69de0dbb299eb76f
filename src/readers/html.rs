use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

use super::{BookmarkReader, DEFAULT_MAX_FILE_SIZE};
use crate::models::RawFragment;
use crate::utils::open_bounded_file;

const ENTRY_MARKER: &str = "<DT>";
const ANCHOR_MARKER: &str = "<A ";

/// Reader for the legacy `NETSCAPE-Bookmark-file-1` HTML export
///
/// This is a line heuristic, not an HTML parser: a line is a bookmark candidate when, after
/// trimming, it starts with `<DT>` immediately followed by `<A `. Folder headings (`<DT><H3>`),
/// list markup and everything else is skipped.
pub struct HtmlBookmarkReader {
    max_file_size: u64,
}

impl HtmlBookmarkReader {
    pub fn new() -> Self {
        Self { max_file_size: DEFAULT_MAX_FILE_SIZE }
    }

    pub fn with_max_file_size(max_file_size: u64) -> Self {
        Self { max_file_size }
    }

    /// Extract the anchor portion of a `<DT><A ...` line, if it is one
    pub fn anchor_from_line(line: &str) -> Option<&str> {
        let anchor = line.trim().strip_prefix(ENTRY_MARKER)?;
        anchor.starts_with(ANCHOR_MARKER).then_some(anchor)
    }
}

impl Default for HtmlBookmarkReader {
    fn default() -> Self {
        Self::new()
    }
}

impl BookmarkReader for HtmlBookmarkReader {
    fn extension(&self) -> &str {
        ".html"
    }

    fn extract_fragments(&self, path: &Path) -> Result<Vec<RawFragment>> {
        let file = open_bounded_file(path, self.max_file_size)?;
        let reader = BufReader::new(file);
        let mut fragments = Vec::new();

        for line in reader.lines() {
            let line = line
                .with_context(|| format!("Failed to read line from HTML file: {}", path.display()))?;

            if let Some(anchor) = Self::anchor_from_line(&line) {
                fragments.push(RawFragment::Html(anchor.to_string()));
            }
        }

        Ok(fragments)
    }
}
