//! Pipeline driver: runs every discovered file through its reader and parser chain.
//!
//! # Error Handling Strategy
//!
//! - **Unrecognized fragments**: recorded as [`ParseFailure`] data and never abort the run.
//! - **Unsupported files**: files without a reader+parser pair, or rejected by the
//!   [`FileFilter`], are listed in [`HarvestReport::skipped`] and logged at debug level.
//! - **Unreadable files**: a reader error (I/O, oversized file, malformed JSON document)
//!   aborts the run with the file path as context. With [`HarvestOptions::keep_going`] it is
//!   logged as a warning, recorded in [`HarvestReport::file_errors`] and the run continues.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::registry::FormatRegistry;
use crate::models::{Bookmark, ParseFailure, ParseOutcome, RawFragment};
use crate::parsers::{BookmarkParser, UNSUPPORTED_FRAGMENT};
use crate::utils::{dotted_extension, file_stem};

/// Which discovered files the driver should look at, beyond having a registered format
#[derive(Debug, Clone, Default)]
pub enum FileFilter {
    /// Every file with a processable extension
    #[default]
    All,
    /// Only files whose name, without extension, contains the substring
    NameContains(String),
    /// Arbitrary predicate over the file path
    Predicate(fn(&Path) -> bool),
}

impl FileFilter {
    pub fn accepts(&self, path: &Path) -> bool {
        match self {
            FileFilter::All => true,
            FileFilter::NameContains(needle) => file_stem(path).contains(needle.as_str()),
            FileFilter::Predicate(predicate) => predicate(path),
        }
    }
}

/// Run configuration for [`harvest`]
#[derive(Debug, Clone, Default)]
pub struct HarvestOptions {
    pub filter: FileFilter,
    /// Record unreadable files and continue instead of aborting the run
    pub keep_going: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    /// No reader and parser registered for the extension (`None` when there is no extension)
    UnsupportedExtension(Option<String>),
    /// Rejected by the configured [`FileFilter`]
    FilteredOut,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// Per-file counts for a processed file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileSummary {
    pub path: PathBuf,
    pub bookmarks: usize,
    pub failures: usize,
}

/// A file that could not be read when running with `keep_going`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileError {
    pub path: PathBuf,
    pub message: String,
}

/// Aggregated results of a run
///
/// `bookmarks` and `failures` are in file order, then fragment order within a file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HarvestReport {
    pub bookmarks: Vec<Bookmark>,
    pub failures: Vec<ParseFailure>,
    pub files: Vec<FileSummary>,
    pub skipped: Vec<SkippedFile>,
    pub file_errors: Vec<FileError>,
}

impl HarvestReport {
    /// Bookmarks ordered by link; equal links keep discovery order
    pub fn sorted_bookmarks(&self) -> Vec<Bookmark> {
        let mut bookmarks = self.bookmarks.clone();
        bookmarks.sort_by(Bookmark::cmp_by_link);
        bookmarks
    }
}

/// Try each parser in order and return the first success with a non-empty link
///
/// If every parser fails, the last parser's outcome is returned.
pub fn parse_with_fallback(
    parsers: &[Box<dyn BookmarkParser>],
    fragment: &RawFragment,
) -> ParseOutcome {
    let mut outcome = ParseOutcome::failure(UNSUPPORTED_FRAGMENT);
    for parser in parsers {
        outcome = parser.parse(fragment);
        if outcome.is_success() {
            break;
        }
    }
    outcome
}

/// Run `paths` through the registry, in the order given
///
/// # Errors
///
/// Returns the first reader error (with the file path as context) unless
/// `options.keep_going` is set.
pub fn harvest<P: AsRef<Path>>(
    paths: &[P],
    registry: &FormatRegistry,
    options: &HarvestOptions,
) -> Result<HarvestReport> {
    let mut report = HarvestReport::default();

    for path in paths {
        let path = path.as_ref();

        let extension = dotted_extension(path);
        let Some(extension) = extension.filter(|ext| registry.is_processable(ext)) else {
            debug!(path = %path.display(), "Skipping file with unsupported extension");
            report.skipped.push(SkippedFile {
                path: path.to_path_buf(),
                reason: SkipReason::UnsupportedExtension(dotted_extension(path)),
            });
            continue;
        };

        if !options.filter.accepts(path) {
            debug!(path = %path.display(), "Skipping file rejected by filter");
            report
                .skipped
                .push(SkippedFile { path: path.to_path_buf(), reason: SkipReason::FilteredOut });
            continue;
        }

        match harvest_file(path, &extension, registry, &mut report) {
            Ok(summary) => {
                info!(
                    path = %path.display(),
                    bookmarks = summary.bookmarks,
                    failures = summary.failures,
                    "Scraped bookmark file"
                );
                report.files.push(summary);
            }
            Err(e) if options.keep_going => {
                warn!(path = %path.display(), "Failed to read bookmark file: {:#}", e);
                report
                    .file_errors
                    .push(FileError { path: path.to_path_buf(), message: format!("{:#}", e) });
            }
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}

/// Extract and parse one file, appending its results to `report`
///
/// Nothing is appended if the reader fails.
fn harvest_file(
    path: &Path,
    extension: &str,
    registry: &FormatRegistry,
    report: &mut HarvestReport,
) -> Result<FileSummary> {
    let reader = registry
        .readers_for(extension)
        .first()
        .with_context(|| format!("No reader registered for {} files", extension))?;
    let parsers = registry.parsers_for(extension);

    let fragments = reader
        .extract_fragments(path)
        .with_context(|| format!("Failed to extract bookmarks from {}", path.display()))?;

    let mut summary = FileSummary { path: path.to_path_buf(), bookmarks: 0, failures: 0 };

    for fragment in fragments {
        match parse_with_fallback(parsers, &fragment).into_bookmark() {
            Ok(bookmark) => {
                summary.bookmarks += 1;
                report.bookmarks.push(bookmark);
            }
            Err(reason) => {
                summary.failures += 1;
                report.failures.push(ParseFailure {
                    reason,
                    fragment,
                    source: path.to_path_buf(),
                });
            }
        }
    }

    Ok(summary)
}
