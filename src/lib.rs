//! Bookmark Harvest - Extract bookmarks from exported browser bookmark files
//!
//! This library finds bookmark exports under a directory tree and turns them into a uniform
//! list of links with display labels. It supports:
//!
//! - The legacy `NETSCAPE-Bookmark-file-1` HTML export, parsed line by line with a strict
//!   XML parser and a forgiving pattern-based fallback
//! - The JSON bookmark backup format, walked as a tree of typed place nodes
//! - Pluggable readers and parsers registered per file extension
//! - Per-fragment failure reporting: anything that can't be parsed is kept with its reason
//!
//! # Example
//!
//! ```no_run
//! use bookmark_harvest::{FormatRegistry, HarvestOptions, discover_files, harvest};
//! use std::path::Path;
//!
//! let files = discover_files(Path::new("/home/alice/exports"))?;
//! let report = harvest(&files, &FormatRegistry::with_defaults(), &HarvestOptions::default())?;
//! for bookmark in report.sorted_bookmarks() {
//!     println!("{} {}", bookmark.link(), bookmark.text());
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod harvester;
pub mod models;
pub mod parsers;
pub mod readers;
pub mod utils;

// Re-export commonly used types
pub use harvester::{
    FileFilter, FormatRegistry, HarvestOptions, HarvestReport, discover_files, harvest,
};
pub use models::{Bookmark, ParseFailure, ParseOutcome, RawFragment};
pub use parsers::BookmarkParser;
pub use readers::BookmarkReader;
