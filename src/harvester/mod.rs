//! Bookmark harvesting across a set of export files
//!
//! # Error Handling Strategy
//!
//! The harvester separates three kinds of trouble:
//!
//! - **Fragment-level**: a fragment no parser recognizes becomes a `ParseFailure` in the
//!   report. This is the expected, common case and never stops a run.
//!
//! - **File-level skips**: files with no registered format, or rejected by the name filter,
//!   are listed as skipped. They are not errors.
//!
//! - **File-level errors**: unreadable, oversized or malformed files abort the run by
//!   default, with the file path in the error context. `HarvestOptions::keep_going` turns
//!   them into report entries instead.
//!
//! The registry is built once and passed in explicitly; nothing here holds global state.

pub mod discovery;
pub mod driver;
pub mod registry;

pub use discovery::discover_files;
pub use driver::{
    FileError, FileFilter, FileSummary, HarvestOptions, HarvestReport, SkipReason, SkippedFile,
    harvest, parse_with_fallback,
};
pub use registry::FormatRegistry;
