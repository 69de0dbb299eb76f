//! Data models for bookmark extraction
//!
//! This module contains the value types that flow through the pipeline:
//!
//! - [`RawFragment`] - A candidate bookmark entry pulled out of an export file
//! - [`ParseOutcome`] - The result of running one parser over one fragment
//! - [`Bookmark`] - A successfully parsed link with its display label
//! - [`ParseFailure`] - A fragment no parser could recognize, with the reason
//!
//! Bookmarks and failures derive serde's `Serialize` so the CLI can emit them as JSON.

pub mod bookmark;
pub mod fragment;
pub mod outcome;

pub use bookmark::Bookmark;
pub use fragment::RawFragment;
pub use outcome::{ParseFailure, ParseOutcome};
