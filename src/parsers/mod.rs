//! Fragment parsers: turn one raw fragment into a link and label
//!
//! # Error Handling Strategy
//!
//! Parsers never return `Result` and never panic on malformed input. A fragment they cannot
//! recognize is reported as [`ParseOutcome::Failure`] carrying a human-readable reason, which
//! the driver records next to the original fragment. Several parsers may be registered for
//! one extension; the driver tries them in order and keeps the first success, so a strict
//! parser can sit in front of a more forgiving one.

pub mod html_pattern;
pub mod html_xml;
pub mod json;

use crate::models::{ParseOutcome, RawFragment};

pub use html_pattern::PatternAnchorParser;
pub use html_xml::XmlAnchorParser;
pub use json::PlaceNodeParser;

pub const MISSING_HREF: &str = "HREF attribute missing in HTML anchor element.";
pub const MISSING_END_TAG: &str =
    "Unable to match end of opening tag and opening of end tag of HTML anchor element.";
pub const MISSING_URI: &str = "uri field missing in JSON node.";
pub const UNSUPPORTED_FRAGMENT: &str = "Fragment kind not supported by this parser.";

/// Recognizes bookmark fragments of one format
pub trait BookmarkParser {
    /// File extension whose fragments this parser understands, including the leading dot
    fn extension(&self) -> &str;

    /// Parse a single fragment; the same fragment always yields the same outcome
    fn parse(&self, fragment: &RawFragment) -> ParseOutcome;
}
