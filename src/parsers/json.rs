use serde_json::Value;

use super::{BookmarkParser, MISSING_URI, UNSUPPORTED_FRAGMENT};
use crate::models::{ParseOutcome, RawFragment};

/// Parser for place nodes from the JSON bookmark backup
///
/// The link is the node's `uri`; the label is `title` when it is a non-empty string.
pub struct PlaceNodeParser;

impl PlaceNodeParser {
    pub fn parse_node(node: &Value) -> ParseOutcome {
        let Some(link) = node.get("uri").and_then(Value::as_str) else {
            return ParseOutcome::failure(MISSING_URI);
        };

        let title = node.get("title").and_then(Value::as_str);
        ParseOutcome::from_link(link, title, MISSING_URI)
    }
}

impl BookmarkParser for PlaceNodeParser {
    fn extension(&self) -> &str {
        ".json"
    }

    fn parse(&self, fragment: &RawFragment) -> ParseOutcome {
        match fragment.as_json() {
            Some(node) => Self::parse_node(node),
            None => ParseOutcome::failure(UNSUPPORTED_FRAGMENT),
        }
    }
}
