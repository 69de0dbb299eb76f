use roxmltree::Document;

use super::{BookmarkParser, MISSING_HREF, UNSUPPORTED_FRAGMENT};
use crate::models::{ParseOutcome, RawFragment};

/// Strict anchor parser: reads the fragment as a standalone XML element
///
/// Succeeds only on well-formed markup (quoted attributes, closed tag, no HTML-only
/// entities). The link is the `HREF` attribute and the label is the element's leading text.
pub struct XmlAnchorParser;

impl XmlAnchorParser {
    pub fn parse_anchor(anchor: &str) -> ParseOutcome {
        let document = match Document::parse(anchor) {
            Ok(document) => document,
            Err(e) => return ParseOutcome::failure(e.to_string()),
        };

        let element = document.root_element();
        match element.attribute("HREF") {
            Some(link) => ParseOutcome::from_link(link, element.text(), MISSING_HREF),
            None => ParseOutcome::failure(MISSING_HREF),
        }
    }
}

impl BookmarkParser for XmlAnchorParser {
    fn extension(&self) -> &str {
        ".html"
    }

    fn parse(&self, fragment: &RawFragment) -> ParseOutcome {
        match fragment.as_html() {
            Some(anchor) => Self::parse_anchor(anchor),
            None => ParseOutcome::failure(UNSUPPORTED_FRAGMENT),
        }
    }
}
