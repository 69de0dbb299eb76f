use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::{BookmarkParser, MISSING_END_TAG, MISSING_HREF, UNSUPPORTED_FRAGMENT};
use crate::models::{ParseOutcome, RawFragment};

static HREF_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"HREF="(.*?)""#).expect("HREF pattern is valid"));
static INNER_TEXT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r">(.*?)</A>").expect("inner text pattern is valid"));
static XML_ENTITY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(amp|lt|gt|quot|apos|#[0-9]+|#x[0-9A-Fa-f]+);").expect("entity pattern is valid")
});

/// Forgiving anchor parser: pulls the link and label out with first-match patterns
///
/// Works on markup the XML parser rejects (HTML entities, stray attributes, unbalanced
/// tags elsewhere on the line). The five predefined XML entities and numeric character
/// references are decoded, so a well-formed anchor yields the same pair as the XML parser;
/// HTML-only entities such as `&eacute;` are kept verbatim.
pub struct PatternAnchorParser;

impl PatternAnchorParser {
    pub fn parse_anchor(anchor: &str) -> ParseOutcome {
        let Some(link) = HREF_PATTERN.captures(anchor).and_then(|c| c.get(1)) else {
            return ParseOutcome::failure(MISSING_HREF);
        };

        let Some(text) = INNER_TEXT_PATTERN.captures(anchor).and_then(|c| c.get(1)) else {
            return ParseOutcome::failure(MISSING_END_TAG);
        };

        let link = decode_xml_entities(link.as_str());
        let text = decode_xml_entities(text.as_str());
        ParseOutcome::from_link(&link, Some(&text), MISSING_HREF)
    }
}

/// Decode predefined XML entities and character references, leaving anything else alone
fn decode_xml_entities(raw: &str) -> Cow<'_, str> {
    if !raw.contains('&') {
        return Cow::Borrowed(raw);
    }

    XML_ENTITY_PATTERN.replace_all(raw, |caps: &Captures| {
        let name = &caps[1];
        let decoded = match name {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            _ => {
                let code = match name.strip_prefix("#x") {
                    Some(hex) => u32::from_str_radix(hex, 16).ok(),
                    None => name[1..].parse::<u32>().ok(),
                };
                code.filter(|&c| c != 0).and_then(char::from_u32)
            }
        };

        match decoded {
            Some(ch) => ch.to_string(),
            None => caps[0].to_string(),
        }
    })
}

impl BookmarkParser for PatternAnchorParser {
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
