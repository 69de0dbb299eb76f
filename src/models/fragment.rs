use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// A raw candidate bookmark entry extracted from an export file, before parsing
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawFragment {
    /// One anchor line from an HTML export, with the leading `<DT>` stripped
    Html(String),
    /// One `text/x-moz-place` node from a JSON export
    Json(Value),
}

impl RawFragment {
    pub fn as_html(&self) -> Option<&str> {
        match self {
            RawFragment::Html(line) => Some(line),
            RawFragment::Json(_) => None,
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            RawFragment::Json(node) => Some(node),
            RawFragment::Html(_) => None,
        }
    }
}

impl fmt::Display for RawFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawFragment::Html(line) => f.write_str(line),
            RawFragment::Json(node) => write!(f, "{}", node),
        }
    }
}
