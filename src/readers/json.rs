use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use super::{BookmarkReader, DEFAULT_MAX_FILE_SIZE};
use crate::models::RawFragment;
use crate::utils::open_bounded_file;

pub const PLACE_TYPE: &str = "text/x-moz-place";
pub const CONTAINER_TYPE: &str = "text/x-moz-place-container";

/// Reader for the JSON bookmark backup format (a tree of typed place nodes)
///
/// The whole document is parsed up front, so a syntactically broken file fails as a whole
/// before any node is looked at.
pub struct JsonBookmarkReader {
    max_file_size: u64,
}

impl JsonBookmarkReader {
    pub fn new() -> Self {
        Self { max_file_size: DEFAULT_MAX_FILE_SIZE }
    }

    pub fn with_max_file_size(max_file_size: u64) -> Self {
        Self { max_file_size }
    }

    /// Collect every place node under `root`, depth-first and in child order
    ///
    /// Containers are expanded into their `children` but never emitted themselves. Nodes of
    /// any other type are dropped together with whatever they contain. A top-level array is
    /// walked element by element.
    pub fn collect_places(root: &Value) -> Vec<Value> {
        let mut places = Vec::new();
        match root {
            Value::Array(nodes) => {
                for node in nodes {
                    Self::walk(node, &mut places);
                }
            }
            node => Self::walk(node, &mut places),
        }
        places
    }

    fn walk(node: &Value, places: &mut Vec<Value>) {
        match node.get("type").and_then(Value::as_str) {
            Some(CONTAINER_TYPE) => {
                if let Some(children) = node.get("children").and_then(Value::as_array) {
                    for child in children {
                        Self::walk(child, places);
                    }
                }
            }
            Some(PLACE_TYPE) => places.push(node.clone()),
            _ => {}
        }
    }
}

impl Default for JsonBookmarkReader {
    fn default() -> Self {
        Self::new()
    }
}

impl BookmarkReader for JsonBookmarkReader {
    fn extension(&self) -> &str {
        ".json"
    }

    fn extract_fragments(&self, path: &Path) -> Result<Vec<RawFragment>> {
        let file = open_bounded_file(path, self.max_file_size)?;
        let document: Value = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse JSON bookmark file: {}", path.display()))?;

        Ok(Self::collect_places(&document).into_iter().map(RawFragment::Json).collect())
    }
}
