use std::collections::HashMap;

use crate::parsers::{BookmarkParser, PatternAnchorParser, PlaceNodeParser, XmlAnchorParser};
use crate::readers::{BookmarkReader, DEFAULT_MAX_FILE_SIZE, HtmlBookmarkReader, JsonBookmarkReader};

/// Readers and parsers keyed by file extension
///
/// Components are appended under the extension they declare, so registration order is
/// the order the driver tries parsers in. Only the first reader of an extension is used.
pub struct FormatRegistry {
    readers: HashMap<String, Vec<Box<dyn BookmarkReader>>>,
    parsers: HashMap<String, Vec<Box<dyn BookmarkParser>>>,
}

impl FormatRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { readers: HashMap::new(), parsers: HashMap::new() }
    }

    /// Registry with the built-in HTML and JSON formats
    ///
    /// HTML fragments go through the strict XML parser first and fall back to the pattern
    /// parser.
    pub fn with_defaults() -> Self {
        Self::with_max_file_size(DEFAULT_MAX_FILE_SIZE)
    }

    /// Built-in formats, with readers refusing files larger than `max_file_size` bytes
    pub fn with_max_file_size(max_file_size: u64) -> Self {
        let mut registry = Self::new();
        registry.register_reader(HtmlBookmarkReader::with_max_file_size(max_file_size));
        registry.register_parser(XmlAnchorParser);
        registry.register_parser(PatternAnchorParser);
        registry.register_reader(JsonBookmarkReader::with_max_file_size(max_file_size));
        registry.register_parser(PlaceNodeParser);
        registry
    }

    pub fn register_reader(&mut self, reader: impl BookmarkReader + 'static) {
        let extension = reader.extension().to_lowercase();
        self.readers.entry(extension).or_default().push(Box::new(reader));
    }

    pub fn register_parser(&mut self, parser: impl BookmarkParser + 'static) {
        let extension = parser.extension().to_lowercase();
        self.parsers.entry(extension).or_default().push(Box::new(parser));
    }

    /// Readers registered for `extension` (e.g. ".html"), in registration order
    pub fn readers_for(&self, extension: &str) -> &[Box<dyn BookmarkReader>] {
        self.readers.get(extension).map(Vec::as_slice).unwrap_or_default()
    }

    /// Parsers registered for `extension`, in the order they should be tried
    pub fn parsers_for(&self, extension: &str) -> &[Box<dyn BookmarkParser>] {
        self.parsers.get(extension).map(Vec::as_slice).unwrap_or_default()
    }

    /// An extension can be processed only with at least one reader and one parser
    pub fn is_processable(&self, extension: &str) -> bool {
        !self.readers_for(extension).is_empty() && !self.parsers_for(extension).is_empty()
    }

    /// Processable extensions, sorted
    pub fn registered_extensions(&self) -> Vec<&str> {
        let mut extensions: Vec<&str> = self
            .readers
            .keys()
            .map(String::as_str)
            .filter(|ext| self.is_processable(ext))
            .collect();
        extensions.sort_unstable();
        extensions
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
