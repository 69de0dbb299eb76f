//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for a directory tree of bookmark exports
pub struct ExportDirBuilder {
    temp_dir: TempDir,
}

impl ExportDirBuilder {
    /// Create a new builder with an empty root directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the root directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a file at `relative` (parent directories are created) with raw content
    pub fn with_file(self, relative: &str, content: &str) -> Self {
        let path = self.temp_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write export file");
        self
    }

    /// Write an HTML export built from `export`
    pub fn with_html(self, relative: &str, export: &HtmlExportBuilder) -> Self {
        let content = export.to_html();
        self.with_file(relative, &content)
    }

    /// Write a JSON export built from `root`
    pub fn with_json(self, relative: &str, root: &JsonNodeBuilder) -> Self {
        let content = root.to_json().to_string();
        self.with_file(relative, &content)
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ExportDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `NETSCAPE-Bookmark-file-1` HTML exports
pub struct HtmlExportBuilder {
    lines: Vec<String>,
    depth: usize,
}

impl HtmlExportBuilder {
    pub fn new() -> Self {
        Self { lines: Vec::new(), depth: 1 }
    }

    /// Add a well-formed bookmark line
    pub fn bookmark(self, href: &str, title: &str) -> Self {
        let line = format!(r#"<DT><A HREF="{}" ADD_DATE="1500000000">{}</A>"#, href, title);
        self.raw_line(&line)
    }

    /// Add an arbitrary line inside the current list
    pub fn raw_line(mut self, line: &str) -> Self {
        let indent = "    ".repeat(self.depth);
        self.lines.push(format!("{}{}", indent, line));
        self
    }

    /// Open a folder; subsequent bookmarks are nested in it until `end_folder`
    pub fn folder(mut self, name: &str) -> Self {
        self = self.raw_line(&format!(r#"<DT><H3 ADD_DATE="1500000000">{}</H3>"#, name));
        self = self.raw_line("<DL><p>");
        self.depth += 1;
        self
    }

    pub fn end_folder(mut self) -> Self {
        self.depth = self.depth.saturating_sub(1).max(1);
        self.raw_line("</DL><p>")
    }

    pub fn to_html(&self) -> String {
        let mut html = String::from(
            "<!DOCTYPE NETSCAPE-Bookmark-file-1>\n\
             <META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=UTF-8\">\n\
             <TITLE>Bookmarks</TITLE>\n\
             <H1>Bookmarks</H1>\n\
             <DL><p>\n",
        );
        for line in &self.lines {
            html.push_str(line);
            html.push('\n');
        }
        html.push_str("</DL>\n");
        html
    }
}

impl Default for HtmlExportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for nodes of the JSON bookmark backup format
pub enum JsonNodeBuilder {
    Container { title: String, children: Vec<JsonNodeBuilder> },
    Place { uri: Option<String>, title: Option<String> },
    Separator,
}

impl JsonNodeBuilder {
    pub fn container(title: &str) -> Self {
        JsonNodeBuilder::Container { title: title.to_string(), children: Vec::new() }
    }

    pub fn place(uri: &str, title: &str) -> Self {
        JsonNodeBuilder::Place { uri: Some(uri.to_string()), title: Some(title.to_string()) }
    }

    pub fn untitled_place(uri: &str) -> Self {
        JsonNodeBuilder::Place { uri: Some(uri.to_string()), title: None }
    }

    pub fn place_without_uri(title: &str) -> Self {
        JsonNodeBuilder::Place { uri: None, title: Some(title.to_string()) }
    }

    /// Add a child (only meaningful on containers)
    pub fn child(mut self, node: JsonNodeBuilder) -> Self {
        if let JsonNodeBuilder::Container { children, .. } = &mut self {
            children.push(node);
        }
        self
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            JsonNodeBuilder::Container { title, children } => serde_json::json!({
                "guid": "container___",
                "title": title,
                "type": "text/x-moz-place-container",
                "children": children.iter().map(|c| c.to_json()).collect::<Vec<_>>(),
            }),
            JsonNodeBuilder::Place { uri, title } => {
                let mut node = serde_json::json!({
                    "guid": "place_______",
                    "type": "text/x-moz-place",
                    "dateAdded": 1500000000000000u64,
                });
                if let Some(uri) = uri {
                    node["uri"] = serde_json::Value::from(uri.as_str());
                }
                if let Some(title) = title {
                    node["title"] = serde_json::Value::from(title.as_str());
                }
                node
            }
            JsonNodeBuilder::Separator => serde_json::json!({
                "guid": "separator___",
                "type": "text/x-moz-place-separator",
            }),
        }
    }
}

/// A directory with both export formats, nested folders, noise files and bad entries
///
/// Contains 6 bookmarks and 2 unparseable entries in files named `*bookmarks*`, plus an
/// `index.html` with one bookmark that the default name filter excludes.
pub fn realistic_export_dir() -> TempDir {
    ExportDirBuilder::new()
        .with_html(
            "firefox/bookmarks.html",
            &HtmlExportBuilder::new()
                .folder("Rust")
                .bookmark("https://www.rust-lang.org/", "Rust")
                .bookmark("https://docs.rs/", "Docs.rs")
                .end_folder()
                .raw_line(r#"<DT><A HREF="https://caf&eacute;.example/">Caf&eacute;</A>"#)
                .raw_line("<DT><A ADD_DATE=\"1\">missing href</A>"),
        )
        .with_json(
            "firefox/backups/bookmarks-2024-01-01.json",
            &JsonNodeBuilder::container("")
                .child(
                    JsonNodeBuilder::container("menu")
                        .child(JsonNodeBuilder::place("https://crates.io/", "crates.io"))
                        .child(JsonNodeBuilder::Separator)
                        .child(JsonNodeBuilder::untitled_place("https://blog.rust-lang.org/")),
                )
                .child(
                    JsonNodeBuilder::container("toolbar")
                        .child(JsonNodeBuilder::place("about:blank", "Blank"))
                        .child(JsonNodeBuilder::place_without_uri("broken")),
                ),
        )
        .with_html(
            "site/index.html",
            &HtmlExportBuilder::new().bookmark("https://not-a-bookmark-file.example/", "Nope"),
        )
        .with_file("notes/readme.txt", "<DT><A HREF=\"https://ignored.example/\">txt</A>\n")
        .build()
}

/// Paths relative to `root`, with forward slashes
pub fn relative_paths(root: &Path, paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.strip_prefix(root).unwrap_or(p).to_string_lossy().replace('\\', "/"))
        .collect()
}
