use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};

/// Open a file for reading, rejecting it if it is larger than `max_size` bytes
///
/// The size is checked on the open handle rather than on the path, so the file that gets
/// read is the file that was measured.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The file metadata cannot be read
/// - The file is larger than `max_size`
pub fn open_bounded_file(path: &Path, max_size: u64) -> Result<File> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;

    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > max_size {
        bail!("File too large: {} ({} bytes, max {} bytes)", path.display(), file_size, max_size);
    }

    Ok(file)
}

/// Extension of `path` including the leading dot, lowercased (e.g. ".html")
///
/// Returns `None` for paths without an extension. Dotfiles such as `.bookmarks` have no
/// extension, matching [`Path::extension`].
pub fn dotted_extension(path: &Path) -> Option<String> {
    path.extension().map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
}

/// File name without its extension, lossily decoded
pub fn file_stem(path: &Path) -> String {
    path.file_stem().map(|stem| stem.to_string_lossy().into_owned()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_dotted_extension() {
        assert_eq!(dotted_extension(Path::new("a/bookmarks.html")), Some(".html".to_string()));
        assert_eq!(dotted_extension(Path::new("bookmarks.JSON")), Some(".json".to_string()));
        assert_eq!(
            dotted_extension(Path::new("bookmarks-2024-01-01.json")),
            Some(".json".to_string())
        );
        assert_eq!(dotted_extension(Path::new("archive.tar.gz")), Some(".gz".to_string()));
        assert_eq!(dotted_extension(Path::new("Makefile")), None);
        assert_eq!(dotted_extension(Path::new(".bookmarks")), None);
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem(&PathBuf::from("/exports/bookmarks.html")), "bookmarks");
        assert_eq!(file_stem(Path::new("bookmarks-2024-01-01.json")), "bookmarks-2024-01-01");
        assert_eq!(file_stem(Path::new("/")), "");
    }

    #[test]
    fn test_open_bounded_file_within_limit() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"12345").unwrap();
        file.flush().unwrap();

        assert!(open_bounded_file(file.path(), 5).is_ok());
    }

    #[test]
    fn test_open_bounded_file_too_large() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"123456").unwrap();
        file.flush().unwrap();

        let err = open_bounded_file(file.path(), 5).unwrap_err();
        assert!(err.to_string().contains("File too large"));
        assert!(err.to_string().contains("6 bytes, max 5 bytes"));
    }

    #[test]
    fn test_open_bounded_file_missing() {
        let err = open_bounded_file(Path::new("/nonexistent/file.html"), 5).unwrap_err();
        assert!(err.to_string().contains("Failed to open file"));
    }
}
