//! Loading documents from a directory of text files.

use std::path::Path;

use tracing::{info, warn};
use walkdir::WalkDir;

use crate::document::Document;
use crate::error::{RagError, Result};

/// File extensions treated as text-bearing.
const TEXT_EXTENSIONS: &[&str] = &["txt", "md"];

/// Load every text-bearing file under `dir` as one [`Document`].
///
/// Files are visited in sorted path order so document positions are
/// deterministic across runs. Files that cannot be read as UTF-8 are skipped
/// with a warning.
///
/// # Errors
///
/// Returns [`RagError::Input`] if `dir` is not a directory or contains no
/// loadable files.
pub fn load_documents(dir: impl AsRef<Path>) -> Result<Vec<Document>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(RagError::Input(format!("'{}' is not a directory", dir.display())));
    }

    let mut paths: Vec<_> = WalkDir::new(dir)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .is_some_and(|ext| TEXT_EXTENSIONS.iter().any(|t| ext == *t))
        })
        .map(|entry| entry.into_path())
        .collect();
    paths.sort();

    let mut documents = Vec::new();
    for path in paths {
        match std::fs::read_to_string(&path) {
            Ok(text) if !text.trim().is_empty() => {
                documents.push(Document::new(path.display().to_string(), text, documents.len()));
            }
            Ok(_) => warn!(path = %path.display(), "skipping empty file"),
            Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable file"),
        }
    }

    if documents.is_empty() {
        return Err(RagError::Input(format!(
            "no loadable text files found under '{}'",
            dir.display()
        )));
    }

    info!(document_count = documents.len(), dir = %dir.display(), "loaded documents");
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn loads_text_files_in_sorted_order() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("b.txt"), "second doc").unwrap();
        fs::write(temp.path().join("a.md"), "first doc").unwrap();
        fs::write(temp.path().join("ignored.bin"), "binary").unwrap();

        let documents = load_documents(temp.path()).unwrap();
        assert_eq!(documents.len(), 2);
        assert!(documents[0].id.ends_with("a.md"));
        assert_eq!(documents[0].position, 0);
        assert_eq!(documents[1].text, "second doc");
        assert_eq!(documents[1].position, 1);
    }

    #[test]
    fn empty_directory_is_an_input_error() {
        let temp = tempfile::tempdir().unwrap();
        assert!(matches!(load_documents(temp.path()), Err(RagError::Input(_))));
    }

    #[test]
    fn missing_directory_is_an_input_error() {
        assert!(matches!(load_documents("/nonexistent/docs"), Err(RagError::Input(_))));
    }

    #[test]
    fn empty_files_are_skipped() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("empty.txt"), "   \n").unwrap();
        fs::write(temp.path().join("real.txt"), "content").unwrap();

        let documents = load_documents(temp.path()).unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].text, "content");
    }
}
