//! Reading documents from disk.
//!
//! Documents are addressed by a path relative to a root directory, so
//! callers never pass absolute paths around and the engine never reads
//! outside the root.

use std::path::{Path, PathBuf};

use relative_path::RelativePath;
use thiserror::Error;

use crate::document::Document;
use crate::parsing::blocks::BlockOptions;
use crate::parsing::inline::registry::ParserRegistry;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("document not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Reads and parses the document at `path` under `root` with the default
/// parser registry and options.
pub fn read_document(root: &Path, path: &RelativePath) -> Result<Document, IoError> {
    let source = read_source(root, path)?;
    Ok(Document::parse(&source))
}

/// As [`read_document`], with a caller-supplied registry and options.
pub fn read_document_with(
    root: &Path,
    path: &RelativePath,
    registry: &ParserRegistry,
    options: &BlockOptions,
) -> Result<Document, IoError> {
    let source = read_source(root, path)?;
    Ok(Document::parse_with(&source, registry, options))
}

fn read_source(root: &Path, path: &RelativePath) -> Result<String, IoError> {
    let full = path.to_logical_path(root);
    if !full.is_file() {
        return Err(IoError::NotFound(full));
    }
    std::fs::read_to_string(&full).map_err(|source| IoError::Read {
        path: full,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::types::BlockElement;
    use pretty_assertions::assert_eq;

    #[test]
    fn reads_and_parses_a_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("note.md"), "# Note\n").unwrap();

        let doc = read_document(dir.path(), RelativePath::new("note.md")).unwrap();
        assert_eq!(doc.blocks().len(), 1);
        assert!(matches!(
            doc.blocks()[0],
            BlockElement::Heading { level: 1, .. }
        ));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_document(dir.path(), RelativePath::new("absent.md")).unwrap_err();
        assert!(matches!(err, IoError::NotFound(_)));
    }

    #[test]
    fn relative_paths_stay_logical() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("sub/doc.md"), "text\n").unwrap();

        let doc = read_document(dir.path(), RelativePath::new("sub/./doc.md")).unwrap();
        assert_eq!(doc.blocks().len(), 1);
    }
}
