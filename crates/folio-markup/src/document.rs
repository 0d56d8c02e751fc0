//! Source document loading.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::frontmatter::{extract_frontmatter, FrontmatterError};
use crate::transform::{transform, MarkupError};

/// A document ready to be rendered into a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub title: String,
    pub date: String,
    pub tags: Vec<String>,

    /// HTML produced by the transformer
    pub body: String,

    /// Absolute URL without scheme, filled in by the site builder
    pub canonical_url: String,
}

/// A document together with file metadata.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub document: Document,

    /// Last modification date of the source file (`YYYY-MM-DD`)
    pub last_modified: String,
}

/// Errors that can occur when loading a document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Front-matter error: {0}")]
    Frontmatter(#[from] FrontmatterError),

    #[error("Markup error: {0}")]
    Markup(#[from] MarkupError),
}

/// Parse a source file's contents into a document.
///
/// The canonical URL is left empty.
pub fn parse_document(source: &str) -> Result<Document, DocumentError> {
    let (frontmatter, body) = extract_frontmatter(source)?;

    Ok(Document {
        title: frontmatter.title,
        date: frontmatter.date,
        tags: frontmatter.tags,
        body: transform(body)?,
        canonical_url: String::new(),
    })
}

/// Read and parse a source file.
pub fn load_document(path: &Path) -> Result<LoadedDocument, DocumentError> {
    let read_error = |source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    };

    let modified = fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(read_error)?;
    let source = fs::read_to_string(path).map_err(read_error)?;

    Ok(LoadedDocument {
        document: parse_document(&source)?,
        last_modified: format_date(modified),
    })
}

/// Format a timestamp as a local `YYYY-MM-DD` date.
pub fn format_date(time: SystemTime) -> String {
    DateTime::<Local>::from(time).format("%Y-%m-%d").to_string()
}
