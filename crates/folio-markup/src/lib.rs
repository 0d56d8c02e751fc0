//! Lightweight markup for folio sites.
//!
//! This crate splits a source file into front-matter and body, and turns the
//! body's restricted markdown dialect (headers, code spans, strikethrough and
//! links) into an HTML fragment.

pub mod document;
pub mod frontmatter;
pub mod transform;

pub use document::{load_document, parse_document, Document, DocumentError, LoadedDocument};
pub use frontmatter::{extract_frontmatter, Frontmatter, FrontmatterError};
pub use transform::{transform, MarkupError, SpanKind};
