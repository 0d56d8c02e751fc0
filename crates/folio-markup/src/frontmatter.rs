//! Front-matter extraction and parsing.
//!
//! A source file looks like:
//!
//! ```text
//! title = Why I write
//! date = 2023-04-01
//! tags = writing, meta
//! ---
//! # Why I write
//! ...
//! ---
//! ```

/// Line separating the header region from the body.
pub const SEPARATOR: &str = "---";

/// Parsed front-matter of a source document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    /// Page title
    pub title: String,

    /// Free-form date, usually ISO-like
    pub date: String,

    /// Tags in declaration order
    pub tags: Vec<String>,
}

/// Errors that can occur when parsing front-matter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrontmatterError {
    #[error("Missing `---` separator between header and body")]
    MissingSeparator,

    #[error("Malformed header line {line}: expected `key = value`, found {content:?}")]
    MalformedLine { line: usize, content: String },
}

/// Split a source file into its header and body regions.
///
/// The body is the text between the first and second separator. Anything
/// after a third separator is ignored.
pub fn split_source(source: &str) -> Result<(&str, &str), FrontmatterError> {
    let mut parts = source.split(SEPARATOR);
    let header = parts.next().unwrap_or_default();
    let body = parts.next().ok_or(FrontmatterError::MissingSeparator)?;
    Ok((header, body))
}

/// Parse `key = value` lines of a header region.
pub fn parse_header(header: &str) -> Result<Frontmatter, FrontmatterError> {
    let mut frontmatter = Frontmatter::default();

    for (index, line) in header.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(FrontmatterError::MalformedLine {
                line: index + 1,
                content: line.to_string(),
            });
        };
        let value = value.trim();

        match key.trim() {
            "title" => frontmatter.title = value.to_string(),
            "date" => frontmatter.date = value.to_string(),
            "tags" => frontmatter.tags = parse_tags(value),
            other => tracing::debug!("Ignoring unknown front-matter key {:?}", other),
        }
    }

    Ok(frontmatter)
}

fn parse_tags(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extract front-matter from a source file.
///
/// Returns the parsed front-matter and the raw body region.
pub fn extract_frontmatter(source: &str) -> Result<(Frontmatter, &str), FrontmatterError> {
    let (header, body) = split_source(source)?;
    Ok((parse_header(header)?, body))
}
