//! Static asset handling.

use std::fs;
use std::path::{Path, PathBuf};

use crate::builder::BuildError;

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Copy each file in `sources` into `dest_dir`, keeping its file name.
    ///
    /// Relative sources are resolved against `root`. Returns the number of
    /// files copied.
    pub fn copy_static(root: &Path, sources: &[PathBuf], dest_dir: &Path) -> Result<usize, BuildError> {
        for source in sources {
            let source_path = root.join(source);
            let filename = source_path.file_name().ok_or_else(|| {
                BuildError::ReadError(format!("Not a file: {}", source_path.display()))
            })?;

            fs::copy(&source_path, dest_dir.join(filename)).map_err(|e| {
                BuildError::WriteError(format!("Failed to copy {}: {}", source_path.display(), e))
            })?;
            tracing::debug!("Copied {}", source_path.display());
        }

        Ok(sources.len())
    }
}

/// Stylesheet written by `folio init`.
pub const DEFAULT_CSS: &str = r#"* {
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, sans-serif;
  line-height: 1.6;
  max-width: 720px;
  margin: 0 auto;
  padding: 1.5rem;
  color: #1f2328;
}

.site-header {
  display: flex;
  gap: 1rem;
  align-items: baseline;
  margin-bottom: 2rem;
}

.site-tag {
  font-weight: 700;
  color: inherit;
  text-decoration: none;
}

.site-section,
.post-date {
  color: #6e7781;
}

.tags {
  display: flex;
  gap: 0.5rem;
  margin: 0.5rem 0 1.5rem;
}

.tag {
  font-size: 0.875rem;
  padding: 0.125rem 0.5rem;
  border-radius: 0.25rem;
  background: #eaeef2;
}

code {
  font-family: ui-monospace, monospace;
  font-size: 0.9em;
  padding: 0.1em 0.3em;
  border-radius: 0.25rem;
  background: #f6f8fa;
}

.site-footer {
  margin-top: 3rem;
  border-top: 1px solid #d0d7de;
  padding-top: 1rem;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn copies_static_files() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("build");
        fs::create_dir_all(&out).unwrap();
        fs::write(temp.path().join("style.css"), DEFAULT_CSS).unwrap();

        let copied =
            AssetPipeline::copy_static(temp.path(), &[PathBuf::from("style.css")], &out).unwrap();

        assert_eq!(copied, 1);
        assert_eq!(fs::read_to_string(out.join("style.css")).unwrap(), DEFAULT_CSS);
    }

    #[test]
    fn fails_on_missing_file() {
        let temp = tempdir().unwrap();

        let result = AssetPipeline::copy_static(temp.path(), &[PathBuf::from("gone.css")], temp.path());

        assert!(matches!(result, Err(BuildError::WriteError(_))));
    }
}
