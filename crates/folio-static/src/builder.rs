//! Static site builder.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use walkdir::WalkDir;

use folio_markup::{load_document, DocumentError};

use crate::assets::AssetPipeline;
use crate::config::{Section, SiteConfig};
use crate::sitemap::{robots_txt, Sitemap};
use crate::templates::{PageContext, TemplateEngine};

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of sections built
    pub sections: usize,

    /// Number of pages generated
    pub pages: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Section does not exist: {0}")]
    MissingSection(String),

    #[error("Failed to read: {0}")]
    ReadError(String),

    #[error("Failed to build {path}: {source}")]
    DocumentError {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Output file name for a post: `.md` becomes `.html`, anything else is kept.
pub fn output_name(file_name: &str) -> String {
    match file_name.strip_suffix(".md") {
        Some(stem) => format!("{}.html", stem),
        None => file_name.to_string(),
    }
}

/// Path part of a page's canonical URL, from the source file name. Only a
/// source literally named `index.html` is served at `/`.
pub fn canonical_end(file_name: &str) -> String {
    if file_name == "index.html" {
        "/".to_string()
    } else {
        format!("/{}", file_name)
    }
}

/// Builds every configured section into `<root>/<section>/build`.
pub struct SiteBuilder {
    config: SiteConfig,
    templates: TemplateEngine,
    mail: String,
}

impl SiteBuilder {
    /// Load the shared template and mail snippet.
    pub fn new(config: SiteConfig) -> Result<Self, BuildError> {
        let template_path = config.root.join(&config.template);
        let template = read_file(&template_path)?;
        let templates = TemplateEngine::from_source(template).map_err(|e| {
            BuildError::TemplateError(format!("{}: {}", template_path.display(), e))
        })?;

        let mail = read_file(&config.root.join(&config.mail))?;

        Ok(Self {
            config,
            templates,
            mail,
        })
    }

    /// Build all sections. Stops at the first error.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();
        let mut pages = 0;

        for section in &self.config.sections {
            tracing::info!("Building section {}", section.name);
            pages += self.build_section(section)?;
        }

        Ok(BuildResult {
            sections: self.config.sections.len(),
            pages,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Build one section and return the number of pages written.
    fn build_section(&self, section: &Section) -> Result<usize, BuildError> {
        let section_dir = self.config.root.join(&section.name);
        if !section_dir.is_dir() {
            return Err(BuildError::MissingSection(section.name.clone()));
        }

        let build_dir = section_dir.join("build");
        if build_dir.exists() {
            fs::remove_dir_all(&build_dir)
                .map_err(|e| BuildError::WriteError(format!("{}: {}", build_dir.display(), e)))?;
        }
        fs::create_dir_all(&build_dir)
            .map_err(|e| BuildError::WriteError(format!("{}: {}", build_dir.display(), e)))?;

        AssetPipeline::copy_static(&self.config.root, &self.config.static_files, &build_dir)?;

        let domain = self.config.domain_for(section);
        let mut sitemap = Sitemap::new();

        for post in discover_posts(&section_dir.join("posts"))? {
            self.build_page(section, &domain, &post, &build_dir, &mut sitemap)?;
        }

        let pages = sitemap.len();
        write_file(&build_dir.join("sitemap.xml"), &sitemap.finish())?;
        write_file(&build_dir.join("robots.txt"), &robots_txt(&domain))?;

        Ok(pages)
    }

    fn build_page(
        &self,
        section: &Section,
        domain: &str,
        source: &Path,
        build_dir: &Path,
        sitemap: &mut Sitemap,
    ) -> Result<(), BuildError> {
        tracing::info!("Building {}", source.display());

        let loaded = load_document(source).map_err(|e| BuildError::DocumentError {
            path: source.to_path_buf(),
            source: e,
        })?;
        let mut page = loaded.document;

        let file_name = source
            .file_name()
            .and_then(|f| f.to_str())
            .ok_or_else(|| BuildError::ReadError(format!("Invalid file name: {}", source.display())))?;
        let output = output_name(file_name);
        let end = canonical_end(file_name);

        page.canonical_url = format!("{}{}", domain, end);

        let loc = if end == "/" { domain } else { page.canonical_url.as_str() };
        sitemap.push(loc, &loaded.last_modified);

        let html = self
            .templates
            .render_page(&PageContext {
                page: &page,
                mail: &self.mail,
                tag: &section.tag,
                section: &section.label,
                domain,
            })
            .map_err(|e| BuildError::TemplateError(format!("{}: {}", source.display(), e)))?;

        write_file(&build_dir.join(&output), &html)
    }
}

/// List the files directly inside `posts_dir`, sorted by file name.
fn discover_posts(posts_dir: &Path) -> Result<Vec<PathBuf>, BuildError> {
    let mut posts = Vec::new();

    for entry in WalkDir::new(posts_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| BuildError::ReadError(e.to_string()))?;
        if entry.file_type().is_file() {
            posts.push(entry.into_path());
        }
    }

    Ok(posts)
}

fn read_file(path: &Path) -> Result<String, BuildError> {
    fs::read_to_string(path).map_err(|e| BuildError::ReadError(format!("{}: {}", path.display(), e)))
}

fn write_file(path: &Path, contents: &str) -> Result<(), BuildError> {
    fs::write(path, contents)
        .map_err(|e| BuildError::WriteError(format!("{}: {}", path.display(), e)))
}
