//! Static site generator for folio.
//!
//! Builds each configured section from its `posts/` directory into a `build/`
//! directory with rendered pages, a sitemap and a robots file.

pub mod assets;
pub mod builder;
pub mod config;
pub mod sitemap;
pub mod templates;

pub use builder::{BuildError, BuildResult, SiteBuilder};
pub use config::{section_domain, Section, SiteConfig};
