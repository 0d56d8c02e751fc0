//! Site build command.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use folio_static::{SiteBuilder, SiteConfig};

/// Keep only the sections named in `only`; an empty list keeps everything.
fn select_sections(site: &mut SiteConfig, only: &[String]) -> Result<()> {
    if only.is_empty() {
        return Ok(());
    }

    for name in only {
        if site.section(name).is_none() {
            bail!("Unknown section: {}", name);
        }
    }
    site.sections.retain(|s| only.contains(&s.name));

    Ok(())
}

/// Run the build command.
pub fn run(config_path: &Path, root: Option<PathBuf>, only: &[String]) -> Result<()> {
    let mut site = crate::config::load_site(config_path, root)?;
    select_sections(&mut site, only)?;

    tracing::info!("Building site in {}", site.root.display());

    let result = SiteBuilder::new(site)?.build()?;

    tracing::info!(
        "Built {} pages in {} sections in {}ms",
        result.pages,
        result.sections,
        result.duration_ms
    );

    Ok(())
}
