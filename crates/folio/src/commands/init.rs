//! Scaffold a new site.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use folio_static::assets::DEFAULT_CSS;
use folio_static::templates::DEFAULT_TEMPLATE;

/// Run the init command in `dir`. Existing files are only replaced with `yes`.
pub fn run(dir: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing folio site in {}", dir.display());

    let posts_dir = dir.join("home").join("posts");
    fs::create_dir_all(&posts_dir).context("Failed to create home/posts directory")?;

    let files = [
        ("site.toml", DEFAULT_CONFIG),
        ("template.html", DEFAULT_TEMPLATE),
        ("mail.html", DEFAULT_MAIL),
        ("style.css", DEFAULT_CSS),
        ("home/posts/index.html", DEFAULT_INDEX),
    ];

    for (name, contents) in files {
        let path = dir.join(name);
        if path.exists() && !yes {
            tracing::warn!("{} already exists. Use --yes to overwrite.", name);
            continue;
        }
        fs::write(&path, contents).with_context(|| format!("Failed to write {}", name))?;
        tracing::info!("Created {}", name);
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'folio build' to build the site.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Folio configuration

# Domain of the home section. Other sections are served from
# <section>.<root_domain>.
root_domain = "example.com"

# Section served from the bare root domain
home_section = "home"

# Copied into every section's build directory
static_files = ["style.css"]

template = "template.html"
mail = "mail.html"

[[sections]]
name = "home"
tag = "My Site"
label = ""
"#;

const DEFAULT_MAIL: &str = r#"<div class="mail">
  <p>Get new posts by email.</p>
</div>
"#;

const DEFAULT_INDEX: &str = r#"title = Home
date = 2024-01-01
tags = meta
---
# Hello

This page was built by `folio`. Edit `home/posts/index.html`, then run
[`folio build`](https://example.com) again.

~~Nothing to see here.~~
---
"#;
