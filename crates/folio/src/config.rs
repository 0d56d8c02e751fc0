//! Configuration file (site.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use folio_static::{Section, SiteConfig};
use serde::Deserialize;

/// Configuration file structure.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub root_domain: String,
    pub home_section: String,
    pub static_files: Vec<PathBuf>,
    pub template: PathBuf,
    pub mail: PathBuf,
    pub sections: Vec<Section>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        let site = SiteConfig::default();
        Self {
            root_domain: site.root_domain,
            home_section: site.home_section,
            static_files: site.static_files,
            template: site.template,
            mail: site.mail,
            sections: site.sections,
        }
    }
}

impl ConfigFile {
    /// Resolve into a builder configuration rooted at `root`.
    pub fn into_site_config(self, root: PathBuf) -> SiteConfig {
        SiteConfig {
            root,
            root_domain: self.root_domain,
            home_section: self.home_section,
            sections: self.sections,
            static_files: self.static_files,
            template: self.template,
            mail: self.mail,
        }
    }
}

/// Parse configuration from TOML source.
pub fn parse_config(content: &str) -> Result<ConfigFile> {
    toml::from_str(content).context("Failed to parse config")
}

/// Load configuration from `path` if it exists, defaults otherwise.
/// Returns an error if the file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config = parse_config(&content).with_context(|| format!("In {}", path.display()))?;
    tracing::info!("Loaded config from {}", path.display());

    Ok(config)
}

/// Site root used when none is given: the directory holding the config file.
pub fn default_root(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Load the config and resolve the site root.
pub fn load_site(config_path: &Path, root: Option<PathBuf>) -> Result<SiteConfig> {
    let root = root.unwrap_or_else(|| default_root(config_path));
    Ok(load_config(config_path)?.into_site_config(root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn parses_full_config() {
        let config = parse_config(
            r#"
root_domain = "eaton.dev"
home_section = "home"
static_files = ["style.css", "favicon.ico"]
template = "layout.html"
mail = "snippets/mail.html"

[[sections]]
name = "letters"
tag = "Letters by a software developer"
label = "Letters"

[[sections]]
name = "home"
tag = "Home"
"#,
        )
        .unwrap();

        assert_eq!(config.root_domain, "eaton.dev");
        assert_eq!(config.static_files.len(), 2);
        assert_eq!(config.template, PathBuf::from("layout.html"));
        assert_eq!(
            config.sections,
            vec![
                Section::new("letters", "Letters by a software developer", "Letters"),
                Section::new("home", "Home", ""),
            ]
        );
    }

    #[test]
    fn fills_missing_keys_with_defaults() {
        let config = parse_config("root_domain = \"site.org\"").unwrap();

        assert_eq!(config.root_domain, "site.org");
        assert_eq!(config.home_section, "home");
        assert_eq!(config.template, PathBuf::from("template.html"));
        assert_eq!(config.sections.len(), 1);
    }

    #[test]
    fn rejects_malformed_config() {
        assert!(parse_config("sections = 3").is_err());
    }

    #[test]
    fn missing_file_uses_defaults() {
        let temp = tempdir().unwrap();
        let config = load_config(&temp.path().join("site.toml")).unwrap();
        assert_eq!(config.root_domain, "example.com");
    }

    #[test]
    fn root_defaults_to_config_directory() {
        assert_eq!(default_root(Path::new("site.toml")), PathBuf::from("."));
        assert_eq!(
            default_root(Path::new("blog/site.toml")),
            PathBuf::from("blog")
        );

        let site = load_site(Path::new("missing/site.toml"), Some(PathBuf::from("/srv"))).unwrap();
        assert_eq!(site.root, PathBuf::from("/srv"));
    }
}
