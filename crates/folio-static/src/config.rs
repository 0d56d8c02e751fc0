//! Site and section configuration.

use std::path::PathBuf;

use serde::Deserialize;

/// A top-level content grouping built into its own output directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Section {
    /// Directory name, also the subdomain for non-home sections
    pub name: String,

    /// Tagline shown in page headers and titles
    pub tag: String,

    /// Human readable section label (may be empty)
    #[serde(default)]
    pub label: String,
}

impl Section {
    pub fn new(name: impl Into<String>, tag: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag: tag.into(),
            label: label.into(),
        }
    }
}

/// Configuration for building a site.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Directory containing the sections, template and shared files
    pub root: PathBuf,

    /// Domain of the home section; other sections live on subdomains
    pub root_domain: String,

    /// Name of the section served from the bare root domain
    pub home_section: String,

    /// Sections to build, in order
    pub sections: Vec<Section>,

    /// Files copied into every section's build directory (relative to root)
    pub static_files: Vec<PathBuf>,

    /// Page template (relative to root)
    pub template: PathBuf,

    /// HTML snippet exposed to the template as `mail` (relative to root)
    pub mail: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            root_domain: "example.com".to_string(),
            home_section: "home".to_string(),
            sections: vec![Section::new("home", "Home", "")],
            static_files: vec![PathBuf::from("style.css")],
            template: PathBuf::from("template.html"),
            mail: PathBuf::from("mail.html"),
        }
    }
}

impl SiteConfig {
    /// Domain a section is published under.
    pub fn domain_for(&self, section: &Section) -> String {
        section_domain(&self.root_domain, &self.home_section, &section.name)
    }

    /// Look up a configured section by name.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }
}

/// `home` maps to the root domain, anything else to `{name}.{root_domain}`.
pub fn section_domain(root_domain: &str, home_section: &str, name: &str) -> String {
    if name == home_section {
        root_domain.to_string()
    } else {
        format!("{}.{}", name, root_domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn home_section_uses_root_domain() {
        assert_eq!(section_domain("example.com", "home", "home"), "example.com");
    }

    #[test]
    fn other_sections_use_subdomains() {
        assert_eq!(
            section_domain("example.com", "home", "letters"),
            "letters.example.com"
        );
    }

    #[test]
    fn config_derives_domains_and_finds_sections() {
        let config = SiteConfig {
            sections: vec![
                Section::new("notes", "Notes", "Notes"),
                Section::new("home", "Home", ""),
            ],
            ..Default::default()
        };

        let notes = config.section("notes").unwrap();
        assert_eq!(config.domain_for(notes), "notes.example.com");
        assert_eq!(config.domain_for(config.section("home").unwrap()), "example.com");
        assert!(config.section("lists").is_none());
    }
}
