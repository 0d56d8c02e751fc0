//! Sitemap and robots.txt generation.

const URLSET_OPEN: &str = r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#;

/// Accumulates `<url>` entries for one section.
#[derive(Debug, Clone)]
pub struct Sitemap {
    xml: String,
    entries: usize,
}

impl Sitemap {
    pub fn new() -> Self {
        Self {
            xml: URLSET_OPEN.to_string(),
            entries: 0,
        }
    }

    /// Add an entry. `loc` is a host and path without scheme.
    pub fn push(&mut self, loc: &str, lastmod: &str) {
        self.xml.push_str(&format!(
            "\n  <url>\n    <loc>https://{}</loc>\n    <lastmod>{}</lastmod>\n  </url>",
            loc, lastmod
        ));
        self.entries += 1;
    }

    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Close the document and return the XML.
    pub fn finish(mut self) -> String {
        self.xml.push_str("\n</urlset>");
        self.xml
    }
}

impl Default for Sitemap {
    fn default() -> Self {
        Self::new()
    }
}

/// robots.txt allowing everything and pointing at the section sitemap.
pub fn robots_txt(domain: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: https://{}/sitemap.xml\n",
        domain
    )
}
