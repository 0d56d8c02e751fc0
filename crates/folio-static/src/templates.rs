//! Template engine for rendering section pages.

use folio_markup::Document;
use minijinja::{context, AutoEscape, Environment};

const PAGE_TEMPLATE: &str = "page.html";

/// Values shared by a page and its section.
#[derive(Debug, Clone)]
pub struct PageContext<'a> {
    /// The document being rendered
    pub page: &'a Document,
    /// Raw HTML of the mail signup snippet
    pub mail: &'a str,
    /// Section tagline
    pub tag: &'a str,
    /// Section label
    pub section: &'a str,
    /// Domain the section is served from
    pub domain: &'a str,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Compile a page template from source.
    ///
    /// Values are inserted verbatim; page bodies and the mail snippet are HTML.
    pub fn from_source(source: impl Into<String>) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_template_owned(PAGE_TEMPLATE.to_string(), source.into())?;
        Ok(Self { env })
    }

    /// Render a page.
    pub fn render_page(&self, context: &PageContext<'_>) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(PAGE_TEMPLATE)?;

        tmpl.render(context! {
            page => context.page,
            mail => context.mail,
            tag => context.tag,
            section => context.section,
            domain => context.domain,
        })
    }
}

/// Template written by `folio init`.
pub const DEFAULT_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{% if page.title %}{{ page.title }} | {% endif %}{{ tag }}</title>
  <link rel="canonical" href="https://{{ page.canonical_url }}">
  <link rel="stylesheet" href="/style.css">
</head>
<body>
  <header class="site-header">
    <a href="https://{{ domain }}" class="site-tag">{{ tag }}</a>
    {% if section %}<span class="site-section">{{ section }}</span>{% endif %}
  </header>
  <main class="post">
    {% if page.title %}<h1 class="post-title">{{ page.title }}</h1>{% endif %}
    {% if page.date %}<div class="post-date">{{ page.date }}</div>{% endif %}
    {% if page.tags %}<div class="tags">{% for t in page.tags %}<span class="tag">{{ t }}</span>{% endfor %}</div>{% endif %}
    {{ page.body }}
  </main>
  <footer class="site-footer">
    {{ mail }}
  </footer>
</body>
</html>
"##;
