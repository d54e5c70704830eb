//! Page shell template.
//!
//! Every language page uses the same shell: html/body carry the language
//! and direction, the head embeds the per-language structured-data blocks,
//! the body holds the language switcher, the composed container, and an
//! inline script persisting the page language for the client runtime.

use minijinja::{context, Environment};

/// One language-switcher link.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SwitcherLink {
    /// Two-letter code, also the href file infix.
    pub code: String,
    /// Uppercased display label.
    pub label: String,
    /// Whether this is the page's own language.
    pub active: bool,
}

/// Context for rendering a language page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PageContext {
    /// Page language code
    pub lang: String,
    /// Text direction ("ltr" or "rtl")
    pub dir: String,
    /// Localized page title
    pub title: String,
    /// Composed container HTML
    pub content: String,
    /// JSON-LD blocks for the head, verbatim
    pub jsonld: Vec<String>,
    /// Language switcher links
    pub languages: Vec<SwitcherLink>,
    /// Base URL
    pub base_url: String,
    /// Stylesheet hrefs
    pub styles: Vec<String>,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("page.html".to_string(), PAGE_TEMPLATE.to_string())
            .expect("Failed to add page template");
        env.add_template_owned("redirect.html".to_string(), REDIRECT_TEMPLATE.to_string())
            .expect("Failed to add redirect template");

        Self { env }
    }

    /// Render one language page.
    pub fn render_page(&self, ctx: &PageContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("page.html")?;

        tmpl.render(context! {
            lang => &ctx.lang,
            dir => &ctx.dir,
            title => &ctx.title,
            content => &ctx.content,
            jsonld => &ctx.jsonld,
            languages => &ctx.languages,
            base_url => &ctx.base_url,
            styles => &ctx.styles,
        })
    }

    /// Render the root redirect to the default language page.
    pub fn render_redirect(&self, target: &str) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("redirect.html")?;
        tmpl.render(context! { target => target })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="{{ lang }}" dir="{{ dir }}">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }}</title>
  {% for style in styles %}<link rel="stylesheet" href="{{ style }}">
  {% endfor %}<link rel="stylesheet" href="{{ base_url }}assets/main.css">
  {% for block in jsonld %}<script type="application/ld+json">{{ block | safe }}</script>
  {% endfor %}
</head>
<body dir="{{ dir }}">
  <nav class="lang-switcher-nav">
    {% for l in languages %}<a href="index.{{ l.code }}.html"{% if l.active %} class="active-lang"{% endif %}>{{ l.label }}</a>
    {% endfor %}
  </nav>
  <div id="preview">{{ content | safe }}</div>
  <script>localStorage.setItem('lang', '{{ lang }}');</script>
</body>
</html>"##;

const REDIRECT_TEMPLATE: &str = r##"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta http-equiv="refresh" content="0; url={{ target }}">
  <link rel="canonical" href="{{ target }}">
</head>
<body>
  <a href="{{ target }}">Continue</a>
</body>
</html>"##;

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_context() -> PageContext {
        PageContext {
            lang: "ar".to_string(),
            dir: "rtl".to_string(),
            title: "مطبخ عائلة شيهريان".to_string(),
            content: "<div class=\"home\">hello</div>".to_string(),
            jsonld: vec!["{\"@type\":\"Organization\"}".to_string()],
            languages: vec![
                SwitcherLink {
                    code: "en".to_string(),
                    label: "EN".to_string(),
                    active: false,
                },
                SwitcherLink {
                    code: "ar".to_string(),
                    label: "AR".to_string(),
                    active: true,
                },
            ],
            base_url: "/".to_string(),
            styles: vec![],
        }
    }

    #[test]
    fn page_carries_language_and_direction() {
        let html = TemplateEngine::new().render_page(&sample_context()).unwrap();
        assert!(html.contains("<html lang=\"ar\" dir=\"rtl\">"));
        assert!(html.contains("<body dir=\"rtl\">"));
        assert!(html.contains("localStorage.setItem('lang', 'ar');"));
    }

    #[test]
    fn page_embeds_jsonld_and_switcher() {
        let html = TemplateEngine::new().render_page(&sample_context()).unwrap();
        assert!(html.contains("<script type=\"application/ld+json\">{\"@type\":\"Organization\"}</script>"));
        assert!(html.contains("href=\"index.en.html\""));
        assert!(html.contains("class=\"active-lang\">AR"));
        assert!(html.contains("<div class=\"home\">hello</div>"));
    }

    #[test]
    fn redirect_points_at_target() {
        let html = TemplateEngine::new().render_redirect("index.en.html").unwrap();
        assert!(html.contains("url=index.en.html"));
    }
}
