//! Asset pipeline for the generated stylesheet.

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the main CSS file.
    pub fn generate_css() -> String {
        DEFAULT_CSS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

const DEFAULT_CSS: &str = r#"/* mosaic default theme */

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: system-ui, -apple-system, sans-serif;
  background: #faf7f2;
  color: #2b2118;
  line-height: 1.6;
}

/* Language switcher */
.lang-switcher-nav {
  position: fixed;
  top: 1rem;
  inset-inline-end: 1rem;
  display: flex;
  gap: 0.5rem;
  z-index: 10;
}

.lang-switcher-nav a {
  padding: 0.25rem 0.6rem;
  border: 1px solid #c9b8a3;
  border-radius: 4px;
  text-decoration: none;
  color: inherit;
  font-size: 0.85rem;
}

.lang-switcher-nav a.active-lang {
  background: #2b2118;
  color: #faf7f2;
}

/* Hero */
.home {
  min-height: 60vh;
  display: flex;
  flex-direction: column;
  padding: 2rem;
  position: relative;
}

.home .title {
  font-size: 2.5rem;
  font-weight: 700;
  text-transform: lowercase;
}

.home .mid-spacer {
  flex: 1;
}

.home .nav {
  display: flex;
  flex-wrap: wrap;
  gap: 1.5rem;
}

.home .nav h2 {
  font-size: 1.1rem;
  font-weight: 500;
  cursor: pointer;
}

.certifications-preview {
  position: absolute;
  bottom: 1.5rem;
  inset-inline-start: 2rem;
  display: flex;
  gap: 0.5rem;
}

.cert-badge-small img {
  width: 40px;
  height: 40px;
}

/* Shared section layout */
section {
  padding: 3rem 2rem;
  max-width: 1100px;
  margin: 0 auto;
}

section h2 {
  margin-bottom: 1rem;
}

/* Companies */
.companies-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
  gap: 1.5rem;
}

.company-card {
  display: block;
  text-decoration: none;
  color: inherit;
  border: 1px solid #e4d9c8;
  border-radius: 8px;
  overflow: hidden;
  background: #fff;
}

.company-image-container img {
  width: 100%;
  display: block;
}

.company-info {
  padding: 1rem;
}

/* Recipes */
.recipe-card {
  border: 1px solid #e4d9c8;
  border-radius: 8px;
  background: #fff;
  padding: 1.25rem;
  margin-bottom: 1.25rem;
}

.recipe-card details {
  margin-top: 0.5rem;
}

.recipe-card summary {
  cursor: pointer;
  font-weight: 600;
}

.recipe-card ul,
.recipe-card ol {
  padding-inline-start: 1.5rem;
}

/* Certifications */
.certifications-container {
  display: flex;
  flex-wrap: wrap;
  gap: 1.25rem;
}

.cert-badge {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.4rem;
  text-decoration: none;
  color: inherit;
}

.cert-badge img {
  width: 72px;
  height: 72px;
}

/* Contact */
.contact-us p {
  margin-bottom: 0.4rem;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minifies_generated_css() {
        let css = AssetPipeline::generate_css();
        let minified = AssetPipeline::minify_css(&css).unwrap();
        assert!(minified.len() < css.len());
        assert!(minified.contains(".lang-switcher-nav"));
    }
}
