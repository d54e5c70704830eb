//! Static site builder.
//!
//! Composes every language's page at build time and writes the static
//! output: one `index.<lang>.html` per language, a root redirect, the
//! generated stylesheet, copied assets, sitemap and robots.txt.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use mosaic_render::{
    AppState, Composer, FsSource, Language, MemoryStore, Node, Section, StateError,
};

use crate::assets::AssetPipeline;
use crate::templates::{PageContext, SwitcherLink, TemplateEngine};

/// Configuration for building a site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory holding `<section>/<section>.<lang>.json` documents
    pub sections_dir: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,

    /// Static assets directory copied into the output (images etc.)
    pub assets_dir: Option<PathBuf>,

    /// Base URL for the site
    pub base_url: String,

    /// Localized page titles, keyed by language
    pub titles: HashMap<Language, String>,

    /// Language the root redirect points at
    pub default_lang: Language,

    /// Minify the generated CSS
    pub minify: bool,

    /// Paths to extra CSS stylesheets to include
    pub styles: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            sections_dir: PathBuf::from("sections"),
            output_dir: PathBuf::from("dist"),
            assets_dir: None,
            base_url: "/".to_string(),
            titles: default_titles(),
            default_lang: Language::En,
            minify: true,
            styles: vec![],
        }
    }
}

fn default_titles() -> HashMap<Language, String> {
    HashMap::from([
        (Language::En, "Shehirian Family Kitchen".to_string()),
        (Language::Fr, "Cuisine familiale Shehirian".to_string()),
        (Language::Ar, "مطبخ عائلة شيهريان".to_string()),
    ])
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of language pages generated
    pub pages: usize,

    /// Total sections rendered across all pages
    pub sections_rendered: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read input: {0}")]
    ReadError(String),

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),

    #[error(transparent)]
    StateError(#[from] StateError),
}

/// Static site builder.
pub struct StaticBuilder {
    config: BuildConfig,
    templates: TemplateEngine,
}

impl StaticBuilder {
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            templates: TemplateEngine::new(),
        }
    }

    /// Build the static site: one page per language plus shared output.
    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let source = Arc::new(FsSource::new(self.config.sections_dir.clone()));

        let mut pages = 0;
        let mut sections_rendered = 0;

        for lang in Language::ALL {
            sections_rendered += self.build_page(Arc::clone(&source), lang).await?;
            pages += 1;
        }

        self.write_redirect()?;
        self.generate_assets()?;
        self.generate_sitemap()?;

        let duration = start.elapsed();

        Ok(BuildResult {
            pages,
            sections_rendered,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Compose and write one language page. Returns the number of sections
    /// that rendered.
    async fn build_page(&self, source: Arc<FsSource>, lang: Language) -> Result<usize, BuildError> {
        // Build-time state is throwaway: one in-memory store per page.
        let state = AppState::with_language(MemoryStore::new(), lang)?;

        let composer = Composer::new(source, state);
        let mut container = Node::new("div").id("preview");
        let summary = composer.compose(&mut container).await;

        let ctx = PageContext {
            lang: lang.code().to_string(),
            dir: lang.direction().as_str().to_string(),
            title: self.title_for(lang),
            content: container.to_html(),
            jsonld: self.load_jsonld(lang),
            languages: Language::ALL
                .iter()
                .map(|l| SwitcherLink {
                    code: l.code().to_string(),
                    label: l.code().to_uppercase(),
                    active: *l == lang,
                })
                .collect(),
            base_url: self.config.base_url.clone(),
            styles: self
                .config
                .styles
                .iter()
                .map(|s| {
                    let filename = PathBuf::from(s)
                        .file_name()
                        .and_then(|f| f.to_str())
                        .unwrap_or("style.css")
                        .to_string();
                    format!("{}assets/{}", self.config.base_url, filename)
                })
                .collect(),
        };

        let html = self
            .templates
            .render_page(&ctx)
            .map_err(|e| BuildError::TemplateError(e.to_string()))?;

        let path = self
            .config
            .output_dir
            .join(format!("index.{}.html", lang.code()));
        fs::write(&path, html).map_err(|e| BuildError::WriteError(e.to_string()))?;

        tracing::info!(lang = %lang, "{summary} sections rendered into {}", path.display());

        Ok(summary.rendered)
    }

    fn title_for(&self, lang: Language) -> String {
        self.config
            .titles
            .get(&lang)
            .cloned()
            .unwrap_or_else(|| "Shehirian Family Kitchen".to_string())
    }

    /// Build-time structured data: `<section>/<section>.<lang>.jsonld`
    /// files embedded verbatim into the page head. Missing files are
    /// normal; unreadable ones are skipped with a warning.
    fn load_jsonld(&self, lang: Language) -> Vec<String> {
        let mut blocks = Vec::new();
        for section in Section::ALL {
            let path = self
                .config
                .sections_dir
                .join(section.name())
                .join(format!("{}.{}.jsonld", section.name(), lang.code()));
            if !path.exists() {
                continue;
            }
            match fs::read_to_string(&path) {
                Ok(block) => blocks.push(block),
                Err(e) => {
                    tracing::warn!("Skipping unreadable JSON-LD file {}: {}", path.display(), e);
                }
            }
        }
        blocks
    }

    /// Root index.html redirecting to the default language page.
    fn write_redirect(&self) -> Result<(), BuildError> {
        let target = format!("index.{}.html", self.config.default_lang.code());
        let html = self
            .templates
            .render_redirect(&target)
            .map_err(|e| BuildError::TemplateError(e.to_string()))?;
        fs::write(self.config.output_dir.join("index.html"), html)
            .map_err(|e| BuildError::WriteError(e.to_string()))
    }

    /// Generate the stylesheet, copy configured styles and the assets dir.
    fn generate_assets(&self) -> Result<(), BuildError> {
        let assets_dir = self.config.output_dir.join("assets");
        fs::create_dir_all(&assets_dir).map_err(|e| BuildError::WriteError(e.to_string()))?;

        let css = AssetPipeline::generate_css();
        let css = if self.config.minify {
            AssetPipeline::minify_css(&css).unwrap_or(css)
        } else {
            css
        };
        fs::write(assets_dir.join("main.css"), css)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        for style_path in &self.config.styles {
            let source_path = PathBuf::from(style_path);
            if source_path.exists() {
                let filename = source_path
                    .file_name()
                    .and_then(|f| f.to_str())
                    .unwrap_or("style.css");
                let content = fs::read_to_string(&source_path).map_err(|e| {
                    BuildError::ReadError(format!("Failed to read stylesheet: {}", e))
                })?;
                fs::write(assets_dir.join(filename), content)
                    .map_err(|e| BuildError::WriteError(e.to_string()))?;
            } else {
                tracing::warn!("Stylesheet not found: {}", style_path);
            }
        }

        if let Some(ref src) = self.config.assets_dir {
            if src.exists() {
                self.copy_assets(src, &assets_dir)?;
            }
        }

        Ok(())
    }

    fn copy_assets(&self, src: &std::path::Path, dest: &std::path::Path) -> Result<(), BuildError> {
        for entry in walkdir::WalkDir::new(src)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let relative = path.strip_prefix(src).unwrap_or(path);
            let target = dest.join(relative);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
            }
            fs::copy(path, &target).map_err(|e| BuildError::WriteError(e.to_string()))?;
        }
        Ok(())
    }

    /// Sitemap with one URL per language page, plus robots.txt.
    fn generate_sitemap(&self) -> Result<(), BuildError> {
        let urls: Vec<String> = Language::ALL
            .iter()
            .map(|lang| {
                format!(
                    "  <url>\n    <loc>{}index.{}.html</loc>\n  </url>",
                    self.config.base_url,
                    lang.code()
                )
            })
            .collect();

        let sitemap = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
{}
</urlset>"#,
            urls.join("\n")
        );

        fs::write(self.config.output_dir.join("sitemap.xml"), sitemap)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let robots = format!(
            "User-agent: *\nAllow: /\nSitemap: {}sitemap.xml",
            self.config.base_url
        );
        fs::write(self.config.output_dir.join("robots.txt"), robots)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(())
    }
}
