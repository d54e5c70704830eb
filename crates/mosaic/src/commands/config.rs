//! Configuration file (site.toml) shared by the build and preview commands.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::Result;
use mosaic_render::Language;
use serde::Deserialize;

/// Configuration file structure (site.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub build: BuildSettings,
}

#[derive(Debug, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_sections_dir")]
    pub sections: String,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_lang")]
    pub default_lang: String,
    /// Static assets directory copied into the output
    pub assets: Option<String>,
    /// Paths to CSS stylesheets to include
    pub styles: Option<Vec<String>>,
    /// Localized page titles keyed by language code
    #[serde(default)]
    pub titles: HashMap<String, String>,
    /// Persisted state file used by the preview command
    #[serde(default = "default_state_file")]
    pub state_file: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            sections: default_sections_dir(),
            output: default_output(),
            base_url: default_base_url(),
            default_lang: default_lang(),
            assets: None,
            styles: None,
            titles: HashMap::new(),
            state_file: default_state_file(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BuildSettings {
    #[serde(default = "default_minify")]
    pub minify: bool,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            minify: default_minify(),
        }
    }
}

fn default_sections_dir() -> String {
    "sections".to_string()
}
fn default_output() -> String {
    "dist".to_string()
}
fn default_base_url() -> String {
    "/".to_string()
}
fn default_lang() -> String {
    "en".to_string()
}
fn default_state_file() -> String {
    ".mosaic-state.json".to_string()
}
fn default_minify() -> bool {
    true
}

impl ConfigFile {
    /// Load configuration from the given path if it exists.
    /// Returns an error if the config file exists but is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
            let config: ConfigFile = toml::from_str(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
            tracing::info!("Loaded config from {}", path.display());
            return Ok(config);
        }
        Ok(ConfigFile::default())
    }

    /// Localized titles with parseable language keys; unknown codes are
    /// skipped with a warning.
    pub fn titles(&self) -> HashMap<Language, String> {
        let mut titles = HashMap::new();
        for (code, title) in &self.site.titles {
            match code.parse::<Language>() {
                Ok(lang) => {
                    titles.insert(lang, title.clone());
                }
                Err(_) => {
                    tracing::warn!("Ignoring title for unsupported language: {}", code);
                }
            }
        }
        titles
    }

    pub fn default_language(&self) -> Language {
        self.site.default_lang.parse().unwrap_or_default()
    }
}
