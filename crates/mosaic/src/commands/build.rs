//! Static site build command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use mosaic_static::{BuildConfig, StaticBuilder};

use super::config::ConfigFile;

/// Run the build command.
pub async fn run(config_path: &Path, output: Option<PathBuf>, minify: Option<bool>) -> Result<()> {
    tracing::info!("Building static site...");

    let file_config = ConfigFile::load(config_path)?;

    let mut config = BuildConfig {
        sections_dir: PathBuf::from(&file_config.site.sections),
        output_dir: output.unwrap_or_else(|| PathBuf::from(&file_config.site.output)),
        assets_dir: file_config.site.assets.as_ref().map(PathBuf::from),
        base_url: file_config.site.base_url.clone(),
        default_lang: file_config.default_language(),
        minify: minify.unwrap_or(file_config.build.minify),
        styles: file_config.site.styles.clone().unwrap_or_default(),
        ..Default::default()
    };

    // Only override the default titles when the config names any.
    let titles = file_config.titles();
    if !titles.is_empty() {
        config.titles = titles;
    }

    let result = StaticBuilder::new(config).build().await?;

    tracing::info!(
        "Built {} pages ({} sections rendered) in {}ms",
        result.pages,
        result.sections_rendered,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
