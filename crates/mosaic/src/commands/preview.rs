//! Compose-and-print command.
//!
//! Composes a single page container for the persisted language (or a
//! language passed on the command line, which is persisted as a switch)
//! and prints the resulting HTML to stdout.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use mosaic_render::{AppState, Composer, FileStore, FsSource, Language, Node};

use super::config::ConfigFile;

/// Run the preview command.
pub async fn run(config_path: &Path, lang: Option<String>) -> Result<()> {
    let file_config = ConfigFile::load(config_path)?;

    let store = FileStore::open(&file_config.site.state_file)
        .context("Failed to open persisted state")?;
    let mut state = AppState::load(store);

    let mut container = Node::new("div").id("preview");

    // An explicit language is a language switch: persist it and update the
    // container direction before composing.
    if let Some(code) = lang {
        let lang: Language = code.parse()?;
        state
            .set_language(lang, &mut container)
            .context("Failed to persist language switch")?;
    }

    tracing::info!(lang = %state.language(), "Composing page...");

    let source = Arc::new(FsSource::new(&file_config.site.sections));
    let composer = Composer::new(source, state);
    let summary = composer.compose(&mut container).await;

    println!("{}", container.to_html());

    tracing::info!("{summary} sections rendered");

    Ok(())
}
