//! Preview server command.
//!
//! Serves the built output and lands the browser on the default language's
//! page, the same entry point the root redirect gives deployed visitors.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use axum::Router;
use mosaic_render::Language;
use tower_http::services::ServeDir;

use super::config::ConfigFile;

/// Run the serve command.
pub async fn run(config_path: &Path, port: u16, dir: PathBuf) -> Result<()> {
    if !dir.exists() {
        anyhow::bail!(
            "Directory not found: {}. Run 'mosaic build' first.",
            dir.display()
        );
    }

    let file_config = ConfigFile::load(config_path)?;
    let default_lang = file_config.default_language();

    let built = built_languages(&dir);
    if built.is_empty() {
        tracing::warn!(
            "No language pages found in {}. Run 'mosaic build' first.",
            dir.display()
        );
    } else {
        let codes: Vec<&str> = built.iter().map(|l| l.code()).collect();
        tracing::info!("Serving language pages: {}", codes.join(", "));
    }

    let addr: SocketAddr = format!("127.0.0.1:{}", port)
        .parse()
        .context("Invalid address")?;

    tracing::info!(
        "Serving {} at http://{}/{}",
        dir.display(),
        addr,
        landing_page(default_lang)
    );

    let app = Router::new().fallback_service(ServeDir::new(&dir));

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Land on the default language's page, like the root redirect does.
    let url = format!("http://{}/{}", addr, landing_page(default_lang));
    let _ = open::that(&url);

    axum::serve(listener, app).await?;

    Ok(())
}

/// The page the browser is opened on.
fn landing_page(lang: Language) -> String {
    format!("index.{}.html", lang.code())
}

/// Languages whose pages exist in the output directory.
fn built_languages(dir: &Path) -> Vec<Language> {
    Language::ALL
        .into_iter()
        .filter(|lang| dir.join(landing_page(*lang)).exists())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_page_follows_the_default_language() {
        assert_eq!(landing_page(Language::En), "index.en.html");
        assert_eq!(landing_page(Language::Ar), "index.ar.html");
    }

    #[test]
    fn detects_which_language_pages_were_built() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.en.html"), "<html></html>").unwrap();
        std::fs::write(dir.path().join("index.ar.html"), "<html></html>").unwrap();

        let built = built_languages(dir.path());
        assert_eq!(built, vec![Language::En, Language::Ar]);
    }
}
