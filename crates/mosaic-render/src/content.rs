//! Localized content sources.
//!
//! Every section reads one document per language, named
//! `<section>/<section>.<lang>.json` under the sections directory. Content
//! is fetched fresh on every composition; there is no caching layer.

use std::path::PathBuf;

use serde_json::Value;

use crate::lang::Language;

/// Errors from fetching a section document.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Content not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Where localized section documents come from.
pub trait ContentSource: Send + Sync {
    /// Fetch the raw JSON document for one section in one language.
    fn fetch(
        &self,
        section: &str,
        lang: Language,
    ) -> impl std::future::Future<Output = Result<Value, ContentError>> + Send;
}

/// Filesystem source rooted at a sections directory.
#[derive(Debug, Clone)]
pub struct FsSource {
    sections_dir: PathBuf,
}

impl FsSource {
    pub fn new(sections_dir: impl Into<PathBuf>) -> Self {
        Self {
            sections_dir: sections_dir.into(),
        }
    }

    fn document_path(&self, section: &str, lang: Language) -> PathBuf {
        self.sections_dir
            .join(section)
            .join(format!("{}.{}.json", section, lang.code()))
    }
}

impl ContentSource for FsSource {
    async fn fetch(&self, section: &str, lang: Language) -> Result<Value, ContentError> {
        let path = self.document_path(section, lang);

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                return Err(ContentError::NotFound(path));
            }
            Err(source) => return Err(ContentError::Read { path, source }),
        };

        serde_json::from_slice(&bytes).map_err(|source| ContentError::Parse { path, source })
    }
}

/// Shared fetch-and-fallback step used by every section renderer.
///
/// A failed fetch (missing file, I/O error, unparseable JSON) resolves to
/// `None`: the section is skipped for this page load. A document that is
/// valid JSON but does not match the section schema resolves to the schema's
/// defaults, so partial or odd-shaped content still renders a skeleton.
/// Errors never propagate past this boundary.
pub async fn fetch_section<S, T>(source: &S, section: &str, lang: Language) -> Option<T>
where
    S: ContentSource,
    T: serde::de::DeserializeOwned + Default,
{
    match source.fetch(section, lang).await {
        Ok(value) => Some(serde_json::from_value(value).unwrap_or_else(|err| {
            tracing::debug!(
                section,
                lang = %lang,
                "document did not match the section schema, using defaults: {err}"
            );
            T::default()
        })),
        Err(err) => {
            tracing::warn!(section, lang = %lang, "content fetch failed, section skipped: {err}");
            None
        }
    }
}
