//! Page sections.
//!
//! Each section is an independent, independently-failable content block
//! with its own localized document and its own schema of optional fields.
//! All six share the same contract: fetch the document for a language,
//! substitute documented defaults for anything missing, and produce a node
//! tree, or resolve to `None` when the fetch itself fails.

pub mod about;
pub mod certifications;
pub mod companies;
pub mod contact;
pub mod hero;
pub mod recipes;

use crate::content::ContentSource;
use crate::lang::Language;
use crate::node::Node;

/// The content sections of the page, in declared insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    AboutUs,
    Companies,
    Recipes,
    Certifications,
    ContactUs,
}

impl Section {
    /// Declared page order. The composer inserts sections in exactly this
    /// order regardless of which fetch resolves first.
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::AboutUs,
        Section::Companies,
        Section::Recipes,
        Section::Certifications,
        Section::ContactUs,
    ];

    /// Content directory name, also the document file stem.
    pub fn name(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::AboutUs => "aboutUs",
            Section::Companies => "ourCompanies",
            Section::Recipes => "recipes",
            Section::Certifications => "certifications",
            Section::ContactUs => "contactUs",
        }
    }

    /// Render this section for a language. Resolves to `None` when the
    /// content fetch fails; partial content renders with defaults.
    pub async fn render<S: ContentSource>(&self, source: &S, lang: Language) -> Option<Node> {
        match self {
            Section::Hero => hero::render(source, lang).await,
            Section::AboutUs => about::render(source, lang).await,
            Section::Companies => companies::render(source, lang).await,
            Section::Recipes => recipes::render(source, lang).await,
            Section::Certifications => certifications::render(source, lang).await,
            Section::ContactUs => contact::render(source, lang).await,
        }
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::time::Duration;

    use serde_json::Value;

    use crate::content::{ContentError, ContentSource};
    use crate::lang::Language;

    /// In-memory content source for tests. Sections without a document
    /// fail their fetch; per-section delays simulate slow responses.
    #[derive(Debug, Default)]
    pub struct TestSource {
        docs: HashMap<&'static str, Value>,
        delays: HashMap<&'static str, Duration>,
    }

    impl TestSource {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_doc(mut self, section: &'static str, doc: Value) -> Self {
            self.docs.insert(section, doc);
            self
        }

        /// Every section resolves to the minimal valid document.
        pub fn all_empty() -> Self {
            let mut source = Self::new();
            for section in super::Section::ALL {
                source.docs.insert(section.name(), serde_json::json!({}));
            }
            source
        }

        pub fn with_delay(mut self, section: &'static str, delay: Duration) -> Self {
            self.delays.insert(section, delay);
            self
        }
    }

    impl ContentSource for TestSource {
        async fn fetch(&self, section: &str, _lang: Language) -> Result<Value, ContentError> {
            if let Some(delay) = self.delays.get(section) {
                tokio::time::sleep(*delay).await;
            }
            self.docs
                .get(section)
                .cloned()
                .ok_or_else(|| ContentError::NotFound(PathBuf::from(section)))
        }
    }
}
