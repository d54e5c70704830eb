//! Page composer.
//!
//! One composition is one page load: set the container's language and
//! direction, run every section renderer concurrently, then append the
//! sections that produced a node in declared order, never completion order.
//! A slow or broken section never blocks or aborts the others, and total
//! failure still settles to an empty container.

use std::fmt;
use std::sync::Arc;

use crate::content::ContentSource;
use crate::node::Node;
use crate::sections::Section;
use crate::state::{AppState, StateStore};

/// Outcome of one composition: sections rendered out of sections registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposeSummary {
    pub rendered: usize,
    pub total: usize,
}

impl fmt::Display for ComposeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.rendered, self.total)
    }
}

/// Orchestrates all section renderers for the active language.
pub struct Composer<C, S>
where
    C: ContentSource,
    S: StateStore,
{
    source: Arc<C>,
    state: AppState<S>,
    sections: Vec<Section>,
}

impl<C, S> Composer<C, S>
where
    C: ContentSource + 'static,
    S: StateStore,
{
    /// Composer over the full declared section list.
    pub fn new(source: Arc<C>, state: AppState<S>) -> Self {
        Self::with_sections(source, state, Section::ALL.to_vec())
    }

    /// Composer over an explicit section list.
    pub fn with_sections(source: Arc<C>, state: AppState<S>, sections: Vec<Section>) -> Self {
        Self {
            source,
            state,
            sections,
        }
    }

    pub fn state(&self) -> &AppState<S> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState<S> {
        &mut self.state
    }

    /// Compose one page load into `container`.
    ///
    /// The container's `lang`/`dir` attributes are set before any await so
    /// direction never depends on fetch timing. Each section runs as its own
    /// task; results are buffered and appended in declared order. A section
    /// that resolves to `None` is omitted silently; a panicked renderer is
    /// treated the same way.
    pub async fn compose(&self, container: &mut Node) -> ComposeSummary {
        let lang = self.state.language();
        container.set_attr("lang", lang.code());
        container.set_attr("dir", lang.direction().as_str());

        let handles: Vec<_> = self
            .sections
            .iter()
            .map(|&section| {
                let source = Arc::clone(&self.source);
                (
                    section,
                    tokio::spawn(async move { section.render(source.as_ref(), lang).await }),
                )
            })
            .collect();

        let mut rendered = 0;
        for (section, handle) in handles {
            match handle.await {
                Ok(Some(node)) => {
                    container.push_child(node);
                    rendered += 1;
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(section = section.name(), "section renderer panicked: {err}");
                }
            }
        }

        let summary = ComposeSummary {
            rendered,
            total: self.sections.len(),
        };
        tracing::info!(lang = %lang, "{summary} sections rendered");
        summary
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;

    use super::*;
    use crate::lang::Language;
    use crate::sections::testutil::TestSource;
    use crate::state::MemoryStore;

    fn composer_for(source: TestSource, lang: Language) -> Composer<TestSource, MemoryStore> {
        let state = AppState::with_language(MemoryStore::new(), lang).unwrap();
        Composer::new(Arc::new(source), state)
    }

    #[tokio::test]
    async fn hero_only_renders_one_of_six() {
        let source = TestSource::new().with_doc("hero", json!({"title": "Shehirian"}));
        let composer = composer_for(source, Language::En);

        let mut container = Node::new("div").id("preview");
        let summary = composer.compose(&mut container).await;

        assert_eq!(summary.to_string(), "1/6");
        assert_eq!(container.child_count(), 1);
        assert!(container.text_content().contains("Shehirian"));
    }

    #[tokio::test]
    async fn all_empty_documents_render_six_of_six() {
        let composer = composer_for(TestSource::all_empty(), Language::En);

        let mut container = Node::new("div").id("preview");
        let summary = composer.compose(&mut container).await;

        assert_eq!(summary, ComposeSummary { rendered: 6, total: 6 });
        assert_eq!(container.child_count(), 6);
    }

    #[tokio::test]
    async fn total_failure_settles_to_an_empty_container() {
        let composer = composer_for(TestSource::new(), Language::En);

        let mut container = Node::new("div").id("preview");
        let summary = composer.compose(&mut container).await;

        assert_eq!(summary.to_string(), "0/6");
        assert_eq!(container.child_count(), 0);
    }

    #[tokio::test]
    async fn insertion_order_ignores_completion_order() {
        // Delay the hero well past the others; it must still land first.
        let source = TestSource::all_empty()
            .with_delay("hero", Duration::from_millis(50))
            .with_doc("hero", json!({"title": "Slow Hero"}));
        let composer = composer_for(source, Language::En);

        let mut container = Node::new("div").id("preview");
        composer.compose(&mut container).await;

        let first = container.children().next().unwrap();
        assert_eq!(first.get_attr("id"), Some("home"));
        assert!(first.text_content().contains("Slow Hero"));

        let last = container.children().last().unwrap();
        assert_eq!(last.get_attr("class"), Some("contact-us"));
    }

    #[tokio::test]
    async fn direction_is_set_before_rendering() {
        let composer = composer_for(TestSource::new(), Language::Ar);

        let mut container = Node::new("div").id("preview");
        composer.compose(&mut container).await;

        assert_eq!(container.get_attr("dir"), Some("rtl"));
        assert_eq!(container.get_attr("lang"), Some("ar"));
    }
}
