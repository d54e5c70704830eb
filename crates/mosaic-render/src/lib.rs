//! Multilingual section rendering for mosaic sites.
//!
//! A page is composed of independent content sections (hero, about,
//! companies, recipes, certifications, contact). Each section fetches its
//! localized JSON document, falls back to documented defaults when content
//! is missing, and produces a content-node tree. The [`Composer`] runs all
//! sections concurrently for the active language and assembles the page
//! container in declared order, tolerating individual failures.

pub mod composer;
pub mod content;
pub mod lang;
pub mod node;
pub mod schema;
pub mod sections;
pub mod state;

pub use composer::{ComposeSummary, Composer};
pub use content::{fetch_section, ContentError, ContentSource, FsSource};
pub use lang::{Language, TextDirection};
pub use node::Node;
pub use sections::Section;
pub use state::{AppState, FileStore, MemoryStore, StateError, StateStore, LANG_KEY};
