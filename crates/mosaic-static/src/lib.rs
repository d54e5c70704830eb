//! Static page builder for mosaic multilingual sites.
//!
//! Runs the section composer once per language at build time and writes one
//! static page per language, with build-time structured data embedded in
//! each page head.

pub mod assets;
pub mod builder;
pub mod templates;

pub use builder::{BuildConfig, BuildError, BuildResult, StaticBuilder};
