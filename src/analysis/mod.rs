//! Content analysis interfaces and implementations
//!
//! Tempo, key and genre are descriptive extras on a proposed project. They
//! never come from the intake engine itself; a host plugs in a
//! `ContentAnalyzer` and runs it over each project's primary asset.
//!
//! This module provides:
//! - `ContentAnalyzer` trait for all analyzers
//! - `NoopAnalyzer`, which leaves metadata empty
//! - `PlaceholderAnalyzer`, which fills in stand-in values
//! - `enrich_projects` to apply an analyzer to a proposal

mod analyzer;
mod enrich;
mod placeholder;

pub use analyzer::{ContentAnalyzer, ContentMetadata, NoopAnalyzer};
pub use enrich::enrich_projects;
pub use placeholder::PlaceholderAnalyzer;
