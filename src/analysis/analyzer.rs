//! Content analyzer trait and core types

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Descriptive metadata an analyzer may attach to a project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentMetadata {
    pub tempo_bpm: Option<f32>,
    pub musical_key: Option<String>,
    pub genre: Option<String>,
}

impl ContentMetadata {
    pub fn is_empty(&self) -> bool {
        self.tempo_bpm.is_none() && self.musical_key.is_none() && self.genre.is_none()
    }
}

/// Trait that all content analyzers must implement
pub trait ContentAnalyzer: Send + Sync {
    /// Short identifier used in logs and errors
    fn name(&self) -> &str;

    /// Analyze the raw bytes of a primary audio asset
    fn analyze(&self, bytes: &[u8]) -> Result<ContentMetadata>;

    /// Whether the analyzer needs file content at all
    ///
    /// Analyzers returning `false` are never handed bytes, which saves the
    /// caller from reading files.
    fn needs_content(&self) -> bool {
        true
    }
}

/// Leaves every field empty
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAnalyzer;

impl ContentAnalyzer for NoopAnalyzer {
    fn name(&self) -> &str {
        "noop"
    }

    fn analyze(&self, _bytes: &[u8]) -> Result<ContentMetadata> {
        Ok(ContentMetadata::default())
    }

    fn needs_content(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_analyzer() {
        let analyzer = NoopAnalyzer;
        let metadata = analyzer.analyze(b"RIFF").unwrap();

        assert!(metadata.is_empty());
        assert!(!analyzer.needs_content());
        assert_eq!(analyzer.name(), "noop");
    }
}
