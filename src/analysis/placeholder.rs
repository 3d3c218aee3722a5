//! Placeholder content analyzer
//!
//! Produces a tempo, key and genre that look plausible on a review screen
//! but say nothing about the audio. Values are derived from a SHA-256 digest
//! of the content, so the same file always gets the same placeholders.

use sha2::{Digest, Sha256};

use super::analyzer::{ContentAnalyzer, ContentMetadata};
use crate::error::{IntakeError, Result};

/// Lowest placeholder tempo in BPM
pub const MIN_TEMPO_BPM: u16 = 70;

/// Highest placeholder tempo in BPM
pub const MAX_TEMPO_BPM: u16 = 170;

const KEYS: &[&str] = &[
    "C major", "C minor", "D major", "D minor", "E major", "E minor", "F major", "F minor",
    "G major", "G minor", "A major", "A minor", "B major", "B minor",
];

const GENRES: &[&str] = &[
    "Hip-Hop", "Trap", "R&B", "Pop", "Electronic", "Lo-Fi", "House", "Afrobeats", "Drill",
];

/// Deterministic stand-in for real audio analysis
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderAnalyzer;

impl PlaceholderAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl ContentAnalyzer for PlaceholderAnalyzer {
    fn name(&self) -> &str {
        "placeholder"
    }

    fn analyze(&self, bytes: &[u8]) -> Result<ContentMetadata> {
        if bytes.is_empty() {
            return Err(IntakeError::AnalysisFailed {
                analyzer: self.name().to_string(),
                reason: "no content to analyze".to_string(),
            });
        }

        let digest = Sha256::digest(bytes);
        let span = MAX_TEMPO_BPM - MIN_TEMPO_BPM + 1;
        let tempo = MIN_TEMPO_BPM + u16::from_be_bytes([digest[0], digest[1]]) % span;

        Ok(ContentMetadata {
            tempo_bpm: Some(f32::from(tempo)),
            musical_key: Some(KEYS[usize::from(digest[2]) % KEYS.len()].to_string()),
            genre: Some(GENRES[usize::from(digest[3]) % GENRES.len()].to_string()),
        })
    }
}
