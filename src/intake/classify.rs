//! Asset type classification
//!
//! Maps `(extension, filename)` to one semantic role. Decision order, first
//! match wins:
//! 1. session extension → `DawSession`
//! 2. document extension → `Document`
//! 3. archive extension → `Other`
//! 4. audio extension → `Stem`, `AltBounce`, `Reference` or `MasterAudio`
//!    depending on markers in the full filename
//! 5. anything else → `Other`

use std::fmt;

use serde::{Deserialize, Serialize};

use super::rules::{IntakeRules, TOKEN_DELIMITERS};

/// Semantic role of an uploaded file within a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetType {
    MasterAudio,
    AltBounce,
    Stem,
    DawSession,
    Reference,
    Document,
    Other,
}

impl AssetType {
    /// All variants in declaration order
    pub const ALL: [AssetType; 7] = [
        AssetType::MasterAudio,
        AssetType::AltBounce,
        AssetType::Stem,
        AssetType::DawSession,
        AssetType::Reference,
        AssetType::Document,
        AssetType::Other,
    ];

    /// Stable identifier, matching the serialized form
    pub fn code(&self) -> &'static str {
        match self {
            AssetType::MasterAudio => "MASTER_AUDIO",
            AssetType::AltBounce => "ALT_BOUNCE",
            AssetType::Stem => "STEM",
            AssetType::DawSession => "DAW_SESSION",
            AssetType::Reference => "REFERENCE",
            AssetType::Document => "DOCUMENT",
            AssetType::Other => "OTHER",
        }
    }

    /// Rendered audio roles; only files with an audio extension get these
    pub fn is_audio(&self) -> bool {
        matches!(
            self,
            AssetType::MasterAudio | AssetType::AltBounce | AssetType::Stem | AssetType::Reference
        )
    }

    /// Human-readable label for review screens
    pub fn label(&self) -> &'static str {
        match self {
            AssetType::MasterAudio => "Master",
            AssetType::AltBounce => "Alt Bounce",
            AssetType::Stem => "Stem",
            AssetType::DawSession => "DAW Session",
            AssetType::Reference => "Reference",
            AssetType::Document => "Document",
            AssetType::Other => "Other",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Assigns an `AssetType` to each file from the configured tables.
///
/// Keyword and marker tables are lower-cased once at construction.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: IntakeRules,
    stem_keywords: Vec<String>,
    alt_markers: Vec<String>,
    reference_markers: Vec<String>,
}

impl Classifier {
    pub fn new(rules: &IntakeRules) -> Self {
        let lower = |list: &[String]| -> Vec<String> { list.iter().map(|s| s.to_lowercase()).collect() };
        Self {
            rules: rules.clone(),
            stem_keywords: lower(&rules.stem_keywords),
            alt_markers: lower(&rules.alt_markers),
            reference_markers: lower(&rules.reference_markers),
        }
    }

    /// Classify one file. Pure and deterministic.
    ///
    /// Marker checks scan the original filename rather than the grouping
    /// key, so `Song_kick_v2.wav` still carries both its stem keyword and its
    /// version marker; stem detection runs first and wins.
    pub fn classify(&self, extension: &str, filename: &str) -> AssetType {
        if self.rules.is_session_extension(extension) {
            return AssetType::DawSession;
        }
        if self.rules.is_document_extension(extension) {
            return AssetType::Document;
        }
        if self.rules.is_archive_extension(extension) {
            return AssetType::Other;
        }
        if !self.rules.is_audio_extension(extension) {
            return AssetType::Other;
        }

        let name = filename.to_lowercase();
        if self.has_stem_keyword(&name) {
            AssetType::Stem
        } else if contains_any(&name, &self.alt_markers) {
            AssetType::AltBounce
        } else if contains_any(&name, &self.reference_markers) {
            AssetType::Reference
        } else {
            AssetType::MasterAudio
        }
    }

    /// Any stem keyword directly preceded by a token delimiter.
    fn has_stem_keyword(&self, name: &str) -> bool {
        self.stem_keywords.iter().any(|keyword| {
            TOKEN_DELIMITERS
                .iter()
                .any(|delimiter| name.contains(&format!("{}{}", delimiter, keyword)))
        })
    }
}

fn contains_any(name: &str, markers: &[String]) -> bool {
    markers.iter().any(|marker| name.contains(marker.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::descriptor::ParsedFile;
    use test_case::test_case;

    fn classify(filename: &str) -> AssetType {
        let rules = IntakeRules::default();
        let parsed = ParsedFile::parse(filename);
        Classifier::new(&rules).classify(parsed.extension, parsed.filename)
    }

    #[test_case("Midnight_Dreams.flp", AssetType::DawSession ; "fl studio")]
    #[test_case("Song.als", AssetType::DawSession ; "ableton")]
    #[test_case("Session.PTX", AssetType::DawSession ; "upper case extension")]
    #[test_case("Song_kick.logicx", AssetType::DawSession ; "session wins over stem keyword")]
    #[test_case("notes.pdf", AssetType::Document ; "pdf")]
    #[test_case("lyrics_v2.txt", AssetType::Document ; "document wins over version marker")]
    #[test_case("stems.zip", AssetType::Other ; "archive")]
    #[test_case("cover.png", AssetType::Other ; "unknown extension")]
    #[test_case("README", AssetType::Other ; "no extension")]
    #[test_case("", AssetType::Other ; "empty name")]
    #[test_case("Midnight_Dreams.wav", AssetType::MasterAudio ; "plain audio")]
    #[test_case("Midnight_Dreams_kick.wav", AssetType::Stem ; "underscore stem")]
    #[test_case("Midnight Dreams Vocal.mp3", AssetType::Stem ; "space stem")]
    #[test_case("Midnight-Dreams-808.aiff", AssetType::Stem ; "dash stem")]
    #[test_case("Groove_Bassline.wav", AssetType::Stem ; "keyword prefix of word")]
    #[test_case("Groove_kick_v2.wav", AssetType::Stem ; "stem wins over version")]
    #[test_case("random_loop_v2.mp3", AssetType::AltBounce ; "version marker")]
    #[test_case("Song_ALT.flac", AssetType::AltBounce ; "alt marker")]
    #[test_case("Song_version3.ogg", AssetType::AltBounce ; "long version marker")]
    #[test_case("Song_ref.m4a", AssetType::Reference ; "reference marker")]
    #[test_case("Song_inspo.aac", AssetType::Reference ; "inspo marker")]
    #[test_case("Kickstart.wav", AssetType::MasterAudio ; "undelimited keyword")]
    fn test_classify(filename: &str, expected: AssetType) {
        assert_eq!(classify(filename), expected);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let names = ["Drop_Final.wav", "Drop_snare.wav", "Drop.flp", "Drop.zip"];
        for name in names {
            assert_eq!(classify(name), classify(name));
        }
    }

    #[test]
    fn test_mixed_case_tables() {
        let rules = IntakeRules {
            stem_keywords: vec!["CowBell".to_string()],
            reference_markers: vec!["_DEMO".to_string()],
            ..IntakeRules::default()
        };
        let classifier = Classifier::new(&rules);

        assert_eq!(classifier.classify("wav", "Song_cowbell.wav"), AssetType::Stem);
        assert_eq!(classifier.classify("wav", "Song_Demo.wav"), AssetType::Reference);
    }

    #[test]
    fn test_custom_tables() {
        let rules = IntakeRules {
            audio_extensions: vec!["opus".to_string()],
            stem_keywords: vec!["cowbell".to_string()],
            ..IntakeRules::default()
        };
        let classifier = Classifier::new(&rules);

        assert_eq!(classifier.classify("opus", "Song_cowbell.opus"), AssetType::Stem);
        assert_eq!(classifier.classify("opus", "Song_kick.opus"), AssetType::MasterAudio);
        assert_eq!(classifier.classify("wav", "Song.wav"), AssetType::Other);
    }

    #[test]
    fn test_serialized_form() {
        assert_eq!(
            serde_json::to_string(&AssetType::DawSession).unwrap(),
            "\"DAW_SESSION\""
        );
        for asset_type in AssetType::ALL {
            let json = serde_json::to_string(&asset_type).unwrap();
            assert_eq!(json, format!("\"{}\"", asset_type.code()));
        }
    }
}
