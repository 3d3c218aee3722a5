//! Intake rule tables
//!
//! Every extension set, suffix pattern and keyword list the engine consults
//! lives here as data. The engine receives an `IntakeRules` value instead of
//! reading globals, so tests and hosts can swap in their own tables.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{IntakeError, Result};

/// Characters that may precede a stem keyword inside a filename.
pub const TOKEN_DELIMITERS: [char; 3] = ['_', '-', ' '];

/// Grouping key used when normalization leaves nothing behind.
pub const DEFAULT_FALLBACK_KEY: &str = "untitled";

const SESSION_EXTENSIONS: &[&str] = &["flp", "ptx", "ptf", "als", "logicx", "band", "rpp", "cpr", "npr"];
const DOCUMENT_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "txt", "rtf", "md"];
const ARCHIVE_EXTENSIONS: &[&str] = &["zip", "rar", "7z", "tar", "gz"];
const AUDIO_EXTENSIONS: &[&str] = &["wav", "mp3", "aiff", "flac", "ogg", "m4a", "aac"];

const STEM_KEYWORDS: &[&str] = &[
    "kick", "snare", "hat", "hihat", "clap", "perc", "bass", "sub", "808", "lead", "melody",
    "synth", "pad", "chord", "vocal", "vox", "drum", "drums", "fx", "sfx", "guitar", "piano",
    "keys", "string", "brass", "horn",
];

const ALT_MARKERS: &[&str] = &["_alt", "_v", "_version"];
const REFERENCE_MARKERS: &[&str] = &["_ref", "_reference", "_inspo"];

/// A version or role suffix anchored to the end of a basename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SuffixPattern {
    /// Exact trailing text, e.g. `_final`
    Literal { suffix: String },

    /// Trailing prefix followed by one or more ASCII digits, e.g. `_v` matches `_v12`
    Numbered { prefix: String },
}

impl SuffixPattern {
    pub fn literal(suffix: &str) -> Self {
        SuffixPattern::Literal {
            suffix: suffix.to_string(),
        }
    }

    pub fn numbered(prefix: &str) -> Self {
        SuffixPattern::Numbered {
            prefix: prefix.to_string(),
        }
    }

    /// Pattern text without the digit placeholder.
    pub fn text(&self) -> &str {
        match self {
            SuffixPattern::Literal { suffix } => suffix,
            SuffixPattern::Numbered { prefix } => prefix,
        }
    }

    /// Copy of this pattern with its text lower-cased.
    pub fn to_lowercase(&self) -> Self {
        match self {
            SuffixPattern::Literal { suffix } => SuffixPattern::Literal {
                suffix: suffix.to_lowercase(),
            },
            SuffixPattern::Numbered { prefix } => SuffixPattern::Numbered {
                prefix: prefix.to_lowercase(),
            },
        }
    }

    /// Strip this pattern from the end of `value`.
    ///
    /// Both sides are expected to be lower-case already; returns `None` when
    /// the pattern does not match.
    pub fn strip<'a>(&self, value: &'a str) -> Option<&'a str> {
        match self {
            SuffixPattern::Literal { suffix } => value.strip_suffix(suffix.as_str()),
            SuffixPattern::Numbered { prefix } => {
                let without_digits = value.trim_end_matches(|c: char| c.is_ascii_digit());
                if without_digits.len() == value.len() {
                    return None;
                }
                without_digits.strip_suffix(prefix.as_str())
            }
        }
    }
}

/// The full set of tables driving classification and grouping.
///
/// Every field falls back to the built-in table when omitted from a rules
/// file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeRules {
    /// DAW project files
    pub session_extensions: Vec<String>,

    /// Notes, lyrics, split sheets
    pub document_extensions: Vec<String>,

    /// Compressed bundles, always `OTHER`
    pub archive_extensions: Vec<String>,

    /// Rendered audio
    pub audio_extensions: Vec<String>,

    /// Stripped from basenames in order
    pub suffix_patterns: Vec<SuffixPattern>,

    /// Instrument roles, in stripping order
    pub stem_keywords: Vec<String>,

    /// Substrings marking an alternate bounce
    pub alt_markers: Vec<String>,

    /// Substrings marking reference material
    pub reference_markers: Vec<String>,

    /// Grouping key for basenames that normalize to nothing
    pub fallback_key: String,
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

impl Default for IntakeRules {
    fn default() -> Self {
        let mut suffix_patterns = vec![
            SuffixPattern::numbered("_v"),
            SuffixPattern::numbered("-v"),
            SuffixPattern::numbered("_version"),
        ];
        suffix_patterns.extend(
            [
                "_mix",
                "_master",
                "_final",
                "_bounce",
                "_stereo",
                "_mono",
                "_instrumental",
                "_inst",
                "_acapella",
                "_clean",
                "_dirty",
                "_radio",
                "_extended",
                "_short",
            ]
            .iter()
            .map(|s| SuffixPattern::literal(s)),
        );

        Self {
            session_extensions: owned(SESSION_EXTENSIONS),
            document_extensions: owned(DOCUMENT_EXTENSIONS),
            archive_extensions: owned(ARCHIVE_EXTENSIONS),
            audio_extensions: owned(AUDIO_EXTENSIONS),
            suffix_patterns,
            stem_keywords: owned(STEM_KEYWORDS),
            alt_markers: owned(ALT_MARKERS),
            reference_markers: owned(REFERENCE_MARKERS),
            fallback_key: DEFAULT_FALLBACK_KEY.to_string(),
        }
    }
}

impl IntakeRules {
    /// Load rules from a JSON file, filling omitted fields with defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => IntakeError::FileNotFound {
                path: path.to_path_buf(),
                source: Some(e),
            },
            _ => IntakeError::Io(e),
        })?;

        let rules: IntakeRules = serde_json::from_str(&json)?;
        rules.validate()?;

        tracing::debug!(path = %path.display(), "Loaded intake rules");
        Ok(rules)
    }

    /// Reject tables that would make classification ambiguous or grouping
    /// keys empty.
    pub fn validate(&self) -> Result<()> {
        if self.fallback_key.trim().is_empty() {
            return Err(IntakeError::InvalidRules {
                reason: "fallback_key must not be empty".to_string(),
            });
        }

        let lists: [(&str, &[String]); 7] = [
            ("session_extensions", self.session_extensions.as_slice()),
            ("document_extensions", self.document_extensions.as_slice()),
            ("archive_extensions", self.archive_extensions.as_slice()),
            ("audio_extensions", self.audio_extensions.as_slice()),
            ("stem_keywords", self.stem_keywords.as_slice()),
            ("alt_markers", self.alt_markers.as_slice()),
            ("reference_markers", self.reference_markers.as_slice()),
        ];
        for (name, list) in lists {
            if list.iter().any(|entry| entry.trim().is_empty()) {
                return Err(IntakeError::InvalidRules {
                    reason: format!("{} contains an empty entry", name),
                });
            }
        }

        if self.suffix_patterns.iter().any(|p| p.text().is_empty()) {
            return Err(IntakeError::InvalidRules {
                reason: "suffix_patterns contains an empty pattern".to_string(),
            });
        }

        let mut owner: HashMap<String, &str> = HashMap::new();
        for (name, list) in &lists[..4] {
            for ext in list.iter() {
                let ext = ext.to_lowercase();
                if let Some(previous) = owner.insert(ext.clone(), *name) {
                    if previous != *name {
                        return Err(IntakeError::InvalidRules {
                            reason: format!(
                                "extension '{}' appears in both {} and {}",
                                ext, previous, name
                            ),
                        });
                    }
                }
            }
        }

        Ok(())
    }

    pub fn is_session_extension(&self, extension: &str) -> bool {
        contains_ignore_case(&self.session_extensions, extension)
    }

    pub fn is_document_extension(&self, extension: &str) -> bool {
        contains_ignore_case(&self.document_extensions, extension)
    }

    pub fn is_archive_extension(&self, extension: &str) -> bool {
        contains_ignore_case(&self.archive_extensions, extension)
    }

    pub fn is_audio_extension(&self, extension: &str) -> bool {
        contains_ignore_case(&self.audio_extensions, extension)
    }
}

fn contains_ignore_case(set: &[String], extension: &str) -> bool {
    !extension.is_empty() && set.iter().any(|e| e.eq_ignore_ascii_case(extension))
}
