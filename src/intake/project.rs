//! Proposed project and classified asset types

use serde::{Deserialize, Serialize};

use super::classify::AssetType;
use super::title::humanize_title;
use crate::analysis::ContentMetadata;

/// One input file after classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedAsset {
    pub filename: String,

    /// Extension as written in the filename, without the dot
    pub extension: String,

    pub size_bytes: u64,

    #[serde(rename = "type")]
    pub asset_type: AssetType,

    /// Representative file of its project
    pub is_primary: bool,

    /// Position of the file in the input batch
    #[serde(skip)]
    pub source_index: usize,
}

/// A cluster of related files proposed as one creative project.
///
/// Produced fresh for each intake call; accepting, editing and storing it is
/// up to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposedProject {
    /// Normalized, lower-case basename shared by every asset
    pub group_key: String,

    /// Display title derived from `group_key`
    pub title: String,

    /// Assets in input order
    pub assets: Vec<ClassifiedAsset>,

    pub has_stems: bool,

    pub has_session: bool,

    /// Placeholder descriptive fields. The engine never fills these; see
    /// `crate::analysis`.
    pub tempo_bpm: Option<f32>,
    pub musical_key: Option<String>,
    pub genre: Option<String>,
}

impl ProposedProject {
    pub fn new(group_key: String, assets: Vec<ClassifiedAsset>) -> Self {
        let has_stems = assets.iter().any(|a| a.asset_type == AssetType::Stem);
        let has_session = assets.iter().any(|a| a.asset_type == AssetType::DawSession);

        Self {
            title: humanize_title(&group_key),
            group_key,
            assets,
            has_stems,
            has_session,
            tempo_bpm: None,
            musical_key: None,
            genre: None,
        }
    }

    /// The asset flagged as primary, if any
    pub fn primary_asset(&self) -> Option<&ClassifiedAsset> {
        self.assets.iter().find(|a| a.is_primary)
    }

    pub fn asset_count(&self) -> usize {
        self.assets.len()
    }

    /// Number of assets of the given type
    pub fn count_of(&self, asset_type: AssetType) -> usize {
        self.assets.iter().filter(|a| a.asset_type == asset_type).count()
    }

    pub fn total_bytes(&self) -> u64 {
        self.assets.iter().map(|a| a.size_bytes).sum()
    }

    /// Attach descriptive metadata from a content analyzer.
    pub fn with_metadata(mut self, metadata: ContentMetadata) -> Self {
        self.tempo_bpm = metadata.tempo_bpm;
        self.musical_key = metadata.musical_key;
        self.genre = metadata.genre;
        self
    }
}
