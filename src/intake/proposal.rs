//! Batch envelope around one intake call

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::classify::AssetType;
use super::project::{ClassifiedAsset, ProposedProject};

/// The full proposal for one upload batch, ready for human review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeProposal {
    /// Correlates an accepted proposal with its upload batch
    pub batch_id: Uuid,

    pub created_at: DateTime<Utc>,

    pub total_files: usize,

    pub total_bytes: u64,

    /// Largest projects first
    pub projects: Vec<ProposedProject>,
}

/// Counts shown above a proposal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalSummary {
    pub project_count: usize,
    pub asset_count: usize,
    pub projects_with_stems: usize,
    pub projects_with_session: usize,
    pub by_type: BTreeMap<AssetType, usize>,
}

impl IntakeProposal {
    pub fn new(projects: Vec<ProposedProject>) -> Self {
        let total_files = projects.iter().map(|p| p.asset_count()).sum();
        let total_bytes = projects.iter().map(|p| p.total_bytes()).sum();

        Self {
            batch_id: Uuid::new_v4(),
            created_at: Utc::now(),
            total_files,
            total_bytes,
            projects,
        }
    }

    /// Every asset across all projects, project by project
    pub fn assets(&self) -> impl Iterator<Item = &ClassifiedAsset> {
        self.projects.iter().flat_map(|p| p.assets.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn summary(&self) -> ProposalSummary {
        let mut by_type = BTreeMap::new();
        for asset in self.assets() {
            *by_type.entry(asset.asset_type).or_insert(0) += 1;
        }

        ProposalSummary {
            project_count: self.projects.len(),
            asset_count: self.total_files,
            projects_with_stems: self.projects.iter().filter(|p| p.has_stems).count(),
            projects_with_session: self.projects.iter().filter(|p| p.has_session).count(),
            by_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(filename: &str, asset_type: AssetType, size_bytes: u64) -> ClassifiedAsset {
        ClassifiedAsset {
            filename: filename.to_string(),
            extension: "wav".to_string(),
            size_bytes,
            asset_type,
            is_primary: false,
            source_index: 0,
        }
    }

    #[test]
    fn test_totals_and_summary() {
        let proposal = IntakeProposal::new(vec![
            ProposedProject::new(
                "song".to_string(),
                vec![
                    asset("Song.wav", AssetType::MasterAudio, 10),
                    asset("Song_kick.wav", AssetType::Stem, 5),
                    asset("Song_snare.wav", AssetType::Stem, 5),
                ],
            ),
            ProposedProject::new("notes".to_string(), vec![asset("notes.pdf", AssetType::Document, 1)]),
        ]);

        assert_eq!(proposal.total_files, 4);
        assert_eq!(proposal.total_bytes, 21);
        assert_eq!(proposal.assets().count(), 4);

        let summary = proposal.summary();
        assert_eq!(summary.project_count, 2);
        assert_eq!(summary.projects_with_stems, 1);
        assert_eq!(summary.projects_with_session, 0);
        assert_eq!(summary.by_type.get(&AssetType::Stem), Some(&2));
        assert_eq!(summary.by_type.get(&AssetType::DawSession), None);
    }

    #[test]
    fn test_batches_get_distinct_ids() {
        let a = IntakeProposal::new(Vec::new());
        let b = IntakeProposal::new(Vec::new());
        assert!(a.is_empty());
        assert_ne!(a.batch_id, b.batch_id);
    }

    #[test]
    fn test_json_shape() {
        let proposal = IntakeProposal::new(Vec::new());
        let json = serde_json::to_value(&proposal).unwrap();
        assert!(json["batch_id"].is_string());
        assert!(json["created_at"].is_string());
        assert_eq!(json["projects"], serde_json::json!([]));
    }
}
