//! Creative-file intake engine
//!
//! Turns a flat batch of uploaded file names into proposed projects:
//! - `descriptor` splits names into basename and extension
//! - `normalize` derives a grouping key per file
//! - `classify` assigns each file an `AssetType`
//! - `group` buckets files by key, largest first
//! - `primary` flags one representative asset per project
//! - `title` turns keys into display titles
//!
//! The engine is pure and synchronous: it reads no file content, keeps no
//! state between calls, and every input (including an empty batch) yields a
//! valid proposal.

mod classify;
mod descriptor;
mod group;
mod normalize;
mod primary;
mod project;
mod proposal;
mod rules;
mod title;

pub use classify::{AssetType, Classifier};
pub use descriptor::{FileDescriptor, ParsedFile};
pub use group::ProjectGrouper;
pub use normalize::Normalizer;
pub use primary::select_primary;
pub use project::{ClassifiedAsset, ProposedProject};
pub use proposal::{IntakeProposal, ProposalSummary};
pub use rules::{IntakeRules, SuffixPattern, DEFAULT_FALLBACK_KEY, TOKEN_DELIMITERS};
pub use title::humanize_title;

/// Classifies and groups upload batches with one set of rules.
#[derive(Debug, Clone)]
pub struct IntakeEngine {
    rules: IntakeRules,
    normalizer: Normalizer,
    classifier: Classifier,
}

impl Default for IntakeEngine {
    fn default() -> Self {
        Self::new(IntakeRules::default())
    }
}

impl IntakeEngine {
    pub fn new(rules: IntakeRules) -> Self {
        let normalizer = Normalizer::new(&rules);
        let classifier = Classifier::new(&rules);
        Self {
            rules,
            normalizer,
            classifier,
        }
    }

    pub fn rules(&self) -> &IntakeRules {
        &self.rules
    }

    /// Grouping key for a single filename
    pub fn group_key(&self, filename: &str) -> String {
        self.normalizer.group_key(ParsedFile::parse(filename).basename)
    }

    /// Asset type for a single filename
    pub fn classify(&self, filename: &str) -> AssetType {
        let parsed = ParsedFile::parse(filename);
        self.classifier.classify(parsed.extension, parsed.filename)
    }

    /// Propose projects for a batch of files.
    ///
    /// Every input file appears exactly once across the returned projects.
    pub fn propose(&self, files: &[FileDescriptor]) -> Vec<ProposedProject> {
        let mut grouper = ProjectGrouper::new();

        for (source_index, file) in files.iter().enumerate() {
            let parsed = ParsedFile::parse(&file.filename);
            let group_key = self.normalizer.group_key(parsed.basename);
            let asset_type = self.classifier.classify(parsed.extension, parsed.filename);

            tracing::debug!(
                filename = %file.filename,
                group_key = %group_key,
                asset_type = %asset_type,
                "Classified file"
            );

            grouper.push(
                group_key,
                ClassifiedAsset {
                    filename: file.filename.clone(),
                    extension: parsed.extension.to_string(),
                    size_bytes: file.size_bytes,
                    asset_type,
                    is_primary: false,
                    source_index,
                },
            );
        }

        let projects: Vec<ProposedProject> = grouper
            .into_groups()
            .into_iter()
            .map(|(group_key, mut assets)| {
                select_primary(&mut assets, &self.rules);
                ProposedProject::new(group_key, assets)
            })
            .collect();

        tracing::info!(
            files = files.len(),
            projects = projects.len(),
            "Proposed projects for intake batch"
        );

        projects
    }

    /// Propose projects and wrap them in a batch envelope.
    pub fn propose_batch(&self, files: &[FileDescriptor]) -> IntakeProposal {
        IntakeProposal::new(self.propose(files))
    }
}
