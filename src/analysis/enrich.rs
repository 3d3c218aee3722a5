//! Applying a content analyzer to proposed projects

use super::analyzer::{ContentAnalyzer, ContentMetadata};
use crate::error::Result;
use crate::intake::{ClassifiedAsset, ProposedProject};

/// Run `analyzer` over the primary asset of every project.
///
/// `load` fetches an asset's bytes from wherever the caller keeps them. Only
/// projects whose primary asset is audio are analyzed. A failed load or
/// analysis is logged and leaves that project's metadata empty; projects and
/// assets are never dropped or reordered.
pub fn enrich_projects<F>(
    projects: Vec<ProposedProject>,
    analyzer: &dyn ContentAnalyzer,
    mut load: F,
) -> Vec<ProposedProject>
where
    F: FnMut(&ClassifiedAsset) -> Result<Vec<u8>>,
{
    projects
        .into_iter()
        .map(|project| {
            let Some(primary) = project.primary_asset().filter(|a| a.asset_type.is_audio()) else {
                return project;
            };

            let analyzed = if analyzer.needs_content() {
                load(primary).and_then(|bytes| analyzer.analyze(&bytes))
            } else {
                analyzer.analyze(&[])
            };

            match analyzed {
                Ok(metadata) => {
                    tracing::debug!(
                        group_key = %project.group_key,
                        analyzer = analyzer.name(),
                        "Attached content metadata"
                    );
                    project.with_metadata(metadata)
                }
                Err(e) => {
                    tracing::warn!(
                        group_key = %project.group_key,
                        filename = %primary.filename,
                        analyzer = analyzer.name(),
                        error = %e,
                        "Content analysis failed, leaving metadata empty"
                    );
                    project.with_metadata(ContentMetadata::default())
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{NoopAnalyzer, PlaceholderAnalyzer};
    use crate::error::IntakeError;
    use crate::intake::{FileDescriptor, IntakeEngine};
    use std::path::PathBuf;

    fn proposal() -> Vec<ProposedProject> {
        IntakeEngine::default().propose(&[
            FileDescriptor::new("Song.wav", 10),
            FileDescriptor::new("Song_kick.wav", 10),
            FileDescriptor::new("notes.pdf", 1),
        ])
    }

    #[test]
    fn test_placeholder_fills_audio_projects_only() {
        let mut loaded = Vec::new();
        let projects = enrich_projects(proposal(), &PlaceholderAnalyzer::new(), |asset| {
            loaded.push(asset.filename.clone());
            Ok(asset.filename.as_bytes().to_vec())
        });

        assert_eq!(loaded, vec!["Song.wav"]);
        assert!(projects[0].tempo_bpm.is_some());
        assert!(projects[0].genre.is_some());
        assert!(projects[1].tempo_bpm.is_none());
        assert_eq!(projects[1].group_key, "notes");
    }

    #[test]
    fn test_noop_never_loads() {
        let projects = enrich_projects(proposal(), &NoopAnalyzer, |_| {
            panic!("noop analyzer must not read content")
        });

        assert_eq!(projects.len(), 2);
        assert!(projects.iter().all(|p| p.tempo_bpm.is_none()));
    }

    #[test]
    fn test_load_failure_keeps_project() {
        let before = proposal();
        let after = enrich_projects(before.clone(), &PlaceholderAnalyzer::new(), |asset| {
            Err(IntakeError::FileNotFound {
                path: PathBuf::from(&asset.filename),
                source: None,
            })
        });

        assert_eq!(before, after);
    }
}
