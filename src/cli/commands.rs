//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::analysis::{enrich_projects, PlaceholderAnalyzer};
use crate::cli::scan::{scan_paths, ScannedFile};
use crate::error::{IntakeError, Result};
use crate::intake::{FileDescriptor, IntakeEngine, IntakeProposal, IntakeRules};

/// Options for the `propose` command.
#[derive(Debug, Clone, Default)]
pub struct ProposeOptions {
    pub recursive: bool,
    pub json: bool,
    pub placeholder_metadata: bool,
}

/// Load rules from `path`, or use the built-in tables.
pub fn load_rules(path: Option<&Path>) -> Result<IntakeRules> {
    match path {
        Some(path) => {
            info!("Loading intake rules: {}", path.display());
            IntakeRules::load(path)
        }
        None => Ok(IntakeRules::default()),
    }
}

/// Scan paths and print the proposed projects.
pub fn propose(paths: &[PathBuf], rules: IntakeRules, options: &ProposeOptions) -> Result<()> {
    let scanned = scan_paths(paths, options.recursive)?;
    info!("Taking in {} files", scanned.len());

    let proposal = build_proposal(&scanned, rules, options.placeholder_metadata);

    if options.json {
        println!("{}", proposal_json(&proposal)?);
    } else {
        print_proposal(&proposal);
    }

    Ok(())
}

/// Run the engine over scanned files, optionally filling placeholder metadata.
pub fn build_proposal(scanned: &[ScannedFile], rules: IntakeRules, placeholder_metadata: bool) -> IntakeProposal {
    let engine = IntakeEngine::new(rules);
    let descriptors: Vec<FileDescriptor> = scanned.iter().map(|s| s.descriptor.clone()).collect();
    let mut proposal = engine.propose_batch(&descriptors);

    if placeholder_metadata {
        // Same-named files from different directories are told apart by position.
        let projects = std::mem::take(&mut proposal.projects);
        proposal.projects = enrich_projects(projects, &PlaceholderAnalyzer::new(), |asset| {
            let path = scanned
                .get(asset.source_index)
                .map(|file| file.path.as_path())
                .ok_or_else(|| IntakeError::FileNotFound {
                    path: PathBuf::from(&asset.filename),
                    source: None,
                })?;
            Ok(fs::read(path)?)
        });
    }

    proposal
}

/// Print type and grouping key for bare filenames.
pub fn classify(filenames: &[String], rules: IntakeRules) -> Result<()> {
    let engine = IntakeEngine::new(rules);
    print!("{}", classification_table(filenames, &engine));
    Ok(())
}

/// Print the effective rules as JSON.
pub fn show_rules(rules: &IntakeRules) -> Result<()> {
    println!("{}", rules_json(rules)?);
    Ok(())
}

/// One line per filename: name, asset type code and grouping key.
pub fn classification_table(filenames: &[String], engine: &IntakeEngine) -> String {
    let width = filenames.iter().map(|f| f.len()).max().unwrap_or(0).max(8);

    let mut table = format!("{:<width$}  {:<12}  GROUP KEY\n", "FILENAME", "TYPE", width = width);
    for filename in filenames {
        let _ = writeln!(
            table,
            "{:<width$}  {:<12}  {}",
            filename,
            engine.classify(filename).code(),
            engine.group_key(filename),
            width = width
        );
    }
    table
}

/// Rules in the same JSON form `IntakeRules::load` reads.
pub fn rules_json(rules: &IntakeRules) -> Result<String> {
    Ok(serde_json::to_string_pretty(rules)?)
}

pub fn proposal_json(proposal: &IntakeProposal) -> Result<String> {
    Ok(serde_json::to_string_pretty(proposal)?)
}

fn print_proposal(proposal: &IntakeProposal) {
    if proposal.is_empty() {
        println!("No files to propose.");
        return;
    }

    let summary = proposal.summary();
    println!(
        "Proposed {} projects from {} files ({})",
        summary.project_count,
        summary.asset_count,
        format_bytes(proposal.total_bytes)
    );
    println!("Batch: {}", proposal.batch_id);
    println!("{:-<60}", "");

    for project in &proposal.projects {
        let mut flags = Vec::new();
        if project.has_stems {
            flags.push("stems");
        }
        if project.has_session {
            flags.push("session");
        }

        println!(
            "{} [{}] - {} files {}",
            project.title,
            project.group_key,
            project.asset_count(),
            flags.join(", ")
        );

        if let (Some(tempo), Some(key), Some(genre)) =
            (project.tempo_bpm, &project.musical_key, &project.genre)
        {
            println!("  (placeholder) {:.0} BPM, {}, {}", tempo, key, genre);
        }

        for asset in &project.assets {
            let marker = if asset.is_primary { " * " } else { "   " };
            println!(
                "{}{:<40} {:<12} {}",
                marker,
                asset.filename,
                asset.asset_type.label(),
                format_bytes(asset.size_bytes)
            );
        }
    }

    println!("{:-<60}", "");
    let counts: Vec<String> = summary
        .by_type
        .iter()
        .map(|(asset_type, count)| format!("{}: {}", asset_type.label(), count))
        .collect();
    println!("{}", counts.join(" | "));
}

fn format_bytes(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    let value = bytes as f64;
    if value >= GB {
        format!("{:.1} GB", value / GB)
    } else if value >= MB {
        format!("{:.1} MB", value / MB)
    } else if value >= KB {
        format!("{:.1} KB", value / KB)
    } else {
        format!("{} B", bytes)
    }
}
