//! CLI Module
//!
//! Command-line interface for proposing projects from a folder of uploads.

pub mod commands;
pub mod scan;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Nueva Intake - group creative files into proposed projects
#[derive(Parser, Debug)]
#[command(name = "nueva-intake")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON rules file overriding the built-in tables
    #[arg(short, long, global = true)]
    pub rules: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan files and folders and propose projects
    #[command(name = "propose")]
    Propose {
        /// Files or directories to take in
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Descend into subdirectories
        #[arg(short = 'R', long)]
        recursive: bool,

        /// Print the proposal as JSON
        #[arg(long)]
        json: bool,

        /// Fill tempo, key and genre with placeholder values
        #[arg(long)]
        placeholder_metadata: bool,
    },

    /// Classify bare filenames without touching the filesystem
    #[command(name = "classify")]
    Classify {
        /// Filenames to classify
        #[arg(required = true)]
        filenames: Vec<String>,
    },

    /// Print the effective intake rules
    #[command(name = "rules")]
    Rules,
}
