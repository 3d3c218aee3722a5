//! Nueva Intake - creative-file intake classifier
//!
//! Takes a flat batch of uploaded file names and sizes and proposes how they
//! belong together:
//! 1. Each file is classified into an asset role (master, stem, session, ...)
//! 2. Files are clustered into projects by a normalized grouping key
//! 3. One primary asset is picked per project
//!
//! # Architecture
//!
//! - `intake`: the pure, synchronous classification and grouping engine
//! - `analysis`: swappable content analyzers for tempo, key and genre
//! - `cli`: filesystem scanning and the command-line front end

pub mod analysis;
pub mod cli;
pub mod error;
pub mod intake;

pub use error::{IntakeError, Result};
pub use intake::{
    AssetType, ClassifiedAsset, FileDescriptor, IntakeEngine, IntakeProposal, IntakeRules,
    ProposedProject,
};
