//! Error handling for Nueva intake
//!
//! The classification engine itself is total and never fails. Errors only
//! arise at the edges: loading rules, scanning the filesystem, content
//! analysis, and writing output.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for intake operations
pub type Result<T> = std::result::Result<T, IntakeError>;

/// Main error type for intake operations
#[derive(Error, Debug)]
pub enum IntakeError {
    // File Errors
    #[error("File not found: {}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Failed to scan {}: {reason}", path.display())]
    ScanFailed { path: PathBuf, reason: String },

    // Rules Errors
    #[error("Invalid intake rules: {reason}")]
    InvalidRules { reason: String },

    // Analysis Errors
    #[error("Content analysis failed ({analyzer}): {reason}")]
    AnalysisFailed { analyzer: String, reason: String },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntakeError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            IntakeError::FileNotFound { .. } => "FILE_NOT_FOUND",
            IntakeError::ScanFailed { .. } => "SCAN_FAILED",
            IntakeError::InvalidRules { .. } => "INVALID_RULES",
            IntakeError::AnalysisFailed { .. } => "ANALYSIS_FAILED",
            IntakeError::Io(_) => "IO_ERROR",
            IntakeError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if this error is recoverable
    ///
    /// Analysis failures only cost the placeholder metadata, so the batch can
    /// still be proposed.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            IntakeError::AnalysisFailed { .. } | IntakeError::FileNotFound { .. }
        )
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            IntakeError::FileNotFound { .. } => vec![
                "Check the file path is correct",
                "Verify the file hasn't been moved or deleted",
            ],
            IntakeError::ScanFailed { .. } => vec![
                "Check that the directory is readable",
                "Pass individual files instead of the directory",
            ],
            IntakeError::InvalidRules { .. } => vec![
                "Run 'nueva-intake rules' to print the built-in rules as a starting point",
                "Remove the offending entry or omit the field to use the default table",
            ],
            IntakeError::AnalysisFailed { .. } => vec![
                "The project is still proposed without tempo, key, or genre",
                "Re-run without --placeholder-metadata",
            ],
            _ => vec![],
        }
    }
}
