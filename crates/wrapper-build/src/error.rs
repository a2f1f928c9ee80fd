//! Error types for the wrapper build.
//!
//! Every failure the build can hit is a variant of [`Error`]. The binary does
//! not distinguish between them: any `Err` reaching `main` is rendered once by
//! `miette` and the process exits with status 1.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::diagnostics::{self, ExtractedDiagnostic};

/// Top-level build error.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// The configuration record failed validation.
    #[error("Invalid configuration for '{field}': {reason}")]
    #[diagnostic(code(wrapper_build::config))]
    InvalidConfig {
        /// Name of the offending field
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// Entry point file doesn't exist
    #[error("Entry point not found: {}", .0.display())]
    #[diagnostic(
        code(wrapper_build::entry_not_found),
        help("Run the build from the repository root so the entry path resolves")
    )]
    EntryNotFound(PathBuf),

    /// The bundler rejected the build.
    #[error("Bundling failed: {}", diagnostics::format_diagnostics(.0))]
    #[diagnostic(code(wrapper_build::bundler))]
    Bundler(Vec<ExtractedDiagnostic>),

    /// The bundler produced something other than a single entry chunk.
    #[error("Unexpected bundle output: {0}")]
    #[diagnostic(code(wrapper_build::output_shape))]
    UnexpectedOutput(String),

    /// Writing the output file failed.
    #[error("Failed to write {}: {source}", .path.display())]
    #[diagnostic(
        code(wrapper_build::write),
        help("Check permissions on the output directory")
    )]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error from file system operations
    #[error("I/O error: {0}")]
    #[diagnostic(code(wrapper_build::io))]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a bundler error from a Rolldown error batch.
    pub fn from_rolldown_batch(error: &dyn std::fmt::Debug) -> Self {
        Error::Bundler(diagnostics::extract_from_rolldown_error(error))
    }

    pub(crate) fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

/// Result type alias for wrapper-build operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
