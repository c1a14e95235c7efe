//! Error types for scriptmerge
//!
//! Uses `thiserror` for library errors. A compilation that runs and reports
//! errors is not a `MergeError`; it is `CompileOutcome::Failure`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::{Diagnostic, Severity, SourceLocation};

/// Result type alias for scriptmerge operations
pub type MergeResult<T> = Result<T, MergeError>;

/// Diagnostic codes used when an error is rendered in compiler format
pub mod codes {
    pub const UNKNOWN_COMPILER_ERROR: &str = "SM0000";
    pub const PARSE: &str = "SM0001";
    pub const COMPILER_INVOCATION: &str = "SM0002";
    pub const ARTIFACT_IO: &str = "SM0003";
    pub const FRAGMENT_READ: &str = "SM0004";
    pub const INVALID_CONFIG: &str = "SM0005";
}

/// Main error type for scriptmerge operations
#[derive(Error, Debug)]
pub enum MergeError {
    /// The header/body boundary of a fragment cannot be located
    #[error("cannot split {file} at line {line}, column {column}: {message}")]
    Parse {
        file: PathBuf,
        /// One-based
        line: usize,
        /// One-based
        column: usize,
        message: String,
    },

    /// The compiler back end failed to run (as opposed to reporting diagnostics)
    #[error("compiler invocation failed: {message}")]
    CompilerInvocation { message: String },

    /// Workspace or output artifact I/O failed
    #[error("artifact I/O failed for {path}: {source}")]
    ArtifactIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A fragment could not be read
    #[error("cannot read fragment {path}: {source}")]
    FragmentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// No fragments were given
    #[error("no source fragments to compile")]
    NoFragments,
}

impl MergeError {
    /// Render this error as a compiler-style diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (id, location) = match self {
            MergeError::Parse {
                file, line, column, ..
            } => (
                codes::PARSE,
                Some(SourceLocation::new(file.clone(), *line, *column)),
            ),
            MergeError::CompilerInvocation { .. } => (codes::COMPILER_INVOCATION, None),
            MergeError::ArtifactIo { .. } => (codes::ARTIFACT_IO, None),
            MergeError::FragmentRead { .. } | MergeError::NoFragments => {
                (codes::FRAGMENT_READ, None)
            }
            MergeError::InvalidConfig { .. } => (codes::INVALID_CONFIG, None),
        };

        let message = match self {
            MergeError::Parse { file, message, .. } => {
                format!("cannot split {}: {}", file.display(), message)
            }
            other => other.to_string(),
        };

        Diagnostic {
            severity: Severity::Error,
            id: id.to_string(),
            message,
            location,
        }
    }
}
