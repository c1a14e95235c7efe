//! Build Result
//!
//! Result types for build operations.

use std::path::PathBuf;

use crate::domain::entities::{CompileOutcome, Diagnostic};

/// Paths of the artifacts copied to the output location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildArtifacts {
    pub binary: PathBuf,
    pub symbols: Option<PathBuf>,
}

/// Result of a build that ran to completion
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Binary bytes, or the translated failure diagnostics
    pub outcome: CompileOutcome,
    /// Non-failing diagnostics, translated
    pub warnings: Vec<Diagnostic>,
    /// Set only on success
    pub artifacts: Option<BuildArtifacts>,
}

impl BuildReport {
    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }

    /// Failure diagnostics followed by warnings, in back-end order within each group
    pub fn all_diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.outcome.diagnostics().iter().chain(self.warnings.iter())
    }
}
