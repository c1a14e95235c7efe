//! CompileOutcome entity

use super::Diagnostic;

/// Result of running the back end on a composition unit.
///
/// Exactly one variant is populated: artifacts on success, the
/// failure-causing diagnostics (already translated) otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileOutcome {
    Success {
        binary: Vec<u8>,
        symbols: Option<Vec<u8>>,
    },
    Failure {
        diagnostics: Vec<Diagnostic>,
    },
}

impl CompileOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CompileOutcome::Success { .. })
    }

    /// Failure diagnostics; empty on success
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            CompileOutcome::Success { .. } => &[],
            CompileOutcome::Failure { diagnostics } => diagnostics,
        }
    }
}
