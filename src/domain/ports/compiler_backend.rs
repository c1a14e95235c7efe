//! CompilerBackend port - the external compiler
//!
//! The back end accepts exactly one source document plus a reference set and
//! either returns emitted bytes and diagnostics, or fails to run at all.
//! Diagnostic positions reported through this port are zero-based.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::entities::Severity;

/// Optimization level requested from the back end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitMode {
    Debug,
    Release,
}

impl EmitMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmitMode::Debug => "debug",
            EmitMode::Release => "release",
        }
    }

    /// `+`/`-` switch for optimized emission
    pub fn optimize_switch(&self) -> &'static str {
        match self {
            EmitMode::Debug => "-",
            EmitMode::Release => "+",
        }
    }

    /// `+`/`-` switch for debug information
    pub fn debug_switch(&self) -> &'static str {
        match self {
            EmitMode::Debug => "+",
            EmitMode::Release => "-",
        }
    }
}

/// Everything the back end needs for one compilation
#[derive(Debug, Clone)]
pub struct CompileRequest<'a> {
    /// Where the synthetic document was written
    pub source_path: &'a Path,
    pub source_text: &'a str,
    pub references: &'a [PathBuf],
    pub mode: EmitMode,
    /// Ask for a debug-symbol stream next to the binary
    pub emit_symbols: bool,
    /// Scratch directory the back end may use for its own output
    pub output_dir: &'a Path,
    pub project_name: &'a str,
}

/// Zero-based position as reported by the back end.
///
/// An empty `path` means the synthetic document itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLocation {
    pub path: String,
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDiagnostic {
    pub severity: Severity,
    /// A warning promoted to an error by the back end's settings
    pub warning_as_error: bool,
    pub id: String,
    pub message: String,
    pub location: Option<RawLocation>,
}

impl RawDiagnostic {
    /// Whether this diagnostic makes the compilation fail
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Error || self.warning_as_error
    }
}

/// What the back end produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendOutput {
    pub success: bool,
    pub binary: Vec<u8>,
    pub symbols: Option<Vec<u8>>,
    pub diagnostics: Vec<RawDiagnostic>,
}

/// The back end could not be run (as opposed to reporting diagnostics)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendError {
    pub message: String,
}

impl BackendError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for BackendError {}

/// External compiler interface
pub trait CompilerBackend {
    /// Short name used in timing reports
    fn name(&self) -> &str {
        "backend"
    }

    /// Compile one document. `Err` only when the compiler could not run.
    fn compile(&self, request: &CompileRequest<'_>) -> Result<BackendOutput, BackendError>;
}
