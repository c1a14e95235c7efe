//! Deterministic back end for library-level tests.
//!
//! Reports an error wherever the synthetic document mentions
//! `undefined_symbol`, a warning wherever it mentions `unused_local`, and
//! emits the document bytes as the "binary".

use std::cell::Cell;

use scriptmerge::domain::ports::{
    BackendError, BackendOutput, CompileRequest, CompilerBackend, RawDiagnostic, RawLocation,
};
use scriptmerge::Severity;

pub const ERROR_TOKEN: &str = "undefined_symbol";
pub const WARNING_TOKEN: &str = "unused_local";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Diagnose tokens found in the source
    Scan,
    /// Fail without reporting anything
    SilentFailure,
    /// The compiler cannot be started
    Unavailable,
}

pub struct ScriptedBackend {
    mode: Mode,
    calls: Cell<usize>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::with_mode(Mode::Scan)
    }

    pub fn with_mode(mode: Mode) -> Self {
        Self {
            mode,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

fn scan(source: &str, token: &str, severity: Severity, id: &str) -> Vec<RawDiagnostic> {
    source
        .lines()
        .enumerate()
        .filter_map(|(line, text)| {
            text.find(token).map(|column| RawDiagnostic {
                severity,
                warning_as_error: false,
                id: id.to_string(),
                message: format!("'{}' reported", token),
                location: Some(RawLocation {
                    path: String::new(),
                    line,
                    column,
                }),
            })
        })
        .collect()
}

impl CompilerBackend for ScriptedBackend {
    fn name(&self) -> &str {
        "scripted"
    }

    fn compile(&self, request: &CompileRequest<'_>) -> Result<BackendOutput, BackendError> {
        self.calls.set(self.calls.get() + 1);

        match self.mode {
            Mode::Unavailable => Err(BackendError::new("compiler not installed")),
            Mode::SilentFailure => Ok(BackendOutput::default()),
            Mode::Scan => {
                let mut diagnostics =
                    scan(request.source_text, ERROR_TOKEN, Severity::Error, "CS0103");
                diagnostics.extend(scan(
                    request.source_text,
                    WARNING_TOKEN,
                    Severity::Warning,
                    "CS0168",
                ));
                let success = diagnostics.iter().all(|d| !d.is_failure());
                Ok(BackendOutput {
                    success,
                    binary: if success {
                        request.source_text.as_bytes().to_vec()
                    } else {
                        Vec::new()
                    },
                    symbols: (success && request.emit_symbols)
                        .then(|| format!("symbols:{}", request.project_name).into_bytes()),
                    diagnostics,
                })
            }
        }
    }
}
