//! Process Back End
//!
//! Runs an external compiler command once per build. The command line comes
//! from argument templates; the compiler writes its binary (and symbols)
//! into the workspace and reports diagnostics on stdout/stderr.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::domain::ports::{BackendError, BackendOutput, CompileRequest, CompilerBackend};

use super::diagnostics_format::parse_output;

/// Placeholders recognized in argument templates
pub mod placeholders {
    pub const SOURCE: &str = "{source}";
    pub const OUTPUT: &str = "{output}";
    /// Arguments mentioning it are omitted when symbols were not requested
    pub const SYMBOLS: &str = "{symbols}";
    /// Arguments mentioning it are repeated once per reference
    pub const REFERENCES: &str = "{references}";
    /// `debug` or `release`
    pub const MODE: &str = "{mode}";
    /// `-` in debug mode, `+` in release mode
    pub const OPTIMIZE: &str = "{optimize}";
    /// `+` in debug mode, `-` in release mode
    pub const DEBUG: &str = "{debug}";
}

/// A compiler driven through its command line
#[derive(Debug, Clone)]
pub struct ProcessBackend {
    program: PathBuf,
    args: Vec<String>,
}

impl ProcessBackend {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Expand the argument templates for one request
    pub fn command_line(
        &self,
        request: &CompileRequest<'_>,
        output: &Path,
        symbols: &Path,
    ) -> Vec<String> {
        use placeholders::*;

        let fill = |arg: &str| {
            arg.replace(SOURCE, &request.source_path.to_string_lossy())
                .replace(OUTPUT, &output.to_string_lossy())
                .replace(SYMBOLS, &symbols.to_string_lossy())
                .replace(MODE, request.mode.as_str())
                .replace(OPTIMIZE, request.mode.optimize_switch())
                .replace(DEBUG, request.mode.debug_switch())
        };

        let mut expanded = Vec::with_capacity(self.args.len());
        for arg in &self.args {
            if arg.contains(SYMBOLS) && !request.emit_symbols {
                continue;
            }
            if arg.contains(REFERENCES) {
                for reference in request.references {
                    expanded.push(fill(&arg.replace(REFERENCES, &reference.to_string_lossy())));
                }
                continue;
            }
            expanded.push(fill(arg));
        }
        expanded
    }
}

impl CompilerBackend for ProcessBackend {
    fn name(&self) -> &str {
        self.program
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("backend")
    }

    fn compile(&self, request: &CompileRequest<'_>) -> Result<BackendOutput, BackendError> {
        let output_path = request
            .output_dir
            .join(format!("{}.emit", request.project_name));
        let symbols_path = output_path.with_extension("emit-symbols");
        let args = self.command_line(request, &output_path, &symbols_path);

        let result = Command::new(&self.program)
            .args(&args)
            .current_dir(request.output_dir)
            .output()
            .map_err(|e| {
                BackendError::new(format!("cannot run {}: {}", self.program.display(), e))
            })?;

        let mut diagnostics = parse_output(&String::from_utf8_lossy(&result.stdout));
        diagnostics.extend(parse_output(&String::from_utf8_lossy(&result.stderr)));

        let binary = match std::fs::read(&output_path) {
            Ok(bytes) => Some(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                return Err(BackendError::new(format!(
                    "cannot read {}: {}",
                    output_path.display(),
                    e
                )))
            }
        };
        let symbols = if request.emit_symbols {
            std::fs::read(&symbols_path).ok()
        } else {
            None
        };

        let success = result.status.success() && binary.is_some();
        Ok(BackendOutput {
            success,
            binary: binary.unwrap_or_default(),
            symbols,
            diagnostics,
        })
    }
}
