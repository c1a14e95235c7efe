//! Build Use Case
//!
//! Orchestrates the build flow:
//! 1. Read fragments
//! 2. Create the workspace
//! 3. Compose the synthetic document and its range map
//! 4. Resolve references and run the back end
//! 5. Translate diagnostics
//! 6. Write and copy artifacts
//!
//! The workspace is removed when its guard drops, on every exit path.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use crate::application::fragments::read_fragments;
use crate::domain::entities::{CompileOutcome, Diagnostic, Fragment, Severity};
use crate::domain::ports::{
    CompileEvent, CompileEventSink, CompileRequest, CompilerBackend, EmitMode, FileSystem,
    NoopEventSink,
};
use crate::domain::services::{compose, Composition, ReferenceResolver, Translator};
use crate::error::{codes, MergeError, MergeResult};

use super::options::{BuildOptions, BuildRequest};
use super::result::{BuildArtifacts, BuildReport};
use super::workspace::Workspace;

/// Message of the diagnostic synthesized when a failed build reports nothing
pub const UNKNOWN_COMPILER_ERROR: &str = "Unknown compiler error";

/// Build use case - merges fragments, compiles them and places artifacts
///
/// Parameterized by its ports so tests can swap in a scripted back end or an
/// in-memory file system.
pub struct BuildUseCase<B, FS>
where
    B: CompilerBackend,
    FS: FileSystem,
{
    backend: B,
    file_system: FS,
    references: ReferenceResolver,
}

/// State shared by the phases of one invocation
struct Invocation<'a, FS: FileSystem> {
    workspace: &'a Workspace<'a, FS>,
    project_name: &'a str,
    fragment_paths: Vec<PathBuf>,
    options: &'a BuildOptions,
    events: &'a dyn CompileEventSink,
}

impl<B, FS> BuildUseCase<B, FS>
where
    B: CompilerBackend,
    FS: FileSystem,
{
    pub fn new(backend: B, file_system: FS, references: ReferenceResolver) -> Self {
        Self {
            backend,
            file_system,
            references,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Execute the build
    pub fn execute(&self, request: &BuildRequest) -> MergeResult<BuildReport> {
        self.execute_with_events(request, Arc::new(NoopEventSink))
    }

    /// Execute the build with event reporting
    ///
    /// `Err` means the build could not be carried out (unsplittable
    /// fragment, back end failed to run, artifact I/O). A compilation that
    /// reports errors is `Ok` with a failed outcome.
    pub fn execute_with_events(
        &self,
        request: &BuildRequest,
        events: Arc<dyn CompileEventSink>,
    ) -> MergeResult<BuildReport> {
        let fragments = read_fragments(&self.file_system, &request.sources)?;
        let (primary, imported) = fragments.split_first().ok_or(MergeError::NoFragments)?;
        let project_name = primary.file_name();

        let workspace = Workspace::create(
            &self.file_system,
            &request.session,
            &project_name,
            events.clone(),
        )?;

        events.on_event(CompileEvent::Started {
            project: project_name.clone(),
            fragment_count: fragments.len(),
            workspace: workspace.path().to_path_buf(),
        });

        let invocation = Invocation {
            workspace: &workspace,
            project_name: &project_name,
            fragment_paths: fragments.iter().map(|f| f.path().to_path_buf()).collect(),
            options: &request.options,
            events: events.as_ref(),
        };

        self.run(&invocation, primary, imported)
    }

    fn run(
        &self,
        inv: &Invocation<'_, FS>,
        primary: &Fragment,
        imported: &[Fragment],
    ) -> MergeResult<BuildReport> {
        let composition = compose(primary, imported, inv.options.header_policy)?;
        inv.events.on_event(CompileEvent::Composed {
            line_count: composition.unit.len(),
            range_count: composition.range_map.len(),
        });

        let source_path = inv
            .workspace
            .write(inv.project_name, composition.unit.text().as_bytes())?;

        let (outcome, warnings) = self.compile(inv, &composition, &source_path)?;

        let artifacts = match &outcome {
            CompileOutcome::Success { binary, symbols } => {
                Some(self.place_artifacts(inv, binary, symbols.as_deref())?)
            }
            CompileOutcome::Failure { .. } => None,
        };

        inv.events.on_event(CompileEvent::Completed {
            success: outcome.is_success(),
            error_count: outcome.diagnostics().len(),
            warning_count: warnings.len(),
        });

        Ok(BuildReport {
            outcome,
            warnings,
            artifacts,
        })
    }

    /// Run the back end on a composed document and translate what it reports.
    fn compile(
        &self,
        inv: &Invocation<'_, FS>,
        composition: &Composition,
        source_path: &Path,
    ) -> MergeResult<(CompileOutcome, Vec<Diagnostic>)> {
        let resolved = self.references.resolve(&inv.options.referenced_assemblies);
        inv.events.on_event(CompileEvent::ReferencesResolved {
            kept: resolved.kept.len(),
            dropped: resolved.dropped.len(),
        });

        let debug = inv.options.include_debug_information;
        let source_text = composition.unit.text();
        let request = CompileRequest {
            source_path,
            source_text: &source_text,
            references: &resolved.kept,
            mode: if debug {
                EmitMode::Debug
            } else {
                EmitMode::Release
            },
            emit_symbols: debug,
            output_dir: inv.workspace.path(),
            project_name: inv.project_name,
        };

        let started = Instant::now();
        let output = self
            .backend
            .compile(&request)
            .map_err(|e| MergeError::CompilerInvocation { message: e.message })?;

        let failed = !output.success || output.diagnostics.iter().any(|d| d.is_failure());
        inv.events.on_event(CompileEvent::BackendFinished {
            backend: self.backend.name().to_string(),
            elapsed: started.elapsed(),
            success: !failed,
            diagnostic_count: output.diagnostics.len(),
        });

        let translator = Translator::new(&composition.range_map, source_path, &inv.fragment_paths);
        let warnings = translator.translate_all(
            output
                .diagnostics
                .iter()
                .filter(|d| !d.is_failure() && d.severity != Severity::Hidden),
        );

        let outcome = if failed {
            let mut diagnostics =
                translator.translate_all(output.diagnostics.iter().filter(|d| d.is_failure()));
            if diagnostics.is_empty() {
                diagnostics.push(Diagnostic::error(
                    codes::UNKNOWN_COMPILER_ERROR,
                    UNKNOWN_COMPILER_ERROR,
                ));
            }
            CompileOutcome::Failure { diagnostics }
        } else {
            CompileOutcome::Success {
                binary: output.binary,
                symbols: if debug { output.symbols } else { None },
            }
        };

        Ok((outcome, warnings))
    }

    /// Write artifacts into the workspace, then copy them to the output path.
    ///
    /// Symbols are copied before the binary, so an `Err` never leaves a new
    /// binary at the output path. A release build removes a symbol file left
    /// there by an earlier debug build.
    fn place_artifacts(
        &self,
        inv: &Invocation<'_, FS>,
        binary: &[u8],
        symbols: Option<&[u8]>,
    ) -> MergeResult<BuildArtifacts> {
        let options = inv.options;
        let binary_name = format!("{}.{}", inv.project_name, options.binary_extension);
        let built_binary = inv.workspace.write(&binary_name, binary)?;
        let symbols_out = options.symbol_output();

        let symbols_placed = match symbols {
            Some(bytes) => {
                let name = Path::new(&binary_name).with_extension(&options.symbol_extension);
                let built = inv.workspace.write(&name.to_string_lossy(), bytes)?;
                self.copy_artifact(inv, &built, &symbols_out, bytes.len())?;
                true
            }
            None => false,
        };

        let copied = self.copy_artifact(inv, &built_binary, &options.output_assembly, binary.len());
        if let Err(e) = copied {
            if symbols_placed {
                // the binary error is the one reported
                let _ = self.file_system.remove_file(&symbols_out);
            }
            return Err(e);
        }

        if !symbols_placed && symbols_out != options.output_assembly {
            self.file_system
                .remove_file(&symbols_out)
                .map_err(|e| MergeError::ArtifactIo {
                    path: symbols_out.clone(),
                    source: e.into_io(),
                })?;
        }

        Ok(BuildArtifacts {
            binary: options.output_assembly.clone(),
            symbols: symbols_placed.then_some(symbols_out),
        })
    }

    fn copy_artifact(
        &self,
        inv: &Invocation<'_, FS>,
        from: &Path,
        to: &Path,
        size: usize,
    ) -> MergeResult<()> {
        self.file_system
            .copy(from, to)
            .map_err(|e| MergeError::ArtifactIo {
                path: to.to_path_buf(),
                source: e.into_io(),
            })?;

        if inv.events.wants_detailed_events() {
            inv.events.on_event(CompileEvent::ArtifactWritten {
                path: to.to_path_buf(),
                size,
                hash: self.file_system.hash(to).unwrap_or_default(),
            });
        }
        Ok(())
    }
}
