//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.

use std::sync::Arc;

use crate::application::{BuildUseCase, ComposeUseCase};
use crate::config::Config;
use crate::domain::ports::CompileEventSink;
use crate::infrastructure::{ConsoleEventSink, JsonEventSink, LocalFs, ProcessBackend};

/// Type alias for the concrete BuildUseCase with all dependencies
pub type ConcreteBuildUseCase = BuildUseCase<ProcessBackend, LocalFs>;

/// Create a build use case driving the configured compiler
pub fn create_build_use_case(config: &Config) -> ConcreteBuildUseCase {
    let backend = ProcessBackend::new(&config.backend.program, config.backend.args.clone());
    BuildUseCase::new(backend, LocalFs::new(), config.reference_resolver())
}

pub fn create_compose_use_case() -> ComposeUseCase<LocalFs> {
    ComposeUseCase::new(LocalFs::new())
}

/// Pick the event sink for the output mode
pub fn create_event_sink(json: bool, verbose: u8, color: bool) -> Arc<dyn CompileEventSink> {
    if json {
        Arc::new(JsonEventSink::stdout())
    } else {
        // Quiet console sink still reports cleanup failures
        Arc::new(ConsoleEventSink::stderr(verbose, color))
    }
}
