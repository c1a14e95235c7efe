//! Compile Event Port
//!
//! Provides an observable interface for build operations.
//! Enables timing reports, JSON event streams, and debugging.

use std::path::PathBuf;
use std::time::Duration;

/// Event emitted during a build
#[derive(Debug, Clone)]
pub enum CompileEvent {
    /// Build started
    Started {
        project: String,
        fragment_count: usize,
        workspace: PathBuf,
    },

    /// Synthetic document composed
    Composed {
        line_count: usize,
        range_count: usize,
    },

    /// Reference set resolved
    ReferencesResolved { kept: usize, dropped: usize },

    /// Back end returned
    BackendFinished {
        backend: String,
        elapsed: Duration,
        success: bool,
        diagnostic_count: usize,
    },

    /// Artifact copied to its output path
    ArtifactWritten {
        path: PathBuf,
        size: usize,
        hash: String,
    },

    /// Workspace could not be removed
    CleanupFailed { path: PathBuf, error: String },

    /// Build completed
    Completed {
        success: bool,
        error_count: usize,
        warning_count: usize,
    },
}

/// Trait for receiving compile events
///
/// Implementations can be:
/// - ConsoleEventSink: human-readable timing on stderr
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait CompileEventSink: Send + Sync {
    /// Handle a compile event
    fn on_event(&self, event: CompileEvent);

    /// Check if this sink wants detailed events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl CompileEventSink for NoopEventSink {
    fn on_event(&self, _event: CompileEvent) {
        // Do nothing
    }

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
