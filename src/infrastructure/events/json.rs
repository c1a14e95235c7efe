//! JSON Event Sink
//!
//! Outputs compile events as NDJSON for CI/automation consumption.

use crate::domain::ports::{CompileEvent, CompileEventSink};
use chrono::{SecondsFormat, Utc};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, mut event: serde_json::Value) {
        if let Some(object) = event.as_object_mut() {
            object.insert(
                "timestamp".to_string(),
                Utc::now()
                    .to_rfc3339_opts(SecondsFormat::Millis, true)
                    .into(),
            );
        }
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

fn to_json(event: CompileEvent) -> serde_json::Value {
    match event {
        CompileEvent::Started {
            project,
            fragment_count,
            workspace,
        } => serde_json::json!({
            "event": "start",
            "command": "build",
            "project": project,
            "fragment_count": fragment_count,
            "workspace": workspace.display().to_string(),
        }),

        CompileEvent::Composed {
            line_count,
            range_count,
        } => serde_json::json!({
            "event": "composed",
            "command": "build",
            "line_count": line_count,
            "range_count": range_count,
        }),

        CompileEvent::ReferencesResolved { kept, dropped } => serde_json::json!({
            "event": "references_resolved",
            "command": "build",
            "kept": kept,
            "dropped": dropped,
        }),

        CompileEvent::BackendFinished {
            backend,
            elapsed,
            success,
            diagnostic_count,
        } => serde_json::json!({
            "event": "backend_finished",
            "command": "build",
            "backend": backend,
            "elapsed_ms": elapsed.as_millis() as u64,
            "success": success,
            "diagnostic_count": diagnostic_count,
        }),

        CompileEvent::ArtifactWritten { path, size, hash } => serde_json::json!({
            "event": "artifact_written",
            "command": "build",
            "path": path.display().to_string(),
            "size": size,
            "hash": hash,
        }),

        CompileEvent::CleanupFailed { path, error } => serde_json::json!({
            "event": "cleanup_failed",
            "command": "build",
            "path": path.display().to_string(),
            "error": error,
        }),

        CompileEvent::Completed {
            success,
            error_count,
            warning_count,
        } => serde_json::json!({
            "event": "complete",
            "command": "build",
            "status": if success { "success" } else { "failure" },
            "errors": error_count,
            "warnings": warning_count,
        }),
    }
}

impl CompileEventSink for JsonEventSink {
    fn on_event(&self, event: CompileEvent) {
        self.write_event(to_json(event));
    }

    fn wants_detailed_events(&self) -> bool {
        true
    }
}
