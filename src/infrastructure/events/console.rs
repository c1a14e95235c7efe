//! Console Event Sink
//!
//! Human-readable progress on stderr. Quiet by default; `-v` adds phase
//! timing, `-vv` adds every event.

use crate::domain::ports::{CompileEvent, CompileEventSink};
use crossterm::style::Stylize;
use std::io::{self, Write};
use std::sync::Mutex;

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    verbosity: u8,
    color: bool,
}

impl ConsoleEventSink {
    /// Sink writing to stderr
    pub fn stderr(verbosity: u8, color: bool) -> Self {
        Self::with_writer(io::stderr(), verbosity, color)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, verbosity: u8, color: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            verbosity,
            color,
        }
    }

    fn label(&self, text: &str) -> String {
        if self.color {
            text.dark_grey().to_string()
        } else {
            text.to_string()
        }
    }

    fn warn(&self, text: &str) -> String {
        if self.color {
            text.yellow().bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Render an event, or `None` if the verbosity hides it
    fn render(&self, event: &CompileEvent) -> Option<String> {
        let line = match event {
            // Cleanup failures are always shown
            CompileEvent::CleanupFailed { path, error } => format!(
                "{} cannot remove workspace {}: {}",
                self.warn("warning:"),
                path.display(),
                error
            ),
            CompileEvent::BackendFinished {
                backend, elapsed, ..
            } if self.verbosity >= 1 => {
                format!("{} {}ms", self.label(&format!("{}:", backend)), elapsed.as_millis())
            }
            _ if self.verbosity < 2 => return None,
            CompileEvent::Started {
                project,
                fragment_count,
                workspace,
            } => format!(
                "{} {} ({} fragments) in {}",
                self.label("build:"),
                project,
                fragment_count,
                workspace.display()
            ),
            CompileEvent::Composed {
                line_count,
                range_count,
            } => format!(
                "{} {} lines, {} ranges",
                self.label("compose:"),
                line_count,
                range_count
            ),
            CompileEvent::ReferencesResolved { kept, dropped } => format!(
                "{} {} kept, {} dropped",
                self.label("references:"),
                kept,
                dropped
            ),
            CompileEvent::ArtifactWritten { path, size, hash } => format!(
                "{} {} ({} bytes, {})",
                self.label("wrote:"),
                path.display(),
                size,
                hash
            ),
            CompileEvent::Completed {
                success,
                error_count,
                warning_count,
            } => format!(
                "{} {} ({} errors, {} warnings)",
                self.label("done:"),
                if *success { "success" } else { "failure" },
                error_count,
                warning_count
            ),
            CompileEvent::BackendFinished { .. } => return None,
        };
        Some(line)
    }
}

impl CompileEventSink for ConsoleEventSink {
    fn on_event(&self, event: CompileEvent) {
        if let Some(line) = self.render(&event) {
            if let Ok(mut writer) = self.writer.lock() {
                let _ = writeln!(writer, "{}", line);
            }
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbosity >= 2
    }
}
