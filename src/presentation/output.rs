//! Output Rendering
//!
//! Diagnostics in compiler format (colored on a terminal) or JSON.

use std::io::IsTerminal;

use crossterm::style::Stylize;
use serde_json::json;

use crate::application::BuildReport;
use crate::domain::entities::{Diagnostic, Severity};
use crate::domain::value_objects::RangeMap;

use super::cli::ColorWhen;

/// Whether to color stderr output
pub fn use_color(when: Option<ColorWhen>) -> bool {
    match when {
        Some(ColorWhen::Always) => true,
        Some(ColorWhen::Never) => false,
        Some(ColorWhen::Auto) | None => {
            std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
        }
    }
}

/// Renders diagnostics as `file(line,col): severity code: message`
#[derive(Debug, Clone, Copy, Default)]
pub struct DiagnosticRenderer {
    color: bool,
}

impl DiagnosticRenderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn render(&self, diagnostic: &Diagnostic) -> String {
        if !self.color {
            return diagnostic.to_string();
        }

        let severity = match diagnostic.severity {
            Severity::Error => diagnostic.severity.as_str().red().bold().to_string(),
            Severity::Warning => diagnostic.severity.as_str().yellow().bold().to_string(),
            _ => diagnostic.severity.as_str().cyan().to_string(),
        };
        let body = format!("{} {}: {}", severity, diagnostic.id, diagnostic.message);
        match &diagnostic.location {
            Some(loc) => format!(
                "{}: {}",
                format!("{}({},{})", loc.file.display(), loc.line, loc.column).bold(),
                body
            ),
            None => body,
        }
    }

    /// Every diagnostic of a report, failures first
    pub fn render_report(&self, report: &BuildReport) -> Vec<String> {
        report.all_diagnostics().map(|d| self.render(d)).collect()
    }
}

pub fn diagnostic_to_json(diagnostic: &Diagnostic) -> serde_json::Value {
    let mut value = json!({
        "severity": diagnostic.severity.as_str(),
        "id": diagnostic.id,
        "message": diagnostic.message,
    });
    if let Some(loc) = &diagnostic.location {
        value["file"] = json!(loc.file.display().to_string());
        value["line"] = json!(loc.line);
        value["column"] = json!(loc.column);
    }
    value
}

/// Final NDJSON line of a `build --json` run
pub fn report_to_json(report: &BuildReport) -> serde_json::Value {
    let diagnostics: Vec<_> = report.all_diagnostics().map(diagnostic_to_json).collect();
    let mut value = json!({
        "event": "result",
        "command": "build",
        "status": if report.is_success() { "success" } else { "failure" },
        "diagnostics": diagnostics,
    });
    if let Some(artifacts) = &report.artifacts {
        value["binary"] = json!(artifacts.binary.display().to_string());
        if let Some(symbols) = &artifacts.symbols {
            value["symbols"] = json!(symbols.display().to_string());
        }
    }
    value
}

/// Human-readable range map, one entry per line
pub fn render_range_map(map: &RangeMap) -> String {
    map.entries()
        .iter()
        .map(|e| {
            format!(
                "{}..{} -> {} (+{})\n",
                e.start,
                e.end,
                e.source_file.display(),
                e.line_offset
            )
        })
        .collect()
}
