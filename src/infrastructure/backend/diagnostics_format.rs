//! Compiler diagnostic line format
//!
//! ```text
//! <file>(<line>,<column>): error|warning|info <code>: <message>
//! error|warning|info <code>: <message>
//! ```
//!
//! Positions in the text are one-based; parsed positions are zero-based to
//! match the [`CompilerBackend`](crate::domain::ports::CompilerBackend) port.

use crate::domain::entities::Severity;
use crate::domain::ports::{RawDiagnostic, RawLocation};

/// Parse one line of compiler output. Lines that are not diagnostics yield `None`.
///
/// An unlocated diagnostic wins over a location-looking span inside its
/// message; otherwise the first `file(line,col): ` prefix followed by a
/// severity word is the location.
pub fn parse_line(line: &str) -> Option<RawDiagnostic> {
    let line = line.trim_end();
    parse_diagnostic(line.trim_start(), None).or_else(|| {
        line.match_indices("): ").find_map(|(close, _)| {
            let location = parse_location(&line[..=close])?;
            parse_diagnostic(&line[close + 3..], Some(location))
        })
    })
}

/// Parse every diagnostic line of a compiler's output
pub fn parse_output(output: &str) -> Vec<RawDiagnostic> {
    output.lines().filter_map(parse_line).collect()
}

/// `<severity> <id>: <message>`
fn parse_diagnostic(text: &str, location: Option<RawLocation>) -> Option<RawDiagnostic> {
    let (severity, rest) = parse_severity(text)?;
    let (id, message) = rest.split_once(':')?;
    let id = id.trim();
    if id.is_empty() || id.contains(char::is_whitespace) {
        return None;
    }

    Some(RawDiagnostic {
        severity,
        warning_as_error: false,
        id: id.to_string(),
        message: message.trim().to_string(),
        location,
    })
}

/// `file(line,col)` as a zero-based location
fn parse_location(prefix: &str) -> Option<RawLocation> {
    let inner = prefix.strip_suffix(')')?;
    let open = inner.rfind('(')?;
    let (row, col) = inner[open + 1..].split_once(',')?;
    let row: usize = row.trim().parse().ok()?;
    let col: usize = col.trim().parse().ok()?;

    Some(RawLocation {
        path: inner[..open].trim().to_string(),
        line: row.saturating_sub(1),
        column: col.saturating_sub(1),
    })
}

fn parse_severity(text: &str) -> Option<(Severity, &str)> {
    let (word, rest) = text.split_once(' ')?;
    let severity = match word {
        "error" | "fatal" => Severity::Error,
        "warning" => Severity::Warning,
        "info" => Severity::Info,
        "hidden" => Severity::Hidden,
        _ => return None,
    };
    Some((severity, rest))
}
