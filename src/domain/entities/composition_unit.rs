//! CompositionUnit entity - the synthetic single-file document

use std::fmt;

/// The single synthetic document submitted to the compiler back end.
///
/// An ordered sequence of text lines, owned by one compile invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompositionUnit {
    lines: Vec<String>,
}

impl CompositionUnit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of lines appended so far
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Line at a zero-based index
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub(crate) fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub(crate) fn extend<S: Into<String>>(&mut self, lines: impl IntoIterator<Item = S>) {
        self.lines.extend(lines.into_iter().map(Into::into));
    }

    /// Full document text, one terminated line per entry
    pub fn text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for CompositionUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}
