//! Range Map Value Object
//!
//! Index from spans of synthetic lines to the fragment that contributed them.
//! All line numbers here are zero-based.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// One contiguous span `[start, end)` of synthetic lines from a single file.
///
/// A synthetic line `L` inside the span maps to original line
/// `L - start + line_offset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeEntry {
    pub start: usize,
    pub end: usize,
    pub source_file: PathBuf,
    pub line_offset: usize,
}

impl RangeEntry {
    pub fn contains(&self, line: usize) -> bool {
        self.start <= line && line < self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Non-overlapping set of range entries, in append order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RangeMap {
    entries: Vec<RangeEntry>,
}

impl RangeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a span of appended lines. Empty spans are ignored.
    ///
    /// Spans must be recorded in increasing order; the composer only ever
    /// appends, so the set stays non-overlapping.
    pub fn record(
        &mut self,
        start: usize,
        end: usize,
        source_file: impl Into<PathBuf>,
        line_offset: usize,
    ) {
        if end <= start {
            return;
        }
        debug_assert!(
            self.entries.last().map_or(true, |last| last.end <= start),
            "range entries must not overlap"
        );
        self.entries.push(RangeEntry {
            start,
            end,
            source_file: source_file.into(),
            line_offset,
        });
    }

    pub fn entries(&self) -> &[RangeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Translate a synthetic line to `(original file, original line)`.
    ///
    /// `None` means the line did not come from any fragment (a position
    /// marker, or a line outside the document).
    pub fn translate(&self, line: usize) -> Option<(&Path, usize)> {
        self.entries
            .iter()
            .find(|entry| entry.contains(line))
            .map(|entry| {
                (
                    entry.source_file.as_path(),
                    line - entry.start + entry.line_offset,
                )
            })
    }
}
