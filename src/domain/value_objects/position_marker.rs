//! Position-reset marker
//!
//! An in-document directive telling the compiler to report the following
//! lines as belonging to a named original file, starting at a given line.
//! Debug symbols then carry the original paths directly.

use std::fmt;
use std::path::{Path, PathBuf};

/// `#line <line> "<file>"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionMarker {
    /// One-based line the next document line corresponds to
    pub line: usize,
    pub file: PathBuf,
}

impl PositionMarker {
    pub fn new(line: usize, file: &Path) -> Self {
        Self {
            line,
            file: file.to_path_buf(),
        }
    }

    /// Parse a marker line; `None` for anything else.
    pub fn parse(line: &str) -> Option<Self> {
        let rest = line.trim_start().strip_prefix("#line")?;
        let rest = rest.trim_start();
        let (number, rest) = rest.split_once(char::is_whitespace)?;
        let line_no = number.parse().ok()?;
        let file = rest.trim().strip_prefix('"')?.strip_suffix('"')?;
        Some(Self {
            line: line_no,
            file: PathBuf::from(file),
        })
    }
}

impl fmt::Display for PositionMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#line {} \"{}\"", self.line, self.file.display())
    }
}
