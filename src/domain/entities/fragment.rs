//! Fragment entity - one original source file of a multi-file script

use std::path::{Path, PathBuf};

use crate::domain::services::directive_splitter::{self, SplitSource};
use crate::error::MergeResult;

/// An original source file participating in a multi-file compile.
///
/// Identity is the file path. The text is read once per invocation and
/// never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    path: PathBuf,
    text: String,
}

impl Fragment {
    /// Create a fragment from its path and raw text
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// File name without directories, used to name the project and workspace
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "script".to_string())
    }

    /// All lines of the fragment, unsplit
    pub fn lines(&self) -> Vec<&str> {
        self.text.lines().collect()
    }

    /// Split into leading import declarations and body
    pub fn split(&self) -> MergeResult<SplitSource<'_>> {
        directive_splitter::split(&self.text, &self.path)
    }
}
