//! Fragment selection and loading
//!
//! Some files of a multi-file script cannot take part in a merged compile:
//! generated assembly-attribute files (`*.attr.g.cs`, `*.attr.g.vb`) and
//! debugger-injection helpers (`dbg.inject.*`) which carry extension methods.
//! Callers filter them out before building.

use std::path::{Path, PathBuf};

use crate::domain::entities::Fragment;
use crate::domain::ports::FileSystem;
use crate::error::{MergeError, MergeResult};

const ATTRIBUTE_SUFFIXES: [&str; 2] = [".attr.g.cs", ".attr.g.vb"];
const DEBUG_INJECT_PREFIX: &str = "dbg.inject.";

/// Whether a file may be merged into the synthetic document
pub fn is_mergeable(path: &Path) -> bool {
    let name = match path.file_name() {
        Some(name) => name.to_string_lossy().to_lowercase(),
        None => return false,
    };
    !ATTRIBUTE_SUFFIXES.iter().any(|s| name.ends_with(s)) && !name.starts_with(DEBUG_INJECT_PREFIX)
}

/// Drop non-mergeable files. The primary (first) file is always kept.
pub fn mergeable_fragments(paths: &[PathBuf]) -> Vec<PathBuf> {
    let Some((primary, rest)) = paths.split_first() else {
        return Vec::new();
    };
    std::iter::once(primary.clone())
        .chain(rest.iter().filter(|p| is_mergeable(p)).cloned())
        .collect()
}

/// Read every fragment once, in order
pub fn read_fragments<FS: FileSystem>(fs: &FS, paths: &[PathBuf]) -> MergeResult<Vec<Fragment>> {
    paths
        .iter()
        .map(|path| {
            fs.read(path)
                .map(|text| Fragment::new(path.clone(), text))
                .map_err(|e| MergeError::FragmentRead {
                    path: path.clone(),
                    source: e.into_io(),
                })
        })
        .collect()
}
