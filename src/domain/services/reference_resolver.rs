//! Reference Resolver
//!
//! Reduces the caller's referenced assemblies to the set that must be passed
//! to the back end explicitly.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Why a reference was left out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// Lives in a shared/platform directory and is implicitly available
    Shared,
    /// Not path-rooted, so not resolvable here
    NotRooted,
    /// Already supplied by the hosting runtime
    HostProvided,
    /// Listed more than once
    Duplicate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedReferences {
    pub kept: Vec<PathBuf>,
    pub dropped: Vec<(PathBuf, DropReason)>,
}

/// Reference filtering rules
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceResolver {
    shared_dirs: Vec<PathBuf>,
    host_dir: Option<PathBuf>,
}

impl ReferenceResolver {
    pub fn new(shared_dirs: Vec<PathBuf>, host_dir: Option<PathBuf>) -> Self {
        Self {
            shared_dirs,
            host_dir,
        }
    }

    /// Filter `references`, keeping input order.
    pub fn resolve(&self, references: &[PathBuf]) -> ResolvedReferences {
        let mut resolved = ResolvedReferences::default();
        let mut seen = HashSet::new();

        for reference in references {
            match self.drop_reason(reference, &seen) {
                Some(reason) => resolved.dropped.push((reference.clone(), reason)),
                None => {
                    seen.insert(reference.clone());
                    resolved.kept.push(reference.clone());
                }
            }
        }

        resolved
    }

    fn drop_reason(&self, reference: &Path, seen: &HashSet<PathBuf>) -> Option<DropReason> {
        let dir = reference.parent();

        if dir.is_some_and(|d| self.shared_dirs.iter().any(|shared| d.starts_with(shared))) {
            Some(DropReason::Shared)
        } else if !reference.has_root() {
            Some(DropReason::NotRooted)
        } else if self.host_dir.is_some() && dir == self.host_dir.as_deref() {
            Some(DropReason::HostProvided)
        } else if seen.contains(reference) {
            Some(DropReason::Duplicate)
        } else {
            None
        }
    }
}
