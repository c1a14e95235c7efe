//! Compose Use Case
//!
//! Reads fragments and composes them without compiling; backs the
//! `compose` command used to inspect the synthetic document.

use std::path::PathBuf;

use crate::application::fragments::read_fragments;
use crate::domain::ports::FileSystem;
use crate::domain::services::{compose, Composition};
use crate::domain::value_objects::HeaderPolicy;
use crate::error::{MergeError, MergeResult};

pub struct ComposeUseCase<FS: FileSystem> {
    file_system: FS,
}

impl<FS: FileSystem> ComposeUseCase<FS> {
    pub fn new(file_system: FS) -> Self {
        Self { file_system }
    }

    pub fn execute(&self, sources: &[PathBuf], policy: HeaderPolicy) -> MergeResult<Composition> {
        let fragments = read_fragments(&self.file_system, sources)?;
        let (primary, imported) = fragments.split_first().ok_or(MergeError::NoFragments)?;
        compose(primary, imported, policy)
    }
}
