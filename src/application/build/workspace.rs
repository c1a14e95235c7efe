//! Build Workspace
//!
//! A disposable directory `<cache>/.build/<session>/<project>` created fresh
//! for one invocation. Dropping the guard removes the whole session directory,
//! whichever way the build ends.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::ports::{CompileEvent, CompileEventSink, FileSystem};
use crate::domain::value_objects::CacheSession;
use crate::error::{MergeError, MergeResult};

pub struct Workspace<'fs, FS: FileSystem> {
    fs: &'fs FS,
    /// Session directory; removed on drop
    root: PathBuf,
    dir: PathBuf,
    events: Arc<dyn CompileEventSink>,
}

impl<'fs, FS: FileSystem> Workspace<'fs, FS> {
    /// Create the workspace, removing anything left at that path first.
    pub fn create(
        fs: &'fs FS,
        session: &CacheSession,
        project_name: &str,
        events: Arc<dyn CompileEventSink>,
    ) -> MergeResult<Self> {
        let root = session.session_dir();
        let dir = session.workspace_dir(project_name);

        if fs.exists(&dir) {
            fs.remove_dir_all(&dir).map_err(|e| MergeError::ArtifactIo {
                path: dir.clone(),
                source: e.into_io(),
            })?;
        }
        fs.create_dir_all(&dir).map_err(|e| MergeError::ArtifactIo {
            path: dir.clone(),
            source: e.into_io(),
        })?;

        Ok(Self {
            fs,
            root,
            dir,
            events,
        })
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Path of a file inside the workspace
    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Write bytes into the workspace
    pub fn write(&self, name: &str, content: &[u8]) -> MergeResult<PathBuf> {
        let path = self.file(name);
        self.fs
            .write(&path, content)
            .map_err(|e| MergeError::ArtifactIo {
                path: path.clone(),
                source: e.into_io(),
            })?;
        Ok(path)
    }
}

impl<FS: FileSystem> Drop for Workspace<'_, FS> {
    fn drop(&mut self) {
        if let Err(e) = self.fs.remove_dir_all(&self.root) {
            self.events.on_event(CompileEvent::CleanupFailed {
                path: self.root.clone(),
                error: e.to_string(),
            });
        }
    }
}
