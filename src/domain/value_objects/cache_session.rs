//! Cache Session Value Object
//!
//! Injected cache root plus a per-invocation identifier. Workspaces live
//! under `<root>/.build/<id>/<project>`, so two concurrent invocations
//! never share a directory.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use sha2::{Digest, Sha256};

static SESSION_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Length of the hex session id
const ID_LEN: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheSession {
    root: PathBuf,
    id: String,
}

impl CacheSession {
    /// Start a new session with a fresh unique id
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let seq = SESSION_COUNTER.fetch_add(1, Ordering::Relaxed);
        let now = chrono::Utc::now();
        let seed = format!(
            "{}-{}-{}",
            std::process::id(),
            seq,
            now.timestamp_nanos_opt().unwrap_or_else(|| now.timestamp_micros())
        );
        let digest = Sha256::digest(seed.as_bytes());
        let mut id = format!("{:x}", digest);
        id.truncate(ID_LEN);
        Self::with_id(root, id)
    }

    /// Session with a caller-chosen id
    pub fn with_id(root: impl Into<PathBuf>, id: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            id: id.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Workspace directory for a project in this session
    pub fn workspace_dir(&self, project_name: &str) -> PathBuf {
        self.root.join(".build").join(&self.id).join(project_name)
    }

    /// Directory holding every workspace of this session
    pub fn session_dir(&self) -> PathBuf {
        self.root.join(".build").join(&self.id)
    }
}
