//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::{DEFAULT_BINARY_EXTENSION, DEFAULT_SYMBOL_EXTENSION};
use crate::domain::services::ReferenceResolver;
use crate::domain::value_objects::HeaderPolicy;
use crate::error::MergeResult;
use crate::infrastructure::fs::{default_cache_root, expand_home};

use super::loader;
use super::ConfigWarning;

/// `[build]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Root of the build cache; workspaces live under `<cache_dir>/.build`
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,

    #[serde(default)]
    pub debug: bool,

    #[serde(default = "default_binary_extension")]
    pub binary_extension: String,

    #[serde(default = "default_symbol_extension")]
    pub symbol_extension: String,

    #[serde(default)]
    pub headers: HeaderPolicy,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            cache_dir: None,
            debug: false,
            binary_extension: default_binary_extension(),
            symbol_extension: default_symbol_extension(),
            headers: HeaderPolicy::default(),
        }
    }
}

fn default_binary_extension() -> String {
    DEFAULT_BINARY_EXTENSION.to_string()
}

fn default_symbol_extension() -> String {
    DEFAULT_SYMBOL_EXTENSION.to_string()
}

/// `[references]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferencesConfig {
    /// Platform directories whose assemblies are implicitly available
    #[serde(default)]
    pub shared_dirs: Vec<PathBuf>,

    /// Directory of the hosting runtime
    #[serde(default)]
    pub host_dir: Option<PathBuf>,

    /// Assemblies referenced by every build
    #[serde(default)]
    pub assemblies: Vec<PathBuf>,
}

/// `[backend]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_program")]
    pub program: String,

    /// Argument templates, see `infrastructure::backend::placeholders`
    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_args(),
        }
    }
}

fn default_program() -> String {
    "csc".to_string()
}

fn default_args() -> Vec<String> {
    [
        "-nologo",
        "-target:library",
        "-out:{output}",
        "-optimize{optimize}",
        "-debug{debug}",
        "-pdb:{symbols}",
        "-reference:{references}",
        "{source}",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub references: ReferencesConfig,

    #[serde(default)]
    pub backend: BackendConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> MergeResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> MergeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> MergeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (SCRIPTMERGE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Cache root with `~` expanded
    pub fn cache_root(&self) -> PathBuf {
        match &self.build.cache_dir {
            Some(dir) => expand_home(dir),
            None => default_cache_root(),
        }
    }

    pub fn reference_resolver(&self) -> ReferenceResolver {
        ReferenceResolver::new(
            self.references
                .shared_dirs
                .iter()
                .map(|d| expand_home(d))
                .collect(),
            self.references.host_dir.as_deref().map(expand_home),
        )
    }
}
