//! Build Options
//!
//! Configuration types for build operations.

use std::path::PathBuf;

use crate::domain::value_objects::{CacheSession, HeaderPolicy};

/// Default extension of the emitted binary
pub const DEFAULT_BINARY_EXTENSION: &str = "dll";
/// Default extension of the debug-symbol file
pub const DEFAULT_SYMBOL_EXTENSION: &str = "pdb";

/// Options for the build use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Debug emission plus a symbol file; optimized emission otherwise
    pub include_debug_information: bool,
    /// Where the binary is copied on success
    pub output_assembly: PathBuf,
    /// Ordered set of referenced assemblies, before filtering
    pub referenced_assemblies: Vec<PathBuf>,
    /// What happens to imported fragments' import declarations
    pub header_policy: HeaderPolicy,
    pub binary_extension: String,
    pub symbol_extension: String,
}

impl BuildOptions {
    pub fn new(output_assembly: impl Into<PathBuf>) -> Self {
        Self {
            include_debug_information: false,
            output_assembly: output_assembly.into(),
            referenced_assemblies: Vec::new(),
            header_policy: HeaderPolicy::default(),
            binary_extension: DEFAULT_BINARY_EXTENSION.to_string(),
            symbol_extension: DEFAULT_SYMBOL_EXTENSION.to_string(),
        }
    }

    pub fn with_debug_information(mut self, enabled: bool) -> Self {
        self.include_debug_information = enabled;
        self
    }

    pub fn with_references(mut self, references: Vec<PathBuf>) -> Self {
        self.referenced_assemblies = references;
        self
    }

    pub fn with_header_policy(mut self, policy: HeaderPolicy) -> Self {
        self.header_policy = policy;
        self
    }

    pub fn with_extensions(mut self, binary: impl Into<String>, symbols: impl Into<String>) -> Self {
        self.binary_extension = binary.into();
        self.symbol_extension = symbols.into();
        self
    }

    /// Path the symbol file is copied to: the output path with the symbol extension
    pub fn symbol_output(&self) -> PathBuf {
        self.output_assembly.with_extension(&self.symbol_extension)
    }
}

/// One build invocation: sources, the cache session and options
#[derive(Debug, Clone)]
pub struct BuildRequest {
    /// Fragment paths; the first is the primary fragment
    pub sources: Vec<PathBuf>,
    pub session: CacheSession,
    pub options: BuildOptions,
}

impl BuildRequest {
    pub fn new(sources: Vec<PathBuf>, session: CacheSession, options: BuildOptions) -> Self {
        Self {
            sources,
            session,
            options,
        }
    }
}
