//! scriptmerge - multi-file script merge-and-compile driver
//!
//! Merges a primary script fragment and the fragments it imports into one
//! synthetic document, compiles it through a pluggable back end, and maps
//! every diagnostic back to the file and line the author wrote.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{BuildOptions, BuildReport, BuildRequest, BuildUseCase, ComposeUseCase};
pub use config::Config;
pub use domain::entities::{CompileOutcome, Diagnostic, Fragment, Severity, SourceLocation};
pub use domain::services::{compose, split, Composition, Translator};
pub use domain::value_objects::{CacheSession, HeaderPolicy, RangeMap};
pub use error::{MergeError, MergeResult};
