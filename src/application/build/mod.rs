//! Build Module
//!
//! Orchestrates the merge-and-compile flow.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`BuildOptions`, `BuildRequest`)
//! - `result` - Result types (`BuildReport`, `BuildArtifacts`)
//! - `use_case` - Core use case logic (`BuildUseCase`)
//! - `workspace` - Per-invocation build directory with guaranteed cleanup
//!
//! ## Usage
//!
//! ```ignore
//! use scriptmerge::application::build::{BuildOptions, BuildRequest, BuildUseCase};
//!
//! let use_case = BuildUseCase::new(backend, LocalFs::new(), ReferenceResolver::default());
//! let report = use_case.execute(&BuildRequest::new(sources, session, BuildOptions::new(out)))?;
//! ```

mod options;
mod result;
mod use_case;
mod workspace;

pub use options::{BuildOptions, BuildRequest, DEFAULT_BINARY_EXTENSION, DEFAULT_SYMBOL_EXTENSION};
pub use result::{BuildArtifacts, BuildReport};
pub use use_case::{BuildUseCase, UNKNOWN_COMPILER_ERROR};
pub use workspace::Workspace;
