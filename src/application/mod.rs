//! Application Layer
//!
//! Use cases that orchestrate the merge-and-compile flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BuildUseCase` - Read, compose, compile, translate, place artifacts
//! - `ComposeUseCase` - Read and compose only

pub mod build;
pub mod compose;
pub mod fragments;

pub use build::{
    BuildArtifacts, BuildOptions, BuildReport, BuildRequest, BuildUseCase,
    DEFAULT_BINARY_EXTENSION, DEFAULT_SYMBOL_EXTENSION, UNKNOWN_COMPILER_ERROR,
};
pub use compose::ComposeUseCase;
pub use fragments::{is_mergeable, mergeable_fragments, read_fragments};
