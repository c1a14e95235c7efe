//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod compile_events;
pub mod compiler_backend;
pub mod file_system;

pub use compile_events::{CompileEvent, CompileEventSink, NoopEventSink};
pub use compiler_backend::{
    BackendError, BackendOutput, CompileRequest, CompilerBackend, EmitMode, RawDiagnostic,
    RawLocation,
};
pub use file_system::{FileSystem, FsError, FsResult};
