//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system, home and cache directory resolution
//! - `backend/` - Process compiler back end and its diagnostic format
//! - `events/` - JSON and console event sinks

pub mod backend;
pub mod events;
pub mod fs;

// Re-export for convenience
pub use backend::ProcessBackend;
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::LocalFs;
