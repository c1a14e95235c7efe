//! Compiler Back End Implementations

pub mod diagnostics_format;
mod process;

pub use process::{placeholders, ProcessBackend};
