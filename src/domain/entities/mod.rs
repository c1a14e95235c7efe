//! Domain Entities
//!
//! Core domain entities of a merge-and-compile invocation.
//! - `Fragment` - One original source file taking part in the merge
//! - `CompositionUnit` - The single synthetic document handed to the back end
//! - `Diagnostic` - A compiler message in original source coordinates
//! - `CompileOutcome` - Binary artifacts or the failure diagnostics

mod composition_unit;
mod diagnostic;
mod fragment;
mod outcome;

pub use composition_unit::CompositionUnit;
pub use diagnostic::{Diagnostic, Severity, SourceLocation};
pub use fragment::Fragment;
pub use outcome::CompileOutcome;
