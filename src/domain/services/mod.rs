//! Domain Services
//!
//! Pure logic over fragments, composition units and diagnostics.
//! These services have no I/O dependencies and are easily testable.

pub mod composer;
pub mod directive_splitter;
pub mod reference_resolver;
pub mod translator;

pub use composer::{compose, Composition};
pub use directive_splitter::{split, SplitSource};
pub use reference_resolver::{DropReason, ReferenceResolver, ResolvedReferences};
pub use translator::Translator;
