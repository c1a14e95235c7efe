//! Domain Layer
//!
//! The core of scriptmerge - pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Fragment, CompositionUnit, Diagnostic, CompileOutcome
//! - `value_objects/` - RangeMap, PositionMarker, HeaderPolicy, CacheSession
//! - `services/` - Directive splitter, composer, translator, reference resolver
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or a process
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
