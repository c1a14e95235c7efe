//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod cache_session;
mod config_warning;
mod header_policy;
mod position_marker;
mod range_map;

pub use cache_session::CacheSession;
pub use config_warning::ConfigWarning;
pub use header_policy::HeaderPolicy;
pub use position_marker::PositionMarker;
pub use range_map::{RangeEntry, RangeMap};
