//! Configuration module for scriptmerge
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SCRIPTMERGE_*)
//! 3. Project config (scriptmerge.toml next to the primary fragment)
//! 4. User config (<config dir>/scriptmerge/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::PROJECT_CONFIG_FILE;
pub use types::{BackendConfig, BuildConfig, Config, ReferencesConfig};
