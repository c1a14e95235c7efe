//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod home;
mod local;

pub use home::{default_cache_root, home_dir, user_config_path, TEST_HOME_VAR};
pub use local::{expand_home, LocalFs};
