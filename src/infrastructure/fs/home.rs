//! Home and cache directory resolution with test isolation support.
//!
//! `dirs` uses system APIs on Windows that ignore `HOME`/`USERPROFILE`, so
//! tests override the home directory through `SCRIPTMERGE_TEST_HOME` instead.

use std::path::PathBuf;

/// Environment variable for test isolation of the home directory.
pub const TEST_HOME_VAR: &str = "SCRIPTMERGE_TEST_HOME";

/// Home directory for scriptmerge-internal paths.
pub fn home_dir() -> Option<PathBuf> {
    std::env::var(TEST_HOME_VAR)
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

/// Default cache root: the platform cache dir, or `~/.cache` under test.
///
/// Falls back to the system temp directory when neither can be resolved.
pub fn default_cache_root() -> PathBuf {
    if let Ok(home) = std::env::var(TEST_HOME_VAR) {
        return PathBuf::from(home).join(".cache").join("scriptmerge");
    }
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("scriptmerge")
}

/// User-level configuration file (`<config dir>/scriptmerge/config.toml`)
pub fn user_config_path() -> Option<PathBuf> {
    if let Ok(home) = std::env::var(TEST_HOME_VAR) {
        return Some(
            PathBuf::from(home)
                .join(".config")
                .join("scriptmerge")
                .join("config.toml"),
        );
    }
    dirs::config_dir().map(|d| d.join("scriptmerge").join("config.toml"))
}
