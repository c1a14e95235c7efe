//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::HeaderPolicy;
use crate::error::{MergeError, MergeResult};
use crate::infrastructure::fs::user_config_path;

use super::types::Config;
use super::ConfigWarning;

/// Project configuration file name, looked up next to the primary fragment
pub const PROJECT_CONFIG_FILE: &str = "scriptmerge.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> MergeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| MergeError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| MergeError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults; env overrides apply last.
///
/// The first file found wins; files are not merged.
pub fn load_or_default(project_root: Option<&Path>) -> MergeResult<(Config, Vec<ConfigWarning>)> {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(user_config_path());

    for candidate in candidates {
        if candidate.is_file() {
            let (config, warnings) = load_with_warnings(&candidate)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply environment variable overrides (SCRIPTMERGE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env(config, |key| std::env::var(key).ok())
}

fn apply_env(mut config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    // SCRIPTMERGE_CACHE_DIR
    if let Some(dir) = get_env("SCRIPTMERGE_CACHE_DIR").filter(|d| !d.is_empty()) {
        config.build.cache_dir = Some(PathBuf::from(dir));
    }

    // SCRIPTMERGE_DEBUG
    if let Some(val) = get_env("SCRIPTMERGE_DEBUG") {
        config.build.debug = val.to_lowercase() != "false" && val != "0";
    }

    // SCRIPTMERGE_HEADERS
    if let Some(policy) = get_env("SCRIPTMERGE_HEADERS") {
        config.build.headers = match policy.to_lowercase().as_str() {
            "drop" => HeaderPolicy::Drop,
            _ => HeaderPolicy::Hoist,
        };
    }

    // SCRIPTMERGE_COMPILER
    if let Some(program) = get_env("SCRIPTMERGE_COMPILER").filter(|p| !p.is_empty()) {
        config.backend.program = program;
    }

    // SCRIPTMERGE_REFERENCES (platform path-list separator)
    if let Some(refs) = get_env("SCRIPTMERGE_REFERENCES") {
        config
            .references
            .assemblies
            .extend(std::env::split_paths(&refs).filter(|p| !p.as_os_str().is_empty()));
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "build",
        "cache_dir",
        "debug",
        "binary_extension",
        "symbol_extension",
        "headers",
        "references",
        "shared_dirs",
        "host_dir",
        "assemblies",
        "backend",
        "program",
        "args",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

#[cfg(test)]
pub(super) fn apply_env_for_test(
    config: Config,
    vars: &[(&str, &str)],
) -> Config {
    apply_env(config, |key| {
        vars.iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    })
}
