//! Command handlers
//!
//! Each handler returns the process exit code; fatal errors propagate as
//! `anyhow::Error` and are rendered by `main`.

mod build;
mod compose;
mod split;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use scriptmerge::config::Config;

pub use build::{cmd_build, BuildArgs};
pub use compose::cmd_compose;
pub use split::cmd_split;

/// Exit code of a build that ran but reported errors
pub const EXIT_COMPILE_FAILURE: u8 = 1;
/// Exit code of a fatal error
pub const EXIT_FATAL: u8 = 2;

/// Options shared by every command
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub json: bool,
    pub verbose: u8,
    pub color: bool,
    pub config: Option<PathBuf>,
}

/// Load configuration: `--config` if given, else project/user/defaults.
///
/// Unknown keys are reported on stderr and otherwise ignored.
pub fn load_config(global: &GlobalArgs, primary: Option<&Path>) -> Result<Config> {
    let (config, warnings) = match &global.config {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)?;
            (config.with_env_overrides(), warnings)
        }
        None => Config::load_or_default(primary.and_then(Path::parent))?,
    };

    for warning in &warnings {
        eprintln!("warning: {}", warning);
    }
    Ok(config)
}

pub fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_COMPILE_FAILURE)
    }
}
