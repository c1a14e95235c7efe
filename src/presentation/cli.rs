//! CLI Argument Parsing
//!
//! Global flags (--json, --color, --verbose, --config) are inherited by all
//! subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// scriptmerge - merge script fragments into one compilation
#[derive(Parser, Debug)]
#[command(name = "scriptmerge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v timing, -vv every build phase)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (default: scriptmerge.toml next to the primary fragment)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge fragments, compile them and place the binary
    Build {
        /// Fragment files; the first is the primary fragment
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output binary path
        #[arg(short, long)]
        output: PathBuf,

        /// Emit debug information and a symbol file
        #[arg(long)]
        debug: bool,

        /// Referenced assembly (repeatable)
        #[arg(short = 'r', long = "reference")]
        references: Vec<PathBuf>,

        /// Drop the import headers of imported fragments instead of hoisting them
        #[arg(long)]
        drop_headers: bool,
    },

    /// Print the composed document
    Compose {
        /// Fragment files; the first is the primary fragment
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Also print the range map
        #[arg(long)]
        map: bool,

        /// Drop the import headers of imported fragments instead of hoisting them
        #[arg(long)]
        drop_headers: bool,
    },

    /// Show where a fragment's import header ends
    Split {
        /// Fragment file
        file: PathBuf,
    },
}
