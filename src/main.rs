//! scriptmerge CLI - merge script fragments into one compilation
//!
//! Usage: scriptmerge <COMMAND>
//!
//! Commands:
//!   build    Merge fragments, compile them and place the binary
//!   compose  Print the composed document
//!   split    Show where a fragment's import header ends
//!
//! Exit codes: 0 success, 1 compilation errors, 2 fatal error.

mod commands;

use std::process::ExitCode;

use clap::Parser;

use scriptmerge::error::MergeError;
use scriptmerge::presentation::output::diagnostic_to_json;
use scriptmerge::presentation::{use_color, Cli, Commands, DiagnosticRenderer};

use commands::{cmd_build, cmd_compose, cmd_split, BuildArgs, GlobalArgs, EXIT_FATAL};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let global = GlobalArgs {
        json: cli.json,
        verbose: cli.verbose,
        color: use_color(cli.color),
        config: cli.config,
    };

    let result = match cli.command {
        Commands::Build {
            files,
            output,
            debug,
            references,
            drop_headers,
        } => cmd_build(
            BuildArgs {
                files,
                output,
                debug,
                references,
                drop_headers,
            },
            &global,
        ),
        Commands::Compose {
            files,
            map,
            drop_headers,
        } => cmd_compose(&files, map, drop_headers, &global),
        Commands::Split { file } => cmd_split(&file, &global),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            report_fatal(&err, &global);
            ExitCode::from(EXIT_FATAL)
        }
    }
}

fn report_fatal(err: &anyhow::Error, global: &GlobalArgs) {
    let Some(merge_error) = err.downcast_ref::<MergeError>() else {
        eprintln!("error: {:#}", err);
        return;
    };

    let diagnostic = merge_error.to_diagnostic();
    if global.json {
        let output = serde_json::json!({
            "event": "error",
            "diagnostic": diagnostic_to_json(&diagnostic),
        });
        println!("{}", output);
    } else {
        eprintln!("{}", DiagnosticRenderer::new(global.color).render(&diagnostic));
    }
}
