//! Compose command handler
//!
//! Prints the synthetic document the back end would receive.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;

use scriptmerge::application::mergeable_fragments;
use scriptmerge::domain::value_objects::HeaderPolicy;
use scriptmerge::presentation::create_compose_use_case;
use scriptmerge::presentation::output::render_range_map;

use super::{load_config, GlobalArgs};

pub fn cmd_compose(
    files: &[PathBuf],
    map: bool,
    drop_headers: bool,
    global: &GlobalArgs,
) -> Result<ExitCode> {
    let sources = mergeable_fragments(files);
    let config = load_config(global, sources.first().map(PathBuf::as_path))?;
    let policy = if drop_headers {
        HeaderPolicy::Drop
    } else {
        config.build.headers
    };

    let composition = create_compose_use_case().execute(&sources, policy)?;

    if global.json {
        let output = serde_json::json!({
            "event": "composed",
            "command": "compose",
            "text": composition.unit.text(),
            "ranges": composition.range_map,
        });
        println!("{}", output);
    } else {
        print!("{}", composition.unit.text());
        if map {
            println!();
            print!("{}", render_range_map(&composition.range_map));
        }
    }

    Ok(ExitCode::SUCCESS)
}
