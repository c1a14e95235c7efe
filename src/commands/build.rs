//! Build command handler

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;

use scriptmerge::application::{mergeable_fragments, BuildOptions, BuildRequest};
use scriptmerge::domain::value_objects::{CacheSession, HeaderPolicy};
use scriptmerge::presentation::output::report_to_json;
use scriptmerge::presentation::{create_build_use_case, create_event_sink, DiagnosticRenderer};

use super::{exit_code, load_config, GlobalArgs};

#[derive(Debug, Clone)]
pub struct BuildArgs {
    pub files: Vec<PathBuf>,
    pub output: PathBuf,
    pub debug: bool,
    pub references: Vec<PathBuf>,
    pub drop_headers: bool,
}

/// Execute the build command
pub fn cmd_build(args: BuildArgs, global: &GlobalArgs) -> Result<ExitCode> {
    let sources = mergeable_fragments(&args.files);
    let config = load_config(global, sources.first().map(PathBuf::as_path))?;

    let mut references = config.references.assemblies.clone();
    for reference in args.references {
        if !references.contains(&reference) {
            references.push(reference);
        }
    }

    let header_policy = if args.drop_headers {
        HeaderPolicy::Drop
    } else {
        config.build.headers
    };

    let options = BuildOptions::new(args.output)
        .with_debug_information(args.debug || config.build.debug)
        .with_references(references)
        .with_header_policy(header_policy)
        .with_extensions(
            config.build.binary_extension.clone(),
            config.build.symbol_extension.clone(),
        );

    let request = BuildRequest::new(sources, CacheSession::new(config.cache_root()), options);
    let use_case = create_build_use_case(&config);
    let events = create_event_sink(global.json, global.verbose, global.color);

    let report = use_case.execute_with_events(&request, events)?;

    if global.json {
        println!("{}", report_to_json(&report));
    } else {
        for line in DiagnosticRenderer::new(global.color).render_report(&report) {
            println!("{}", line);
        }
    }

    Ok(exit_code(report.is_success()))
}
