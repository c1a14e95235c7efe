//! Scenario: An author gets errors in the files they wrote
//!
//! Journey: a script is split across a primary fragment and imported
//! fragments. The compiler only ever sees one merged document, yet every
//! diagnostic must point at the original file and line.

use std::path::PathBuf;

use scriptmerge::application::{BuildOptions, BuildReport, BuildRequest, BuildUseCase};
use scriptmerge::domain::services::ReferenceResolver;
use scriptmerge::infrastructure::LocalFs;
use scriptmerge::{CacheSession, HeaderPolicy, Severity, SourceLocation};

use crate::common::*;

fn build(env: &TestEnv, sources: Vec<PathBuf>, options: BuildOptions) -> BuildReport {
    let use_case = BuildUseCase::new(
        ScriptedBackend::new(),
        LocalFs::new(),
        ReferenceResolver::default(),
    );
    use_case
        .execute(&BuildRequest::new(
            sources,
            CacheSession::new(env.cache_dir()),
            options,
        ))
        .expect("build should run")
}

/// SCENARIO A: error in the primary fragment keeps its own coordinates
#[test]
fn scenario_primary_error_maps_to_primary_line() {
    let env = TestEnv::new();
    let main = env.write("main.csx", MAIN_WITH_ERROR);
    let lib = env.write("lib.csx", LIB_SCRIPT);

    let report = build(&env, vec![main.clone(), lib], BuildOptions::new(env.project_path("app.dll")));

    assert!(!report.is_success());
    let diagnostics = report.outcome.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].location, Some(SourceLocation::new(main, 5, 19)));
}

/// SCENARIO B: error in an imported fragment's body counts its header lines
#[test]
fn scenario_imported_error_maps_past_hoisted_header() {
    let env = TestEnv::new();
    let main = env.write("main.csx", MAIN_SCRIPT);
    let lib = env.write("lib.csx", LIB_WITH_ERROR);

    let report = build(&env, vec![main, lib.clone()], BuildOptions::new(env.project_path("app.dll")));

    let diagnostics = report.outcome.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].location, Some(SourceLocation::new(lib, 5, 8)));
    assert_eq!(diagnostics[0].id, "CS0103");
}

#[test]
fn imported_error_maps_the_same_with_dropped_headers() {
    let env = TestEnv::new();
    let main = env.write("main.csx", MAIN_SCRIPT);
    let lib = env.write("lib.csx", LIB_WITH_ERROR);

    let report = build(
        &env,
        vec![main, lib.clone()],
        BuildOptions::new(env.project_path("app.dll")).with_header_policy(HeaderPolicy::Drop),
    );

    assert_eq!(
        report.outcome.diagnostics()[0].location,
        Some(SourceLocation::new(lib, 5, 8))
    );
}

#[test]
fn errors_in_several_fragments_keep_backend_order() {
    let env = TestEnv::new();
    let main = env.write("main.csx", MAIN_WITH_ERROR);
    let lib = env.write("lib.csx", LIB_WITH_ERROR);

    let report = build(&env, vec![main.clone(), lib.clone()], BuildOptions::new(env.project_path("app.dll")));

    let files: Vec<_> = report
        .outcome
        .diagnostics()
        .iter()
        .map(|d| d.location.as_ref().unwrap().file.clone())
        .collect();
    assert_eq!(files, vec![main, lib]);
}

#[test]
fn single_fragment_diagnostics_translate_to_themselves() {
    let env = TestEnv::new();
    let main = env.write("main.csx", MAIN_WITH_ERROR);

    let report = build(&env, vec![main.clone()], BuildOptions::new(env.project_path("app.dll")));

    assert_eq!(
        report.outcome.diagnostics()[0].location,
        Some(SourceLocation::new(main, 5, 19))
    );
}

#[test]
fn warnings_are_reported_without_failing() {
    let env = TestEnv::new();
    let main = env.write("main.csx", MAIN_SCRIPT);
    let lib = env.write("lib.csx", LIB_WITH_WARNING);

    let report = build(&env, vec![main, lib.clone()], BuildOptions::new(env.project_path("app.dll")));

    assert!(report.is_success());
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].severity, Severity::Warning);
    let location = report.warnings[0].location.as_ref().unwrap();
    assert_eq!((location.file.clone(), location.line), (lib, 2));
}

#[test]
fn unsplittable_import_is_a_parse_error_naming_the_file() {
    let env = TestEnv::new();
    let main = env.write("main.csx", MAIN_SCRIPT);
    let broken = env.write("broken.csx", UNTERMINATED_HEADER);

    let use_case = BuildUseCase::new(
        ScriptedBackend::new(),
        LocalFs::new(),
        ReferenceResolver::default(),
    );
    let err = use_case
        .execute(&BuildRequest::new(
            vec![main, broken.clone()],
            CacheSession::new(env.cache_dir()),
            BuildOptions::new(env.project_path("app.dll")),
        ))
        .unwrap_err();

    let diagnostic = err.to_diagnostic();
    assert_eq!(diagnostic.id, "SM0001");
    assert_eq!(diagnostic.location.unwrap().file, broken);
    assert_eq!(use_case.backend().calls(), 0);
}
