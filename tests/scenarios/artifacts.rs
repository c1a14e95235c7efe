//! Scenario: Binaries land where they were asked for, and nothing else stays
//!
//! Journey: a build either produces the binary (plus symbols in debug) at
//! the output path, or produces diagnostics and leaves the output alone.
//! The per-invocation workspace never outlives the build.

use scriptmerge::application::{
    BuildOptions, BuildRequest, BuildUseCase, UNKNOWN_COMPILER_ERROR,
};
use scriptmerge::domain::services::ReferenceResolver;
use scriptmerge::infrastructure::LocalFs;
use scriptmerge::{CacheSession, MergeError};

use crate::common::*;

fn use_case(mode: Mode) -> BuildUseCase<ScriptedBackend, LocalFs> {
    BuildUseCase::new(
        ScriptedBackend::with_mode(mode),
        LocalFs::new(),
        ReferenceResolver::default(),
    )
}

fn project(env: &TestEnv) -> Vec<std::path::PathBuf> {
    vec![
        env.write("main.csx", MAIN_SCRIPT),
        env.write("lib.csx", LIB_SCRIPT),
    ]
}

/// SCENARIO C: debug builds ship symbols next to the binary
#[test]
fn scenario_debug_build_places_binary_and_symbols() {
    let env = TestEnv::new();
    let output = env.project_path("bin/app.dll");
    let options = BuildOptions::new(&output).with_debug_information(true);

    let report = use_case(Mode::Scan)
        .execute(&BuildRequest::new(project(&env), CacheSession::new(env.cache_dir()), options))
        .unwrap();

    assert!(report.is_success());
    assert!(output.exists());
    assert_eq!(read(&env.project_path("bin/app.pdb")), "symbols:main.csx");
    assert!(!env.has_leftover_workspaces());
}

/// SCENARIO C: release builds ship the binary only
#[test]
fn scenario_release_build_places_binary_only() {
    let env = TestEnv::new();
    let output = env.project_path("bin/app.dll");

    let report = use_case(Mode::Scan)
        .execute(&BuildRequest::new(
            project(&env),
            CacheSession::new(env.cache_dir()),
            BuildOptions::new(&output),
        ))
        .unwrap();

    assert!(report.is_success());
    assert!(output.exists());
    assert!(!env.project_path("bin/app.pdb").exists());
}

/// SCENARIO C: switching back to release drops the symbols of the debug build
#[test]
fn scenario_release_after_debug_leaves_binary_only() {
    let env = TestEnv::new();
    let output = env.project_path("bin/app.dll");
    let sources = project(&env);

    use_case(Mode::Scan)
        .execute(&BuildRequest::new(
            sources.clone(),
            CacheSession::new(env.cache_dir()),
            BuildOptions::new(&output).with_debug_information(true),
        ))
        .unwrap();
    assert!(env.project_path("bin/app.pdb").exists());

    let report = use_case(Mode::Scan)
        .execute(&BuildRequest::new(
            sources,
            CacheSession::new(env.cache_dir()),
            BuildOptions::new(&output),
        ))
        .unwrap();

    assert!(report.is_success());
    assert!(output.exists());
    assert!(!env.project_path("bin/app.pdb").exists());
}

/// SCENARIO D: a compiler that cannot run is fatal and leaves nothing behind
#[test]
fn scenario_unavailable_compiler_is_fatal() {
    let env = TestEnv::new();
    let output = env.project_path("bin/app.dll");

    let err = use_case(Mode::Unavailable)
        .execute(&BuildRequest::new(
            project(&env),
            CacheSession::new(env.cache_dir()),
            BuildOptions::new(&output),
        ))
        .unwrap_err();

    assert!(matches!(err, MergeError::CompilerInvocation { .. }));
    assert!(err.to_string().contains("compiler not installed"));
    assert!(!output.exists());
    assert!(!env.has_leftover_workspaces());
}

/// SCENARIO E: a silent failure still explains itself
#[test]
fn scenario_silent_failure_gets_one_unknown_error() {
    let env = TestEnv::new();

    let report = use_case(Mode::SilentFailure)
        .execute(&BuildRequest::new(
            project(&env),
            CacheSession::new(env.cache_dir()),
            BuildOptions::new(env.project_path("bin/app.dll")),
        ))
        .unwrap();

    let diagnostics = report.outcome.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, UNKNOWN_COMPILER_ERROR);
    assert!(diagnostics[0].location.is_none());
    assert!(report.artifacts.is_none());
}

#[test]
fn failed_build_leaves_previous_output_untouched() {
    let env = TestEnv::new();
    let output = env.write("bin/app.dll", "previous build");
    let sources = vec![
        env.write("main.csx", MAIN_WITH_ERROR),
        env.write("lib.csx", LIB_SCRIPT),
    ];

    let report = use_case(Mode::Scan)
        .execute(&BuildRequest::new(
            sources,
            CacheSession::new(env.cache_dir()),
            BuildOptions::new(&output),
        ))
        .unwrap();

    assert!(!report.is_success());
    assert_eq!(read(&output), "previous build");
    assert!(!env.has_leftover_workspaces());
}

#[test]
fn identical_inputs_build_identical_binaries() {
    let env = TestEnv::new();
    let sources = project(&env);
    let first = env.project_path("first/app.dll");
    let second = env.project_path("second/app.dll");
    let use_case = use_case(Mode::Scan);

    for output in [&first, &second] {
        use_case
            .execute(&BuildRequest::new(
                sources.clone(),
                CacheSession::new(env.cache_dir()),
                BuildOptions::new(output),
            ))
            .unwrap();
    }

    assert_eq!(std::fs::read(&first).unwrap(), std::fs::read(&second).unwrap());
    assert_eq!(use_case.backend().calls(), 2);
}

#[test]
fn concurrent_sessions_use_distinct_workspaces() {
    let env = TestEnv::new();
    let a = CacheSession::new(env.cache_dir());
    let b = CacheSession::new(env.cache_dir());

    assert_ne!(a.workspace_dir("main.csx"), b.workspace_dir("main.csx"));
}
