//! Scenario: Building from the command line
//!
//! Journey: an author runs `scriptmerge` against their fragments with a
//! real (shell) compiler configured in `scriptmerge.toml`, and reads the
//! diagnostics it prints.

use crate::common::*;

/// A tiny compiler: fails on `undefined_symbol`, otherwise copies its input.
const COMPILER_SCRIPT: &str = r#"src="$1"; out="$2"; sym="$3"
n=$(grep -n undefined_symbol "$src" | head -n 1 | cut -d: -f1)
if [ -n "$n" ]; then
  echo "$src($n,1): error CS0103: The name 'undefined_symbol' does not exist"
  exit 1
fi
echo "warning CS1701: assuming assembly reference matches identity"
cp "$src" "$out"
if [ -n "$sym" ]; then echo symbols > "$sym"; fi
"#;

fn env_with_compiler() -> TestEnv {
    let env = TestEnv::new();
    let script = env.write("tools/compile.sh", COMPILER_SCRIPT);
    env.write(
        "scriptmerge.toml",
        &format!(
            "[backend]\nprogram = 'sh'\nargs = ['{}', '{{source}}', '{{output}}', '{{symbols}}']\n",
            script.display()
        ),
    );
    env
}

const EXPECTED_COMPOSITION: &str = "\
using System.IO;
using System.Linq;
using System.Text;
#line 1 \"main.csx\"
using System;

var greeting = Greet(\"world\");
Console.WriteLine(greeting);
#line 4 \"lib.csx\"
static string Greet(string name)
    => $\"hello {name}\";
";

#[test]
fn compose_prints_the_synthetic_document() {
    let env = TestEnv::new();
    env.write("main.csx", MAIN_SCRIPT);
    env.write("lib.csx", LIB_SCRIPT);

    let result = env.run(&["compose", "main.csx", "lib.csx"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(result.stdout, EXPECTED_COMPOSITION);
}

#[test]
fn compose_with_map_lists_ranges() {
    let env = TestEnv::new();
    env.write("main.csx", MAIN_SCRIPT);
    env.write("lib.csx", LIB_SCRIPT);

    let result = env.run(&["compose", "main.csx", "lib.csx", "--map"]);

    assert!(result.stdout.contains("0..3 -> lib.csx (+0)"));
    assert!(result.stdout.contains("4..8 -> main.csx (+0)"));
    assert!(result.stdout.contains("9..11 -> lib.csx (+3)"));
}

#[test]
fn compose_skips_debugger_helpers() {
    let env = TestEnv::new();
    env.write("main.csx", MAIN_SCRIPT);
    env.write("dbg.inject.helpers.csx", "static void Dump(this object o) {}\n");

    let result = env.run(&["compose", "main.csx", "dbg.inject.helpers.csx"]);

    assert!(result.is_success());
    assert!(!result.stdout.contains("Dump"));
}

#[test]
fn split_reports_header_size() {
    let env = TestEnv::new();
    env.write("lib.csx", LIB_SCRIPT);

    let result = env.run(&["split", "lib.csx"]);

    assert!(result.is_success());
    assert!(result.stdout.starts_with("header lines: 3\n"));
    assert!(result.stdout.contains("--- body\nstatic string Greet"));
}

#[test]
fn split_of_broken_fragment_is_fatal() {
    let env = TestEnv::new();
    env.write("broken.csx", UNTERMINATED_HEADER);

    let result = env.run(&["split", "broken.csx"]);

    assert_eq!(result.exit_code, 2);
    assert!(
        result.stderr.contains("broken.csx(2,1): error SM0001"),
        "{}",
        result.stderr
    );
}

#[test]
fn build_places_the_binary() {
    let env = env_with_compiler();
    env.write("main.csx", MAIN_SCRIPT);
    env.write("lib.csx", LIB_SCRIPT);

    let result = env.run(&["build", "main.csx", "lib.csx", "-o", "out/app.dll"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(read(&env.project_path("out/app.dll")), EXPECTED_COMPOSITION);
    assert!(!env.project_path("out/app.pdb").exists());
    assert!(result.stdout.contains("warning CS1701"));
    assert!(!env.has_leftover_workspaces());
}

#[test]
fn debug_build_places_symbols() {
    let env = env_with_compiler();
    env.write("main.csx", MAIN_SCRIPT);

    let result = env.run(&["build", "main.csx", "-o", "out/app.dll", "--debug"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(read(&env.project_path("out/app.pdb")), "symbols\n");
}

#[test]
fn build_errors_point_at_the_authored_file() {
    let env = env_with_compiler();
    env.write("main.csx", MAIN_WITH_ERROR);
    env.write("lib.csx", LIB_SCRIPT);

    let result = env.run(&["build", "main.csx", "lib.csx", "-o", "out/app.dll"]);

    assert_eq!(result.exit_code, 1, "{}", result.combined_output());
    assert!(
        result
            .stdout
            .contains("main.csx(5,1): error CS0103: The name 'undefined_symbol' does not exist"),
        "{}",
        result.stdout
    );
    assert!(!env.project_path("out/app.dll").exists());
    assert!(!env.has_leftover_workspaces());
}

#[test]
fn build_json_ends_with_a_result_line() {
    let env = env_with_compiler();
    env.write("main.csx", MAIN_SCRIPT);

    let result = env.run(&["--json", "build", "main.csx", "-o", "out/app.dll"]);

    let events: Vec<serde_json::Value> = result
        .stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(events.first().unwrap()["event"], "start");
    let last = events.last().unwrap();
    assert_eq!(last["event"], "result");
    assert_eq!(last["status"], "success");
}

#[test]
fn missing_compiler_is_fatal() {
    let env = env_with_compiler();
    env.write("main.csx", MAIN_SCRIPT);

    let result = env.run_with_env(
        &["build", "main.csx", "-o", "out/app.dll"],
        &[("SCRIPTMERGE_COMPILER", "/nonexistent/csc")],
    );

    assert_eq!(result.exit_code, 2);
    assert!(result.stderr.contains("error SM0002"), "{}", result.stderr);
    assert!(!env.has_leftover_workspaces());
}

#[test]
fn unknown_config_keys_are_warned_about() {
    let env = env_with_compiler();
    env.write("main.csx", MAIN_SCRIPT);
    let config = read(&env.project_path("scriptmerge.toml"));
    env.write("scriptmerge.toml", &format!("{}[build]\ndebgu = true\n", config));

    let result = env.run(&["compose", "main.csx"]);

    assert!(result.is_success());
    assert!(
        result.stderr.contains("unknown config key 'debgu'"),
        "{}",
        result.stderr
    );
    assert!(result.stderr.contains("did you mean 'debug'"));
}
