//! End-to-end behaviour of `preflight [CHECK]`

use serial_test::serial;

use super::helpers::{
    create_temp_repo, run_preflight, stderr, stdout, write_config, LINT_FAILS_TEST_PASSES,
};

#[test]
fn test_failing_check_reported_alongside_passing_one() {
    let repo = create_temp_repo();
    write_config(repo.path(), LINT_FAILS_TEST_PASSES);

    let output = run_preflight(repo.path(), &[]);
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    let lint = out.find("✗ lint").expect("lint row missing");
    let test = out.find("✓ test").expect("test row missing");
    assert!(lint < test, "rows must follow registry order:\n{out}");
    assert!(out.contains("E501 line too long"));
    assert!(out.contains("1 passed, 1 failed (2 checks)"));
}

#[test]
fn test_single_passing_check_exits_zero() {
    let repo = create_temp_repo();
    write_config(repo.path(), LINT_FAILS_TEST_PASSES);

    let output = run_preflight(repo.path(), &["test"]);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("✓ test"));
    assert!(!out.contains("lint"));
}

#[test]
fn test_unknown_check_runs_nothing() {
    let repo = create_temp_repo();
    write_config(
        repo.path(),
        r#"
[[check]]
name = "lint"
commands = [["touch", "lint-ran"]]
"#,
    );

    let output = run_preflight(repo.path(), &["style"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).contains("unknown check: style"));
    assert!(stderr(&output).contains("available checks: lint"));
    assert!(!repo.path().join("lint-ran").exists());
}

#[test]
fn test_first_failing_command_stops_its_check() {
    let repo = create_temp_repo();
    write_config(
        repo.path(),
        r#"
[[check]]
name = "lint"
commands = [["false"], ["touch", "second-ran"]]

[[check]]
name = "test"
commands = [["touch", "test-ran"]]
"#,
    );

    let output = run_preflight(repo.path(), &["all"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!repo.path().join("second-ran").exists());
    assert!(repo.path().join("test-ran").exists());
    assert!(stdout(&output).contains("exit code 1"));
}

#[test]
fn test_missing_executable_is_execution_error() {
    let repo = create_temp_repo();
    write_config(
        repo.path(),
        r#"
[[check]]
name = "type"
commands = [["preflight-no-such-type-checker", "."]]
"#,
    );

    let output = run_preflight(repo.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("! type"));
    assert!(out.contains("executable 'preflight-no-such-type-checker' not found"));
}

#[test]
#[serial]
fn test_timeout_flag_kills_slow_command() {
    let repo = create_temp_repo();
    write_config(
        repo.path(),
        r#"
[[check]]
name = "test"
commands = [["sleep", "10"]]
"#,
    );

    let output = run_preflight(repo.path(), &["--timeout", "1"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("killed after 1s timeout"));
}

#[test]
fn test_json_output() {
    let repo = create_temp_repo();
    write_config(repo.path(), LINT_FAILS_TEST_PASSES);

    let output = run_preflight(repo.path(), &["--output", "json"]);
    let doc: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("stdout should be JSON");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(doc["results"][0]["check"], "lint");
    assert_eq!(doc["results"][0]["outcome"]["kind"], "check_failure");
    assert_eq!(
        doc["results"][0]["outcome"]["excerpt"],
        "E501 line too long"
    );
    assert_eq!(doc["results"][1]["outcome"]["kind"], "success");
    assert_eq!(doc["summary"]["total"], 2);
    assert_eq!(doc["exit_code"], 1);
}

#[test]
fn test_list_shows_registry_order() {
    let repo = create_temp_repo();
    write_config(repo.path(), LINT_FAILS_TEST_PASSES);

    let output = run_preflight(repo.path(), &["list"]);
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(out.contains("preflight.toml"));
    let lint = out.find("  lint  sh -c").expect("lint row missing");
    let test = out.find("  test  sh -c").expect("test row missing");
    assert!(lint < test);
    assert!(out.contains("3 passed"));
}

#[test]
fn test_completions() {
    let repo = create_temp_repo();

    let output = run_preflight(repo.path(), &["completions", "bash"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("preflight"));

    let output = run_preflight(repo.path(), &["completions", "powershell"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("invalid value 'powershell'"));
}
