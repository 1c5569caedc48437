//! Configuration discovery and error handling through the binary

use serial_test::serial;

use super::helpers::{create_temp_repo, run_preflight, stderr, stdout, write_config};

#[test]
fn test_config_discovered_from_subdirectory() {
    let repo = create_temp_repo();
    write_config(
        repo.path(),
        r#"
[[check]]
name = "unit"
commands = [["true"]]
"#,
    );
    let nested = repo.path().join("src").join("pkg");
    std::fs::create_dir_all(&nested).unwrap();

    let output = run_preflight(&nested, &["unit"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("✓ unit"));
}

#[test]
fn test_explicit_config_path() {
    let repo = create_temp_repo();
    let alt = repo.path().join("ci.toml");
    std::fs::write(
        &alt,
        r#"
[[check]]
name = "smoke"
commands = [["true"]]
"#,
    )
    .unwrap();

    let output = run_preflight(repo.path(), &["--config", alt.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("✓ smoke"));
}

#[test]
fn test_invalid_config_exits_before_running() {
    let repo = create_temp_repo();
    write_config(
        repo.path(),
        r#"
[[check]]
name = "lint"
commands = [["touch", "ran"]]

[[check]]
name = "lint"
commands = [["true"]]
"#,
    );

    let output = run_preflight(repo.path(), &[]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("check 'lint' is defined more than once"));
    assert!(!repo.path().join("ran").exists());
}

#[test]
fn test_malformed_toml_reports_path() {
    let repo = create_temp_repo();
    write_config(repo.path(), "[[check]\nname = ");

    let output = run_preflight(repo.path(), &[]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("failed to parse"));
    assert!(stderr(&output).contains("preflight.toml"));
}

#[test]
#[serial]
fn test_settings_timeout_applies() {
    let repo = create_temp_repo();
    write_config(
        repo.path(),
        r#"
[settings]
timeout_secs = 1

[[check]]
name = "slow"
commands = [["sleep", "10"]]
"#,
    );

    let output = run_preflight(repo.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("killed after 1s timeout"));
}
