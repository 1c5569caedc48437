//! Test helper functions for integration tests

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Creates a temporary directory that looks like a repository root
///
/// The `.git` marker stops config discovery from escaping into the
/// host's directories. Keep the TempDir in scope for the test's lifetime.
pub fn create_temp_repo() -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp directory");
    std::fs::create_dir_all(temp.path().join(".git")).expect("Failed to create .git");
    temp
}

/// Writes `preflight.toml` into `dir`
pub fn write_config(dir: &Path, content: &str) {
    std::fs::write(dir.join("preflight.toml"), content).expect("Failed to write preflight.toml");
}

/// Runs the preflight binary in `dir` with colors and logging disabled
pub fn run_preflight(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_preflight"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run preflight binary")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Config with a failing lint check and a passing test check
pub const LINT_FAILS_TEST_PASSES: &str = r#"
[[check]]
name = "lint"
commands = [["sh", "-c", "echo 'E501 line too long' >&2; exit 1"]]

[[check]]
name = "test"
commands = [["sh", "-c", "echo '3 passed'"]]
"#;
