//! Raw result of running one command

use std::time::Duration;

/// Captured output and exit status of one command invocation.
///
/// Created fresh per command run and never modified afterwards; the only
/// consumer is the outcome classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    command: String,
    stdout: String,
    stderr: String,
    exit_code: Option<i32>,
    duration: Duration,
    timed_out: bool,
}

impl ExecutionResult {
    /// Create a new execution result
    pub fn new(
        command: String,
        stdout: String,
        stderr: String,
        exit_code: Option<i32>,
        duration: Duration,
        timed_out: bool,
    ) -> Self {
        Self {
            command,
            stdout,
            stderr,
            exit_code,
            duration,
            timed_out,
        }
    }

    /// Display form of the command that ran
    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    /// Exit code, `None` when the process was terminated by a signal
    /// (including the kill issued on timeout)
    pub fn exit_code(&self) -> Option<i32> {
        self.exit_code
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Whether the command was terminated due to timeout
    pub fn timed_out(&self) -> bool {
        self.timed_out
    }

    /// Whether the command exited with status 0
    pub fn succeeded(&self) -> bool {
        !self.timed_out && self.exit_code == Some(0)
    }
}
