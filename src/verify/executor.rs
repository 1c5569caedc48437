//! Command Executor
//!
//! Runs one [`CommandLine`] as a child process and captures its output.
//! Commands are spawned directly from their argument vector; no shell is
//! involved, so arguments never need quoting and cannot be reinterpreted.

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::debug;
use wait_timeout::ChildExt;

use super::config::DEFAULT_COMMAND_TIMEOUT;
use super::result::ExecutionResult;
use crate::registry::CommandLine;

/// How long to wait for a child's pipes to close once it has exited
const OUTPUT_COLLECTION_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximum captured size per output stream (10MB)
const MAX_OUTPUT_SIZE: u64 = 10 * 1024 * 1024;

/// A command that never produced an [`ExecutionResult`].
///
/// Distinct from a command that ran and exited non-zero: the executable
/// could not be started, its output could not be collected, or the OS
/// failed us while we waited on it.
#[derive(Debug, Error)]
pub enum SpawnError {
    #[error("executable '{program}' not found")]
    NotFound { program: String },

    #[error("permission denied executing '{program}'")]
    PermissionDenied { program: String },

    /// The process exited but something (usually a background grandchild)
    /// kept its output pipes open past the collection timeout.
    #[error("output of '{command}' not collected: pipes still open {}s after exit", waited.as_secs())]
    OutputCollection { command: String, waited: Duration },

    #[error("failed to run '{command}': {source}")]
    Io {
        command: String,
        #[source]
        source: io::Error,
    },
}

impl SpawnError {
    fn from_spawn(line: &CommandLine, working_dir: Option<&Path>, err: io::Error) -> Self {
        match err.kind() {
            // A missing working directory also surfaces as NotFound; only
            // blame the executable when it really is absent.
            io::ErrorKind::NotFound if working_dir.is_none() || which::which(line.program()).is_err() => {
                SpawnError::NotFound {
                    program: line.program().to_string(),
                }
            }
            io::ErrorKind::PermissionDenied => SpawnError::PermissionDenied {
                program: line.program().to_string(),
            },
            _ => SpawnError::Io {
                command: line.display(),
                source: err,
            },
        }
    }
}

/// Runs command lines. The orchestrator only talks to this trait.
pub trait Executor {
    /// Run one command line to completion.
    fn execute(&self, line: &CommandLine) -> Result<ExecutionResult, SpawnError>;
}

/// [`Executor`] backed by real OS processes.
///
/// Inherits the current working directory unless one is set explicitly.
/// Each command is bounded by `timeout`; a command that exceeds it is
/// killed and reported with `timed_out` set.
#[derive(Debug, Clone)]
pub struct ProcessExecutor {
    timeout: Duration,
    collection_timeout: Duration,
    working_dir: Option<PathBuf>,
}

impl Default for ProcessExecutor {
    fn default() -> Self {
        Self::new(DEFAULT_COMMAND_TIMEOUT)
    }
}

impl ProcessExecutor {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            collection_timeout: OUTPUT_COLLECTION_TIMEOUT,
            working_dir: None,
        }
    }

    /// Run commands in `dir` instead of the current directory.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Bound the wait for output pipes to close after the process exits.
    pub fn with_collection_timeout(mut self, timeout: Duration) -> Self {
        self.collection_timeout = timeout;
        self
    }
}

impl Executor for ProcessExecutor {
    fn execute(&self, line: &CommandLine) -> Result<ExecutionResult, SpawnError> {
        let command = line.display();
        let start = Instant::now();

        let mut child = spawn_command(line, self.working_dir.as_deref())?;
        debug!(command = %command, pid = child.id(), "spawned");

        // Pipes are drained while we wait; a child writing more than the
        // pipe buffer would otherwise block forever.
        let stdout_rx = drain_on_thread(child.stdout.take());
        let stderr_rx = drain_on_thread(child.stderr.take());

        let wait_result = match child.wait_timeout(self.timeout) {
            Ok(status) => status,
            Err(source) => {
                kill_child_process(&mut child);
                return Err(SpawnError::Io { command, source });
            }
        };
        let duration = start.elapsed();

        // Killing closes the child's end of the pipes, so the readers finish.
        if wait_result.is_none() {
            kill_child_process(&mut child);
        }

        let deadline = Instant::now() + self.collection_timeout;
        let stdout = self.collect(&command, &stdout_rx, deadline)?;
        let stderr = self.collect(&command, &stderr_rx, deadline)?;

        match wait_result {
            Some(status) => {
                debug!(command = %command, exit_code = ?status.code(), elapsed_ms = duration.as_millis() as u64, "exited");
                Ok(ExecutionResult::new(
                    command,
                    stdout,
                    stderr,
                    status.code(),
                    duration,
                    false,
                ))
            }
            None => {
                debug!(command = %command, timeout_secs = self.timeout.as_secs(), "killed after timeout");
                let stderr = format!(
                    "{}\n[process killed after {}s timeout]",
                    stderr.trim_end(),
                    self.timeout.as_secs()
                );
                Ok(ExecutionResult::new(
                    command,
                    stdout,
                    stderr.trim_start().to_string(),
                    None,
                    duration,
                    true,
                ))
            }
        }
    }
}

impl ProcessExecutor {
    /// Receive one drained stream, turning read faults and stuck pipes into errors
    fn collect(
        &self,
        command: &str,
        rx: &mpsc::Receiver<io::Result<String>>,
        deadline: Instant,
    ) -> Result<String, SpawnError> {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match rx.recv_timeout(remaining) {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(source)) => Err(SpawnError::Io {
                command: command.to_string(),
                source,
            }),
            Err(_) => {
                debug!(command, waited_ms = self.collection_timeout.as_millis() as u64, "output pipes still open");
                Err(SpawnError::OutputCollection {
                    command: command.to_string(),
                    waited: self.collection_timeout,
                })
            }
        }
    }
}

/// Spawn a command line as a child process with piped output
fn spawn_command(line: &CommandLine, working_dir: Option<&Path>) -> Result<Child, SpawnError> {
    let mut cmd = Command::new(line.program());
    cmd.args(line.args())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    if let Some(dir) = working_dir {
        cmd.current_dir(dir);
    }

    cmd.spawn()
        .map_err(|err| SpawnError::from_spawn(line, working_dir, err))
}

/// Read a pipe to completion on a helper thread
fn drain_on_thread<R: Read + Send + 'static>(stream: Option<R>) -> mpsc::Receiver<io::Result<String>> {
    let (tx, rx) = mpsc::channel();
    match stream {
        Some(stream) => {
            thread::spawn(move || {
                let _ = tx.send(read_stream_to_string(stream));
            });
        }
        None => {
            let _ = tx.send(Ok(String::new()));
        }
    }
    rx
}

/// Read a stream to the end, keeping at most MAX_OUTPUT_SIZE bytes.
///
/// Anything past the cap is still read (so the writer never sees a broken
/// pipe) but discarded, and a truncation marker is appended. Invalid UTF-8
/// is replaced rather than rejected.
fn read_stream_to_string<R: Read>(mut stream: R) -> io::Result<String> {
    let mut buf = Vec::new();
    stream.by_ref().take(MAX_OUTPUT_SIZE).read_to_end(&mut buf)?;

    let discarded = io::copy(&mut stream, &mut io::sink())?;
    if discarded > 0 {
        buf.extend_from_slice(b"\n[output truncated at 10MB]");
    }

    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Terminate a child process and reap it
fn kill_child_process(child: &mut Child) {
    // The process may already have exited
    let _ = child.kill();
    let _ = child.wait();
}
