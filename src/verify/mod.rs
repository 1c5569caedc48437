//! Check execution: executor, classifier, orchestrator and the summary they produce.
//!
//! # Trust Model
//!
//! `preflight.toml` follows the same trust model as a Makefile or CI
//! configuration: it is a version-controlled project artifact and the
//! commands it declares are run as-is with the user's privileges.
//!
//! # Controls
//!
//! - **No shell**: each command line is an argument vector handed directly
//!   to the OS, so there is no quoting or injection surface.
//! - **Command timeout**: every command is bounded (default 5 minutes); a
//!   command that exceeds it is killed and the check fails.
//! - **Bounded output**: captured output is capped per stream, and the
//!   excerpt kept for reporting is capped separately.

mod config;
mod executor;
mod orchestrator;
mod outcome;
mod result;
mod summary;


pub use config::{VerifyConfig, DEFAULT_COMMAND_TIMEOUT, DEFAULT_EXCERPT_BYTES};
pub use executor::{Executor, ProcessExecutor, SpawnError};
pub use orchestrator::Orchestrator;
pub use outcome::{classify, classify_spawn_error, Outcome};
pub use result::ExecutionResult;
pub use summary::{Summary, SummaryEntry};
