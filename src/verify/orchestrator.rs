//! Verification Orchestrator
//!
//! Drives the registry through an [`Executor`]. Checks are independent: a
//! failing check never stops the others. Within a check the command lines
//! run in declared order and the first failure ends that check.

use tracing::{debug, info};

use super::config::VerifyConfig;
use super::executor::Executor;
use super::outcome::{classify, classify_spawn_error, Outcome};
use super::summary::Summary;
use crate::registry::{CheckName, CheckRegistry, CommandSpec};
use crate::utils::plural;

/// Runs requested checks against a registry.
pub struct Orchestrator<'a, E: Executor + ?Sized> {
    registry: &'a CheckRegistry,
    executor: &'a E,
    config: VerifyConfig,
}

impl<'a, E: Executor + ?Sized> Orchestrator<'a, E> {
    pub fn new(registry: &'a CheckRegistry, executor: &'a E, config: VerifyConfig) -> Self {
        Self {
            registry,
            executor,
            config,
        }
    }

    /// Run `requested` (a check name or `all`) and collect the summary.
    ///
    /// An unknown name yields a single `ValidationError` entry and runs
    /// nothing. Otherwise every resolved check is attempted exactly once,
    /// in registry order.
    pub fn run(&self, requested: &str) -> Summary {
        let mut summary = Summary::default();

        let names = match self.registry.resolve(requested) {
            Ok(names) => names,
            Err(err) => {
                info!(requested, "rejected check request");
                summary.push(
                    None,
                    Outcome::ValidationError {
                        message: err.to_string(),
                    },
                );
                return summary;
            }
        };

        for name in names {
            // resolve() only returns registered names
            let Some(spec) = self.registry.commands(&name) else {
                continue;
            };
            let outcome = self.run_check(&name, spec);
            summary.push(Some(name), outcome);
        }

        summary
    }

    fn run_check(&self, name: &CheckName, spec: &CommandSpec) -> Outcome {
        info!(check = %name, commands = spec.len(), "running check");

        for line in spec.lines() {
            let command = line.display();
            debug!(check = %name, command = %command, "executing");

            let result = match self.executor.execute(line) {
                Ok(result) => result,
                Err(err) => {
                    info!(check = %name, command = %command, error = %err, "command could not be run");
                    return classify_spawn_error(&command, &err);
                }
            };

            let outcome = classify(&result, self.config.excerpt_bytes);
            match outcome {
                Outcome::Success { .. } => continue,
                Outcome::CheckFailure { .. } => {
                    info!(check = %name, command = %command, exit_code = ?result.exit_code(), "check failed");
                    return outcome;
                }
                // classify() only produces the two cases above
                Outcome::ExecutionError { .. } | Outcome::ValidationError { .. } => return outcome,
            }
        }

        Outcome::Success {
            message: Some(format!("{} passed", plural(spec.len(), "command"))),
        }
    }
}
