use anyhow::Result;
use clap::CommandFactory;
use preflight::commands::{check, list};
use preflight::completions::generate_completions;
use preflight::report::EXIT_SUCCESS;

use super::types::{Cli, Commands};

/// Run the parsed command line and return the process exit code
pub fn dispatch(cli: Cli) -> Result<i32> {
    match cli.command {
        None => check::execute(
            &cli.check,
            cli.config.as_deref(),
            cli.timeout,
            cli.output,
        ),
        Some(Commands::List { config }) => {
            list::execute(config.as_deref())?;
            Ok(EXIT_SUCCESS)
        }
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            generate_completions(&mut cmd, shell, &mut std::io::stdout());
            Ok(EXIT_SUCCESS)
        }
    }
}
