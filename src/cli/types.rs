use clap::{Parser, Subcommand};
use preflight::completions::Shell;
use preflight::registry::ALL_CHECKS;
use preflight::report::OutputFormat;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "
  ┌─┐┬─┐┌─┐┌─┐┬  ┬┌─┐┬ ┬┌┬┐
  ├─┘├┬┘├┤ ├┤ │  ││ ┬├─┤ │
  ┴  ┴└─└─┘└  ┴─┘┴└─┘┴ ┴ ┴

{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}";

#[derive(Parser)]
#[command(name = "preflight")]
#[command(about = "Run project checks and summarize the outcome", long_about = None)]
#[command(version)]
#[command(help_template = HELP_TEMPLATE)]
#[command(subcommand_help_heading = "Commands")]
#[command(
    after_help = "Examples:\n  preflight              run every check\n  preflight lint         run one check\n  preflight list         show registered checks\n  preflight test --timeout 600 --output json"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Check to run, or "all" for every registered check
    #[arg(default_value = ALL_CHECKS)]
    pub check: String,

    /// Path to preflight.toml (default: discovered from the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Per-command timeout in seconds (overrides [settings].timeout_secs)
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "human")]
    pub output: OutputFormat,

    /// Log level when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List registered checks and their commands
    List {
        /// Path to preflight.toml (default: discovered from the current directory)
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,
    },

    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
