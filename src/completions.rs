//! Shell completion scripts for the `completions` subcommand

use std::io::Write;

use clap::{Command, ValueEnum};
use clap_complete::generate;

/// Shells a completion script can be generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
}

impl From<Shell> for clap_complete::Shell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
        }
    }
}

/// Write the completion script for `cmd` to `out`.
///
/// ```no_run
/// use clap::Command;
/// use preflight::completions::{generate_completions, Shell};
///
/// let mut cmd = Command::new("preflight");
/// generate_completions(&mut cmd, Shell::Bash, &mut std::io::stdout());
/// ```
pub fn generate_completions(cmd: &mut Command, shell: Shell, out: &mut dyn Write) {
    let bin_name = cmd.get_name().to_string();
    generate(clap_complete::Shell::from(shell), cmd, bin_name, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script_for(shell: Shell) -> String {
        let mut cmd = Command::new("preflight").subcommand(Command::new("list"));
        let mut buf = Vec::new();
        generate_completions(&mut cmd, shell, &mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_shell_value_names() {
        assert_eq!(Shell::from_str("bash", true).unwrap(), Shell::Bash);
        assert_eq!(Shell::from_str("ZSH", true).unwrap(), Shell::Zsh);
        assert!(Shell::from_str("powershell", true).is_err());
    }

    #[test]
    fn test_scripts_name_the_binary() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
            assert!(script_for(shell).contains("preflight"), "{shell:?}");
        }
    }

    #[test]
    fn test_bash_script_offers_subcommands() {
        assert!(script_for(Shell::Bash).contains("list"));
    }
}
