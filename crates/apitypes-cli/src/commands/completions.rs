//! Shell completion generation command.
//!
//! Generates shell completion scripts for bash, zsh, fish, and `PowerShell`.

use anyhow::Result;
use apitypes_core::cli::ExitCode;
use clap::Command;
use clap_complete::{Shell, generate};
use std::io::{self, Write};
use tracing::info;

/// Writes the completion script for `shell` to `out`.
pub fn write_completions(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, out);
}

/// Runs the completions command, printing the script to stdout.
///
/// # Errors
///
/// Returns an error if stdout cannot be flushed.
pub fn run(shell: Shell, cmd: &mut Command) -> Result<ExitCode> {
    info!("Generating {shell} completions");
    let mut stdout = io::stdout().lock();
    write_completions(shell, cmd, &mut stdout);
    stdout.flush()?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::CommandFactory;

    #[test]
    fn test_bash_completions_mention_subcommands() {
        let mut cmd = Cli::command();
        let mut out = Vec::new();
        write_completions(Shell::Bash, &mut cmd, &mut out);

        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("apitypes"));
        assert!(script.contains("generate"));
    }

    #[test]
    fn test_all_shells() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell, Shell::Elvish] {
            let mut cmd = Cli::command();
            let mut out = Vec::new();
            write_completions(shell, &mut cmd, &mut out);
            assert!(!out.is_empty(), "{shell} produced no output");
        }
    }
}
