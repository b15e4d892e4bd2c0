//! apitypes CLI.
//!
//! Generates a TypeScript interface declaration file from an HTTP API
//! endpoint registry.
//!
//! # Examples
//!
//! ```bash
//! # Discover src/**/apiList.json and write mippApiListTypes/apiList.d.ts
//! apitypes generate
//!
//! # Write into an existing typings tree with a namespaced ambient type
//! apitypes generate --namespace IMiAPI -o src/typings/Api/IApi.d.ts
//! ```

use anyhow::Result;
use apitypes_cli::cli::{Cli, Commands};
use apitypes_cli::commands;
use apitypes_cli::exit_code_for;
use apitypes_core::cli::{ExitCode, OutputFormat};
use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_code_for(&e)
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn run(cli: Cli) -> Result<ExitCode> {
    let output_format = cli
        .format
        .parse::<OutputFormat>()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    execute_command(cli.command, output_format)
}

/// Initializes logging infrastructure.
///
/// `--verbose` forces debug level; otherwise `RUST_LOG` applies, falling
/// back to info. Logs go to stderr so stdout stays clean for `--stdout`.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Routes commands to their respective handlers and returns an exit code.
fn execute_command(command: Commands, output_format: OutputFormat) -> Result<ExitCode> {
    match command {
        Commands::Generate(args) => commands::generate::run(args, output_format),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            commands::completions::run(shell, &mut cmd)
        }
    }
}
