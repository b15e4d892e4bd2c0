//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// apitypes - TypeScript interface declarations for HTTP API registries.
///
/// Reads an endpoint registry document and writes a single `.d.ts` file
/// declaring one documented method per endpoint.
#[derive(Parser, Debug)]
#[command(name = "apitypes")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format for the run summary (json, text, pretty)
    #[arg(long = "format", global = true, default_value = "pretty")]
    pub format: String,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the interface declaration file.
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Discover src/**/apiList.json and write mippApiListTypes/apiList.d.ts
    /// apitypes generate
    ///
    /// # Explicit source and output file
    /// apitypes generate -o src/typings/Api/IApi.d.ts src/lib/api/apiList.json
    ///
    /// # Fail if the committed file is stale
    /// apitypes generate --check -o src/typings/Api/IApi.d.ts
    /// ```
    Generate(GenerateArgs),

    /// Generate shell completions.
    Completions {
        /// Target shell for completion generation
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments of the `generate` subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Registry document (default: first `src/**/apiList.json`)
    pub source: Option<PathBuf>,

    /// Output file (`*.ts`) or directory (receives `index.d.ts`)
    #[arg(short = 'o', long = "outdir")]
    pub outdir: Option<PathBuf>,

    /// Name of the generated interface
    #[arg(long = "interface")]
    pub interface_name: Option<String>,

    /// Namespace qualifying `IApiOpts` and `IApiSuccess` (e.g. `IMiAPI`)
    #[arg(long)]
    pub namespace: Option<String>,

    /// Text after `@Description` in the file header
    #[arg(long)]
    pub header: Option<String>,

    /// Configuration file (default: `apitypes.toml` in the base directory)
    #[arg(long, env = "APITYPES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory relative paths are resolved against (default: current directory)
    #[arg(long = "base-dir")]
    pub base_dir: Option<PathBuf>,

    /// Print the declaration to stdout instead of writing it
    #[arg(long, conflicts_with = "check")]
    pub stdout: bool,

    /// Compare with the existing output file and fail if it differs
    #[arg(long)]
    pub check: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_generate_defaults() {
        let cli = Cli::parse_from(["apitypes", "generate"]);
        let Commands::Generate(args) = cli.command else {
            panic!("Expected Generate command");
        };
        assert!(args.source.is_none());
        assert!(args.outdir.is_none());
        assert!(!args.stdout);
        assert!(!args.check);
        assert_eq!(cli.format, "pretty");
    }

    #[test]
    fn test_cli_parsing_generate_full() {
        let cli = Cli::parse_from([
            "apitypes",
            "generate",
            "-o",
            "src/typings/Api/IApi.d.ts",
            "--interface",
            "IRoutes",
            "--namespace",
            "IMiAPI",
            "--header",
            "Routes",
            "--base-dir",
            "/project",
            "src/lib/api/apiList.json",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("Expected Generate command");
        };
        assert_eq!(args.source, Some(PathBuf::from("src/lib/api/apiList.json")));
        assert_eq!(args.outdir, Some(PathBuf::from("src/typings/Api/IApi.d.ts")));
        assert_eq!(args.interface_name.as_deref(), Some("IRoutes"));
        assert_eq!(args.namespace.as_deref(), Some("IMiAPI"));
        assert_eq!(args.header.as_deref(), Some("Routes"));
        assert_eq!(args.base_dir, Some(PathBuf::from("/project")));
    }

    #[test]
    fn test_cli_stdout_conflicts_with_check() {
        let result = Cli::try_parse_from(["apitypes", "generate", "--stdout", "--check"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_global_flags() {
        let cli = Cli::parse_from(["apitypes", "generate", "--format", "json", "-v"]);
        assert!(cli.verbose);
        assert_eq!(cli.format, "json");
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::parse_from(["apitypes", "completions", "bash"]);
        assert!(matches!(
            cli.command,
            Commands::Completions { shell: Shell::Bash }
        ));
    }

    #[test]
    fn test_cli_debug_assert() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
