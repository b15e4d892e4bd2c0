//! Generate command implementation.
//!
//! This command:
//! 1. Layers configuration (defaults, `apitypes.toml`, CLI flags)
//! 2. Locates and loads the registry document
//! 3. Assembles the interface in memory
//! 4. Writes it, prints it, or checks it against the file on disk

use crate::cli::GenerateArgs;
use anyhow::{Context, Result};
use apitypes_codegen::TypingsGenerator;
use apitypes_codegen::registry::{discover_source, load_registry};
use apitypes_codegen::sink::{is_up_to_date, resolve_output_path, write_output};
use apitypes_core::cli::{ExitCode, OutputFormat};
use apitypes_core::{AmbientNamespace, GeneratorConfig, GeneratorConfigBuilder, InterfaceName};
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Summary printed after a generate run.
#[derive(Debug, Serialize)]
pub struct GenerationReport {
    /// Interface name
    pub interface: String,
    /// Number of methods emitted
    pub endpoint_count: usize,
    /// Registry document that was read
    pub source: String,
    /// Resolved output file
    pub output_path: String,
    /// Size of the generated text in bytes
    pub bytes: usize,
    /// What happened to the output: `written` or `checked`
    pub action: &'static str,
    /// For `--check`: whether the file on disk matched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub up_to_date: Option<bool>,
}

/// Builds the effective configuration for this run.
///
/// An explicit `--config` file must exist; otherwise `apitypes.toml` in the
/// base directory is used when present. CLI flags win over both.
fn resolve_config(args: &GenerateArgs, base_dir: &Path) -> Result<GeneratorConfig> {
    let file_config = match &args.config {
        Some(path) => GeneratorConfig::load(base_dir.join(path))
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GeneratorConfig::discover(base_dir).context("failed to load apitypes.toml")?,
    };

    let mut builder = GeneratorConfigBuilder::from_config(file_config);
    if let Some(name) = &args.interface_name {
        builder = builder.interface_name(InterfaceName::new(name.as_str())?);
    }
    if let Some(namespace) = &args.namespace {
        builder = builder.ambient_namespace(Some(AmbientNamespace::new(namespace.as_str())?));
    }
    if let Some(header) = &args.header {
        builder = builder.header_description(header.as_str());
    }
    Ok(builder.build()?)
}

/// Runs the generate command.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration is invalid
/// - The registry source cannot be found or parsed
/// - Assembly fails
/// - The output file cannot be written or read (for `--check`)
pub fn run(args: GenerateArgs, output_format: OutputFormat) -> Result<ExitCode> {
    let base_dir = match &args.base_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("failed to determine current directory")?,
    };
    info!("Base directory: {}", base_dir.display());

    let config = resolve_config(&args, &base_dir)?;

    let source: PathBuf = match &args.source {
        Some(path) => base_dir.join(path),
        None => discover_source(&base_dir)?,
    };
    let registry = load_registry(&source)
        .with_context(|| format!("failed to load registry {}", source.display()))?;
    if registry.is_empty() {
        warn!("Registry {} has no endpoints", source.display());
    }

    let generator = TypingsGenerator::new(config).context("failed to create generator")?;
    let text = generator
        .generate(&registry)
        .context("failed to assemble interface")?;

    let output_path = resolve_output_path(
        &base_dir,
        args.outdir.as_deref(),
        &source,
        &generator.config().default_output_dir,
    );

    if args.stdout {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        return Ok(ExitCode::SUCCESS);
    }

    let (action, up_to_date) = if args.check {
        let fresh = is_up_to_date(&output_path, &text)?;
        if !fresh {
            warn!("{} is out of date", output_path.display());
        }
        ("checked", Some(fresh))
    } else {
        write_output(&output_path, &text)?;
        ("written", None)
    };

    let report = GenerationReport {
        interface: generator.config().interface_name.to_string(),
        endpoint_count: registry.len(),
        source: source.display().to_string(),
        output_path: output_path.display().to_string(),
        bytes: text.len(),
        action,
        up_to_date,
    };

    let formatted = crate::formatters::format_output(&report, output_format)?;
    println!("{formatted}");

    if up_to_date == Some(false) {
        return Ok(ExitCode::ERROR);
    }

    info!(
        "Generated {} with {} methods",
        report.interface, report.endpoint_count
    );
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn project() -> TempDir {
        let temp = TempDir::new().unwrap();
        let api_dir = temp.path().join("src/api");
        fs::create_dir_all(&api_dir).unwrap();
        fs::write(
            api_dir.join("apiList.json"),
            r#"{"default": {"getUser": {"apiName": "getUser", "res": "IUser"}}}"#,
        )
        .unwrap();
        temp
    }

    fn args_for(temp: &TempDir) -> GenerateArgs {
        GenerateArgs {
            base_dir: Some(temp.path().to_path_buf()),
            ..GenerateArgs::default()
        }
    }

    #[test]
    fn test_run_writes_default_output() {
        let temp = project();
        let code = run(args_for(&temp), OutputFormat::Json).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let written = fs::read_to_string(temp.path().join("mippApiListTypes/apiList.d.ts")).unwrap();
        assert!(written.contains("getUser(\n    opts: IApiOpts<null>,"));
    }

    #[test]
    fn test_run_check_detects_stale_output() {
        let temp = project();
        let mut args = args_for(&temp);
        args.outdir = Some(PathBuf::from("typings/IApi.d.ts"));
        args.check = true;

        assert_eq!(run(args.clone(), OutputFormat::Text).unwrap(), ExitCode::ERROR);
        assert!(!temp.path().join("typings/IApi.d.ts").exists());

        args.check = false;
        assert_eq!(run(args.clone(), OutputFormat::Text).unwrap(), ExitCode::SUCCESS);

        args.check = true;
        assert_eq!(run(args, OutputFormat::Text).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_cli_flags_override_config_file() {
        let temp = project();
        fs::write(
            temp.path().join("apitypes.toml"),
            "[generator]\ninterface_name = \"IFromFile\"\nambient_namespace = \"IMiAPI\"\n",
        )
        .unwrap();

        let mut args = args_for(&temp);
        args.interface_name = Some("IFromFlag".to_string());
        let config = resolve_config(&args, temp.path()).unwrap();

        assert_eq!(config.interface_name.as_str(), "IFromFlag");
        assert_eq!(config.ambient_namespace.unwrap().as_str(), "IMiAPI");
    }

    #[test]
    fn test_invalid_interface_flag() {
        let temp = project();
        let mut args = args_for(&temp);
        args.interface_name = Some("not valid".to_string());

        let err = run(args, OutputFormat::Text).unwrap_err();
        let core = err.downcast_ref::<apitypes_core::Error>().unwrap();
        assert!(core.is_validation_error());
    }

    #[test]
    fn test_missing_source() {
        let temp = TempDir::new().unwrap();
        let err = run(args_for(&temp), OutputFormat::Text).unwrap_err();
        let core = err.downcast_ref::<apitypes_core::Error>().unwrap();
        assert!(core.is_source_not_found());
    }

    #[test]
    fn test_malformed_registry_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let api_dir = temp.path().join("src");
        fs::create_dir_all(&api_dir).unwrap();
        fs::write(api_dir.join("apiList.json"), r#"{"default": 1}"#).unwrap();

        let err = run(args_for(&temp), OutputFormat::Text).unwrap_err();
        assert!(
            err.downcast_ref::<apitypes_core::Error>()
                .unwrap()
                .is_malformed_registry()
        );
        assert!(!temp.path().join("mippApiListTypes").exists());
    }
}
