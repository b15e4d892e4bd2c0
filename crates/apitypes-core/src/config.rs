//! Generator configuration.
//!
//! Configuration comes from three layers, later layers winning:
//! built-in defaults, an optional `apitypes.toml` file, and CLI flags.
//!
//! ```toml
//! [generator]
//! interface_name = "IApis"
//! header_description = "主包接口定义声明"
//! ambient_namespace = "IMiAPI"
//! default_output_dir = "mippApiListTypes"
//! ```
//!
//! # Examples
//!
//! ```
//! use apitypes_core::{GeneratorConfig, InterfaceName};
//!
//! let config = GeneratorConfig::default();
//! assert_eq!(config.interface_name.as_str(), "IApis");
//!
//! let custom = GeneratorConfig::builder()
//!     .interface_name(InterfaceName::new("IRoutes").unwrap())
//!     .header_description("Route table")
//!     .build()
//!     .unwrap();
//! assert_eq!(custom.header_description, "Route table");
//! ```

use crate::{AmbientNamespace, Error, InterfaceName, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Header description emitted when none is configured.
pub const DEFAULT_HEADER_DESCRIPTION: &str = "主包接口定义声明";

/// Directory (relative to the base directory) used when no output is given.
pub const DEFAULT_OUTPUT_DIR: &str = "mippApiListTypes";

/// File name looked up in the base directory by [`GeneratorConfig::discover`].
pub const CONFIG_FILE_NAME: &str = "apitypes.toml";

/// Settings that shape the generated declaration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Name of the emitted interface.
    ///
    /// Default: `IApis`
    pub interface_name: InterfaceName,

    /// Text after `@Description` in the file header comment.
    pub header_description: String,

    /// Optional namespace qualifying `IApiOpts` and `IApiSuccess`.
    ///
    /// Default: None (unqualified names)
    pub ambient_namespace: Option<AmbientNamespace>,

    /// Output directory used when the caller gives no explicit target.
    pub default_output_dir: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            interface_name: InterfaceName::default(),
            header_description: DEFAULT_HEADER_DESCRIPTION.to_string(),
            ambient_namespace: None,
            default_output_dir: DEFAULT_OUTPUT_DIR.to_string(),
        }
    }
}

/// On-disk layout of `apitypes.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    generator: GeneratorConfig,
}

impl GeneratorConfig {
    /// Creates a new configuration builder.
    #[must_use]
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }

    /// Parses a configuration from TOML text.
    ///
    /// Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the text is not valid TOML, contains
    /// unknown keys, or holds values that fail validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use apitypes_core::GeneratorConfig;
    ///
    /// let config = GeneratorConfig::from_toml_str(
    ///     "[generator]\nambient_namespace = \"IMiAPI\"\n",
    /// ).unwrap();
    /// assert_eq!(config.ambient_namespace.unwrap().as_str(), "IMiAPI");
    /// assert_eq!(config.interface_name.as_str(), "IApis");
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(text).map_err(|e| Error::ConfigError {
            message: format!("invalid configuration: {e}"),
        })?;
        file.generator.validate()?;
        Ok(file.generator)
    }

    /// Loads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Error::ConfigError {
            message: format!("failed to read {}: {e}", path.display()),
        })?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Loads `apitypes.toml` from `base_dir` if present, else the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the file exists but is invalid.
    pub fn discover(base_dir: impl AsRef<Path>) -> Result<Self> {
        let candidate = base_dir.as_ref().join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(candidate)
        } else {
            tracing::debug!("No {CONFIG_FILE_NAME} found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks values that would corrupt the generated file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the header description would close
    /// the header comment early or the default output directory is empty.
    pub fn validate(&self) -> Result<()> {
        if self.header_description.contains("*/") {
            return Err(Error::ConfigError {
                message: "header_description must not contain '*/'".to_string(),
            });
        }
        if self.default_output_dir.trim().is_empty() {
            return Err(Error::ConfigError {
                message: "default_output_dir must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for [`GeneratorConfig`].
///
/// # Examples
///
/// ```
/// use apitypes_core::{AmbientNamespace, GeneratorConfig};
///
/// let config = GeneratorConfig::builder()
///     .ambient_namespace(Some(AmbientNamespace::new("IMiAPI").unwrap()))
///     .build()
///     .unwrap();
/// assert!(config.ambient_namespace.is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfigBuilder {
    config: GeneratorConfig,
}

impl GeneratorConfigBuilder {
    /// Creates a builder seeded with the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing configuration, e.g. one loaded from disk.
    #[must_use]
    pub const fn from_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Sets the interface name.
    #[must_use]
    pub fn interface_name(mut self, name: InterfaceName) -> Self {
        self.config.interface_name = name;
        self
    }

    /// Sets the header description.
    #[must_use]
    pub fn header_description(mut self, description: impl Into<String>) -> Self {
        self.config.header_description = description.into();
        self
    }

    /// Sets or clears the ambient namespace.
    #[must_use]
    pub fn ambient_namespace(mut self, namespace: Option<AmbientNamespace>) -> Self {
        self.config.ambient_namespace = namespace;
        self
    }

    /// Sets the default output directory.
    #[must_use]
    pub fn default_output_dir(mut self, dir: impl Into<String>) -> Self {
        self.config.default_output_dir = dir.into();
        self
    }

    /// Validates and returns the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if validation fails.
    pub fn build(self) -> Result<GeneratorConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.interface_name.as_str(), "IApis");
        assert_eq!(config.header_description, DEFAULT_HEADER_DESCRIPTION);
        assert_eq!(config.default_output_dir, DEFAULT_OUTPUT_DIR);
        assert!(config.ambient_namespace.is_none());
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = GeneratorConfig::from_toml_str("").unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_full_toml() {
        let text = r#"
[generator]
interface_name = "IRoutes"
header_description = "Routes"
ambient_namespace = "Api.Types"
default_output_dir = "typings"
"#;
        let config = GeneratorConfig::from_toml_str(text).unwrap();
        assert_eq!(config.interface_name.as_str(), "IRoutes");
        assert_eq!(config.header_description, "Routes");
        assert_eq!(config.ambient_namespace.unwrap().as_str(), "Api.Types");
        assert_eq!(config.default_output_dir, "typings");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = GeneratorConfig::from_toml_str("[generator]\ncolour = \"red\"\n").unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_invalid_interface_name_rejected() {
        let err =
            GeneratorConfig::from_toml_str("[generator]\ninterface_name = \"my apis\"\n")
                .unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_header_cannot_close_comment() {
        let err = GeneratorConfig::builder()
            .header_description("oops */")
            .build()
            .unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_discover_without_file() {
        let temp = TempDir::new().unwrap();
        let config = GeneratorConfig::discover(temp.path()).unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_discover_with_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[generator]\ninterface_name = \"IApi\"\n",
        )
        .unwrap();

        let config = GeneratorConfig::discover(temp.path()).unwrap();
        assert_eq!(config.interface_name.as_str(), "IApi");
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = GeneratorConfig::load(temp.path().join("nope.toml")).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_builder_from_config_overrides() {
        let base = GeneratorConfig::from_toml_str("[generator]\nheader_description = \"A\"\n")
            .unwrap();
        let config = GeneratorConfigBuilder::from_config(base)
            .interface_name(InterfaceName::new("IOther").unwrap())
            .build()
            .unwrap();
        assert_eq!(config.header_description, "A");
        assert_eq!(config.interface_name.as_str(), "IOther");
    }
}
