//! Error types for apitypes.
//!
//! Every failure in a generation run is fatal: the run either produces a
//! complete file or stops with one of these errors and writes nothing.
//!
//! # Examples
//!
//! ```
//! use apitypes_core::{Error, Result};
//!
//! fn check_source(path: &str) -> Result<()> {
//!     if path.is_empty() {
//!         return Err(Error::SourceNotFound {
//!             path: path.to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = check_source("").unwrap_err();
//! assert!(err.is_source_not_found());
//! ```

use thiserror::Error;

/// Main error type for apitypes.
///
/// All library crates in the workspace return this type.
#[derive(Error, Debug)]
pub enum Error {
    /// The endpoint registry source could not be located.
    #[error("Registry source not found: {path}")]
    SourceNotFound {
        /// Path that was looked up (or the search root when discovering)
        path: String,
    },

    /// The registry document is not valid JSON or has the wrong shape.
    ///
    /// Raised for a missing `default` export, a non-object registry, or an
    /// endpoint descriptor whose fields have unexpected types.
    #[error("Malformed registry: {message}")]
    MalformedRegistry {
        /// Description of what was wrong
        message: String,
        /// Underlying serde error
        #[source]
        source: Option<serde_json::Error>,
    },

    /// The output file or one of its parent directories could not be written.
    #[error("Failed to write {path}")]
    WriteFailed {
        /// Destination path
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    ///
    /// Raised when a configuration file cannot be read or parsed, or holds
    /// values that fail validation.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Invalid argument error.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Validation error for domain types such as `InterfaceName`.
    #[error("Validation error in {field}: {reason}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Detailed reason for the validation failure
        reason: String,
    },

    /// Template registration or rendering failed.
    #[error("Template error: {message}")]
    TemplateError {
        /// Description of the template failure
        message: String,
        /// Optional underlying error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Returns `true` if the registry source could not be found.
    ///
    /// # Examples
    ///
    /// ```
    /// use apitypes_core::Error;
    ///
    /// let err = Error::SourceNotFound {
    ///     path: "src/api/apiList.json".to_string(),
    /// };
    /// assert!(err.is_source_not_found());
    /// ```
    #[must_use]
    pub const fn is_source_not_found(&self) -> bool {
        matches!(self, Self::SourceNotFound { .. })
    }

    /// Returns `true` if this is a malformed registry error.
    ///
    /// # Examples
    ///
    /// ```
    /// use apitypes_core::Error;
    ///
    /// let err = Error::MalformedRegistry {
    ///     message: "missing `default` export".to_string(),
    ///     source: None,
    /// };
    /// assert!(err.is_malformed_registry());
    /// ```
    #[must_use]
    pub const fn is_malformed_registry(&self) -> bool {
        matches!(self, Self::MalformedRegistry { .. })
    }

    /// Returns `true` if this is a write failure.
    #[must_use]
    pub const fn is_write_failure(&self) -> bool {
        matches!(self, Self::WriteFailed { .. })
    }

    /// Returns `true` if this is a configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use apitypes_core::Error;
    ///
    /// let err = Error::ConfigError {
    ///     message: "unknown field `colour`".to_string(),
    /// };
    /// assert!(err.is_config_error());
    /// ```
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` if this is a validation error.
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self, Self::ValidationError { .. })
    }

    /// Returns `true` if this is a template error.
    #[must_use]
    pub const fn is_template_error(&self) -> bool {
        matches!(self, Self::TemplateError { .. })
    }

    /// Returns `true` if the error was caused by bad user input rather than
    /// an environment failure.
    ///
    /// The CLI maps these to the "invalid input" exit code.
    ///
    /// # Examples
    ///
    /// ```
    /// use apitypes_core::Error;
    ///
    /// assert!(Error::InvalidArgument("bad".to_string()).is_user_error());
    /// assert!(!Error::TemplateError { message: "x".to_string(), source: None }.is_user_error());
    /// ```
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::SourceNotFound { .. }
                | Self::MalformedRegistry { .. }
                | Self::ConfigError { .. }
                | Self::InvalidArgument(_)
                | Self::ValidationError { .. }
        )
    }
}

/// Result type alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;
