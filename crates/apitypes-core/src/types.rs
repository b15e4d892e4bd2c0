//! Strong domain types for apitypes.
//!
//! Identifiers that end up in generated TypeScript are validated once at
//! construction so the generator can splice them into output unchecked.
//!
//! # Examples
//!
//! ```
//! use apitypes_core::{AmbientNamespace, InterfaceName};
//!
//! let name = InterfaceName::new("IApis").unwrap();
//! assert_eq!(name.as_str(), "IApis");
//!
//! let ns = AmbientNamespace::new("IMiAPI").unwrap();
//! assert_eq!(ns.qualify("IApiOpts"), "IMiAPI.IApiOpts");
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Returns `true` if `s` is a plain TypeScript identifier.
///
/// Only ASCII identifiers are accepted: a letter, `_` or `$` followed by
/// letters, digits, `_` or `$`.
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Name of the generated interface declaration.
///
/// Defaults to `IApis`.
///
/// # Examples
///
/// ```
/// use apitypes_core::InterfaceName;
///
/// assert!(InterfaceName::new("IApis").is_ok());
/// assert!(InterfaceName::new("1Apis").is_err());
/// assert!(InterfaceName::new("I Apis").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InterfaceName(String);

impl InterfaceName {
    /// Creates a validated interface name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] if `name` is not a valid
    /// TypeScript identifier.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::ValidationError {
                field: "interface_name".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if !is_identifier(&name) {
            return Err(Error::ValidationError {
                field: "interface_name".to_string(),
                reason: format!("'{name}' is not a valid TypeScript identifier"),
            });
        }
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for InterfaceName {
    fn default() -> Self {
        Self("IApis".to_string())
    }
}

impl fmt::Display for InterfaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for InterfaceName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for InterfaceName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<InterfaceName> for String {
    fn from(name: InterfaceName) -> Self {
        name.0
    }
}

/// Namespace that qualifies the ambient `IApiOpts` / `IApiSuccess` types.
///
/// A dotted path of identifiers, e.g. `IMiAPI` or `Api.Types`.
///
/// # Examples
///
/// ```
/// use apitypes_core::AmbientNamespace;
///
/// let ns: AmbientNamespace = "Api.Types".parse().unwrap();
/// assert_eq!(ns.qualify("IApiSuccess"), "Api.Types.IApiSuccess");
///
/// assert!(AmbientNamespace::new("Api..Types").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AmbientNamespace(String);

impl AmbientNamespace {
    /// Creates a validated namespace path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] if any dot-separated segment is not
    /// a valid TypeScript identifier.
    pub fn new(namespace: impl Into<String>) -> Result<Self> {
        let namespace = namespace.into();
        if namespace.is_empty() || !namespace.split('.').all(is_identifier) {
            return Err(Error::ValidationError {
                field: "ambient_namespace".to_string(),
                reason: format!("'{namespace}' is not a dotted TypeScript identifier path"),
            });
        }
        Ok(Self(namespace))
    }

    /// Returns the namespace as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Prefixes `type_name` with this namespace.
    #[must_use]
    pub fn qualify(&self, type_name: &str) -> String {
        format!("{}.{type_name}", self.0)
    }
}

impl fmt::Display for AmbientNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AmbientNamespace {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for AmbientNamespace {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<AmbientNamespace> for String {
    fn from(ns: AmbientNamespace) -> Self {
        ns.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interface_name_default() {
        assert_eq!(InterfaceName::default().as_str(), "IApis");
    }

    #[test]
    fn test_interface_name_accepts_identifiers() {
        for name in ["IApis", "_private", "$api", "Api2"] {
            assert!(InterfaceName::new(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn test_interface_name_rejects_invalid() {
        for name in ["", "2Apis", "I-Apis", "I.Apis", "接口"] {
            let err = InterfaceName::new(name).unwrap_err();
            assert!(err.is_validation_error(), "{name} should be rejected");
        }
    }

    #[test]
    fn test_interface_name_deserialize_validates() {
        let ok: InterfaceName = serde_json::from_str("\"IRoutes\"").unwrap();
        assert_eq!(ok.as_str(), "IRoutes");

        let err = serde_json::from_str::<InterfaceName>("\"not valid\"");
        assert!(err.is_err());
    }

    #[test]
    fn test_namespace_qualify() {
        let ns = AmbientNamespace::new("IMiAPI").unwrap();
        assert_eq!(ns.qualify("IApiOpts"), "IMiAPI.IApiOpts");
    }

    #[test]
    fn test_namespace_rejects_empty_segments() {
        assert!(AmbientNamespace::new("").is_err());
        assert!(AmbientNamespace::new(".Api").is_err());
        assert!(AmbientNamespace::new("Api.").is_err());
        assert!(AmbientNamespace::new("Api.Types").is_ok());
    }

    #[test]
    fn test_types_are_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<InterfaceName>();
        assert_sync::<InterfaceName>();
        assert_send::<AmbientNamespace>();
        assert_sync::<AmbientNamespace>();
    }
}
