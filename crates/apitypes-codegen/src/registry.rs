//! Endpoint registry model and loader.
//!
//! The registry is read from a declarative JSON document shaped like an
//! evaluated module namespace:
//!
//! ```json
//! {
//!   "default": {
//!     "getUser": {
//!       "apiName": "user.get",
//!       "desc": "fetch a user",
//!       "params": { "get": [{ "param": "id", "type": "string", "required": true }] },
//!       "res": "IUser"
//!     }
//!   }
//! }
//! ```
//!
//! Key order in the document is the order of the generated methods.
//!
//! # Examples
//!
//! ```
//! use apitypes_codegen::registry::parse_registry;
//!
//! let registry = parse_registry(r#"{"default": {"b": {"apiName": "b"}, "a": {"apiName": "a"}}}"#)
//!     .unwrap();
//! let keys: Vec<_> = registry.iter().map(|e| e.key.as_str()).collect();
//! assert_eq!(keys, ["b", "a"]);
//! ```

use apitypes_core::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File name searched for by [`discover_source`].
pub const DEFAULT_SOURCE_NAME: &str = "apiList.json";

/// Directory (relative to the base directory) searched by [`discover_source`].
pub const DEFAULT_SOURCE_ROOT: &str = "src";

/// Name of the export holding the registry inside the source document.
const DEFAULT_EXPORT: &str = "default";

/// One request parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamField {
    /// Property name in the generated object type.
    #[serde(default)]
    pub param: Option<String>,

    /// TypeScript type expression. Blank means `any`.
    #[serde(default, rename = "type")]
    pub ty: Option<String>,

    /// Marks the field mandatory.
    #[serde(default)]
    pub required: Option<bool>,

    /// Legacy spelling of `required`.
    #[serde(default)]
    pub is_need: Option<bool>,
}

impl ParamField {
    /// Creates an optional field with no type.
    #[must_use]
    pub fn new(param: impl Into<String>) -> Self {
        Self {
            param: Some(param.into()),
            ..Self::default()
        }
    }

    /// Sets the type expression.
    #[must_use]
    pub fn with_type(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    /// Sets the `required` flag.
    #[must_use]
    pub const fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Sets the `isNeed` flag.
    #[must_use]
    pub const fn is_need(mut self, is_need: bool) -> Self {
        self.is_need = Some(is_need);
        self
    }

    /// Returns `true` if either `required` or `isNeed` is set.
    #[must_use]
    pub fn is_mandatory(&self) -> bool {
        self.required.unwrap_or(false) || self.is_need.unwrap_or(false)
    }
}

/// Request parameters split into body (`post`) and query (`get`) groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamSpec {
    /// Body parameters, emitted first.
    #[serde(default)]
    pub post: Option<Vec<ParamField>>,

    /// Query parameters, emitted after `post`.
    #[serde(default)]
    pub get: Option<Vec<ParamField>>,
}

/// Metadata for one endpoint.
///
/// Unknown keys in the source document (URLs, HTTP methods, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointDescriptor {
    /// Identifier echoed into the doc comment.
    #[serde(default)]
    pub api_name: Option<String>,

    /// Human-readable description.
    #[serde(default)]
    pub desc: Option<String>,

    /// Request parameters.
    #[serde(default)]
    pub params: Option<ParamSpec>,

    /// Raw response type expression.
    #[serde(default)]
    pub res: Option<String>,
}

/// A registry entry: method name plus its descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Method name in the generated interface.
    pub key: String,
    /// Endpoint metadata.
    pub descriptor: EndpointDescriptor,
}

/// Ordered, key-unique collection of endpoints.
///
/// # Examples
///
/// ```
/// use apitypes_codegen::registry::{EndpointDescriptor, Registry};
///
/// let mut registry = Registry::new();
/// registry.insert("getUser", EndpointDescriptor::default());
/// registry.insert("listUsers", EndpointDescriptor::default());
/// assert_eq!(registry.len(), 2);
/// assert!(registry.get("getUser").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    endpoints: Vec<Endpoint>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            endpoints: Vec::new(),
        }
    }

    /// Appends an endpoint, or replaces the descriptor in place if the key
    /// already exists.
    pub fn insert(&mut self, key: impl Into<String>, descriptor: EndpointDescriptor) {
        let key = key.into();
        if let Some(existing) = self.endpoints.iter_mut().find(|e| e.key == key) {
            existing.descriptor = descriptor;
        } else {
            self.endpoints.push(Endpoint { key, descriptor });
        }
    }

    /// Looks up an endpoint by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&EndpointDescriptor> {
        self.endpoints
            .iter()
            .find(|e| e.key == key)
            .map(|e| &e.descriptor)
    }

    /// Iterates endpoints in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Endpoint> {
        self.endpoints.iter()
    }

    /// Returns the number of endpoints.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    /// Returns `true` if the registry has no endpoints.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Endpoint;
    type IntoIter = std::slice::Iter<'a, Endpoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.endpoints.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, EndpointDescriptor)> for Registry {
    fn from_iter<I: IntoIterator<Item = (K, EndpointDescriptor)>>(iter: I) -> Self {
        let mut registry = Self::new();
        for (key, descriptor) in iter {
            registry.insert(key, descriptor);
        }
        registry
    }
}

/// Parses a registry document.
///
/// # Errors
///
/// Returns [`Error::MalformedRegistry`] if the text is not JSON, has no
/// object-valued `default` export, or contains a descriptor of the wrong
/// shape. The error names the offending key.
pub fn parse_registry(text: &str) -> Result<Registry> {
    let module: Value = serde_json::from_str(text).map_err(|e| Error::MalformedRegistry {
        message: format!("invalid JSON: {e}"),
        source: Some(e),
    })?;

    let Value::Object(mut module) = module else {
        return Err(Error::MalformedRegistry {
            message: "registry document must be a JSON object".to_string(),
            source: None,
        });
    };

    let entries = match module.remove(DEFAULT_EXPORT) {
        Some(Value::Object(entries)) => entries,
        Some(_) => {
            return Err(Error::MalformedRegistry {
                message: "`default` export is not an object".to_string(),
                source: None,
            });
        }
        None => {
            return Err(Error::MalformedRegistry {
                message: "missing `default` export".to_string(),
                source: None,
            });
        }
    };

    let mut registry = Registry::new();
    for (key, value) in entries {
        if !value.is_object() {
            return Err(Error::MalformedRegistry {
                message: format!("endpoint '{key}' is not an object"),
                source: None,
            });
        }
        let descriptor: EndpointDescriptor =
            serde_json::from_value(value).map_err(|e| Error::MalformedRegistry {
                message: format!("endpoint '{key}': {e}"),
                source: Some(e),
            })?;
        registry.insert(key, descriptor);
    }

    tracing::debug!("Parsed registry with {} endpoints", registry.len());
    Ok(registry)
}

/// Reads and parses a registry document from disk.
///
/// # Errors
///
/// Returns [`Error::SourceNotFound`] if `path` is not a file, or
/// [`Error::MalformedRegistry`] if it cannot be read or parsed.
pub fn load_registry(path: impl AsRef<Path>) -> Result<Registry> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::SourceNotFound {
            path: path.display().to_string(),
        });
    }

    let text = fs::read_to_string(path).map_err(|e| Error::MalformedRegistry {
        message: format!("failed to read {}: {e}", path.display()),
        source: None,
    })?;

    tracing::info!("Loading registry from {}", path.display());
    parse_registry(&text)
}

/// Finds the first `apiList.json` under `<base_dir>/src`.
///
/// Directory entries are visited in file-name order so the choice is stable
/// across platforms.
///
/// # Errors
///
/// Returns [`Error::SourceNotFound`] if no such file exists.
pub fn discover_source(base_dir: impl AsRef<Path>) -> Result<PathBuf> {
    let root = base_dir.as_ref().join(DEFAULT_SOURCE_ROOT);

    let found = WalkDir::new(&root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
        .find(|entry| entry.file_type().is_file() && entry.file_name() == DEFAULT_SOURCE_NAME)
        .map(walkdir::DirEntry::into_path);

    found.ok_or_else(|| Error::SourceNotFound {
        path: root.join("**").join(DEFAULT_SOURCE_NAME).display().to_string(),
    })
}
