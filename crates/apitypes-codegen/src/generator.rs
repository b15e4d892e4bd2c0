//! Interface assembly.
//!
//! Produces the complete declaration file for a registry. Assembly happens
//! entirely in memory: if any endpoint fails, no text is returned and the
//! caller has nothing to write.
//!
//! # Examples
//!
//! ```
//! use apitypes_codegen::TypingsGenerator;
//! use apitypes_codegen::registry::parse_registry;
//! use apitypes_core::GeneratorConfig;
//!
//! let registry = parse_registry(
//!     r#"{"default": {"getUser": {"apiName": "getUser", "desc": "fetch a user", "res": "IUser"}}}"#,
//! ).unwrap();
//!
//! let generator = TypingsGenerator::new(GeneratorConfig::default()).unwrap();
//! let text = generator.generate(&registry).unwrap();
//!
//! assert!(text.starts_with("/*\n * @Description "));
//! assert!(text.contains("  getUser(\n    opts: IApiOpts<null>,\n  ): Promise<IApiSuccess<IUser>>;"));
//! assert!(text.ends_with("\n}"));
//! ```

use crate::registry::{EndpointDescriptor, Registry};
use crate::signature::{AmbientTypes, synthesize};
use crate::template_engine::TemplateEngine;
use apitypes_core::{GeneratorConfig, Result};
use serde::Serialize;

/// Template context for the file-level wrapper.
#[derive(Debug, Serialize)]
struct InterfaceContext<'a> {
    header_description: &'a str,
    interface_name: &'a str,
    body: String,
}

/// Generator for the `IApis` declaration file.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing safe use across threads.
#[derive(Debug)]
pub struct TypingsGenerator<'a> {
    engine: TemplateEngine<'a>,
    config: GeneratorConfig,
    ambient: AmbientTypes,
}

impl TypingsGenerator<'_> {
    /// Creates a generator for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let engine = TemplateEngine::new()?;
        let ambient = AmbientTypes::new(config.ambient_namespace.as_ref());
        Ok(Self {
            engine,
            config,
            ambient,
        })
    }

    /// Returns the configuration this generator was built with.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Renders the method signature for a single endpoint.
    ///
    /// # Errors
    ///
    /// Returns a template error if rendering fails.
    pub fn render_method(
        &self,
        key: &str,
        descriptor: &EndpointDescriptor,
    ) -> Result<String> {
        synthesize(&self.engine, key, descriptor, &self.ambient)
    }

    /// Assembles the full declaration file.
    ///
    /// Methods appear in registry order, each preceded and followed by a
    /// newline. An empty registry still yields the header and an empty
    /// interface.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while rendering any endpoint; no
    /// partial output is produced.
    pub fn generate(&self, registry: &Registry) -> Result<String> {
        tracing::info!(
            "Generating interface {} for {} endpoints",
            self.config.interface_name,
            registry.len()
        );

        let mut body = String::new();
        for endpoint in registry {
            let method = self.render_method(&endpoint.key, &endpoint.descriptor)?;
            body.push('\n');
            body.push_str(&method);
            body.push('\n');
        }

        let context = InterfaceContext {
            header_description: &self.config.header_description,
            interface_name: self.config.interface_name.as_str(),
            body,
        };
        let text = self.engine.render(TemplateEngine::INTERFACE, &context)?;

        tracing::debug!("Assembled {} bytes", text.len());
        Ok(text)
    }
}
