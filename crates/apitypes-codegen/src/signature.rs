//! Method signature synthesis.
//!
//! Turns one registry entry into a documented method declaration:
//!
//! ```text
//!   /**
//!    * fetch a user
//!    * apiName: user.get
//!    * @param opts
//!    */
//!   getUser(
//!     opts: IApiOpts<{ id: string; }>,
//!   ): Promise<IApiSuccess<IUser>>;
//! ```

use crate::registry::EndpointDescriptor;
use crate::template_engine::TemplateEngine;
use crate::typescript::{is_empty_params, render_params, resolve_response};
use apitypes_core::{AmbientNamespace, Result};
use serde::Serialize;

/// Ambient request-options type, declared by the consuming project.
pub const OPTS_TYPE: &str = "IApiOpts";

/// Ambient success-envelope type, declared by the consuming project.
pub const SUCCESS_TYPE: &str = "IApiSuccess";

/// Rendered in place of a missing `apiName`.
const UNDEFINED: &str = "undefined";

/// Names of the ambient generic types, possibly namespace-qualified.
///
/// # Examples
///
/// ```
/// use apitypes_codegen::signature::AmbientTypes;
/// use apitypes_core::AmbientNamespace;
///
/// let plain = AmbientTypes::new(None);
/// assert_eq!(plain.opts, "IApiOpts");
///
/// let ns = AmbientNamespace::new("IMiAPI").unwrap();
/// let qualified = AmbientTypes::new(Some(&ns));
/// assert_eq!(qualified.success, "IMiAPI.IApiSuccess");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbientTypes {
    /// Request-options type name.
    pub opts: String,
    /// Success-envelope type name.
    pub success: String,
}

impl AmbientTypes {
    /// Builds the type names, qualified by `namespace` when given.
    #[must_use]
    pub fn new(namespace: Option<&AmbientNamespace>) -> Self {
        match namespace {
            Some(ns) => Self {
                opts: ns.qualify(OPTS_TYPE),
                success: ns.qualify(SUCCESS_TYPE),
            },
            None => Self {
                opts: OPTS_TYPE.to_string(),
                success: SUCCESS_TYPE.to_string(),
            },
        }
    }
}

impl Default for AmbientTypes {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Template context for a single method signature.
#[derive(Debug, Clone, Serialize)]
pub struct MethodContext<'a> {
    /// Method name.
    pub key: &'a str,
    /// Description line; empty renders a bare `*` line.
    pub description: &'a str,
    /// `apiName` echoed into the doc comment.
    pub api_name: &'a str,
    /// Whether the `@param opts` annotation is emitted.
    pub has_params: bool,
    /// Rendered parameter object type.
    pub params_type: String,
    /// Resolved response type.
    pub response_type: &'a str,
    /// Request-options type name.
    pub opts_type: &'a str,
    /// Success-envelope type name.
    pub success_type: &'a str,
}

impl<'a> MethodContext<'a> {
    /// Derives the template context for one endpoint.
    #[must_use]
    pub fn new(key: &'a str, descriptor: &'a EndpointDescriptor, ambient: &'a AmbientTypes) -> Self {
        let params = descriptor.params.as_ref();
        Self {
            key,
            description: descriptor.desc.as_deref().unwrap_or_default(),
            api_name: descriptor.api_name.as_deref().unwrap_or(UNDEFINED),
            has_params: !is_empty_params(params),
            params_type: render_params(params),
            response_type: resolve_response(descriptor.res.as_deref()),
            opts_type: &ambient.opts,
            success_type: &ambient.success,
        }
    }
}

/// Renders the documented method signature for one endpoint.
///
/// The result has no leading or trailing newline.
///
/// # Errors
///
/// Returns a template error if rendering fails.
pub fn synthesize(
    engine: &TemplateEngine<'_>,
    key: &str,
    descriptor: &EndpointDescriptor,
    ambient: &AmbientTypes,
) -> Result<String> {
    let context = MethodContext::new(key, descriptor, ambient);
    tracing::debug!(
        "Synthesizing {}(opts: {}<{}>)",
        key,
        context.opts_type,
        context.params_type
    );
    engine.render(TemplateEngine::METHOD, &context)
}
