//! Template engine for declaration output using Handlebars.
//!
//! Templates are compiled into the binary and registered once. HTML escaping
//! is disabled: every value is TypeScript source.
//!
//! # Examples
//!
//! ```
//! use apitypes_codegen::template_engine::TemplateEngine;
//!
//! let engine = TemplateEngine::new().unwrap();
//! assert!(engine.has_template(TemplateEngine::METHOD));
//! ```

use apitypes_core::{Error, Result};
use handlebars::Handlebars;
use serde::Serialize;

/// Template engine for code generation.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing it to be used across
/// thread boundaries safely.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl TemplateEngine<'_> {
    /// Name of the per-endpoint method signature template.
    pub const METHOD: &'static str = "typings/method";

    /// Name of the file-level interface template.
    pub const INTERFACE: &'static str = "typings/interface";

    /// Creates a new template engine with registered templates.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails (should not happen
    /// with valid built-in templates).
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        Self::register(
            &mut handlebars,
            Self::METHOD,
            include_str!("../templates/method.ts.hbs"),
        )?;
        Self::register(
            &mut handlebars,
            Self::INTERFACE,
            include_str!("../templates/interface.ts.hbs"),
        )?;

        Ok(Self { handlebars })
    }

    fn register(handlebars: &mut Handlebars<'_>, name: &str, source: &str) -> Result<()> {
        handlebars
            .register_template_string(name, source)
            .map_err(|e| Error::TemplateError {
                message: format!("Failed to register template '{name}': {e}"),
                source: Some(Box::new(e)),
            })
    }

    /// Returns `true` if a template with this name is registered.
    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns error if the template is unknown or a variable referenced by
    /// the template is missing from `context`.
    pub fn render<T: Serialize>(&self, name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(name, context)
            .map_err(|e| Error::TemplateError {
                message: format!("Failed to render template '{name}': {e}"),
                source: Some(Box::new(e)),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_templates_registered() {
        let engine = TemplateEngine::new().unwrap();
        assert!(engine.has_template(TemplateEngine::METHOD));
        assert!(engine.has_template(TemplateEngine::INTERFACE));
        assert!(!engine.has_template("typings/missing"));
    }

    #[test]
    fn test_no_html_escaping() {
        let engine = TemplateEngine::new().unwrap();
        let out = engine
            .render(
                TemplateEngine::INTERFACE,
                &json!({
                    "header_description": "<a & b>",
                    "interface_name": "IApis",
                    "body": "",
                }),
            )
            .unwrap();
        assert!(out.contains("@Description <a & b>"));
    }

    #[test]
    fn test_strict_mode_rejects_missing_variables() {
        let engine = TemplateEngine::new().unwrap();
        let err = engine
            .render(TemplateEngine::INTERFACE, &json!({"interface_name": "IApis"}))
            .unwrap_err();
        assert!(err.is_template_error());
    }

    #[test]
    fn test_unknown_template() {
        let engine = TemplateEngine::new().unwrap();
        let err = engine.render("typings/missing", &json!({})).unwrap_err();
        assert!(err.is_template_error());
    }
}
