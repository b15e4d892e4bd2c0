//! TypeScript type expressions for parameters and responses.
//!
//! # Examples
//!
//! ```
//! use apitypes_codegen::registry::{ParamField, ParamSpec};
//! use apitypes_codegen::typescript::{render_params, resolve_response};
//!
//! let spec = ParamSpec {
//!     post: Some(vec![ParamField::new("a").with_type("string").required(true)]),
//!     get: None,
//! };
//! assert_eq!(render_params(Some(&spec)), "{ a: string; }");
//! assert_eq!(resolve_response(None), "any");
//! ```

use crate::registry::{ParamField, ParamSpec};

/// Parameter type used when an endpoint takes no parameters.
pub const NULL_TYPE: &str = "null";

/// Fallback for missing field or response types.
pub const ANY_TYPE: &str = "any";

/// Rendered in place of a missing property name.
const UNDEFINED: &str = "undefined";

/// Returns `true` if the parameter spec renders as `null`.
///
/// A spec is empty when it is absent, has neither group, or has exactly one
/// group and that group has no fields. Two present groups are never empty,
/// even if both have no fields.
///
/// # Examples
///
/// ```
/// use apitypes_codegen::registry::ParamSpec;
/// use apitypes_codegen::typescript::is_empty_params;
///
/// assert!(is_empty_params(None));
/// assert!(is_empty_params(Some(&ParamSpec { post: Some(vec![]), get: None })));
/// assert!(!is_empty_params(Some(&ParamSpec { post: Some(vec![]), get: Some(vec![]) })));
/// ```
#[must_use]
pub fn is_empty_params(params: Option<&ParamSpec>) -> bool {
    match params {
        None
        | Some(ParamSpec {
            post: None,
            get: None,
        }) => true,
        Some(ParamSpec {
            post: Some(fields),
            get: None,
        })
        | Some(ParamSpec {
            post: None,
            get: Some(fields),
        }) => fields.is_empty(),
        Some(ParamSpec {
            post: Some(_),
            get: Some(_),
        }) => false,
    }
}

/// Renders one field as `<param><?>: <type>;`.
///
/// # Examples
///
/// ```
/// use apitypes_codegen::registry::ParamField;
/// use apitypes_codegen::typescript::render_field;
///
/// assert_eq!(render_field(&ParamField::new("id")), "id?: any;");
/// assert_eq!(render_field(&ParamField::new("id").with_type("number").is_need(true)), "id: number;");
/// ```
#[must_use]
pub fn render_field(field: &ParamField) -> String {
    let name = field.param.as_deref().unwrap_or(UNDEFINED);
    let optional_marker = if field.is_mandatory() { "" } else { "?" };
    let ts_type = field
        .ty
        .as_deref()
        .filter(|ty| !ty.trim().is_empty())
        .unwrap_or(ANY_TYPE);
    format!("{name}{optional_marker}: {ts_type};")
}

/// Renders a parameter spec as an object-type literal, or `null` when empty.
///
/// Post fields come first, then get fields, one per line.
#[must_use]
pub fn render_params(params: Option<&ParamSpec>) -> String {
    let Some(spec) = params.filter(|spec| !is_empty_params(Some(spec))) else {
        return NULL_TYPE.to_string();
    };

    let fields = spec
        .post
        .iter()
        .chain(spec.get.iter())
        .flatten()
        .map(render_field)
        .collect::<Vec<_>>();

    format!("{{ {} }}", fields.join("\n"))
}

/// Resolves the response type expression.
///
/// A missing or empty descriptor resolves to `any`; anything else is returned
/// verbatim.
#[must_use]
pub fn resolve_response(res: Option<&str>) -> &str {
    res.filter(|r| !r.is_empty()).unwrap_or(ANY_TYPE)
}
