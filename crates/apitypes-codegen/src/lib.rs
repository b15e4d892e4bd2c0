//! TypeScript declaration generation for HTTP API endpoint registries.
//!
//! Transforms an endpoint registry into a single `interface IApis { ... }`
//! declaration with one documented method per endpoint, using Handlebars
//! templates.
//!
//! # Pipeline
//!
//! 1. [`registry`] loads the registry document
//! 2. [`typescript`] renders parameter and response types
//! 3. [`signature`] synthesizes each method signature
//! 4. [`generator`] assembles the interface
//! 5. [`sink`] resolves the output path and writes the file

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod generator;
pub mod registry;
pub mod signature;
pub mod sink;
pub mod template_engine;
pub mod typescript;

pub use generator::TypingsGenerator;
pub use registry::{Endpoint, EndpointDescriptor, ParamField, ParamSpec, Registry};
