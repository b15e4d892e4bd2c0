//! Core types, configuration, and errors for apitypes.
//!
//! This crate provides the foundational types shared by the code generator
//! and the command-line interface.
//!
//! # Architecture
//!
//! The core consists of:
//! - Validated identifiers (`InterfaceName`, `AmbientNamespace`)
//! - The error type used by every library crate
//! - Generator configuration with TOML loading
//! - CLI output format and exit codes

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod error;
mod types;

pub mod cli;

pub use config::{
    CONFIG_FILE_NAME, DEFAULT_HEADER_DESCRIPTION, DEFAULT_OUTPUT_DIR, GeneratorConfig,
    GeneratorConfigBuilder,
};
pub use error::{Error, Result};
pub use types::{AmbientNamespace, InterfaceName};
