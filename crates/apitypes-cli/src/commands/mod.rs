//! Command implementations for the apitypes CLI.
//!
//! Each command parses its arguments, executes the operation, and formats
//! output according to the requested format.

pub mod completions;
pub mod generate;
