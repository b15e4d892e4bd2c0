//! Verifies that public types can be shared across threads.

use apitypes_core::cli::{ExitCode, OutputFormat};
use apitypes_core::*;

const fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_domain_types_are_send_sync() {
    assert_send_sync::<InterfaceName>();
    assert_send_sync::<AmbientNamespace>();
}

#[test]
fn test_config_types_are_send_sync() {
    assert_send_sync::<GeneratorConfig>();
    assert_send_sync::<GeneratorConfigBuilder>();
}

#[test]
fn test_cli_types_are_send_sync() {
    assert_send_sync::<OutputFormat>();
    assert_send_sync::<ExitCode>();
}

#[test]
fn test_error_is_send_sync() {
    assert_send_sync::<Error>();
}
