//! apitypes CLI library.
//!
//! Exposes argument definitions, commands, and formatters so they can be
//! exercised from integration tests.

#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod commands;
pub mod formatters;

use apitypes_core::cli::ExitCode;

/// Maps a failed run to a process exit code.
///
/// Problems with the user's input (missing or malformed registry, bad
/// configuration, invalid flags) exit with [`ExitCode::INVALID_INPUT`];
/// everything else exits with [`ExitCode::ERROR`].
#[must_use]
pub fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<apitypes_core::Error>() {
        Some(e) if e.is_user_error() => ExitCode::INVALID_INPUT,
        _ => ExitCode::ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_exit_code_for_user_error() {
        let err = anyhow::Error::new(apitypes_core::Error::SourceNotFound {
            path: "src".to_string(),
        });
        assert_eq!(exit_code_for(&err), ExitCode::INVALID_INPUT);
    }

    #[test]
    fn test_exit_code_through_context() {
        let result: Result<(), apitypes_core::Error> =
            Err(apitypes_core::Error::InvalidArgument("bad".to_string()));
        let err = result.context("while generating").unwrap_err();
        assert_eq!(exit_code_for(&err), ExitCode::INVALID_INPUT);
    }

    #[test]
    fn test_exit_code_for_write_failure() {
        let err = anyhow::Error::new(apitypes_core::Error::WriteFailed {
            path: "out.d.ts".to_string(),
            source: std::io::Error::other("disk full"),
        });
        assert_eq!(exit_code_for(&err), ExitCode::ERROR);
    }

    #[test]
    fn test_exit_code_for_other_errors() {
        let err = anyhow::anyhow!("unexpected");
        assert_eq!(exit_code_for(&err), ExitCode::ERROR);
    }
}
