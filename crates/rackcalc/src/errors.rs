//! Error handling and exit codes.

use rackcalc_core::{exit_codes, RackError};

/// Map a rack calculator error to its exit code.
pub fn handle_error(err: &RackError) -> i32 {
    match err {
        RackError::InvalidInput { .. } => exit_codes::ERROR_INVALID_INPUT,
        RackError::Config(_) => exit_codes::ERROR_CONFIG,
        RackError::Io(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for any error returned by [`crate::app::run`].
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<RackError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
