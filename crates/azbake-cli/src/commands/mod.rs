//! CLI command implementations

pub mod generate;
pub mod init;
pub mod inspect;
pub mod json_output;
pub mod validate;

mod reporting;

use std::process::ExitCode;

/// Exit code for config and validation failures.
pub const EXIT_CONFIG: u8 = 1;
/// Exit code for generation and output failures.
pub const EXIT_GENERATE: u8 = 2;

/// Exit code for a failed generation run.
pub(crate) fn exit_code_for(err: &azbake_backend_audio::PrebakeError) -> ExitCode {
    use azbake_backend_audio::PrebakeError;

    match err {
        PrebakeError::InvalidConfig(_) | PrebakeError::Config(_) => ExitCode::from(EXIT_CONFIG),
        _ => ExitCode::from(EXIT_GENERATE),
    }
}
