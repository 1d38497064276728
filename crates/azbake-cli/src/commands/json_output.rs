//! JSON output types for machine-readable CLI output.
//!
//! Every command that takes `--json` prints exactly one of these documents to
//! stdout instead of colored text.

use azbake_backend_audio::{PrebakeError, PrebakeReport};
use azbake_spec::{ConfigError, ValidationError, ValidationWarning};
use serde::Serialize;

/// Error codes for CLI operations.
///
/// Validation errors pass their own `C0xx` codes through; generation errors
/// pass their `BAKE_0xx` codes through.
pub mod error_codes {
    /// Config file could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Config file is not valid JSON for a config
    pub const JSON_PARSE: &str = "CLI_002";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "C002", "BAKE_005")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Dotted config path of the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }
}

impl From<&ValidationError> for JsonError {
    fn from(err: &ValidationError) -> Self {
        Self {
            code: err.code.code().to_string(),
            message: err.message.clone(),
            path: err.path.clone(),
        }
    }
}

impl From<&ConfigError> for JsonError {
    fn from(err: &ConfigError) -> Self {
        let code = match err {
            ConfigError::Io(_) => error_codes::FILE_READ,
            ConfigError::JsonParse(_) => error_codes::JSON_PARSE,
        };
        Self::new(code, err.to_string())
    }
}

impl From<&PrebakeError> for JsonError {
    fn from(err: &PrebakeError) -> Self {
        Self::new(err.code(), err.to_string())
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "W002")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
    /// Dotted config path of the field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl From<&ValidationWarning> for JsonWarning {
    fn from(warning: &ValidationWarning) -> Self {
        Self {
            code: warning.code.code().to_string(),
            message: warning.message.clone(),
            path: warning.path.clone(),
        }
    }
}

/// Output of `azbake validate --json`.
#[derive(Debug, Clone, Serialize)]
pub struct ValidateOutput {
    /// Whether the config is valid.
    pub success: bool,
    /// Canonical config hash, when the config could be loaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_hash: Option<String>,
    /// Errors.
    pub errors: Vec<JsonError>,
    /// Warnings.
    pub warnings: Vec<JsonWarning>,
}

/// Output of `azbake generate --json` and `azbake inspect --json`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateOutput {
    /// Whether a table was produced (and written, for `generate`).
    pub success: bool,
    /// Files written.
    pub outputs: Vec<String>,
    /// Errors.
    pub errors: Vec<JsonError>,
    /// Warnings.
    pub warnings: Vec<JsonWarning>,
    /// Generation report, when generation succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<PrebakeReport>,
}

impl GenerateOutput {
    /// A failed run.
    pub fn failure(errors: Vec<JsonError>, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: false,
            outputs: Vec::new(),
            errors,
            warnings,
            report: None,
        }
    }
}

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
