//! Error types for config validation and loading.

use thiserror::Error;

/// Error codes for config validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// C001: Sample rate is zero
    InvalidSampleRate,
    /// C002: Loop length is odd or too short
    InvalidLoopLength,
    /// C003: Bucket count is zero
    InvalidBucketCount,
    /// C004: Pass band is empty, inverted, or negative
    InvalidPassBand,
    /// C005: Target loudness is not positive
    InvalidTargetRms,
    /// C006: Limiter ceiling is not positive
    InvalidLimiterCeiling,
    /// C007: Dither amplitude is negative
    InvalidDitherAmplitude,
    /// C008: Analytic model parameter out of range
    InvalidAnalyticParams,
    /// C009: Measured loader parameter out of range
    InvalidMeasuredParams,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "C001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidSampleRate => "C001",
            ErrorCode::InvalidLoopLength => "C002",
            ErrorCode::InvalidBucketCount => "C003",
            ErrorCode::InvalidPassBand => "C004",
            ErrorCode::InvalidTargetRms => "C005",
            ErrorCode::InvalidLimiterCeiling => "C006",
            ErrorCode::InvalidDitherAmplitude => "C007",
            ErrorCode::InvalidAnalyticParams => "C008",
            ErrorCode::InvalidMeasuredParams => "C009",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes for config validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: Loop length is not a power of two
    LoopLengthNotPowerOfTwo,
    /// W002: Pass band extends past Nyquist
    BandAboveNyquist,
    /// W003: Configured dataset directory does not exist
    DatasetMissing,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::LoopLengthNotPowerOfTwo => "W001",
            WarningCode::BandAboveNyquist => "W002",
            WarningCode::DatasetMissing => "W003",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional config path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Dotted path to the problematic field (e.g., "carrier.band_lo_hz").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a config path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validation warning with code, message, and optional config path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
    /// Dotted path to the problematic field.
    pub path: Option<String>,
}

impl ValidationWarning {
    /// Creates a new validation warning with a config path.
    pub fn with_path(
        code: WarningCode,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

/// Top-level error type for config operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of config validation.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
    /// List of validation warnings.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Returns true if validation passed (no errors).
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true if validation failed.
    pub fn is_err(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Adds a warning to the result.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_with_path() {
        let err = ValidationError::with_path(
            ErrorCode::InvalidPassBand,
            "upper edge below lower edge",
            "carrier.band_hi_hz",
        );
        assert_eq!(
            err.to_string(),
            "C004: upper edge below lower edge (at carrier.band_hi_hz)"
        );
    }

    #[test]
    fn test_result_state() {
        let mut result = ValidationResult::default();
        assert!(result.is_ok());

        result.add_warning(ValidationWarning::with_path(WarningCode::DatasetMissing, "gone", "dataset_dir"));
        assert!(result.is_ok());

        result.add_error(ValidationError::new(ErrorCode::InvalidSampleRate, "zero"));
        assert!(result.is_err());
    }
}
