//! Error types for table generation.

use azbake_spec::ConfigError;
use thiserror::Error;

/// Errors from writing a finished table.
#[derive(Debug, Error)]
pub enum SinkError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// WAV encoding error.
    #[error("WAV encode error: {0}")]
    Wav(#[from] hound::Error),

    /// The sink's output settings are unusable, e.g. a symbol prefix that is
    /// not a C identifier.
    #[error("format error: {0}")]
    Format(String),
}

/// Errors that can occur while baking a table.
#[derive(Debug, Error)]
pub enum PrebakeError {
    /// Config failed validation.
    #[error("invalid config: {}", .0.join("; "))]
    InvalidConfig(Vec<String>),

    /// A magnitude curve has the wrong number of bins.
    #[error("magnitude curve has {found} bins, expected {expected}")]
    CurveLength {
        /// Bins the carrier has.
        expected: usize,
        /// Bins the curve has.
        found: usize,
    },

    /// A bucket's sample buffer has the wrong length.
    #[error("bucket {bucket} has {found} samples per ear, expected {expected}")]
    BufferLength {
        /// Bucket index.
        bucket: usize,
        /// Loop length.
        expected: usize,
        /// Actual length.
        found: usize,
    },

    /// The table was finished with the wrong number of buckets.
    #[error("table has {found} buckets, expected {expected}")]
    BucketCount {
        /// Configured bucket count.
        expected: usize,
        /// Buckets pushed.
        found: usize,
    },

    /// Writing the table failed.
    #[error("sink error: {0}")]
    Sink(#[from] SinkError),

    /// Loading the config failed.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl PrebakeError {
    /// Returns the error code for this error type.
    pub fn code(&self) -> &'static str {
        match self {
            PrebakeError::InvalidConfig(_) => "BAKE_001",
            PrebakeError::CurveLength { .. } => "BAKE_002",
            PrebakeError::BufferLength { .. } => "BAKE_003",
            PrebakeError::BucketCount { .. } => "BAKE_004",
            PrebakeError::Sink(_) => "BAKE_005",
            PrebakeError::Config(_) => "BAKE_006",
        }
    }
}

/// Result type for table generation.
pub type PrebakeResult<T> = Result<T, PrebakeError>;
