//! azbake Prebake Configuration Library
//!
//! This crate provides the configuration, geometry, validation, and hashing
//! types shared by the azbake backend and command-line interface.
//!
//! # Overview
//!
//! A prebake run is fully described by a [`PrebakeConfig`]: sample rate, loop
//! length, azimuth bucket count, random seed, optional measured dataset, and
//! the tuning parameters of every stage of the pipeline. The config is a JSON
//! document; every field has a default matching the reference build.
//!
//! # Example
//!
//! ```
//! use azbake_spec::{PrebakeConfig, validate_config};
//!
//! let config = PrebakeConfig::builder()
//!     .sample_rate(8000)
//!     .loop_len(64)
//!     .bucket_count(4)
//!     .seed(7)
//!     .build();
//!
//! assert!(validate_config(&config).is_ok());
//! assert_eq!(config.bucket(2).angle_deg, 0.0);
//! ```
//!
//! # Modules
//!
//! - [`config`]: Prebake configuration and its parameter groups
//! - [`error`]: Error and warning types for validation
//! - [`geometry`]: Azimuth buckets, head-relative azimuths, and ears
//! - [`hash`]: Canonical config hashing
//! - [`validation`]: Config validation functions

pub mod config;
pub mod error;
pub mod geometry;
pub mod hash;
pub mod validation;

// Re-export commonly used types at the crate root
pub use config::{
    AnalyticParams, CarrierParams, DitherParams, FallbackPolicy, LimiterParams, LoudnessParams,
    MeasuredParams, PrebakeConfig, PrebakeConfigBuilder,
};
pub use error::{
    ConfigError, ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
pub use geometry::{AzimuthBucket, Ear, HeadAzimuth};
pub use hash::canonical_config_hash;
pub use validation::validate_config;
