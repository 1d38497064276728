//! azbake End-to-End Test Infrastructure
//!
//! This crate provides integration tests for the whole bake:
//!
//! - Generation: config -> table -> C files
//! - Properties: periodicity, range, sidedness, loudness
//! - **Determinism**: byte-identical tables across runs
//! - Measured data: dataset fixtures, mixed sourcing, fallback equivalence
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p azbake-tests
//! ```

pub mod analysis;
pub mod determinism;
pub mod fixtures;

pub use determinism::{assert_deterministic, compute_hash};
pub use fixtures::{golden_config, DatasetFixture};
