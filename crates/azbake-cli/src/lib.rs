//! azbake CLI library.
//!
//! This crate provides the core functionality for the azbake CLI: config
//! loading with flag overrides, the command implementations, and the C
//! source sink that turns a table into firmware-ready arrays.

pub mod commands;
pub mod csource;
pub mod input;
