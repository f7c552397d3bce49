//! Shared utilities for agentry
//!
//! This crate provides common functionality used across the agentry
//! workspace, currently logging setup and its configuration.

pub mod config;
pub mod logging;

pub use config::LoggingConfig;
pub use logging::{init_tracing, init_tracing_with};
