//! Logging configuration

use serde::{Deserialize, Serialize};

/// Configuration for tracing initialization
///
/// The environment filter (`RUST_LOG`) always wins when set; `filter` is the
/// fallback directive used when it is not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Fallback filter directive (e.g. "info", "agentry_tools=debug")
    pub filter: String,

    /// Emit JSON-formatted log lines instead of human-readable ones
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}
