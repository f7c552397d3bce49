//! Error types for agentry-core

use thiserror::Error;

/// Result type alias for agentry crates
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for agent and tool operations
///
/// Tool adapters never reinterpret agent failures: whatever variant an agent
/// returns from its chat operation is the variant the tool invoker sees.
#[derive(Error, Debug)]
pub enum Error {
    /// Generic error message
    #[error("{0}")]
    Generic(String),

    /// Agent processing failed
    #[error("Agent processing failed: {0}")]
    ProcessingFailed(String),

    /// A schema could not be derived from an agent's chat signature
    #[error("Schema derivation failed: {0}")]
    SchemaDerivation(String),

    /// A tool with the same name is already registered
    #[error("Tool '{0}' is already registered")]
    DuplicateTool(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::SchemaDerivation("agent 'echo' declares no chat signature".to_string());
        assert_eq!(
            err.to_string(),
            "Schema derivation failed: agent 'echo' declares no chat signature"
        );

        let err = Error::DuplicateTool("search".to_string());
        assert_eq!(err.to_string(), "Tool 'search' is already registered");
    }
}
