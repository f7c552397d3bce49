//! Tool invocation output envelope

use agentry_core::ChatRequest;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Standardized result record returned by every tool invocation
///
/// An envelope is created fresh for each call and has no identity beyond it.
/// `raw_input` and `raw_output` preserve the call exactly as it happened;
/// `content` is the string rendering orchestrators feed back to an LLM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolOutput {
    /// String rendering of the raw output
    pub content: String,

    /// Name of the tool that produced this output
    pub tool_name: String,

    /// The literal arguments the tool was invoked with
    pub raw_input: ChatRequest,

    /// The wrapped agent's response, untouched
    pub raw_output: Value,
}

impl ToolOutput {
    /// Build an envelope from one completed call
    ///
    /// A JSON string renders as its bare text; any other value renders via
    /// its JSON serialization.
    pub fn from_call(
        tool_name: impl Into<String>,
        raw_input: ChatRequest,
        raw_output: Value,
    ) -> Self {
        let content = match &raw_output {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        Self {
            content,
            tool_name: tool_name.into(),
            raw_input,
            raw_output,
        }
    }
}
