//! Core Agent trait definition

use crate::Result;
use crate::signature::ChatSignature;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Arguments for a single chat exchange
///
/// A request carries positional values plus named values, mirroring the call
/// shapes conversational agents accept. Adapters forward a request to the
/// agent unchanged and keep a copy for the invocation record.
///
/// # Example
///
/// ```
/// use agentry_core::ChatRequest;
///
/// let request = ChatRequest::from_text("What is the capital of France?")
///     .with_kwarg("language", "en");
///
/// assert_eq!(request.args.len(), 1);
/// assert_eq!(request.kwargs["language"], "en");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Positional arguments, in call order
    pub args: Vec<Value>,

    /// Named arguments
    pub kwargs: Map<String, Value>,
}

impl ChatRequest {
    /// Create an empty request
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a request with a single positional text argument
    ///
    /// This is the common case for conversational agents: one user message.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new().with_arg(text.into())
    }

    /// Append a positional argument
    pub fn with_arg(mut self, value: impl Into<Value>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Set a named argument
    pub fn with_kwarg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.kwargs.insert(key.into(), value.into());
        self
    }

    /// Check whether the request carries no arguments at all
    pub fn is_empty(&self) -> bool {
        self.args.is_empty() && self.kwargs.is_empty()
    }
}

/// Core trait for chat-capable agents
///
/// An agent is any component that can complete one request/response chat
/// exchange. The trait is a narrow capability contract: implementing `chat`
/// is all it takes for a concrete type to be wrapped as a tool, with no base
/// type or inheritance coupling.
///
/// The response is an untyped [`Value`] so callers can both stringify it and
/// pass it through untouched. Errors use the shared [`crate::Error`] type and
/// are propagated by wrappers without reinterpretation.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Exchange one chat turn with the agent
    async fn chat(&self, request: ChatRequest) -> Result<Value>;

    /// Get the agent's name
    fn name(&self) -> &str;

    /// Declared parameter list of the chat operation
    ///
    /// Agents that want schemas derived for them declare their chat
    /// parameters here. The default returns `None`, meaning the chat
    /// operation has no discoverable parameter list and schema derivation is
    /// unavailable for this agent.
    fn chat_signature(&self) -> Option<ChatSignature> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::{ParamKind, ParamSpec};
    use serde_json::json;

    struct Parrot;

    #[async_trait]
    impl Agent for Parrot {
        async fn chat(&self, request: ChatRequest) -> Result<Value> {
            Ok(request.args.first().cloned().unwrap_or(Value::Null))
        }

        fn name(&self) -> &str {
            "parrot"
        }

        fn chat_signature(&self) -> Option<ChatSignature> {
            Some(ChatSignature::new(vec![ParamSpec::new(
                "message",
                ParamKind::String,
            )]))
        }
    }

    #[test]
    fn test_request_builder() {
        let request = ChatRequest::new()
            .with_arg("hello")
            .with_arg(42)
            .with_kwarg("verbose", true);

        assert_eq!(request.args, vec![json!("hello"), json!(42)]);
        assert_eq!(request.kwargs["verbose"], json!(true));
        assert!(!request.is_empty());
    }

    #[test]
    fn test_from_text() {
        let request = ChatRequest::from_text("hi");
        assert_eq!(request.args, vec![json!("hi")]);
        assert!(request.kwargs.is_empty());
    }

    #[test]
    fn test_empty_request() {
        assert!(ChatRequest::new().is_empty());
    }

    #[tokio::test]
    async fn test_agent_chat() {
        let agent = Parrot;
        let response = agent
            .chat(ChatRequest::from_text("squawk"))
            .await
            .expect("chat should succeed");
        assert_eq!(response, json!("squawk"));
    }

    #[test]
    fn test_declared_signature() {
        let agent = Parrot;
        let signature = agent.chat_signature().expect("parrot declares params");
        assert_eq!(signature.params().len(), 1);
        assert_eq!(signature.params()[0].name, "message");
    }

    #[test]
    fn test_default_signature_is_none() {
        struct Opaque;

        #[async_trait]
        impl Agent for Opaque {
            async fn chat(&self, _request: ChatRequest) -> Result<Value> {
                Ok(Value::Null)
            }

            fn name(&self) -> &str {
                "opaque"
            }
        }

        assert!(Opaque.chat_signature().is_none());
    }
}
