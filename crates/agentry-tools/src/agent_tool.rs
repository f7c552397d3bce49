//! AgentTool wrapper that exposes a chat-capable agent as a Tool

use crate::schema;
use crate::{Tool, ToolMetadata, ToolOutput};
use agentry_core::{Agent, ChatRequest, Error, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Wrapper that exposes an [`Agent`] as a [`Tool`]
///
/// AgentTool lets an orchestrator invoke a conversational agent uniformly
/// alongside ordinary tools: each invocation forwards the arguments to the
/// agent's chat operation and repackages the response in the standard
/// [`ToolOutput`] envelope. The adapter holds a shared handle to the agent
/// and a metadata record, both fixed at construction; invocation never
/// mutates either.
///
/// Failure policy stays with the collaborators: errors raised by the agent's
/// chat operation propagate to the invoker unmodified, with no retry,
/// timeout, or reinterpretation in between.
///
/// # Example
///
/// ```no_run
/// use agentry_tools::{AgentTool, Tool};
/// use agentry_core::ChatRequest;
/// use std::sync::Arc;
///
/// # async fn example(researcher: Arc<dyn agentry_core::Agent>) -> agentry_core::Result<()> {
/// let tool = AgentTool::from_defaults(
///     researcher,
///     "researcher",
///     "Delegate research questions to the researcher agent",
///     None,
/// )?;
///
/// let output = tool.invoke(ChatRequest::from_text("Find Rust tutorials")).await?;
/// println!("{}", output.content);
/// # Ok(())
/// # }
/// ```
pub struct AgentTool {
    agent: Arc<dyn Agent>,
    metadata: ToolMetadata,
}

impl AgentTool {
    /// Create a new AgentTool from an agent and a fully populated metadata
    /// record
    ///
    /// The metadata's schema must already be resolved; use
    /// [`AgentTool::from_defaults`] to have one derived. Whether the agent
    /// can actually service chat calls is not checked here, only at
    /// invocation.
    pub fn new(agent: Arc<dyn Agent>, metadata: ToolMetadata) -> Self {
        Self { agent, metadata }
    }

    /// Create an AgentTool, deriving an input schema when none is given
    ///
    /// With an explicit `input_schema` this only assembles the metadata
    /// record. Without one, the schema is derived from the agent's declared
    /// chat signature: `name` becomes the schema title and the declared
    /// parameters become its properties, nothing else.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchemaDerivation`] if no schema is supplied and the
    /// agent declares no chat signature.
    pub fn from_defaults(
        agent: Arc<dyn Agent>,
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: Option<Value>,
    ) -> Result<Self> {
        let name = name.into();
        let input_schema = match input_schema {
            Some(existing) => existing,
            None => {
                let signature = agent.chat_signature().ok_or_else(|| {
                    Error::SchemaDerivation(format!(
                        "agent '{}' declares no chat signature",
                        agent.name()
                    ))
                })?;
                schema::derive_schema(&name, &signature)
            }
        };

        let metadata = ToolMetadata::new(name, description, input_schema);
        Ok(Self::new(agent, metadata))
    }

    /// Handle to the wrapped agent
    ///
    /// For callers that want the chat operation directly, bypassing the
    /// output envelope.
    pub fn agent(&self) -> Arc<dyn Agent> {
        Arc::clone(&self.agent)
    }
}

#[async_trait]
impl Tool for AgentTool {
    async fn invoke(&self, request: ChatRequest) -> Result<ToolOutput> {
        debug!(
            tool = %self.metadata.name,
            agent = %self.agent.name(),
            "forwarding tool call to wrapped agent"
        );

        let raw_input = request.clone();
        let raw_output = self.agent.chat(request).await?;

        Ok(ToolOutput::from_call(
            self.metadata.name.clone(),
            raw_input,
            raw_output,
        ))
    }

    fn metadata(&self) -> &ToolMetadata {
        &self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentry_core::{ChatSignature, ParamKind, ParamSpec};
    use serde_json::json;

    /// Always answers "hello", whatever it is asked
    struct Greeter;

    #[async_trait]
    impl Agent for Greeter {
        async fn chat(&self, _request: ChatRequest) -> Result<Value> {
            Ok(json!("hello"))
        }

        fn name(&self) -> &str {
            "greeter"
        }

        fn chat_signature(&self) -> Option<ChatSignature> {
            Some(ChatSignature::default().with_param(
                ParamSpec::new("query", ParamKind::String).with_description("What to ask"),
            ))
        }
    }

    /// Fails every chat call with a ProcessingFailed error
    struct Unreliable;

    #[async_trait]
    impl Agent for Unreliable {
        async fn chat(&self, _request: ChatRequest) -> Result<Value> {
            Err(Error::ProcessingFailed("model unavailable".to_string()))
        }

        fn name(&self) -> &str {
            "unreliable"
        }
    }

    fn echo_tool() -> AgentTool {
        AgentTool::from_defaults(Arc::new(Greeter), "echo", "echoes input", None)
            .expect("greeter declares a signature")
    }

    #[tokio::test]
    async fn test_invoke_builds_envelope() {
        let tool = echo_tool();
        let output = tool
            .invoke(ChatRequest::from_text("hi"))
            .await
            .expect("invoke should succeed");

        assert_eq!(output.content, "hello");
        assert_eq!(output.tool_name, "echo");
        assert_eq!(output.raw_input, ChatRequest::from_text("hi"));
        assert_eq!(output.raw_output, json!("hello"));
    }

    #[tokio::test]
    async fn test_envelope_tool_name_matches_metadata() {
        let tool = echo_tool();
        let output = tool
            .invoke(ChatRequest::new())
            .await
            .expect("invoke should succeed");
        assert_eq!(output.tool_name, tool.metadata().name);
    }

    #[tokio::test]
    async fn test_invoke_preserves_kwargs() {
        let tool = echo_tool();
        let request = ChatRequest::new()
            .with_arg("hi")
            .with_kwarg("language", "en")
            .with_kwarg("verbose", true);

        let output = tool
            .invoke(request.clone())
            .await
            .expect("invoke should succeed");
        assert_eq!(output.raw_input, request);
    }

    #[test]
    fn test_derived_schema_from_signature() {
        let tool = echo_tool();
        let schema = &tool.metadata().input_schema;

        assert_eq!(schema["title"], "echo");
        let properties = schema["properties"]
            .as_object()
            .expect("properties is an object");
        assert_eq!(properties.len(), 1);
        assert_eq!(properties["query"]["type"], "string");
        assert_eq!(schema["required"], json!(["query"]));
    }

    #[test]
    fn test_explicit_schema_skips_derivation() {
        let schema = json!({"type": "object", "properties": {"task": {"type": "string"}}});
        // Unreliable declares no signature, so this only works because a
        // schema was supplied.
        let tool = AgentTool::from_defaults(
            Arc::new(Unreliable),
            "delegate",
            "delegates a task",
            Some(schema.clone()),
        )
        .expect("explicit schema needs no derivation");

        assert_eq!(tool.metadata().input_schema, schema);
    }

    #[test]
    fn test_missing_signature_fails_derivation() {
        let result = AgentTool::from_defaults(Arc::new(Unreliable), "delegate", "delegates", None);

        match result {
            Err(Error::SchemaDerivation(message)) => {
                assert!(message.contains("unreliable"));
            }
            Err(other) => panic!("expected SchemaDerivation error, got {other:?}"),
            Ok(_) => panic!("expected SchemaDerivation error, got a tool"),
        }
    }

    #[tokio::test]
    async fn test_agent_errors_pass_through() {
        let tool = AgentTool::new(
            Arc::new(Unreliable),
            ToolMetadata::new("delegate", "delegates", json!({"type": "object"})),
        );

        match tool.invoke(ChatRequest::from_text("hi")).await {
            Err(Error::ProcessingFailed(message)) => {
                assert_eq!(message, "model unavailable");
            }
            other => panic!("expected the agent's own error, got {other:?}"),
        }
    }

    #[test]
    fn test_metadata_accessor_is_idempotent() {
        let tool = echo_tool();
        assert_eq!(tool.metadata(), tool.metadata());
        assert_eq!(tool.metadata().clone(), tool.metadata().clone());
    }

    #[tokio::test]
    async fn test_agent_accessor_bypasses_envelope() {
        let tool = echo_tool();
        let response = tool
            .agent()
            .chat(ChatRequest::from_text("hi"))
            .await
            .expect("chat should succeed");

        // Raw response, no envelope around it.
        assert_eq!(response, json!("hello"));
    }

    #[tokio::test]
    async fn test_repeated_invocations_leave_adapter_unchanged() {
        let tool = echo_tool();
        let before = tool.metadata().clone();

        for _ in 0..3 {
            tool.invoke(ChatRequest::from_text("hi"))
                .await
                .expect("invoke should succeed");
        }

        assert_eq!(tool.metadata(), &before);
    }
}
