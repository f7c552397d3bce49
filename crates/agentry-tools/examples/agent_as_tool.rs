//! Wrap a chat-capable agent as a tool and invoke it through a registry.
//!
//! Run with: cargo run --example agent_as_tool

use agentry_core::{Agent, ChatRequest, ChatSignature, ParamKind, ParamSpec, Result};
use agentry_tools::{AgentTool, Tool, ToolRegistry};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;

/// A toy conversational agent that "composes" haiku
struct HaikuBot;

#[async_trait]
impl Agent for HaikuBot {
    async fn chat(&self, request: ChatRequest) -> Result<Value> {
        let topic = request
            .args
            .first()
            .and_then(Value::as_str)
            .unwrap_or("rust");
        Ok(json!(format!(
            "{topic} in the wind / a borrow checker hums low / all lifetimes align"
        )))
    }

    fn name(&self) -> &str {
        "haiku-bot"
    }

    fn chat_signature(&self) -> Option<ChatSignature> {
        Some(ChatSignature::default().with_param(
            ParamSpec::new("topic", ParamKind::String).with_description("Subject of the haiku"),
        ))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    agentry_utils::init_tracing();

    // Wrap the agent as a tool, deriving its input schema from the declared
    // chat signature.
    let tool = AgentTool::from_defaults(
        Arc::new(HaikuBot),
        "haiku",
        "Compose a haiku about a topic",
        None,
    )?;

    let registry = ToolRegistry::new();
    registry.register(Arc::new(tool))?;

    // What an orchestrator would see when selecting tools.
    for metadata in registry.metadata() {
        println!("tool: {} - {}", metadata.name, metadata.description);
        println!("schema: {:#}", metadata.input_schema);
    }

    // And what it gets back when it invokes one.
    if let Some(tool) = registry.get("haiku") {
        let output = tool.invoke(ChatRequest::from_text("autumn")).await?;
        println!("[{}] {}", output.tool_name, output.content);
    }

    Ok(())
}
