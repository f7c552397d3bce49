//! Tool framework for agentry
//!
//! This crate provides the uniform tool surface an orchestrator consumes:
//! the [`Tool`] trait, the [`ToolMetadata`] and [`ToolOutput`] records,
//! JSON Schema helpers with deterministic schema derivation, the
//! [`AgentTool`] adapter that exposes a chat-capable agent as a tool, and a
//! [`ToolRegistry`] for discovery.

pub mod agent_tool;
pub mod metadata;
pub mod output;
pub mod registry;
pub mod schema;
pub mod tool;

pub use agent_tool::AgentTool;
pub use metadata::ToolMetadata;
pub use output::ToolOutput;
pub use registry::ToolRegistry;
pub use tool::Tool;
