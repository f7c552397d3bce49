//! Core abstractions for agentry
//!
//! This crate defines the fundamental traits and types used throughout the
//! agentry workspace: the chat-capable [`Agent`] contract, the
//! [`ChatRequest`] argument carrier, declared chat signatures, and the shared
//! error type.

pub mod agent;
pub mod error;
pub mod signature;

pub use agent::{Agent, ChatRequest};
pub use error::{Error, Result};
pub use signature::{ChatSignature, ParamKind, ParamSpec};
