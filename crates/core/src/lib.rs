//! # helpdesk core
//!
//! Domain types, traits, and error definitions for the helpdesk support
//! chat client. Nothing in here talks to the network or the terminal; it
//! defines the model the other crates implement against.
//!
//! - [`message`]: conversation history
//! - [`provider`]: the LLM backend seam
//! - [`tool`]: callable tools and their registry
//! - [`context`]: the mutable session context tools read and write
//! - [`event`]: domain events for observers (terminal, HTTP, logs)

pub mod context;
pub mod error;
pub mod event;
pub mod message;
pub mod provider;
pub mod tool;

// Re-export key types at crate root for ergonomics
pub use context::{FraudMode, SessionContext};
pub use error::{Error, Result};
pub use event::{DomainEvent, EventBus, ModelPhase};
pub use message::{Conversation, ConversationId, Message, MessageToolCall, Role};
pub use provider::{Provider, ProviderRequest, ProviderResponse, ToolDefinition, Usage};
pub use tool::{Tool, ToolCall, ToolContext, ToolRegistry, ToolResult};
