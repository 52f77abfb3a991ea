//! Provider trait: the abstraction over LLM backends.
//!
//! A Provider knows how to send a conversation (plus optional tool
//! definitions) to a chat-completion model and get one message back.

use crate::error::ProviderError;
use crate::message::Message;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Configuration for a provider request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderRequest {
    /// The model to use (e.g., "gpt-4")
    pub model: String,

    /// The conversation messages, system prompt first
    pub messages: Vec<Message>,

    /// Sampling temperature
    pub temperature: f32,

    /// Maximum tokens to generate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Available tools the model can call. Empty means tools are not offered.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<ToolDefinition>,
}

/// A tool definition sent to the LLM so it knows what tools it can call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// The tool name
    pub name: String,

    /// Description of what the tool does
    pub description: String,

    /// JSON Schema describing the tool's parameters
    pub parameters: serde_json::Value,
}

/// A complete response from a provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderResponse {
    /// The generated message
    pub message: Message,

    /// Token usage statistics
    pub usage: Option<Usage>,

    /// Which model actually responded (may differ from requested)
    pub model: String,
}

/// Token usage information.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl Usage {
    /// Sum two usage records.
    pub fn add(self, other: Usage) -> Usage {
        Usage {
            prompt_tokens: self.prompt_tokens + other.prompt_tokens,
            completion_tokens: self.completion_tokens + other.completion_tokens,
            total_tokens: self.total_tokens + other.total_tokens,
        }
    }
}

/// The core Provider trait.
///
/// The orchestrator calls `complete()` without knowing which backend is
/// behind it, which is also what lets tests script model replies.
#[async_trait]
pub trait Provider: Send + Sync {
    /// A human-readable name for this provider (e.g., "openai").
    fn name(&self) -> &str;

    /// Send a request and get a complete response.
    async fn complete(
        &self,
        request: ProviderRequest,
    ) -> std::result::Result<ProviderResponse, ProviderError>;

    /// List available models for this provider.
    async fn list_models(&self) -> std::result::Result<Vec<String>, ProviderError> {
        Ok(Vec::new())
    }

    /// Health check: can we reach the provider?
    async fn health_check(&self) -> std::result::Result<bool, ProviderError> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tools_omitted_when_empty() {
        let req = ProviderRequest {
            model: "gpt-4".into(),
            messages: vec![],
            temperature: 1.0,
            max_tokens: None,
            tools: vec![],
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("tools").is_none());
        assert!(json.get("max_tokens").is_none());
    }

    #[test]
    fn tool_definition_serialization() {
        let tool = ToolDefinition {
            name: "get_delivery_info".into(),
            description: "Retrieves the latest shipping and delivery status".into(),
            parameters: serde_json::json!({
                "type": "object",
                "properties": { "order_id": { "type": "string" } },
                "required": ["order_id"]
            }),
        };
        let json = serde_json::to_string(&tool).unwrap();
        assert!(json.contains("get_delivery_info"));
        assert!(json.contains("order_id"));
    }

    #[test]
    fn usage_adds_fieldwise() {
        let a = Usage { prompt_tokens: 10, completion_tokens: 2, total_tokens: 12 };
        let b = Usage { prompt_tokens: 5, completion_tokens: 3, total_tokens: 8 };
        assert_eq!(
            a.add(b),
            Usage { prompt_tokens: 15, completion_tokens: 5, total_tokens: 20 }
        );
    }
}
