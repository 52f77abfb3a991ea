//! Tool trait: the abstraction over callable support operations.
//!
//! Tools are what the model can invoke mid-turn: look up a customer,
//! check a delivery, apply a resolution. Each tool sees a read-only view of
//! the session context and names the key its result is recorded under.

use crate::context::{FraudMode, SessionContext};
use crate::error::ToolError;
use crate::provider::ToolDefinition;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A request to execute a tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Unique call ID (matches the LLM's tool_call.id)
    pub id: String,

    /// Name of the tool to execute
    pub name: String,

    /// Arguments as a JSON value
    pub arguments: serde_json::Value,
}

/// The result of a tool execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// The call ID this result is for
    pub call_id: String,

    /// Whether the tool executed successfully
    pub success: bool,

    /// The output content
    pub output: String,

    /// Optional structured data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ToolResult {
    /// A successful result carrying a JSON payload.
    pub fn json(data: serde_json::Value) -> Self {
        Self {
            call_id: String::new(),
            success: true,
            output: data.to_string(),
            data: Some(data),
        }
    }

    /// The structured payload, or the output wrapped as a JSON string.
    pub fn payload(&self) -> serde_json::Value {
        self.data
            .clone()
            .unwrap_or_else(|| serde_json::Value::String(self.output.clone()))
    }
}

/// What a tool may read while it executes.
#[derive(Debug, Clone, Copy)]
pub struct ToolContext<'a> {
    pub session: &'a SessionContext,
    pub fraud_mode: FraudMode,
}

impl<'a> ToolContext<'a> {
    pub fn new(session: &'a SessionContext, fraud_mode: FraudMode) -> Self {
        Self { session, fraud_mode }
    }
}

/// The core Tool trait.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The unique name of this tool (e.g., "get_delivery_info").
    fn name(&self) -> &str;

    /// A description of what this tool does (sent to the LLM).
    fn description(&self) -> &str;

    /// JSON Schema describing this tool's parameters.
    fn parameters_schema(&self) -> serde_json::Value;

    /// Session-context key a successful result is stored under.
    fn context_key(&self) -> Option<&str> {
        None
    }

    /// Execute the tool with the given arguments.
    async fn execute(
        &self,
        arguments: serde_json::Value,
        ctx: ToolContext<'_>,
    ) -> std::result::Result<ToolResult, ToolError>;

    /// Convert this tool into a ToolDefinition for sending to the LLM.
    fn to_definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters_schema(),
        }
    }
}

/// A registry of available tools.
///
/// Definitions are handed to the model in registration order so the
/// request body is stable between turns.
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
    order: Vec<String>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Register a tool. Replaces any existing tool with the same name.
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        let name = tool.name().to_string();
        if self.tools.insert(name.clone(), tool).is_none() {
            self.order.push(name);
        }
    }

    /// Get a tool by name.
    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.get(name).map(|t| t.as_ref())
    }

    /// Get all tool definitions (for sending to the LLM).
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.order
            .iter()
            .filter_map(|name| self.tools.get(name))
            .map(|t| t.to_definition())
            .collect()
    }

    /// Execute a tool call.
    pub async fn execute(
        &self,
        call: &ToolCall,
        ctx: ToolContext<'_>,
    ) -> std::result::Result<ToolResult, ToolError> {
        let Some(tool) = self.tools.get(&call.name) else {
            tracing::debug!(tool = %call.name, "Requested tool is not registered");
            return Err(ToolError::NotFound(call.name.clone()));
        };
        tracing::debug!(tool = %call.name, call_id = %call.id, "Dispatching tool call");
        let mut result = tool.execute(call.arguments.clone(), ctx).await?;
        result.call_id = call.id.clone();
        Ok(result)
    }

    /// List all registered tool names.
    pub fn names(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
