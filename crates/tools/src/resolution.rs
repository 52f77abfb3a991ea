//! Resolution tool: applies a refund, replacement, or expedited shipping.
//!
//! The stub always confirms a completed refund for the missing order,
//! whatever was requested.

use crate::args::{DEFAULT_ORDER_ID, DEFAULT_RESOLUTION, string_arg};
use crate::fixtures;
use async_trait::async_trait;
use helpdesk_core::context::RESOLUTION_KEY;
use helpdesk_core::error::ToolError;
use helpdesk_core::tool::{Tool, ToolContext, ToolResult};
use tracing::info;

pub struct ResolutionTool;

#[async_trait]
impl Tool for ResolutionTool {
    fn name(&self) -> &str {
        "provide_resolution"
    }

    fn description(&self) -> &str {
        "Applies a resolution such as refund, replacement, or expedited shipping"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "order_id": { "type": "string" },
                "resolution": { "type": "string" }
            },
            "required": ["order_id", "resolution"]
        })
    }

    fn context_key(&self) -> Option<&str> {
        Some(RESOLUTION_KEY)
    }

    async fn execute(
        &self,
        arguments: serde_json::Value,
        ctx: ToolContext<'_>,
    ) -> Result<ToolResult, ToolError> {
        let order_id = string_arg(&arguments, "order_id", ctx.session.current_order_id(), DEFAULT_ORDER_ID);
        let resolution = string_arg(&arguments, "resolution", None, DEFAULT_RESOLUTION);
        info!(%order_id, %resolution, "Applying resolution");
        Ok(ToolResult::json(fixtures::resolution_receipt()))
    }
}
