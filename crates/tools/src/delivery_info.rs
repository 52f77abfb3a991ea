//! Delivery status tool.

use crate::args::{DEFAULT_ORDER_ID, string_arg};
use crate::fixtures;
use async_trait::async_trait;
use helpdesk_core::context::DELIVERY_INFO_KEY;
use helpdesk_core::error::ToolError;
use helpdesk_core::tool::{Tool, ToolContext, ToolResult};
use tracing::debug;

pub struct DeliveryInfoTool;

#[async_trait]
impl Tool for DeliveryInfoTool {
    fn name(&self) -> &str {
        "get_delivery_info"
    }

    fn description(&self) -> &str {
        "Retrieves the latest shipping and delivery status"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "order_id": { "type": "string" }
            },
            "required": ["order_id"]
        })
    }

    fn context_key(&self) -> Option<&str> {
        Some(DELIVERY_INFO_KEY)
    }

    async fn execute(
        &self,
        arguments: serde_json::Value,
        ctx: ToolContext<'_>,
    ) -> Result<ToolResult, ToolError> {
        let order_id = string_arg(&arguments, "order_id", ctx.session.current_order_id(), DEFAULT_ORDER_ID);
        debug!(%order_id, "Looking up delivery status");
        Ok(ToolResult::json(fixtures::delivery_status()))
    }
}
