//! Drop-off evidence tool: the driver's photo and a map pin for where the
//! order was supposedly left.

use crate::args::{DEFAULT_ORDER_ID, string_arg};
use crate::fixtures;
use async_trait::async_trait;
use helpdesk_core::context::DROPOFF_INFO_KEY;
use helpdesk_core::error::ToolError;
use helpdesk_core::tool::{Tool, ToolContext, ToolResult};

pub struct DropoffPhotoAndMapTool;

#[async_trait]
impl Tool for DropoffPhotoAndMapTool {
    fn name(&self) -> &str {
        "get_dropoff_photo_and_map"
    }

    fn description(&self) -> &str {
        "Retrieves a photo and map of where the package was dropped off"
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
        Some(DROPOFF_INFO_KEY)
    }

    async fn execute(
        &self,
        arguments: serde_json::Value,
        ctx: ToolContext<'_>,
    ) -> Result<ToolResult, ToolError> {
        let order_id = string_arg(&arguments, "order_id", ctx.session.current_order_id(), DEFAULT_ORDER_ID);
        tracing::debug!(%order_id, "Fetching drop-off evidence");
        Ok(ToolResult::json(fixtures::dropoff_record()))
    }
}
