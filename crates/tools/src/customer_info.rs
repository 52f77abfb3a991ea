//! Customer lookup tool, a stub that returns a fixed profile.
//!
//! In production this would query the customer service; the stub lets the
//! orchestration loop be exercised end-to-end without any backend.

use crate::args::{DEFAULT_EMAIL, string_arg};
use crate::fixtures;
use async_trait::async_trait;
use helpdesk_core::context::CUSTOMER_INFO_KEY;
use helpdesk_core::error::ToolError;
use helpdesk_core::tool::{Tool, ToolContext, ToolResult};
use tracing::debug;

pub struct CustomerInfoTool;

#[async_trait]
impl Tool for CustomerInfoTool {
    fn name(&self) -> &str {
        "get_customer_info"
    }

    fn description(&self) -> &str {
        "Retrieves customer profile and order history"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "email": { "type": "string" }
            },
            "required": ["email"]
        })
    }

    fn context_key(&self) -> Option<&str> {
        Some(CUSTOMER_INFO_KEY)
    }

    async fn execute(
        &self,
        arguments: serde_json::Value,
        ctx: ToolContext<'_>,
    ) -> Result<ToolResult, ToolError> {
        let email = string_arg(&arguments, "email", ctx.session.customer_email(), DEFAULT_EMAIL);
        debug!(%email, "Looking up customer");
        Ok(ToolResult::json(fixtures::customer_profile()))
    }
}
