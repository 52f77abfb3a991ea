//! Fraud check tool.
//!
//! Honors the session's `FraudMode`: when an override is active the tool
//! answers with just `{"is_fraud": <bool>}` so the operator can steer the
//! agent down either compensation branch.

use crate::args::{DEFAULT_EMAIL, string_arg};
use crate::fixtures;
use async_trait::async_trait;
use helpdesk_core::context::FRAUD_STATUS_KEY;
use helpdesk_core::error::ToolError;
use helpdesk_core::tool::{Tool, ToolContext, ToolResult};
use tracing::debug;

pub struct FraudCheckTool;

#[async_trait]
impl Tool for FraudCheckTool {
    fn name(&self) -> &str {
        "check_is_fraud_user"
    }

    fn description(&self) -> &str {
        "Checks if the customer account is flagged for suspicious activity"
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
        Some(FRAUD_STATUS_KEY)
    }

    async fn execute(
        &self,
        arguments: serde_json::Value,
        ctx: ToolContext<'_>,
    ) -> Result<ToolResult, ToolError> {
        if let Some(is_fraud) = ctx.fraud_mode.forced() {
            debug!(mode = %ctx.fraud_mode, "Fraud check overridden");
            return Ok(ToolResult::json(serde_json::json!({ "is_fraud": is_fraud })));
        }

        let email = string_arg(&arguments, "email", ctx.session.customer_email(), DEFAULT_EMAIL);
        debug!(%email, "Running fraud check");
        Ok(ToolResult::json(fixtures::fraud_report()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helpdesk_core::context::{FraudMode, SessionContext};

    async fn check(mode: FraudMode) -> serde_json::Value {
        let session = SessionContext::default();
        FraudCheckTool
            .execute(
                serde_json::json!({"email": "customer@example.com"}),
                ToolContext::new(&session, mode),
            )
            .await
            .unwrap()
            .payload()
    }

    #[tokio::test]
    async fn auto_returns_full_report() {
        let data = check(FraudMode::Auto).await;
        assert_eq!(data["is_fraud"], false);
        assert_eq!(data["risk_score"], 0.1);
        assert_eq!(data["account_age_days"], 365);
    }

    #[tokio::test]
    async fn clean_override_is_minimal() {
        assert_eq!(check(FraudMode::Clean).await, serde_json::json!({"is_fraud": false}));
    }

    #[tokio::test]
    async fn flagged_override_is_minimal() {
        assert_eq!(check(FraudMode::Flagged).await, serde_json::json!({"is_fraud": true}));
    }

    #[tokio::test]
    async fn override_skips_argument_validation() {
        let session = SessionContext::default();
        let result = FraudCheckTool
            .execute(serde_json::json!({}), ToolContext::new(&session, FraudMode::Flagged))
            .await
            .unwrap();
        assert_eq!(result.payload()["is_fraud"], true);
    }

    #[tokio::test]
    async fn auto_without_email_anywhere_returns_report() {
        let session = SessionContext::parse(r#"{"note": "x"}"#).unwrap();
        let result = FraudCheckTool
            .execute(serde_json::json!({}), ToolContext::new(&session, FraudMode::Auto))
            .await
            .unwrap();
        assert_eq!(result.payload(), fixtures::fraud_report());
    }
}
