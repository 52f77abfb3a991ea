//! Argument extraction shared by the support tools.
//!
//! The stubs never fail on their arguments. A missing, blank, null or
//! non-string value falls back to the session context and then to the
//! value the stub data describes.

use serde_json::Value;

pub(crate) const DEFAULT_EMAIL: &str = "customer@example.com";
pub(crate) const DEFAULT_ORDER_ID: &str = "12346";
pub(crate) const DEFAULT_RESOLUTION: &str = "refund";

/// Read a string argument, else `context`, else `default`.
pub(crate) fn string_arg(arguments: &Value, name: &str, context: Option<&str>, default: &str) -> String {
    match arguments.get(name) {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        _ => context
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(default)
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn present_value_wins() {
        let args = json!({"email": "a@b.c"});
        assert_eq!(string_arg(&args, "email", Some("x@y.z"), DEFAULT_EMAIL), "a@b.c");
    }

    #[test]
    fn missing_uses_context() {
        assert_eq!(string_arg(&json!({}), "email", Some("x@y.z"), DEFAULT_EMAIL), "x@y.z");
        assert_eq!(
            string_arg(&json!({"email": null}), "email", Some("x@y.z"), DEFAULT_EMAIL),
            "x@y.z"
        );
        assert_eq!(
            string_arg(&json!({"email": "  "}), "email", Some("x@y.z"), DEFAULT_EMAIL),
            "x@y.z"
        );
    }

    #[test]
    fn missing_without_context_uses_default() {
        assert_eq!(
            string_arg(&json!({}), "resolution", None, DEFAULT_RESOLUTION),
            "refund"
        );
    }

    #[test]
    fn wrong_type_falls_back() {
        assert_eq!(
            string_arg(&json!({"order_id": 12346}), "order_id", Some("999"), DEFAULT_ORDER_ID),
            "999"
        );
        assert_eq!(
            string_arg(&json!({"order_id": [1]}), "order_id", None, DEFAULT_ORDER_ID),
            "12346"
        );
    }
}
