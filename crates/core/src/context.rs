//! Session context: the mutable JSON object shared by the user, the tools,
//! and the system prompt.
//!
//! Tools record their results under well-known keys, the user may replace
//! the whole object, and every model call embeds its current state.

use crate::error::ContextError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Key under which the customer-info lookup records its result.
pub const CUSTOMER_INFO_KEY: &str = "customer_info";
/// Key under which the delivery lookup records its result.
pub const DELIVERY_INFO_KEY: &str = "delivery_info";
/// Key under which the drop-off photo/map lookup records its result.
pub const DROPOFF_INFO_KEY: &str = "dropoff_info";
/// Key under which the fraud check records its result.
pub const FRAUD_STATUS_KEY: &str = "fraud_status";
/// Key under which an applied resolution is recorded.
pub const RESOLUTION_KEY: &str = "resolution";
/// Key holding the most recent failed tool call.
pub const LAST_ERROR_KEY: &str = "last_error";

/// An in-memory JSON object describing the current support case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionContext {
    entries: Map<String, Value>,
}

impl SessionContext {
    pub fn new(entries: Map<String, Value>) -> Self {
        Self { entries }
    }

    /// Build a context from an arbitrary JSON value. Only objects are accepted.
    pub fn from_value(value: Value) -> Result<Self, ContextError> {
        match value {
            Value::Object(entries) => Ok(Self { entries }),
            other => Err(ContextError::NotAnObject(json_kind(&other))),
        }
    }

    /// Parse user-supplied JSON text into a context.
    pub fn parse(text: &str) -> Result<Self, ContextError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| ContextError::InvalidJson(e.to_string()))?;
        Self::from_value(value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Insert or overwrite a key, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.entries
    }

    /// Replace the whole context with another one.
    pub fn replace(&mut self, other: SessionContext) {
        self.entries = other.entries;
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.entries.clone())
    }

    /// Two-space indented JSON, as shown to the operator.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.entries).unwrap_or_else(|_| "{}".into())
    }

    /// Single-line JSON with no spaces after separators, as embedded in the
    /// system prompt.
    pub fn to_compact_json(&self) -> String {
        serde_json::to_string(&self.entries).unwrap_or_else(|_| "{}".into())
    }

    /// `customer.email`
    pub fn customer_email(&self) -> Option<&str> {
        self.lookup_str(&["customer", "email"])
    }

    /// `customer.name`
    pub fn customer_name(&self) -> Option<&str> {
        self.lookup_str(&["customer", "name"])
    }

    /// `current_order.order_id`
    pub fn current_order_id(&self) -> Option<&str> {
        self.lookup_str(&["current_order", "order_id"])
    }

    fn lookup_str(&self, path: &[&str]) -> Option<&str> {
        let (first, rest) = path.split_first()?;
        let mut value = self.entries.get(*first)?;
        for segment in rest {
            value = value.get(*segment)?;
        }
        value.as_str()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// How the fraud check answers.
///
/// `Clean` and `Flagged` let an operator force either branch of the
/// agent's compensation rules without touching the stub data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FraudMode {
    /// Return the stub fraud report
    Auto,
    /// Always report `{"is_fraud": false}`
    #[default]
    Clean,
    /// Always report `{"is_fraud": true}`
    Flagged,
}

impl FraudMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FraudMode::Auto => "auto",
            FraudMode::Clean => "clean",
            FraudMode::Flagged => "flagged",
        }
    }

    /// The forced `is_fraud` answer, or `None` in auto mode.
    pub fn forced(&self) -> Option<bool> {
        match self {
            FraudMode::Auto => None,
            FraudMode::Clean => Some(false),
            FraudMode::Flagged => Some(true),
        }
    }
}

impl fmt::Display for FraudMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FraudMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" | "off" | "none" => Ok(FraudMode::Auto),
            "clean" | "false" => Ok(FraudMode::Clean),
            "flagged" | "true" => Ok(FraudMode::Flagged),
            other => Err(format!(
                "unknown fraud mode '{other}' (expected auto, clean, or flagged)"
            )),
        }
    }
}
