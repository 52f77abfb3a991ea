//! OpenAI-compatible provider implementation.
//!
//! Talks to any endpoint exposing `/v1/chat/completions` with function
//! calling: OpenAI itself, Azure-style proxies, Ollama, vLLM, and so on.

use async_trait::async_trait;
use helpdesk_core::error::ProviderError;
use helpdesk_core::message::{Message, MessageToolCall, Role};
use helpdesk_core::provider::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// An OpenAI-compatible LLM provider.
pub struct OpenAiCompatProvider {
    name: String,
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl OpenAiCompatProvider {
    /// Create a new OpenAI-compatible provider with the default 120s timeout.
    pub fn new(
        name: impl Into<String>,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ProviderError> {
        Self::with_timeout(name, base_url, api_key, Duration::from_secs(120))
    }

    /// Create a provider with an explicit per-request timeout.
    pub fn with_timeout(
        name: impl Into<String>,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::NotConfigured(format!("HTTP client: {e}")))?;

        Ok(Self {
            name: name.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client,
        })
    }

    /// Create an OpenAI provider (convenience constructor).
    pub fn openai(api_key: impl Into<String>) -> Result<Self, ProviderError> {
        Self::new("openai", "https://api.openai.com/v1", api_key)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Convert our Message types to OpenAI API format.
    fn to_api_messages(messages: &[Message]) -> Vec<ApiMessage> {
        messages
            .iter()
            .map(|m| {
                let tool_calls: Option<Vec<ApiToolCall>> = if m.tool_calls.is_empty() {
                    None
                } else {
                    Some(
                        m.tool_calls
                            .iter()
                            .map(|tc| ApiToolCall {
                                id: tc.id.clone(),
                                r#type: "function".into(),
                                function: ApiFunction {
                                    name: tc.name.clone(),
                                    arguments: tc.arguments.clone(),
                                },
                            })
                            .collect(),
                    )
                };

                // A tool-calling assistant turn carries no text.
                let content = if tool_calls.is_some() && m.content.is_empty() {
                    None
                } else {
                    Some(m.content.clone())
                };

                ApiMessage {
                    role: match m.role {
                        Role::User => "user".into(),
                        Role::Assistant => "assistant".into(),
                        Role::System => "system".into(),
                        Role::Tool => "tool".into(),
                    },
                    content,
                    tool_calls,
                    tool_call_id: m.tool_call_id.clone(),
                }
            })
            .collect()
    }

    /// Convert tool definitions to OpenAI API format.
    fn to_api_tools(tools: &[ToolDefinition]) -> Vec<ApiToolDefinition> {
        tools
            .iter()
            .map(|t| ApiToolDefinition {
                r#type: "function".into(),
                function: ApiToolFunction {
                    name: t.name.clone(),
                    description: t.description.clone(),
                    parameters: t.parameters.clone(),
                },
            })
            .collect()
    }

    fn request_body(request: &ProviderRequest) -> serde_json::Value {
        let mut body = serde_json::json!({
            "model": request.model,
            "messages": Self::to_api_messages(&request.messages),
            "temperature": request.temperature,
        });

        if let Some(max_tokens) = request.max_tokens {
            body["max_tokens"] = serde_json::json!(max_tokens);
        }

        if !request.tools.is_empty() {
            body["tools"] = serde_json::json!(Self::to_api_tools(&request.tools));
        }

        body
    }

    fn transport_error(e: reqwest::Error) -> ProviderError {
        if e.is_timeout() {
            ProviderError::Timeout(e.to_string())
        } else {
            ProviderError::Network(e.to_string())
        }
    }

    fn into_provider_response(api_response: ApiResponse) -> Result<ProviderResponse, ProviderError> {
        let choice = api_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::ApiError {
                status_code: 200,
                message: "No choices in response".into(),
            })?;

        let mut message = Message::assistant(choice.message.content.unwrap_or_default());
        message.tool_calls = choice
            .message
            .tool_calls
            .unwrap_or_default()
            .into_iter()
            .map(|tc| MessageToolCall {
                id: tc.id,
                name: tc.function.name,
                arguments: tc.function.arguments,
            })
            .collect();

        let usage = api_response.usage.map(|u| Usage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });

        Ok(ProviderResponse {
            message,
            usage,
            model: api_response.model,
        })
    }
}

#[async_trait]
impl helpdesk_core::Provider for OpenAiCompatProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(
        &self,
        request: ProviderRequest,
    ) -> std::result::Result<ProviderResponse, ProviderError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = Self::request_body(&request);

        debug!(
            provider = %self.name,
            model = %request.model,
            messages = request.messages.len(),
            tools = request.tools.len(),
            "Sending completion request"
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status().as_u16();

        if status == 429 {
            let retry_after_secs = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
                .unwrap_or(5);
            return Err(ProviderError::RateLimited { retry_after_secs });
        }

        if status == 401 || status == 403 {
            return Err(ProviderError::AuthenticationFailed(
                "Invalid API key or insufficient permissions".into(),
            ));
        }

        if status == 404 {
            return Err(ProviderError::ModelNotFound(request.model));
        }

        if status != 200 {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status, body = %error_body, "Provider returned error");
            return Err(ProviderError::ApiError {
                status_code: status,
                message: error_body,
            });
        }

        let api_response: ApiResponse =
            response.json().await.map_err(|e| ProviderError::ApiError {
                status_code: 200,
                message: format!("Failed to parse response: {e}"),
            })?;

        Self::into_provider_response(api_response)
    }

    async fn list_models(&self) -> std::result::Result<Vec<String>, ProviderError> {
        let url = format!("{}/models", self.base_url);
        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            return Ok(Vec::new());
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let models = body["data"]
            .as_array()
            .map(|arr| {
                arr.iter()
                    .filter_map(|m| m["id"].as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default();

        Ok(models)
    }

    async fn health_check(&self) -> std::result::Result<bool, ProviderError> {
        let url = format!("{}/models", self.base_url);
        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .map_err(Self::transport_error)?;

        Ok(response.status().is_success())
    }
}

// --- OpenAI API types (internal) ---

#[derive(Debug, Serialize, Deserialize)]
struct ApiMessage {
    role: String,
    // Serialized even when None: tool-calling assistant turns send `null`.
    content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tool_calls: Option<Vec<ApiToolCall>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tool_call_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ApiToolCall {
    id: String,
    r#type: String,
    function: ApiFunction,
}

#[derive(Debug, Serialize, Deserialize)]
struct ApiFunction {
    name: String,
    arguments: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct ApiToolDefinition {
    r#type: String,
    function: ApiToolFunction,
}

#[derive(Debug, Serialize, Deserialize)]
struct ApiToolFunction {
    name: String,
    description: String,
    parameters: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    model: String,
    choices: Vec<ApiChoice>,
    usage: Option<ApiUsage>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiMessage,
}

#[derive(Debug, Deserialize)]
struct ApiUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
    use helpdesk_core::Provider;
    use std::sync::{Arc, Mutex};

    #[test]
    fn openai_constructor() {
        let provider = OpenAiCompatProvider::openai("sk-test").unwrap();
        assert_eq!(provider.name(), "openai");
        assert_eq!(provider.base_url(), "https://api.openai.com/v1");
    }

    #[test]
    fn trailing_slash_trimmed() {
        let provider = OpenAiCompatProvider::new("local", "http://localhost:11434/v1/", "x").unwrap();
        assert_eq!(provider.base_url(), "http://localhost:11434/v1");
    }

    #[test]
    fn message_conversion() {
        let messages = vec![Message::system("You are helpful"), Message::user("Hello")];
        let api_messages = OpenAiCompatProvider::to_api_messages(&messages);
        assert_eq!(api_messages.len(), 2);
        assert_eq!(api_messages[0].role, "system");
        assert_eq!(api_messages[1].role, "user");
        assert_eq!(api_messages[1].content.as_deref(), Some("Hello"));
    }

    #[test]
    fn tool_call_message_sends_null_content() {
        let msg = Message::assistant_tool_call(MessageToolCall {
            id: "call_1".into(),
            name: "get_delivery_info".into(),
            arguments: r#"{"order_id":"12346"}"#.into(),
        });
        let api_msgs = OpenAiCompatProvider::to_api_messages(&[msg]);
        let json = serde_json::to_value(&api_msgs[0]).unwrap();
        assert!(json["content"].is_null());
        assert_eq!(json["tool_calls"][0]["type"], "function");
        assert_eq!(json["tool_calls"][0]["function"]["name"], "get_delivery_info");
    }

    #[test]
    fn message_conversion_tool_response() {
        let msg = Message::tool_result("call_1", r#"{"status":"never_delivered"}"#);
        let api_msgs = OpenAiCompatProvider::to_api_messages(&[msg]);
        assert_eq!(api_msgs[0].role, "tool");
        assert_eq!(api_msgs[0].tool_call_id.as_deref(), Some("call_1"));
    }

    #[test]
    fn request_body_omits_tools_when_empty() {
        let mut request = ProviderRequest {
            model: "gpt-4".into(),
            messages: vec![Message::user("hi")],
            temperature: 1.0,
            max_tokens: None,
            tools: vec![],
        };
        let body = OpenAiCompatProvider::request_body(&request);
        assert!(body.get("tools").is_none());
        assert!(body.get("max_tokens").is_none());

        request.tools.push(ToolDefinition {
            name: "check_is_fraud_user".into(),
            description: "fraud".into(),
            parameters: serde_json::json!({"type": "object"}),
        });
        request.max_tokens = Some(256);
        let body = OpenAiCompatProvider::request_body(&request);
        assert_eq!(body["tools"][0]["function"]["name"], "check_is_fraud_user");
        assert_eq!(body["max_tokens"], 256);
    }

    #[test]
    fn parse_tool_call_response() {
        let data = r#"{
            "model": "gpt-4-0613",
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": null,
                    "tool_calls": [{
                        "id": "call_abc",
                        "type": "function",
                        "function": {"name": "check_is_fraud_user", "arguments": "{\"email\":\"customer@example.com\"}"}
                    }]
                }
            }],
            "usage": {"prompt_tokens": 120, "completion_tokens": 20, "total_tokens": 140}
        }"#;
        let parsed: ApiResponse = serde_json::from_str(data).unwrap();
        let response = OpenAiCompatProvider::into_provider_response(parsed).unwrap();
        assert_eq!(response.model, "gpt-4-0613");
        assert!(response.message.content.is_empty());
        assert_eq!(response.message.tool_calls.len(), 1);
        assert_eq!(response.message.tool_calls[0].id, "call_abc");
        assert_eq!(response.usage.unwrap().total_tokens, 140);
    }

    #[test]
    fn empty_choices_is_an_error() {
        let parsed: ApiResponse =
            serde_json::from_str(r#"{"model": "gpt-4", "choices": []}"#).unwrap();
        let err = OpenAiCompatProvider::into_provider_response(parsed).unwrap_err();
        assert!(matches!(err, ProviderError::ApiError { .. }));
    }

    // --- Wire tests against a local stub server ---

    type Captured = Arc<Mutex<Vec<serde_json::Value>>>;

    async fn spawn_stub(status: StatusCode, reply: serde_json::Value) -> (String, Captured) {
        let captured: Captured = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new()
            .route(
                "/v1/chat/completions",
                post(
                    move |State(seen): State<Captured>, Json(body): Json<serde_json::Value>| {
                        let reply = reply.clone();
                        async move {
                            seen.lock().unwrap().push(body);
                            (status, Json(reply))
                        }
                    },
                ),
            )
            .with_state(captured.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{addr}/v1"), captured)
    }

    fn request_with_tools() -> ProviderRequest {
        ProviderRequest {
            model: "gpt-4".into(),
            messages: vec![Message::system("rules"), Message::user("Where is my food?")],
            temperature: 1.0,
            max_tokens: None,
            tools: vec![ToolDefinition {
                name: "get_delivery_info".into(),
                description: "Retrieves the latest shipping and delivery status".into(),
                parameters: serde_json::json!({
                    "type": "object",
                    "properties": {"order_id": {"type": "string"}},
                    "required": ["order_id"]
                }),
            }],
        }
    }

    #[tokio::test]
    async fn complete_round_trip_over_http() {
        let (base, captured) = spawn_stub(
            StatusCode::OK,
            serde_json::json!({
                "model": "gpt-4",
                "choices": [{"message": {"role": "assistant", "content": "On its way."}}]
            }),
        )
        .await;

        let provider = OpenAiCompatProvider::new("stub", base, "sk-test").unwrap();
        let response = provider.complete(request_with_tools()).await.unwrap();
        assert_eq!(response.message.content, "On its way.");
        assert!(response.message.tool_calls.is_empty());

        let bodies = captured.lock().unwrap();
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0]["model"], "gpt-4");
        assert_eq!(bodies[0]["messages"][0]["role"], "system");
        assert_eq!(bodies[0]["tools"][0]["function"]["name"], "get_delivery_info");
    }

    #[tokio::test]
    async fn unauthorized_maps_to_auth_error() {
        let (base, _) = spawn_stub(StatusCode::UNAUTHORIZED, serde_json::json!({})).await;
        let provider = OpenAiCompatProvider::new("stub", base, "bad").unwrap();
        let err = provider.complete(request_with_tools()).await.unwrap_err();
        assert!(matches!(err, ProviderError::AuthenticationFailed(_)));
    }

    #[tokio::test]
    async fn rate_limit_maps_to_rate_limited() {
        let (base, _) = spawn_stub(StatusCode::TOO_MANY_REQUESTS, serde_json::json!({})).await;
        let provider = OpenAiCompatProvider::new("stub", base, "sk").unwrap();
        let err = provider.complete(request_with_tools()).await.unwrap_err();
        assert!(matches!(err, ProviderError::RateLimited { retry_after_secs: 5 }));
    }

    #[tokio::test]
    async fn server_error_maps_to_api_error() {
        let (base, _) = spawn_stub(
            StatusCode::INTERNAL_SERVER_ERROR,
            serde_json::json!({"error": "boom"}),
        )
        .await;
        let provider = OpenAiCompatProvider::new("stub", base, "sk").unwrap();
        let err = provider.complete(request_with_tools()).await.unwrap_err();
        match err {
            ProviderError::ApiError { status_code, message } => {
                assert_eq!(status_code, 500);
                assert!(message.contains("boom"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
