//! Shared test helpers for agent tests.

use helpdesk_core::error::ProviderError;
use helpdesk_core::message::{Message, MessageToolCall};
use helpdesk_core::provider::{Provider, ProviderRequest, ProviderResponse, Usage};
use std::collections::VecDeque;
use std::sync::Mutex;

/// A mock provider that replays scripted replies and records every request.
///
/// Panics if more calls are made than replies provided.
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<Result<ProviderResponse, ProviderError>>>,
    requests: Mutex<Vec<ProviderRequest>>,
}

impl ScriptedProvider {
    pub fn new(replies: Vec<Result<ProviderResponse, ProviderError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// First call requests `tool_calls`, second call answers `answer`.
    pub fn tools_then_answer(tool_calls: Vec<MessageToolCall>, answer: &str) -> Self {
        Self::new(vec![
            Ok(make_tool_call_response(tool_calls)),
            Ok(make_text_response(answer)),
        ])
    }

    pub fn requests(&self) -> Vec<ProviderRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl Provider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted_mock"
    }

    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("ScriptedProvider: no more replies")
    }
}

/// Create a simple text response (no tool calls).
pub fn make_text_response(text: &str) -> ProviderResponse {
    ProviderResponse {
        message: Message::assistant(text),
        usage: Some(Usage {
            prompt_tokens: 10,
            completion_tokens: 5,
            total_tokens: 15,
        }),
        model: "mock-model".into(),
    }
}

/// Create a response that only requests tool calls.
pub fn make_tool_call_response(tool_calls: Vec<MessageToolCall>) -> ProviderResponse {
    let mut msg = Message::assistant("");
    msg.tool_calls = tool_calls;
    ProviderResponse {
        message: msg,
        usage: Some(Usage {
            prompt_tokens: 20,
            completion_tokens: 8,
            total_tokens: 28,
        }),
        model: "mock-model".into(),
    }
}

/// Helper to create a tool call.
pub fn make_tool_call(name: &str, args: serde_json::Value) -> MessageToolCall {
    MessageToolCall {
        id: format!("call_{name}"),
        name: name.to_string(),
        arguments: args.to_string(),
    }
}
