//! The two-call turn orchestrator.

use crate::prompt::{self, FALLBACK_REPLY};
use crate::session::Session;
use chrono::Utc;
use helpdesk_core::context::{LAST_ERROR_KEY, SessionContext};
use helpdesk_core::error::{ContextError, Error, ToolError};
use helpdesk_core::event::{DomainEvent, EventBus, ModelPhase};
use helpdesk_core::message::{Message, MessageToolCall};
use helpdesk_core::provider::{Provider, ProviderRequest, ProviderResponse, ToolDefinition, Usage};
use helpdesk_core::tool::{ToolCall, ToolContext, ToolRegistry, ToolResult};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// One executed tool call, as a front-end would display it.
#[derive(Debug, Clone, Serialize)]
pub struct ToolInvocation {
    pub call_id: String,
    pub name: String,
    /// Raw argument string the model produced
    pub arguments: String,
    /// The payload sent back to the model (`{"error": ...}` on failure)
    pub response: serde_json::Value,
    pub success: bool,
    pub duration_ms: u64,
}

/// What a completed turn produced.
#[derive(Debug, Clone, Serialize)]
pub struct TurnReport {
    pub reply: String,
    /// True when the model returned no text and the apology was used
    pub fallback: bool,
    pub invocations: Vec<ToolInvocation>,
    pub usage: Usage,
}

/// Drives a [`Session`] through model calls and tool executions.
pub struct SupportAgent {
    provider: Arc<dyn Provider>,
    model: String,
    temperature: f32,
    max_tokens: Option<u32>,
    tools: Arc<ToolRegistry>,
    event_bus: Arc<EventBus>,
}

impl SupportAgent {
    pub fn new(
        provider: Arc<dyn Provider>,
        model: impl Into<String>,
        temperature: f32,
        tools: Arc<ToolRegistry>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature,
            max_tokens: None,
            tools,
            event_bus,
        }
    }

    /// Set the max tokens per model response.
    pub fn with_max_tokens(mut self, max: Option<u32>) -> Self {
        self.max_tokens = max;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    pub fn event_bus(&self) -> &Arc<EventBus> {
        &self.event_bus
    }

    /// Process one user message.
    ///
    /// Returns `Ok(None)` for blank input without calling the model. A
    /// provider failure appends an assistant `Error: ...` message and returns
    /// the error; the user message and completed tool exchanges stay in
    /// history.
    pub async fn process_turn(
        &self,
        session: &mut Session,
        user_text: &str,
    ) -> Result<Option<TurnReport>, Error> {
        let user_text = user_text.trim();
        if user_text.is_empty() {
            return Ok(None);
        }

        let conversation_id = session.conversation.id.to_string();
        info!(%conversation_id, "Processing turn");
        self.event_bus.publish(DomainEvent::TurnStarted {
            conversation_id: conversation_id.clone(),
            content_preview: user_text.chars().take(100).collect(),
            timestamp: Utc::now(),
        });

        session.conversation.push(Message::user(user_text));

        let selection = match self
            .call_model(session, ModelPhase::ToolSelection, self.tools.definitions())
            .await
        {
            Ok(response) => response,
            Err(e) => return Err(record_failure(session, e)),
        };
        let mut usage = selection.usage.unwrap_or_default();

        let mut invocations = Vec::with_capacity(selection.message.tool_calls.len());
        for call in &selection.message.tool_calls {
            let invocation = self.handle_tool_call(session, call).await;
            session.conversation.push(Message::assistant_tool_call(call.clone()));
            session
                .conversation
                .push(Message::tool_result(&call.id, invocation.response.to_string()));
            invocations.push(invocation);
        }

        let answer = match self
            .call_model(session, ModelPhase::FinalAnswer, Vec::new())
            .await
        {
            Ok(response) => response,
            Err(e) => return Err(record_failure(session, e)),
        };
        usage = usage.add(answer.usage.unwrap_or_default());

        let fallback = answer.message.content.trim().is_empty();
        let reply = if fallback {
            warn!(%conversation_id, "Model returned no text, using fallback reply");
            FALLBACK_REPLY.to_string()
        } else {
            answer.message.content
        };
        session.conversation.push(Message::assistant(&reply));

        info!(
            %conversation_id,
            tools = invocations.len(),
            tokens = usage.total_tokens,
            "Turn complete"
        );

        Ok(Some(TurnReport {
            reply,
            fallback,
            invocations,
            usage,
        }))
    }

    async fn call_model(
        &self,
        session: &Session,
        phase: ModelPhase,
        tools: Vec<ToolDefinition>,
    ) -> Result<ProviderResponse, Error> {
        let mut messages = Vec::with_capacity(session.conversation.len() + 1);
        messages.push(Message::system(prompt::system_prompt(
            session.brand(),
            session.context(),
        )));
        messages.extend(session.history().iter().cloned());

        let request = ProviderRequest {
            model: self.model.clone(),
            messages,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            tools,
        };

        debug!(?phase, messages = request.messages.len(), tools = request.tools.len(), "Calling model");

        match self.provider.complete(request).await {
            Ok(response) => {
                self.event_bus.publish(DomainEvent::ModelCalled {
                    conversation_id: session.conversation.id.to_string(),
                    phase,
                    model: response.model.clone(),
                    tool_calls: response.message.tool_calls.len(),
                    tokens_used: response.usage.map(|u| u.total_tokens).unwrap_or(0),
                    timestamp: Utc::now(),
                });
                Ok(response)
            }
            Err(e) => {
                warn!(provider = self.provider.name(), ?phase, error = %e, "Model call failed");
                self.event_bus.publish(DomainEvent::ErrorOccurred {
                    context: format!("model call ({phase:?})"),
                    error_message: e.to_string(),
                    timestamp: Utc::now(),
                });
                Err(e.into())
            }
        }
    }

    /// Execute one model-requested tool call and record its outcome.
    ///
    /// A success is stored in the session context under the tool's key. A
    /// failure is stored under `last_error` and returned as
    /// `{"error": "<message>"}` so the model sees it. Never fails the turn.
    pub async fn handle_tool_call(&self, session: &mut Session, call: &MessageToolCall) -> ToolInvocation {
        let started = Instant::now();
        let outcome = self.run_tool(session, call).await;
        let duration_ms = started.elapsed().as_millis() as u64;

        let (response, success) = match outcome {
            Ok(result) => {
                let payload = result.payload();
                if let Some(key) = self.tools.get(&call.name).and_then(|t| t.context_key()) {
                    session.context_mut().insert(key, payload.clone());
                    self.publish_context_update(key);
                }
                (payload, true)
            }
            Err(e) => {
                warn!(tool = %call.name, error = %e, "Tool call failed");
                let payload = serde_json::json!({ "error": e.to_string() });
                session.context_mut().insert(LAST_ERROR_KEY, payload.clone());
                self.publish_context_update(LAST_ERROR_KEY);
                (payload, false)
            }
        };

        debug!(tool = %call.name, success, duration_ms, "Tool executed");
        self.event_bus.publish(DomainEvent::ToolExecuted {
            tool_name: call.name.clone(),
            arguments: call.arguments.clone(),
            success,
            duration_ms,
            timestamp: Utc::now(),
        });

        ToolInvocation {
            call_id: call.id.clone(),
            name: call.name.clone(),
            arguments: call.arguments.clone(),
            response,
            success,
            duration_ms,
        }
    }

    async fn run_tool(&self, session: &Session, call: &MessageToolCall) -> Result<ToolResult, ToolError> {
        let arguments = if call.arguments.trim().is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&call.arguments).map_err(|e| {
                ToolError::InvalidArguments(format!("arguments are not valid JSON: {e}"))
            })?
        };

        let tool_call = ToolCall {
            id: call.id.clone(),
            name: call.name.clone(),
            arguments,
        };
        let ctx = ToolContext::new(session.context(), session.fraud_mode());
        self.tools.execute(&tool_call, ctx).await
    }

    fn publish_context_update(&self, key: &str) {
        self.event_bus.publish(DomainEvent::ContextUpdated {
            key: key.to_string(),
            timestamp: Utc::now(),
        });
    }

    /// Replace the session context with operator-supplied JSON text.
    ///
    /// Invalid JSON or a non-object leaves the context untouched.
    pub fn replace_context_json(&self, session: &mut Session, text: &str) -> Result<(), ContextError> {
        self.replace_context(session, SessionContext::parse(text)?);
        Ok(())
    }

    /// Replace the session context wholesale.
    pub fn replace_context(&self, session: &mut Session, context: SessionContext) {
        session.replace_context(context);
        info!(keys = session.context().len(), "Session context replaced");
        self.event_bus.publish(DomainEvent::ContextReplaced {
            timestamp: Utc::now(),
        });
    }

    /// Reset history and context to the session's starting state.
    pub fn reset_session(&self, session: &mut Session) {
        session.reset();
        info!("Session reset");
        self.event_bus.publish(DomainEvent::SessionReset {
            timestamp: Utc::now(),
        });
    }
}

/// Close a failed turn with an assistant `Error: ...` message so the next
/// request carries the failure in its history.
fn record_failure(session: &mut Session, err: Error) -> Error {
    let detail = match &err {
        Error::Provider(e) => e.to_string(),
        other => other.to_string(),
    };
    session.conversation.push(Message::assistant(format!("Error: {detail}")));
    err
}
