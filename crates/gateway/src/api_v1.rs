//! HTTP API v1 for the shared support session.
//!
//! Endpoints:
//!
//! - `POST /v1/chat`     — Run one turn, get the reply and tool trace
//! - `GET  /v1/context`  — Current session context
//! - `PUT  /v1/context`  — Replace the session context
//! - `GET  /v1/history`  — Conversation history
//! - `POST /v1/reset`    — Clear history and restore the initial case
//! - `GET  /v1/fraud`    — Current fraud-check override
//! - `PUT  /v1/fraud`    — Change the fraud-check override
//! - `GET  /v1/tools`    — List available tools

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

use helpdesk_agent::{Session, SupportAgent, ToolInvocation};
use helpdesk_core::context::{FraudMode, SessionContext};
use helpdesk_core::error::Error;
use helpdesk_core::message::Message;
use helpdesk_core::provider::ToolDefinition;

// ── State ─────────────────────────────────────────────────────────────────

/// Shared state for the v1 API.
///
/// The session lock is held for a whole turn, so concurrent chat requests
/// are answered one after another.
pub struct ApiV1State {
    pub agent: SupportAgent,
    pub session: Mutex<Session>,
}

pub type SharedApiState = Arc<ApiV1State>;

type ApiError = (StatusCode, Json<ErrorResponse>);

// ── Router ────────────────────────────────────────────────────────────────

/// Build the v1 API router. Nest this under "/v1" in the main router.
pub fn v1_router(state: SharedApiState) -> Router {
    Router::new()
        .route("/chat", post(chat_handler))
        .route("/context", get(get_context_handler).put(put_context_handler))
        .route("/history", get(history_handler))
        .route("/reset", post(reset_handler))
        .route("/fraud", get(get_fraud_handler).put(put_fraud_handler))
        .route("/tools", get(list_tools_handler))
        .with_state(state)
}

// ── Request / Response types ──────────────────────────────────────────────

#[derive(Deserialize)]
struct ChatRequest {
    message: String,
}

#[derive(Serialize, Deserialize)]
struct ChatResponse {
    reply: String,
    fallback: bool,
    invocations: Vec<InvocationDto>,
}

#[derive(Serialize, Deserialize)]
struct InvocationDto {
    name: String,
    arguments: String,
    response: serde_json::Value,
    success: bool,
}

impl From<ToolInvocation> for InvocationDto {
    fn from(inv: ToolInvocation) -> Self {
        Self {
            name: inv.name,
            arguments: inv.arguments,
            response: inv.response,
            success: inv.success,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct ResetResponse {
    banner: String,
    greeting: String,
}

#[derive(Serialize, Deserialize)]
struct FraudBody {
    mode: String,
}

#[derive(Serialize, Deserialize)]
struct ToolListResponse {
    tools: Vec<ToolDefinition>,
    count: usize,
}

#[derive(Serialize, Deserialize)]
struct ErrorResponse {
    error: String,
}

fn error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

// ── Handlers ──────────────────────────────────────────────────────────────

async fn chat_handler(
    State(state): State<SharedApiState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let mut session = state.session.lock().await;

    let report = state
        .agent
        .process_turn(&mut session, &payload.message)
        .await
        .map_err(|e| match e {
            Error::Provider(e) => {
                warn!(error = %e, "v1/chat provider failure");
                error(StatusCode::BAD_GATEWAY, format!("Model provider error: {e}"))
            }
            other => error(StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
        })?
        .ok_or_else(|| error(StatusCode::BAD_REQUEST, "message must not be empty"))?;

    info!(tools = report.invocations.len(), "v1/chat turn complete");

    Ok(Json(ChatResponse {
        reply: report.reply,
        fallback: report.fallback,
        invocations: report.invocations.into_iter().map(Into::into).collect(),
    }))
}

async fn get_context_handler(State(state): State<SharedApiState>) -> Json<serde_json::Value> {
    Json(state.session.lock().await.context().to_value())
}

async fn put_context_handler(
    State(state): State<SharedApiState>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let context =
        SessionContext::from_value(body).map_err(|e| error(StatusCode::BAD_REQUEST, e.to_string()))?;

    let mut session = state.session.lock().await;
    state.agent.replace_context(&mut session, context);
    Ok(Json(session.context().to_value()))
}

async fn history_handler(State(state): State<SharedApiState>) -> Json<Vec<Message>> {
    Json(state.session.lock().await.history().to_vec())
}

async fn reset_handler(State(state): State<SharedApiState>) -> Json<ResetResponse> {
    let mut session = state.session.lock().await;
    state.agent.reset_session(&mut session);
    Json(ResetResponse {
        banner: session.banner(),
        greeting: session.greeting(),
    })
}

async fn get_fraud_handler(State(state): State<SharedApiState>) -> Json<FraudBody> {
    Json(FraudBody {
        mode: state.session.lock().await.fraud_mode().to_string(),
    })
}

async fn put_fraud_handler(
    State(state): State<SharedApiState>,
    Json(body): Json<FraudBody>,
) -> Result<Json<FraudBody>, ApiError> {
    let mode: FraudMode = body
        .mode
        .parse()
        .map_err(|e: String| error(StatusCode::BAD_REQUEST, e))?;

    state.session.lock().await.set_fraud_mode(mode);
    info!(%mode, "Fraud override changed");
    Ok(Json(FraudBody {
        mode: mode.to_string(),
    }))
}

async fn list_tools_handler(State(state): State<SharedApiState>) -> Json<ToolListResponse> {
    let tools = state.agent.tools().definitions();
    Json(ToolListResponse {
        count: tools.len(),
        tools,
    })
}
