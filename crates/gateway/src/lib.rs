//! HTTP API gateway for helpdesk.
//!
//! Serves one shared support session over REST so a browser or script can
//! drive the same conversation the terminal chat does. Built on Axum.

pub mod api_v1;

use axum::extract::DefaultBodyLimit;
use axum::{Router, response::Json, routing::get};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use helpdesk_agent::{Session, SupportAgent};
use helpdesk_config::AppConfig;
use helpdesk_core::event::EventBus;

/// Build the full router: `/health` plus the v1 API under `/v1`.
///
/// Layers: request body limit (1 MB) and HTTP trace logging.
pub fn build_full_router(api_state: api_v1::SharedApiState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/v1", api_v1::v1_router(api_state))
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

/// Build the shared session and agent from configuration.
pub fn build_state(config: &AppConfig) -> Result<api_v1::SharedApiState, Box<dyn std::error::Error>> {
    let provider = helpdesk_providers::build_from_config(config)?;
    let initial = config
        .load_initial_context()?
        .unwrap_or_else(helpdesk_tools::initial_user_info);

    let agent = SupportAgent::new(
        provider,
        &config.model,
        config.temperature,
        Arc::new(helpdesk_tools::default_registry()),
        Arc::new(EventBus::default()),
    )
    .with_max_tokens(config.max_tokens);

    let session = Session::new(initial, config.support.fraud_mode, &config.support.brand);

    Ok(Arc::new(api_v1::ApiV1State {
        agent,
        session: Mutex::new(session),
    }))
}

/// Start the gateway HTTP server.
pub async fn start(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);
    let app = build_full_router(build_state(&config)?);

    info!(addr = %addr, model = %config.model, "Gateway starting");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn health_endpoint() {
        let app = build_full_router(api_v1::tests::test_api_state(vec![]));

        let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn v1_routes_are_nested() {
        let app = build_full_router(api_v1::tests::test_api_state(vec![]));

        let req = Request::builder().uri("/v1/fraud").body(Body::empty()).unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn oversized_body_rejected() {
        let app = build_full_router(api_v1::tests::test_api_state(vec![]));

        let huge = format!(r#"{{"message": "{}"}}"#, "a".repeat(2 * 1024 * 1024));
        let req = Request::builder()
            .method("POST")
            .uri("/v1/chat")
            .header("content-type", "application/json")
            .body(Body::from(huge))
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn build_state_requires_api_key() {
        let config = AppConfig::default();
        assert!(build_state(&config).is_err());
    }

    #[test]
    fn build_state_uses_configured_brand_and_mode() {
        let mut config = AppConfig {
            api_key: Some("sk-test".into()),
            ..AppConfig::default()
        };
        config.support.brand = "Acme Eats".into();
        config.support.fraud_mode = helpdesk_core::FraudMode::Flagged;

        let state = build_state(&config).unwrap();
        let session = state.session.try_lock().unwrap();
        assert_eq!(session.brand(), "Acme Eats");
        assert_eq!(session.fraud_mode(), helpdesk_core::FraudMode::Flagged);
        assert_eq!(state.agent.model(), "gpt-4");
    }
}
