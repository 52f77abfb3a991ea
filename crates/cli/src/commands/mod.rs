//! Subcommand implementations and the setup they share.

pub mod ask;
pub mod chat;
pub mod init;
pub mod serve;
pub mod status;
pub mod tools;

use helpdesk_agent::{Session, SupportAgent, ToolInvocation};
use helpdesk_config::AppConfig;
use helpdesk_core::event::EventBus;
use std::sync::Arc;

/// Load config and fail early, with setup instructions, when no key is set.
pub fn load_config() -> Result<AppConfig, Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    if !config.has_api_key() {
        eprintln!();
        eprintln!("  ERROR: No API key configured!");
        eprintln!();
        eprintln!("  Set one of these environment variables:");
        eprintln!("    export OPENAI_API_KEY='sk-...'");
        eprintln!("    export HELPDESK_API_KEY='sk-...'");
        eprintln!();
        eprintln!("  Or add it to your config file:");
        eprintln!("    {}", AppConfig::config_path().display());
        eprintln!();
        return Err("No API key found. See above for setup instructions.".into());
    }

    Ok(config)
}

/// Build the agent and a fresh session from configuration.
pub fn build_session(config: &AppConfig) -> Result<(SupportAgent, Session), Box<dyn std::error::Error>> {
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

    Ok((agent, session))
}

/// The operator-facing trace of one tool call.
pub fn render_invocation(invocation: &ToolInvocation) -> String {
    let response = serde_json::to_string_pretty(&invocation.response)
        .unwrap_or_else(|_| invocation.response.to_string());
    format!(
        "API Call: {}\nParameters: {}\nResponse: {}",
        invocation.name, invocation.arguments, response
    )
}
