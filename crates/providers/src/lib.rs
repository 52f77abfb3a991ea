//! LLM Provider implementations for helpdesk.
//!
//! All providers implement the `helpdesk_core::Provider` trait.

pub mod openai_compat;

pub use openai_compat::OpenAiCompatProvider;

use helpdesk_config::AppConfig;
use helpdesk_core::Provider;
use helpdesk_core::error::ProviderError;
use std::sync::Arc;
use std::time::Duration;

/// Build the configured provider.
///
/// Fails with `NotConfigured` when no API key is available, so callers can
/// print setup instructions before any request goes out.
pub fn build_from_config(config: &AppConfig) -> Result<Arc<dyn Provider>, ProviderError> {
    let api_key = config
        .api_key
        .clone()
        .ok_or_else(|| ProviderError::NotConfigured("no API key configured".into()))?;

    let provider = OpenAiCompatProvider::with_timeout(
        &config.provider.name,
        &config.provider.base_url,
        api_key,
        Duration::from_secs(config.request_timeout_secs),
    )?;

    tracing::debug!(
        provider = %config.provider.name,
        base_url = %config.provider.base_url,
        "Provider configured"
    );

    Ok(Arc::new(provider))
}
