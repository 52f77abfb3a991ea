//! Configuration loading, validation, and management for helpdesk.
//!
//! Loads configuration from `~/.helpdesk/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use helpdesk_core::context::{FraudMode, SessionContext};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.helpdesk/config.toml`.
#[derive(Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// API key for the chat-completion endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Model name sent with every request
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens per model response (unset = provider default)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// HTTP timeout for a single model call
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Which endpoint to talk to
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Support-desk behaviour
    #[serde(default)]
    pub support: SupportConfig,

    /// HTTP gateway configuration
    #[serde(default)]
    pub gateway: GatewayConfig,
}

fn default_model() -> String {
    "gpt-4".into()
}
fn default_temperature() -> f32 {
    1.0
}
fn default_request_timeout() -> u64 {
    120
}

fn redact(s: &Option<String>) -> &'static str {
    match s {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &redact(&self.api_key))
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("support", &self.support)
            .field("gateway", &self.gateway)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Display name used in logs and `status`
    #[serde(default = "default_provider_name")]
    pub name: String,

    /// Base URL of an OpenAI-compatible API
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_provider_name() -> String {
    "openai".into()
}
fn default_base_url() -> String {
    "https://api.openai.com/v1".into()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            name: default_provider_name(),
            base_url: default_base_url(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportConfig {
    /// Company name used in the greeting and system prompt
    #[serde(default = "default_brand")]
    pub brand: String,

    /// How the fraud check answers at session start
    #[serde(default)]
    pub fraud_mode: FraudMode,

    /// Print each tool call, its arguments, and its response
    #[serde(default = "default_true")]
    pub show_tool_calls: bool,

    /// JSON file to use instead of the built-in customer fixture
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_file: Option<String>,
}

fn default_brand() -> String {
    "Doordash".into()
}
fn default_true() -> bool {
    true
}

impl Default for SupportConfig {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            fraud_mode: FraudMode::default(),
            show_tool_calls: true,
            context_file: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,
}

fn default_port() -> u16 {
    8787
}
fn default_host() -> String {
    "127.0.0.1".into()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.helpdesk/config.toml).
    ///
    /// Environment variables:
    /// - `HELPDESK_API_KEY`, then `OPENAI_API_KEY` (only if the file sets no key)
    /// - `HELPDESK_MODEL`
    /// - `HELPDESK_BASE_URL`
    /// - `HELPDESK_FRAUD_MODE`
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        let mut config = Self::load_from(&config_path)?;
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides through `lookup` and re-validate.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.api_key.is_none() {
            self.api_key = lookup("HELPDESK_API_KEY")
                .or_else(|| lookup("OPENAI_API_KEY"))
                .filter(|k| !k.trim().is_empty());
        }

        if let Some(model) = lookup("HELPDESK_MODEL") {
            self.model = model;
        }

        if let Some(base_url) = lookup("HELPDESK_BASE_URL") {
            self.provider.base_url = base_url;
        }

        if let Some(mode) = lookup("HELPDESK_FRAUD_MODE") {
            self.support.fraud_mode = mode.parse().map_err(ConfigError::ValidationError)?;
        }

        self.validate()
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".helpdesk")
    }

    /// Full path of the default config file.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::ValidationError(
                "temperature must be between 0.0 and 2.0".into(),
            ));
        }

        if self.model.trim().is_empty() {
            return Err(ConfigError::ValidationError("model must not be empty".into()));
        }

        if !(self.provider.base_url.starts_with("http://")
            || self.provider.base_url.starts_with("https://"))
        {
            return Err(ConfigError::ValidationError(format!(
                "provider.base_url must be an http(s) URL, got '{}'",
                self.provider.base_url
            )));
        }

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "request_timeout_secs must be > 0".into(),
            ));
        }

        Ok(())
    }

    /// Check if an API key is available (from config or environment).
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Read `support.context_file`, if one is configured.
    ///
    /// Returns `Ok(None)` when no file is set so the caller can fall back to
    /// the built-in customer fixture.
    pub fn load_initial_context(&self) -> Result<Option<SessionContext>, ConfigError> {
        let Some(path) = &self.support.context_file else {
            return Ok(None);
        };
        let path = PathBuf::from(path);

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        SessionContext::parse(&content)
            .map(Some)
            .map_err(|e| ConfigError::ParseError {
                path,
                reason: e.to_string(),
            })
    }

    /// Generate a default config TOML string (for the `init` command).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            provider: ProviderConfig::default(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: None,
            request_timeout_secs: default_request_timeout(),
            support: SupportConfig::default(),
            gateway: GatewayConfig::default(),
        }
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
