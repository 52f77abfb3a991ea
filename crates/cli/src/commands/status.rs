//! `helpdesk status` — Show effective configuration and provider health.

use helpdesk_config::AppConfig;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    println!("helpdesk status");
    println!("===============");
    println!("  Config file:  {}", AppConfig::config_path().display());
    println!("  API key:      {}", if config.has_api_key() { "[set]" } else { "[not set]" });
    println!("  Provider:     {} ({})", config.provider.name, config.provider.base_url);
    println!("  Model:        {}", config.model);
    println!("  Temperature:  {}", config.temperature);
    println!("  Brand:        {}", config.support.brand);
    println!("  Fraud mode:   {}", config.support.fraud_mode);
    println!(
        "  Context:      {}",
        config.support.context_file.as_deref().unwrap_or("built-in case")
    );
    println!("  Gateway:      {}:{}", config.gateway.host, config.gateway.port);

    if !AppConfig::config_path().exists() {
        println!("\n  No config file, using defaults. Run `helpdesk init` to create one.");
    }

    match helpdesk_providers::build_from_config(&config) {
        Ok(provider) => match provider.health_check().await {
            Ok(true) => println!("\n  Provider reachable"),
            Ok(false) => println!("\n  Provider responded but is not healthy"),
            Err(e) => println!("\n  Provider check failed: {e}"),
        },
        Err(e) => println!("\n  Provider not ready: {e}"),
    }

    Ok(())
}
