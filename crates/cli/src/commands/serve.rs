//! `helpdesk serve` — Start the HTTP API server.

use super::load_config;

pub async fn run(port_override: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config()?;

    if let Some(port) = port_override {
        config.gateway.port = port;
    }

    println!("helpdesk gateway");
    println!("   Listening: http://{}:{}", config.gateway.host, config.gateway.port);
    println!("   Model:     {}", config.model);
    println!("   Fraud:     {}", config.support.fraud_mode);

    helpdesk_gateway::start(config).await?;

    Ok(())
}
