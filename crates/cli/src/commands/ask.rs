//! `helpdesk ask` — one turn, reply on stdout.

use super::{build_session, load_config, render_invocation};
use helpdesk_core::FraudMode;

pub async fn run(message: String, fraud: Option<FraudMode>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    let (agent, mut session) = build_session(&config)?;
    if let Some(mode) = fraud {
        session.set_fraud_mode(mode);
    }

    eprint!("  Thinking...");
    let report = agent.process_turn(&mut session, &message).await;
    eprint!("\r              \r");

    match report? {
        Some(report) => {
            if config.support.show_tool_calls {
                for invocation in &report.invocations {
                    eprintln!("{}\n", render_invocation(invocation));
                }
            }
            println!("{}", report.reply);
        }
        None => return Err("message must not be empty".into()),
    }

    Ok(())
}
