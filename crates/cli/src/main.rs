//! helpdesk CLI — the main entry point.
//!
//! Commands:
//! - `chat`    — Interactive support session (default)
//! - `ask`     — Run a single turn and print the reply
//! - `serve`   — Start the HTTP gateway
//! - `tools`   — List the support tools and their schemas
//! - `init`    — Write a default config file
//! - `status`  — Show effective configuration and provider health

use clap::{Parser, Subcommand};
use helpdesk_core::FraudMode;

mod commands;

#[derive(Parser)]
#[command(
    name = "helpdesk",
    about = "helpdesk — tool-calling customer support agent",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive support session
    Chat,

    /// Send a single message and print the reply
    Ask {
        /// The customer's message
        #[arg(short, long)]
        message: String,

        /// Override the fraud check (auto, clean, flagged)
        #[arg(long)]
        fraud: Option<FraudMode>,
    },

    /// Start the HTTP gateway server
    Serve {
        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List the support tools
    Tools,

    /// Write a default configuration file
    Init,

    /// Show configuration and provider status
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Keep the conversation readable: only warnings unless asked.
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => commands::chat::run().await?,
        Commands::Ask { message, fraud } => commands::ask::run(message, fraud).await?,
        Commands::Serve { port } => commands::serve::run(port).await?,
        Commands::Tools => commands::tools::run().await?,
        Commands::Init => commands::init::run().await?,
        Commands::Status => commands::status::run().await?,
    }

    Ok(())
}
