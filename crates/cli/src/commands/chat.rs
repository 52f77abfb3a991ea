//! `helpdesk chat` — interactive support session in the terminal.

use super::{build_session, load_config, render_invocation};
use helpdesk_agent::{Session, SupportAgent};
use helpdesk_core::FraudMode;
use helpdesk_core::error::{ContextError, Error};
use std::io::Write;
use tokio::io::{self, AsyncBufReadExt, BufReader};

const HELP: &str = "\
Commands:
  /context               Show the current session context
  /set-context <json>    Replace the context (or /set-context @file.json)
  /fraud [mode]          Show or set the fraud check: auto, clean, flagged
  /reset                 Clear the conversation and restore the initial case
  /history               Show the conversation so far
  /tools                 List the support tools
  /help                  Show this help
  exit                   Quit";

/// One line of operator input.
#[derive(Debug, PartialEq, Eq)]
enum ReplCommand<'a> {
    Empty,
    Exit,
    Help,
    ShowContext,
    SetContext(&'a str),
    Fraud(Option<&'a str>),
    Reset,
    History,
    Tools,
    Unknown(&'a str),
    Message(&'a str),
}

impl<'a> ReplCommand<'a> {
    fn parse(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }
        if matches!(line, "exit" | "quit" | "/exit" | "/quit" | ":q") {
            return Self::Exit;
        }
        let Some(rest) = line.strip_prefix('/') else {
            return Self::Message(line);
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, Some(arg.trim()).filter(|a| !a.is_empty())),
            None => (rest, None),
        };
        match name {
            "help" => Self::Help,
            "context" => Self::ShowContext,
            "set-context" => Self::SetContext(arg.unwrap_or("")),
            "fraud" => Self::Fraud(arg),
            "reset" => Self::Reset,
            "history" => Self::History,
            "tools" => Self::Tools,
            other => Self::Unknown(other),
        }
    }
}

/// Context text from an inline argument or an `@path` reference.
fn context_source(arg: &str) -> Result<String, String> {
    match arg.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path.trim())
            .map_err(|e| format!("Error: could not read {}: {e}", path.trim())),
        None => Ok(arg.to_string()),
    }
}

fn context_error_message(err: &ContextError) -> String {
    match err {
        ContextError::InvalidJson(_) => "Error: Invalid JSON format".to_string(),
        other => format!("Error: {other}"),
    }
}

fn prompt() -> std::io::Result<()> {
    print!("You: ");
    std::io::stdout().flush()
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    let (agent, mut session) = build_session(&config)?;
    let show_tool_calls = config.support.show_tool_calls;

    println!();
    println!("{}", session.banner());
    println!();
    println!("Chatbot: {}", session.greeting());
    println!();
    println!("(type /help for commands, exit to quit)");
    println!();

    let mut lines = BufReader::new(io::stdin()).lines();
    prompt()?;

    while let Some(line) = lines.next_line().await? {
        match ReplCommand::parse(&line) {
            ReplCommand::Empty => {}
            ReplCommand::Exit => break,
            ReplCommand::Help => println!("{HELP}"),
            ReplCommand::ShowContext => println!("{}", session.context().to_pretty_json()),
            ReplCommand::SetContext("") => println!("Usage: /set-context <json> or /set-context @file.json"),
            ReplCommand::SetContext(arg) => match context_source(arg) {
                Ok(text) => match agent.replace_context_json(&mut session, &text) {
                    Ok(()) => println!("Context updated successfully"),
                    Err(e) => println!("{}", context_error_message(&e)),
                },
                Err(message) => println!("{message}"),
            },
            ReplCommand::Fraud(None) => println!("Fraud check: {}", session.fraud_mode()),
            ReplCommand::Fraud(Some(mode)) => match mode.parse::<FraudMode>() {
                Ok(mode) => {
                    session.set_fraud_mode(mode);
                    println!("Fraud check set to {mode}");
                }
                Err(e) => println!("Error: {e}"),
            },
            ReplCommand::Reset => {
                agent.reset_session(&mut session);
                println!("{}", session.banner());
                println!();
                println!("Chatbot: {}", session.greeting());
            }
            ReplCommand::History => print_history(&session),
            ReplCommand::Tools => {
                for name in agent.tools().names() {
                    println!("  {name}");
                }
            }
            ReplCommand::Unknown(name) => println!("Unknown command: /{name} (try /help)"),
            ReplCommand::Message(text) => run_turn(&agent, &mut session, text, show_tool_calls).await,
        }
        println!();
        prompt()?;
    }

    println!();
    println!("Goodbye!");
    Ok(())
}

async fn run_turn(agent: &SupportAgent, session: &mut Session, text: &str, show_tool_calls: bool) {
    eprint!("  ...");
    let result = agent.process_turn(session, text).await;
    eprint!("\r     \r");

    match result {
        Ok(Some(report)) => {
            if show_tool_calls {
                for invocation in &report.invocations {
                    println!("{}\n", render_invocation(invocation));
                }
            }
            println!("Chatbot: {}", report.reply);
        }
        Ok(None) => {}
        Err(e) => println!("Chatbot: {}", failure_reply(&e)),
    }
}

/// What the operator sees when a turn fails; matches what history records.
fn failure_reply(err: &Error) -> String {
    match err {
        Error::Provider(e) => format!("Error: {e}"),
        other => format!("Error: {other}"),
    }
}

fn print_history(session: &Session) {
    for message in session.history() {
        if !message.tool_calls.is_empty() {
            for call in &message.tool_calls {
                println!("[assistant -> {}] {}", call.name, call.arguments);
            }
        } else {
            println!("[{}] {}", message.role.as_str(), message.content);
        }
    }
}
