//! The support agent: one user turn at a time.
//!
//! A turn is exactly two model calls:
//!
//! 1. **Select tools**: system prompt (with the live session context) +
//!    history, with every tool offered
//! 2. **Run tools**: each requested call is executed in order, its result
//!    recorded in the session context and appended to history
//! 3. **Answer**: system prompt (rebuilt from the updated context) +
//!    history, no tools offered; the text becomes the reply
//!
//! There is no further looping and no retry. A provider failure aborts the
//! turn.

pub mod orchestrator;
pub mod prompt;
pub mod session;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use orchestrator::{SupportAgent, ToolInvocation, TurnReport};
pub use session::Session;
