//! A single support session: history, case context, and fraud override.

use crate::prompt;
use helpdesk_core::context::{FraudMode, SessionContext};
use helpdesk_core::error::ContextError;
use helpdesk_core::message::{Conversation, Message};

/// Everything one customer conversation carries between turns.
#[derive(Debug, Clone)]
pub struct Session {
    /// History sent to the model (never includes the system prompt)
    pub conversation: Conversation,
    context: SessionContext,
    initial_context: SessionContext,
    fraud_mode: FraudMode,
    brand: String,
}

impl Session {
    /// Start a session on `initial_context`. History opens with the greeting.
    pub fn new(initial_context: SessionContext, fraud_mode: FraudMode, brand: impl Into<String>) -> Self {
        let mut session = Self {
            conversation: Conversation::new(),
            context: initial_context.clone(),
            initial_context,
            fraud_mode,
            brand: brand.into(),
        };
        session.greet();
        session
    }

    fn greet(&mut self) {
        self.conversation.push(Message::assistant(self.greeting()));
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut SessionContext {
        &mut self.context
    }

    pub fn fraud_mode(&self) -> FraudMode {
        self.fraud_mode
    }

    pub fn set_fraud_mode(&mut self, mode: FraudMode) {
        self.fraud_mode = mode;
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn history(&self) -> &[Message] {
        &self.conversation.messages
    }

    pub fn greeting(&self) -> String {
        prompt::greeting(&self.brand)
    }

    pub fn banner(&self) -> String {
        prompt::banner(&self.context)
    }

    /// Replace the whole context.
    pub fn replace_context(&mut self, context: SessionContext) {
        self.context.replace(context);
    }

    /// Replace the whole context with operator-edited JSON.
    ///
    /// On error the current context is left untouched.
    pub fn set_context_json(&mut self, text: &str) -> Result<(), ContextError> {
        self.replace_context(SessionContext::parse(text)?);
        Ok(())
    }

    /// Clear history and restore the initial case. The fraud override is kept.
    pub fn reset(&mut self) {
        self.conversation.clear();
        self.context = self.initial_context.clone();
        self.greet();
    }
}
