//! Domain event system: decoupled observation of what a turn did.
//!
//! The orchestrator publishes events as it calls the model and runs tools.
//! Subscribers are observers such as loggers and tests. The terminal and
//! HTTP front-ends render their tool-call trace from the returned
//! `TurnReport`, not from this bus.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::broadcast;

/// Which of the two model calls in a turn an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelPhase {
    /// First call, tools offered
    ToolSelection,
    /// Second call, no tools, produces the reply
    FinalAnswer,
}

/// All domain events in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DomainEvent {
    /// A user message started a turn
    TurnStarted {
        conversation_id: String,
        content_preview: String,
        timestamp: DateTime<Utc>,
    },

    /// A model call completed
    ModelCalled {
        conversation_id: String,
        phase: ModelPhase,
        model: String,
        tool_calls: usize,
        tokens_used: u32,
        timestamp: DateTime<Utc>,
    },

    /// A tool was executed
    ToolExecuted {
        tool_name: String,
        arguments: String,
        success: bool,
        duration_ms: u64,
        timestamp: DateTime<Utc>,
    },

    /// A session-context key was written
    ContextUpdated {
        key: String,
        timestamp: DateTime<Utc>,
    },

    /// The whole session context was replaced by the operator
    ContextReplaced { timestamp: DateTime<Utc> },

    /// History and context were reset
    SessionReset { timestamp: DateTime<Utc> },

    /// An error occurred
    ErrorOccurred {
        context: String,
        error_message: String,
        timestamp: DateTime<Utc>,
    },
}

/// A broadcast-based event bus for domain events.
///
/// Uses `tokio::sync::broadcast` for multi-consumer pub/sub.
pub struct EventBus {
    sender: broadcast::Sender<Arc<DomainEvent>>,
}

impl EventBus {
    /// Create a new event bus with the given capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all subscribers.
    pub fn publish(&self, event: DomainEvent) {
        // No subscribers is fine
        let _ = self.sender.send(Arc::new(event));
    }

    /// Subscribe to receive events.
    pub fn subscribe(&self) -> broadcast::Receiver<Arc<DomainEvent>> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(256)
    }
}
