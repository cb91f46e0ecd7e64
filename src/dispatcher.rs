//! Outbound message dispatch.
//!
//! Actions never talk to a channel directly. They hand messages to a
//! [`Dispatcher`], and whoever invoked the action decides what happens to
//! them afterwards.

use tracing::trace;

use crate::types::Message;

/// Capability to queue messages for later delivery.
pub trait Dispatcher {
    /// Queue a message.
    fn utter_message(&mut self, message: Message);

    /// Queue a plain text message.
    fn utter_text(&mut self, text: &str) {
        self.utter_message(Message::text(text));
    }
}

/// Dispatcher that records every message in order.
#[derive(Clone, Debug, Default)]
pub struct CollectingDispatcher {
    messages: Vec<Message>,
}

impl CollectingDispatcher {
    /// Creates a dispatcher with no recorded messages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages recorded so far, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Hands the recorded messages to the caller.
    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }

    /// Number of recorded messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Dispatcher for CollectingDispatcher {
    fn utter_message(&mut self, message: Message) {
        trace!(?message, "Collecting message");
        self.messages.push(message);
    }
}
