//! Events an action asks the framework to apply to the conversation.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A change to conversation state, tagged by its wire name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum Event {
    /// Set a slot to a value (`null` clears it)
    #[serde(rename = "slot")]
    SlotSet {
        /// Slot name
        name: String,
        /// New value
        value: JsonValue,
    },
    /// Reset the whole conversation
    #[serde(rename = "restart")]
    Restarted,
    /// Clear every slot
    #[serde(rename = "reset_slots")]
    AllSlotsReset,
    /// Force the next action
    #[serde(rename = "followup")]
    FollowupAction {
        /// Action to run next
        name: String,
    },
    /// Stop the bot from responding
    #[serde(rename = "pause")]
    ConversationPaused,
    /// Let the bot respond again
    #[serde(rename = "resume")]
    ConversationResumed,
    /// Undo the last bot action
    #[serde(rename = "undo")]
    ActionReverted,
    /// Undo the last user message
    #[serde(rename = "rewind")]
    UserUtteranceReverted,
    /// Activate a loop, or deactivate with `None`
    #[serde(rename = "active_loop")]
    ActiveLoop {
        /// Loop name
        name: Option<String>,
    },
}

/// Ordered list of events returned from a single run.
pub type Events = Vec<Event>;

impl Event {
    pub fn slot_set(name: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        Event::SlotSet {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn followup(name: impl Into<String>) -> Self {
        Event::FollowupAction { name: name.into() }
    }
}
