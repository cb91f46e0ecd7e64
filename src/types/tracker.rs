//! Conversation tracker snapshot.
//!
//! A [`Tracker`] is handed to an action by value or reference for the
//! duration of a single run. Actions read from it; they never mutate it.
//! Changes to the conversation are requested by returning
//! [`Event`](super::Event)s instead.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

use crate::error::{ActionError, ActionResult};

/// Decodes `null` the same as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Read-only snapshot of a single conversation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tracker {
    /// Identifier of the user on the other end of the conversation.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sender_id: String,
    /// Current slot values keyed by slot name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub slots: HashMap<String, JsonValue>,
    /// Parsed form of the most recent user message.
    #[serde(default, deserialize_with = "null_as_default")]
    pub latest_message: HashMap<String, JsonValue>,
    /// Raw event history, oldest first.
    #[serde(default, deserialize_with = "null_as_default")]
    pub events: Vec<JsonValue>,
    /// Whether the conversation is paused.
    #[serde(default, deserialize_with = "null_as_default")]
    pub paused: bool,
    /// Form or follow-up action currently in control, if any.
    #[serde(default, rename = "followup_action")]
    pub active_form: Option<String>,
    /// State of the active loop.
    #[serde(default, deserialize_with = "null_as_default")]
    pub active_loop: HashMap<String, JsonValue>,
    /// Identifier of the conversation turn that triggered this run.
    #[serde(
        default,
        rename = "latest_action_name",
        deserialize_with = "null_as_default"
    )]
    pub conversation_id: String,
}

impl Tracker {
    /// Builds a snapshot from its parts, in the framework's constructor order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sender_id: impl Into<String>,
        slots: HashMap<String, JsonValue>,
        latest_message: HashMap<String, JsonValue>,
        events: Vec<JsonValue>,
        paused: bool,
        active_form: Option<String>,
        active_loop: HashMap<String, JsonValue>,
        conversation_id: impl Into<String>,
    ) -> Self {
        Tracker {
            sender_id: sender_id.into(),
            slots,
            latest_message,
            events,
            paused,
            active_form,
            active_loop,
            conversation_id: conversation_id.into(),
        }
    }

    /// Decodes a tracker from the framework's JSON representation.
    pub fn from_json(json: &str) -> ActionResult<Self> {
        serde_json::from_str(json).map_err(|e| ActionError::InvalidTracker(e.to_string()))
    }

    /// Returns the value of a slot, if it is set.
    pub fn get_slot(&self, name: &str) -> Option<&JsonValue> {
        self.slots.get(name).filter(|v| !v.is_null())
    }

    /// Text of the latest user message.
    pub fn latest_message_text(&self) -> Option<&str> {
        self.latest_message.get("text").and_then(JsonValue::as_str)
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Name of the active loop, if one is running.
    pub fn active_loop_name(&self) -> Option<&str> {
        self.active_loop.get("name").and_then(JsonValue::as_str)
    }
}
