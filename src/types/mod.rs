//! Core types exchanged between the framework and custom actions.

pub mod events;
pub mod message;
pub mod tracker;

pub use events::{Event, Events};
pub use message::{Button, Message};
pub use tracker::Tracker;

use serde_json::Value as JsonValue;
use std::collections::HashMap;

/// Action-specific arguments passed alongside the tracker.
pub type ActionParameters = HashMap<String, JsonValue>;
