//! Name-based routing of action calls.
//!
//! The framework asks for an action by name and hands over the tracker. The
//! executor looks the action up, runs it against a fresh
//! [`CollectingDispatcher`], and packs the returned events together with the
//! collected messages into an [`ActionResponse`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::action::Action;
use crate::actions::all_actions;
use crate::dispatcher::CollectingDispatcher;
use crate::error::{ActionError, ActionResult};
use crate::settings::ExecutorOptions;
use crate::types::tracker::null_as_default;
use crate::types::{ActionParameters, Events, Message, Tracker};

/// A request to run one action.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionCall {
    /// Name of the action to run.
    pub next_action: String,
    #[serde(default)]
    pub sender_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tracker: Tracker,
    #[serde(default, deserialize_with = "null_as_default")]
    pub parameters: ActionParameters,
}

impl ActionCall {
    /// Creates a call for `next_action` with no parameters.
    pub fn new(next_action: impl Into<String>, tracker: Tracker) -> Self {
        ActionCall {
            next_action: next_action.into(),
            sender_id: Some(tracker.sender_id.clone()),
            tracker,
            parameters: ActionParameters::new(),
        }
    }

    pub fn with_parameters(mut self, parameters: ActionParameters) -> Self {
        self.parameters = parameters;
        self
    }

    /// Decodes a call from the framework's request body. Unknown keys such as
    /// `domain` and `version` are ignored.
    pub fn from_json(json: &str) -> ActionResult<Self> {
        serde_json::from_str(json).map_err(|e| ActionError::InvalidRequest(e.to_string()))
    }
}

/// Result of one action run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub events: Events,
    pub responses: Vec<Message>,
}

/// Registry of actions keyed by name.
#[derive(Default)]
pub struct ActionExecutor {
    actions: HashMap<&'static str, Box<dyn Action>>,
}

impl ActionExecutor {
    /// Creates an executor with no actions registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an executor with every bundled action registered.
    pub fn with_bundled_actions() -> Self {
        let mut executor = Self::new();
        for action in all_actions() {
            executor.register(action);
        }
        executor
    }

    /// Creates an executor configured by `options`.
    pub fn from_options(options: &ExecutorOptions) -> Self {
        if options.include_bundled_actions {
            Self::with_bundled_actions()
        } else {
            Self::new()
        }
    }

    /// Registers an action, replacing any earlier one with the same name.
    pub fn register(&mut self, action: Box<dyn Action>) {
        let name = action.name();
        debug!("Registering action: {}", name);
        if self.actions.insert(name, action).is_some() {
            warn!("Action {} was already registered; replacing it", name);
        }
    }

    /// Registered action names, sorted.
    pub fn action_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.actions.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Looks up a registered action by name.
    pub fn get(&self, name: &str) -> Option<&dyn Action> {
        self.actions.get(name).map(|a| a.as_ref())
    }

    /// Runs the action named in `call`.
    pub fn run(&self, call: &ActionCall) -> ActionResult<ActionResponse> {
        let action = self
            .get(&call.next_action)
            .ok_or_else(|| ActionError::ActionNotFound(call.next_action.clone()))?;

        debug!("Executing action: {}", call.next_action);
        let mut dispatcher = CollectingDispatcher::new();
        let events = action
            .run(&mut dispatcher, &call.tracker, &call.parameters)
            .inspect_err(|e| warn!("Action {} failed: {}", call.next_action, e))?;

        debug!(
            events = events.len(),
            responses = dispatcher.len(),
            "Finished action: {}",
            call.next_action
        );
        Ok(ActionResponse {
            events,
            responses: dispatcher.into_messages(),
        })
    }

    /// Decodes a JSON request, runs it, and encodes the response.
    pub fn run_json(&self, request: &str) -> ActionResult<String> {
        let call = ActionCall::from_json(request)?;
        let response = self.run(&call)?;
        Ok(serde_json::to_string(&response)?)
    }
}
