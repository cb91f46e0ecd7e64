//! `action_hello_world` implementation.

use tracing::debug;

use crate::action::Action;
use crate::dispatcher::Dispatcher;
use crate::error::ActionResult;
use crate::types::{ActionParameters, Events, Tracker};

/// Text sent by [`ActionHelloWorld`].
pub const HELLO_WORLD_TEXT: &str = "Hello World!";

/// Action that greets the user with a fixed message.
#[derive(Clone, Copy, Debug, Default)]
pub struct ActionHelloWorld;

impl Action for ActionHelloWorld {
    fn name(&self) -> &'static str {
        "action_hello_world"
    }

    fn run(
        &self,
        dispatcher: &mut dyn Dispatcher,
        tracker: &Tracker,
        _parameters: &ActionParameters,
    ) -> ActionResult<Events> {
        debug!(sender_id = %tracker.sender_id, "Running {}", self.name());
        dispatcher.utter_text(HELLO_WORLD_TEXT);
        Ok(Vec::new())
    }
}
