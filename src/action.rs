//! The [`Action`] trait every custom action implements.

use crate::dispatcher::Dispatcher;
use crate::error::ActionResult;
use crate::types::{ActionParameters, Events, Tracker};

/// A named handler the framework invokes in response to a predicted action.
pub trait Action: Send + Sync {
    /// Name the framework uses to route calls to this action.
    fn name(&self) -> &'static str;

    /// Run the action.
    ///
    /// Outbound messages go through `dispatcher`; changes to the conversation
    /// are returned as events, in the order they should be applied.
    fn run(
        &self,
        dispatcher: &mut dyn Dispatcher,
        tracker: &Tracker,
        parameters: &ActionParameters,
    ) -> ActionResult<Events>;
}
