//! Bundled action implementations.

mod hello_world;

pub use hello_world::{ActionHelloWorld, HELLO_WORLD_TEXT};

use crate::action::Action;

/// Get all bundled actions.
pub fn all_actions() -> Vec<Box<dyn Action>> {
    vec![Box::new(ActionHelloWorld)]
}
