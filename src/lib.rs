//! hello-actions
//!
//! Custom actions for a conversational framework, plus the collaborators
//! needed to run them outside the framework: a read-only [`Tracker`]
//! snapshot, a [`Dispatcher`] that queues outbound messages, and an
//! [`ActionExecutor`] that routes calls to actions by name.
//!
//! # Example
//!
//! ```rust
//! use hello_actions::{Action, ActionHelloWorld, ActionParameters, CollectingDispatcher, Tracker};
//!
//! let mut dispatcher = CollectingDispatcher::new();
//! let events = ActionHelloWorld
//!     .run(&mut dispatcher, &Tracker::default(), &ActionParameters::new())
//!     .unwrap();
//!
//! assert!(events.is_empty());
//! assert_eq!(dispatcher.messages()[0].to_json()["text"], "Hello World!");
//! ```

pub mod action;
pub mod actions;
pub mod dispatcher;
pub mod error;
pub mod executor;
pub mod settings;
pub mod types;

// Re-export commonly used items at the crate root for convenience
pub use action::Action;
pub use actions::{all_actions, ActionHelloWorld, HELLO_WORLD_TEXT};
pub use dispatcher::{CollectingDispatcher, Dispatcher};
pub use error::{ActionError, ActionResult};
pub use executor::{ActionCall, ActionExecutor, ActionResponse};
pub use settings::{ExecutorOptions, LogLevel};
pub use types::{ActionParameters, Event, Events, Message, Tracker};

#[cfg(feature = "logging")]
pub use settings::init_logging;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
