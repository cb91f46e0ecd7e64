//! Error types for custom actions and the action executor.

use thiserror::Error;

/// Errors raised while routing or running an action.
#[derive(Debug, Error)]
pub enum ActionError {
    /// An action failed to execute.
    #[error("Action failed: {0}")]
    ActionFailed(String),

    /// No action is registered under the requested name.
    #[error("No registered action found for name '{0}'")]
    ActionNotFound(String),

    /// The tracker snapshot could not be decoded.
    #[error("Invalid tracker: {0}")]
    InvalidTracker(String),

    /// The action call could not be decoded.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for action operations.
pub type ActionResult<T> = Result<T, ActionError>;

impl From<serde_json::Error> for ActionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(err.to_string())
    }
}
