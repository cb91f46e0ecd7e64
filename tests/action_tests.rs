//! Integration tests for the bundled hello-world action.
//!
//! These cover the action on its own, driven through a collecting
//! dispatcher, and the same action reached through the executor.

use anyhow::Result;
use hello_actions::{
    Action, ActionCall, ActionExecutor, ActionHelloWorld, ActionParameters, CollectingDispatcher,
    Message, Tracker, HELLO_WORLD_TEXT,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::collections::HashMap;

fn test_tracker() -> Tracker {
    Tracker::new(
        "test_sender",
        HashMap::new(),
        HashMap::new(),
        vec![],
        false,
        None,
        HashMap::new(),
        "test",
    )
}

#[test]
fn test_action_hello_world() -> Result<()> {
    let action = ActionHelloWorld;
    let mut dispatcher = CollectingDispatcher::new();
    let tracker = test_tracker();

    let result = action.run(&mut dispatcher, &tracker, &ActionParameters::new())?;

    assert!(result.is_empty());
    assert_eq!(dispatcher.messages().len(), 1);
    assert_eq!(dispatcher.messages()[0].to_json()["text"], "Hello World!");
    assert_eq!(dispatcher.messages()[0].to_json(), json!({"text": "Hello World!"}));
    Ok(())
}

#[test]
fn test_parameters_are_ignored() -> Result<()> {
    let mut params = ActionParameters::new();
    params.insert("greeting".to_string(), json!("Goodbye"));
    params.insert("count".to_string(), json!(3));

    let mut dispatcher = CollectingDispatcher::new();
    let result = ActionHelloWorld.run(&mut dispatcher, &test_tracker(), &params)?;

    assert!(result.is_empty());
    assert_eq!(dispatcher.into_messages(), vec![Message::text(HELLO_WORLD_TEXT)]);
    Ok(())
}

#[test]
fn test_independent_dispatchers_each_get_one_message() -> Result<()> {
    let tracker = test_tracker();
    let params = ActionParameters::new();

    let mut first = CollectingDispatcher::new();
    let mut second = CollectingDispatcher::new();
    ActionHelloWorld.run(&mut first, &tracker, &params)?;
    ActionHelloWorld.run(&mut second, &tracker, &params)?;

    assert_eq!(first.messages(), second.messages());
    assert_eq!(first.len(), 1);
    Ok(())
}

#[test]
fn test_same_dispatcher_accumulates() -> Result<()> {
    let tracker = test_tracker();
    let params = ActionParameters::new();
    let mut dispatcher = CollectingDispatcher::new();

    ActionHelloWorld.run(&mut dispatcher, &tracker, &params)?;
    ActionHelloWorld.run(&mut dispatcher, &tracker, &params)?;

    assert_eq!(
        dispatcher.into_messages(),
        vec![Message::text(HELLO_WORLD_TEXT), Message::text(HELLO_WORLD_TEXT)]
    );
    Ok(())
}

#[test]
fn test_executor_routes_by_name() -> Result<()> {
    let executor = ActionExecutor::with_bundled_actions();
    let call = ActionCall::new(ActionHelloWorld.name(), test_tracker());

    let response = executor.run(&call)?;

    assert!(response.events.is_empty());
    assert_eq!(response.responses, vec![Message::text(HELLO_WORLD_TEXT)]);
    Ok(())
}

#[test]
fn test_executor_json_round() -> Result<()> {
    let executor = ActionExecutor::with_bundled_actions();
    let request = json!({
        "next_action": "action_hello_world",
        "sender_id": "test_sender",
        "tracker": {
            "sender_id": "test_sender",
            "slots": {},
            "latest_message": {"text": "hello"},
            "events": [],
            "paused": false,
            "followup_action": null,
            "active_loop": {},
            "latest_action_name": "test"
        },
        "domain": {"actions": ["action_hello_world"]},
        "version": "3.6.0"
    });

    let body = executor.run_json(&request.to_string())?;
    let response: serde_json::Value = serde_json::from_str(&body)?;

    assert_eq!(
        response,
        json!({"events": [], "responses": [{"text": "Hello World!"}]})
    );
    Ok(())
}

#[test]
fn test_executor_accepts_tracker_before_first_action() -> Result<()> {
    let executor = ActionExecutor::with_bundled_actions();
    let request = json!({
        "next_action": "action_hello_world",
        "sender_id": "test_sender",
        "tracker": {
            "sender_id": "test_sender",
            "slots": {},
            "latest_message": {},
            "events": [],
            "paused": false,
            "followup_action": null,
            "active_loop": null,
            "latest_action_name": null
        }
    });

    let body = executor.run_json(&request.to_string())?;
    let response: serde_json::Value = serde_json::from_str(&body)?;

    assert_eq!(
        response,
        json!({"events": [], "responses": [{"text": "Hello World!"}]})
    );
    Ok(())
}
