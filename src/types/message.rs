//! Outbound messages queued by actions.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use tracing::warn;

/// Keys owned by the typed fields of [`Message`].
const RESERVED_KEYS: &[&str] = &["text", "image", "buttons", "attachment", "response", "custom"];

/// A quick-reply button attached to a message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub title: String,
    pub payload: String,
}

/// One message queued for delivery to the end user.
///
/// Serialises as a flat JSON object with unset fields omitted, so a plain
/// text message is `{"text": "..."}` on the wire.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Button>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<JsonValue>,
    /// Name of a response template defined in the domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    /// Channel-specific payload passed through untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<JsonValue>,
    #[serde(flatten)]
    kwargs: HashMap<String, JsonValue>,
}

impl Message {
    /// Creates a plain text message.
    pub fn text(text: impl Into<String>) -> Self {
        Message {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }

    pub fn with_button(mut self, title: impl Into<String>, payload: impl Into<String>) -> Self {
        self.buttons.push(Button {
            title: title.into(),
            payload: payload.into(),
        });
        self
    }

    pub fn with_attachment(mut self, attachment: impl Into<JsonValue>) -> Self {
        self.attachment = Some(attachment.into());
        self
    }

    pub fn with_response(mut self, template: impl Into<String>) -> Self {
        self.response = Some(template.into());
        self
    }

    pub fn with_custom(mut self, custom: impl Into<JsonValue>) -> Self {
        self.custom = Some(custom.into());
        self
    }

    /// Adds a template variable or other free-form key.
    ///
    /// Keys that name a typed field (`text`, `image`, ...) are ignored; set
    /// those through their own builder instead.
    pub fn with_kwarg(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        let key = key.into();
        if RESERVED_KEYS.contains(&key.as_str()) {
            warn!("Ignoring message kwarg {} that shadows a message field", key);
            return self;
        }
        self.kwargs.insert(key, value.into());
        self
    }

    /// Free-form keys sent alongside the typed fields.
    pub fn kwargs(&self) -> &HashMap<String, JsonValue> {
        &self.kwargs
    }

    /// Returns the message as a JSON object for map-style inspection.
    pub fn to_json(&self) -> JsonValue {
        serde_json::to_value(self).unwrap_or(JsonValue::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_message_serializes_to_text_only() {
        let message = Message::text("Hello World!");
        assert_eq!(message.to_json(), json!({"text": "Hello World!"}));
        assert_eq!(message.to_json()["text"], "Hello World!");
    }

    #[test]
    fn test_builder_fields_are_flat() {
        let message = Message::text("Pick one")
            .with_button("Yes", "/affirm")
            .with_button("No", "/deny")
            .with_response("utter_ask_choice")
            .with_kwarg("name", "Ada");

        let value = message.to_json();
        assert_eq!(value["buttons"][1]["payload"], "/deny");
        assert_eq!(value["response"], "utter_ask_choice");
        assert_eq!(value["name"], "Ada");
        assert!(value.get("image").is_none());
    }

    #[test]
    fn test_kwarg_cannot_shadow_typed_fields() {
        let message = Message::text("Hello World!")
            .with_kwarg("text", "other")
            .with_kwarg("buttons", "none")
            .with_kwarg("name", "Ada");

        assert_eq!(
            message.to_json(),
            json!({"text": "Hello World!", "name": "Ada"})
        );
        assert!(message.kwargs().get("text").is_none());
    }

    #[test]
    fn test_deserialize_keeps_unknown_keys() {
        let message: Message =
            serde_json::from_str(r#"{"text": "hi", "template_var": 3}"#).unwrap();
        assert_eq!(message.text.as_deref(), Some("hi"));
        assert_eq!(message.kwargs().get("template_var"), Some(&json!(3)));
    }
}
