//! Comment payloads embedded in a message body.
//!
//! Blog comment hooks forward their whole event as the message body, either as
//! JSON text or as an already-parsed value. The comment sits at `data.comment`.

use crate::errors::DecodeError;
use gateway_model::MessageBody;
use serde_json::Value;
use tracing::debug;

/// Message body resolved for embedded-payload decoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EmbeddedBody<'a> {
    Text(&'a str),
    Structured(&'a Value),
}

impl<'a> From<&'a MessageBody> for EmbeddedBody<'a> {
    fn from(body: &'a MessageBody) -> Self {
        match body {
            MessageBody::Text(text) => EmbeddedBody::Text(text),
            MessageBody::Structured(value) => EmbeddedBody::Structured(value),
        }
    }
}

impl EmbeddedBody<'_> {
    /// Read the comment object. A missing `data.comment` yields an empty
    /// comment; unparseable text or a comment that is not an object is an error.
    pub fn decode(&self) -> Result<CommentObject, DecodeError> {
        match self {
            EmbeddedBody::Text(text) => {
                let value: Value = serde_json::from_str(text)?;
                CommentObject::from_event(&value)
            }
            EmbeddedBody::Structured(value) => CommentObject::from_event(value),
        }
    }
}

/// Comment fields; each is empty when absent from the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentObject {
    pub nick: String,
    pub comment: String,
    pub mail: String,
    pub status: String,
    pub inserted_at: String,
    pub ip: String,
    pub url: String,
}

impl CommentObject {
    fn from_event(event: &Value) -> Result<Self, DecodeError> {
        match event.pointer("/data/comment") {
            None | Some(Value::Null) => Ok(Self::default()),
            Some(comment @ Value::Object(_)) => Ok(Self {
                nick: text_field(comment, "nick"),
                comment: text_field(comment, "comment"),
                mail: text_field(comment, "mail"),
                status: text_field(comment, "status"),
                inserted_at: text_field(comment, "insertedAt"),
                ip: text_field(comment, "ip"),
                url: text_field(comment, "url"),
            }),
            Some(other) => Err(DecodeError::InvalidComment(json_kind(other))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn text_field(object: &Value, key: &str) -> String {
    match object.get(key) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) if number.as_f64() != Some(0.0) => number.to_string(),
        Some(Value::Bool(true)) => "true".to_string(),
        // null, false, 0 and containers render empty
        _ => String::new(),
    }
}

/// Decode the comment carried by `body`, substituting an empty comment when the
/// body is not a readable payload.
pub fn extract_comment(body: &MessageBody) -> CommentObject {
    match EmbeddedBody::from(body).decode() {
        Ok(comment) => comment,
        Err(err) => {
            debug!(error = %err, "body is not an embedded comment payload; using defaults");
            CommentObject::default()
        }
    }
}
