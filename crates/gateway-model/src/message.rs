use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;

/// A notification as produced by the gateway, before any provider mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub body: MessageBody,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<Image>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mentions: Vec<Mention>,
}

impl Message {
    /// Title, if present and non-empty.
    pub fn title(&self) -> Option<&str> {
        non_empty(self.title.as_deref())
    }

    /// Link, if present and non-empty.
    pub fn link(&self) -> Option<&str> {
        non_empty(self.link.as_deref())
    }

    /// Footer, if present and non-empty.
    pub fn footer(&self) -> Option<&str> {
        non_empty(self.footer.as_deref())
    }

    /// First image tagged as a cover.
    pub fn cover_image(&self) -> Option<&Image> {
        self.images.iter().find(|image| image.kind == ImageKind::Cover)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

/// Message body: free text, or an already-structured payload forwarded by an
/// upstream integration.
///
/// A JSON string deserializes to [`MessageBody::Text`]; every other JSON value
/// lands in [`MessageBody::Structured`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageBody {
    Text(String),
    Structured(Value),
}

impl Default for MessageBody {
    fn default() -> Self {
        MessageBody::Text(String::new())
    }
}

impl MessageBody {
    pub fn is_empty(&self) -> bool {
        match self {
            MessageBody::Text(text) => text.is_empty(),
            MessageBody::Structured(value) => value.is_null(),
        }
    }

    /// Textual rendering; structured bodies are emitted as compact JSON.
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            MessageBody::Text(text) => Cow::Borrowed(text),
            MessageBody::Structured(Value::Null) => Cow::Borrowed(""),
            MessageBody::Structured(value) => Cow::Owned(value.to_string()),
        }
    }
}

impl From<&str> for MessageBody {
    fn from(value: &str) -> Self {
        MessageBody::Text(value.to_string())
    }
}

impl From<String> for MessageBody {
    fn from(value: String) -> Self {
        MessageBody::Text(value)
    }
}

impl From<Value> for MessageBody {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => MessageBody::Text(text),
            other => MessageBody::Structured(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub label: String,
    pub value: String,
}

impl Field {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    #[serde(rename = "type", default)]
    pub kind: ImageKind,
}

impl Image {
    pub fn cover(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            kind: ImageKind::Cover,
        }
    }

    pub fn other(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            kind: ImageKind::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    Cover,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mention {
    #[serde(rename = "type")]
    pub kind: MentionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Mention {
    pub fn all() -> Self {
        Self {
            kind: MentionKind::All,
            user_id: None,
            name: None,
        }
    }

    pub fn user_id(id: impl Into<String>) -> Self {
        Self {
            kind: MentionKind::User,
            user_id: Some(id.into()),
            name: None,
        }
    }

    pub fn user_name(name: impl Into<String>) -> Self {
        Self {
            kind: MentionKind::User,
            user_id: None,
            name: Some(name.into()),
        }
    }

    /// Classify the mention. Every entry maps to exactly one target, checked
    /// in order: broadcast, user id, user name.
    pub fn target(&self) -> MentionTarget<'_> {
        if self.kind == MentionKind::All {
            return MentionTarget::Broadcast;
        }
        if let Some(id) = non_empty(self.user_id.as_deref()) {
            return MentionTarget::Id(id);
        }
        match non_empty(self.name.as_deref()) {
            Some(name) => MentionTarget::Name(name),
            None => MentionTarget::Unresolved,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MentionKind {
    All,
    User,
}

/// Resolved recipient of a [`Mention`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MentionTarget<'a> {
    Broadcast,
    Id(&'a str),
    Name(&'a str),
    /// A user mention carrying neither an id nor a name.
    Unresolved,
}
