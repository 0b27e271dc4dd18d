//! WeCom group-robot wire payloads.
//!
//! Field names and the `msgtype` tag are fixed by the provider API.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "msgtype", rename_all = "lowercase")]
pub enum WechatWorkPayload {
    Text { text: TextContent },
    Markdown { markdown: MarkdownContent },
    News { news: NewsContent },
}

impl WechatWorkPayload {
    pub fn text(content: impl Into<String>) -> Self {
        WechatWorkPayload::Text {
            text: TextContent {
                content: content.into(),
            },
        }
    }

    pub fn msgtype(&self) -> &'static str {
        match self {
            WechatWorkPayload::Text { .. } => "text",
            WechatWorkPayload::Markdown { .. } => "markdown",
            WechatWorkPayload::News { .. } => "news",
        }
    }

    /// JSON body for the outbound request.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|err| {
            error!(error = %err, msgtype = self.msgtype(), "failed to serialize payload");
            Value::Null
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkdownContent {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentioned_list: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentioned_mobile_list: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsContent {
    pub articles: Vec<Article>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picurl: Option<String>,
}
