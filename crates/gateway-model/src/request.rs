use crate::message::Message;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// An inbound notification occurrence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GatewayEvent {
    pub message: Message,
}

impl GatewayEvent {
    pub fn new(message: Message) -> Self {
        Self { message }
    }
}

/// Provider destination credential. The token is opaque and never transformed.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetEndpoint {
    pub token: String,
}

impl TargetEndpoint {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl fmt::Debug for TargetEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetEndpoint")
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Chat providers a formatter can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    WechatWork,
}

impl ProviderKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ProviderKind::WechatWork => "wechatwork",
        }
    }

    /// Parse a provider id (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "wechatwork" | "wecom" => Some(Self::WechatWork),
            _ => None,
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Post,
}

/// Fully built outbound request, ready for an external sender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: BTreeMap<String, String>,
    pub body: Value,
}

impl FormattedRequest {
    /// `POST` with a JSON content type.
    pub fn post_json(url: impl Into<String>, body: Value) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(CONTENT_TYPE.to_string(), CONTENT_TYPE_JSON.to_string());
        Self {
            url: url.into(),
            method: HttpMethod::Post,
            headers,
            body,
        }
    }

    /// Header lookup, case-insensitive on the name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}
