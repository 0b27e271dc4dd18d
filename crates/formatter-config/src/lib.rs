use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

pub const FORMATTER_CONFIG_SCHEMA_VERSION: u32 = 1;

/// WeCom group-robot webhook endpoint; the robot key is appended verbatim.
pub const DEFAULT_WECHATWORK_BASE_URL: &str =
    "https://qyapi.weixin.qq.com/cgi-bin/webhook/send?key=";

/// Origin prefixed to the relative `url` of an embedded comment.
pub const DEFAULT_COMMENT_SITE_ORIGIN: &str = "https://www.huochairener-blog.cn";

/// Environment variable overriding [`WechatWorkConfig::fallback`].
pub const FALLBACK_ENV: &str = "GATEWAY_WECHATWORK_FALLBACK";

fn default_schema_version() -> u32 {
    FORMATTER_CONFIG_SCHEMA_VERSION
}

fn default_base_url() -> String {
    DEFAULT_WECHATWORK_BASE_URL.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct WechatWorkConfig {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    #[serde(default = "default_base_url")]
    pub api_base_url: String,
    #[serde(default)]
    pub fallback: FallbackShape,
    #[serde(default)]
    pub labels: LabelConfig,
    #[serde(default)]
    pub comment: CommentReportConfig,
}

impl Default for WechatWorkConfig {
    fn default() -> Self {
        Self {
            schema_version: FORMATTER_CONFIG_SCHEMA_VERSION,
            api_base_url: default_base_url(),
            fallback: FallbackShape::default(),
            labels: LabelConfig::default(),
            comment: CommentReportConfig::default(),
        }
    }
}

impl WechatWorkConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.schema_version != FORMATTER_CONFIG_SCHEMA_VERSION {
            return Err(ConfigError::UnsupportedSchemaVersion {
                expected: FORMATTER_CONFIG_SCHEMA_VERSION,
                got: self.schema_version,
            });
        }
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::EmptyField("api_base_url"));
        }
        if self.comment.site_origin.trim().is_empty() {
            return Err(ConfigError::EmptyField("comment.site_origin"));
        }
        Ok(())
    }

    /// Applies [`FALLBACK_ENV`] when it holds a recognised shape.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(shape) = FallbackShape::from_env() {
            self.fallback = shape;
        }
        self
    }
}

/// Shape used when a message does not qualify for a news article.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FallbackShape {
    /// Plain-text report of an embedded comment payload.
    #[default]
    PlainText,
    Markdown,
}

impl FallbackShape {
    /// Parse a shape name (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "plain-text" | "plaintext" | "text" => Some(Self::PlainText),
            "markdown" | "md" => Some(Self::Markdown),
            _ => None,
        }
    }

    pub fn from_env() -> Option<Self> {
        env::var(FALLBACK_ENV)
            .ok()
            .and_then(|value| Self::parse(&value))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LabelConfig {
    /// Article title used when the message has none.
    #[serde(default = "LabelConfig::default_news_title")]
    pub news_default_title: String,
    /// Link text in markdown messages.
    #[serde(default = "LabelConfig::default_view_details")]
    pub view_details: String,
}

impl LabelConfig {
    fn default_news_title() -> String {
        "Notification".to_string()
    }

    fn default_view_details() -> String {
        "View details".to_string()
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            news_default_title: Self::default_news_title(),
            view_details: Self::default_view_details(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CommentReportConfig {
    #[serde(default = "CommentReportConfig::default_site_origin")]
    pub site_origin: String,
    /// Commenter name used when the payload carries no nick.
    #[serde(default = "CommentReportConfig::default_guest_name")]
    pub guest_name: String,
}

impl CommentReportConfig {
    fn default_site_origin() -> String {
        DEFAULT_COMMENT_SITE_ORIGIN.to_string()
    }

    fn default_guest_name() -> String {
        "guest".to_string()
    }
}

impl Default for CommentReportConfig {
    fn default() -> Self {
        Self {
            site_origin: Self::default_site_origin(),
            guest_name: Self::default_guest_name(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unsupported schema version: expected {expected}, got {got}")]
    UnsupportedSchemaVersion { expected: u32, got: u32 },
    #[error("config field `{0}` must not be empty")]
    EmptyField(&'static str),
}
