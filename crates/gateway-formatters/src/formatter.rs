use crate::builders::{build_comment_report, build_markdown, build_news};
use crate::errors::FormatError;
use crate::payload::WechatWorkPayload;
use crate::strategy::{BuilderStrategy, select_strategy};
use formatter_config::WechatWorkConfig;
use gateway_model::{FormattedRequest, GatewayEvent, Message, ProviderKind, TargetEndpoint};
use tracing::debug;

/// Adapter contract: turn a gateway event into a request for one provider.
///
/// Implementations hold immutable configuration only and may be shared across
/// threads.
pub trait OutputFormatter: Send + Sync {
    fn name(&self) -> &'static str;

    fn provider(&self) -> ProviderKind;

    fn format(&self, event: &GatewayEvent, target: &TargetEndpoint) -> FormattedRequest;
}

/// Formatter for the WeCom (WeChat Work) group-robot webhook.
#[derive(Debug, Clone, Default)]
pub struct WechatWorkFormatter {
    config: WechatWorkConfig,
}

impl WechatWorkFormatter {
    pub fn new(config: WechatWorkConfig) -> Result<Self, FormatError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &WechatWorkConfig {
        &self.config
    }

    /// Base URL followed by the token, verbatim.
    pub fn build_url(&self, target: &TargetEndpoint) -> String {
        format!("{}{}", self.config.api_base_url, target.token)
    }

    pub fn strategy_for(&self, message: &Message) -> BuilderStrategy {
        select_strategy(message, self.config.fallback)
    }

    pub fn build_payload(&self, message: &Message) -> WechatWorkPayload {
        let strategy = self.strategy_for(message);
        debug!(
            provider = self.name(),
            strategy = ?strategy,
            msgtype = strategy.msgtype(),
            fields = message.fields.len(),
            mentions = message.mentions.len(),
            "selected payload builder"
        );
        match strategy {
            BuilderStrategy::RichArticle => build_news(message, &self.config.labels),
            BuilderStrategy::Markdown => build_markdown(message, &self.config.labels),
            BuilderStrategy::PlainText => build_comment_report(message, &self.config.comment),
        }
    }
}

impl OutputFormatter for WechatWorkFormatter {
    fn name(&self) -> &'static str {
        ProviderKind::WechatWork.as_str()
    }

    fn provider(&self) -> ProviderKind {
        ProviderKind::WechatWork
    }

    fn format(&self, event: &GatewayEvent, target: &TargetEndpoint) -> FormattedRequest {
        let payload = self.build_payload(&event.message);
        FormattedRequest::post_json(self.build_url(target), payload.to_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formatter_config::{ConfigError, FallbackShape};
    use gateway_model::{CONTENT_TYPE_JSON, HttpMethod, Image};

    #[test]
    fn url_appends_token_verbatim() {
        let formatter = WechatWorkFormatter::default();
        let url = formatter.build_url(&TargetEndpoint::new("a b/c?&=%"));
        assert_eq!(
            url,
            "https://qyapi.weixin.qq.com/cgi-bin/webhook/send?key=a b/c?&=%"
        );
    }

    #[test]
    fn format_wraps_payload() {
        let formatter = WechatWorkFormatter::default();
        let request = formatter.format(
            &GatewayEvent::new(Message::default()),
            &TargetEndpoint::new("key-1"),
        );
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.header("Content-Type"), Some(CONTENT_TYPE_JSON));
        assert_eq!(request.body["msgtype"], "text");
        assert!(request.url.ends_with("key=key-1"));
    }

    #[test]
    fn article_wins_over_configured_fallback() {
        let config = WechatWorkConfig {
            fallback: FallbackShape::Markdown,
            ..WechatWorkConfig::default()
        };
        let formatter = WechatWorkFormatter::new(config).expect("valid config");
        let message = Message {
            link: Some("https://x".into()),
            images: vec![Image::cover("https://x/c.png")],
            ..Message::default()
        };
        assert_eq!(formatter.build_payload(&message).msgtype(), "news");
        assert_eq!(
            formatter.build_payload(&Message::default()).msgtype(),
            "markdown"
        );
    }

    #[test]
    fn strategy_msgtype_matches_payload() {
        let formatter = WechatWorkFormatter::default();
        let article = Message {
            link: Some("https://x".into()),
            images: vec![Image::cover("https://x/c.png")],
            ..Message::default()
        };
        for message in [Message::default(), article] {
            assert_eq!(
                formatter.strategy_for(&message).msgtype(),
                formatter.build_payload(&message).msgtype()
            );
        }
    }

    #[test]
    fn rejects_invalid_config() {
        let config = WechatWorkConfig {
            schema_version: 2,
            ..WechatWorkConfig::default()
        };
        let err = WechatWorkFormatter::new(config).unwrap_err();
        assert!(matches!(
            err,
            FormatError::Config(ConfigError::UnsupportedSchemaVersion { got: 2, .. })
        ));
    }

    #[test]
    fn identity() {
        let formatter = WechatWorkFormatter::default();
        assert_eq!(formatter.name(), "wechatwork");
        assert_eq!(formatter.provider(), ProviderKind::WechatWork);
    }
}
