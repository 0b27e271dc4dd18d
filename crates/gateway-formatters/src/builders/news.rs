use crate::payload::{Article, NewsContent, WechatWorkPayload};
use formatter_config::LabelConfig;
use gateway_model::Message;

/// Build a single-article news message. The first cover image becomes the
/// article picture.
pub fn build_news(message: &Message, labels: &LabelConfig) -> WechatWorkPayload {
    let article = Article {
        title: message
            .title()
            .unwrap_or(labels.news_default_title.as_str())
            .to_string(),
        description: message.body.to_text().into_owned(),
        url: message.link().map(str::to_string),
        picurl: message.cover_image().map(|image| image.url.clone()),
    };

    WechatWorkPayload::News {
        news: NewsContent {
            articles: vec![article],
        },
    }
}
