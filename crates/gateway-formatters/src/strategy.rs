use formatter_config::FallbackShape;
use gateway_model::Message;

/// Payload builders a message can be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderStrategy {
    PlainText,
    Markdown,
    RichArticle,
}

impl BuilderStrategy {
    /// `msgtype` of the payload the strategy produces.
    pub fn msgtype(self) -> &'static str {
        match self {
            BuilderStrategy::PlainText => "text",
            BuilderStrategy::Markdown => "markdown",
            BuilderStrategy::RichArticle => "news",
        }
    }
}

impl From<FallbackShape> for BuilderStrategy {
    fn from(shape: FallbackShape) -> Self {
        match shape {
            FallbackShape::PlainText => BuilderStrategy::PlainText,
            FallbackShape::Markdown => BuilderStrategy::Markdown,
        }
    }
}

/// A message qualifies for a news article when it has a link and a cover image.
pub fn is_article_eligible(message: &Message) -> bool {
    message.link().is_some() && message.cover_image().is_some()
}

/// Pick the builder for `message`. Total: every message maps to one strategy.
pub fn select_strategy(message: &Message, fallback: FallbackShape) -> BuilderStrategy {
    if is_article_eligible(message) {
        BuilderStrategy::RichArticle
    } else {
        fallback.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gateway_model::Image;

    fn message(link: Option<&str>, images: Vec<Image>) -> Message {
        Message {
            link: link.map(str::to_string),
            images,
            ..Message::default()
        }
    }

    #[test]
    fn link_and_cover_select_article() {
        let msg = message(Some("https://x"), vec![Image::cover("https://x/c.png")]);
        for fallback in [FallbackShape::PlainText, FallbackShape::Markdown] {
            assert_eq!(select_strategy(&msg, fallback), BuilderStrategy::RichArticle);
        }
    }

    #[test]
    fn link_without_cover_falls_back() {
        let msg = message(Some("https://x"), vec![Image::other("https://x/o.png")]);
        assert_eq!(
            select_strategy(&msg, FallbackShape::PlainText),
            BuilderStrategy::PlainText
        );
    }

    #[test]
    fn cover_without_link_falls_back() {
        let msg = message(None, vec![Image::cover("https://x/c.png")]);
        assert_eq!(
            select_strategy(&msg, FallbackShape::Markdown),
            BuilderStrategy::Markdown
        );
    }

    #[test]
    fn empty_link_is_not_eligible() {
        let msg = message(Some(""), vec![Image::cover("https://x/c.png")]);
        assert!(!is_article_eligible(&msg));
    }

    #[test]
    fn msgtype_names() {
        assert_eq!(BuilderStrategy::PlainText.msgtype(), "text");
        assert_eq!(BuilderStrategy::Markdown.msgtype(), "markdown");
        assert_eq!(BuilderStrategy::RichArticle.msgtype(), "news");
    }
}
