use crate::payload::{MarkdownContent, WechatWorkPayload};
use formatter_config::LabelConfig;
use gateway_model::{Mention, MentionTarget, Message};

/// Build a markdown message.
///
/// Sections are emitted in a fixed order (title, body, fields, link, footer).
/// The fields, link and footer sections get a blank line in front of them only
/// when something precedes them, so the content never starts or ends with a
/// separator.
pub fn build_markdown(message: &Message, labels: &LabelConfig) -> WechatWorkPayload {
    let mut lines: Vec<String> = Vec::new();

    if let Some(title) = message.title() {
        lines.push(format!("### {title}"));
    }

    let body = message.body.to_text();
    if !body.is_empty() {
        lines.push(body.into_owned());
    }

    if !message.fields.is_empty() {
        push_separator(&mut lines);
        for field in &message.fields {
            lines.push(format!(
                "> **{}**: <font color=\"comment\">{}</font>",
                field.label, field.value
            ));
        }
    }

    if let Some(link) = message.link() {
        push_separator(&mut lines);
        lines.push(format!("[{}]({link})", labels.view_details));
    }

    if let Some(footer) = message.footer() {
        push_separator(&mut lines);
        lines.push(format!("<font color=\"comment\">{footer}</font>"));
    }

    let mut content = lines.join("\n");
    let mentions = MentionLists::collect(&message.mentions);
    if !mentions.mentioned.is_empty() {
        if !content.is_empty() {
            content.push('\n');
        }
        content.push_str(&mentions.inline_tokens());
    }

    let (mentioned_list, mentioned_mobile_list) = if mentions.is_empty() {
        (None, None)
    } else {
        (Some(mentions.mentioned), Some(mentions.mobile))
    };

    WechatWorkPayload::Markdown {
        markdown: MarkdownContent {
            content,
            mentioned_list,
            mentioned_mobile_list,
        },
    }
}

fn push_separator(lines: &mut Vec<String>) {
    if !lines.is_empty() {
        lines.push(String::new());
    }
}

#[derive(Debug, Default)]
struct MentionLists {
    /// Broadcast (`all`) and user-id mentions, in input order.
    mentioned: Vec<String>,
    /// Name mentions; resolved by the provider, never rendered inline.
    mobile: Vec<String>,
}

impl MentionLists {
    fn collect(mentions: &[Mention]) -> Self {
        let mut lists = Self::default();
        for mention in mentions {
            match mention.target() {
                MentionTarget::Broadcast => lists.mentioned.push("all".to_string()),
                MentionTarget::Id(id) => lists.mentioned.push(id.to_string()),
                MentionTarget::Name(name) => lists.mobile.push(name.to_string()),
                MentionTarget::Unresolved => {}
            }
        }
        lists
    }

    fn is_empty(&self) -> bool {
        self.mentioned.is_empty() && self.mobile.is_empty()
    }

    fn inline_tokens(&self) -> String {
        self.mentioned
            .iter()
            .map(|id| format!("<@{id}>"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gateway_model::{Field, MessageBody};

    fn content_of(payload: &WechatWorkPayload) -> &MarkdownContent {
        match payload {
            WechatWorkPayload::Markdown { markdown } => markdown,
            other => panic!("expected markdown payload, got {}", other.msgtype()),
        }
    }

    #[test]
    fn renders_all_sections_in_order() {
        let message = Message {
            title: Some("Build Failed".into()),
            body: "unit tests failed".into(),
            fields: vec![Field::new("branch", "main"), Field::new("job", "test")],
            link: Some("https://ci.example.com/42".into()),
            footer: Some("CI".into()),
            ..Message::default()
        };
        let payload = build_markdown(&message, &LabelConfig::default());
        let markdown = content_of(&payload);
        assert_eq!(
            markdown.content,
            "### Build Failed\n\
             unit tests failed\n\
             \n\
             > **branch**: <font color=\"comment\">main</font>\n\
             > **job**: <font color=\"comment\">test</font>\n\
             \n\
             [View details](https://ci.example.com/42)\n\
             \n\
             <font color=\"comment\">CI</font>"
        );
        assert!(markdown.mentioned_list.is_none());
        assert!(markdown.mentioned_mobile_list.is_none());
    }

    #[test]
    fn leading_section_has_no_separator() {
        let message = Message {
            fields: vec![Field::new("k", "v")],
            footer: Some("end".into()),
            ..Message::default()
        };
        let payload = build_markdown(&message, &LabelConfig::default());
        let content = &content_of(&payload).content;
        assert!(content.starts_with("> **k**"));
        assert!(!content.ends_with('\n'));
        assert_eq!(content.matches("\n\n").count(), 1);
    }

    #[test]
    fn empty_message_yields_empty_content() {
        let payload = build_markdown(&Message::default(), &LabelConfig::default());
        assert_eq!(content_of(&payload).content, "");
    }

    #[test]
    fn mentions_split_into_lists() {
        let message = Message {
            body: "deploy done".into(),
            mentions: vec![
                Mention::all(),
                Mention::user_id("u1"),
                Mention::user_name("Bob"),
            ],
            ..Message::default()
        };
        let payload = build_markdown(&message, &LabelConfig::default());
        let markdown = content_of(&payload);
        assert_eq!(
            markdown.mentioned_list.as_deref(),
            Some(&["all".to_string(), "u1".to_string()][..])
        );
        assert_eq!(
            markdown.mentioned_mobile_list.as_deref(),
            Some(&["Bob".to_string()][..])
        );
        assert_eq!(markdown.content, "deploy done\n<@all> <@u1>");
    }

    #[test]
    fn mentions_alone_have_no_leading_newline() {
        let message = Message {
            mentions: vec![Mention::all()],
            ..Message::default()
        };
        let payload = build_markdown(&message, &LabelConfig::default());
        let markdown = content_of(&payload);
        assert_eq!(markdown.content, "<@all>");
        assert_eq!(
            markdown.mentioned_list.as_deref(),
            Some(&["all".to_string()][..])
        );
    }

    #[test]
    fn name_only_mentions_add_no_inline_line() {
        let message = Message {
            body: "ping".into(),
            mentions: vec![Mention::user_name("Bob")],
            ..Message::default()
        };
        let payload = build_markdown(&message, &LabelConfig::default());
        let markdown = content_of(&payload);
        assert_eq!(markdown.content, "ping");
        assert_eq!(markdown.mentioned_list.as_deref(), Some(&[][..]));
        assert_eq!(
            markdown.mentioned_mobile_list.as_deref(),
            Some(&["Bob".to_string()][..])
        );
    }

    #[test]
    fn unresolved_mentions_are_dropped() {
        let message = Message {
            body: "ping".into(),
            mentions: vec![Mention {
                kind: gateway_model::MentionKind::User,
                user_id: None,
                name: None,
            }],
            ..Message::default()
        };
        let payload = build_markdown(&message, &LabelConfig::default());
        let markdown = content_of(&payload);
        assert_eq!(markdown.content, "ping");
        assert!(markdown.mentioned_list.is_none());
        assert!(markdown.mentioned_mobile_list.is_none());
    }

    #[test]
    fn structured_body_renders_as_json() {
        let message = Message {
            body: MessageBody::Structured(serde_json::json!({"k": 1})),
            ..Message::default()
        };
        let payload = build_markdown(&message, &LabelConfig::default());
        assert_eq!(content_of(&payload).content, r#"{"k":1}"#);
    }

    #[test]
    fn custom_details_label() {
        let labels = LabelConfig {
            view_details: "查看详情".into(),
            ..LabelConfig::default()
        };
        let message = Message {
            link: Some("https://x".into()),
            ..Message::default()
        };
        let payload = build_markdown(&message, &labels);
        assert_eq!(content_of(&payload).content, "[查看详情](https://x)");
    }
}
