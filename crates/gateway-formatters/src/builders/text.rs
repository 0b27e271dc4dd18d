use crate::embedded::{CommentObject, extract_comment};
use crate::payload::WechatWorkPayload;
use formatter_config::CommentReportConfig;
use gateway_model::Message;

/// Build a plain-text report of the comment embedded in the message body.
///
/// Bodies that are not comment payloads still produce a report, with every
/// comment field empty.
pub fn build_comment_report(message: &Message, config: &CommentReportConfig) -> WechatWorkPayload {
    let comment = extract_comment(&message.body);
    WechatWorkPayload::text(render_comment_report(&comment, config))
}

pub fn render_comment_report(comment: &CommentObject, config: &CommentReportConfig) -> String {
    let nick = if comment.nick.is_empty() {
        config.guest_name.as_str()
    } else {
        comment.nick.as_str()
    };

    [
        format!("{nick} commented:"),
        comment.comment.clone(),
        format!("Email: {}", comment.mail),
        format!("Status: {}", comment.status),
        format!("Time: {}", comment.inserted_at),
        format!("IP: {}", comment.ip),
        "Comment preview only, view the full content:".to_string(),
        format!("{}{}", config.site_origin, comment.url),
    ]
    .join("\n")
}
