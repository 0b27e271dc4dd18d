//! One pure builder per WeCom wire shape.

pub mod markdown;
pub mod news;
pub mod text;

pub use markdown::build_markdown;
pub use news::build_news;
pub use text::{build_comment_report, render_comment_report};
