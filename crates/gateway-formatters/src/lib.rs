//! Output formatters for the notification gateway.
//!
//! A formatter maps a provider-agnostic [`gateway_model::Message`] onto one
//! webhook wire payload and wraps it into a [`gateway_model::FormattedRequest`].
//! Formatting is pure: no I/O, no shared mutable state, and no failure path for
//! a well-typed message.

pub mod builders;
pub mod embedded;
pub mod errors;
pub mod formatter;
pub mod payload;
pub mod registry;
pub mod strategy;

pub use embedded::{CommentObject, EmbeddedBody, extract_comment};
pub use errors::{DecodeError, FormatError};
pub use formatter::{OutputFormatter, WechatWorkFormatter};
pub use payload::{Article, MarkdownContent, NewsContent, TextContent, WechatWorkPayload};
pub use registry::FormatterRegistry;
pub use strategy::{BuilderStrategy, is_article_eligible, select_strategy};
