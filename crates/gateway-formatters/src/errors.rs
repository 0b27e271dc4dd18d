use formatter_config::ConfigError;
use thiserror::Error;

/// Errors surfaced by formatter construction and provider lookup.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("no formatter registered for provider `{0}`")]
    UnknownProvider(String),
    #[error("invalid formatter config: {0}")]
    Config(#[from] ConfigError),
}

/// Failure to read an embedded payload out of a message body.
///
/// Never reaches callers of a formatter; see [`crate::extract_comment`].
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("embedded body is not valid json: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("`data.comment` must be an object, found {0}")]
    InvalidComment(&'static str),
}
