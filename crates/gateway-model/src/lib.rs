//! Provider-agnostic notification model shared by every output formatter.
//!
//! The gateway hands formatters a [`GatewayEvent`] and a [`TargetEndpoint`];
//! formatters answer with a [`FormattedRequest`] that an external sender
//! dispatches. Nothing in this crate performs I/O.

pub mod message;
pub mod request;

pub use message::{
    Field, Image, ImageKind, Mention, MentionKind, MentionTarget, Message, MessageBody,
};
pub use request::{
    CONTENT_TYPE, CONTENT_TYPE_JSON, FormattedRequest, GatewayEvent, HttpMethod, ProviderKind,
    TargetEndpoint,
};
