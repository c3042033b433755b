pub mod config;
pub mod models;
pub mod services;

pub use config::{Config, ReprintPolicy};
pub use models::{
    configuration_error::ConfigurationError,
    content_error::ContentError,
    error::BuildError,
    message::{Message, MsgType, RawMessage},
    payload::Payload,
    target::{GroupId, PreviewBy, Target},
};
pub use services::{
    mass::{BroadcastRequest, Endpoint, delete_request, status_request},
    messenger::Messenger,
    transformer::{DefaultTransformer, MessageTransformer},
};
