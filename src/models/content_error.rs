use thiserror::Error;

/// Raised by a [`MessageTransformer`](crate::MessageTransformer) when a message
/// cannot be turned into a content fragment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Message type not exist")]
    MissingType,

    #[error("Unknown message type: {0}")]
    UnknownType(String),

    #[error("Message body missing for type: {0}")]
    MissingBody(String),

    #[error("Text message content is empty")]
    EmptyContent,

    #[error("Media id missing for {0} message")]
    MissingMediaId(String),

    #[error("Card id missing for wxcard message")]
    MissingCardId,

    #[error("Content fragment uses reserved key: {0}")]
    ReservedKey(String),
}
