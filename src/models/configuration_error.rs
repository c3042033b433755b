use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("No message content to send")]
    MissingMessage,

    #[error("No target to send to")]
    MissingTarget,

    #[error("Target is empty")]
    EmptyTarget,

    #[error("Invalid setting: {key}={value}")]
    InvalidSetting { key: String, value: String },
}
