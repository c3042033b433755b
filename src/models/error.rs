use thiserror::Error;

use super::{configuration_error::ConfigurationError, content_error::ContentError};

/// Error returned by every terminal build operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Content error: {0}")]
    Content(#[from] ContentError),
}

impl BuildError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, BuildError::Configuration(_))
    }

    pub fn is_content(&self) -> bool {
        matches!(self, BuildError::Content(_))
    }
}
