pub mod configuration_error;
pub mod content_error;
pub mod error;
pub mod message;
pub mod payload;
pub mod target;
