//! Core types: Identifier, SlugConfig, ConfigurationError

mod error;
mod identifier;
mod slug_config;

pub use error::ConfigurationError;
pub use identifier::Identifier;
pub use slug_config::{DEFAULT_MAX_LENGTH, SlugConfig, SlugConfigBuilder};
