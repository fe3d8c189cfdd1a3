use thiserror::Error;

use crate::config::ConfigError;
use crate::normalizer::DecodeError;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Feed did not respond after {attempts} attempts")]
    TimeoutExceeded { attempts: u32 },

    #[error("HTTP error: {0}")]
    Transport(String),

    #[error("Feed parsing error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl CatalogError {
    /// Whether the upstream feed may recover on its own, so that asking the
    /// user to try again later makes sense.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            CatalogError::TimeoutExceeded { .. } | CatalogError::Transport(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
