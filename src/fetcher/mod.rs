pub mod http_fetcher;
pub mod retry;

use async_trait::async_trait;
use thiserror::Error;

pub use http_fetcher::HttpFetcher;
pub use retry::{fetch_with_retry, RetryPolicy};

/// Why a single fetch attempt failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttemptError {
    /// Connecting or reading took too long. The only retried failure.
    #[error("timed out: {0}")]
    Timeout(String),

    /// The feed answered with an error status, or the connection failed.
    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    Other(String),
}

/// One attempt at retrieving the feed body.
#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<String, AttemptError>;
}
