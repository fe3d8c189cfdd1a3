use std::time::Duration;

use async_trait::async_trait;
use reqwest::redirect::Policy;
use reqwest::Client;

use crate::app::{CatalogError, Result};
use crate::config::FeedConfig;
use crate::fetcher::{AttemptError, Fetcher};

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &FeedConfig) -> Result<Self> {
        Self::with_timeouts(
            config.connect_timeout(),
            config.read_timeout(),
            config.request_timeout(),
            &config.user_agent,
        )
    }

    pub fn with_timeouts(
        connect: Duration,
        read: Duration,
        request: Option<Duration>,
        user_agent: &str,
    ) -> Result<Self> {
        let mut builder = Client::builder()
            .connect_timeout(connect)
            .read_timeout(read)
            .gzip(true)
            .brotli(true)
            .redirect(Policy::none())
            .user_agent(user_agent);

        if let Some(request) = request {
            builder = builder.timeout(request);
        }

        let client = builder
            .build()
            .map_err(|e| CatalogError::Unexpected(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> std::result::Result<String, AttemptError> {
        let response = self.client.get(url).send().await.map_err(classify)?;

        // Redirects and other non-2xx answers are failures, not feed bodies.
        let status = response.status();
        if !status.is_success() {
            return Err(AttemptError::Transport(format!("HTTP status {}", status)));
        }

        response.text().await.map_err(classify)
    }
}

fn classify(err: reqwest::Error) -> AttemptError {
    if err.is_timeout() {
        AttemptError::Timeout(err.to_string())
    } else if err.is_builder() {
        AttemptError::Other(err.to_string())
    } else {
        AttemptError::Transport(err.to_string())
    }
}
