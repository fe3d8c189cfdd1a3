use std::sync::Arc;

use crate::app::error::Result;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::fetcher::{Fetcher, HttpFetcher, RetryPolicy};

pub struct AppContext {
    pub config: Config,
    pub catalog: Catalog,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new(&config.feed)?);
        Ok(Self::with_fetcher(config, fetcher))
    }

    pub fn with_fetcher(config: Config, fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        let catalog = Catalog::new(
            fetcher,
            config.feed.url.clone(),
            RetryPolicy::from(&config.feed),
        );

        Self { config, catalog }
    }
}
