pub mod query;

use std::sync::Arc;

use crate::app::Result;
use crate::domain::Product;
use crate::fetcher::{fetch_with_retry, Fetcher, RetryPolicy};
use crate::normalizer::Normalizer;

/// The remote catalog.
///
/// Holds no products: every operation fetches and decodes the feed anew.
#[derive(Clone)]
pub struct Catalog {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    normalizer: Normalizer,
    url: String,
    policy: RetryPolicy,
}

impl Catalog {
    pub fn new(
        fetcher: Arc<dyn Fetcher + Send + Sync>,
        url: impl Into<String>,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            fetcher,
            normalizer: Normalizer::new(),
            url: url.into(),
            policy,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the feed and decode it into classified products.
    pub async fn fetch_all(&self) -> Result<Vec<Product>> {
        let body = fetch_with_retry(self.fetcher.as_ref(), &self.url, self.policy).await?;
        let products = self.normalizer.normalize(&body)?;
        tracing::info!("Fetched {} products from {}", products.len(), self.url);
        Ok(products)
    }

    pub async fn list_all(&self) -> Result<Vec<Product>> {
        self.fetch_all().await
    }

    pub async fn search(&self, term: &str) -> Result<Vec<Product>> {
        Ok(query::search(self.fetch_all().await?, term))
    }

    pub async fn by_index(&self, index: i64) -> Result<Product> {
        query::by_index(self.fetch_all().await?, index)
    }

    pub async fn list_categories(&self) -> Result<Vec<String>> {
        Ok(query::categories(&self.fetch_all().await?))
    }

    pub async fn by_category(&self, name: &str) -> Result<Vec<Product>> {
        query::by_category(self.fetch_all().await?, name)
    }
}
