// Page fetching, the one capability the pipeline needs from the network.
//
// PageFetcher is the swap-ready abstraction over HTTP transport: the crawl
// code only ever asks for the raw bytes of a URL. The default implementation
// is a thin reqwest wrapper; tests substitute an in-memory fake.

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

use crate::config::Config;
use crate::error::CrawlError;

/// Fetch the raw bytes of a page. Implementations must map every transport
/// failure to `CrawlError::Network` carrying the offending URL.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, CrawlError>;
}

/// HTTP fetcher used for real runs.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, CrawlError> {
        debug!(url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CrawlError::network(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CrawlError::network(url, format!("status {status}")));
        }

        response
            .bytes()
            .await
            .map(|body| body.to_vec())
            .map_err(|e| CrawlError::network(url, e.to_string()))
    }
}
