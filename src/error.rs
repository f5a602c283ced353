// Error taxonomy for the crawl-and-rank pipeline.
//
// Network and structure failures always carry the offending URL so a failed
// run can be traced back to a specific page. Config errors are raised during
// up-front validation, before any network work starts.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CrawlError {
    /// The page could not be fetched: DNS, timeout, or non-success status.
    #[error("network error fetching {url}: {reason}")]
    Network { url: String, reason: String },

    /// A fetched page is missing the expected content container.
    #[error("unexpected page structure at {url}: {reason}")]
    Structure { url: String, reason: String },

    /// Invalid run parameters.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A seed produced no usable documents after extraction.
    #[error("seed {seed} produced no usable documents")]
    EmptyCorpus { seed: String },
}

impl CrawlError {
    pub fn network(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Network {
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub fn structure(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Structure {
            url: url.into(),
            reason: reason.into(),
        }
    }
}
