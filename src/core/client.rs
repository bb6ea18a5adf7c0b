use crate::core::fetch::{HttpFetcher, DEFAULT_TIMEOUT};
use crate::domain::ports::PageFetcher;
use crate::utils::error::Result;
use crate::utils::validation::validate_url;
use std::sync::Arc;

pub const TENSORZERO_SITE: &str = "https://tensorzero.com";

/// A named client with one synchronous accessor and one async fetch.
#[derive(Clone)]
pub struct Client {
    name: String,
    endpoint: String,
    fetcher: Arc<dyn PageFetcher>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("name", &self.name)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl Client {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Self::with_endpoint(name, TENSORZERO_SITE)
    }

    pub fn with_endpoint(name: impl Into<String>, endpoint: impl Into<String>) -> Result<Self> {
        let fetcher = HttpFetcher::new(DEFAULT_TIMEOUT)?;
        Self::with_fetcher(name, endpoint, Arc::new(fetcher))
    }

    pub fn with_fetcher(
        name: impl Into<String>,
        endpoint: impl Into<String>,
        fetcher: Arc<dyn PageFetcher>,
    ) -> Result<Self> {
        let endpoint = endpoint.into();
        validate_url("client.endpoint", &endpoint)?;

        Ok(Self {
            name: name.into(),
            endpoint,
            fetcher,
        })
    }

    /// The name this client was constructed with.
    pub fn get_value(&self) -> String {
        self.name.clone()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn get_tensorzero_website(&self) -> Result<String> {
        tracing::debug!("Client '{}' fetching {}", self.name, self.endpoint);
        self.fetcher.fetch_text(&self.endpoint).await
    }
}
