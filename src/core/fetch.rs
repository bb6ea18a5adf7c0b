use crate::domain::ports::PageFetcher;
use crate::utils::error::{AddonError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use std::time::Duration;

pub const VIRAJM_SITE: &str = "https://virajm.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Async page fetcher backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        validate_url("url", url)?;

        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("Response status from {}: {}", url, status);

        if !status.is_success() {
            return Err(AddonError::HttpStatusError {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

/// Blocking GET. Must not be called from inside an async runtime thread;
/// use `tokio::task::spawn_blocking` there.
pub fn fetch_text_blocking(url: &str, timeout: Duration) -> Result<String> {
    validate_url("url", url)?;

    tracing::debug!("GET (blocking) {}", url);
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()?;
    let response = client.get(url).send()?;
    let status = response.status();

    if !status.is_success() {
        return Err(AddonError::HttpStatusError {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    Ok(response.text()?)
}

pub fn grab_virajm_site() -> Result<String> {
    fetch_text_blocking(VIRAJM_SITE, DEFAULT_TIMEOUT)
}

pub async fn grab_virajm_site_async() -> Result<String> {
    HttpFetcher::new(DEFAULT_TIMEOUT)?
        .fetch_text(VIRAJM_SITE)
        .await
}

/// First `max_chars` characters of `body`, with an ellipsis when cut.
pub fn preview(body: &str, max_chars: usize) -> String {
    match body.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}…", &body[..idx]),
        None => body.to_string(),
    }
}
