use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::info;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,\
     image/avif,image/webp,image/apng,*/*;q=0.8";

/// Source of raw listing-page markup. The extractor only ever sees the
/// returned string, so a browser-driven implementation can be swapped in
/// without touching it.
#[async_trait]
pub trait HtmlSource {
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Direct HTTP fetch with browser-like headers. The listing site serves the
/// full table without JavaScript, so this is sufficient in practice.
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HtmlSource for HttpSource {
    async fn fetch(&self, url: &str) -> Result<String> {
        info!("Fetching {}", url);
        let response = self
            .client
            .get(url)
            .header("Accept", ACCEPT)
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .with_context(|| format!("Request to {url} failed"))?
            .error_for_status()
            .with_context(|| format!("Bad status fetching {url}"))?;
        response
            .text()
            .await
            .with_context(|| format!("Failed reading response body from {url}"))
    }
}
