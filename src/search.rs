use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use crate::model::Platform;

const SEARCH_API_URL: &str = "https://www.googleapis.com/customsearch/v1";
const RESULTS_PER_QUERY: &str = "10";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Google Custom Search credentials, validated up front so a missing key
/// fails before any member is processed.
pub struct SearchSettings {
    pub api_key: String,
    pub cx_id: String,
}

impl SearchSettings {
    /// Read credentials from the environment; a `.env` file is honored.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let api_key = std::env::var("GOOGLE_API_KEY")
            .context("GOOGLE_API_KEY environment variable must be set")?;
        let cx_id = std::env::var("GOOGLE_CX_ID")
            .context("GOOGLE_CX_ID environment variable must be set")?;
        Ok(Self { api_key, cx_id })
    }
}

/// Ranked link search. The enrichment loop only consumes result links, so
/// tests substitute a scripted provider.
#[async_trait]
pub trait SearchProvider {
    async fn search(&self, query: &str) -> Result<Vec<String>>;
}

pub struct GoogleSearch {
    client: reqwest::Client,
    settings: SearchSettings,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Deserialize)]
struct SearchItem {
    link: String,
}

impl GoogleSearch {
    pub fn new(settings: SearchSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client, settings })
    }
}

#[async_trait]
impl SearchProvider for GoogleSearch {
    async fn search(&self, query: &str) -> Result<Vec<String>> {
        let response = self
            .client
            .get(SEARCH_API_URL)
            .query(&[
                ("key", self.settings.api_key.as_str()),
                ("cx", self.settings.cx_id.as_str()),
                ("q", query),
                ("num", RESULTS_PER_QUERY),
            ])
            .send()
            .await
            .context("Search API request failed")?
            .error_for_status()
            .context("Search API returned an error status")?;
        let body: SearchResponse = response
            .json()
            .await
            .context("Malformed search API response")?;
        Ok(body.items.into_iter().map(|item| item.link).collect())
    }
}

/// Per-platform query, e.g. `site:instagram.com dpr ri <name>`. TikTok gets a
/// negative filter to keep discover/search pages out of the results.
pub fn build_query(platform: Platform, member_name: &str) -> String {
    let mut query = format!("site:{} dpr ri {}", platform.domain(), member_name);
    if platform == Platform::Tiktok {
        query.push_str(" -inurl:discover");
    }
    query
}
