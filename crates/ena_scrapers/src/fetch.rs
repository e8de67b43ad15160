use std::time::Duration;

use ena_core::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
use reqwest::Client;
use tracing::{error, info};

use crate::extract::DEFAULT_MAX_CANDIDATES;
use crate::filter::DEFAULT_MAX_RELEVANT;

pub const DEFAULT_BASE_URL: &str = "https://www.globo.com/";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
    /// Upper bound on headlines pulled from the page
    pub max_candidates: usize,
    /// Upper bound on headlines sent to classification
    pub max_relevant: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_FETCH_TIMEOUT,
            max_candidates: DEFAULT_MAX_CANDIDATES,
            max_relevant: DEFAULT_MAX_RELEVANT,
        }
    }
}

pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("pt-BR,pt;q=0.9"));

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client })
    }

    /// Page markup, or an empty string when the page can't be retrieved.
    pub async fn fetch(&self, url: &str) -> String {
        info!("🔍 Fetching {}", url);
        match self.try_fetch(url).await {
            Ok(html) => {
                info!("✅ Page loaded ({} bytes)", html.len());
                html
            }
            Err(e) => {
                error!("❌ Failed to fetch {}: {}", url, e);
                String::new()
            }
        }
    }

    async fn try_fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}
