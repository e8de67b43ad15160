use ena_core::{AnalyzedArticle, HeadlineCandidate, Report, Result};
use ena_inference::ClassificationChain;
use tracing::{info, warn};
use url::Url;

use crate::extract::extract_headlines;
use crate::fetch::{FetchConfig, PageFetcher};
use crate::filter::filter_economic;

/// Fetch → extract → filter → classify, one headline at a time.
pub struct NewsPipeline {
    config: FetchConfig,
    base_url: Url,
    fetcher: PageFetcher,
    chain: ClassificationChain,
}

impl NewsPipeline {
    pub fn new(config: FetchConfig, chain: ClassificationChain) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        let fetcher = PageFetcher::new(&config)?;
        Ok(Self {
            config,
            base_url,
            fetcher,
            chain,
        })
    }

    pub fn chain(&self) -> &ClassificationChain {
        &self.chain
    }

    pub async fn run(&self) -> Report {
        let html = self.fetcher.fetch(self.base_url.as_str()).await;
        if html.is_empty() {
            warn!("Nothing to analyze: page came back empty");
            return Report::new(self.base_url.as_str(), Vec::new());
        }

        let headlines = self.select_headlines(&html);
        let articles = self.analyze(headlines).await;
        Report::new(self.base_url.as_str(), articles)
    }

    /// Extract candidates from markup and keep the economy-related ones.
    pub fn select_headlines(&self, html: &str) -> Vec<HeadlineCandidate> {
        let candidates = extract_headlines(html, &self.base_url, self.config.max_candidates);
        let relevant = filter_economic(candidates, self.config.max_relevant);
        info!("💰 {} economy headlines selected", relevant.len());
        relevant
    }

    pub async fn analyze(&self, headlines: Vec<HeadlineCandidate>) -> Vec<AnalyzedArticle> {
        let mut articles = Vec::with_capacity(headlines.len());
        for headline in headlines {
            let (result, provider) = self.chain.classify_with_provider(&headline.title).await;
            articles.push(AnalyzedArticle::new(headline, result, provider));
        }
        articles
    }
}
