use ena_core::{ClassificationResult, Classifier, Result};
use tracing::{debug, info, warn};

use crate::models::create_providers;
use crate::Config;

/// Provider name reported when every provider came up empty.
pub const NO_PROVIDER: &str = "none";

/// Ordered fallback over classification providers. The first usable
/// result wins; skips and failures fall through to the next provider.
#[derive(Debug)]
pub struct ClassificationChain {
    providers: Vec<Box<dyn Classifier>>,
}

impl ClassificationChain {
    /// Groq, then Hugging Face, then the local keyword heuristic.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self::with_providers(create_providers(config)?))
    }

    pub fn with_providers(providers: Vec<Box<dyn Classifier>>) -> Self {
        Self { providers }
    }

    pub fn providers(&self) -> &[Box<dyn Classifier>] {
        &self.providers
    }

    pub async fn classify(&self, title: &str) -> ClassificationResult {
        self.classify_with_provider(title).await.0
    }

    /// Like [`classify`](Self::classify), also naming the provider that answered.
    pub async fn classify_with_provider(&self, title: &str) -> (ClassificationResult, &str) {
        info!("🤖 Analyzing: {}", preview(title));

        for provider in &self.providers {
            match provider.classify(title).await {
                Ok(Some(result)) => {
                    info!("✅ Classified via {}", provider.name());
                    return (result, provider.name());
                }
                Ok(None) => debug!("{} not configured, skipping", provider.name()),
                Err(e) => warn!("⚠️ {} failed: {}", provider.name(), e),
            }
        }

        warn!("❌ No provider could classify: {}", preview(title));
        (ClassificationResult::unknown(), NO_PROVIDER)
    }
}

fn preview(title: &str) -> String {
    const MAX_CHARS: usize = 50;
    if title.chars().count() > MAX_CHARS {
        format!("{}...", title.chars().take(MAX_CHARS).collect::<String>())
    } else {
        title.to_string()
    }
}
