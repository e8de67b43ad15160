use std::fmt;
use std::time::Duration;

pub mod chain;
pub mod models;

#[cfg(test)]
pub(crate) mod test_support;

pub const DEFAULT_GROQ_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_GROQ_MODEL: &str = "llama3-8b-8192";
pub const DEFAULT_HUGGINGFACE_URL: &str =
    "https://api-inference.huggingface.co/models/cardiffnlp/twitter-roberta-base-sentiment-latest";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for the remote providers. Built once at startup and shared by reference.
#[derive(Clone)]
pub struct Config {
    pub groq_api_key: Option<String>,
    pub groq_url: String,
    pub groq_model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub huggingface_api_key: Option<String>,
    pub huggingface_url: String,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            groq_api_key: None,
            groq_url: DEFAULT_GROQ_URL.to_string(),
            groq_model: DEFAULT_GROQ_MODEL.to_string(),
            temperature: 0.1,
            max_tokens: 200,
            huggingface_api_key: None,
            huggingface_url: DEFAULT_HUGGINGFACE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("groq_api_key", &self.groq_api_key.as_deref().map(|_| "<redacted>"))
            .field("groq_url", &self.groq_url)
            .field("groq_model", &self.groq_model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field(
                "huggingface_api_key",
                &self.huggingface_api_key.as_deref().map(|_| "<redacted>"),
            )
            .field("huggingface_url", &self.huggingface_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl Config {
    /// Blank keys count as missing so an empty env var disables the provider.
    pub fn with_groq_api_key(mut self, key: Option<String>) -> Self {
        self.groq_api_key = key.filter(|k| !k.trim().is_empty());
        self
    }

    pub fn with_huggingface_api_key(mut self, key: Option<String>) -> Self {
        self.huggingface_api_key = key.filter(|k| !k.trim().is_empty());
        self
    }

    pub fn with_groq_url(mut self, url: impl Into<String>) -> Self {
        self.groq_url = url.into();
        self
    }

    pub fn with_groq_model(mut self, model: impl Into<String>) -> Self {
        self.groq_model = model.into();
        self
    }

    pub fn with_huggingface_url(mut self, url: impl Into<String>) -> Self {
        self.huggingface_url = url.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

pub mod prelude {
    pub use super::chain::ClassificationChain;
    pub use super::models::create_providers;
    pub use super::Config;
    pub use ena_core::{ClassificationResult, Classifier, Error, Result, Scope, Sentiment};
}

pub use chain::ClassificationChain;
pub use models::create_providers;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_keys_are_treated_as_missing() {
        let config = Config::default()
            .with_groq_api_key(Some("  ".to_string()))
            .with_huggingface_api_key(Some("hf_token".to_string()));
        assert!(config.groq_api_key.is_none());
        assert_eq!(config.huggingface_api_key.as_deref(), Some("hf_token"));
    }

    #[test]
    fn test_debug_redacts_keys() {
        let config = Config::default().with_groq_api_key(Some("gsk_secret".to_string()));
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("gsk_secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
