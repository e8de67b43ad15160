use std::fmt;

use async_trait::async_trait;
use ena_core::{ClassificationResult, Classifier, Error, Result, Sentiment};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::scope_of;
use crate::Config;

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub score: f64,
}

/// The pipeline API nests scores one level deep; some deployments don't.
#[derive(Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

impl InferenceResponse {
    fn into_scores(self) -> Vec<LabelScore> {
        match self {
            InferenceResponse::Nested(batches) => batches.into_iter().next().unwrap_or_default(),
            InferenceResponse::Flat(scores) => scores,
        }
    }
}

/// Three-class sentiment model hosted on the Hugging Face inference API.
pub struct HuggingFaceModel {
    client: Client,
    api_key: Option<String>,
    url: String,
}

impl HuggingFaceModel {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self {
            client,
            api_key: config.huggingface_api_key.clone(),
            url: config.huggingface_url.clone(),
        })
    }
}

impl fmt::Debug for HuggingFaceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HuggingFaceModel")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("url", &self.url)
            .finish()
    }
}

#[async_trait]
impl Classifier for HuggingFaceModel {
    fn name(&self) -> &str {
        "huggingface"
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn classify(&self, title: &str) -> Result<Option<ClassificationResult>> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Ok(None);
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(api_key)
            .json(&InferenceRequest { inputs: title })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                provider: self.name().to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        debug!("Hugging Face reply: {}", body);
        let scores = serde_json::from_str::<InferenceResponse>(&body)?.into_scores();

        scores_to_result(title, &scores).map(Some)
    }
}

fn is_positive(label: &str) -> bool {
    label.eq_ignore_ascii_case("LABEL_2") || label.eq_ignore_ascii_case("positive")
}

fn is_negative(label: &str) -> bool {
    label.eq_ignore_ascii_case("LABEL_0") || label.eq_ignore_ascii_case("negative")
}

/// Compare the positive and negative scores; the neutral class is ignored
/// and a class missing from the list scores zero.
pub fn scores_to_result(title: &str, scores: &[LabelScore]) -> Result<ClassificationResult> {
    if scores.is_empty() {
        return Err(Error::MalformedResponse("empty score list".to_string()));
    }

    let score_for = |pred: fn(&str) -> bool| {
        scores
            .iter()
            .find(|s| pred(&s.label))
            .map(|s| s.score)
            .unwrap_or(0.0)
    };
    let positive = score_for(is_positive);
    let negative = score_for(is_negative);

    let sentiment = if positive > negative {
        Sentiment::Favorable
    } else {
        Sentiment::Unfavorable
    };
    let explanation = format!(
        "Análise baseada em IA: {:.2} positivo vs {:.2} negativo",
        positive, negative
    );

    Ok(ClassificationResult::new(scope_of(title), sentiment, explanation))
}
