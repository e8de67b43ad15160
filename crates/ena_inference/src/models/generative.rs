use std::fmt;

use async_trait::async_trait;
use ena_core::{ClassificationResult, Classifier, Error, Result, Scope, Sentiment};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Config;

const PROMPT_TEMPLATE: &str = r#"
Você é um analista financeiro especializado. Analise a seguinte notícia e responda APENAS no formato JSON especificado:

NOTÍCIA: "{titulo}"

Responda no formato JSON exato:
{
    "tipo": "Nacional ou Internacional",
    "sentimento": "Boa notícia para o país ou Péssima notícia para o país",
    "explicacao": "Breve explicação de 1-2 frases sobre o impacto econômico"
}

Critérios:
- Nacional: Afeta diretamente o Brasil
- Internacional: Afeta outros países ou economia global
- Boa notícia: Impacto econômico positivo (crescimento, emprego, investimento)
- Péssima notícia: Impacto econômico negativo (crise, desemprego, recessão)
"#;

pub fn build_prompt(title: &str) -> String {
    PROMPT_TEMPLATE.replace("{titulo}", title)
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: Option<String>,
}

/// The three fields the prompt asks the model for.
#[derive(Deserialize)]
struct ReplyFields {
    tipo: String,
    sentimento: String,
    explicacao: String,
}

/// Chat-completion classifier backed by Groq.
pub struct GroqModel {
    client: Client,
    api_key: Option<String>,
    url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl GroqModel {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self {
            client,
            api_key: config.groq_api_key.clone(),
            url: config.groq_url.clone(),
            model: config.groq_model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }
}

impl fmt::Debug for GroqModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroqModel")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("url", &self.url)
            .field("model", &self.model)
            .finish()
    }
}

#[async_trait]
impl Classifier for GroqModel {
    fn name(&self) -> &str {
        "groq"
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn classify(&self, title: &str) -> Result<Option<ClassificationResult>> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Ok(None);
        };

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: build_prompt(title),
            }],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(api_key)
            .json(&request)
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
        let response: ChatResponse = serde_json::from_str(&body)?;
        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| Error::MalformedResponse("reply has no message content".to_string()))?;

        debug!("Groq reply: {}", content);
        parse_reply(&content).map(Some)
    }
}

/// Slice from the first `{` to the last `}` of a free-text reply.
///
/// Brace balance is not checked; a reply with several fragments yields
/// whatever lies between the outermost braces and usually fails to parse.
pub fn extract_json_object(content: &str) -> Option<&str> {
    let start = content.find('{')?;
    let end = content.rfind('}')?;
    (end > start).then(|| &content[start..=end])
}

/// Turn the model's reply into a classification, rejecting anything
/// outside the two phrasings the prompt asks for.
pub fn parse_reply(content: &str) -> Result<ClassificationResult> {
    let json = extract_json_object(content)
        .ok_or_else(|| Error::MalformedResponse("no JSON object in reply".to_string()))?;
    let fields: ReplyFields = serde_json::from_str(json)?;

    let scope: Scope = fields.tipo.parse()?;
    let sentiment: Sentiment = fields.sentimento.parse()?;
    if !scope.is_known() || !sentiment.is_known() {
        return Err(Error::MalformedResponse(format!(
            "model gave up on the headline ({} / {})",
            fields.tipo, fields.sentimento
        )));
    }

    let explanation = fields.explicacao.trim();
    if explanation.is_empty() {
        return Err(Error::MalformedResponse("empty explanation".to_string()));
    }

    Ok(ClassificationResult::new(scope, sentiment, explanation))
}
