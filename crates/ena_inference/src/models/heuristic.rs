use async_trait::async_trait;
use ena_core::{ClassificationResult, Classifier, Result, Sentiment};

use super::scope_of;

pub const POSITIVE_KEYWORDS: [&str; 6] = [
    "crescimento",
    "alta",
    "sobe",
    "melhora",
    "lucro",
    "investimento",
];

pub const NEGATIVE_KEYWORDS: [&str; 6] = [
    "crise",
    "queda",
    "baixa",
    "desemprego",
    "prejuízo",
    "recessão",
];

pub const EXPLANATION: &str = "Análise baseada em palavras-chave locais";

/// Offline keyword classifier. Always produces a result.
#[derive(Debug, Clone, Default)]
pub struct HeuristicModel;

impl HeuristicModel {
    pub fn new() -> Self {
        Self
    }

    /// Each keyword counts once, however often it appears.
    /// Ties go to `Unfavorable`.
    pub fn analyze(title: &str) -> ClassificationResult {
        let lowered = title.to_lowercase();
        let positive = count_present(&lowered, &POSITIVE_KEYWORDS);
        let negative = count_present(&lowered, &NEGATIVE_KEYWORDS);
        let sentiment = if positive > negative {
            Sentiment::Favorable
        } else {
            Sentiment::Unfavorable
        };

        ClassificationResult::new(scope_of(title), sentiment, EXPLANATION)
    }
}

fn count_present(haystack: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|k| haystack.contains(*k)).count()
}

#[async_trait]
impl Classifier for HeuristicModel {
    fn name(&self) -> &str {
        "local"
    }

    async fn classify(&self, title: &str) -> Result<Option<ClassificationResult>> {
        Ok(Some(Self::analyze(title)))
    }
}
