use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Error;

/// Whether a headline's economic impact is framed as domestic or international.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    #[serde(rename = "Nacional")]
    Domestic,
    #[serde(rename = "Internacional")]
    International,
    #[serde(rename = "Desconhecido")]
    Unknown,
}

impl Scope {
    pub const ALL: [Scope; 3] = [Scope::Domestic, Scope::International, Scope::Unknown];

    pub fn label(&self) -> &'static str {
        match self {
            Scope::Domestic => "Nacional",
            Scope::International => "Internacional",
            Scope::Unknown => "Desconhecido",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Scope::Unknown)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Scope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "nacional" | "domestic" => Ok(Scope::Domestic),
            "internacional" | "international" => Ok(Scope::International),
            "desconhecido" | "unknown" => Ok(Scope::Unknown),
            _ => Err(Error::MalformedResponse(format!("unrecognized scope: {:?}", s))),
        }
    }
}

/// Whether a headline's economic impact is framed as favorable or unfavorable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    #[serde(rename = "Boa notícia para o país")]
    Favorable,
    #[serde(rename = "Péssima notícia para o país")]
    Unfavorable,
    #[serde(rename = "Indefinido")]
    Undefined,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [
        Sentiment::Favorable,
        Sentiment::Unfavorable,
        Sentiment::Undefined,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Favorable => "Boa notícia para o país",
            Sentiment::Unfavorable => "Péssima notícia para o país",
            Sentiment::Undefined => "Indefinido",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Sentiment::Undefined)
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Sentiment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "boa notícia para o país" | "boa notícia" | "boa" | "favorable" => {
                Ok(Sentiment::Favorable)
            }
            "péssima notícia para o país" | "péssima notícia" | "péssima" | "unfavorable" => {
                Ok(Sentiment::Unfavorable)
            }
            "indefinido" | "undefined" => Ok(Sentiment::Undefined),
            _ => Err(Error::MalformedResponse(format!("unrecognized sentiment: {:?}", s))),
        }
    }
}

/// Lowercase, collapse inner whitespace and drop trailing punctuation.
fn normalize_label(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim_end_matches(|c: char| c == '.' || c == '!')
        .to_lowercase()
}

/// The single normalized shape every provider produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub scope: Scope,
    pub sentiment: Sentiment,
    pub explanation: String,
}

impl ClassificationResult {
    pub const UNKNOWN_EXPLANATION: &'static str = "Não foi possível analisar a notícia";

    pub fn new(scope: Scope, sentiment: Sentiment, explanation: impl Into<String>) -> Self {
        Self {
            scope,
            sentiment,
            explanation: explanation.into(),
        }
    }

    /// Terminal result used when no provider produced anything.
    pub fn unknown() -> Self {
        Self::new(Scope::Unknown, Sentiment::Undefined, Self::UNKNOWN_EXPLANATION)
    }

    pub fn is_unknown(&self) -> bool {
        !self.scope.is_known() && !self.sentiment.is_known()
    }
}

/// A (title, link) pair pulled out of a page before relevance filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadlineCandidate {
    pub title: String,
    pub link: String,
}

impl HeadlineCandidate {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
        }
    }
}

/// A headline joined with its classification. Terminal output unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedArticle {
    pub title: String,
    pub link: String,
    pub scope: Scope,
    pub sentiment: Sentiment,
    pub explanation: String,
    /// Name of the provider that produced the classification
    pub provider: String,
}

impl AnalyzedArticle {
    pub fn new(
        candidate: HeadlineCandidate,
        result: ClassificationResult,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            title: candidate.title,
            link: candidate.link,
            scope: result.scope,
            sentiment: result.sentiment,
            explanation: result.explanation,
            provider: provider.into(),
        }
    }
}

/// Output of one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub source: String,
    pub generated_at: DateTime<Utc>,
    pub articles: Vec<AnalyzedArticle>,
}

impl Report {
    pub fn new(source: impl Into<String>, articles: Vec<AnalyzedArticle>) -> Self {
        Self {
            source: source.into(),
            generated_at: Utc::now(),
            articles,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Article count per scope, in enum order, zero counts included.
    pub fn scope_tally(&self) -> Vec<(Scope, usize)> {
        Scope::ALL
            .iter()
            .map(|scope| {
                let count = self.articles.iter().filter(|a| a.scope == *scope).count();
                (*scope, count)
            })
            .collect()
    }

    /// Article count per sentiment, in enum order, zero counts included.
    pub fn sentiment_tally(&self) -> Vec<(Sentiment, usize)> {
        Sentiment::ALL
            .iter()
            .map(|sentiment| {
                let count = self
                    .articles
                    .iter()
                    .filter(|a| a.sentiment == *sentiment)
                    .count();
                (*sentiment, count)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_parses_prompt_phrasing() {
        assert_eq!("Nacional".parse::<Scope>().unwrap(), Scope::Domestic);
        assert_eq!(" internacional. ".parse::<Scope>().unwrap(), Scope::International);
        assert_eq!("Domestic".parse::<Scope>().unwrap(), Scope::Domestic);
        assert!("Nacional ou Internacional".parse::<Scope>().is_err());
        assert!("Europa".parse::<Scope>().is_err());
    }

    #[test]
    fn test_sentiment_parses_prompt_phrasing() {
        assert_eq!(
            "Boa notícia para o país".parse::<Sentiment>().unwrap(),
            Sentiment::Favorable
        );
        assert_eq!(
            "PÉSSIMA  NOTÍCIA para o país".parse::<Sentiment>().unwrap(),
            Sentiment::Unfavorable
        );
        assert!("Neutra".parse::<Sentiment>().is_err());
    }

    #[test]
    fn test_labels_round_trip_through_serde() {
        let result = ClassificationResult::new(Scope::Domestic, Sentiment::Favorable, "x");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["scope"], "Nacional");
        assert_eq!(json["sentiment"], "Boa notícia para o país");
    }

    #[test]
    fn test_unknown_sentinel() {
        let result = ClassificationResult::unknown();
        assert_eq!(result.scope, Scope::Unknown);
        assert_eq!(result.sentiment, Sentiment::Undefined);
        assert_eq!(result.explanation, "Não foi possível analisar a notícia");
        assert!(result.is_unknown());
    }

    #[test]
    fn test_report_tallies() {
        let candidate = HeadlineCandidate::new("Dólar sobe com tensão no mercado externo", "https://a");
        let articles = vec![
            AnalyzedArticle::new(
                candidate.clone(),
                ClassificationResult::new(Scope::International, Sentiment::Unfavorable, "a"),
                "heuristic",
            ),
            AnalyzedArticle::new(
                candidate,
                ClassificationResult::new(Scope::International, Sentiment::Favorable, "b"),
                "heuristic",
            ),
        ];
        let report = Report::new("https://www.globo.com/", articles);

        assert_eq!(
            report.scope_tally(),
            vec![(Scope::Domestic, 0), (Scope::International, 2), (Scope::Unknown, 0)]
        );
        assert_eq!(
            report.sentiment_tally(),
            vec![
                (Sentiment::Favorable, 1),
                (Sentiment::Unfavorable, 1),
                (Sentiment::Undefined, 0)
            ]
        );
    }
}
