use std::fmt::Write;

use clap::ValueEnum;
use ena_core::{ClassificationResult, Report, Scope, Sentiment};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn scope_icon(scope: Scope) -> &'static str {
    match scope {
        Scope::Domestic => "🇧🇷",
        Scope::International => "🌎",
        Scope::Unknown => "❔",
    }
}

fn sentiment_icon(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Favorable => "👍",
        Sentiment::Unfavorable => "👎",
        Sentiment::Undefined => "❔",
    }
}

pub fn render_report(report: &Report, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(report),
        OutputFormat::Text => Ok(render_report_text(report)),
    }
}

fn render_report_text(report: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "📊 Economic headlines from {} ({})",
        report.source,
        report.generated_at.format("%Y-%m-%d %H:%M UTC")
    );

    if report.is_empty() {
        let _ = writeln!(out, "\nNo economy headlines to report.");
        return out;
    }

    for (i, article) in report.articles.iter().enumerate() {
        let _ = writeln!(out, "\n{}. {}", i + 1, article.title);
        let _ = writeln!(out, "   🔗 {}", article.link);
        let _ = writeln!(
            out,
            "   {} {} | {} {}",
            scope_icon(article.scope),
            article.scope,
            sentiment_icon(article.sentiment),
            article.sentiment
        );
        let _ = writeln!(out, "   💬 {} (via {})", article.explanation, article.provider);
    }

    let scopes = report
        .scope_tally()
        .into_iter()
        .filter(|(_, n)| *n > 0)
        .map(|(scope, n)| format!("{}: {}", scope, n))
        .collect::<Vec<_>>()
        .join(", ");
    let sentiments = report
        .sentiment_tally()
        .into_iter()
        .filter(|(_, n)| *n > 0)
        .map(|(sentiment, n)| format!("{}: {}", sentiment, n))
        .collect::<Vec<_>>()
        .join(", ");

    let _ = writeln!(out, "\n📈 {} headlines analyzed", report.articles.len());
    let _ = writeln!(out, "   {}", scopes);
    let _ = writeln!(out, "   {}", sentiments);
    out
}

#[derive(Serialize)]
struct ClassificationOutput<'a> {
    title: &'a str,
    provider: &'a str,
    #[serde(flatten)]
    result: &'a ClassificationResult,
}

pub fn render_classification(
    title: &str,
    result: &ClassificationResult,
    provider: &str,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&ClassificationOutput {
            title,
            provider,
            result,
        }),
        OutputFormat::Text => {
            let mut out = format!(
                "{}\n{} {} | {} {}\n💬 {} (via {})\n",
                title,
                scope_icon(result.scope),
                result.scope,
                sentiment_icon(result.sentiment),
                result.sentiment,
                result.explanation,
                provider
            );
            if result.is_unknown() {
                out.push_str("⚠️ Every provider failed; run with --verbose to see why\n");
            }
            Ok(out)
        }
    }
}
