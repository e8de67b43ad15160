use std::time::Duration;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use ena_inference::{ClassificationChain, Config, DEFAULT_GROQ_MODEL};
use ena_scrapers::fetch::DEFAULT_BASE_URL;
use ena_scrapers::filter::DEFAULT_MAX_RELEVANT;
use ena_scrapers::{FetchConfig, NewsPipeline};
use tracing::info;

mod logging;
mod report;

use report::{render_classification, render_report, OutputFormat};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Classifies economic news headlines by scope and sentiment",
    long_about = None
)]
pub struct Cli {
    /// Groq API key; without it the chat-completion provider is skipped
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true, global = true)]
    groq_api_key: Option<String>,
    /// Hugging Face API key; without it the sentiment provider is skipped
    #[arg(long, env = "HUGGINGFACE_API_KEY", hide_env_values = true, global = true)]
    huggingface_api_key: Option<String>,
    #[arg(long, default_value = DEFAULT_GROQ_MODEL, global = true)]
    groq_model: String,
    /// Timeout for each remote classification call, in seconds
    #[arg(
        long,
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..),
        global = true
    )]
    timeout: u64,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch the front page, pick the economy headlines and classify them (default)
    Analyze(AnalyzeArgs),
    /// Classify a single headline
    Classify {
        title: String,
    },
    /// Show the provider order and which providers are configured
    Providers,
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Page to pull headlines from
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    url: String,
    /// Maximum number of headlines to classify
    #[arg(long, default_value_t = DEFAULT_MAX_RELEVANT)]
    limit: usize,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            url: DEFAULT_BASE_URL.to_string(),
            limit: DEFAULT_MAX_RELEVANT,
        }
    }
}

impl Cli {
    fn inference_config(&self) -> Config {
        Config::default()
            .with_groq_api_key(self.groq_api_key.clone())
            .with_huggingface_api_key(self.huggingface_api_key.clone())
            .with_groq_model(self.groq_model.clone())
            .with_request_timeout(Duration::from_secs(self.timeout))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let config = cli.inference_config();
    let chain = ClassificationChain::new(&config).context("failed to build classification chain")?;
    let configured: Vec<&str> = chain
        .providers()
        .iter()
        .filter(|p| p.is_configured())
        .map(|p| p.name())
        .collect();
    info!("🧠 Providers ready: {}", configured.join(", "));

    match cli.command.unwrap_or(Commands::Analyze(AnalyzeArgs::default())) {
        Commands::Analyze(args) => {
            let fetch_config = FetchConfig {
                base_url: args.url,
                max_relevant: args.limit,
                ..FetchConfig::default()
            };
            let pipeline =
                NewsPipeline::new(fetch_config, chain).context("failed to set up news pipeline")?;
            let report = pipeline.run().await;
            println!("{}", render_report(&report, cli.format)?);
        }
        Commands::Classify { title } => {
            let (result, provider) = chain.classify_with_provider(&title).await;
            print!("{}", render_classification(&title, &result, provider, cli.format)?);
            if cli.format == OutputFormat::Json {
                println!();
            }
        }
        Commands::Providers => {
            for (i, provider) in chain.providers().iter().enumerate() {
                let status = if provider.is_configured() {
                    "configured"
                } else {
                    "not configured"
                };
                println!("{}. {} ({})", i + 1, provider.name(), status);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_no_subcommand() {
        let cli = Cli::try_parse_from(["ena"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.timeout, 10);
    }

    #[test]
    fn test_classify_with_global_flags() {
        let cli = Cli::try_parse_from([
            "ena",
            "classify",
            "Dólar cai após dados de emprego",
            "--format",
            "json",
            "--groq-api-key",
            "gsk_test",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Some(Commands::Classify { ref title }) if title == "Dólar cai após dados de emprego"));

        let config = cli.inference_config();
        assert_eq!(config.groq_api_key.as_deref(), Some("gsk_test"));
        assert_eq!(config.groq_model, DEFAULT_GROQ_MODEL);
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        assert!(Cli::try_parse_from(["ena", "--timeout", "0", "providers"]).is_err());
        let cli = Cli::try_parse_from(["ena", "--timeout", "3", "providers"]).unwrap();
        assert_eq!(cli.timeout, 3);
    }

    #[test]
    fn test_analyze_args() {
        let cli = Cli::try_parse_from(["ena", "analyze", "--url", "https://g1.globo.com/", "--limit", "3"]).unwrap();
        match cli.command {
            Some(Commands::Analyze(args)) => {
                assert_eq!(args.url, "https://g1.globo.com/");
                assert_eq!(args.limit, 3);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
