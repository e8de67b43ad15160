use ena_core::{Classifier, Result, Scope};

use crate::Config;

pub mod generative;
pub mod heuristic;
pub mod sentiment;

pub use generative::GroqModel;
pub use heuristic::HeuristicModel;
pub use sentiment::HuggingFaceModel;

/// Substrings that mark a headline as being about Brazil.
pub const NATIONAL_MARKERS: [&str; 4] = ["brasil", "brasileiro", "nacional", "país"];

/// Domestic when the title mentions any national marker, case-insensitively.
pub fn scope_of(title: &str) -> Scope {
    let lowered = title.to_lowercase();
    if NATIONAL_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        Scope::Domestic
    } else {
        Scope::International
    }
}

/// Builds the providers in the order the chain should try them.
pub fn create_providers(config: &Config) -> Result<Vec<Box<dyn Classifier>>> {
    let providers: Vec<Box<dyn Classifier>> = vec![
        Box::new(GroqModel::new(config)?),
        Box::new(HuggingFaceModel::new(config)?),
        Box::new(HeuristicModel::new()),
    ];
    Ok(providers)
}
