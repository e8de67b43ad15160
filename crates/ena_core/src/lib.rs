pub mod error;
pub mod models;
pub mod types;

pub use error::{Error, Result};
pub use models::Classifier;
pub use types::{
    AnalyzedArticle, ClassificationResult, HeadlineCandidate, Report, Scope, Sentiment,
};

pub mod prelude {
    pub use super::models::Classifier;
    pub use super::types::*;
    pub use super::{Error, Result};
}
