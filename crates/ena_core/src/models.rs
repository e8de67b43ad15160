use std::fmt;

use async_trait::async_trait;

use crate::types::ClassificationResult;
use crate::Result;

/// A backend able to place a headline on the scope/sentiment grid.
///
/// Implementations report three outcomes:
/// - `Ok(Some(result))`: a usable, well-formed classification
/// - `Ok(None)`: the provider is not configured and was skipped
/// - `Err(_)`: transport failure or a response that could not be understood
#[async_trait]
pub trait Classifier: Send + Sync + fmt::Debug {
    /// Short name used in logs and reports
    fn name(&self) -> &str;

    /// Whether the provider has what it needs to run (credentials, endpoint)
    fn is_configured(&self) -> bool {
        true
    }

    /// Classify a single headline title
    async fn classify(&self, title: &str) -> Result<Option<ClassificationResult>>;
}
