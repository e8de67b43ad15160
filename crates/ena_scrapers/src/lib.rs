pub mod extract;
pub mod fetch;
pub mod filter;
pub mod pipeline;

pub use extract::extract_headlines;
pub use fetch::{FetchConfig, PageFetcher};
pub use filter::filter_economic;
pub use pipeline::NewsPipeline;

pub mod prelude {
    pub use super::fetch::{FetchConfig, PageFetcher};
    pub use super::pipeline::NewsPipeline;
    pub use ena_core::{AnalyzedArticle, Error, HeadlineCandidate, Report, Result};
}
