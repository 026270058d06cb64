pub mod filter;
pub mod orchestrator;
pub mod render;
pub mod types;

use thiserror::Error;

pub use filter::{filter_and_rank, is_scs_search};
pub use orchestrator::{BasicSummarizer, MedicalSearchService};
pub use types::{PaperSearch, SearchOutcome, Summarizer};

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("search request failed: {0}")]
    Request(String),

    #[error("search response could not be parsed: {0}")]
    ResponseParsing(String),

    #[error("summarization failed: {0}")]
    Summarization(String),

    #[error("paper not found: {0}")]
    PaperNotFound(String),
}
