use serde::Serialize;

use super::SearchError;
use crate::models::{MedicalEntity, Paper, ScoredPaper};

/// Bibliographic search collaborator. Takes the synthesized boolean query
/// (double-quoted terms joined by `AND` with the trailing MeSH and
/// date-window clauses); the wire protocol behind it is not this crate's
/// concern.
pub trait PaperSearch: Send + Sync {
    fn search(&self, query: &str, max_results: usize) -> Result<Vec<Paper>, SearchError>;

    /// Fetch full records for specific PMIDs.
    fn fetch(&self, pmids: &[String]) -> Result<Vec<Paper>, SearchError>;
}

/// Summarization collaborator. Scoring never reads the produced text, so
/// a degraded non-AI implementation changes nothing about ranking.
pub trait Summarizer: Send + Sync {
    fn summarize(&self, paper: &Paper, user_query: &str) -> Result<String, SearchError>;

    fn overall(&self, papers: &[ScoredPaper], user_query: &str) -> Result<String, SearchError>;
}

/// Everything the presentation layer receives for one search request.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub user_input: String,
    pub search_query: String,
    pub detected_entities: Vec<MedicalEntity>,
    pub interpretations: Vec<String>,
    pub papers: Vec<ScoredPaper>,
    /// Count before admission filtering.
    pub total_papers_found: usize,
    pub filtered_papers_count: usize,
    pub overall_summary: String,
    pub health_tips: Vec<String>,
    /// Seconds, rounded to two decimals.
    pub processing_time: f64,
    pub timestamp: String,
}
