use std::sync::LazyLock;
use std::time::Instant;

use regex::Regex;
use tracing::{debug, info, warn};

use super::filter::filter_and_rank;
use super::types::{PaperSearch, SearchOutcome, Summarizer};
use super::SearchError;
use crate::analyzer::{health_tips, interpret_values, recognize};
use crate::config::PUBLICATION_WINDOW_END;
use crate::models::{Paper, ScoredPaper};
use crate::query::synthesize;
use crate::scoring::summarization_score;

/// End-to-end search service: recognize → synthesize → search → summarize
/// → filter/rank. Collaborator failures degrade the outcome (empty paper
/// list, extractive summaries) without touching recognition or scoring.
pub struct MedicalSearchService<'a, S: PaperSearch, Z: Summarizer> {
    searcher: &'a S,
    summarizer: &'a Z,
}

impl<'a, S: PaperSearch, Z: Summarizer> MedicalSearchService<'a, S, Z> {
    pub fn new(searcher: &'a S, summarizer: &'a Z) -> Self {
        Self {
            searcher,
            summarizer,
        }
    }

    /// Run one search request end to end. Never fails: collaborator
    /// errors degrade to an empty result set and basic summaries.
    pub fn search_papers(&self, user_input: &str, max_results: usize) -> SearchOutcome {
        let started = Instant::now();
        info!(input = user_input, max_results, "medical paper search started");

        let entities = recognize(user_input);
        let search_query = synthesize(&entities, user_input);
        let interpretations = interpret_values(&entities);
        debug!(%search_query, entity_count = entities.len(), "query synthesized");

        // Over-fetch so admission filtering has candidates to discard.
        let papers = match self.searcher.search(&search_query, max_results * 2) {
            Ok(papers) => papers,
            Err(err) => {
                warn!(error = %err, "search collaborator failed, degrading to empty result");
                Vec::new()
            }
        };
        let total_papers_found = papers.len();

        let summarized = self.summarize_papers(papers, user_input);
        let ranked = filter_and_rank(summarized, &entities, user_input, max_results);
        info!(
            total = total_papers_found,
            admitted = ranked.len(),
            "admission filtering finished"
        );

        let overall_summary = self
            .summarizer
            .overall(&ranked, user_input)
            .unwrap_or_else(|err| {
                warn!(error = %err, "overall summary degraded to basic text");
                basic_overall_summary(&ranked, user_input)
            });
        let health_tips = health_tips(&entities);

        SearchOutcome {
            user_input: user_input.to_string(),
            search_query,
            detected_entities: entities,
            interpretations,
            total_papers_found,
            filtered_papers_count: ranked.len(),
            papers: ranked,
            overall_summary,
            health_tips,
            processing_time: (started.elapsed().as_secs_f64() * 100.0).round() / 100.0,
            timestamp: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    /// Full record for one PMID.
    pub fn paper_detail(&self, pmid: &str) -> Result<Paper, SearchError> {
        let papers = self.searcher.fetch(&[pmid.to_string()])?;
        papers
            .into_iter()
            .next()
            .ok_or_else(|| SearchError::PaperNotFound(pmid.to_string()))
    }

    /// Papers similar to a known one, by keywords from its title+abstract.
    pub fn similar_papers(
        &self,
        pmid: &str,
        max_results: usize,
    ) -> Result<Vec<Paper>, SearchError> {
        let original = self.paper_detail(pmid)?;
        let keywords =
            extract_keywords(&format!("{} {}", original.title, original.abstract_text));
        let query = keywords
            .iter()
            .take(3)
            .map(|k| format!("\"{k}\""))
            .collect::<Vec<_>>()
            .join(" AND ");

        let papers = self.searcher.search(&query, max_results + 1)?;
        Ok(papers
            .into_iter()
            .filter(|p| p.pmid != pmid)
            .take(max_results)
            .collect())
    }

    /// Attach a summary and a display-ordering score to each paper; the
    /// list comes back sorted by the summarization scorer.
    fn summarize_papers(&self, papers: Vec<Paper>, user_query: &str) -> Vec<ScoredPaper> {
        let mut summarized: Vec<ScoredPaper> = papers
            .into_iter()
            .map(|paper| {
                let summary = self
                    .summarizer
                    .summarize(&paper, user_query)
                    .unwrap_or_else(|err| {
                        warn!(pmid = %paper.pmid, error = %err, "summary degraded to extractive text");
                        basic_summary(&paper)
                    });
                let relevance_score = summarization_score(&paper, user_query);
                ScoredPaper {
                    paper,
                    relevance_score,
                    summary,
                }
            })
            .collect();

        summarized.sort_by(|a, b| {
            b.relevance_score
                .partial_cmp(&a.relevance_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        summarized
    }
}

/// Extractive fallback: the first sentences of the abstract.
pub fn basic_summary(paper: &Paper) -> String {
    let sentences: Vec<&str> = paper.abstract_text.split(". ").take(3).collect();
    let mut summary = sentences.join(". ");
    if !summary.is_empty() && !summary.ends_with('.') {
        summary.push('.');
    }
    if summary.is_empty() {
        "요약을 생성할 수 없습니다.".to_string()
    } else {
        summary
    }
}

/// Counted fallback for the aggregate summary.
pub fn basic_overall_summary(papers: &[ScoredPaper], user_query: &str) -> String {
    if papers.is_empty() {
        return format!("'{user_query}'에 대한 관련 논문을 찾을 수 없습니다.");
    }

    let recent_years = [
        (PUBLICATION_WINDOW_END - 1).to_string(),
        PUBLICATION_WINDOW_END.to_string(),
    ];
    let recent = papers
        .iter()
        .filter(|p| recent_years.iter().any(|y| p.paper.publication_date.contains(y)))
        .count();

    let mut summary = format!(
        "'{user_query}'에 대해 총 {}개의 관련 논문을 찾았습니다.",
        papers.len()
    );
    if recent > 0 {
        summary.push_str(&format!(
            " 이 중 {recent}개는 최근({}-{}년) 연구입니다.",
            recent_years[0], recent_years[1]
        ));
    }
    summary.push_str(" 각 논문의 상세 내용을 확인하여 더 자세한 정보를 얻으실 수 있습니다.");
    summary
}

/// Summarizer that needs no external service; always available as the
/// degraded mode.
pub struct BasicSummarizer;

impl Summarizer for BasicSummarizer {
    fn summarize(&self, paper: &Paper, _user_query: &str) -> Result<String, SearchError> {
        Ok(basic_summary(paper))
    }

    fn overall(&self, papers: &[ScoredPaper], user_query: &str) -> Result<String, SearchError> {
        Ok(basic_overall_summary(papers, user_query))
    }
}

static KEYWORD_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-zA-Z]{4,}\b").unwrap());

/// Common English words that carry no search signal.
const STOPWORDS: &[&str] = &[
    "with", "from", "they", "this", "that", "were", "been", "have", "more", "such", "also",
    "than", "only", "these", "between", "after", "before", "during", "study", "studies",
    "analysis", "results", "methods", "patients", "data", "using", "used", "show", "showed",
    "found", "observed",
];

/// Up to five ≥4-letter English words from a title+abstract, stopwords
/// removed, in appearance order.
fn extract_keywords(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut keywords = Vec::new();
    for m in KEYWORD_WORD.find_iter(&lower) {
        let word = m.as_str();
        if STOPWORDS.contains(&word) {
            continue;
        }
        keywords.push(word.to_string());
        if keywords.len() >= 5 {
            break;
        }
    }
    keywords
}
