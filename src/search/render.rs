use super::types::SearchOutcome;

/// How many ranked papers the plain-text report shows.
const MAX_RENDERED_PAPERS: usize = 5;

/// How many authors are listed before truncating with "외".
const MAX_RENDERED_AUTHORS: usize = 3;

/// Render a search outcome as a plain-text report.
pub fn render_outcome(outcome: &SearchOutcome) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("🔍 PubMed 의료 논문 검색 결과".to_string());
    lines.push("=".repeat(50));
    lines.push(format!("검색어: {}", outcome.user_input));
    lines.push(format!("검색 시간: {}", outcome.timestamp));
    lines.push(format!("처리 시간: {}초", outcome.processing_time));
    lines.push(String::new());

    if !outcome.detected_entities.is_empty() {
        lines.push("📊 감지된 의료 정보:".to_string());
        for entity in &outcome.detected_entities {
            lines.push(format!("  • {} ({})", entity.text, entity.kind.as_str()));
        }
        lines.push(String::new());
    }

    if !outcome.interpretations.is_empty() {
        lines.push("📈 수치 해석:".to_string());
        for interpretation in &outcome.interpretations {
            lines.push(format!("  • {interpretation}"));
        }
        lines.push(String::new());
    }

    if !outcome.overall_summary.is_empty() {
        lines.push("📋 종합 요약:".to_string());
        lines.push(format!("  {}", outcome.overall_summary));
        lines.push(String::new());
    }

    lines.push(format!(
        "📚 관련 논문 ({}개 발견):",
        outcome.total_papers_found
    ));
    lines.push(String::new());

    for (i, scored) in outcome.papers.iter().take(MAX_RENDERED_PAPERS).enumerate() {
        let paper = &scored.paper;
        lines.push(format!("{}. {}", i + 1, paper.title));

        if !paper.authors.is_empty() {
            let mut authors = paper.authors[..paper.authors.len().min(MAX_RENDERED_AUTHORS)]
                .join(", ");
            if paper.authors.len() > MAX_RENDERED_AUTHORS {
                authors.push_str(" 외");
            }
            lines.push(format!("   저자: {authors}"));
        }
        if !paper.journal.is_empty() {
            lines.push(format!("   저널: {}", paper.journal));
        }
        if !paper.publication_date.is_empty() {
            lines.push(format!("   발행일: {}", paper.publication_date));
        }
        lines.push(format!("   PMID: {}", paper.pmid));
        lines.push(format!("   링크: {}", paper.pubmed_url));

        if !scored.summary.is_empty() {
            let preview: String = scored.summary.chars().take(200).collect();
            lines.push(format!("   요약: {preview}..."));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntityKind, MedicalEntity, Paper, ScoredPaper};

    fn outcome() -> SearchOutcome {
        SearchOutcome {
            user_input: "당뇨병 HbA1c 7.8".into(),
            search_query: "\"diabetes mellitus\"".into(),
            detected_entities: vec![MedicalEntity::mention("당뇨병", EntityKind::Disease)],
            interpretations: vec!["Hemoglobin A1c: 7.8 (비정상, 정상: <5.7%)".into()],
            papers: vec![ScoredPaper {
                paper: Paper {
                    title: "Diabetes outcomes".into(),
                    authors: vec!["Kim J".into(), "Lee S".into(), "Park H".into(), "Choi Y".into()],
                    journal: "JDC".into(),
                    publication_date: "2024".into(),
                    pmid: "12345".into(),
                    pubmed_url: "https://pubmed.ncbi.nlm.nih.gov/12345/".into(),
                    ..Default::default()
                },
                relevance_score: 0.42,
                summary: "요약 텍스트".into(),
            }],
            total_papers_found: 7,
            filtered_papers_count: 1,
            overall_summary: "종합 요약입니다.".into(),
            health_tips: vec![],
            processing_time: 1.25,
            timestamp: "2025-01-01 12:00:00".into(),
        }
    }

    #[test]
    fn report_contains_all_sections() {
        let text = render_outcome(&outcome());
        assert!(text.contains("검색어: 당뇨병 HbA1c 7.8"));
        assert!(text.contains("📊 감지된 의료 정보:"));
        assert!(text.contains("  • 당뇨병 (disease)"));
        assert!(text.contains("📈 수치 해석:"));
        assert!(text.contains("📚 관련 논문 (7개 발견):"));
        assert!(text.contains("1. Diabetes outcomes"));
        assert!(text.contains("   PMID: 12345"));
    }

    #[test]
    fn author_list_truncates_with_suffix() {
        let text = render_outcome(&outcome());
        assert!(text.contains("저자: Kim J, Lee S, Park H 외"));
        assert!(!text.contains("Choi Y"));
    }

    #[test]
    fn empty_sections_are_omitted() {
        let mut o = outcome();
        o.detected_entities.clear();
        o.interpretations.clear();
        let text = render_outcome(&o);
        assert!(!text.contains("감지된 의료 정보"));
        assert!(!text.contains("수치 해석"));
    }
}
