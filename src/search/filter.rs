use crate::config::{ADMISSION_THRESHOLD, LIPID_ADMISSION_THRESHOLD, SCS_ADMISSION_THRESHOLD};
use crate::models::{MedicalEntity, Paper, ScoredPaper};
use crate::scoring::admission_score;

const SCS_TRIGGERS: &[&str] = &["spinal cord stimulation", "scs", "척수자극술"];

/// Hard exclusions in SCS mode; single broad words, matched anywhere.
const SCS_EXCLUSIONS: &[&str] =
    &["veterinary", "animal model only", "plant", "agriculture", "in vitro only"];

/// Hard exclusions in general mode; narrower phrases.
const GENERAL_EXCLUSIONS: &[&str] = &[
    "veterinary medicine",
    "animal study only",
    "plant biology",
    "agricultural research",
    "environmental policy only",
];

const PAIN_TERMS: &[&str] = &["chronic pain", "neuropathic pain", "back pain"];
const DEVICE_TERMS: &[&str] = &["implantable", "device", "electrode"];
const OUTCOME_TERMS: &[&str] = &["efficacy", "effectiveness", "outcome"];

const LIPID_QUERY_TERMS: &[&str] =
    &["고지혈", "콜레스테롤", "cholesterol", "lipid", "hyperlipidemia"];
const LIPID_CONTENT_TERMS: &[&str] = &[
    "hyperlipidemia",
    "dyslipidemia",
    "cholesterol",
    "lipid",
    "triglyceride",
    "statin",
    "atherosclerosis",
];

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Whether the request is a spinal-cord-stimulation search, which gets its
/// own scoring and a much lower admission bar.
pub fn is_scs_search(raw_query: &str) -> bool {
    let lower = raw_query.to_lowercase();
    contains_any(&lower, SCS_TRIGGERS)
}

/// Bespoke incremental score for SCS-mode admission.
fn scs_score(paper: &Paper) -> f64 {
    let content = paper.content_lower();
    let mut score = 0.0;

    if content.contains("spinal cord stimulation") {
        score += 0.7;
    } else if content.contains("scs")
        && (content.contains("pain") || content.contains("stimulation"))
    {
        score += 0.5;
    } else if content.contains("neurostimulation") && content.contains("spinal") {
        score += 0.4;
    }

    if contains_any(&content, PAIN_TERMS) {
        score += 0.2;
    }
    if contains_any(&content, DEVICE_TERMS) {
        score += 0.1;
    }
    if contains_any(&content, OUTCOME_TERMS) {
        score += 0.1;
    }

    score
}

/// Apply admission filtering and ranking to summarized candidates.
///
/// Each admitted paper's `relevance_score` is replaced with its admission
/// score; results are sorted descending (stable, ties keep prior order)
/// and truncated to `max_results`.
pub fn filter_and_rank(
    papers: Vec<ScoredPaper>,
    entities: &[MedicalEntity],
    raw_query: &str,
    max_results: usize,
) -> Vec<ScoredPaper> {
    let scs_mode = is_scs_search(raw_query);
    let lower_query = raw_query.to_lowercase();
    let lipid_query = contains_any(&lower_query, LIPID_QUERY_TERMS);

    let mut admitted: Vec<ScoredPaper> = Vec::new();

    for mut scored in papers {
        let content = scored.paper.content_lower();

        if scs_mode {
            let score = scs_score(&scored.paper);
            if score >= SCS_ADMISSION_THRESHOLD && !contains_any(&content, SCS_EXCLUSIONS) {
                scored.relevance_score = score;
                admitted.push(scored);
            }
            continue;
        }

        if contains_any(&content, GENERAL_EXCLUSIONS) {
            continue;
        }

        let score = admission_score(&scored.paper, entities, raw_query);
        let threshold = if lipid_query && contains_any(&content, LIPID_CONTENT_TERMS) {
            LIPID_ADMISSION_THRESHOLD
        } else {
            ADMISSION_THRESHOLD
        };
        if score >= threshold {
            scored.relevance_score = score;
            admitted.push(scored);
        }
    }

    admitted.sort_by(|a, b| {
        b.relevance_score
            .partial_cmp(&a.relevance_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    admitted.truncate(max_results);
    admitted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::recognize::recognize;

    fn candidate(title: &str, abstract_text: &str) -> ScoredPaper {
        ScoredPaper {
            paper: Paper {
                title: title.into(),
                abstract_text: abstract_text.into(),
                ..Default::default()
            },
            relevance_score: 0.0,
            summary: String::new(),
        }
    }

    #[test]
    fn scs_mode_detection() {
        assert!(is_scs_search("척수자극술 효과"));
        assert!(is_scs_search("Spinal Cord Stimulation outcomes"));
        assert!(!is_scs_search("당뇨병 치료"));
    }

    #[test]
    fn scs_direct_mention_scores_highest_tier() {
        // "electrode placement", not "implantation": the broad "plant"
        // exclusion matches inside "implantation"
        let p = candidate("Spinal cord stimulation for chronic pain", "electrode placement");
        let ranked = filter_and_rank(vec![p], &[], "scs 효능", 10);
        assert_eq!(ranked.len(), 1);
        // 0.7 direct + 0.2 pain + 0.1 device
        assert!((ranked[0].relevance_score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn scs_abbreviation_needs_context() {
        let with_pain = candidate("SCS outcomes", "reduction of chronic pain scores");
        let ranked = filter_and_rank(vec![with_pain], &[], "scs", 10);
        assert_eq!(ranked.len(), 1);
        // 0.5 abbreviation tier + 0.2 pain vocabulary + 0.1 outcome
        assert!((ranked[0].relevance_score - 0.8).abs() < 1e-9);
    }

    #[test]
    fn scs_mode_excludes_veterinary() {
        let p = candidate("Spinal cord stimulation in veterinary practice", "");
        let ranked = filter_and_rank(vec![p], &[], "척수자극술", 10);
        assert!(ranked.is_empty());
    }

    #[test]
    fn general_mode_threshold_gates_admission() {
        let weak = candidate("unrelated astronomy paper", "stellar dynamics");
        let entities = recognize("당뇨병");
        let ranked = filter_and_rank(vec![weak], &entities, "당뇨병", 10);
        assert!(ranked.is_empty());
    }

    #[test]
    fn general_mode_admits_relevant_paper() {
        let strong = candidate(
            "diabetes mellitus treatment outcomes",
            "clinical trial of patient therapy for diabetes",
        );
        let entities = recognize("당뇨병 치료");
        let ranked = filter_and_rank(vec![strong], &entities, "당뇨병 치료", 10);
        assert_eq!(ranked.len(), 1);
        assert!(ranked[0].relevance_score >= ADMISSION_THRESHOLD);
    }

    #[test]
    fn general_mode_hard_exclusion_wins_over_score() {
        let excluded = candidate(
            "diabetes in veterinary medicine patient clinical treatment",
            "therapy trial study outcome diabetes treatment",
        );
        let entities = recognize("당뇨병");
        let ranked = filter_and_rank(vec![excluded], &entities, "당뇨병 치료 diabetes", 10);
        assert!(ranked.is_empty());
    }

    #[test]
    fn lipid_query_relaxes_threshold() {
        // a lipid-domain paper scoring in [0.08, 0.10): below the general
        // bar, admitted only because the lipid relaxation applies
        let p = candidate("cholesterol screening", "treatment and therapy for patient lipids");
        let entities = [];
        let score = crate::scoring::admission_score(&p.paper, &entities, "cholesterol 검사");
        assert!(
            score >= LIPID_ADMISSION_THRESHOLD && score < ADMISSION_THRESHOLD,
            "{score}"
        );

        let ranked = filter_and_rank(vec![p], &entities, "cholesterol 검사", 10);
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn ranking_sorts_descending_and_truncates() {
        let low = candidate("treatment", "clinical");
        let high = candidate(
            "diabetes treatment outcomes patient",
            "clinical trial therapy study diabetes",
        );
        let entities = recognize("당뇨병 치료 환자");
        let ranked = filter_and_rank(
            vec![low, high.clone()],
            &entities,
            "당뇨병 치료 환자 diabetes treatment",
            1,
        );
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].paper.title, high.paper.title);
    }
}
