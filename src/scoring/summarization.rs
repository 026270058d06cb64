use crate::config::SUMMARIZATION_SCORE_SCALE;
use crate::models::Paper;

/// Unambiguously non-medical phrases; any hit excludes the paper outright.
const IMMEDIATE_EXCLUSIONS: &[&str] = &[
    "autophagy in plants",
    "plant autophagy",
    "vegetable growth models",
    "health system review",
    "luxembourg health",
    "north macedonia health",
    "research advance on vegetable",
    "agricultural research",
    "plant biology",
    "veterinary medicine",
    "animal disease",
    "livestock health",
];

/// Medical keywords, one point each. Broader than the admission scorer's
/// list on purpose.
const MEDICAL_KEYWORDS: &[&str] = &[
    "patient",
    "clinical",
    "treatment",
    "therapy",
    "diagnosis",
    "therapeutic",
    "medical",
    "hospital",
    "surgery",
    "drug",
    "medication",
    "medicine",
    "disease",
    "disorder",
    "syndrome",
    "infection",
    "cancer",
    "tumor",
    "cardiovascular",
    "diabetes",
    "hypertension",
    "inflammation",
    "pharmacological",
    "pathology",
    "symptoms",
    "prognosis",
    "mortality",
    "intervention",
    "randomized",
    "trial",
    "efficacy",
    "safety",
    "outcome",
    "healthcare",
    "health care",
    "medical care",
    "patient care",
    "nursing",
    "physician",
    "doctor",
    "nurse",
    "clinic",
    "emergency",
    "intensive care",
    "blood",
    "serum",
    "plasma",
    "laboratory",
    "biomarker",
    "screening",
    "hemoglobin",
    "anemia",
    "dizziness",
    "fatigue",
    "weakness",
];

/// Korean medical terms scored against the original query, not the paper.
const KOREAN_QUERY_TERMS: &[&str] = &[
    "치료",
    "진단",
    "환자",
    "질병",
    "질환",
    "증상",
    "검사",
    "수치",
    "헤모글로빈",
    "빈혈",
    "어지러움",
    "피로",
    "무력감",
];

/// Off-domain keywords, three penalty points each.
const NON_MEDICAL_KEYWORDS: &[&str] = &[
    "autophagy in plants",
    "plant biology",
    "agricultural research",
    "health system review",
    "veterinary medicine",
    "livestock",
    "narcissism",
    "political",
    "social media",
    "artificial intelligence",
];

/// Score a paper for display ordering.
///
/// Point scale: +5 per query token in the title and +2 per token in the
/// abstract (independent checks), +1 per medical keyword in the document,
/// +3 per Korean medical term in the query, −3 per non-medical keyword in
/// the document; normalized by a fixed denominator and clamped to `[0, 1]`.
/// A document containing an immediate-exclusion phrase scores exactly 0.
pub fn summarization_score(paper: &Paper, raw_query: &str) -> f64 {
    let title = paper.title.to_lowercase();
    let abstract_text = paper.abstract_text.to_lowercase();
    let content = paper.content_lower();

    if IMMEDIATE_EXCLUSIONS.iter().any(|p| content.contains(p)) {
        return 0.0;
    }

    let mut score: i32 = 0;

    let query = raw_query.to_lowercase();
    for word in query.split_whitespace().filter(|w| w.chars().count() > 2) {
        if title.contains(word) {
            score += 5;
        }
        if abstract_text.contains(word) {
            score += 2;
        }
    }

    for &keyword in MEDICAL_KEYWORDS {
        if content.contains(keyword) {
            score += 1;
        }
    }

    for &term in KOREAN_QUERY_TERMS {
        if raw_query.contains(term) {
            score += 3;
        }
    }

    for &keyword in NON_MEDICAL_KEYWORDS {
        if content.contains(keyword) {
            score -= 3;
        }
    }

    (f64::from(score) / SUMMARIZATION_SCORE_SCALE).clamp(0.0, 1.0)
}
