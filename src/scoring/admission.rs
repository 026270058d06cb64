use crate::models::{EntityKind, MedicalEntity, Paper};

/// Korean query term → English document term; each pair present on both
/// sides earns a small bonus.
const CONCEPT_PAIRS: &[(&str, &str)] = &[
    ("당뇨병", "diabetes"),
    ("고혈압", "hypertension"),
    ("파킨슨", "parkinson"),
    ("암", "cancer"),
    ("종양", "tumor"),
    ("심장", "heart"),
    ("뇌", "brain"),
    ("치료", "treatment"),
    ("진단", "diagnosis"),
    ("수술", "surgery"),
    ("효능", "efficacy"),
    ("효과", "effectiveness"),
];

/// Generic medical keywords; every one present in the document adds a
/// baseline bonus.
const MEDICAL_KEYWORDS: &[&str] = &[
    "patient",
    "clinical",
    "treatment",
    "therapy",
    "diagnosis",
    "disease",
    "medical",
    "health",
    "study",
    "trial",
    "efficacy",
    "outcome",
    "hospital",
];

const CA125_QUERY_SURFACES: &[&str] = &["ca 125", "ca-125", "ca125"];
const CA125_COMPANIONS: &[&str] = &["ca-125", "ca 125", "tumor marker", "ovarian cancer"];

/// Score a candidate paper for admission filtering and ranking.
///
/// Additive: query tokens (title outweighs abstract, no double counting),
/// recognized entities found in the document, Korean↔English concept
/// pairs, generic medical keywords, and the tumor-marker companion bonus.
/// Clamped to `[0, 1]`.
pub fn admission_score(paper: &Paper, entities: &[MedicalEntity], raw_query: &str) -> f64 {
    let title = paper.title.to_lowercase();
    let abstract_text = paper.abstract_text.to_lowercase();
    let content = paper.content_lower();
    let query = raw_query.to_lowercase();

    let mut score: f64 = 0.0;

    // Direct query-token matches; the title is checked first so a token
    // never counts twice.
    for word in query.split_whitespace().filter(|w| w.chars().count() > 2) {
        if title.contains(word) {
            score += 0.05;
        } else if abstract_text.contains(word) {
            score += 0.02;
        }
    }

    for entity in entities {
        if content.contains(&entity.text.to_lowercase()) {
            score += match entity.kind {
                EntityKind::Disease => 0.04,
                EntityKind::Test => 0.03,
                EntityKind::Treatment => 0.04,
                EntityKind::Symptom => 0.0,
            };
        }
    }

    for &(korean, english) in CONCEPT_PAIRS {
        if query.contains(korean) && content.contains(english) {
            score += 0.03;
        }
    }

    for &keyword in MEDICAL_KEYWORDS {
        if content.contains(keyword) {
            score += 0.01;
        }
    }

    if CA125_QUERY_SURFACES.iter().any(|s| query.contains(s))
        && CA125_COMPANIONS.iter().any(|s| content.contains(s))
    {
        score += 0.10;
    }

    score.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::recognize::recognize;

    fn paper(title: &str, abstract_text: &str) -> Paper {
        Paper {
            title: title.into(),
            abstract_text: abstract_text.into(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_inputs_score_zero() {
        let p = paper("", "");
        assert_eq!(admission_score(&p, &[], ""), 0.0);
    }

    #[test]
    fn title_match_outweighs_abstract_match() {
        let query = "metformin study";
        let in_title = paper("metformin trial", "");
        let in_abstract = paper("", "metformin trial");
        let title_score = admission_score(&in_title, &[], query);
        let abstract_score = admission_score(&in_abstract, &[], query);
        assert!(title_score > abstract_score);
    }

    #[test]
    fn query_token_weights_are_exact() {
        // "metformin" hits the title (+0.05); "trial" is a medical
        // keyword (+0.01)
        let p = paper("metformin trial", "something else");
        let score = admission_score(&p, &[], "metformin");
        assert!((score - 0.06).abs() < 1e-9, "{score}");
    }

    #[test]
    fn short_tokens_are_ignored() {
        let p = paper("on of it", "");
        assert_eq!(admission_score(&p, &[], "on of it"), 0.0);
    }

    #[test]
    fn entity_kind_bonuses() {
        let p = paper("hypertension and 고혈압", "");
        let entities = recognize("고혈압");
        // query token in title +0.05, disease entity in document +0.04,
        // Korean↔English pair 고혈압/hypertension +0.03
        let score = admission_score(&p, &entities, "고혈압");
        assert!((score - 0.12).abs() < 1e-9, "{score}");
    }

    #[test]
    fn concept_pair_requires_both_sides() {
        let doc_only = paper("diabetes care", "");
        // "당뇨병" in query + "diabetes" in doc: pair bonus applies
        let with_pair = admission_score(&doc_only, &[], "당뇨병");
        let without_pair = admission_score(&doc_only, &[], "혈액");
        assert!(with_pair > without_pair);
    }

    #[test]
    fn ca125_companion_bonus() {
        let p = paper("ovarian cancer screening with tumor marker", "");
        let base = admission_score(&p, &[], "다른 검사");
        let boosted = admission_score(&p, &[], "ca-125 검사");
        assert!((boosted - base - 0.10).abs() < 1e-9, "base {base} boosted {boosted}");
    }

    #[test]
    fn score_is_clamped_to_one() {
        let text = "patient clinical treatment therapy diagnosis disease medical health study trial efficacy outcome hospital";
        let p = paper(text, text);
        let query = text;
        let score = admission_score(&p, &[], query);
        assert!(score <= 1.0);
        assert!(score >= 0.0);
    }
}
