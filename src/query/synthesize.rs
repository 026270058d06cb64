use crate::analyzer::abnormal::is_abnormal;
use crate::config::{PUBLICATION_WINDOW_END, PUBLICATION_WINDOW_START};
use crate::models::{EntityKind, MedicalEntity};
use crate::vocab::diseases;
use crate::vocab::labs::lab_tests;
use crate::vocab::terms::{ENGLISH_MEDICAL_TERMS, MEDICAL_VOCABULARY};
use crate::vocab::treatments::TREATMENT_PROCESS_WORDS;

/// At most this many quoted terms precede the trailing filter clauses.
const MAX_QUERY_TERMS: usize = 4;

const SCS_SURFACES: &[&str] = &["spinal cord stimulation", "scs", "척수자극술"];
const EFFICACY_WORDS: &[&str] = &["효능", "효과", "efficacy", "effectiveness"];
const TREATMENT_WORDS: &[&str] = &["치료", "치료법", "treatment", "therapy"];

const CA125_SURFACES: &[&str] = &["ca 125", "ca-125", "ca125"];
const NORMAL_RANGE_WORDS: &[&str] = &["정상", "범위", "normal", "range"];
const ELEVATION_WORDS: &[&str] = &["높", "상승", "elevated", "high"];
const CUTOFF_WORDS: &[&str] = &["기준", "cutoff", "threshold"];

/// Named tumor markers searched by their canonical quoted term; the first
/// surface form found in the input wins.
const MARKER_QUERIES: &[(&str, &str)] = &[
    ("cea", "\"CEA\""),
    ("afp", "\"AFP\""),
    ("psa", "\"PSA\""),
    ("ca 19-9", "\"CA 19-9\""),
    ("ca15-3", "\"CA 15-3\""),
    ("beta hcg", "\"beta-hCG\""),
];

const DBS_SURFACES: &[&str] = &["deep brain stimulation", "dbs", "심부뇌자극술"];
const PARKINSON_WORDS: &[&str] = &["파킨슨", "parkinson"];
const NEUROSTIM_SURFACES: &[&str] = &["neurostimulation", "신경자극술"];

const EFFECTIVENESS_KEYWORDS: &[&str] =
    &["효능", "효과", "효과성", "efficacy", "effectiveness", "outcome"];

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Join the collected terms and append the fixed trailing clauses: the
/// human-subjects restriction and the publication-date window.
fn finalize(parts: &[String]) -> String {
    let mut query = parts.join(" AND ");
    query.push_str(" AND \"humans\"[MeSH Terms]");
    query.push_str(&format!(
        " AND (\"{PUBLICATION_WINDOW_START}\"[Date - Publication] : \"{PUBLICATION_WINDOW_END}\"[Date - Publication])"
    ));
    query
}

/// Build the boolean search query for a recognized-entity list and its
/// source text.
///
/// An ordered rule chain with first-match-wins semantics: the
/// spinal-cord-stimulation rule and the CA-125 rule return their own
/// clause set immediately; everything else flows into the generic
/// assembly, capped at four terms. Never fails — the worst case is the
/// fixed `"treatment" AND "therapy"` fallback.
pub fn synthesize(entities: &[MedicalEntity], raw_text: &str) -> String {
    let lower = raw_text.to_lowercase();

    // Rule 1: spinal cord stimulation overrides everything.
    if contains_any(&lower, SCS_SURFACES) {
        let mut parts = vec!["\"spinal cord stimulation\"".to_string()];
        if contains_any(&lower, EFFICACY_WORDS) {
            parts.push("\"efficacy\"".to_string());
        }
        if contains_any(&lower, TREATMENT_WORDS) {
            parts.push("\"treatment\"".to_string());
        }
        return finalize(&parts);
    }

    // Rule 2: the priority tumor marker.
    if contains_any(&lower, CA125_SURFACES) {
        let mut parts = vec!["\"CA-125\"".to_string()];
        if contains_any(&lower, NORMAL_RANGE_WORDS) {
            parts.push("\"reference values\"".to_string());
        }
        if contains_any(&lower, ELEVATION_WORDS) {
            parts.push("\"ovarian cancer\"".to_string());
        }
        if contains_any(&lower, CUTOFF_WORDS) {
            parts.push("\"diagnostic\"".to_string());
        }
        return finalize(&parts);
    }

    let mut parts: Vec<String> = Vec::new();

    // Other named markers, first surface hit wins.
    for &(surface, term) in MARKER_QUERIES {
        if lower.contains(surface) {
            parts.push(term.to_string());
            parts.push("\"tumor marker\"".to_string());
            break;
        }
    }

    // Other stimulation families.
    if contains_any(&lower, DBS_SURFACES) {
        parts.push("\"deep brain stimulation\"".to_string());
        if contains_any(&lower, PARKINSON_WORDS) {
            parts.push("\"parkinson disease\"".to_string());
        }
    } else if contains_any(&lower, NEUROSTIM_SURFACES) {
        parts.push("\"neurostimulation\"".to_string());
        parts.push("\"chronic pain\"".to_string());
    }

    // Generic assembly runs only when nothing above collected a term.
    if parts.is_empty() {
        assemble_from_entities(entities, &lower, &mut parts);
    }

    // Last resort: broad-vocabulary extraction, then the fixed pair.
    if parts.is_empty() {
        let terms = extract_medical_terms(raw_text);
        if terms.is_empty() {
            parts.push("\"treatment\"".to_string());
            parts.push("\"therapy\"".to_string());
        } else {
            parts.extend(terms.into_iter().take(2).map(|t| format!("\"{t}\"")));
        }
    }

    parts.truncate(MAX_QUERY_TERMS);
    finalize(&parts)
}

/// Generic entity-to-term translation: treatments, then diseases (their
/// canonical English names), then tests with abnormality enrichment, then
/// a single effectiveness term.
fn assemble_from_entities(entities: &[MedicalEntity], lower: &str, parts: &mut Vec<String>) {
    for entity in entities.iter().filter(|e| e.kind == EntityKind::Treatment) {
        parts.push(format!("\"{}\"", entity.text));
    }

    for entity in entities.iter().filter(|e| e.kind == EntityKind::Disease) {
        // treatment-process words already produce a generic treatment term
        if TREATMENT_PROCESS_WORDS.contains(&entity.text.to_lowercase().as_str()) {
            continue;
        }
        match diseases::canonical(&entity.text) {
            Some(canonical) => parts.push(format!("\"{canonical}\"")),
            None => parts.push(format!("\"{}\"", entity.text)),
        }
    }

    for entity in entities.iter().filter(|e| e.kind == EntityKind::Test) {
        if entity.text.starts_with("CA-125") {
            parts.push("\"CA-125\"".to_string());
            parts.push("\"tumor marker\"".to_string());
            parts.push("\"ovarian cancer\"".to_string());
        } else if entity.text.starts_with("CEA") {
            parts.push("\"CEA\"".to_string());
            parts.push("\"tumor marker\"".to_string());
        } else if entity.text.starts_with("AFP") {
            parts.push("\"AFP\"".to_string());
            parts.push("\"tumor marker\"".to_string());
        } else if entity.text.starts_with("PSA") {
            parts.push("\"PSA\"".to_string());
            parts.push("\"prostate cancer\"".to_string());
        } else if let Some(first_token) = entity.text.split_whitespace().next() {
            let test_key = first_token.to_lowercase();
            if let Some(spec) = lab_tests().get(&test_key) {
                parts.push(format!("\"{}\"", spec.name));
                if let Some(value) = entity.value {
                    if is_abnormal(&test_key, value) {
                        for keyword in spec.keywords.iter().take(2) {
                            parts.push(format!("\"{keyword}\""));
                        }
                    }
                }
            }
        }
    }

    for &keyword in EFFECTIVENESS_KEYWORDS {
        if lower.contains(keyword) && !parts.iter().any(|p| p.contains(keyword)) {
            if matches!(keyword, "효능" | "효과" | "효과성") {
                parts.push("\"efficacy\"".to_string());
            } else {
                parts.push(format!("\"{keyword}\""));
            }
            break;
        }
    }
}

/// Pull up to a handful of English search terms straight out of the raw
/// text via the broad medical vocabulary. Deterministic: first-occurrence
/// order, duplicates dropped.
pub fn extract_medical_terms(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();

    // Stimulation modalities get a curated term set.
    if lower.contains("spinal cord stimulation") {
        return to_terms(&[
            "spinal cord stimulation",
            "chronic pain",
            "neuropathic pain",
            "pain management",
        ]);
    }
    if lower.contains("scs") && (lower.contains("치료") || lower.contains("효능")) {
        return to_terms(&["spinal cord stimulation", "chronic pain", "neuropathic pain"]);
    }
    if lower.contains("척수자극술") {
        return to_terms(&["spinal cord stimulation", "chronic pain", "neuropathic pain"]);
    }
    if lower.contains("deep brain stimulation") || lower.contains("dbs") {
        return to_terms(&["deep brain stimulation", "parkinson disease", "movement disorder"]);
    }
    if lower.contains("neurostimulation") || lower.contains("신경자극술") {
        return to_terms(&["neurostimulation", "chronic pain", "neuropathic pain"]);
    }

    let mut terms: Vec<String> = Vec::new();
    for &(korean, english) in MEDICAL_VOCABULARY {
        if lower.contains(korean) && !terms.iter().any(|t| t == english) {
            terms.push(english.to_string());
        }
    }
    for &term in ENGLISH_MEDICAL_TERMS {
        if lower.contains(term) && !terms.iter().any(|t| t == term) {
            terms.push(term.to_string());
        }
    }
    terms
}

fn to_terms(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|t| (*t).to_string()).collect()
}
