use std::sync::LazyLock;

use regex::Regex;

use crate::models::{EntityKind, MedicalEntity};
use crate::vocab::diseases::{DISEASES, PRIORITY_DISEASES};
use crate::vocab::labs::{lab_tests, KOREAN_TEST_NAMES, MARKER_KEYS, MARKER_MENTIONS};
use crate::vocab::treatments::TREATMENT_KEYWORDS;

/// Value-bearing CA-125 notations: hyphen, space, and compact variants.
static CA125_VALUE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"ca\s*-?\s*125\s*:?\s*(\d+\.?\d*)",
        r"ca125\s*:?\s*(\d+\.?\d*)",
        r"ca\s+125\s*:?\s*(\d+\.?\d*)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Bare CA-125 mentions, tried only when no value-bearing notation matched.
static CA125_MENTION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [r"ca\s*-?\s*125", r"ca125", r"ca\s+125"]
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect()
});

/// "NNN/NNN" pair, interpreted as a blood-pressure reading when both
/// components are physiologically plausible.
static PRESSURE_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{2,3})/(\d{2,3})").unwrap());

/// Value-bearing patterns for every non-marker lab test, built once from
/// the vocabulary: key, lowercased display name, and the Korean synonym
/// where one exists.
static GENERIC_VALUE_PATTERNS: LazyLock<Vec<(String, Vec<Regex>)>> = LazyLock::new(|| {
    lab_tests()
        .iter()
        .filter(|spec| !MARKER_KEYS.contains(&spec.key.as_str()))
        .map(|spec| {
            let mut surfaces = vec![spec.key.clone(), spec.name.to_lowercase()];
            if let Some((_, korean)) = KOREAN_TEST_NAMES.iter().find(|(k, _)| *k == spec.key) {
                surfaces.push((*korean).to_string());
            }
            let regexes = surfaces
                .iter()
                .map(|s| {
                    Regex::new(&format!(r"{}\s*:?\s*(\d+\.?\d*)", regex::escape(s))).unwrap()
                })
                .collect();
            (spec.key.clone(), regexes)
        })
        .collect()
});

/// Extract medical entities from free text.
///
/// Stages run in a fixed order and each appends to the result: priority
/// tumor-marker patterns, generic lab-value patterns, diseases,
/// treatments, then the blood-pressure pair. The output order is the
/// detection order and the function is a pure function of `text`.
pub fn recognize(text: &str) -> Vec<MedicalEntity> {
    let mut entities = Vec::new();

    extract_lab_values(text, &mut entities);
    extract_diseases(text, &mut entities);
    extract_treatments(text, &mut entities);
    extract_pressure_pairs(text, &mut entities);

    entities
}

/// Collapse entities sharing `text` + `kind`, keeping the first occurrence.
///
/// Recognition itself stays permissive (the generic lab stage can emit one
/// entity per pattern variant, the treatment stage one per synonym); this
/// is the separate pass for callers that want the collapsed view.
pub fn dedup_entities(entities: &[MedicalEntity]) -> Vec<MedicalEntity> {
    let mut out: Vec<MedicalEntity> = Vec::new();
    for entity in entities {
        if !out.iter().any(|e| e.text == entity.text && e.kind == entity.kind) {
            out.push(entity.clone());
        }
    }
    out
}

fn extract_lab_values(text: &str, out: &mut Vec<MedicalEntity>) {
    let lower = text.to_lowercase();

    // CA-125 first: value-bearing notations, then a single bare mention.
    if let Some(spec) = lab_tests().get("ca125") {
        let mut found_value = false;
        for re in CA125_VALUE_PATTERNS.iter() {
            for caps in re.captures_iter(&lower) {
                let Ok(value) = caps[1].parse::<f64>() else {
                    continue;
                };
                out.push(MedicalEntity::lab(
                    format!("CA-125 {value}"),
                    Some(value),
                    Some("U/mL".into()),
                    spec.normal.clone(),
                ));
                found_value = true;
            }
        }
        if !found_value {
            for re in CA125_MENTION_PATTERNS.iter() {
                if re.is_match(&lower) {
                    out.push(MedicalEntity::lab(
                        "CA-125",
                        None,
                        Some("U/mL".into()),
                        spec.normal.clone(),
                    ));
                    break;
                }
            }
        }
    }

    // Remaining tumor markers are recognized mention-only; scanning stops
    // at the first marker with a hit.
    'markers: for (key, surfaces) in MARKER_MENTIONS {
        let Some(spec) = lab_tests().get(key) else {
            continue;
        };
        for surface in *surfaces {
            if lower.contains(surface) {
                out.push(MedicalEntity::lab(
                    spec.name.clone(),
                    None,
                    spec.unit().map(str::to_string),
                    spec.normal.clone(),
                ));
                break 'markers;
            }
        }
    }

    // Generic value-bearing patterns. Every match across every surface
    // variant emits its own entity.
    for (key, regexes) in GENERIC_VALUE_PATTERNS.iter() {
        let Some(spec) = lab_tests().get(key) else {
            continue;
        };
        for re in regexes {
            for caps in re.captures_iter(&lower) {
                let Ok(value) = caps[1].parse::<f64>() else {
                    continue;
                };
                out.push(MedicalEntity::lab(
                    format!("{} {}", key.to_uppercase(), value),
                    Some(value),
                    spec.unit().map(str::to_string),
                    spec.normal.clone(),
                ));
            }
        }
    }
}

fn extract_diseases(text: &str, out: &mut Vec<MedicalEntity>) {
    let lower = text.to_lowercase();
    let mut emitted: Vec<&str> = Vec::new();

    // Prioritized partial-match fragments, first hit only.
    for &(fragment, _) in PRIORITY_DISEASES {
        if text.contains(fragment) {
            out.push(MedicalEntity::mention(fragment, EntityKind::Disease));
            emitted.push(fragment);
            break;
        }
    }

    // Full vocabulary: surface form against the raw text, canonical form
    // against the lowercased text, skipping anything already emitted.
    for &(surface, canonical) in DISEASES {
        if text.contains(surface) && !emitted.contains(&surface) {
            out.push(MedicalEntity::mention(surface, EntityKind::Disease));
            emitted.push(surface);
        } else if lower.contains(canonical) && !emitted.contains(&canonical) {
            out.push(MedicalEntity::mention(canonical, EntityKind::Disease));
            emitted.push(canonical);
        }
    }
}

fn extract_treatments(text: &str, out: &mut Vec<MedicalEntity>) {
    let lower = text.to_lowercase();
    for &keyword in TREATMENT_KEYWORDS {
        if lower.contains(keyword) {
            out.push(MedicalEntity::mention(keyword, EntityKind::Treatment));
        }
    }
}

fn extract_pressure_pairs(text: &str, out: &mut Vec<MedicalEntity>) {
    let Some(bp) = lab_tests().get("bp") else {
        return;
    };
    for caps in PRESSURE_PAIR.captures_iter(text) {
        let (Ok(systolic), Ok(diastolic)) =
            (caps[1].parse::<u32>(), caps[2].parse::<u32>())
        else {
            continue;
        };
        if (80..=250).contains(&systolic) && (40..=150).contains(&diastolic) {
            out.push(MedicalEntity::lab(
                format!("{systolic}/{diastolic}"),
                Some(f64::from(systolic)),
                Some("mmHg".into()),
                bp.normal.clone(),
            ));
        }
    }
}
