use crate::analyzer::abnormal::is_abnormal;
use crate::models::{EntityKind, MedicalEntity};
use crate::vocab::labs::lab_tests;

/// Render one interpretation line per lab entity with a numeric reading.
///
/// Entities whose first token does not resolve to a vocabulary test (e.g.
/// a raw blood-pressure pair) are skipped, as are value-less mentions.
pub fn interpret_values(entities: &[MedicalEntity]) -> Vec<String> {
    let mut interpretations = Vec::new();

    for entity in entities {
        if entity.kind != EntityKind::Test {
            continue;
        }
        let Some(value) = entity.value else {
            continue;
        };
        let Some(first_token) = entity.text.split_whitespace().next() else {
            continue;
        };
        let test_key = first_token.to_lowercase();
        let Some(spec) = lab_tests().get(&test_key) else {
            continue;
        };

        let status = if is_abnormal(&test_key, value) {
            "비정상"
        } else {
            "정상 범위"
        };
        let range = entity.normal_range.as_deref().unwrap_or(&spec.normal);
        interpretations.push(format!("{}: {} ({}, 정상: {})", spec.name, value, status, range));
    }

    interpretations
}
