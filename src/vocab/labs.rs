use std::sync::LazyLock;

use serde::Deserialize;

/// A curated lab test: canonical key, display name, normal range, and the
/// query-enrichment keywords used when a reading is abnormal.
#[derive(Debug, Clone, Deserialize)]
pub struct LabTestSpec {
    pub key: String,
    pub name: String,
    pub normal: String,
    pub keywords: Vec<String>,
}

impl LabTestSpec {
    /// Unit string derived from the normal-range text.
    pub fn unit(&self) -> Option<&'static str> {
        unit_from_normal_range(&self.normal)
    }
}

/// The curated lab-test vocabulary, bundled with the crate.
pub struct LabVocabulary {
    specs: Vec<LabTestSpec>,
}

impl LabVocabulary {
    pub fn get(&self, key: &str) -> Option<&LabTestSpec> {
        self.specs.iter().find(|s| s.key == key)
    }

    /// Iteration order is the curated order of the bundled resource.
    pub fn iter(&self) -> impl Iterator<Item = &LabTestSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

static LAB_TESTS: LazyLock<LabVocabulary> = LazyLock::new(|| {
    let specs: Vec<LabTestSpec> =
        serde_json::from_str(include_str!("../../resources/lab_tests.json"))
            .expect("bundled lab_tests.json is valid");
    LabVocabulary { specs }
});

/// Shared view of the lab-test vocabulary.
pub fn lab_tests() -> &'static LabVocabulary {
    &LAB_TESTS
}

/// Tumor-marker keys handled by the priority recognition pass; the generic
/// value-pattern pass skips these.
pub const MARKER_KEYS: &[&str] = &[
    "ca125", "ca-125", "ca 125", "cea", "afp", "psa", "ca19-9", "ca15-3", "beta-hcg", "ldh",
];

/// Mention-only surface forms per tumor marker, scanned in this order.
pub const MARKER_MENTIONS: &[(&str, &[&str])] = &[
    ("cea", &["cea"]),
    ("afp", &["afp", "alpha fetoprotein"]),
    ("psa", &["psa", "prostate specific antigen"]),
    ("ca19-9", &["ca 19-9", "ca19-9", "ca 19 9"]),
    ("ca15-3", &["ca 15-3", "ca15-3", "ca 15 3"]),
    ("beta-hcg", &["beta hcg", "beta-hcg", "bhcg"]),
    ("ldh", &["ldh", "lactate dehydrogenase"]),
];

/// Korean synonyms used to build extra value-bearing patterns.
pub const KOREAN_TEST_NAMES: &[(&str, &str)] = &[
    ("crp", "c반응성단백"),
    ("hba1c", "당화혈색소"),
    ("glucose", "혈당"),
    ("cholesterol", "콜레스테롤"),
    ("bp", "혈압"),
];

/// Unit substrings recognized inside a normal-range string, first hit wins.
/// Longer forms sort before the shorter forms they contain.
const UNIT_PATTERNS: &[&str] = &[
    "mg/dL", "mg/L", "g/dL", "ng/mL", "mIU/mL", "U/mL", "U/L", "mmHg", "%", "/μL", "M/μL",
];

/// Extract the unit portion of a normal-range string.
pub fn unit_from_normal_range(normal_range: &str) -> Option<&'static str> {
    UNIT_PATTERNS
        .iter()
        .find(|unit| normal_range.contains(**unit))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_vocabulary_parses() {
        let vocab = lab_tests();
        assert!(!vocab.is_empty());
        assert_eq!(vocab.len(), 27);
    }

    #[test]
    fn crp_spec_matches_reference_interval() {
        let crp = lab_tests().get("crp").unwrap();
        assert_eq!(crp.name, "C-reactive protein");
        assert_eq!(crp.normal, "<3.0 mg/L");
        assert_eq!(crp.unit(), Some("mg/L"));
    }

    #[test]
    fn ca125_aliases_share_one_spec() {
        for key in ["ca125", "ca-125", "ca 125"] {
            let spec = lab_tests().get(key).unwrap();
            assert_eq!(spec.name, "CA-125");
            assert_eq!(spec.normal, "<35 U/mL");
        }
    }

    #[test]
    fn unknown_key_is_absent() {
        assert!(lab_tests().get("troponin").is_none());
    }

    #[test]
    fn every_spec_has_a_range_and_unit() {
        for spec in lab_tests().iter() {
            assert!(!spec.normal.is_empty(), "{} lacks a range", spec.key);
            assert!(spec.unit().is_some(), "{} lacks a unit", spec.key);
        }
    }

    #[test]
    fn unit_extraction_prefers_longer_forms() {
        assert_eq!(unit_from_normal_range("<35 U/mL"), Some("U/mL"));
        assert_eq!(unit_from_normal_range("<5 mIU/mL"), Some("mIU/mL"));
        assert_eq!(unit_from_normal_range("70-100 mg/dL"), Some("mg/dL"));
        assert_eq!(unit_from_normal_range("<3.0 mg/L"), Some("mg/L"));
        assert_eq!(unit_from_normal_range("140-280 U/L"), Some("U/L"));
        assert_eq!(unit_from_normal_range("plain text"), None);
    }

    #[test]
    fn marker_keys_all_resolve() {
        for key in MARKER_KEYS {
            assert!(lab_tests().get(key).is_some(), "{key} missing from vocabulary");
        }
    }
}
