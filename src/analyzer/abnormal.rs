/// Tests with a configured abnormality threshold. Readings strictly above
/// the threshold are flagged; every other test key is never flagged
/// (conservative default).
const THRESHOLDS: &[(&str, f64)] = &[
    ("crp", 3.0),
    ("hba1c", 5.7),
    ("glucose", 100.0),
    ("cholesterol", 200.0),
    // systolic component of a blood-pressure reading
    ("bp", 120.0),
];

/// Whether a lab reading falls outside its configured threshold.
pub fn is_abnormal(test_key: &str, value: f64) -> bool {
    THRESHOLDS
        .iter()
        .find(|(key, _)| *key == test_key)
        .is_some_and(|(_, threshold)| value > *threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elevated_crp_is_abnormal() {
        assert!(is_abnormal("crp", 12.5));
        assert!(!is_abnormal("crp", 2.9));
    }

    #[test]
    fn threshold_is_strict() {
        assert!(!is_abnormal("hba1c", 5.7));
        assert!(is_abnormal("hba1c", 5.71));
    }

    #[test]
    fn elevated_hba1c_is_abnormal() {
        assert!(is_abnormal("hba1c", 7.8));
    }

    #[test]
    fn unknown_key_is_never_abnormal() {
        assert!(!is_abnormal("ldh", 10_000.0));
        assert!(!is_abnormal("ca-125", 500.0));
        assert!(!is_abnormal("", 1.0));
    }

    #[test]
    fn systolic_pressure_threshold() {
        assert!(is_abnormal("bp", 190.0));
        assert!(!is_abnormal("bp", 118.0));
    }
}
