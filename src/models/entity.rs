use serde::{Deserialize, Serialize};

/// What kind of medical fact an entity represents.
///
/// `Symptom` is reserved: it is a valid kind for downstream consumers but
/// no current recognition rule produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Disease,
    Test,
    Treatment,
    Symptom,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disease => "disease",
            Self::Test => "test",
            Self::Treatment => "treatment",
            Self::Symptom => "symptom",
        }
    }
}

/// A structured medical fact recognized in free text.
///
/// `value` is only ever present on `Test` entities with a detected numeric
/// reading. Recognized lab tests always carry `unit` and `normal_range`,
/// whether or not a value was found; other kinds carry neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalEntity {
    pub text: String,
    pub kind: EntityKind,
    pub value: Option<f64>,
    pub unit: Option<String>,
    pub normal_range: Option<String>,
}

impl MedicalEntity {
    /// A disease/treatment mention with no numeric payload.
    pub fn mention(text: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            text: text.into(),
            kind,
            value: None,
            unit: None,
            normal_range: None,
        }
    }

    /// A lab-test entity, with or without a detected value.
    pub fn lab(
        text: impl Into<String>,
        value: Option<f64>,
        unit: Option<String>,
        normal_range: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            kind: EntityKind::Test,
            value,
            unit,
            normal_range: Some(normal_range.into()),
        }
    }
}
