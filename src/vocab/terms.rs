//! Broad medical-concept vocabulary used by the query-synthesis fallback.
//!
//! Wider than the disease/treatment tables: body parts, care processes,
//! outcome words. Scanned by substring containment against the lowercased
//! input.

/// Korean medical term → English search term.
pub const MEDICAL_VOCABULARY: &[(&str, &str)] = &[
    ("치료", "treatment"),
    ("진단", "diagnosis"),
    ("증상", "symptoms"),
    ("환자", "patient"),
    ("임상", "clinical"),
    ("수술", "surgery"),
    ("시술", "procedure"),
    ("요법", "therapy"),
    ("약물", "drug"),
    ("투약", "medication"),
    ("처방", "prescription"),
    ("검사", "examination"),
    ("진료", "medical care"),
    ("병원", "hospital"),
    ("의료", "medical"),
    ("질환", "disease"),
    ("질병", "disease"),
    ("병증", "syndrome"),
    ("증후군", "syndrome"),
    ("장애", "disorder"),
    ("감염", "infection"),
    ("염증", "inflammation"),
    ("종양", "tumor"),
    ("암", "cancer"),
    ("통증", "pain"),
    ("아픔", "pain"),
    ("열", "fever"),
    ("기침", "cough"),
    ("호흡", "breathing"),
    ("심장", "heart"),
    ("혈압", "blood pressure"),
    ("혈당", "blood glucose"),
    ("콜레스테롤", "cholesterol"),
    ("간", "liver"),
    ("신장", "kidney"),
    ("폐", "lung"),
    ("뇌", "brain"),
    ("신경", "nerve"),
    ("근육", "muscle"),
    ("뼈", "bone"),
    ("관절", "joint"),
    ("피부", "skin"),
    ("혈액", "blood"),
    ("소변", "urine"),
    ("변", "stool"),
    ("체중", "weight"),
    ("비만", "obesity"),
    ("당뇨", "diabetes"),
    ("고혈압", "hypertension"),
    ("고지혈", "hyperlipidemia"),
    ("파킨슨", "parkinson"),
    ("알츠하이머", "alzheimer"),
    ("효능", "efficacy"),
    ("효과", "effectiveness"),
    ("결과", "outcome"),
    ("성과", "result"),
    ("반응", "response"),
    ("개선", "improvement"),
    ("완화", "relief"),
    ("감소", "reduction"),
    ("증가", "increase"),
    ("향상", "enhancement"),
    ("만성통증", "chronic pain"),
    ("신경통", "neuralgia"),
    ("신경병증", "neuropathy"),
    ("요통", "back pain"),
    ("목통증", "neck pain"),
    ("두통", "headache"),
    ("편두통", "migraine"),
    ("관절통", "joint pain"),
    ("근육통", "muscle pain"),
    ("복통", "abdominal pain"),
    ("흉통", "chest pain"),
];

/// English medical terms accepted directly from the input.
pub const ENGLISH_MEDICAL_TERMS: &[&str] = &[
    "treatment",
    "therapy",
    "diagnosis",
    "clinical",
    "patient",
    "surgery",
    "medication",
    "drug",
    "procedure",
    "examination",
    "medical",
    "disease",
    "syndrome",
    "disorder",
    "infection",
    "inflammation",
    "tumor",
    "cancer",
    "pain",
    "fever",
    "chronic",
    "acute",
    "efficacy",
    "effectiveness",
    "outcome",
];
