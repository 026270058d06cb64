//! Treatment and procedure surface forms.

/// Flat keyword list for treatment/procedure recognition. Every keyword
/// contained in the lowercased input yields its own entity; synonyms of the
/// same procedure are not collapsed.
pub const TREATMENT_KEYWORDS: &[&str] = &[
    "spinal cord stimulation",
    "scs",
    "척수자극술",
    "신경자극술",
    "neurostimulation",
    "deep brain stimulation",
    "dbs",
    "심부뇌자극술",
    "vagus nerve stimulation",
    "vns",
    "미주신경자극술",
    "peripheral nerve stimulation",
    "pns",
    "말초신경자극술",
    "tens",
    "경피전기신경자극술",
    "수술",
    "시술",
    "요법",
];

/// Treatment-process surface forms excluded from generic disease terms in
/// query synthesis, to avoid emitting a duplicate generic "treatment" term.
pub const TREATMENT_PROCESS_WORDS: &[&str] =
    &["치료", "치료법", "치료방법", "효능", "효과", "효과성"];
