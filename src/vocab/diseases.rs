//! Disease surface forms and their canonical English concepts.

/// Prioritized partial-match fragments, checked before the full vocabulary.
/// Order matters: the first fragment contained in the input wins and ends
/// the priority pass.
pub const PRIORITY_DISEASES: &[(&str, &str)] = &[
    ("파킨슨", "parkinson disease"),
    ("파킨슨병", "parkinson disease"),
    ("알츠하이머", "alzheimer disease"),
    ("치매", "dementia"),
    ("당뇨", "diabetes mellitus"),
    ("고혈압", "hypertension"),
    ("고지혈", "hyperlipidemia"),
    ("심근경색", "myocardial infarction"),
    ("뇌졸중", "stroke"),
    ("관절염", "arthritis"),
    ("천식", "asthma"),
    ("우울증", "depression"),
    ("불안", "anxiety disorder"),
    ("간염", "hepatitis"),
    ("신부전", "renal failure"),
    ("심부전", "heart failure"),
    ("골다공증", "osteoporosis"),
    ("난소암", "ovarian cancer"),
    ("유방암", "breast cancer"),
    ("폐암", "lung cancer"),
    ("대장암", "colorectal cancer"),
    ("위암", "gastric cancer"),
    ("간암", "liver cancer"),
    ("췌장암", "pancreatic cancer"),
    ("전립선암", "prostate cancer"),
];

/// Full disease/concept vocabulary: local surface form → canonical English
/// concept. Matching is plain substring containment; the surface form is
/// checked against the raw text, the canonical form against the lowercased
/// text.
pub const DISEASES: &[(&str, &str)] = &[
    ("당뇨병", "diabetes mellitus"),
    ("고혈압", "hypertension"),
    ("파킨슨병", "parkinson disease"),
    ("알츠하이머", "alzheimer disease"),
    ("심근경색", "myocardial infarction"),
    ("뇌졸중", "stroke"),
    ("암", "cancer"),
    ("관절염", "arthritis"),
    ("천식", "asthma"),
    ("우울증", "depression"),
    ("불안장애", "anxiety disorder"),
    ("간염", "hepatitis"),
    ("신부전", "renal failure"),
    ("심부전", "heart failure"),
    ("골다공증", "osteoporosis"),
    ("고지혈", "hyperlipidemia"),
    ("고지혈증", "hyperlipidemia"),
    ("이상지질혈증", "dyslipidemia"),
    ("고콜레스테롤혈증", "hypercholesterolemia"),
    ("고중성지방혈증", "hypertriglyceridemia"),
    ("동맥경화", "atherosclerosis"),
    ("협심증", "angina pectoris"),
    ("부정맥", "arrhythmia"),
    ("심방세동", "atrial fibrillation"),
    ("갑상선기능항진증", "hyperthyroidism"),
    ("갑상선기능저하증", "hypothyroidism"),
    ("비만", "obesity"),
    ("대사증후군", "metabolic syndrome"),
    ("위염", "gastritis"),
    ("위궤양", "gastric ulcer"),
    ("십이지장궤양", "duodenal ulcer"),
    ("역류성식도염", "gastroesophageal reflux disease"),
    ("폐렴", "pneumonia"),
    ("기관지염", "bronchitis"),
    ("만성폐쇄성폐질환", "chronic obstructive pulmonary disease"),
    ("뇌전증", "epilepsy"),
    ("편두통", "migraine"),
    ("치매", "dementia"),
    ("파킨슨", "parkinson"),
    ("파킨슨증", "parkinsonism"),
    ("도파민", "dopamine"),
    ("레보도파", "levodopa"),
    ("l-dopa", "levodopa"),
    ("카비도파", "carbidopa"),
    ("도파민작용제", "dopamine agonist"),
    ("프라미펙솔", "pramipexole"),
    ("로피니롤", "ropinirole"),
    ("떨림", "tremor"),
    ("진전", "tremor"),
    ("경직", "rigidity"),
    ("서동증", "bradykinesia"),
    ("자세불안정", "postural instability"),
    ("보행장애", "gait disorder"),
    ("운동장애", "movement disorder"),
    ("신경퇴행성질환", "neurodegenerative disease"),
    ("심부뇌자극술", "deep brain stimulation"),
    ("dbs", "deep brain stimulation"),
    ("치료", "treatment"),
    ("치료법", "therapy"),
    ("치료방법", "treatment method"),
    ("약물치료", "drug therapy"),
    ("수술치료", "surgical treatment"),
    ("물리치료", "physical therapy"),
    ("재활치료", "rehabilitation"),
    ("운동치료", "exercise therapy"),
    ("spinal cord stimulation", "spinal cord stimulation"),
    ("scs", "spinal cord stimulation"),
    ("척수자극술", "spinal cord stimulation"),
    ("신경자극술", "neurostimulation"),
    ("neurostimulation", "neurostimulation"),
    ("deep brain stimulation", "deep brain stimulation"),
    ("vagus nerve stimulation", "vagus nerve stimulation"),
    ("vns", "vagus nerve stimulation"),
    ("미주신경자극술", "vagus nerve stimulation"),
    ("peripheral nerve stimulation", "peripheral nerve stimulation"),
    ("pns", "peripheral nerve stimulation"),
    ("말초신경자극술", "peripheral nerve stimulation"),
    ("transcutaneous electrical nerve stimulation", "tens"),
    ("tens", "tens"),
    ("경피전기신경자극술", "tens"),
    ("만성통증", "chronic pain"),
    ("신경병증성통증", "neuropathic pain"),
    ("요통", "back pain"),
    ("목통증", "neck pain"),
    ("관절통", "joint pain"),
    ("두통", "headache"),
    ("효능", "efficacy"),
    ("효과", "effectiveness"),
    ("효과성", "effectiveness"),
    ("치료효과", "therapeutic effect"),
    ("임상효과", "clinical effect"),
    ("결과", "outcome"),
    ("성과", "outcome"),
];

/// Canonical English concept for a surface form, if the vocabulary has it.
pub fn canonical(surface: &str) -> Option<&'static str> {
    DISEASES
        .iter()
        .find(|(s, _)| *s == surface)
        .map(|(_, c)| *c)
}
