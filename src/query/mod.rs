//! Boolean search-query synthesis from recognized entities and raw text.

pub mod synthesize;

pub use synthesize::{extract_medical_terms, synthesize};
