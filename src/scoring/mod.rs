//! Relevance scoring of candidate papers against a query.
//!
//! Two scorers coexist on purpose: the admission scorer gates and ranks
//! search results, the summarization scorer orders papers for display.
//! They use different weight scales and different exclusion lists; do not
//! unify them — filtering behavior depends on the exact constants of each.

pub mod admission;
pub mod summarization;

pub use admission::admission_score;
pub use summarization::summarization_score;
