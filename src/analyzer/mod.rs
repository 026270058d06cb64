//! Entity recognition over free-text clinical queries.
//!
//! Every function here is total: recognition of un-matchable input yields
//! an empty list, never an error, and numeric parse failures skip the
//! match instead of raising.

pub mod abnormal;
pub mod interpret;
pub mod recognize;
pub mod tips;

pub use abnormal::is_abnormal;
pub use interpret::interpret_values;
pub use recognize::{dedup_entities, recognize};
pub use tips::health_tips;
