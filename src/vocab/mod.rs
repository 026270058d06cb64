//! Read-only vocabulary tables shared by every recognition and scoring call.
//!
//! Everything here is loaded once into process-wide statics and never
//! mutated; calls borrow, they never copy.

pub mod diseases;
pub mod labs;
pub mod terms;
pub mod treatments;

pub use labs::{lab_tests, LabTestSpec};
