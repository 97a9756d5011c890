//! Filter implementations for the eligibility pipeline.
//!
//! Each rule is its own filter so they can be composed, reordered and
//! tested in isolation.

pub mod age_rating;
pub mod extreme_sadness;
pub mod violence;

// Re-export for convenience
pub use age_rating::AgeRatingFilter;
pub use extreme_sadness::ExtremeSadnessFilter;
pub use violence::ViolenceFilter;
