//! Mood-based recommendation engine.
//!
//! This crate ranks a movie catalog against a mood query and fills three
//! output slots (safe, challenge, deep).
//!
//! ## Architecture
//! A request flows through the engine in stages:
//! 1. Eligibility filters drop movies by age rating and avoidance flags
//! 2. Every remaining movie is scored against the query (in parallel)
//! 3. A stable sort ranks them, and the slot rules pick three movies
//!
//! The engine is pure: no I/O, no shared state, no randomness. Given the
//! same catalog, query, profile and date it returns the same picks, and it
//! always returns picks for a non-empty catalog.
//!
//! ## Example Usage
//! ```ignore
//! use catalog::{Catalog, EnergyLevel, Intensity, MentalDepth, PrimaryMood};
//! use engine::{recommend, AvoidanceFlag, MoodQuery};
//!
//! let catalog = Catalog::seed()?;
//! let query = MoodQuery::new(
//!     PrimaryMood::Lonely,
//!     Intensity::Medium,
//!     EnergyLevel::Low,
//!     MentalDepth::Deep,
//! )
//! .avoiding(AvoidanceFlag::NoViolence);
//!
//! let picks = recommend(&catalog, &query, None);
//! println!("safe: {}", picks.safe.title);
//! ```

pub mod tables;
pub mod query;
pub mod profile;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod scoring;
pub mod recommend;

#[cfg(test)]
mod test_support;

// Re-export main types
pub use filter_pipeline::{filter_eligible, FilterPipeline};
pub use profile::{age_on, effective_age, UserProfile, DEFAULT_AGE};
pub use query::{AvoidanceFlag, DeliveryStyle, MoodQuery};
pub use recommend::{rank, recommend, recommend_on, RecommendationResult};
pub use scoring::{explain, score, ScoreBreakdown, ScoredMovie};
pub use traits::{EligibilityContext, Filter};
