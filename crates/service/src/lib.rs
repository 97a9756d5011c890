//! Service crate for the Moodflix recommendation engine.
//!
//! Wraps the pure engine for async callers: the catalog is shared behind an
//! `Arc`, each request runs on the blocking pool, and signed-in requests are
//! logged to an in-memory mood history.

pub mod history;
pub mod orchestrator;

pub use history::{HistoryEntry, MoodHistory, UserId};
pub use orchestrator::{MoodRequest, MoviePack, RecommendationOrchestrator, Requester};
