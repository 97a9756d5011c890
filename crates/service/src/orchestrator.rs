//! # Recommendation Orchestrator
//!
//! This module wraps the engine for use from async request handlers:
//! 1. Take a mood request (query plus optional signed-in requester)
//! 2. Run the engine on the blocking pool against the shared catalog
//! 3. Copy the three picks into an owned `MoviePack`
//! 4. Log the request to the requester's mood history
//!
//! The catalog sits behind an `Arc` and is never written, so any number of
//! requests can run at once without locking it.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use catalog::{Catalog, MovieRecord, PrimaryMood};
use engine::{recommend_on, DeliveryStyle, MoodQuery, RecommendationResult, UserProfile};

use crate::history::{HistoryEntry, MoodHistory, UserId};

/// A signed-in user making the request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requester {
    pub user_id: UserId,
    #[serde(default)]
    pub profile: UserProfile,
}

/// Everything the HTTP layer hands over for one recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodRequest {
    pub query: MoodQuery,
    /// Absent for anonymous requests
    #[serde(default)]
    pub requester: Option<Requester>,
}

impl MoodRequest {
    pub fn anonymous(query: MoodQuery) -> Self {
        Self {
            query,
            requester: None,
        }
    }

    pub fn for_user(query: MoodQuery, user_id: impl Into<UserId>, profile: UserProfile) -> Self {
        Self {
            query,
            requester: Some(Requester {
                user_id: user_id.into(),
                profile,
            }),
        }
    }
}

/// Final recommendation returned to the caller, owning its movies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoviePack {
    pub primary_mood: PrimaryMood,
    pub delivery_style: DeliveryStyle,
    pub safe: MovieRecord,
    pub challenge: MovieRecord,
    pub deep: MovieRecord,
    /// True when nothing was eligible and the fallback movie was used
    pub fallback: bool,
}

impl MoviePack {
    fn from_result(query: &MoodQuery, result: &RecommendationResult<'_>) -> Self {
        Self {
            primary_mood: query.primary_mood,
            delivery_style: query.delivery_style,
            safe: result.safe.clone(),
            challenge: result.challenge.clone(),
            deep: result.deep.clone(),
            fallback: result.fallback,
        }
    }
}

/// Coordinates the engine, the shared catalog and the history log
#[derive(Clone)]
pub struct RecommendationOrchestrator {
    catalog: Arc<Catalog>,
    history: MoodHistory,
}

impl RecommendationOrchestrator {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            history: MoodHistory::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Main entry point: recommend a pack as of today
    pub async fn recommend(&self, request: MoodRequest) -> Result<MoviePack> {
        self.recommend_on(request, engine::profile::today()).await
    }

    /// Recommend a pack as of `today`
    #[instrument(skip_all, fields(mood = %request.query.primary_mood))]
    pub async fn recommend_on(&self, request: MoodRequest, today: NaiveDate) -> Result<MoviePack> {
        let start_time = Instant::now();

        let pack = tokio::task::spawn_blocking({
            let catalog = self.catalog.clone();
            let request = request.clone();
            move || {
                let profile = request.requester.as_ref().map(|r| &r.profile);
                let result = recommend_on(&catalog, &request.query, profile, today);
                MoviePack::from_result(&request.query, &result)
            }
        })
        .await
        .context("Recommendation task panicked")?;

        if let Some(requester) = &request.requester {
            self.history
                .record(HistoryEntry {
                    user_id: requester.user_id.clone(),
                    date: today,
                    mood: request.query.primary_mood,
                    intensity: request.query.intensity,
                    movie_title: pack.safe.title.clone(),
                })
                .await;
        }

        info!(
            "Recommended safe={:?} challenge={:?} deep={:?} (fallback: {}) in {:.2?}",
            pack.safe.title,
            pack.challenge.title,
            pack.deep.title,
            pack.fallback,
            start_time.elapsed()
        );
        Ok(pack)
    }

    /// A user's mood history, oldest first
    pub async fn history(&self, user_id: &str) -> Vec<HistoryEntry> {
        self.history.for_user(user_id).await
    }
}
