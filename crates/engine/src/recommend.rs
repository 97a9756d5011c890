//! Ranking and slot selection.
//!
//! ## Algorithm
//! 1. Work out the user's age (profile birthday, or 18)
//! 2. Filter the catalog for eligibility
//! 3. If nothing is eligible, return the fallback movie in all three slots
//! 4. Score and stable-sort the eligible movies, best first
//! 5. Pick the three slots:
//!    - `safe`: rank 0
//!    - `challenge`: best movie not tagged with the queried mood, else rank 1
//!    - `deep`: deepest movie among the top five, earliest rank on ties

use crate::filter_pipeline::filter_eligible;
use crate::profile::{effective_age, today, UserProfile};
use crate::query::MoodQuery;
use crate::scoring::{score_all, ScoredMovie};
use crate::tables::depth_scale;
use crate::traits::EligibilityContext;
use catalog::{Catalog, MovieRecord, PrimaryMood};
use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;
use tracing::{debug, instrument, warn};

/// How many of the top-ranked movies compete for the deep slot
pub const DEEP_WINDOW: usize = 5;

/// The three picks returned for a query.
///
/// Slots may point at the same movie: always on the fallback path, and
/// whenever the eligible set is too small to fill them separately.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecommendationResult<'a> {
    /// Highest total score
    pub safe: &'a MovieRecord,
    /// Highest-scoring movie outside the literal mood match
    pub challenge: &'a MovieRecord,
    /// Greatest mental depth among the top five
    pub deep: &'a MovieRecord,
    /// True when no movie passed the eligibility filter
    pub fallback: bool,
}

impl<'a> RecommendationResult<'a> {
    /// The degenerate result used when nothing is eligible: the first G or
    /// PG movie in the unfiltered catalog (or its first movie) in every slot.
    pub fn fallback(catalog: &'a Catalog) -> Self {
        let pick = catalog
            .movies()
            .iter()
            .find(|movie| movie.content_rating.is_family_friendly())
            .unwrap_or_else(|| catalog.first());

        Self {
            safe: pick,
            challenge: pick,
            deep: pick,
            fallback: true,
        }
    }

    /// The picks in slot order: safe, challenge, deep
    pub fn picks(&self) -> [&'a MovieRecord; 3] {
        [self.safe, self.challenge, self.deep]
    }
}

/// Recommend for today's date.
pub fn recommend<'a>(
    catalog: &'a Catalog,
    query: &MoodQuery,
    profile: Option<&UserProfile>,
) -> RecommendationResult<'a> {
    recommend_on(catalog, query, profile, today())
}

/// Recommend as of `today` (only the age computation depends on the date).
#[instrument(skip_all, fields(mood = %query.primary_mood, catalog_size = catalog.len()))]
pub fn recommend_on<'a>(
    catalog: &'a Catalog,
    query: &MoodQuery,
    profile: Option<&UserProfile>,
    today: NaiveDate,
) -> RecommendationResult<'a> {
    let user_age = effective_age(profile, today);
    let context = EligibilityContext::for_query(query, user_age);

    let eligible = filter_eligible(catalog, &context);
    debug!("{} of {} movies eligible (age {})", eligible.len(), catalog.len(), user_age);

    if eligible.is_empty() {
        let result = RecommendationResult::fallback(catalog);
        warn!(
            "No eligible movies for age {} with {} avoidance flags; falling back to {}",
            user_age,
            query.avoidance_flags.len(),
            result.safe.id
        );
        return result;
    }

    let ranked = rank(&eligible, query, profile);
    select_slots(&ranked, query.primary_mood)
}

/// Score `movies` and sort best first.
///
/// The sort is stable, so equal scores keep their input (catalog) order.
pub fn rank<'a>(
    movies: &[&'a MovieRecord],
    query: &MoodQuery,
    profile: Option<&UserProfile>,
) -> Vec<ScoredMovie<'a>> {
    let mut scored = score_all(movies, query, profile);
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored
}

/// Pick the three slots from a non-empty ranking
fn select_slots<'a>(ranked: &[ScoredMovie<'a>], mood: PrimaryMood) -> RecommendationResult<'a> {
    let safe = ranked[0].movie;

    let challenge = ranked
        .iter()
        .find(|scored| !scored.movie.has_mood(mood))
        .map(|scored| scored.movie)
        .unwrap_or_else(|| ranked[1.min(ranked.len() - 1)].movie);

    // reduce keeps the earlier entry unless a later one is strictly deeper
    let deep = ranked
        .iter()
        .take(DEEP_WINDOW)
        .map(|scored| scored.movie)
        .reduce(|best, candidate| {
            if depth_rank(candidate) > depth_rank(best) {
                candidate
            } else {
                best
            }
        })
        .unwrap_or(safe);

    debug!(
        "Selected safe={} challenge={} deep={}",
        safe.id, challenge.id, deep.id
    );

    RecommendationResult {
        safe,
        challenge,
        deep,
        fallback: false,
    }
}

/// Unknown depth ranks below everything
fn depth_rank(movie: &MovieRecord) -> i32 {
    depth_scale(movie.mental_depth).unwrap_or(0)
}
