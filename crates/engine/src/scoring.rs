//! Movie scoring against a mood query.
//!
//! The score is a plain sum of independent terms:
//!
//! | term        | value                                              |
//! |-------------|----------------------------------------------------|
//! | mood        | +15 exact tag match, else +7 adjacent match, else 0 |
//! | genres      | +5 per movie genre in the user's favourites        |
//! | actors      | +12 per movie actor in the user's preferred list   |
//! | intensity   | -4 per step of distance                            |
//! | energy      | -2 per step of distance                            |
//! | depth       | -3 per step of distance                            |
//! | quality     | +quality / 2                                       |
//!
//! Scores are not clamped and may be negative.

use crate::profile::UserProfile;
use crate::query::MoodQuery;
use crate::tables::{depth_scale, energy_scale, intensity_scale, is_adjacent, scale_distance};
use catalog::{MovieRecord, PrimaryMood};
use rayon::prelude::*;
use serde::Serialize;

pub const EXACT_MOOD_BONUS: f64 = 15.0;
pub const ADJACENT_MOOD_BONUS: f64 = 7.0;
pub const GENRE_MATCH_BONUS: f64 = 5.0;
pub const ACTOR_MATCH_BONUS: f64 = 12.0;
pub const INTENSITY_PENALTY: f64 = 4.0;
pub const ENERGY_PENALTY: f64 = 2.0;
pub const DEPTH_PENALTY: f64 = 3.0;
pub const QUALITY_DIVISOR: f64 = 2.0;

/// Every term of a movie's score, kept apart for explanation.
///
/// Penalties are stored as non-negative magnitudes and subtracted in
/// [`ScoreBreakdown::total`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub mood_bonus: f64,
    pub genre_bonus: f64,
    pub actor_bonus: f64,
    pub intensity_penalty: f64,
    pub energy_penalty: f64,
    pub depth_penalty: f64,
    pub quality_bonus: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.mood_bonus + self.genre_bonus + self.actor_bonus
            - self.intensity_penalty
            - self.energy_penalty
            - self.depth_penalty
            + self.quality_bonus
    }
}

/// A movie paired with its score
#[derive(Debug, Clone, Copy)]
pub struct ScoredMovie<'a> {
    pub movie: &'a MovieRecord,
    pub score: f64,
}

/// Score one movie. Pure and deterministic.
pub fn score(movie: &MovieRecord, query: &MoodQuery, profile: Option<&UserProfile>) -> f64 {
    explain(movie, query, profile).total()
}

/// Compute each scoring term for one movie.
pub fn explain(
    movie: &MovieRecord,
    query: &MoodQuery,
    profile: Option<&UserProfile>,
) -> ScoreBreakdown {
    let (genre_matches, actor_matches) = match profile {
        Some(profile) => (
            count_matches(&movie.genres, &profile.favorite_genres),
            count_matches(&movie.actors, &profile.preferred_actors),
        ),
        None => (0, 0),
    };

    let intensity_distance = scale_distance(
        intensity_scale(movie.intensity),
        intensity_scale(query.intensity),
    );
    let energy_distance = scale_distance(
        energy_scale(movie.energy_level),
        energy_scale(query.energy_level),
    );
    let depth_distance = scale_distance(
        depth_scale(movie.mental_depth),
        depth_scale(query.mental_depth),
    );

    ScoreBreakdown {
        mood_bonus: mood_bonus(&movie.mood_tags, query.primary_mood),
        genre_bonus: genre_matches as f64 * GENRE_MATCH_BONUS,
        actor_bonus: actor_matches as f64 * ACTOR_MATCH_BONUS,
        intensity_penalty: intensity_distance as f64 * INTENSITY_PENALTY,
        energy_penalty: energy_distance as f64 * ENERGY_PENALTY,
        depth_penalty: depth_distance as f64 * DEPTH_PENALTY,
        quality_bonus: movie.quality_score / QUALITY_DIVISOR,
    }
}

/// Score every movie in parallel, preserving input order.
pub fn score_all<'a>(
    movies: &[&'a MovieRecord],
    query: &MoodQuery,
    profile: Option<&UserProfile>,
) -> Vec<ScoredMovie<'a>> {
    movies
        .par_iter()
        .map(|&movie| ScoredMovie {
            movie,
            score: score(movie, query, profile),
        })
        .collect()
}

/// Exact match wins outright; the adjacency bonus only applies without one.
fn mood_bonus(tags: &[PrimaryMood], target: PrimaryMood) -> f64 {
    if target == PrimaryMood::Unknown {
        return 0.0;
    }
    if tags.contains(&target) {
        EXACT_MOOD_BONUS
    } else if tags.iter().any(|&tag| is_adjacent(target, tag)) {
        ADJACENT_MOOD_BONUS
    } else {
        0.0
    }
}

/// How many of `values` appear in `wanted`
fn count_matches(values: &[String], wanted: &[String]) -> usize {
    values.iter().filter(|value| wanted.contains(value)).count()
}
