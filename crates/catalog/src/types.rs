//! Core domain types for the movie catalog.
//!
//! This module defines the closed vocabulary shared by catalog records and
//! mood queries (moods, intensity, energy, mental depth, content rating),
//! the `MovieRecord` itself and the immutable `Catalog` that owns them.
//!
//! Every enumeration carries an `Unknown` variant. Catalog files written by
//! other tools may contain values this build has never seen; those values
//! deserialize to `Unknown` instead of failing, and the scoring engine gives
//! them zero weight.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a movie (e.g. "m1")
pub type MovieId = String;

// =============================================================================
// Mood vocabulary
// =============================================================================

/// The twenty primary moods a user can report, and a movie can evoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryMood {
    Sad,
    Calm,
    Lonely,
    Anxious,
    Happy,
    Angry,
    Empty,
    Hopeful,
    Romantic,
    Bored,
    Tired,
    Nihilistic,
    Nostalgic,
    Inspired,
    Dreamy,
    Excited,
    Tense,
    Playful,
    Gloomy,
    Stressed,
    /// A mood label this build does not recognize
    #[serde(other)]
    Unknown,
}

impl PrimaryMood {
    /// All recognized moods, in questionnaire order.
    pub const ALL: [PrimaryMood; 20] = [
        PrimaryMood::Sad,
        PrimaryMood::Calm,
        PrimaryMood::Lonely,
        PrimaryMood::Anxious,
        PrimaryMood::Happy,
        PrimaryMood::Angry,
        PrimaryMood::Empty,
        PrimaryMood::Hopeful,
        PrimaryMood::Romantic,
        PrimaryMood::Bored,
        PrimaryMood::Tired,
        PrimaryMood::Nihilistic,
        PrimaryMood::Nostalgic,
        PrimaryMood::Inspired,
        PrimaryMood::Dreamy,
        PrimaryMood::Excited,
        PrimaryMood::Tense,
        PrimaryMood::Playful,
        PrimaryMood::Gloomy,
        PrimaryMood::Stressed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrimaryMood::Sad => "sad",
            PrimaryMood::Calm => "calm",
            PrimaryMood::Lonely => "lonely",
            PrimaryMood::Anxious => "anxious",
            PrimaryMood::Happy => "happy",
            PrimaryMood::Angry => "angry",
            PrimaryMood::Empty => "empty",
            PrimaryMood::Hopeful => "hopeful",
            PrimaryMood::Romantic => "romantic",
            PrimaryMood::Bored => "bored",
            PrimaryMood::Tired => "tired",
            PrimaryMood::Nihilistic => "nihilistic",
            PrimaryMood::Nostalgic => "nostalgic",
            PrimaryMood::Inspired => "inspired",
            PrimaryMood::Dreamy => "dreamy",
            PrimaryMood::Excited => "excited",
            PrimaryMood::Tense => "tense",
            PrimaryMood::Playful => "playful",
            PrimaryMood::Gloomy => "gloomy",
            PrimaryMood::Stressed => "stressed",
            PrimaryMood::Unknown => "unknown",
        }
    }
}

/// How strongly the feeling is felt (or how intense the movie is)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Low,
    Medium,
    High,
    #[serde(other)]
    Unknown,
}

impl Intensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Low => "low",
            Intensity::Medium => "medium",
            Intensity::High => "high",
            Intensity::Unknown => "unknown",
        }
    }
}

/// Physical energy level, four steps from exhausted to wired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyLevel {
    VeryLow,
    Low,
    Medium,
    High,
    #[serde(other)]
    Unknown,
}

impl EnergyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnergyLevel::VeryLow => "very_low",
            EnergyLevel::Low => "low",
            EnergyLevel::Medium => "medium",
            EnergyLevel::High => "high",
            EnergyLevel::Unknown => "unknown",
        }
    }
}

/// How much thinking the viewer is up for.
///
/// `Fun` and `Medium` are distinct answers in the questionnaire but weigh
/// the same when distances are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MentalDepth {
    Light,
    Medium,
    Fun,
    Deep,
    #[serde(other)]
    Unknown,
}

impl MentalDepth {
    pub fn as_str(&self) -> &'static str {
        match self {
            MentalDepth::Light => "light",
            MentalDepth::Medium => "medium",
            MentalDepth::Fun => "fun",
            MentalDepth::Deep => "deep",
            MentalDepth::Unknown => "unknown",
        }
    }
}

/// MPA-style content rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentRating {
    #[serde(rename = "G")]
    G,
    #[serde(rename = "PG")]
    Pg,
    #[serde(rename = "PG-13")]
    Pg13,
    #[serde(rename = "R")]
    R,
    #[serde(rename = "NC-17")]
    Nc17,
    /// Unrated, or a rating system we don't know
    #[serde(other)]
    Unknown,
}

impl ContentRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentRating::G => "G",
            ContentRating::Pg => "PG",
            ContentRating::Pg13 => "PG-13",
            ContentRating::R => "R",
            ContentRating::Nc17 => "NC-17",
            ContentRating::Unknown => "unknown",
        }
    }

    /// True for ratings suitable for any audience (G and PG)
    pub fn is_family_friendly(&self) -> bool {
        matches!(self, ContentRating::G | ContentRating::Pg)
    }
}

macro_rules! impl_display_via_as_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.pad(self.as_str())
                }
            }
        )*
    };
}

impl_display_via_as_str!(PrimaryMood, Intensity, EnergyLevel, MentalDepth, ContentRating);

// =============================================================================
// Movie Record
// =============================================================================

/// A single catalog entry.
///
/// Field names serialize in camelCase (`moodTags`, `qualityScore`, ...) so
/// catalog files can be shared with the web client unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    pub id: MovieId,
    /// Cross-reference into an external movie database (an IMDb id, usually)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub year: Option<u16>,
    /// Rating on a 0-10 scale
    pub quality_score: f64,
    /// Moods this movie is known to evoke (never empty in a valid catalog)
    pub mood_tags: Vec<PrimaryMood>,
    pub intensity: Intensity,
    pub energy_level: EnergyLevel,
    pub mental_depth: MentalDepth,
    #[serde(default)]
    pub is_violent: bool,
    #[serde(default)]
    pub is_extremely_sad: bool,
    pub content_rating: ContentRating,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub actors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub is_series: bool,
}

impl MovieRecord {
    pub fn has_mood(&self, mood: PrimaryMood) -> bool {
        self.mood_tags.contains(&mood)
    }
}

// =============================================================================
// Catalog - The Immutable In-Memory Collection
// =============================================================================

/// The movie catalog, loaded once at startup and never mutated afterwards.
///
/// Movies keep the order they were loaded in. That order matters: the
/// engine breaks score ties by catalog position, and the fallback pick is
/// the first family-friendly movie in catalog order.
///
/// A `Catalog` is never empty. Construction goes through [`Catalog::new`]
/// (see `index.rs`), which rejects an empty movie list.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub(crate) movies: Vec<MovieRecord>,

    /// Position of each movie in `movies`, by id
    pub(crate) id_index: HashMap<MovieId, usize>,
    /// Positions of the movies tagged with each mood, in catalog order
    pub(crate) mood_index: HashMap<PrimaryMood, Vec<usize>>,
}

impl Catalog {
    /// All movies, in catalog order
    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Always false for a constructed catalog; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// The first movie in catalog order
    pub fn first(&self) -> &MovieRecord {
        // Non-empty by construction
        &self.movies[0]
    }

    /// Get a movie by ID
    pub fn get(&self, id: &str) -> Option<&MovieRecord> {
        self.id_index.get(id).map(|&pos| &self.movies[pos])
    }

    /// Movies tagged with `mood`, in catalog order
    pub fn movies_with_mood(&self, mood: PrimaryMood) -> Vec<&MovieRecord> {
        self.mood_index
            .get(&mood)
            .map(|positions| positions.iter().map(|&pos| &self.movies[pos]).collect())
            .unwrap_or_default()
    }

    /// Case-insensitive substring search over titles, in catalog order
    pub fn search_title(&self, needle: &str) -> Vec<&MovieRecord> {
        let needle = needle.to_lowercase();
        self.movies
            .iter()
            .filter(|movie| movie.title.to_lowercase().contains(&needle))
            .collect()
    }
}
