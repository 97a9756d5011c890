//! Catalog building, validation and indexing.
//!
//! - Validate each record (mood tags present, quality in range, unique id)
//! - Build the id index and the per-mood secondary index
//! - Provide the built-in seed catalog

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Seed data compiled into the binary
const SEED_CATALOG_JSON: &str = include_str!("../data/seed_catalog.json");

impl Catalog {
    /// Build a catalog from records, keeping their order.
    ///
    /// Fails if the list is empty or any record is invalid. A catalog that
    /// comes out of here satisfies everything the scoring engine assumes.
    pub fn new(movies: Vec<MovieRecord>) -> Result<Self> {
        if movies.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        let mut id_index = HashMap::with_capacity(movies.len());
        let mut mood_index: HashMap<PrimaryMood, Vec<usize>> = HashMap::new();

        for (pos, movie) in movies.iter().enumerate() {
            validate_movie(movie)?;

            if id_index.insert(movie.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateId {
                    id: movie.id.clone(),
                });
            }

            for &mood in &movie.mood_tags {
                let positions = mood_index.entry(mood).or_default();
                // A movie tagged twice with the same mood is indexed once
                if positions.last() != Some(&pos) {
                    positions.push(pos);
                }
            }
        }

        debug!(
            "Indexed {} movies across {} moods",
            movies.len(),
            mood_index.len()
        );

        Ok(Self {
            movies,
            id_index,
            mood_index,
        })
    }

    /// Parse and build a catalog from a JSON array of movie records
    pub fn from_json_str(json: &str) -> Result<Self> {
        let movies = parser::parse_movies_json(json)?;
        Self::new(movies)
    }

    /// Load a catalog from a JSON file on disk
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading movie catalog from {:?}", path);
        let movies = parser::parse_movies_file(path)?;
        let catalog = Self::new(movies)?;
        info!("Loaded {} movies", catalog.len());
        Ok(catalog)
    }

    /// The catalog shipped with the crate
    pub fn seed() -> Result<Self> {
        Self::from_json_str(SEED_CATALOG_JSON)
    }
}

/// Check the per-record invariants
fn validate_movie(movie: &MovieRecord) -> Result<()> {
    if movie.mood_tags.is_empty() {
        return Err(CatalogError::MissingMoodTags {
            id: movie.id.clone(),
        });
    }
    // Written this way round so NaN fails too
    if !(0.0..=10.0).contains(&movie.quality_score) {
        return Err(CatalogError::QualityOutOfRange {
            id: movie.id.clone(),
            score: movie.quality_score,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: &str, moods: Vec<PrimaryMood>) -> MovieRecord {
        MovieRecord {
            id: id.to_string(),
            external_id: None,
            title: format!("Movie {}", id),
            year: Some(2000),
            quality_score: 7.0,
            mood_tags: moods,
            intensity: Intensity::Medium,
            energy_level: EnergyLevel::Medium,
            mental_depth: MentalDepth::Medium,
            is_violent: false,
            is_extremely_sad: false,
            content_rating: ContentRating::Pg,
            genres: vec![],
            actors: vec![],
            description: None,
            is_series: false,
        }
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let result = Catalog::new(vec![]);
        assert!(matches!(result, Err(CatalogError::EmptyCatalog)));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::new(vec![
            movie("m1", vec![PrimaryMood::Sad]),
            movie("m1", vec![PrimaryMood::Happy]),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateId { id }) if id == "m1"));
    }

    #[test]
    fn test_missing_mood_tags_rejected() {
        let result = Catalog::new(vec![movie("m1", vec![])]);
        assert!(matches!(result, Err(CatalogError::MissingMoodTags { .. })));
    }

    #[test]
    fn test_quality_out_of_range_rejected() {
        let mut bad = movie("m1", vec![PrimaryMood::Calm]);
        bad.quality_score = 11.0;
        assert!(matches!(
            Catalog::new(vec![bad.clone()]),
            Err(CatalogError::QualityOutOfRange { .. })
        ));

        bad.quality_score = f64::NAN;
        assert!(Catalog::new(vec![bad]).is_err());
    }

    #[test]
    fn test_mood_index_keeps_catalog_order() {
        let catalog = Catalog::new(vec![
            movie("m1", vec![PrimaryMood::Sad, PrimaryMood::Lonely]),
            movie("m2", vec![PrimaryMood::Happy]),
            movie("m3", vec![PrimaryMood::Lonely, PrimaryMood::Lonely]),
        ])
        .unwrap();

        let lonely: Vec<&str> = catalog
            .movies_with_mood(PrimaryMood::Lonely)
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(lonely, vec!["m1", "m3"]);
        assert!(catalog.movies_with_mood(PrimaryMood::Angry).is_empty());
    }

    #[test]
    fn test_lookups() {
        let catalog = Catalog::new(vec![
            movie("m1", vec![PrimaryMood::Sad]),
            movie("m2", vec![PrimaryMood::Happy]),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.first().id, "m1");
        assert_eq!(catalog.get("m2").unwrap().title, "Movie m2");
        assert!(catalog.get("m9").is_none());
        assert_eq!(catalog.search_title("MOVIE M2").len(), 1);
    }

    #[test]
    fn test_seed_catalog_loads() {
        let catalog = Catalog::seed().unwrap();
        assert!(catalog.len() >= 10);
        // Seed data should only use recognized values
        for movie in catalog.movies() {
            assert!(!movie.mood_tags.contains(&PrimaryMood::Unknown), "{}", movie.id);
            assert_ne!(movie.intensity, Intensity::Unknown, "{}", movie.id);
            assert_ne!(movie.energy_level, EnergyLevel::Unknown, "{}", movie.id);
            assert_ne!(movie.mental_depth, MentalDepth::Unknown, "{}", movie.id);
            assert_ne!(movie.content_rating, ContentRating::Unknown, "{}", movie.id);
        }
    }
}
