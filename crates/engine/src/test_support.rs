//! Builders for test fixtures.

use catalog::{ContentRating, EnergyLevel, Intensity, MentalDepth, MovieRecord, PrimaryMood};

/// A happy, medium-everything, PG movie scoring 7.0, ready to tweak
pub fn movie(id: &str) -> MovieBuilder {
    MovieBuilder(MovieRecord {
        id: id.to_string(),
        external_id: None,
        title: format!("Movie {}", id),
        year: Some(2000),
        quality_score: 7.0,
        mood_tags: vec![PrimaryMood::Happy],
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
    })
}

pub struct MovieBuilder(MovieRecord);

impl MovieBuilder {
    pub fn moods(mut self, moods: &[PrimaryMood]) -> Self {
        self.0.mood_tags = moods.to_vec();
        self
    }

    pub fn intensity(mut self, intensity: Intensity) -> Self {
        self.0.intensity = intensity;
        self
    }

    pub fn energy(mut self, energy: EnergyLevel) -> Self {
        self.0.energy_level = energy;
        self
    }

    pub fn depth(mut self, depth: MentalDepth) -> Self {
        self.0.mental_depth = depth;
        self
    }

    pub fn quality(mut self, quality: f64) -> Self {
        self.0.quality_score = quality;
        self
    }

    pub fn rated(mut self, rating: ContentRating) -> Self {
        self.0.content_rating = rating;
        self
    }

    pub fn violent(mut self) -> Self {
        self.0.is_violent = true;
        self
    }

    pub fn extremely_sad(mut self) -> Self {
        self.0.is_extremely_sad = true;
        self
    }

    pub fn genres(mut self, genres: &[&str]) -> Self {
        self.0.genres = genres.iter().map(|g| g.to_string()).collect();
        self
    }

    pub fn actors(mut self, actors: &[&str]) -> Self {
        self.0.actors = actors.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn build(self) -> MovieRecord {
        self.0
    }
}
