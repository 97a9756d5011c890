//! Static lookup tables used by the scorer.
//!
//! - Mood adjacency: for each mood, the moods considered emotionally close.
//!   Stored as directed lists; only ever used for the secondary (+7) bonus.
//! - Numeric scales for intensity, energy and mental depth, used to turn
//!   two ordinal values into a distance.
//!
//! The vocabulary is closed, so everything here is a `match` the compiler
//! checks for exhaustiveness. `Unknown` values map to "no data": an empty
//! adjacency list, or `None` on a scale.

use catalog::{EnergyLevel, Intensity, MentalDepth, PrimaryMood};

/// Moods adjacent to `mood`, in curated order.
pub fn adjacent_moods(mood: PrimaryMood) -> &'static [PrimaryMood] {
    use PrimaryMood::*;

    match mood {
        Sad => &[Lonely, Empty, Nostalgic, Gloomy],
        Lonely => &[Sad, Empty, Romantic],
        Empty => &[Sad, Lonely, Calm, Nihilistic, Gloomy],
        Happy => &[Hopeful, Calm, Inspired, Playful, Excited],
        Hopeful => &[Happy, Calm, Inspired, Dreamy],
        Calm => &[Happy, Hopeful, Empty, Dreamy],
        Anxious => &[Angry, Sad, Tense, Stressed],
        Angry => &[Anxious, Tense],
        Romantic => &[Happy, Lonely, Nostalgic, Dreamy],
        Bored => &[Calm, Empty, Tired],
        Tired => &[Calm, Empty, Bored],
        Nihilistic => &[Empty, Sad, Gloomy],
        Nostalgic => &[Romantic, Sad, Calm, Dreamy],
        Inspired => &[Hopeful, Happy, Calm, Dreamy],
        Dreamy => &[Inspired, Hopeful, Calm, Romantic, Nostalgic],
        Excited => &[Happy, Playful, Inspired],
        Tense => &[Anxious, Angry, Stressed],
        Playful => &[Happy, Excited],
        Gloomy => &[Sad, Empty, Nihilistic],
        Stressed => &[Anxious, Tense],
        Unknown => &[],
    }
}

/// True if `candidate` is listed as adjacent to `mood`
pub fn is_adjacent(mood: PrimaryMood, candidate: PrimaryMood) -> bool {
    adjacent_moods(mood).contains(&candidate)
}

/// low=1, medium=2, high=3
pub fn intensity_scale(intensity: Intensity) -> Option<i32> {
    match intensity {
        Intensity::Low => Some(1),
        Intensity::Medium => Some(2),
        Intensity::High => Some(3),
        Intensity::Unknown => None,
    }
}

/// very_low=1, low=2, medium=3, high=4
pub fn energy_scale(energy: EnergyLevel) -> Option<i32> {
    match energy {
        EnergyLevel::VeryLow => Some(1),
        EnergyLevel::Low => Some(2),
        EnergyLevel::Medium => Some(3),
        EnergyLevel::High => Some(4),
        EnergyLevel::Unknown => None,
    }
}

/// light=1, fun=2, medium=2, deep=3
///
/// `Fun` and `Medium` share a weight on purpose.
pub fn depth_scale(depth: MentalDepth) -> Option<i32> {
    match depth {
        MentalDepth::Light => Some(1),
        MentalDepth::Medium | MentalDepth::Fun => Some(2),
        MentalDepth::Deep => Some(3),
        MentalDepth::Unknown => None,
    }
}

/// Absolute distance between two scale positions; zero if either is unknown.
pub fn scale_distance(a: Option<i32>, b: Option<i32>) -> i32 {
    match (a, b) {
        (Some(a), Some(b)) => (a - b).abs(),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mood_has_neighbours() {
        for mood in PrimaryMood::ALL {
            let adjacent = adjacent_moods(mood);
            assert!(
                (2..=5).contains(&adjacent.len()),
                "{} has {} adjacent moods",
                mood,
                adjacent.len()
            );
            assert!(!adjacent.contains(&mood), "{} is adjacent to itself", mood);
        }
    }

    #[test]
    fn test_unknown_mood_has_no_neighbours() {
        assert!(adjacent_moods(PrimaryMood::Unknown).is_empty());
        assert!(!is_adjacent(PrimaryMood::Unknown, PrimaryMood::Sad));
    }

    #[test]
    fn test_adjacency_is_directed() {
        // Anxious lists Sad; Sad does not list Anxious
        assert!(is_adjacent(PrimaryMood::Anxious, PrimaryMood::Sad));
        assert!(!is_adjacent(PrimaryMood::Sad, PrimaryMood::Anxious));
    }

    #[test]
    fn test_fun_and_medium_share_depth() {
        assert_eq!(depth_scale(MentalDepth::Fun), depth_scale(MentalDepth::Medium));
        assert_eq!(depth_scale(MentalDepth::Fun), Some(2));
    }

    #[test]
    fn test_scale_distance() {
        assert_eq!(
            scale_distance(intensity_scale(Intensity::Low), intensity_scale(Intensity::High)),
            2
        );
        assert_eq!(
            scale_distance(energy_scale(EnergyLevel::High), energy_scale(EnergyLevel::VeryLow)),
            3
        );
        assert_eq!(scale_distance(None, Some(3)), 0);
        assert_eq!(scale_distance(Some(1), None), 0);
    }
}
