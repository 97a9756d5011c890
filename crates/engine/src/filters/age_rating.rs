//! Filter to keep age-inappropriate content away from younger users.

use crate::traits::{EligibilityContext, Filter};
use catalog::{ContentRating, MovieRecord};

/// Below this age, R (and NC-17) content is excluded
pub const RESTRICTED_MIN_AGE: i32 = 17;

/// Below this age, PG-13 content is excluded as well
pub const PG13_MIN_AGE: i32 = 13;

/// Removes movies whose content rating is too mature for the user.
///
/// ## Algorithm
/// Two gates, checked independently:
/// 1. Under 17: drop R and NC-17
/// 2. Under 13: drop PG-13 and R (and NC-17)
///
/// A user under 13 fails both. Unknown ratings pass.
pub struct AgeRatingFilter;

impl AgeRatingFilter {
    /// True if a user of `age` may see content rated `rating`
    pub fn allows(age: i32, rating: ContentRating) -> bool {
        let restricted = matches!(rating, ContentRating::R | ContentRating::Nc17);
        if age < RESTRICTED_MIN_AGE && restricted {
            return false;
        }
        if age < PG13_MIN_AGE && (restricted || rating == ContentRating::Pg13) {
            return false;
        }
        true
    }
}

impl Filter for AgeRatingFilter {
    fn name(&self) -> &str {
        "AgeRatingFilter"
    }

    fn apply<'a>(
        &self,
        movies: Vec<&'a MovieRecord>,
        context: &EligibilityContext,
    ) -> Vec<&'a MovieRecord> {
        movies
            .into_iter()
            .filter(|movie| Self::allows(context.user_age, movie.content_rating))
            .collect()
    }
}
