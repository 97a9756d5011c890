//! Filter to honour a "nothing too sad" request.

use crate::query::AvoidanceFlag;
use crate::traits::{EligibilityContext, Filter};
use catalog::MovieRecord;

/// Removes extremely sad movies when the query carries `NoExtremeSadness`.
pub struct ExtremeSadnessFilter;

impl Filter for ExtremeSadnessFilter {
    fn name(&self) -> &str {
        "ExtremeSadnessFilter"
    }

    fn apply<'a>(
        &self,
        movies: Vec<&'a MovieRecord>,
        context: &EligibilityContext,
    ) -> Vec<&'a MovieRecord> {
        if !context.avoids(AvoidanceFlag::NoExtremeSadness) {
            return movies;
        }
        movies
            .into_iter()
            .filter(|movie| !movie.is_extremely_sad)
            .collect()
    }
}
