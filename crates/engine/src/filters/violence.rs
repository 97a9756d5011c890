//! Filter to honour a "no violence" request.

use crate::query::AvoidanceFlag;
use crate::traits::{EligibilityContext, Filter};
use catalog::MovieRecord;

/// Removes violent movies when the query carries `NoViolence`.
pub struct ViolenceFilter;

impl Filter for ViolenceFilter {
    fn name(&self) -> &str {
        "ViolenceFilter"
    }

    fn apply<'a>(
        &self,
        movies: Vec<&'a MovieRecord>,
        context: &EligibilityContext,
    ) -> Vec<&'a MovieRecord> {
        if !context.avoids(AvoidanceFlag::NoViolence) {
            return movies;
        }
        movies.into_iter().filter(|movie| !movie.is_violent).collect()
    }
}
