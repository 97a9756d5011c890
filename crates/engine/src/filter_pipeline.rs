//! The FilterPipeline chains eligibility filters.

use crate::filters::{AgeRatingFilter, ExtremeSadnessFilter, ViolenceFilter};
use crate::traits::{EligibilityContext, Filter};
use catalog::{Catalog, MovieRecord};

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(AgeRatingFilter)
///     .add_filter(ViolenceFilter);
///
/// let eligible = pipeline.apply(catalog.movies().iter().collect(), &context);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The standard eligibility rules, in order: age gates, violence,
    /// extreme sadness.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(AgeRatingFilter)
            .add_filter(ViolenceFilter)
            .add_filter(ExtremeSadnessFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of filters in the pipeline
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence.
    pub fn apply<'a>(
        &self,
        movies: Vec<&'a MovieRecord>,
        context: &EligibilityContext,
    ) -> Vec<&'a MovieRecord> {
        let mut current = movies;
        for filter in &self.filters {
            let before = current.len();
            current = filter.apply(current, context);
            tracing::debug!(
                "Filter applied: {} ({} -> {})",
                filter.name(),
                before,
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Movies from `catalog` that pass every standard eligibility rule, in
/// catalog order. Never mutates the catalog.
pub fn filter_eligible<'a>(
    catalog: &'a Catalog,
    context: &EligibilityContext,
) -> Vec<&'a MovieRecord> {
    FilterPipeline::standard().apply(catalog.movies().iter().collect(), context)
}
