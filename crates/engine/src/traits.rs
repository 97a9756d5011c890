//! Core traits for the eligibility filter pipeline.
//!
//! This module defines the Filter trait that allows composable
//! filters to be applied to the catalog before scoring.

use crate::query::{AvoidanceFlag, MoodQuery};
use catalog::MovieRecord;
use std::collections::BTreeSet;

/// What the filters need to know about a request.
#[derive(Debug, Clone, PartialEq)]
pub struct EligibilityContext {
    /// Age used for content-rating gates
    pub user_age: i32,
    pub avoidance_flags: BTreeSet<AvoidanceFlag>,
}

impl EligibilityContext {
    pub fn new(user_age: i32) -> Self {
        Self {
            user_age,
            avoidance_flags: BTreeSet::new(),
        }
    }

    pub fn for_query(query: &MoodQuery, user_age: i32) -> Self {
        Self {
            user_age,
            avoidance_flags: query.avoidance_flags.clone(),
        }
    }

    pub fn avoids(&self, flag: AvoidanceFlag) -> bool {
        self.avoidance_flags.contains(&flag)
    }
}

/// Core trait for filtering movies.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared across request threads
/// - Filters take ownership of the Vec of references and return a filtered
///   Vec; the catalog itself is only ever borrowed
/// - Filters must keep the relative order of the movies they retain, since
///   ranking ties are broken by catalog order
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of movies.
    fn apply<'a>(
        &self,
        movies: Vec<&'a MovieRecord>,
        context: &EligibilityContext,
    ) -> Vec<&'a MovieRecord>;
}
