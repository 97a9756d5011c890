//! # Catalog Crate
//!
//! This crate owns the movie catalog: the closed mood vocabulary, the
//! `MovieRecord` type and the immutable, validated `Catalog` collection.
//!
//! ## Main Components
//!
//! - **types**: Domain types (PrimaryMood, Intensity, EnergyLevel, MentalDepth,
//!   ContentRating, MovieRecord, Catalog)
//! - **parser**: Catalog JSON parsing and strict `FromStr` for enumerations
//! - **index**: Validation, indexing and the built-in seed catalog
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{Catalog, PrimaryMood};
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/movies.json"))?;
//!
//! for movie in catalog.movies_with_mood(PrimaryMood::Nostalgic) {
//!     println!("{} ({:?})", movie.title, movie.year);
//! }
//! ```
//!
//! A `Catalog` is read-only after construction, so one instance behind an
//! `Arc` can serve any number of concurrent recommendation requests.

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{
    // Type aliases
    MovieId,
    // Core types
    MovieRecord,
    Catalog,
    // Enums
    PrimaryMood,
    Intensity,
    EnergyLevel,
    MentalDepth,
    ContentRating,
};
