//! Error types for the catalog crate.
//!
//! Loading is the only fallible part of the catalog: once a `Catalog` has
//! been built it is valid, and lookups return `Option` rather than errors.

use thiserror::Error;

/// Errors that can occur while loading, parsing or validating a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error occurred while reading a catalog file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Catalog JSON was malformed or had the wrong shape
    #[error("Malformed catalog JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A textual value didn't name any member of an enumeration
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// The catalog contained no movies
    #[error("Catalog must contain at least one movie")]
    EmptyCatalog,

    /// Two movies share an id
    #[error("Duplicate movie id: {id}")]
    DuplicateId { id: String },

    /// A movie had no mood tags, so it could never match a query
    #[error("Movie {id} has no mood tags")]
    MissingMoodTags { id: String },

    /// Quality score outside the 0-10 scale (or NaN)
    #[error("Movie {id} has quality score {score}, expected a value in [0, 10]")]
    QualityOutOfRange { id: String, score: f64 },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
