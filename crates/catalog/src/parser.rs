//! Parsers for catalog files and enumerated values.
//!
//! Two very different levels of strictness live here:
//! - Catalog JSON is lenient about enumerated values. Anything unrecognized
//!   becomes `Unknown` (serde's `other` variant) and the engine scores it as
//!   zero on that axis.
//! - `FromStr` is strict. It is used for text typed by a person (CLI flags,
//!   query strings) where a typo should be reported, not silently ignored.

use crate::error::{CatalogError, Result};
use crate::types::*;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Parse a JSON array of movie records.
pub fn parse_movies_json(json: &str) -> Result<Vec<MovieRecord>> {
    let movies: Vec<MovieRecord> = serde_json::from_str(json)?;
    Ok(movies)
}

/// Read and parse a catalog file.
pub fn parse_movies_file(path: &Path) -> Result<Vec<MovieRecord>> {
    let content = fs::read_to_string(path)?;
    parse_movies_json(&content)
}

fn invalid(field: &str, value: &str) -> CatalogError {
    CatalogError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    }
}

/// Normalize user input: trim, lowercase, treat '-' and ' ' like '_'
fn normalize(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '-' || c == ' ' { '_' } else { c })
        .collect()
}

impl FromStr for PrimaryMood {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        let key = normalize(s);
        PrimaryMood::ALL
            .iter()
            .copied()
            .find(|mood| mood.as_str() == key)
            .ok_or_else(|| invalid("mood", s))
    }
}

impl FromStr for Intensity {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "low" => Ok(Intensity::Low),
            "medium" => Ok(Intensity::Medium),
            "high" => Ok(Intensity::High),
            _ => Err(invalid("intensity", s)),
        }
    }
}

impl FromStr for EnergyLevel {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "very_low" => Ok(EnergyLevel::VeryLow),
            "low" => Ok(EnergyLevel::Low),
            "medium" => Ok(EnergyLevel::Medium),
            "high" => Ok(EnergyLevel::High),
            _ => Err(invalid("energy", s)),
        }
    }
}

impl FromStr for MentalDepth {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "light" => Ok(MentalDepth::Light),
            "medium" => Ok(MentalDepth::Medium),
            "fun" => Ok(MentalDepth::Fun),
            "deep" => Ok(MentalDepth::Deep),
            _ => Err(invalid("mental depth", s)),
        }
    }
}

impl FromStr for ContentRating {
    type Err = CatalogError;

    /// Accepts "PG-13", "pg13" and "PG_13" alike
    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).replace('_', "").as_str() {
            "g" => Ok(ContentRating::G),
            "pg" => Ok(ContentRating::Pg),
            "pg13" => Ok(ContentRating::Pg13),
            "r" => Ok(ContentRating::R),
            "nc17" => Ok(ContentRating::Nc17),
            _ => Err(invalid("content rating", s)),
        }
    }
}
