//! The mood query: what the user told us in the questionnaire.

use catalog::{CatalogError, EnergyLevel, Intensity, MentalDepth, PrimaryMood};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Content the user asked not to see.
///
/// Matched by variant, never by display text, so the UI can show these in
/// any language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvoidanceFlag {
    /// Exclude movies flagged as violent
    NoViolence,
    /// Exclude movies flagged as extremely sad
    NoExtremeSadness,
    /// Some other avoidance the engine has no rule for; ignored
    #[serde(other)]
    Unrecognized,
}

impl AvoidanceFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            AvoidanceFlag::NoViolence => "no_violence",
            AvoidanceFlag::NoExtremeSadness => "no_extreme_sadness",
            AvoidanceFlag::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for AvoidanceFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for AvoidanceFlag {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "no_violence" => Ok(AvoidanceFlag::NoViolence),
            "no_extreme_sadness" => Ok(AvoidanceFlag::NoExtremeSadness),
            _ => Err(CatalogError::InvalidValue {
                field: "avoidance flag".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// How the user wants the picks delivered (the fifth questionnaire step).
///
/// Carried through to the result for the presentation layer; it has no
/// effect on scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStyle {
    Quick,
    Triple,
    #[default]
    Pack,
    Therapy,
}

impl DeliveryStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStyle::Quick => "quick",
            DeliveryStyle::Triple => "triple",
            DeliveryStyle::Pack => "pack",
            DeliveryStyle::Therapy => "therapy",
        }
    }
}

impl fmt::Display for DeliveryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for DeliveryStyle {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quick" => Ok(DeliveryStyle::Quick),
            "triple" => Ok(DeliveryStyle::Triple),
            "pack" => Ok(DeliveryStyle::Pack),
            "therapy" => Ok(DeliveryStyle::Therapy),
            _ => Err(CatalogError::InvalidValue {
                field: "delivery style".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// A single recommendation request, built fresh per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodQuery {
    pub primary_mood: PrimaryMood,
    pub intensity: Intensity,
    pub energy_level: EnergyLevel,
    pub mental_depth: MentalDepth,
    #[serde(default)]
    pub avoidance_flags: BTreeSet<AvoidanceFlag>,
    #[serde(default)]
    pub delivery_style: DeliveryStyle,
}

impl MoodQuery {
    /// Create a query with no avoidances and the default delivery style
    pub fn new(
        primary_mood: PrimaryMood,
        intensity: Intensity,
        energy_level: EnergyLevel,
        mental_depth: MentalDepth,
    ) -> Self {
        Self {
            primary_mood,
            intensity,
            energy_level,
            mental_depth,
            avoidance_flags: BTreeSet::new(),
            delivery_style: DeliveryStyle::default(),
        }
    }

    /// Add an avoidance flag (builder pattern)
    pub fn avoiding(mut self, flag: AvoidanceFlag) -> Self {
        self.avoidance_flags.insert(flag);
        self
    }

    /// Set the delivery style (builder pattern)
    pub fn with_style(mut self, style: DeliveryStyle) -> Self {
        self.delivery_style = style;
        self
    }

    pub fn avoids(&self, flag: AvoidanceFlag) -> bool {
        self.avoidance_flags.contains(&flag)
    }
}
