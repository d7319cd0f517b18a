//! Jurisdiction value object.
//!
//! A jurisdiction is the legal region whose rules apply to the current
//! guidance. The set is closed: the fifty US states.

use once_cell::sync::Lazy;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::ValidationError;

/// All supported jurisdictions, in display order.
pub static US_STATES: [&str; 50] = [
    "Alabama", "Alaska", "Arizona", "Arkansas", "California", "Colorado",
    "Connecticut", "Delaware", "Florida", "Georgia", "Hawaii", "Idaho",
    "Illinois", "Indiana", "Iowa", "Kansas", "Kentucky", "Louisiana",
    "Maine", "Maryland", "Massachusetts", "Michigan", "Minnesota",
    "Mississippi", "Missouri", "Montana", "Nebraska", "Nevada",
    "New Hampshire", "New Jersey", "New Mexico", "New York",
    "North Carolina", "North Dakota", "Ohio", "Oklahoma", "Oregon",
    "Pennsylvania", "Rhode Island", "South Carolina", "South Dakota",
    "Tennessee", "Texas", "Utah", "Vermont", "Virginia", "Washington",
    "West Virginia", "Wisconsin", "Wyoming",
];

/// Lowercased name -> canonical spelling.
static LOOKUP: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    US_STATES
        .iter()
        .map(|name| (name.to_lowercase(), *name))
        .collect()
});

/// A validated, never-empty jurisdiction name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Jurisdiction(&'static str);

impl Jurisdiction {
    /// Parses a jurisdiction name, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank
    /// - `InvalidFormat` if the name is not a known jurisdiction
    pub fn parse(name: &str) -> Result<Self, ValidationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("jurisdiction"));
        }
        LOOKUP
            .get(&trimmed.to_lowercase())
            .map(|canonical| Jurisdiction(*canonical))
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "jurisdiction",
                    format!("unknown jurisdiction '{}'", trimmed),
                )
            })
    }

    /// Enumerates every supported jurisdiction.
    pub fn all() -> impl Iterator<Item = Jurisdiction> {
        US_STATES.iter().map(|name| Jurisdiction(*name))
    }

    /// Returns the canonical name.
    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl Default for Jurisdiction {
    fn default() -> Self {
        Jurisdiction("California")
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Jurisdiction {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Jurisdiction::parse(&value)
    }
}

impl<'de> Deserialize<'de> for Jurisdiction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Jurisdiction::parse(&name).map_err(D::Error::custom)
    }
}

impl From<Jurisdiction> for String {
    fn from(value: Jurisdiction) -> Self {
        value.0.to_string()
    }
}
