//! Location and jurisdiction resolution configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::foundation::{Coordinates, Jurisdiction};
use crate::ports::PositionOptions;

#[derive(Debug, Clone, Deserialize)]
pub struct LocationConfig {
    /// Selection used before any jurisdiction has been resolved
    #[serde(default = "default_jurisdiction")]
    pub default_jurisdiction: String,

    /// Upper bound on a position fix or geocoding call
    #[serde(default = "default_resolve_timeout")]
    pub resolve_timeout_secs: u64,

    /// How long a cached position fix stays usable
    #[serde(default = "default_cache_max_age")]
    pub cache_max_age_secs: u64,

    #[serde(default = "default_high_accuracy")]
    pub high_accuracy: bool,

    /// Fixed device position; both or neither
    #[serde(default)]
    pub device_latitude: Option<f64>,

    #[serde(default)]
    pub device_longitude: Option<f64>,

    /// Simulated geocoder latency
    #[serde(default = "default_geocoder_latency")]
    pub geocoder_latency_ms: u64,
}

impl LocationConfig {
    /// The default jurisdiction, parsed.
    pub fn default_jurisdiction(&self) -> Result<Jurisdiction, ValidationError> {
        Jurisdiction::parse(&self.default_jurisdiction)
            .map_err(|_| ValidationError::UnknownJurisdiction(self.default_jurisdiction.clone()))
    }

    /// The configured device position, if both halves are present.
    pub fn device_position(&self) -> Option<Coordinates> {
        match (self.device_latitude, self.device_longitude) {
            (Some(lat), Some(lng)) => Some(Coordinates::new(lat, lng)),
            _ => None,
        }
    }

    pub fn position_options(&self) -> PositionOptions {
        PositionOptions {
            high_accuracy: self.high_accuracy,
            timeout: Duration::from_secs(self.resolve_timeout_secs),
            max_age: Duration::from_secs(self.cache_max_age_secs),
        }
    }

    pub fn geocoder_latency(&self) -> Duration {
        Duration::from_millis(self.geocoder_latency_ms)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.default_jurisdiction()?;

        if self.resolve_timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout("location.resolve_timeout_secs"));
        }

        match (self.device_latitude, self.device_longitude) {
            (Some(_), None) | (None, Some(_)) => {
                return Err(ValidationError::IncompleteDevicePosition);
            }
            _ => {}
        }
        if self.device_position().is_some_and(|p| !p.is_in_range()) {
            return Err(ValidationError::DevicePositionOutOfRange);
        }

        Ok(())
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            default_jurisdiction: default_jurisdiction(),
            resolve_timeout_secs: default_resolve_timeout(),
            cache_max_age_secs: default_cache_max_age(),
            high_accuracy: default_high_accuracy(),
            device_latitude: None,
            device_longitude: None,
            geocoder_latency_ms: default_geocoder_latency(),
        }
    }
}

fn default_jurisdiction() -> String {
    "California".to_string()
}

fn default_resolve_timeout() -> u64 {
    10
}

fn default_cache_max_age() -> u64 {
    300
}

fn default_high_accuracy() -> bool {
    true
}

fn default_geocoder_latency() -> u64 {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_position_options() {
        let config = LocationConfig::default();
        assert_eq!(config.position_options(), PositionOptions::default());
        assert_eq!(config.default_jurisdiction().unwrap().name(), "California");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_jurisdiction_fails_validation() {
        let config = LocationConfig {
            default_jurisdiction: "Atlantis".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::UnknownJurisdiction("Atlantis".to_string()))
        );
    }

    #[test]
    fn device_position_needs_both_halves() {
        let config = LocationConfig {
            device_latitude: Some(30.0),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::IncompleteDevicePosition)
        );
        assert!(config.device_position().is_none());

        let config = LocationConfig {
            device_latitude: Some(30.27),
            device_longitude: Some(-97.74),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(
            config.device_position(),
            Some(Coordinates::new(30.27, -97.74))
        );
    }

    #[test]
    fn device_position_must_be_in_range() {
        let config = LocationConfig {
            device_latitude: Some(95.0),
            device_longitude: Some(0.0),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::DevicePositionOutOfRange)
        );
    }
}
