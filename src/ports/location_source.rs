//! Location source port for device geolocation.
//!
//! Implementations obtain the device's current coordinates. The options
//! mirror what a platform geolocation API accepts.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use crate::domain::foundation::Coordinates;

/// Port for obtaining the device's current position.
#[async_trait]
pub trait LocationSource: Send + Sync {
    /// Returns the current coordinates or why none are available.
    async fn current_position(&self, options: &PositionOptions)
        -> Result<Coordinates, LocationError>;
}

/// Options for a position request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    /// Request the most accurate fix the device can provide.
    pub high_accuracy: bool,
    /// Upper bound on how long the request may take.
    pub timeout: Duration,
    /// Oldest cached fix that may be returned instead of a fresh one.
    pub max_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_secs(10),
            max_age: Duration::from_secs(5 * 60),
        }
    }
}

/// Geolocation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("position unavailable: {0}")]
    Unavailable(String),

    #[error("position request timed out")]
    Timeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_match_platform_request() {
        let options = PositionOptions::default();
        assert!(options.high_accuracy);
        assert_eq!(options.timeout, Duration::from_secs(10));
        assert_eq!(options.max_age, Duration::from_secs(300));
    }
}
