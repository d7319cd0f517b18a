//! JurisdictionResolver - device position and coordinates to jurisdiction.
//!
//! Every external call is bounded by the configured timeout. Failures are
//! reported as `LocationUnavailable`; deciding what to keep on failure is
//! the caller's job.

use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;

use crate::domain::foundation::{Coordinates, ErrorCode, Jurisdiction};
use crate::ports::{
    GeocodingError, LocationError, LocationSource, PositionOptions, ReverseGeocoder,
};

/// No jurisdiction could be determined.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationUnavailable {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("device position unavailable: {0}")]
    PositionUnavailable(String),

    #[error("reverse geocoding failed: {0}")]
    GeocodingFailed(String),

    #[error("location lookup timed out after {0:?}")]
    TimedOut(Duration),
}

impl LocationUnavailable {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::LocationUnavailable
    }
}

impl From<GeocodingError> for LocationUnavailable {
    fn from(err: GeocodingError) -> Self {
        LocationUnavailable::GeocodingFailed(err.to_string())
    }
}

pub struct JurisdictionResolver {
    location: Arc<dyn LocationSource>,
    geocoder: Arc<dyn ReverseGeocoder>,
    options: PositionOptions,
}

impl JurisdictionResolver {
    pub fn new(
        location: Arc<dyn LocationSource>,
        geocoder: Arc<dyn ReverseGeocoder>,
        options: PositionOptions,
    ) -> Self {
        Self {
            location,
            geocoder,
            options,
        }
    }

    pub fn options(&self) -> &PositionOptions {
        &self.options
    }

    /// Maps coordinates to a jurisdiction.
    ///
    /// Coordinates are not range-checked here; the geocoder decides.
    pub async fn resolve(&self, coords: Coordinates) -> Result<Jurisdiction, LocationUnavailable> {
        let limit = self.options.timeout;
        timeout(limit, self.geocoder.reverse_geocode(coords))
            .await
            .map_err(|_| LocationUnavailable::TimedOut(limit))?
            .map_err(LocationUnavailable::from)
    }

    /// Obtains the device's current position.
    pub async fn locate(&self) -> Result<Coordinates, LocationUnavailable> {
        let limit = self.options.timeout;
        timeout(limit, self.location.current_position(&self.options))
            .await
            .map_err(|_| LocationUnavailable::TimedOut(limit))?
            .map_err(|err| match err {
                LocationError::PermissionDenied => LocationUnavailable::PermissionDenied,
                LocationError::Unavailable(reason) => {
                    LocationUnavailable::PositionUnavailable(reason)
                }
                LocationError::Timeout => LocationUnavailable::TimedOut(limit),
            })
    }
}
