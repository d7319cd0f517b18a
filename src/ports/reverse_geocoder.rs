//! Reverse geocoding port: coordinates to jurisdiction.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::{Coordinates, Jurisdiction};

/// Port for mapping coordinates to the jurisdiction that contains them.
///
/// Coordinates are passed through as given; the geocoder is authoritative
/// for out-of-range input.
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    async fn reverse_geocode(&self, coords: Coordinates) -> Result<Jurisdiction, GeocodingError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeocodingError {
    /// The lookup service could not be reached.
    #[error("geocoder unreachable: {0}")]
    Unreachable(String),

    /// The service answered but named no known jurisdiction.
    #[error("no jurisdiction found for coordinates")]
    NoMatch,
}
