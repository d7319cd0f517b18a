//! Reverse geocoding adapters.

mod bounding_box_geocoder;

pub use bounding_box_geocoder::BoundingBoxGeocoder;
