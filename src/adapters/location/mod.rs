//! Geolocation adapters.

mod cached_location;
mod fixed_location;

pub use cached_location::CachedLocationSource;
pub use fixed_location::FixedLocationSource;
