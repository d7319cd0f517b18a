//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Text generation (OpenAI-compatible HTTP, mock)
//! - `location` - Device position (fixed, cached)
//! - `geocoding` - Coordinates to jurisdiction (bounding boxes)
//! - `dispatch` - Emergency alert delivery (simulated)
//! - `billing` - Purchase charging (simulated)

pub mod ai;
pub mod billing;
pub mod dispatch;
pub mod geocoding;
pub mod location;

pub use ai::{MockAIProvider, OpenAIConfig, OpenAIProvider};
pub use billing::SimulatedBilling;
pub use dispatch::SimulatedAlertDispatcher;
pub use geocoding::BoundingBoxGeocoder;
pub use location::{CachedLocationSource, FixedLocationSource};
