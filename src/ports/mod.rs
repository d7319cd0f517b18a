//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Text generation for scripts and guides
//! - `LocationSource` - Device geolocation
//! - `ReverseGeocoder` - Coordinates to jurisdiction lookup
//! - `AlertDispatcher` - Emergency alert delivery
//! - `BillingGateway` - One-off purchase charging

mod ai_provider;
mod alert_dispatcher;
mod billing_gateway;
mod location_source;
mod reverse_geocoder;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, GenerationPurpose,
    Message, MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use alert_dispatcher::{AlertDispatcher, DispatchError};
pub use billing_gateway::{BillingError, BillingGateway, PurchaseReceipt};
pub use location_source::{LocationError, LocationSource, PositionOptions};
pub use reverse_geocoder::{GeocodingError, ReverseGeocoder};
