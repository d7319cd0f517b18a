//! Application layer - orchestration of domain operations over ports.
//!
//! The coordinator owns the user's selection and the alert session; the
//! resolver and guidance provider wrap the external collaborators.

mod alert_session;
mod coordinator;
mod guidance_provider;
mod jurisdiction_resolver;
mod shared_catalog;
mod timer;

pub use alert_session::{AlertContext, AlertSession, AlertSnapshot};
pub use coordinator::{
    AppCoordinator, CoordinatorSettings, CoordinatorSnapshot, PurchaseError, PurchaseOutcome,
    ResolutionOutcome,
};
pub use guidance_provider::{GenerationSettings, GuidanceProvider};
pub use jurisdiction_resolver::{JurisdictionResolver, LocationUnavailable};
pub use shared_catalog::SharedCatalog;
