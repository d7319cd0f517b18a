//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the guidance domain.

mod coordinates;
mod errors;
mod ids;
mod jurisdiction;
mod language;
mod state_machine;
mod timestamp;

pub use coordinates::Coordinates;
pub use errors::{ErrorCode, ValidationError};
pub use ids::{AlertId, GuideId, RecordingId};
pub use jurisdiction::{Jurisdiction, US_STATES};
pub use language::Language;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
