//! Alert module - emergency alert lifecycle vocabulary.

mod contact;
mod errors;
mod request;
mod status;

pub use contact::EmergencyContact;
pub use errors::{AlertError, AlertOperation};
pub use request::{AlertRequest, DispatchReceipt};
pub use status::AlertStatus;
