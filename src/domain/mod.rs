//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `jurisdiction` - Coordinate classification rules
//! - `guidance` - Legal guides, prompt construction, parsing and fallback content
//! - `alert` - Emergency alert lifecycle, contacts and dispatch payloads

pub mod alert;
pub mod foundation;
pub mod guidance;
pub mod jurisdiction;
