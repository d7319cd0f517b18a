//! Jurisdiction module - mapping coordinates to legal regions.

mod classification;

pub use classification::{BoundingBox, ClassificationRules};
